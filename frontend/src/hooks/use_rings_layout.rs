use std::rc::Rc;

use activity_rings_geometry::{clamp_progress, RingsLayout};
use yew::prelude::*;

use crate::services::logging::Logger;

/// Memo key for a layout. Progress is clamped first so equivalent inputs
/// (including NaN, which never equals itself) share one entry.
pub fn layout_key(progress: [f64; 3], size: u32) -> ([f64; 3], u32) {
    (progress.map(clamp_progress), size)
}

/// Ring geometry and marker placement for the current progress and size.
///
/// Recomputed whenever either input changes; values outside [0, 1] are
/// clamped by the geometry, so any `f64` is accepted.
#[hook]
pub fn use_rings_layout(progress: [f64; 3], size: u32) -> Rc<RingsLayout> {
    use_memo(layout_key(progress, size), |(progress, size)| {
        Logger::debug_with_component(
            "activity-rings",
            &format!("Recomputing ring layout for progress={:?}, size={}px", progress, size),
        );
        RingsLayout::compute(*progress, *size)
    })
}
