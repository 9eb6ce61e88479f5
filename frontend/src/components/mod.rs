pub mod activity_rings;
pub mod progress_controls;
pub mod ring_marker;

pub use activity_rings::{ActivityRings, ActivityRingsProps};
pub use ring_marker::RingMarker;
