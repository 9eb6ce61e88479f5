//! Activity rings: three concentric animated progress rings rendered as SVG,
//! with optional markers at the leading edge of each ring's arc.
//!
//! ```ignore
//! html! {
//!     <ActivityRings progress={[0.1, 0.5, 0.5]} size={200} />
//! }
//! ```

pub mod components;
pub mod hooks;
pub mod services;

pub use activity_rings_geometry as geometry;
pub use components::{ActivityRings, ActivityRingsProps, RingMarker};
