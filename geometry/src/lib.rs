use std::f64::consts::PI;

mod config;

pub use config::{ConfigError, RingConfiguration};

/// Edge length of the normalized coordinate space the rings are drawn in
pub const VIEWBOX_SIZE: f64 = 100.0;
/// Centre of every ring, in viewbox units (both axes)
pub const RING_CENTER: f64 = 50.0;
/// Radius of the outer ring; each ring further in is `RING_SPACING` smaller
pub const OUTER_RADIUS: f64 = 40.0;
pub const RING_SPACING: f64 = 10.0;

/// Clamp a progress fraction to [0, 1]. NaN counts as no progress.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

/// One of the three concentric rings, outermost first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ring {
    /// Move
    Outer,
    /// Exercise
    Middle,
    /// Stand
    Inner,
}

impl Ring {
    pub const ALL: [Ring; 3] = [Ring::Outer, Ring::Middle, Ring::Inner];

    /// Position of the ring in a progress triple
    pub fn index(self) -> usize {
        match self {
            Ring::Outer => 0,
            Ring::Middle => 1,
            Ring::Inner => 2,
        }
    }

    /// Radius in viewbox units: 40, 30 and 20
    pub fn radius(self) -> f64 {
        OUTER_RADIUS - RING_SPACING * self.index() as f64
    }

    pub fn circumference(self) -> f64 {
        2.0 * PI * self.radius()
    }

    /// Activity tracked by the ring in the fitness-summary layout
    pub fn label(self) -> &'static str {
        match self {
            Ring::Outer => "Move",
            Ring::Middle => "Exercise",
            Ring::Inner => "Stand",
        }
    }

    /// Short name used for class names and element ids ("outer", "middle", "inner")
    pub fn name(self) -> &'static str {
        match self {
            Ring::Outer => "outer",
            Ring::Middle => "middle",
            Ring::Inner => "inner",
        }
    }
}

/// Stroke-dash parameters for one ring's progress arc.
///
/// Drawing a circle of `radius` with `stroke-dasharray = circumference` and
/// `stroke-dashoffset = dash_offset` fills exactly `progress` of the ring.
/// An offset of zero is a full ring, an offset equal to the circumference is
/// an empty one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub ring: Ring,
    /// Clamped progress the offsets were computed from
    pub progress: f64,
    pub radius: f64,
    pub circumference: f64,
    pub dash_offset: f64,
}

impl RingGeometry {
    pub fn new(ring: Ring, progress: f64) -> Self {
        let progress = clamp_progress(progress);
        let circumference = ring.circumference();
        Self {
            ring,
            progress,
            radius: ring.radius(),
            circumference,
            dash_offset: circumference * (1.0 - progress),
        }
    }
}

/// Where a marker sits on a ring: the leading edge of its drawn arc.
///
/// Angles are in degrees with 0 pointing right and increasing clockwise (the
/// y axis points down), so progress 0 sits at -90 (the top of the ring).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPlacement {
    pub ring: Ring,
    pub angle_degrees: f64,
    /// Position in viewbox units
    pub x: f64,
    pub y: f64,
    /// Position in container pixels
    pub left_px: f64,
    pub top_px: f64,
    /// Rotation that turns the marker's "up" along the arc's tangent
    pub rotation_degrees: f64,
}

impl MarkerPlacement {
    pub fn new(ring: Ring, progress: f64, container_size: u32) -> Self {
        let angle_degrees = -90.0 + clamp_progress(progress) * 360.0;
        let radians = angle_degrees.to_radians();
        let radius = ring.radius();

        let x = RING_CENTER + radius * radians.cos();
        let y = RING_CENTER + radius * radians.sin();

        let scale = f64::from(container_size) / VIEWBOX_SIZE;

        Self {
            ring,
            angle_degrees,
            x,
            y,
            left_px: x * scale,
            top_px: y * scale,
            rotation_degrees: angle_degrees + 90.0,
        }
    }
}

/// Everything derived from a progress triple and container size for one render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingsLayout {
    pub size: u32,
    pub rings: [RingGeometry; 3],
    pub markers: [MarkerPlacement; 3],
}

impl RingsLayout {
    pub fn compute(progress: [f64; 3], size: u32) -> Self {
        let rings = Ring::ALL.map(|ring| RingGeometry::new(ring, progress[ring.index()]));
        let markers =
            Ring::ALL.map(|ring| MarkerPlacement::new(ring, progress[ring.index()], size));
        Self { size, rings, markers }
    }

    pub fn ring(&self, ring: Ring) -> &RingGeometry {
        &self.rings[ring.index()]
    }

    pub fn marker(&self, ring: Ring) -> &MarkerPlacement {
        &self.markers[ring.index()]
    }
}
