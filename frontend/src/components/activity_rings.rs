use std::sync::atomic::{AtomicUsize, Ordering};

use activity_rings_geometry::{Ring, RingConfiguration, RingGeometry, RING_CENTER};
use yew::prelude::*;

use super::ring_marker::RingMarker;
use crate::hooks::use_rings_layout::use_rings_layout;

pub const STROKE_WIDTH: f64 = 8.0;

static NEXT_INSTANCE: AtomicUsize = AtomicUsize::new(0);

/// Colours for one ring: gradient top, gradient bottom and the track behind it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingPalette {
    pub top: &'static str,
    pub bottom: &'static str,
    pub track: &'static str,
}

impl RingPalette {
    pub fn for_ring(ring: Ring) -> Self {
        match ring {
            Ring::Outer => Self {
                top: "#fa114f",
                bottom: "#b3093a",
                track: "rgba(250, 17, 79, 0.2)",
            },
            Ring::Middle => Self {
                top: "#a6ff00",
                bottom: "#5fb300",
                track: "rgba(166, 255, 0, 0.2)",
            },
            Ring::Inner => Self {
                top: "#00fff6",
                bottom: "#00a8b5",
                track: "rgba(0, 255, 246, 0.2)",
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ActivityRingsProps {
    /// Progress per ring (outer, middle, inner); clamped to [0, 1]
    pub progress: [f64; 3],
    /// Edge length of the square chart in pixels
    #[prop_or(RingConfiguration::DEFAULT_SIZE)]
    pub size: u32,
    /// Seconds a progress change takes to animate
    #[prop_or(RingConfiguration::DEFAULT_ANIMATION_DURATION)]
    pub animation_duration: f64,
    #[prop_or(AttrValue::Static(RingConfiguration::TRANSPARENT_BACKGROUND))]
    pub background_color: AttrValue,
    /// Marker for the outer ring (Move)
    #[prop_or_default]
    pub outer_arrow: Option<Html>,
    /// Marker for the middle ring (Exercise)
    #[prop_or_default]
    pub middle_arrow: Option<Html>,
    /// Marker for the inner ring (Stand)
    #[prop_or_default]
    pub inner_arrow: Option<Html>,
}

impl ActivityRingsProps {
    fn marker(&self, ring: Ring) -> Option<&Html> {
        match ring {
            Ring::Outer => self.outer_arrow.as_ref(),
            Ring::Middle => self.middle_arrow.as_ref(),
            Ring::Inner => self.inner_arrow.as_ref(),
        }
    }
}

pub fn container_style(size: u32, animation_duration: f64) -> String {
    format!(
        "width: {size}px; height: {size}px; position: relative; --animation-duration: {animation_duration}s;"
    )
}

pub fn svg_style(background_color: &str) -> String {
    format!("display: block; width: 100%; height: 100%; background: {background_color};")
}

/// Dash parameters plus the transition that animates offset changes
pub fn arc_style(geometry: &RingGeometry, animation_duration: f64) -> String {
    format!(
        "stroke-linecap: round; stroke-dasharray: {}; stroke-dashoffset: {}; transition: stroke-dashoffset {}s ease-in-out;",
        geometry.circumference, geometry.dash_offset, animation_duration
    )
}

/// Gradient ids carry the instance number so charts sharing a page keep their own
pub fn gradient_id(instance: usize, ring: Ring) -> String {
    format!("activity-rings-{}-{}-gradient", instance, ring.name())
}

fn gradient(instance: usize, ring: Ring) -> Html {
    let palette = RingPalette::for_ring(ring);
    // Arcs are drawn a quarter turn anticlockwise, so this runs top to bottom on screen
    html! {
        <linearGradient id={gradient_id(instance, ring)} x1="100%" y1="0%" x2="0%" y2="0%">
            <stop offset="0%" class={format!("{}-ring-gradient", ring.name())} stop-color={palette.top} />
            <stop offset="100%" class={format!("{}-ring-gradient-dark", ring.name())} stop-color={palette.bottom} />
        </linearGradient>
    }
}

fn background_track(ring: Ring) -> Html {
    html! {
        <circle
            class="background-ring"
            cx={RING_CENTER.to_string()}
            cy={RING_CENTER.to_string()}
            r={ring.radius().to_string()}
            fill="none"
            stroke={RingPalette::for_ring(ring).track}
            stroke-width={STROKE_WIDTH.to_string()}
            style="pointer-events: none;"
        />
    }
}

fn progress_arc(instance: usize, geometry: &RingGeometry, animation_duration: f64) -> Html {
    let ring = geometry.ring;
    html! {
        <g
            class={classes!("activity-ring", format!("{}-ring", ring.name()))}
            transform={format!("rotate(-90 {} {})", RING_CENTER, RING_CENTER)}
        >
            <circle
                cx={RING_CENTER.to_string()}
                cy={RING_CENTER.to_string()}
                r={geometry.radius.to_string()}
                fill="none"
                stroke={format!("url(#{})", gradient_id(instance, ring))}
                stroke-width={STROKE_WIDTH.to_string()}
                style={arc_style(geometry, animation_duration)}
            />
        </g>
    }
}

/// Three concentric progress rings with optional markers at each arc's end.
///
/// Markers only render for rings whose marker prop is set; the arcs render
/// regardless.
#[function_component(ActivityRings)]
pub fn activity_rings(props: &ActivityRingsProps) -> Html {
    let instance = *use_state(|| NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed));
    let layout = use_rings_layout(props.progress, props.size);

    let markers = Ring::ALL.iter().filter_map(|ring| {
        props.marker(*ring).map(|content| {
            html! {
                <RingMarker ring={*ring} placement={*layout.marker(*ring)}>
                    { content.clone() }
                </RingMarker>
            }
        })
    });

    html! {
        <div
            class="activity-rings-container"
            style={container_style(props.size, props.animation_duration)}
        >
            <svg viewBox="0 0 100 100" style={svg_style(&props.background_color)}>
                <defs>
                    { for Ring::ALL.map(|ring| gradient(instance, ring)) }
                </defs>
                { for Ring::ALL.map(background_track) }
                { for Ring::ALL.map(|ring| progress_arc(instance, layout.ring(ring), props.animation_duration)) }
            </svg>
            { for markers }
        </div>
    }
}
