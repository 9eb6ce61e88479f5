use activity_rings_geometry::{MarkerPlacement, Ring};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RingMarkerProps {
    pub ring: Ring,
    pub placement: MarkerPlacement,
    #[prop_or_default]
    pub children: Children,
}

/// Inline style that centres a marker on its placement and turns it along
/// the arc. The wrapper never takes pointer events.
pub fn marker_style(placement: &MarkerPlacement) -> String {
    format!(
        "position: absolute; left: {}px; top: {}px; transform: translate(-50%, -50%) rotate({}deg); transform-origin: center; pointer-events: none;",
        placement.left_px, placement.top_px, placement.rotation_degrees
    )
}

/// Caller-supplied marker content pinned to the leading edge of a ring's arc
#[function_component(RingMarker)]
pub fn ring_marker(props: &RingMarkerProps) -> Html {
    html! {
        <div
            class={classes!("ring-arrow", format!("{}-arrow", props.ring.name()))}
            style={marker_style(&props.placement)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_style_at_start_of_ring() {
        // Zero progress on the outer ring: top centre, no rotation
        let placement = MarkerPlacement::new(Ring::Outer, 0.0, 100);
        let style = marker_style(&placement);
        assert!(style.contains("left: 50px;"), "{style}");
        assert!(style.contains("top: 10px;"), "{style}");
        assert!(style.contains("rotate(0deg)"), "{style}");
    }

    #[test]
    fn test_marker_style_is_decorative() {
        let placement = MarkerPlacement::new(Ring::Inner, 0.6, 150);
        let style = marker_style(&placement);
        assert!(style.starts_with("position: absolute;"));
        assert!(style.contains("translate(-50%, -50%)"));
        assert!(style.contains("transform-origin: center;"));
        assert!(style.ends_with("pointer-events: none;"));
    }

    #[test]
    fn test_marker_style_follows_rotation() {
        let placement = MarkerPlacement::new(Ring::Middle, 0.5, 200);
        let style = marker_style(&placement);
        assert!(style.contains(&format!("rotate({}deg)", placement.rotation_degrees)));
        assert!(style.contains(&format!("left: {}px;", placement.left_px)));
    }
}
