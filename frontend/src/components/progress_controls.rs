use activity_rings_geometry::{Ring, RingConfiguration};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Read a slider percentage (0-100) as a progress fraction.
/// Values above 100 are kept so the clamping can be seen in the demo.
pub fn parse_percent(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v / 100.0)
}

#[derive(Properties, PartialEq)]
pub struct ProgressControlsProps {
    pub config: RingConfiguration,
    pub show_markers: bool,
    pub cycling: bool,

    // Event handlers
    pub on_progress_change: Callback<(Ring, f64)>,
    pub on_size_change: Callback<u32>,
    pub on_duration_change: Callback<f64>,
    pub on_toggle_markers: Callback<()>,
    pub on_toggle_background: Callback<()>,
    pub on_toggle_cycle: Callback<()>,
}

#[function_component(ProgressControls)]
pub fn progress_controls(props: &ProgressControlsProps) -> Html {
    let sliders = Ring::ALL.iter().map(|ring| {
        let ring = *ring;
        let percent = (props.config.progress[ring.index()] * 100.0).round();
        let on_progress_change = props.on_progress_change.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(progress) = parse_percent(&input.value()) {
                on_progress_change.emit((ring, progress));
            }
        });

        html! {
            <div class="form-group">
                <label for={format!("{}-progress", ring.name())}>
                    {format!("{} ({}%)", ring.label(), percent)}
                </label>
                <input
                    type="range"
                    id={format!("{}-progress", ring.name())}
                    min="0"
                    max="120"
                    step="1"
                    value={percent.to_string()}
                    {oninput}
                    disabled={props.cycling}
                />
            </div>
        }
    });

    let on_size_input = {
        let on_size_change = props.on_size_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(size) = input.value().parse::<u32>() {
                on_size_change.emit(size);
            }
        })
    };

    let on_duration_input = {
        let on_duration_change = props.on_duration_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(duration) = input.value().parse::<f64>() {
                on_duration_change.emit(duration);
            }
        })
    };

    let toggle = |callback: &Callback<()>| {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    html! {
        <section class="ring-controls">
            { for sliders }

            <div class="form-group">
                <label for="ring-size">{format!("Size ({}px)", props.config.size)}</label>
                <input
                    type="range"
                    id="ring-size"
                    min="50"
                    max="400"
                    step="10"
                    value={props.config.size.to_string()}
                    oninput={on_size_input}
                />
            </div>

            <div class="form-group">
                <label for="ring-duration">{"Animation (seconds)"}</label>
                <input
                    type="number"
                    id="ring-duration"
                    min="0.1"
                    step="0.1"
                    value={props.config.animation_duration.to_string()}
                    oninput={on_duration_input}
                />
            </div>

            <div class="ring-toggles">
                <button type="button" class="btn" onclick={toggle(&props.on_toggle_markers)}>
                    {if props.show_markers { "Hide markers" } else { "Show markers" }}
                </button>
                <button type="button" class="btn" onclick={toggle(&props.on_toggle_background)}>
                    {if props.config.background_color == RingConfiguration::CLASSIC_BACKGROUND {
                        "Transparent background"
                    } else {
                        "White background"
                    }}
                </button>
                <button type="button" class="btn btn-primary" onclick={toggle(&props.on_toggle_cycle)}>
                    {if props.cycling { "Stop cycling" } else { "Cycle progress" }}
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent("50"), Some(0.5));
        assert_eq!(parse_percent(" 100 "), Some(1.0));
        assert_eq!(parse_percent("120"), Some(1.2));
        assert_eq!(parse_percent("0"), Some(0.0));
        assert_eq!(parse_percent(""), None);
        assert_eq!(parse_percent("abc"), None);
        assert_eq!(parse_percent("NaN"), None);
    }
}
