use std::rc::Rc;

use activity_rings::components::progress_controls::ProgressControls;
use activity_rings::geometry::{Ring, RingConfiguration};
use activity_rings::hooks::use_demo_cycle::{random_progress, use_demo_cycle, DemoCycleConfig};
use activity_rings::services::{page_config::load_page_config, Logger};
use activity_rings::ActivityRings;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct DemoState {
    config: RingConfiguration,
    show_markers: bool,
    cycling: bool,
}

impl DemoState {
    fn new(config: RingConfiguration) -> Self {
        Self {
            config,
            show_markers: true,
            cycling: false,
        }
    }
}

enum DemoAction {
    SetProgress(Ring, f64),
    SetAllProgress([f64; 3]),
    SetSize(u32),
    SetDuration(f64),
    ToggleMarkers,
    ToggleBackground,
    ToggleCycle,
}

impl Reducible for DemoState {
    type Action = DemoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DemoAction::SetProgress(ring, progress) => next.config.progress[ring.index()] = progress,
            DemoAction::SetAllProgress(progress) => next.config.progress = progress,
            DemoAction::SetSize(size) => next.config.size = size,
            DemoAction::SetDuration(duration) => next.config.animation_duration = duration,
            DemoAction::ToggleMarkers => next.show_markers = !next.show_markers,
            DemoAction::ToggleBackground => {
                next.config.background_color = if next.config.background_color == RingConfiguration::CLASSIC_BACKGROUND {
                    RingConfiguration::TRANSPARENT_BACKGROUND.to_string()
                } else {
                    RingConfiguration::CLASSIC_BACKGROUND.to_string()
                };
            }
            DemoAction::ToggleCycle => next.cycling = !next.cycling,
        }
        next.into()
    }
}

/// Chevron pointing along the direction the ring fills
fn arrow(size: u32) -> Html {
    let edge = (f64::from(size) * 0.06).to_string();
    html! {
        <svg width={edge.clone()} height={edge} viewBox="0 0 10 10">
            <path
                d="M3 2 L7 5 L3 8"
                fill="none"
                stroke="#000"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

#[function_component(App)]
fn app() -> Html {
    let state = use_reducer(|| DemoState::new(load_page_config()));

    let on_tick = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(DemoAction::SetAllProgress(random_progress())))
    };
    use_demo_cycle(
        DemoCycleConfig {
            enabled: state.cycling,
            ..DemoCycleConfig::default()
        },
        on_tick,
    );

    let on_progress_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(ring, progress): (Ring, f64)| {
            dispatcher.dispatch(DemoAction::SetProgress(ring, progress))
        })
    };
    let on_size_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |size: u32| dispatcher.dispatch(DemoAction::SetSize(size)))
    };
    let on_duration_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |duration: f64| {
            if duration <= 0.0 {
                Logger::warn_with_component("demo", &format!("Non-positive animation duration {}s", duration));
            }
            dispatcher.dispatch(DemoAction::SetDuration(duration))
        })
    };
    let on_toggle_markers = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(DemoAction::ToggleMarkers))
    };
    let on_toggle_background = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(DemoAction::ToggleBackground))
    };
    let on_toggle_cycle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(DemoAction::ToggleCycle))
    };

    let config = &state.config;
    let marker = || state.show_markers.then(|| arrow(config.size));

    html! {
        <main class="demo">
            <h1>{"Activity Rings"}</h1>
            <div class="demo-chart">
                <ActivityRings
                    progress={config.progress}
                    size={config.size}
                    animation_duration={config.animation_duration}
                    background_color={AttrValue::from(config.background_color.clone())}
                    outer_arrow={marker()}
                    middle_arrow={marker()}
                    inner_arrow={marker()}
                />
            </div>
            <ProgressControls
                config={config.clone()}
                show_markers={state.show_markers}
                cycling={state.cycling}
                {on_progress_change}
                {on_size_change}
                {on_duration_change}
                {on_toggle_markers}
                {on_toggle_background}
                {on_toggle_cycle}
            />
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
