use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Configuration for the demo's automatic progress cycling
#[derive(Clone, PartialEq)]
pub struct DemoCycleConfig {
    pub interval_ms: u32,
    pub enabled: bool,
}

impl Default for DemoCycleConfig {
    fn default() -> Self {
        Self {
            interval_ms: 2500,
            enabled: false,
        }
    }
}

/// Emit `on_tick` every `interval_ms` while cycling is enabled.
///
/// The interval is cancelled when cycling is switched off, when the config
/// changes, and on unmount.
#[hook]
pub fn use_demo_cycle(config: DemoCycleConfig, on_tick: Callback<()>) {
    use_effect_with(config, move |config| {
        let interval = if config.enabled {
            Logger::info_with_component(
                "demo-cycle",
                &format!("Cycling ring progress every {}ms", config.interval_ms),
            );
            Some(Interval::new(config.interval_ms, move || on_tick.emit(())))
        } else {
            None
        };

        // Dropping the interval clears it
        move || drop(interval)
    });
}

/// Random progress triple for the next demo step
pub fn random_progress() -> [f64; 3] {
    [js_sys::Math::random(), js_sys::Math::random(), js_sys::Math::random()]
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_random_progress_is_in_range() {
        for _ in 0..20 {
            for value in random_progress() {
                assert!((0.0..1.0).contains(&value));
            }
        }
    }
}
