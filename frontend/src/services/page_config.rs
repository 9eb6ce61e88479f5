use activity_rings_geometry::{ConfigError, RingConfiguration};

use super::logging::Logger;

/// Id of the `<script type="application/json">` element the host page can
/// use to configure the demo rings
pub const CONFIG_ELEMENT_ID: &str = "activity-rings-config";

/// Turn the contents of the config element into a configuration.
/// A missing or blank element means the demo defaults.
pub fn resolve_config(script: Option<&str>) -> Result<RingConfiguration, ConfigError> {
    match script.map(str::trim) {
        Some(json) if !json.is_empty() => RingConfiguration::from_json(json),
        _ => Ok(RingConfiguration::demo()),
    }
}

/// Read the ring configuration embedded in the current page.
///
/// Parse failures fall back to the demo values; configurations that parse
/// but fail validation are still used, with a warning.
pub fn load_page_config() -> RingConfiguration {
    let script = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match resolve_config(script.as_deref()) {
        Ok(config) => {
            if let Err(e) = config.validate() {
                Logger::warn_with_component("page-config", &format!("Rendering degenerate configuration: {}", e));
            }
            Logger::info_with_component(
                "page-config",
                &format!("Loaded ring configuration: progress={:?}, size={}px", config.progress, config.size),
            );
            config
        }
        Err(e) => {
            Logger::error_with_component("page-config", &format!("{}; using demo values", e));
            RingConfiguration::demo()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_script_uses_demo_values() {
        let config = resolve_config(None).unwrap();
        assert_eq!(config, RingConfiguration::demo());

        let config = resolve_config(Some("   \n  ")).unwrap();
        assert_eq!(config, RingConfiguration::demo());
    }

    #[test]
    fn test_script_overrides_defaults() {
        let config = resolve_config(Some(r##"
            { "progress": [0.8, 0.6, 0.95], "size": 240, "backgroundColor": "#000" }
        "##))
        .unwrap();
        assert_eq!(config.progress, [0.8, 0.6, 0.95]);
        assert_eq!(config.size, 240);
        assert_eq!(config.background_color, "#000");
        assert_eq!(config.animation_duration, 1.0);
    }

    #[test]
    fn test_malformed_script_is_an_error() {
        assert!(matches!(
            resolve_config(Some("{ progress: nope }")),
            Err(ConfigError::Parse(_))
        ));
    }
}
