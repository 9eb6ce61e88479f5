use serde::{Deserialize, Serialize};

/// Errors reported by the opt-in configuration checks.
///
/// Rendering never fails on these; they exist for hosts that want to reject
/// degenerate configurations before handing them to the component.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid ring configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Size must be a positive number of pixels")]
    InvalidSize,
    #[error("Animation duration must be a positive number of seconds, got {0}")]
    InvalidDuration(f64),
    #[error("Background color cannot be empty")]
    EmptyBackground,
}

/// Serializable part of an activity rings configuration.
///
/// Marker payloads are not part of it: they are renderable content passed
/// straight to the component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingConfiguration {
    /// Progress per ring: outer, middle, inner
    pub progress: [f64; 3],
    /// Edge length of the square container in pixels
    #[serde(default = "RingConfiguration::default_size")]
    pub size: u32,
    /// Seconds a dash-offset change takes to animate
    #[serde(default = "RingConfiguration::default_animation_duration")]
    pub animation_duration: f64,
    #[serde(default = "RingConfiguration::default_background_color")]
    pub background_color: String,
}

impl RingConfiguration {
    pub const DEFAULT_SIZE: u32 = 150;
    pub const DEFAULT_ANIMATION_DURATION: f64 = 1.0;
    pub const TRANSPARENT_BACKGROUND: &'static str = "transparent";
    /// Background of the marker-less card variant
    pub const CLASSIC_BACKGROUND: &'static str = "#fff";

    pub fn new(progress: [f64; 3]) -> Self {
        Self {
            progress,
            size: Self::DEFAULT_SIZE,
            animation_duration: Self::DEFAULT_ANIMATION_DURATION,
            background_color: Self::default_background_color(),
        }
    }

    /// Ring values shown by the demo page when nothing else is configured
    pub fn demo() -> Self {
        Self::new([0.1, 0.5, 0.5])
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Strict check for degenerate values. The component renders them anyway.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::InvalidSize);
        }
        if !self.animation_duration.is_finite() || self.animation_duration <= 0.0 {
            return Err(ConfigError::InvalidDuration(self.animation_duration));
        }
        if self.background_color.trim().is_empty() {
            return Err(ConfigError::EmptyBackground);
        }
        Ok(())
    }

    fn default_size() -> u32 {
        Self::DEFAULT_SIZE
    }

    fn default_animation_duration() -> f64 {
        Self::DEFAULT_ANIMATION_DURATION
    }

    fn default_background_color() -> String {
        Self::TRANSPARENT_BACKGROUND.to_string()
    }
}

impl Default for RingConfiguration {
    fn default() -> Self {
        Self::new([0.0, 0.0, 0.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RingConfiguration::new([0.2, 0.4, 0.6]);
        assert_eq!(config.size, 150);
        assert_eq!(config.animation_duration, 1.0);
        assert_eq!(config.background_color, "transparent");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_json() {
        let config = RingConfiguration::from_json(r#"{"progress": [0.1, 0.5, 0.5]}"#).unwrap();
        assert_eq!(config, RingConfiguration::demo());
    }

    #[test]
    fn test_parse_full_json() {
        let json = r##"{
            "progress": [1.2, -0.1, 0.75],
            "size": 300,
            "animationDuration": 2.5,
            "backgroundColor": "#fff"
        }"##;
        let config = RingConfiguration::from_json(json).unwrap();
        assert_eq!(config.progress, [1.2, -0.1, 0.75]);
        assert_eq!(config.size, 300);
        assert_eq!(config.animation_duration, 2.5);
        assert_eq!(config.background_color, RingConfiguration::CLASSIC_BACKGROUND);

        // Out of range progress is kept as given and clamped by the geometry
        let layout = crate::RingsLayout::compute(config.progress, config.size);
        assert_eq!(layout.rings[0].progress, 1.0);
        assert_eq!(layout.rings[1].progress, 0.0);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            RingConfiguration::from_json("{}"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            RingConfiguration::from_json(r#"{"progress": [0.1, 0.2]}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            RingConfiguration::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        let mut config = RingConfiguration::demo();
        config.size = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSize)));

        let mut config = RingConfiguration::demo();
        config.animation_duration = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDuration(_))));

        config.animation_duration = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDuration(_))));

        config.animation_duration = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDuration(_))));

        let mut config = RingConfiguration::demo();
        config.background_color = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyBackground)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::InvalidSize.to_string(),
            "Size must be a positive number of pixels"
        );
        assert_eq!(
            ConfigError::InvalidDuration(-2.0).to_string(),
            "Animation duration must be a positive number of seconds, got -2"
        );
    }

    #[test]
    fn test_serialize_uses_public_option_names() {
        let value = serde_json::to_value(RingConfiguration::demo()).unwrap();
        assert_eq!(value["size"], 150);
        assert_eq!(value["animationDuration"], 1.0);
        assert_eq!(value["backgroundColor"], "transparent");
    }
}
