use serde::Deserialize;

use crate::media::MediaType;

/// Configuration for the malformed-payload handler
///
/// Detail defaults on: a codec complaint about request shape is what the
/// caller needs to fix their input.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PayloadConfig {
    /// Whether the original codec error text is echoed in the response
    #[serde(default = "default_show_details")]
    pub show_details: bool,
    /// Body format of emitted responses
    #[serde(default)]
    pub media_type: MediaType,
}

impl Default for PayloadConfig {
    fn default() -> Self {
        Self {
            show_details: true,
            media_type: MediaType::Json,
        }
    }
}

/// Configuration for the generic fault handler
///
/// Detail defaults off: a runtime fault's trace may carry internals that
/// do not belong in a caller-visible payload.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaultConfig {
    /// Whether the error trace is echoed in the response
    #[serde(default)]
    pub show_details: bool,
    /// Body format of emitted responses
    #[serde(default)]
    pub media_type: MediaType,
}

#[allow(clippy::missing_const_for_fn)]
fn default_show_details() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_config_defaults_to_details_and_json() {
        let config = PayloadConfig::default();

        assert!(config.show_details);
        assert_eq!(config.media_type, MediaType::Json);
    }

    #[test]
    fn fault_config_defaults_to_no_details_and_json() {
        let config = FaultConfig::default();

        assert!(!config.show_details);
        assert_eq!(config.media_type, MediaType::Json);
    }

    #[test]
    fn empty_toml_yields_the_documented_defaults() {
        let payload: PayloadConfig = toml::from_str("").unwrap();
        let fault: FaultConfig = toml::from_str("").unwrap();

        assert!(payload.show_details);
        assert!(!fault.show_details);
    }

    #[test]
    fn fields_deserialize_from_toml() {
        let config: FaultConfig = toml::from_str(
            r#"
            show_details = true
            media_type = "xml"
            "#,
        )
        .unwrap();

        assert!(config.show_details);
        assert_eq!(config.media_type, MediaType::Xml);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<PayloadConfig>("verbose = true").is_err());
    }
}
