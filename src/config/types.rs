use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub extract: ExtractConfig,
}

/// Knobs for locating and unwrapping the embedded listing payload. The
/// defaults reproduce the production page format; the marker attribute name
/// itself (`data-hypernova-key`) is fixed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractConfig {
    #[serde(default = "default_marker_value")]
    pub marker_value: String,
    /// Leading characters of the block text that are not JSON ("<!--").
    #[serde(default = "default_prefix_len")]
    pub payload_prefix_len: usize,
    /// Trailing characters of the block text that are not JSON ("-->").
    #[serde(default = "default_suffix_len")]
    pub payload_suffix_len: usize,
    #[serde(default = "default_property_type_label")]
    pub property_type_label: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            marker_value: default_marker_value(),
            payload_prefix_len: default_prefix_len(),
            payload_suffix_len: default_suffix_len(),
            property_type_label: default_property_type_label(),
        }
    }
}

fn default_marker_value() -> String {
    "p3show_marketplacebundlejs".into()
}

fn default_prefix_len() -> usize {
    4
}

fn default_suffix_len() -> usize {
    3
}

fn default_property_type_label() -> String {
    "Property type:".into()
}
