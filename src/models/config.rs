use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Image extensions recognised as icons when nothing else is configured.
pub const DEFAULT_ICON_EXTENSIONS: [&str; 3] = ["jpg", "ico", "png"];

/// User configuration from `config.yaml`
///
/// Every field is optional in the file; command line flags are merged on top.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(rename = "Iconic_Settings", default)]
    pub iconic_settings: IconicSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconicSettings {
    #[serde(rename = "Recursive", default)]
    pub recursive: bool,

    #[serde(rename = "Ignore Hidden", default)]
    pub ignore_hidden: bool,

    /// Extra folders that never receive an icon
    #[serde(rename = "Ignore", default)]
    pub ignore: Vec<String>,

    #[serde(rename = "Icon Extensions", default = "default_icon_extensions")]
    pub icon_extensions: Vec<String>,

    /// Overrides the assignment history location under the cache dir
    #[serde(rename = "History File", default)]
    pub history_file: Option<Utf8PathBuf>,

    #[serde(rename = "Log To File", default)]
    pub log_to_file: bool,

    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,
}

impl Default for IconicSettings {
    fn default() -> Self {
        Self {
            recursive: false,
            ignore_hidden: false,
            ignore: Vec::new(),
            icon_extensions: default_icon_extensions(),
            history_file: None,
            log_to_file: false,
            debug_mode: false,
        }
    }
}

fn default_icon_extensions() -> Vec<String> {
    DEFAULT_ICON_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}
