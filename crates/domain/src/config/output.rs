use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    File,
    Stdout,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: String,

    #[serde(default)]
    pub sink: SinkKind,

    /// Truncate the report files at the start of a run instead of appending.
    #[serde(default)]
    pub overwrite: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            sink: SinkKind::default(),
            overwrite: false,
        }
    }
}

fn default_directory() -> String {
    ".".to_string()
}
