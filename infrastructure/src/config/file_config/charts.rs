//! Chart output configuration from TOML (`[charts]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChartsConfig {
    /// Directory receiving generated PNG files
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for FileChartsConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("out"),
            width: 960,
            height: 640,
        }
    }
}
