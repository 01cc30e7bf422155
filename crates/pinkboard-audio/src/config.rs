//! `[audio]` configuration

use pinkboard_core::{PinkboardError, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MusicConfig {
    /// Track to loop; none leaves the toggle permanently silent
    pub path: Option<PathBuf>,
    /// Linear level, 0.0 to 1.0
    pub volume: f64,
    pub looping: bool,
    /// Button label while stopped
    pub play_label: String,
    /// Button label while playing
    pub pause_label: String,
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            path: None,
            volume: 0.4,
            looping: true,
            play_label: "🔊 Play music".to_string(),
            pause_label: "🔈 Mute music".to_string(),
        }
    }
}

impl MusicConfig {
    /// Read the `[audio]` table from a parsed config root, if present
    pub fn from_table(root: &toml::value::Table) -> Result<Self> {
        let Some(v) = root.get("audio") else {
            return Ok(Self::default());
        };
        let config: Self = v.clone().try_into()?;
        if !(0.0..=1.0).contains(&config.volume) {
            return Err(PinkboardError::Config(format!(
                "audio.volume must be within [0, 1], got {}",
                config.volume
            )));
        }
        Ok(config)
    }
}
