//! Scene configuration loaded from TOML

use pinkboard_core::{Color, PinkboardError, Result};
use pinkboard_particles::EmitterConfig;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

/// Root of a scene config file. Every section and key is optional.
#[derive(Debug, Clone, Default)]
pub struct SceneConfig {
    pub surface: SurfaceConfig,
    pub particles: EmitterConfig,
    pub text: TextConfig,
    pub photo: PhotoConfig,
}

/// `[surface]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
    /// Colour every frame is cleared to
    #[serde(deserialize_with = "de_color")]
    pub background: Color,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            background: Color::TRANSPARENT,
        }
    }
}

/// `[text]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Most messages on screen at once
    pub max_texts: usize,
    /// Per-frame probability of spawning a message
    pub spawn_chance: f32,
    /// Lifetime range in ticks, `[min_life, max_life)`
    pub min_life: u32,
    pub max_life: u32,
    /// Ticks of remaining life over which alpha fades from 1 to 0
    pub fade_ticks: u32,
    /// Width of the per-axis velocity range in pixels per tick
    pub speed: f32,
    pub font_size: f32,
    pub font_family: String,
    #[serde(deserialize_with = "de_color")]
    pub color: Color,
    pub messages: Vec<String>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            max_texts: 15,
            spawn_chance: 0.05,
            min_life: 400,
            max_life: 600,
            fade_ticks: 300,
            speed: 0.6,
            font_size: 24.0,
            font_family: "'Dancing Script', cursive".to_string(),
            color: Color::from_hex(0xFFB6C1),
            messages: default_messages(),
        }
    }
}

fn default_messages() -> Vec<String> {
    [
        "Chúc bé luôn vui vẻ 💕",
        "Hạnh phúc tràn đầy 💖",
        "Yêu thương ngập tràn 💫",
        "Mãi luôn mỉm cười 🌸",
        "Một ngày tuyệt vời 💐",
        "Yêu em rất nhiều 💞",
        "Mãi mãi xinh đẹp 💝",
        "Cười thật tươi 😄",
        "Hạnh phúc bên nhau 💞",
        "Luôn tiến về phía trước 🚀",
        "Giấc mơ sẽ thành hiện thực 💫",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// `[photo]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PhotoConfig {
    /// Image to composite inside the heart; none draws nothing
    pub path: Option<PathBuf>,
    /// Box the image is stretched into, centred on the surface
    pub width: f32,
    pub height: f32,
    pub brightness: f32,
    pub contrast: f32,
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            path: None,
            width: 360.0,
            height: 330.0,
            brightness: 1.1,
            contrast: 1.1,
        }
    }
}

impl SceneConfig {
    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        log::info!("Loaded scene config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let table: toml::value::Table = toml::from_str(source)?;
        Self::from_table(&table)
    }

    /// Build from an already-parsed root table. Unknown sections are ignored
    /// so other crates can share the same file.
    pub fn from_table(table: &toml::value::Table) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = table.get("surface") {
            config.surface = v.clone().try_into()?;
        }
        if let Some(v) = table.get("particles") {
            let particles = v
                .as_table()
                .ok_or_else(|| PinkboardError::Config("[particles] must be a table".into()))?;
            config.particles = EmitterConfig::from_toml(particles);
        }
        if let Some(v) = table.get("text") {
            config.text = v.clone().try_into()?;
        }
        if let Some(v) = table.get("photo") {
            config.photo = v.clone().try_into()?;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(PinkboardError::Config(format!(
                "surface must be non-empty, got {}x{}",
                self.surface.width, self.surface.height
            )));
        }
        if self.text.min_life == 0 || self.text.max_life < self.text.min_life {
            return Err(PinkboardError::Config(format!(
                "text life range [{}, {}) is invalid",
                self.text.min_life, self.text.max_life
            )));
        }
        if self.text.fade_ticks == 0 {
            return Err(PinkboardError::Config("text.fade_ticks must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.text.spawn_chance) {
            return Err(PinkboardError::Config(format!(
                "text.spawn_chance must be within [0, 1], got {}",
                self.text.spawn_chance
            )));
        }
        Ok(())
    }
}

fn de_color<'de, D>(deserializer: D) -> std::result::Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Color::parse(&s).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinkboard_particles::EmissionMode;

    #[test]
    fn empty_file_gives_defaults() {
        let config = SceneConfig::from_toml_str("").unwrap();
        assert_eq!(config.surface.width, 1280);
        assert_eq!(config.particles.length, 600);
        assert_eq!(config.text.max_texts, 15);
        assert_eq!(config.text.messages.len(), 11);
        assert!(config.photo.path.is_none());
        assert_eq!(config.surface.background, Color::TRANSPARENT);
    }

    #[test]
    fn parses_every_section() {
        let source = r##"
[surface]
width = 640
height = 480
background = "#101010"

[particles]
length = 300
emission = "accumulate"

[text]
max_texts = 3
messages = ["hello", "world"]
color = "#ffffff80"

[photo]
path = "me.jpg"
width = 200

[audio]
volume = 0.9
"##;
        let config = SceneConfig::from_toml_str(source).unwrap();
        assert_eq!(config.surface.width, 640);
        assert_eq!(config.surface.background.to_rgba8(), [16, 16, 16, 255]);
        assert_eq!(config.particles.length, 300);
        assert_eq!(config.particles.emission, EmissionMode::Accumulate);
        assert_eq!(config.text.max_texts, 3);
        assert_eq!(config.text.messages, vec!["hello", "world"]);
        assert_eq!(config.text.color.to_rgba8()[3], 128);
        // Unset keys in a present section keep defaults
        assert_eq!(config.text.min_life, 400);
        assert_eq!(config.photo.path, Some(PathBuf::from("me.jpg")));
        assert!((config.photo.width - 200.0).abs() < 1e-6);
        assert!((config.photo.height - 330.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_bad_color() {
        let err = SceneConfig::from_toml_str("[surface]\nbackground = \"pink\"").unwrap_err();
        assert!(matches!(err, PinkboardError::TomlParseError(_)));
    }

    #[test]
    fn rejects_invalid_ranges() {
        assert!(SceneConfig::from_toml_str("[text]\nmin_life = 0").is_err());
        assert!(SceneConfig::from_toml_str("[text]\nmin_life = 700").is_err());
        assert!(SceneConfig::from_toml_str("[surface]\nwidth = 0").is_err());
        assert!(SceneConfig::from_toml_str("[text]\nspawn_chance = 2.0").is_err());
        assert!(SceneConfig::from_toml_str("particles = 5").is_err());
    }
}
