//! Shared startup: config file, sprite, font, randomness

use anyhow::{bail, Context, Result};
use pinkboard_audio::MusicConfig;
use pinkboard_particles::{ParticleRng, Sprite};
use pinkboard_render::{Canvas, FontFace, ImageStore};
use pinkboard_scene::{heart_sprite_frame, SceneConfig};
use std::path::Path;

/// Everything read from one config file
#[derive(Debug, Default)]
pub struct Settings {
    pub scene: SceneConfig,
    pub music: MusicConfig,
}

/// Load the config file, or built-in defaults when none is given
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let settings = parse_settings(&source)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    log::info!("Loaded config from {}", path.display());
    Ok(settings)
}

pub fn parse_settings(source: &str) -> Result<Settings> {
    let root: toml::value::Table = toml::from_str(source).context("Malformed TOML")?;
    Ok(Settings {
        scene: SceneConfig::from_table(&root)?,
        music: MusicConfig::from_table(&root)?,
    })
}

/// Rasterize the heart sprite and register it with the store
pub fn register_sprite(store: &mut ImageStore, size: u32) -> Result<Sprite> {
    let pixels = Canvas::render(&heart_sprite_frame(size), store, None)
        .context("Failed to rasterize heart sprite")?;
    Ok(Sprite {
        image: store.insert(pixels),
        width: size as f32,
    })
}

pub fn load_font(path: Option<&Path>) -> Result<Option<FontFace>> {
    path.map(|p| FontFace::load(p).context("Failed to load font"))
        .transpose()
}

pub fn make_rng(seed: Option<u32>) -> ParticleRng {
    match seed {
        Some(seed) => ParticleRng::new(seed),
        None => ParticleRng::from_time(),
    }
}

/// Slowest frame rate the loops accept
const MIN_FPS: f64 = 0.01;

pub fn check_fps(fps: f64) -> Result<f64> {
    if !fps.is_finite() || fps < MIN_FPS {
        bail!("fps must be at least {MIN_FPS}, got {fps}");
    }
    Ok(1.0 / fps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_file_feeds_scene_and_music() {
        let settings = parse_settings(
            "[surface]\nwidth = 320\nheight = 240\n\n[particles]\nlength = 50\n\n[audio]\nvolume = 0.2",
        )
        .unwrap();
        assert_eq!(settings.scene.surface.width, 320);
        assert_eq!(settings.scene.particles.length, 50);
        assert!((settings.music.volume - 0.2).abs() < 1e-9);
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(parse_settings("[surface\nwidth = ").is_err());
    }

    #[test]
    fn missing_config_has_context() {
        let err = load_settings(Some(Path::new("nope/pinkboard.toml"))).unwrap_err();
        assert!(err.to_string().contains("nope/pinkboard.toml"));
    }

    #[test]
    fn fps_must_be_positive() {
        assert!(check_fps(0.0).is_err());
        assert!(check_fps(1e-300).is_err());
        assert!(check_fps(f64::INFINITY).is_err());
        assert!((check_fps(MIN_FPS).unwrap() - 100.0).abs() < 1e-9);
        assert!((check_fps(50.0).unwrap() - 0.02).abs() < 1e-12);
    }
}
