//! Background track playback wrapping Kira's AudioManager
//!
//! Degrades gracefully when no audio device is available: every `play` is
//! then rejected and the toggle stays stopped.

use crate::config::MusicConfig;
use crate::toggle::Playback;
use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle};
use kira::sound::PlaybackState;
use kira::{AudioManager, AudioManagerSettings, DefaultBackend, Tween};
use pinkboard_core::{PinkboardError, Result};
use std::path::Path;

/// One looping background track on the main mixer track
pub struct MusicPlayer {
    manager: Option<AudioManager<DefaultBackend>>,
    sound: Option<StaticSoundData>,
    handle: Option<StaticSoundHandle>,
    volume: f64,
    looping: bool,
}

impl MusicPlayer {
    pub fn new(config: &MusicConfig) -> Self {
        // Try to create the audio manager; gracefully fail if no device
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| log::warn!("Audio: no device available ({e}), running silent"))
            .ok();

        Self {
            manager,
            sound: None,
            handle: None,
            volume: config.volume,
            looping: config.looping,
        }
    }

    /// Whether audio is actually available
    pub fn is_available(&self) -> bool {
        self.manager.is_some()
    }

    /// Decode the track into memory. Replaces any previously loaded track.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let sound = StaticSoundData::from_file(path).map_err(|e| {
            PinkboardError::AudioError(format!("Failed to load '{}': {}", path.display(), e))
        })?;
        log::info!("Loaded music track {}", path.display());
        self.sound = Some(sound);
        self.handle = None;
        Ok(())
    }

    pub fn has_track(&self) -> bool {
        self.sound.is_some()
    }
}

impl Playback for MusicPlayer {
    fn play(&mut self) -> Result<()> {
        let Some(manager) = &mut self.manager else {
            return Err(PinkboardError::PlaybackRejected("no audio device".into()));
        };

        // Resume a paused track instead of starting it over
        if let Some(handle) = &mut self.handle {
            if handle.state() != PlaybackState::Stopped {
                handle.resume(Tween::default());
                return Ok(());
            }
        }

        let sound = self
            .sound
            .as_ref()
            .ok_or_else(|| PinkboardError::PlaybackRejected("no track loaded".into()))?
            .clone();

        let mut data = sound.volume(amplitude_to_db(self.volume));
        if self.looping {
            data = data.loop_region(..);
        }

        let handle = manager
            .play(data)
            .map_err(|e| PinkboardError::PlaybackRejected(format!("failed to start track: {e}")))?;
        self.handle = Some(handle);
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(handle) = &mut self.handle {
            handle.pause(Tween::default());
        }
    }
}

/// Convert linear amplitude (0.0–1.0) to decibels
fn amplitude_to_db(amplitude: f64) -> kira::Decibels {
    if amplitude <= 0.0 {
        kira::Decibels::SILENCE
    } else {
        kira::Decibels((20.0 * (amplitude as f32).log10()).max(-60.0))
    }
}
