//! Play/pause toggle state machine

use crate::config::MusicConfig;
use pinkboard_core::Result;

/// An audio output the toggle can start and stop.
///
/// `play` may be refused by the host (no device, autoplay policy, missing
/// track); `pause` always succeeds.
pub trait Playback {
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self);
}

/// Single button that flips music on and off and keeps its own label
pub struct MusicToggle<P: Playback> {
    playback: P,
    playing: bool,
    play_label: String,
    pause_label: String,
}

impl<P: Playback> MusicToggle<P> {
    pub fn new(playback: P, config: &MusicConfig) -> Self {
        Self {
            playback,
            playing: false,
            play_label: config.play_label.clone(),
            pause_label: config.pause_label.clone(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// What the button should read right now
    pub fn label(&self) -> &str {
        if self.playing {
            &self.pause_label
        } else {
            &self.play_label
        }
    }

    /// Flip the state. A rejected play leaves the toggle stopped.
    /// Returns whether music is playing afterwards.
    pub fn toggle(&mut self) -> bool {
        if self.playing {
            self.playback.pause();
            self.playing = false;
        } else {
            match self.playback.play() {
                Ok(()) => self.playing = true,
                Err(e) => log::warn!("Music did not start: {e}"),
            }
        }
        self.playing
    }

    pub fn playback(&self) -> &P {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut P {
        &mut self.playback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinkboard_core::PinkboardError;

    #[derive(Default)]
    struct FakePlayback {
        reject: bool,
        plays: u32,
        pauses: u32,
    }

    impl Playback for FakePlayback {
        fn play(&mut self) -> Result<()> {
            if self.reject {
                return Err(PinkboardError::PlaybackRejected("autoplay blocked".into()));
            }
            self.plays += 1;
            Ok(())
        }

        fn pause(&mut self) {
            self.pauses += 1;
        }
    }

    #[test]
    fn toggles_between_states() {
        let config = MusicConfig::default();
        let mut toggle = MusicToggle::new(FakePlayback::default(), &config);
        assert!(!toggle.is_playing());
        assert_eq!(toggle.label(), config.play_label);

        assert!(toggle.toggle());
        assert_eq!(toggle.label(), config.pause_label);

        assert!(!toggle.toggle());
        assert_eq!(toggle.label(), config.play_label);

        assert_eq!(toggle.playback().plays, 1);
        assert_eq!(toggle.playback().pauses, 1);
    }

    #[test]
    fn rejected_play_rolls_back() {
        let config = MusicConfig::default();
        let fake = FakePlayback {
            reject: true,
            ..Default::default()
        };
        let mut toggle = MusicToggle::new(fake, &config);
        assert!(!toggle.toggle());
        assert!(!toggle.is_playing());
        assert_eq!(toggle.label(), config.play_label);
        // A rejected start never pauses
        assert_eq!(toggle.playback().pauses, 0);

        // Once the host allows playback the next press works
        toggle.playback_mut().reject = false;
        assert!(toggle.toggle());
    }
}
