//! Real-time loop: paces the scene to the wall clock and drives the music toggle

use super::setup;
use anyhow::{Context, Result};
use pinkboard_audio::{MusicPlayer, MusicToggle};
use pinkboard_render::{Canvas, ImageLoader, ImageStore};
use pinkboard_scene::HeartScene;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

pub struct PlayArgs {
    pub seconds: Option<f64>,
    pub fps: f64,
    pub music: Option<PathBuf>,
    pub photo: Option<PathBuf>,
    pub font: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub snapshot: Option<PathBuf>,
}

enum Input {
    Toggle,
    Quit,
}

pub fn run(args: PlayArgs) -> Result<()> {
    let frame_time = Duration::try_from_secs_f64(setup::check_fps(args.fps)?)
        .context("Frame time out of range")?;
    let mut settings = setup::load_settings(args.config.as_deref())?;
    if args.photo.is_some() {
        settings.scene.photo.path = args.photo.clone();
    }
    if args.music.is_some() {
        settings.music.path = args.music.clone();
    }

    let mut store = ImageStore::new();
    let sprite = setup::register_sprite(&mut store, settings.scene.particles.size)?;
    let font = setup::load_font(args.font.as_deref())?;
    let mut loader = settings.scene.photo.path.clone().map(ImageLoader::spawn);

    let mut player = MusicPlayer::new(&settings.music);
    if !player.is_available() {
        println!("Warning: no audio device, music toggle will stay muted");
    }
    if let Some(path) = &settings.music.path {
        if let Err(e) = player.load(path) {
            log::warn!("{e}");
        }
    }
    let mut toggle = MusicToggle::new(player, &settings.music);

    let (width, height) = (settings.scene.surface.width, settings.scene.surface.height);
    let mut scene = HeartScene::new(settings.scene, sprite);
    let mut canvas = Canvas::new(width, height).context("Failed to create canvas")?;
    let mut rng = setup::make_rng(None);
    let input = spawn_stdin_reader();

    println!("[{}]  Enter toggles music, q + Enter quits", toggle.label());

    let started = Instant::now();
    let mut last_report = 0;
    loop {
        let tick_start = Instant::now();

        // Photo becomes drawable on the first frame after it finishes loading
        if let Some(pending) = loader.as_mut() {
            match pending.poll() {
                Some(Ok(img)) => {
                    scene.set_photo(store.insert(img));
                    loader = None;
                }
                Some(Err(_)) => loader = None,
                None => {}
            }
        }

        let frame = scene.tick(&mut rng);
        canvas
            .execute(&frame, &store, font.as_ref())
            .context("Failed to paint frame")?;

        let mut quit = false;
        while let Ok(event) = input.try_recv() {
            match event {
                Input::Toggle => {
                    toggle.toggle();
                    println!("[{}]", toggle.label());
                }
                Input::Quit => quit = true,
            }
        }

        let elapsed = started.elapsed().as_secs_f64();
        let second = elapsed as u64;
        if second > last_report {
            last_report = second;
            log::debug!("{}s: {:?}", second, scene.stats());
        }
        if quit || args.seconds.is_some_and(|limit| elapsed >= limit) {
            break;
        }

        if let Some(rest) = frame_time.checked_sub(tick_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    if toggle.is_playing() {
        toggle.toggle();
    }

    if let Some(path) = &args.snapshot {
        canvas
            .save_png(path)
            .with_context(|| format!("Failed to save snapshot {}", path.display()))?;
        println!("Saved snapshot to {}", path.display());
    }

    let stats = scene.stats();
    println!(
        "Played {} frames in {:.1}s",
        stats.frame,
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Forward stdin lines as toggle/quit events. The thread ends at EOF.
fn spawn_stdin_reader() -> Receiver<Input> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let event = if line.trim().eq_ignore_ascii_case("q") {
                Input::Quit
            } else {
                Input::Toggle
            };
            if tx.send(event).is_err() {
                break;
            }
        }
    });
    rx
}
