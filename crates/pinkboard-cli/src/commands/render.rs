//! Offline frame-sequence render command

use super::setup;
use anyhow::{Context, Result};
use pinkboard_render::{Canvas, ImageLoader, ImageStore};
use pinkboard_scene::HeartScene;
use std::path::PathBuf;

pub struct RenderArgs {
    pub frames: u32,
    pub fps: f64,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub output_dir: PathBuf,
    pub photo: Option<PathBuf>,
    pub font: Option<PathBuf>,
    pub seed: Option<u32>,
    pub config: Option<PathBuf>,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let dt = setup::check_fps(args.fps)?;
    let mut settings = setup::load_settings(args.config.as_deref())?;
    let surface = &mut settings.scene.surface;
    if let Some(width) = args.width {
        surface.width = width;
    }
    if let Some(height) = args.height {
        surface.height = height;
    }
    if args.photo.is_some() {
        settings.scene.photo.path = args.photo.clone();
    }
    let (width, height) = (surface.width, surface.height);

    let mut store = ImageStore::new();
    let sprite = setup::register_sprite(&mut store, settings.scene.particles.size)?;
    let font = setup::load_font(args.font.as_deref())?;
    let photo_path = settings.scene.photo.path.clone();

    let mut scene = HeartScene::new(settings.scene, sprite);

    // Offline output should show the photo from the first frame, so wait for it
    if let Some(path) = photo_path {
        match ImageLoader::spawn(&path).wait() {
            Ok(img) => scene.set_photo(store.insert(img)),
            Err(e) => println!("Warning: rendering without photo ({e})"),
        }
    }

    std::fs::create_dir_all(&args.output_dir).with_context(|| {
        format!("Failed to create output directory {}", args.output_dir.display())
    })?;

    let mut rng = setup::make_rng(args.seed);
    let mut canvas = Canvas::new(width, height).context("Failed to create canvas")?;

    for i in 0..args.frames {
        let frame = scene.step(dt, &mut rng);
        canvas
            .execute(&frame, &store, font.as_ref())
            .context("Failed to paint frame")?;
        let path = args.output_dir.join(format!("frame_{:04}.png", i));
        canvas
            .save_png(&path)
            .with_context(|| format!("Failed to save frame {}", i))?;
        log::debug!("frame {}: {:?}", i, scene.stats());
    }

    let stats = scene.stats();
    println!(
        "Rendered {} frames of {}x{} to {} ({} live particles, {} texts at the end)",
        args.frames,
        width,
        height,
        args.output_dir.display(),
        stats.live_particles,
        stats.texts
    );

    Ok(())
}
