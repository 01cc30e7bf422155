//! Headless simulation report

use super::setup;
use anyhow::Result;
use pinkboard_core::ImageId;
use pinkboard_particles::Sprite;
use pinkboard_scene::HeartScene;
use serde::Serialize;
use std::path::PathBuf;

pub struct SimulateArgs {
    pub seconds: f64,
    pub fps: f64,
    pub seed: Option<u32>,
    pub config: Option<PathBuf>,
    pub json: bool,
}

/// Counts sampled at the end of one simulated second
#[derive(Debug, Serialize)]
struct SecondReport {
    second: u32,
    frames: u64,
    live_particles: usize,
    peak_particles: usize,
    emitted: usize,
    texts: usize,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let dt = setup::check_fps(args.fps)?;
    let settings = setup::load_settings(args.config.as_deref())?;
    let capacity = settings.scene.particles.length;
    let size = settings.scene.particles.size as f32;

    // Nothing is painted, so the sprite handle never has to resolve
    let sprite = Sprite {
        image: ImageId::from_raw(0),
        width: size,
    };
    let mut scene = HeartScene::new(settings.scene, sprite);
    let mut rng = setup::make_rng(args.seed);

    let total_frames = (args.seconds.max(0.0) * args.fps).round() as u64;
    let frames_per_second = args.fps.round().max(1.0) as u64;
    let mut reports = Vec::new();
    let mut peak = 0;

    for i in 1..=total_frames {
        scene.step(dt, &mut rng);
        let stats = scene.stats();
        peak = peak.max(stats.live_particles);

        if i % frames_per_second == 0 || i == total_frames {
            let report = SecondReport {
                second: i.div_ceil(frames_per_second) as u32,
                frames: stats.frame,
                live_particles: stats.live_particles,
                peak_particles: peak,
                emitted: stats.emitted,
                texts: stats.texts,
            };
            log::debug!("{:?}", report);
            reports.push(report);
            peak = 0;
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("Simulated {:.1}s at {} fps (capacity {})", args.seconds, args.fps, capacity);
    println!("{:>6} {:>8} {:>8} {:>9} {:>6}", "second", "live", "peak", "emitted", "texts");
    for r in &reports {
        println!(
            "{:>6} {:>8} {:>8} {:>9} {:>6}",
            r.second, r.live_particles, r.peak_particles, r.emitted, r.texts
        );
    }
    Ok(())
}
