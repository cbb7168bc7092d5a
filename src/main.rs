//! Lissajous Grid entry point
//!
//! Headless native driver: runs the engine at 60 Hz for a little over one
//! cycle, switching the grid size halfway, and prints what a renderer would get.

use lissajous_grid::render::FrameBuffers;
use lissajous_grid::{Engine, EngineSettings};

/// Frame delta at 60 Hz (ms)
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Square viewport side (pixels)
const VIEWPORT: f64 = 1080.0;
/// Upper bound on simulated frames per cycle (one hour at 60 Hz)
const MAX_FRAMES_PER_CYCLE: u64 = 60 * 60 * 60;
/// Extra frames run past the first cycle boundary
const TRAILING_FRAMES: u64 = 10;

/// Frames needed to cover one cycle of `cycle_ms`, capped
fn frames_per_cycle(cycle_ms: f64) -> u64 {
    let frames = (cycle_ms / FRAME_MS).ceil();
    if frames.is_finite() && frames >= 1.0 {
        (frames as u64).min(MAX_FRAMES_PER_CYCLE)
    } else {
        1
    }
}

fn main() {
    env_logger::init();
    log::info!("Lissajous Grid (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => EngineSettings::load(path),
        None => EngineSettings::default(),
    };

    let mut engine = Engine::new(&settings);
    engine.on_viewport_resize(VIEWPORT, VIEWPORT);

    let cycle_frames = frames_per_cycle(engine.cycle_duration_ms());
    let switch_at = cycle_frames / 2;
    let mut redraws = 0u64;

    for frame in 0..cycle_frames + TRAILING_FRAMES {
        if frame == switch_at {
            let next = if engine.circle_count().get() == 6 { 4 } else { 6 };
            engine.set_circle_count(next);
            log::info!("Switched to {next} circles at frame {frame}");
        }
        engine.advance(FRAME_MS);
        if engine.take_redraw() {
            redraws += 1;
        }
    }

    let snapshot = engine.snapshot();
    let buffers = FrameBuffers::build(&snapshot);
    let first = snapshot.grid.get(0, 0);

    println!("circles per axis : {}", engine.circle_count());
    println!("circle radius    : {:.2}", snapshot.layout.radius);
    println!("phase            : {:.2}", snapshot.phase);
    println!("points per cell  : {}", first.len());
    println!("total points     : {}", snapshot.grid.point_count());
    println!("redraws          : {redraws}");
    println!("vertices         : {}", buffers.vertex_count());

    engine.on_detach();
    log::info!("Done");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_per_cycle_default() {
        assert_eq!(frames_per_cycle(15_000.0), 900);
    }

    #[test]
    fn test_frames_per_cycle_is_capped() {
        assert_eq!(frames_per_cycle(1e300), MAX_FRAMES_PER_CYCLE);
        assert_eq!(frames_per_cycle(f64::MAX), MAX_FRAMES_PER_CYCLE);
        assert_eq!(frames_per_cycle(1.0), 1);
    }

    #[test]
    fn test_huge_settings_duration_is_bounded() {
        let settings = EngineSettings::from_json(r#"{ "cycle_duration_ms": 1e300 }"#).unwrap();
        let engine = Engine::new(&settings);
        let frames = frames_per_cycle(engine.cycle_duration_ms());
        assert!(frames.checked_add(TRAILING_FRAMES).is_some());
        assert!(frames / 2 > 0);
    }
}
