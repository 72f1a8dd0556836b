use std::env;

use anyhow::Context;
use glam::{Quat, Vec2, Vec3};
use rand::prelude::*;

use screensaver::constants::KEY_QUIT;
use screensaver::overlay::hint_text;
use screensaver::{FrameDriver, HeldKeys, PointerInput, QuitConditions, QuitEvent, TextLog};
use screensaver_core::{
    duplicate_layout, CullingMask, NavigationConfig, Placement, SphereLayout, SphereSpin, Spinner,
    TileLayout, BIRD_ORDERS, DEFAULT_POINT_COUNT,
};

const FRAME_DT_SEC: f32 = 1.0 / 60.0;
const FRAMES_PER_LOG: u32 = 60;

struct RunConfig {
    smooth_time: f32,
    frames: u32,
    seed: u64,
}

impl RunConfig {
    fn from_env() -> anyhow::Result<Self> {
        let smooth_time = match env::var("SCREENSAVER_SMOOTH_TIME") {
            Ok(v) => v.parse().context("SCREENSAVER_SMOOTH_TIME")?,
            Err(_) => NavigationConfig::default().base_smooth_time,
        };
        let frames = match env::var("SCREENSAVER_FRAMES") {
            Ok(v) => v.parse().context("SCREENSAVER_FRAMES")?,
            Err(_) => 600,
        };
        let seed = match env::var("SCREENSAVER_SEED") {
            Ok(v) => v.parse().context("SCREENSAVER_SEED")?,
            Err(_) => 42,
        };
        Ok(Self {
            smooth_time,
            frames,
            seed,
        })
    }
}

// Keys held during each scripted phase of the session, cycling.
const SCRIPT: [&[&str]; 6] = [
    &["ArrowUp"],
    &["ArrowUp", ","],
    &["w", "a"],
    &["ArrowLeft"],
    &["ArrowRight", "ArrowDown"],
    &[],
];
const PHASE_FRAMES: u32 = 90;

/// Lay out the labeled tiles and return the marker copies that spin each frame.
fn lay_out_scene() -> anyhow::Result<Vec<Placement>> {
    let layout = SphereLayout::with_count(DEFAULT_POINT_COUNT, &BIRD_ORDERS)?;
    let tiles = TileLayout::default().place(&layout);
    for (placement, label) in &tiles {
        log::debug!(
            "[scene] tile {} at ({:.2},{:.2},{:.2})",
            label,
            placement.position.x,
            placement.position.y,
            placement.position.z
        );
    }
    let markers = duplicate_layout(4, Vec3::new(0.0, 90.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
    for (i, marker) in markers.iter().enumerate() {
        log::debug!("[scene] marker {} at x={:.1}", i, marker.position.x);
    }
    log::info!("[scene] tiles={} markers={}", tiles.len(), markers.len());
    Ok(markers)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let run = RunConfig::from_env()?;
    let mut markers = lay_out_scene()?;

    let config = NavigationConfig {
        base_smooth_time: run.smooth_time,
        ..NavigationConfig::default()
    };
    let mut driver = FrameDriver::new(config, Vec2::new(-0.75, 0.1));
    let mut rng = StdRng::seed_from_u64(run.seed);
    let mut keys = HeldKeys::default();
    let mut pointer_hit = Vec3::ZERO;
    let mut log_panel = TextLog::new("session");

    let spin = SphereSpin::default();
    let spinner = Spinner {
        spin_degrees: Vec3::new(0.0, 0.5, 0.0),
        local: true,
    };
    let mut sphere_rotation = Quat::IDENTITY;
    let mut mask = CullingMask(0xffff_ffff);
    let quit = QuitConditions {
        on_escape: true,
        on_mouse_any: false,
    };

    let mut frames_run = run.frames;
    for frame in 0..run.frames {
        if frame % PHASE_FRAMES == 0 {
            keys.clear();
            let phase = (frame / PHASE_FRAMES) as usize % SCRIPT.len();
            for key in SCRIPT[phase] {
                keys.press(key);
            }
            mask.toggle_default();
        }

        // wander the pointer near the current focus, held half the time
        pointer_hit += Vec3::new(rng.gen_range(-0.02..0.02), rng.gen_range(-0.02..0.02), 0.0);
        let pointer = PointerInput {
            down: rng.gen::<f32>() < 0.5,
            hit: Some(pointer_hit),
        };
        let focus_hit = driver.is_first_frame().then(|| driver.focus_object());
        let globals = driver.step(FRAME_DT_SEC, keys.key_state(), focus_hit, pointer);

        sphere_rotation = spin.advance(sphere_rotation, FRAME_DT_SEC);
        for marker in &mut markers {
            marker.rotation = spinner.apply(marker.rotation);
        }

        if frame % FRAMES_PER_LOG == 0 {
            let params = driver.parameters();
            log_panel.set_update(hint_text(&params));
            log_panel.append_update();
            log::info!(
                "[frame {}] {} bytes={} default_layer={}",
                frame,
                hint_text(&params),
                globals.as_bytes().len(),
                mask.shows_default()
            );
        }

        // clicks are ignored; the script holds Escape on its last frame
        let event = if frame + 1 == run.frames {
            Some(QuitEvent::KeyHeld(KEY_QUIT.to_owned()))
        } else {
            pointer.down.then_some(QuitEvent::MouseDown(0))
        };
        if event.as_ref().is_some_and(|e| quit.should_quit(e)) {
            frames_run = frame + 1;
            break;
        }
    }

    let marker_angle = markers
        .last()
        .map_or(0.0, |m| m.rotation.angle_between(Quat::IDENTITY).to_degrees());
    log::info!(
        "[session] {} frames, {} lines logged, sphere yaw={:.1}deg last marker angle={:.1}deg",
        frames_run,
        log_panel.text().lines().count(),
        sphere_rotation.to_euler(glam::EulerRot::YXZ).0.to_degrees(),
        marker_angle
    );
    Ok(())
}
