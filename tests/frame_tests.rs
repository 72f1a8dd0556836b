use glam::{Vec2, Vec3};
use screensaver::constants::*;
use screensaver::core::{KeyState, NavigationConfig, DEFAULT_ORTHOGRAPHIC_EXTENT};
use screensaver::overlay::hint_text;
use screensaver::{
    FrameDriver, PointerInput, PointerSampler, QuitConditions, QuitEvent, ShaderGlobals, TextLog,
};

fn driver() -> FrameDriver {
    FrameDriver::new(NavigationConfig::default(), Vec2::ZERO)
}

#[test]
fn sampler_uses_focus_projection_only_on_first_frame() {
    let mut s = PointerSampler::default();
    let live = PointerInput {
        down: true,
        hit: Some(Vec3::new(9.0, 9.0, 0.0)),
    };
    let focus = Some(Vec3::new(1.0, 2.0, 0.0));
    assert_eq!(s.resolve(true, focus, live), Vec3::new(1.0, 2.0, 0.0));
    assert_eq!(s.resolve(false, focus, live), Vec3::new(9.0, 9.0, 0.0));
}

#[test]
fn sampler_holds_last_point_when_released() {
    let mut s = PointerSampler::default();
    let held = PointerInput {
        down: true,
        hit: Some(Vec3::new(3.0, 1.0, 0.0)),
    };
    s.resolve(false, None, held);
    let released = PointerInput {
        down: false,
        hit: Some(Vec3::new(-5.0, 0.0, 0.0)),
    };
    assert_eq!(s.resolve(false, None, released), Vec3::new(3.0, 1.0, 0.0));
    assert_eq!(s.last(), Vec3::new(3.0, 1.0, 0.0));
}

#[test]
fn sampler_miss_resolves_to_origin() {
    let mut s = PointerSampler::default();
    let miss = PointerInput {
        down: true,
        hit: None,
    };
    assert_eq!(s.resolve(true, None, miss), Vec3::ZERO);
    assert_eq!(s.resolve(false, None, miss), Vec3::ZERO);
}

#[test]
fn first_step_pursues_focus_projection() {
    let mut d = driver();
    assert!(d.is_first_frame());
    let globals = d.step(
        0.1,
        KeyState::NONE,
        Some(Vec3::new(10.0, 0.0, 0.0)),
        PointerInput::default(),
    );
    assert!(!d.is_first_frame());
    assert_eq!(globals.xy_offset, [10.0, 0.0, 0.0, 0.0]);
    assert_eq!(globals.zoom, [0.3, 0.0, 0.0, 0.0]);
    assert_eq!(globals.max_iterations, [2000.0, 0.0, 0.0, 0.0]);
}

#[test]
fn drag_offset_is_applied_to_target() {
    let mut d = FrameDriver::new(NavigationConfig::default(), Vec2::new(-0.75, 0.25));
    d.step(0.1, KeyState::NONE, Some(Vec3::ZERO), PointerInput::default());
    assert_eq!(d.parameters().focus, Vec3::new(-0.75, 0.25, 0.0));
}

#[test]
fn long_frames_are_clipped() {
    let keys = KeyState {
        zoom_in: true,
        ..KeyState::NONE
    };
    let mut a = driver();
    let mut b = driver();
    a.step(5.0, keys, None, PointerInput::default());
    b.step(MAX_FRAME_DT_SEC, keys, None, PointerInput::default());
    assert_eq!(a.parameters().zoom, b.parameters().zoom);
}

#[test]
fn invalid_frame_deltas_count_as_zero() {
    let keys = KeyState {
        zoom_in: true,
        ..KeyState::NONE
    };
    for dt in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -1.0] {
        let mut d = driver();
        d.step(dt, keys, None, PointerInput::default());
        let zoom = d.parameters().zoom;
        assert!((zoom - 0.3 * 1.05).abs() < 1e-6, "dt={dt} zoom={zoom}");
    }
}

#[test]
fn wall_clock_frame_advances() {
    let mut d = driver();
    let globals = d.frame(KeyState::NONE, Some(Vec3::ZERO), PointerInput::default());
    assert_eq!(globals.zoom[0], 0.3);
    assert!(!d.is_first_frame());
}

#[test]
fn shader_globals_are_four_vec4s() {
    let g = ShaderGlobals::default();
    assert_eq!(g.as_bytes().len(), 64);
}

#[test]
fn camera_follows_focus_object_and_extent() {
    let mut d = driver();
    let keys = KeyState {
        pan_left: true,
        extent_out: true,
        ..KeyState::NONE
    };
    d.step(0.05, keys, None, PointerInput::default());
    let p = d.parameters();
    let cam = d.camera(1.5);
    assert_eq!(cam.extent, p.orthographic_extent);
    assert!(cam.extent > DEFAULT_ORTHOGRAPHIC_EXTENT);
    assert_eq!(cam.eye.x, p.focus_object.x);
    assert!(p.focus_object.x > 0.0);
    assert_eq!(cam.eye.z, CAMERA_Z);
}

#[test]
fn text_log_appends_update_on_new_line() {
    let mut log = TextLog::new("Birds");
    log.set_update("Rheiformes");
    assert_eq!(log.append_update(), "Birds\nRheiformes");
    log.append_update();
    assert_eq!(log.text(), "Birds\nRheiformes\nRheiformes");
}

#[test]
fn hint_text_reports_parameters() {
    let d = driver();
    let hint = hint_text(&d.parameters());
    assert!(hint.contains("Zoom: 0.3000"));
    assert!(hint.contains("Iterations: 2000"));
}

#[test]
fn quit_conditions_gate_inputs() {
    let escape_only = QuitConditions {
        on_escape: true,
        on_mouse_any: false,
    };
    assert!(escape_only.should_quit(&QuitEvent::KeyHeld(KEY_QUIT.to_owned())));
    assert!(!escape_only.should_quit(&QuitEvent::KeyHeld("q".to_owned())));
    assert!(!escape_only.should_quit(&QuitEvent::MouseDown(0)));

    let mouse = QuitConditions {
        on_escape: false,
        on_mouse_any: true,
    };
    assert!(mouse.should_quit(&QuitEvent::MouseDown(2)));
    assert!(!mouse.should_quit(&QuitEvent::MouseDown(3)));
    assert!(!mouse.should_quit(&QuitEvent::KeyHeld(KEY_QUIT.to_owned())));

    assert!(QuitConditions::default().should_quit(&QuitEvent::Requested));
}

#[test]
fn scripted_session_ends_on_escape_not_on_clicks() {
    let quit = QuitConditions {
        on_escape: true,
        on_mouse_any: false,
    };
    let script = [
        QuitEvent::MouseDown(0),
        QuitEvent::MouseDown(1),
        QuitEvent::KeyHeld("w".to_owned()),
        QuitEvent::KeyHeld(KEY_QUIT.to_owned()),
        QuitEvent::MouseDown(0),
    ];
    let stop = script.iter().position(|e| quit.should_quit(e));
    assert_eq!(stop, Some(3));
}
