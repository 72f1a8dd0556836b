//! Smoothed drag/zoom navigation for the fractal view.
//!
//! The controller is advanced once per frame by the host with a sampled
//! pointer target, the configured drag offset, the frame delta and a snapshot
//! of the held controls. It never touches rendering state; the host reads
//! [`NavigationParameters`] back and applies them.

use glam::{Vec2, Vec3};

use crate::constants::*;

/// Held-state snapshot of every navigation control for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub iter_up: bool,
    pub iter_down: bool,
    pub pan_up: bool,
    pub pan_down: bool,
    pub pan_left: bool,
    pub pan_right: bool,
    pub extent_in: bool,
    pub extent_out: bool,
}

impl KeyState {
    pub const NONE: Self = Self {
        zoom_in: false,
        zoom_out: false,
        iter_up: false,
        iter_down: false,
        pan_up: false,
        pan_down: false,
        pan_left: false,
        pan_right: false,
        extent_in: false,
        extent_out: false,
    };

    pub fn any(&self) -> bool {
        *self != Self::NONE
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationConfig {
    /// Smoothing time in seconds. Values at or below zero are tolerated: every
    /// use is floored at [`SMOOTH_TIME_FLOOR`].
    pub base_smooth_time: f32,
    pub initial_zoom: f32,
    pub initial_max_iterations: f32,
    pub initial_orthographic_extent: f32,
    pub initial_focus_object: Vec3,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            base_smooth_time: DEFAULT_SMOOTH_TIME,
            initial_zoom: DEFAULT_ZOOM,
            initial_max_iterations: DEFAULT_MAX_ITERATIONS,
            initial_orthographic_extent: DEFAULT_ORTHOGRAPHIC_EXTENT,
            initial_focus_object: Vec3::ZERO,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    pub zoom_level: f32,
    pub max_iterations: f32,
    pub smoothed_focus: Vec3,
    pub target_focus: Vec3,
    pub is_first_frame: bool,
    /// Position of the pannable object the view is anchored to.
    pub focus_object: Vec3,
    pub orthographic_extent: f32,
}

impl NavigationState {
    fn from_config(config: &NavigationConfig) -> Self {
        Self {
            zoom_level: bounded(config.initial_zoom, ZOOM_MIN, ZOOM_MAX, DEFAULT_ZOOM),
            max_iterations: bounded(
                config.initial_max_iterations,
                ITERATIONS_MIN,
                ITERATIONS_MAX,
                DEFAULT_MAX_ITERATIONS,
            ),
            smoothed_focus: Vec3::ZERO,
            target_focus: Vec3::ZERO,
            is_first_frame: true,
            focus_object: config.initial_focus_object,
            orthographic_extent: bounded(
                config.initial_orthographic_extent,
                ORTHOGRAPHIC_EXTENT_MIN,
                ORTHOGRAPHIC_EXTENT_MAX,
                DEFAULT_ORTHOGRAPHIC_EXTENT,
            ),
        }
    }
}

/// Read-only snapshot handed to the renderer each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationParameters {
    pub focus: Vec3,
    pub zoom: f32,
    pub max_iterations: f32,
    pub orthographic_extent: f32,
    pub focus_object: Vec3,
}

#[derive(Clone, Debug)]
pub struct NavigationController {
    config: NavigationConfig,
    state: NavigationState,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(NavigationConfig::default())
    }
}

impl NavigationController {
    pub fn new(config: NavigationConfig) -> Self {
        let state = NavigationState::from_config(&config);
        Self { config, state }
    }

    /// Reset to the configured defaults with pursuit starting from the origin.
    pub fn initialize(&mut self) {
        self.state = NavigationState::from_config(&self.config);
        log::debug!(
            "[nav] init zoom={} max_iterations={}",
            self.state.zoom_level,
            self.state.max_iterations
        );
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// True until the first `tick` has run its pursuit step. Hosts use this to
    /// sample the target from the focus object's own projection instead of the
    /// live pointer.
    pub fn is_first_frame(&self) -> bool {
        self.state.is_first_frame
    }

    /// Pursuit time constant for the current zoom level.
    pub fn smoothing_time_constant(&self) -> f32 {
        (self.state.zoom_level / ZOOM_SMOOTHING_DIVISOR) * self.smooth_time(1.0)
    }

    pub fn tick(
        &mut self,
        raw_target_point: Vec3,
        drag_offset: Vec2,
        elapsed_seconds: f32,
        keys: KeyState,
    ) {
        let dt = sanitize_elapsed(elapsed_seconds);

        self.state.target_focus = raw_target_point + drag_offset.extend(0.0);
        self.pursue(dt);
        self.state.is_first_frame = false;

        self.apply_zoom(dt, keys);
        self.apply_iterations(dt, keys);
        self.apply_pan(dt, keys);
        self.apply_extent(dt, keys);
    }

    pub fn current_parameters(&self) -> NavigationParameters {
        NavigationParameters {
            focus: self.state.smoothed_focus,
            zoom: self.state.zoom_level,
            max_iterations: self.state.max_iterations,
            orthographic_extent: self.state.orthographic_extent,
            focus_object: self.state.focus_object,
        }
    }

    #[inline]
    fn smooth_time(&self, scale: f32) -> f32 {
        (self.config.base_smooth_time * scale).max(SMOOTH_TIME_FLOOR)
    }

    fn pursue(&mut self, dt: f32) {
        let tau = self.smoothing_time_constant();
        let s = &mut self.state;
        let distance = s.target_focus.distance(s.smoothed_focus);
        let step = distance * (dt / tau);
        // an infinite step snaps; NaN or negative would corrupt the focus
        if step.is_nan() || step < 0.0 {
            log::debug!("[nav] skipping pursuit step={step} tau={tau}");
            return;
        }
        s.smoothed_focus = move_towards(s.smoothed_focus, s.target_focus, step);
    }

    fn apply_zoom(&mut self, dt: f32, keys: KeyState) {
        let rate = self.smooth_time(ZOOM_RATE_SCALE);
        let zoom = &mut self.state.zoom_level;
        if keys.zoom_out {
            let next = self_scaling_step(*zoom, SHRINK_FACTOR, dt, rate);
            *zoom = bounded(next, ZOOM_MIN, ZOOM_MAX, *zoom);
            log::debug!("[nav] zoom={}", *zoom);
        }
        if keys.zoom_in {
            let next = self_scaling_step(*zoom, GROW_FACTOR, dt, rate);
            *zoom = bounded(next, ZOOM_MIN, ZOOM_MAX, *zoom);
            log::debug!("[nav] zoom={}", *zoom);
        }
    }

    fn apply_iterations(&mut self, dt: f32, keys: KeyState) {
        let rate = self.smooth_time(ZOOM_RATE_SCALE);
        let iters = &mut self.state.max_iterations;
        if keys.iter_down {
            let next = self_scaling_step(*iters, SHRINK_FACTOR, dt, rate);
            *iters = bounded(next, ITERATIONS_MIN, ITERATIONS_MAX, *iters);
            log::debug!("[nav] max_iterations={}", *iters);
        }
        if keys.iter_up {
            let next = self_scaling_step(*iters, GROW_FACTOR, dt, rate);
            *iters = bounded(next, ITERATIONS_MIN, ITERATIONS_MAX, *iters);
            log::debug!("[nav] max_iterations={}", *iters);
        }
    }

    fn apply_pan(&mut self, dt: f32, keys: KeyState) {
        let step = dt / (self.state.zoom_level * self.smooth_time(PAN_RATE_SCALE));
        let p = &mut self.state.focus_object;
        if keys.pan_up {
            p.y -= step;
        }
        if keys.pan_down {
            p.y += step;
        }
        if keys.pan_left {
            p.x += step;
        }
        if keys.pan_right {
            p.x -= step;
        }
    }

    fn apply_extent(&mut self, dt: f32, keys: KeyState) {
        let delta = dt / (self.state.zoom_level * self.smooth_time(EXTENT_RATE_SCALE));
        let extent = &mut self.state.orthographic_extent;
        if keys.extent_out {
            *extent = bounded(
                *extent * (1.0 + delta),
                ORTHOGRAPHIC_EXTENT_MIN,
                ORTHOGRAPHIC_EXTENT_MAX,
                *extent,
            );
        }
        if keys.extent_in {
            *extent = bounded(
                *extent * (1.0 - delta).max(EXTENT_MIN_FACTOR),
                ORTHOGRAPHIC_EXTENT_MIN,
                ORTHOGRAPHIC_EXTENT_MAX,
                *extent,
            );
        }
    }
}

/// Move `current` toward `target` by at most `max_delta`, never past it.
#[inline]
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let to_target = target - current;
    let distance = to_target.length();
    if distance <= max_delta || distance == 0.0 {
        return target;
    }
    current + to_target / distance * max_delta
}

/// Multiplicative update whose step scales with the value's own magnitude.
#[inline]
pub fn self_scaling_step(value: f32, factor: f32, dt: f32, rate: f32) -> f32 {
    value * factor * (1.0 + dt / (value * rate))
}

/// Clamp into `min..=max`, with NaN replaced by `fallback`.
#[inline]
fn bounded(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

#[inline]
fn sanitize_elapsed(elapsed_seconds: f32) -> f32 {
    if elapsed_seconds.is_finite() && elapsed_seconds >= 0.0 {
        elapsed_seconds
    } else {
        log::debug!("[nav] ignoring elapsed={elapsed_seconds}");
        0.0
    }
}
