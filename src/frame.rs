use crate::constants::*;
use crate::core::{
    KeyState, NavigationConfig, NavigationController, NavigationParameters, OrthoCamera,
};
use crate::events::{PointerInput, PointerSampler};
use glam::{Vec2, Vec3};
use instant::Instant;

/// Fractal shader globals, one vec4 per parameter with the value in `.x`
/// (the offset uses `.xyz`).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShaderGlobals {
    pub xy_offset: [f32; 4],
    pub zoom: [f32; 4],
    pub max_iterations: [f32; 4],
    pub orthographic_extent: [f32; 4],
}

impl From<&NavigationParameters> for ShaderGlobals {
    fn from(p: &NavigationParameters) -> Self {
        Self {
            xy_offset: [p.focus.x, p.focus.y, p.focus.z, 0.0],
            zoom: [p.zoom, 0.0, 0.0, 0.0],
            max_iterations: [p.max_iterations, 0.0, 0.0, 0.0],
            orthographic_extent: [p.orthographic_extent, 0.0, 0.0, 0.0],
        }
    }
}

impl ShaderGlobals {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Drives the navigation controller once per host frame.
pub struct FrameDriver {
    pub drag_offset: Vec2,
    controller: NavigationController,
    sampler: PointerSampler,
    last_instant: Instant,
    last_params: NavigationParameters,
}

impl FrameDriver {
    pub fn new(config: NavigationConfig, drag_offset: Vec2) -> Self {
        let mut controller = NavigationController::new(config);
        controller.initialize();
        let last_params = controller.current_parameters();
        log::info!(
            "[frame] start zoom={} max_iterations={} extent={}",
            last_params.zoom,
            last_params.max_iterations,
            last_params.orthographic_extent
        );
        Self {
            drag_offset,
            controller,
            sampler: PointerSampler::default(),
            last_instant: Instant::now(),
            last_params,
        }
    }

    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    /// Focus object position the host should cast through on the first frame.
    pub fn focus_object(&self) -> Vec3 {
        self.controller.state().focus_object
    }

    pub fn is_first_frame(&self) -> bool {
        self.controller.is_first_frame()
    }

    /// Measure the wall-clock delta since the previous frame and step.
    pub fn frame(
        &mut self,
        keys: KeyState,
        focus_object_hit: Option<Vec3>,
        pointer: PointerInput,
    ) -> ShaderGlobals {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        self.step(dt.as_secs_f32(), keys, focus_object_hit, pointer)
    }

    /// Step with an explicit frame delta, clipped to `0..=`[`MAX_FRAME_DT_SEC`].
    /// A non-finite delta counts as zero.
    pub fn step(
        &mut self,
        dt_sec: f32,
        keys: KeyState,
        focus_object_hit: Option<Vec3>,
        pointer: PointerInput,
    ) -> ShaderGlobals {
        let dt_sec = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, MAX_FRAME_DT_SEC)
        } else {
            0.0
        };
        let first = self.controller.is_first_frame();
        let target = self.sampler.resolve(first, focus_object_hit, pointer);
        self.controller.tick(target, self.drag_offset, dt_sec, keys);

        let params = self.controller.current_parameters();
        if params.zoom != self.last_params.zoom
            || params.max_iterations != self.last_params.max_iterations
        {
            log::debug!(
                "[frame] zoom={:.5} max_iterations={:.1}",
                params.zoom,
                params.max_iterations
            );
        }
        self.last_params = params;
        ShaderGlobals::from(&params)
    }

    pub fn parameters(&self) -> NavigationParameters {
        self.last_params
    }

    /// Orthographic camera above the focus object for the current extent.
    pub fn camera(&self, aspect: f32) -> OrthoCamera {
        let p = &self.last_params;
        OrthoCamera {
            eye: Vec3::new(p.focus_object.x, p.focus_object.y, CAMERA_Z),
            target: Vec3::new(p.focus_object.x, p.focus_object.y, 0.0),
            up: Vec3::Y,
            aspect,
            extent: p.orthographic_extent,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}
