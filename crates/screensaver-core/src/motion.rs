//! Small per-frame motion helpers: constant spin, rate-driven rotation and
//! min/max oscillation.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};

use crate::state::euler_degrees;

/// Applies a fixed Euler rotation (degrees) every fixed step.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spinner {
    pub spin_degrees: Vec3,
    /// Rotate about the object's own axes instead of the world axes.
    pub local: bool,
}

impl Spinner {
    pub fn apply(&self, rotation: Quat) -> Quat {
        let step = euler_degrees(self.spin_degrees);
        let next = if self.local {
            rotation * step
        } else {
            step * rotation
        };
        next.normalize()
    }
}

/// Rotates about a world axis and a local axis at independently adjustable
/// rates. The rate vectors give the axis; the multipliers give degrees per
/// second.
#[derive(Clone, Debug)]
pub struct Rotator {
    pub world_multiplier: f32,
    pub local_multiplier: f32,
    world_rates: Vec3,
    local_rates: Vec3,
}

impl Rotator {
    pub fn new(
        world_rates: Vec3,
        local_rates: Vec3,
        world_multiplier: f32,
        local_multiplier: f32,
    ) -> Self {
        Self {
            world_multiplier,
            local_multiplier,
            world_rates,
            local_rates,
        }
    }

    pub fn world_rates(&self) -> Vec3 {
        self.world_rates
    }

    pub fn local_rates(&self) -> Vec3 {
        self.local_rates
    }

    pub fn set_world_rates(&mut self, rates: Vec3) {
        self.world_rates = rates;
    }

    pub fn add_world_rates(&mut self, delta: Vec3) {
        self.world_rates += delta;
    }

    pub fn scale_world_rates(&mut self, factor: f32) {
        self.world_rates *= factor;
    }

    pub fn scale_world_rates_by(&mut self, factors: Vec3) {
        self.world_rates *= factors;
    }

    pub fn set_local_rates(&mut self, rates: Vec3) {
        self.local_rates = rates;
    }

    pub fn add_local_rates(&mut self, delta: Vec3) {
        self.local_rates += delta;
    }

    pub fn scale_local_rates(&mut self, factor: f32) {
        self.local_rates *= factor;
    }

    pub fn scale_local_rates_by(&mut self, factors: Vec3) {
        self.local_rates *= factors;
    }

    /// Advance `rotation` by `dt_sec`. A zero rate vector contributes nothing.
    pub fn update(&self, rotation: Quat, dt_sec: f32) -> Quat {
        let mut next = rotation;
        if let Some(axis) = self.world_rates.try_normalize() {
            let angle = (dt_sec * self.world_multiplier).to_radians();
            next = Quat::from_axis_angle(axis, angle) * next;
        }
        if let Some(axis) = self.local_rates.try_normalize() {
            let angle = (dt_sec * self.local_multiplier).to_radians();
            next *= Quat::from_axis_angle(axis, angle);
        }
        next.normalize()
    }
}

/// Value range with a starting phase in 0..1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScalarRange {
    pub min: f32,
    pub max: f32,
    pub phase: f32,
}

/// Per-component value range with per-component starting phases.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VectorRange {
    pub min: Vec3,
    pub max: Vec3,
    pub phase: Vec3,
}

/// Cosine oscillation between a min and a max, starting at the phase point.
#[derive(Clone, Debug, Default)]
pub struct Oscillator {
    pub scalar: ScalarRange,
    pub vector: VectorRange,
    pub rate_hz: f32,
    /// Sample clock; zero or less samples continuously.
    pub resolution_samples_per_second: f32,
}

impl Oscillator {
    pub fn initial_scalar(&self) -> f32 {
        lerp(self.scalar.min, self.scalar.max, self.scalar.phase)
    }

    pub fn initial_vector(&self) -> Vec3 {
        let r = &self.vector;
        Vec3::new(
            lerp(r.min.x, r.max.x, r.phase.x),
            lerp(r.min.y, r.max.y, r.phase.y),
            lerp(r.min.z, r.max.z, r.phase.z),
        )
    }

    pub fn sample_scalar(&self, elapsed_sec: f32) -> f32 {
        let r = &self.scalar;
        lerp(r.min, r.max, self.blend(r.phase, elapsed_sec))
    }

    pub fn sample_vector(&self, elapsed_sec: f32) -> Vec3 {
        let r = &self.vector;
        Vec3::new(
            lerp(r.min.x, r.max.x, self.blend(r.phase.x, elapsed_sec)),
            lerp(r.min.y, r.max.y, self.blend(r.phase.y, elapsed_sec)),
            lerp(r.min.z, r.max.z, self.blend(r.phase.z, elapsed_sec)),
        )
    }

    // 0.5 - 0.5cos(θ) equals `phase` at t = 0.
    fn blend(&self, phase: f32, elapsed_sec: f32) -> f32 {
        let t = if self.resolution_samples_per_second > 0.0 {
            (elapsed_sec * self.resolution_samples_per_second).floor()
                / self.resolution_samples_per_second
        } else {
            elapsed_sec
        };
        let start = (1.0 - 2.0 * phase.clamp(0.0, 1.0)).acos();
        0.5 - 0.5 * (start + TAU * self.rate_hz * t).cos()
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}
