//! Placement and camera types shared with the host.
//!
//! These types avoid referencing any engine or windowing API. Hosts consume
//! them to position scene objects and to build camera matrices.

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Where a host should put one scene object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Rotation from Euler angles in degrees, applied Z first, then X, then Y.
#[inline]
pub fn euler_degrees(degrees: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        degrees.y.to_radians(),
        degrees.x.to_radians(),
        degrees.z.to_radians(),
    )
}

/// Right-handed orthographic camera looking at the fractal plane.
#[derive(Clone, Debug)]
pub struct OrthoCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    /// Half of the vertical view size in world units.
    pub extent: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl OrthoCamera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        let half_w = self.extent * self.aspect;
        Mat4::orthographic_rh(
            -half_w,
            half_w,
            -self.extent,
            self.extent,
            self.znear,
            self.zfar,
        )
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}
