//! Golden-angle spiral layout of points on the unit sphere.

use std::f64::consts::PI;

use fnv::FnvHashMap;
use glam::{Quat, Vec3};

use crate::constants::{
    DEFAULT_SPHERE_SCALING, DEFAULT_SPIN_SPEED_DEG, MAX_SPHERE_POINTS, TILE_ROTATION_DEGREES,
};
use crate::error::{CoreError, Result};
use crate::state::{euler_degrees, Placement};

/// Generate `count` unit directions spread evenly over the sphere.
///
/// Points run from the south pole (`y` near -1) to the north pole, each one
/// turned by the golden angle from the previous. The result is deterministic.
pub fn generate(count: i64) -> Result<Vec<Vec3>> {
    if count <= 0 {
        return Err(CoreError::InvalidArgument(format!(
            "sphere point count must be positive, got {count}"
        )));
    }
    if count > MAX_SPHERE_POINTS {
        return Err(CoreError::InvalidArgument(format!(
            "sphere point count {count} exceeds {MAX_SPHERE_POINTS}"
        )));
    }
    let len = count as usize;

    let increment = PI * (3.0 - 5.0_f64.sqrt());
    let offset = 2.0 / count as f64;

    let mut points = Vec::new();
    points.try_reserve_exact(len).map_err(|e| {
        CoreError::InvalidArgument(format!("sphere point count {count} does not fit in memory: {e}"))
    })?;
    for k in 0..len {
        let k = k as f64;
        let y = k * offset - 1.0 + offset / 2.0;
        // clamp guards the poles against rounding below zero
        let r = (1.0 - y * y).max(0.0).sqrt();
        let phi = k * increment;
        points.push(Vec3::new(
            (phi.cos() * r) as f32,
            y as f32,
            (phi.sin() * r) as f32,
        ));
    }
    log::debug!("[sphere] generated {} points", points.len());
    Ok(points)
}

/// Sphere directions paired index-wise with caller labels.
#[derive(Clone, Debug)]
pub struct SphereLayout {
    entries: Vec<(Vec3, String)>,
    by_label: FnvHashMap<String, usize>,
}

impl SphereLayout {
    /// One point per label.
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        Self::with_count(labels.len() as i64, labels)
    }

    /// `count` points labeled with the first `count` labels.
    pub fn with_count<S: AsRef<str>>(count: i64, labels: &[S]) -> Result<Self> {
        let directions = generate(count)?;
        if directions.len() > labels.len() {
            return Err(CoreError::InvalidArgument(format!(
                "{} sphere points requested but only {} labels supplied",
                directions.len(),
                labels.len()
            )));
        }
        let entries: Vec<(Vec3, String)> = directions
            .into_iter()
            .zip(labels)
            .map(|(dir, label)| (dir, label.as_ref().to_owned()))
            .collect();
        let mut by_label = FnvHashMap::default();
        for (i, (_, label)) in entries.iter().enumerate() {
            by_label.entry(label.clone()).or_insert(i);
        }
        Ok(Self { entries, by_label })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(Vec3, &str)> {
        self.entries.get(index).map(|(d, l)| (*d, l.as_str()))
    }

    /// Index of the first entry carrying `label`.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.by_label.get(label).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec3, &str)> {
        self.entries.iter().map(|(d, l)| (*d, l.as_str()))
    }
}

/// Turns sphere directions into tile placements around a center.
#[derive(Clone, Debug)]
pub struct TileLayout {
    pub scaling: f32,
    pub center: Vec3,
    pub tile_rotation_degrees: Vec3,
}

impl Default for TileLayout {
    fn default() -> Self {
        Self {
            scaling: DEFAULT_SPHERE_SCALING,
            center: Vec3::ZERO,
            tile_rotation_degrees: TILE_ROTATION_DEGREES,
        }
    }
}

impl TileLayout {
    pub fn place<'a>(&self, layout: &'a SphereLayout) -> Vec<(Placement, &'a str)> {
        let rotation = euler_degrees(self.tile_rotation_degrees);
        layout
            .iter()
            .map(|(dir, label)| {
                (
                    Placement {
                        position: dir * self.scaling + self.center,
                        rotation,
                    },
                    label,
                )
            })
            .collect()
    }
}

/// Constant yaw of the parent holding the tiles.
#[derive(Clone, Copy, Debug)]
pub struct SphereSpin {
    pub speed_deg_per_sec: f32,
}

impl Default for SphereSpin {
    fn default() -> Self {
        Self {
            speed_deg_per_sec: DEFAULT_SPIN_SPEED_DEG,
        }
    }
}

impl SphereSpin {
    pub fn advance(&self, rotation: Quat, dt_sec: f32) -> Quat {
        let step = Quat::from_rotation_y((self.speed_deg_per_sec * dt_sec).to_radians());
        (rotation * step).normalize()
    }
}
