use glam::Vec3;

/// Pointer sample for one frame.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerInput {
    /// Any mouse button is held.
    pub down: bool,
    /// World-space hit of the host's screen-to-world raycast, if it hit.
    pub hit: Option<Vec3>,
}

/// Resolves the raw navigation target from pointer samples.
///
/// On the first frame the target comes from casting through the focus
/// object's own screen position. Afterwards it follows the pointer while a
/// button is held and otherwise holds the last sampled point. A raycast that
/// misses resolves to the origin.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerSampler {
    last: Vec3,
}

impl PointerSampler {
    pub fn resolve(
        &mut self,
        first_frame: bool,
        focus_object_hit: Option<Vec3>,
        pointer: PointerInput,
    ) -> Vec3 {
        if first_frame {
            self.last = focus_object_hit.unwrap_or(Vec3::ZERO);
        } else if pointer.down {
            self.last = pointer.hit.unwrap_or(Vec3::ZERO);
        }
        self.last
    }

    pub fn last(&self) -> Vec3 {
        self.last
    }
}
