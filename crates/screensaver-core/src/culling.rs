use crate::constants::DEFAULT_LAYER_MASK;

/// Camera culling mask as a plain layer bit set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CullingMask(pub u32);

impl CullingMask {
    pub fn shows_default(self) -> bool {
        self.0 & DEFAULT_LAYER_MASK != 0
    }

    /// Flip the default layer bit, leaving every other layer untouched.
    pub fn toggle_default(&mut self) -> Self {
        let flipped = !(self.0 & DEFAULT_LAYER_MASK) & DEFAULT_LAYER_MASK;
        self.0 = (self.0 & !DEFAULT_LAYER_MASK) | flipped;
        log::debug!("[culling] mask={:#x}", self.0);
        *self
    }
}
