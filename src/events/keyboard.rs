use crate::constants::*;
use crate::core::KeyState;
use smallvec::SmallVec;

/// One navigation control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    ZoomIn,
    ZoomOut,
    IterUp,
    IterDown,
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ExtentIn,
    ExtentOut,
}

#[inline]
pub fn nav_key_for(key: &str) -> Option<NavKey> {
    match key {
        KEY_ZOOM_IN => Some(NavKey::ZoomIn),
        KEY_ZOOM_OUT => Some(NavKey::ZoomOut),
        KEY_ITER_UP => Some(NavKey::IterUp),
        KEY_ITER_DOWN => Some(NavKey::IterDown),
        KEY_EXTENT_IN => Some(NavKey::ExtentIn),
        KEY_EXTENT_OUT => Some(NavKey::ExtentOut),
        KEY_PAN_UP | "W" => Some(NavKey::PanUp),
        KEY_PAN_DOWN | "S" => Some(NavKey::PanDown),
        KEY_PAN_LEFT | "A" => Some(NavKey::PanLeft),
        KEY_PAN_RIGHT | "D" => Some(NavKey::PanRight),
        _ => None,
    }
}

/// Navigation keys currently held down, fed from keydown/keyup events.
#[derive(Clone, Debug, Default)]
pub struct HeldKeys {
    held: SmallVec<[NavKey; 8]>,
}

impl HeldKeys {
    /// Returns false for keys that do not drive navigation.
    pub fn press(&mut self, key: &str) -> bool {
        match nav_key_for(key) {
            Some(k) => {
                if !self.held.contains(&k) {
                    self.held.push(k);
                    log::debug!("[keys] down {:?}", k);
                }
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self, key: &str) {
        if let Some(k) = nav_key_for(key) {
            self.held.retain(|h| *h != k);
        }
    }

    /// Drop everything, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: NavKey) -> bool {
        self.held.contains(&key)
    }

    pub fn key_state(&self) -> KeyState {
        let mut ks = KeyState::NONE;
        for k in &self.held {
            match k {
                NavKey::ZoomIn => ks.zoom_in = true,
                NavKey::ZoomOut => ks.zoom_out = true,
                NavKey::IterUp => ks.iter_up = true,
                NavKey::IterDown => ks.iter_down = true,
                NavKey::PanUp => ks.pan_up = true,
                NavKey::PanDown => ks.pan_down = true,
                NavKey::PanLeft => ks.pan_left = true,
                NavKey::PanRight => ks.pan_right = true,
                NavKey::ExtentIn => ks.extent_in = true,
                NavKey::ExtentOut => ks.extent_out = true,
            }
        }
        ks
    }
}
