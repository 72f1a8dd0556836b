use crate::constants::KEY_QUIT;

/// Which inputs are allowed to end the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuitConditions {
    pub on_escape: bool,
    pub on_mouse_any: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuitEvent {
    /// A key is held, by name.
    KeyHeld(String),
    /// Mouse button 0, 1 or 2 went down this frame.
    MouseDown(u8),
    /// Explicit request, e.g. from a quit button.
    Requested,
}

impl QuitConditions {
    pub fn should_quit(&self, event: &QuitEvent) -> bool {
        let quit = match event {
            QuitEvent::KeyHeld(key) => self.on_escape && key == KEY_QUIT,
            QuitEvent::MouseDown(button) => self.on_mouse_any && *button <= 2,
            QuitEvent::Requested => true,
        };
        if quit {
            log::info!("[quit] {:?}", event);
        }
        quit
    }
}
