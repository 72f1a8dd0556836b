//! Host-side glue for the fractal screensaver.
//!
//! The host owns windows, devices and the renderer. This crate turns its raw
//! per-frame samples (held keys, pointer hits, frame time) into navigation
//! updates and hands back a GPU-ready parameter block.

pub mod constants;
pub mod core;
pub mod events;
pub mod frame;
pub mod overlay;
pub mod quit;

pub use events::{nav_key_for, HeldKeys, NavKey, PointerInput, PointerSampler};
pub use frame::{FrameDriver, ShaderGlobals};
pub use overlay::TextLog;
pub use quit::{QuitConditions, QuitEvent};
