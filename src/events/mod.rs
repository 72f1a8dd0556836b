pub mod keyboard;
pub mod pointer;

pub use keyboard::{nav_key_for, HeldKeys, NavKey};
pub use pointer::{PointerInput, PointerSampler};
