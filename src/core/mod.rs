pub use screensaver_core::*;
