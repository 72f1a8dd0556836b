pub mod constants;
pub mod culling;
pub mod duplicate;
pub mod error;
pub mod motion;
pub mod navigation;
pub mod sphere;
pub mod state;

pub use constants::*;
pub use culling::*;
pub use duplicate::*;
pub use error::*;
pub use motion::*;
pub use navigation::*;
pub use sphere::*;
pub use state::*;
