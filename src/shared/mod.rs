pub mod csrf;
pub mod events;

pub use csrf::*;
pub use events::*;
