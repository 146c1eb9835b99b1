#![allow(dead_code, unused_imports)]
pub mod fixtures;
pub mod mock_backend;

pub use fixtures::*;
pub use mock_backend::*;
