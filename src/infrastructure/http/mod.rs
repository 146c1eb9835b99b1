pub mod client;
pub mod mock;

pub use client::ReqwestApiClient;
pub use mock::{MockApiClient, MockReply};
