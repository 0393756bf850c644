pub mod api;
pub mod config;
pub mod error;
pub mod friends;
pub mod model;
pub mod profile;
pub mod session;
pub mod state;
pub mod storage;

pub use error::Result;
