pub mod analysis;
pub mod clu;
pub mod config;
pub mod error;
pub mod render;
pub mod server;

pub use error::{Error, Result};
