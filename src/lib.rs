#![doc = include_str!("../readme.md")]

pub mod client;
pub mod config;
pub mod render;
pub mod server;
pub mod util;

#[doc(hidden)]
pub mod error;

#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use error::{Error, Result};
