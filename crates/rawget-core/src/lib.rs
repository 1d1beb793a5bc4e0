pub mod config;
pub mod logging;

pub mod error;
pub mod fetch;
pub mod request;
pub mod stream;
pub mod target;
pub mod transport;
