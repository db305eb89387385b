pub mod config;
pub mod error;
pub mod faultcenter;
pub mod server;
pub mod sources;
