pub mod cli;
pub mod config;
pub mod probe;
pub mod queries;
pub mod response;
pub mod server;
