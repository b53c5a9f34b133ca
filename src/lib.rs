pub mod config;
pub mod directory;
pub mod errors;
pub mod helpers;
pub mod localization;
pub mod provider;
pub mod questions;
pub mod server_messages;
pub mod session;
pub mod settings;

pub mod handlers {
    pub mod command_handler;
    pub mod connection_handler;
    pub mod game_handler;
    pub mod timeout_handler;
}

pub mod loggers {
    pub mod file_logger;
}

pub mod models {
    pub mod client;
    pub mod communication;
    pub mod country;
    pub mod filter;
    pub mod game;
}
