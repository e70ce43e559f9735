mod config;
mod tictactoe_config;
mod ui_config;

pub use config::{Config, get_config_manager};
pub use tictactoe_config::TicTacToeConfig;
pub use ui_config::UiConfig;
