use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct UiConfig {
    pub use_colors: bool,
}

impl Validate for UiConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}
