// Shell-level errors. Every variant states *where* things went wrong; the
// engine itself never fails once its config has validated.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("window init error: {0}")]
    WindowInit(String),
    #[error("window update error: {0}")]
    WindowUpdate(String),
    #[error("invalid surface config: {0}")]
    Config(#[from] ConfigError),
}
