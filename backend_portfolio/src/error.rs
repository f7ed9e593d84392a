use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid site settings: {0}")]
    Settings(#[from] rocket::figment::Error),

    #[error("public directory {} does not exist", .0.display())]
    MissingPublicDir(PathBuf),

    #[error("rocket failed to launch: {0}")]
    Launch(String),
}
