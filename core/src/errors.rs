use thiserror::Error;

/// Errors that can occur with finding the config directory.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Unable to find the config directory for melodeon.")]
    Config,
}

/// Errors that can occur while loading the extracted track metadata.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("Malformed track metadata: {0}")]
    Json(#[from] serde_json::Error),
}
