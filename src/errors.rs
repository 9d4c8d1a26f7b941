use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error set for the launcher menu.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Menu ---------------------------------------------------------------
    /// Input that matches none of the recognized menu tokens.
    #[error("Invalid option: {0}")]
    InvalidSelection(String),

    // ---- Launching ----------------------------------------------------------
    /// A delegated program could not be started (missing interpreter, bad
    /// script path). Failures *inside* the child are deliberately not wrapped.
    #[error("Launch error: {0}")]
    Launch(String),

    // ---- Config -------------------------------------------------------------
    /// Any issue reading the optional launcher config (invalid JSON, etc.)
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (read/write files, spawn, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config decode/encode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create an invalid-selection error from the raw input.
    pub fn invalid<S: Into<String>>(input: S) -> Self {
        Error::InvalidSelection(input.into())
    }
    /// Helper to create a generic launch error.
    pub fn launch<S: Into<String>>(msg: S) -> Self {
        Error::Launch(msg.into())
    }
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}
