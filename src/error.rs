use thiserror::Error;

/// Errors that abort the game
///
/// Everything here is fatal: they happen at startup (or when the display
/// goes away mid-frame) and end the process.
#[derive(Debug, Error)]
pub enum GameError {
    /// SDL or one of its subsystems failed to initialize
    #[error("SDL initialization failed: {0}")]
    Sdl(String),

    /// Window or canvas could not be created
    #[error("Window creation failed: {0}")]
    Window(String),

    /// A required sprite is missing or unreadable
    #[error("Failed to load {path}: {reason}")]
    Asset { path: String, reason: String },

    /// Config file exists but is not valid JSON for `GameConfig`
    #[error("Invalid config {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Config parsed but holds values the game cannot run with
    #[error("Invalid config value: {0}")]
    InvalidConfig(String),

    /// Config file could not be read
    #[error("Could not read config {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A draw call failed
    #[error("Render error: {0}")]
    Render(String),
}
