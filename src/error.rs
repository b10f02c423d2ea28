use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlenumError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Project not initialized. Run 'plenum init' first.")]
    NotInitialized,

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

impl PlenumError {
    /// Uniform "entity id" message shape for missing rows.
    pub fn not_found(entity: &str, id: i64) -> Self {
        PlenumError::NotFound(format!("{entity} {id}"))
    }
}

pub type Result<T> = std::result::Result<T, PlenumError>;
