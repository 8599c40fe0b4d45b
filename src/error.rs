use thiserror::Error;

#[derive(Error, Debug)]
pub enum JunctionError {
    #[error("{unit} has no junctioned ability \"{ability}\"")]
    UnknownAbility { unit: String, ability: String },

    #[error("ability \"{0}\" is not an active ability")]
    NotActive(String),

    #[error("ability \"{ability}\" needs at least one target")]
    MissingTarget { ability: String },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JunctionError>;
