//! Catalog and configuration errors.
//! One error enum covering catalog validation and config file loading.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    // Catalog validation
    #[error("Duplicate module '{name}' in catalog")]
    DuplicateModule { name: String },

    #[error("Module '{name}' is not included in any tier and is not a standalone add-on")]
    OrphanModule { name: String },

    // Role grants
    #[error("Unknown role '{role}' in configured grants")]
    UnknownRole { role: String },

    #[error("Unknown permission '{token}' granted to role '{role}'")]
    UnknownPermission { role: String, token: String },

    // IO
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // TOML
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateModule { .. } => error_code::DUPLICATE_MODULE,
            Self::OrphanModule { .. } => error_code::ORPHAN_MODULE,
            Self::UnknownRole { .. } => error_code::UNKNOWN_ROLE,
            Self::UnknownPermission { .. } => error_code::UNKNOWN_PERMISSION,
            Self::Io(_) => error_code::IO_ERROR,
            Self::TomlParse(_) => error_code::CONFIG_PARSE_ERROR,
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
