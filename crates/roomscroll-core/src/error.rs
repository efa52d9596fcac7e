use thiserror::Error;

/// Non-fatal navigation outcomes. None of these reach the user; the
/// coordinator logs them and carries on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavError {
    #[error("unknown navigation target `{0}`")]
    UnknownTarget(String),
    #[error("degenerate geometry for `{0}`")]
    DegenerateGeometry(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown setting `{0}`")]
    UnknownKey(String),
    #[error("setting `{key}` has invalid value `{value}`")]
    InvalidValue { key: String, value: String },
    #[error("setting `{key}` = {value} is out of range ({range})")]
    OutOfRange {
        key: String,
        value: f64,
        range: &'static str,
    },
}
