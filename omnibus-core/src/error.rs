use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown stop: {0}")]
    UnknownStop(String),
    #[error("Stop already registered: {0}")]
    DuplicateStop(String),
    #[error("Bus {0} has no stops")]
    EmptyRoute(String),
    #[error("No road distance between {from} and {to}")]
    MissingDistance { from: String, to: String },
    #[error("Invalid road distance {meters} between {from} and {to}")]
    InvalidDistance {
        from: String,
        to: String,
        meters: f64,
    },
    #[error("Invalid routing settings: {0}")]
    InvalidSettings(String),
}
