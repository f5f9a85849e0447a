use thiserror::Error;

pub type MtResult<T> = Result<T, MtError>;

#[derive(Error, Debug)]
pub enum MtError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Domain error: {what}")]
    Domain { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
