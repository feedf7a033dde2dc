use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the variables the service expects.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar { name: String, reason: String },

    /// Only some of the primary user variables are set.
    ///
    /// `PRIMARY_USER_USERNAME`, `PRIMARY_USER_EMAIL` and `PRIMARY_USER_PASSWORD` must be set
    /// together or not at all.
    #[error("Primary user configuration is incomplete, missing: {0}")]
    IncompletePrimaryUser(String),
}
