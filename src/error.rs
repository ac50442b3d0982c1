/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*            Error types              */
/***************************************/

/// Rejections raised at submission time.
///
/// These are the only failures the core can produce: once a request has been
/// accepted by a car it is guaranteed to be serviced to completion, so
/// nothing after `submit` carries an error path. A request that no car is
/// currently eligible for is not an error either; it simply stays queued and
/// is retried on every matching pass.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Origin or destination lies outside the building.
    #[error("floor {floor} is outside the building (floors 0..{n_floors})")]
    InvalidFloorRange { floor: u8, n_floors: u8 },

    /// Origin equals destination; there is no trip to make.
    #[error("origin and destination are both floor {floor}")]
    DegenerateRequest { floor: u8 },
}

/// Failures while loading or validating the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
