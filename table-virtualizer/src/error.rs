use thiserror::Error;

/// Rejected table configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Every row must occupy at least one unit of the scroll axis.
    #[error("row height must be greater than zero")]
    ZeroRowHeight,
}
