/// Error type for the skiptower crate.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// Indicates that the configured maximum tower height is not in range `[1, 31]`.
  #[error("invalid max height {requested}, expected a value in [1, 31]")]
  InvalidConfiguration {
    /// The rejected maximum height.
    requested: i128,
  },

  /// Indicates that an operation which requires a definite match did not find
  /// an equal element in the skiplist.
  #[error("element not found in the skiplist")]
  ElementNotFound,
}
