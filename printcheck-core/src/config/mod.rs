//! Configuration types
//!
//! Board-agnostic self-check settings, optionally stored as postcard
//! binary data.

pub mod hardware;
#[cfg(feature = "serde")]
pub mod store;
pub mod types;

pub use hardware::*;
#[cfg(feature = "serde")]
pub use store::{decode, encode, CONFIG_MAGIC, CONFIG_VERSION};
pub use types::*;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Output buffer too small, or serializer failure
    Serialize,
    /// Stored bytes could not be decoded
    Deserialize,
    /// Stored blob does not start with the config magic
    BadMagic,
    /// Stored blob was written by an incompatible version
    VersionMismatch,
    /// A value is out of its allowed range
    Invalid(&'static str),
    /// Pin string could not be parsed
    InvalidPin,
}
