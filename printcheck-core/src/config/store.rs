//! Binary persistence for the self-check configuration
//!
//! Layout: postcard-encoded magic, version, then the config itself. The
//! caller owns the storage; this module only deals in byte slices.

use super::{ConfigError, SelfCheckConfig};

/// Magic number to identify a stored self-check config
pub const CONFIG_MAGIC: u32 = 0x5343_4843; // "SCHC"

/// Current stored config version
pub const CONFIG_VERSION: u8 = 1;

/// Largest encoded size, for sizing flash buffers
pub const MAX_ENCODED_SIZE: usize = 96;

/// Serialize `config` into `buf`, returning the used prefix
pub fn encode<'a>(config: &SelfCheckConfig, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
    postcard::to_slice(&(CONFIG_MAGIC, CONFIG_VERSION, config), buf)
        .map_err(|_| ConfigError::Serialize)
}

/// Deserialize and validate a stored config
pub fn decode(bytes: &[u8]) -> Result<SelfCheckConfig, ConfigError> {
    let (magic, rest) =
        postcard::take_from_bytes::<u32>(bytes).map_err(|_| ConfigError::Deserialize)?;
    if magic != CONFIG_MAGIC {
        return Err(ConfigError::BadMagic);
    }

    let (version, rest) =
        postcard::take_from_bytes::<u8>(rest).map_err(|_| ConfigError::Deserialize)?;
    if version != CONFIG_VERSION {
        return Err(ConfigError::VersionMismatch);
    }

    let (config, _) = postcard::take_from_bytes::<SelfCheckConfig>(rest)
        .map_err(|_| ConfigError::Deserialize)?;
    config.validate()?;

    Ok(config)
}
