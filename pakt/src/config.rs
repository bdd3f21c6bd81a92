//! Provider configuration.
//!
//! Configuration is explicit: the harness resolves it once at process
//! start (typically via [`ProviderConfig::from_env`]) and injects it
//! into the constructor. The library itself never reads ambient
//! environment state during a call.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable naming the descriptor directory.
pub const ENV_API_DIR: &str = "PAKT_API_DIR";

/// Environment variable naming the engine's API socket path.
pub const ENV_API_SOCK: &str = "PAKT_API_SOCK";

/// Where the descriptor catalog and the engine socket live.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Directory tree searched for `*.api.json` descriptor files.
    pub descriptor_dir: PathBuf,
    /// Unix socket path of the engine's API endpoint.
    pub socket: PathBuf,
}

impl ProviderConfig {
    /// Creates a configuration from explicit paths.
    pub fn new(descriptor_dir: impl AsRef<Path>, socket: impl AsRef<Path>) -> Self {
        Self {
            descriptor_dir: descriptor_dir.as_ref().to_owned(),
            socket: socket.as_ref().to_owned(),
        }
    }

    /// Resolves the configuration from [`ENV_API_DIR`] and
    /// [`ENV_API_SOCK`].
    ///
    /// Call once at process start; fails if either variable is unset.
    pub fn from_env() -> Result<Self> {
        let descriptor_dir = env::var_os(ENV_API_DIR).ok_or(Error::MissingEnv(ENV_API_DIR))?;
        let socket = env::var_os(ENV_API_SOCK).ok_or(Error::MissingEnv(ENV_API_SOCK))?;
        Ok(Self {
            descriptor_dir: PathBuf::from(descriptor_dir),
            socket: PathBuf::from(socket),
        })
    }
}
