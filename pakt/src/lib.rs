//! Control-plane API client for the pakt packet engine.
//!
//! A test harness drives the engine through a [`Provider`]: connect to
//! the engine's Unix API socket, issue typed operations, let the single
//! status-code convention be checked on every reply, disconnect. The
//! wire protocol lives in [`pakt_proto`]; this crate owns the call
//! contract, the descriptor catalog, and the before/after hook seam.
//!
//! # Quick start
//!
//! ```no_run
//! use pakt::{Provider, ProviderConfig};
//! use pakt_proto::BridgeDomain;
//!
//! # fn main() -> pakt::Result<()> {
//! let config = ProviderConfig::from_env()?;
//! let mut api = Provider::new("test-harness", "pakt", config)?;
//! api.connect()?;
//! api.bridge_domain_add_del(BridgeDomain { bd_id: 1, ..BridgeDomain::default() })?;
//! let output = api.cli("show version")?;
//! println!("{}", output.unwrap_or_default());
//! api.disconnect()?;
//! # Ok(())
//! # }
//! ```

mod catalog;
mod config;
mod error;
mod hook;
#[cfg(unix)]
mod provider;
#[cfg(unix)]
mod session;

pub use catalog::{Catalog, FieldDescriptor, OperationDescriptor};
pub use config::{ENV_API_DIR, ENV_API_SOCK, ProviderConfig};
pub use error::{Error, Result};
pub use hook::{Hook, TraceHook};
#[cfg(unix)]
pub use provider::{Provider, mac_to_u64};
#[cfg(unix)]
pub use session::Session;
