//! Error types for pakt operations.

use std::path::PathBuf;

/// Alias for `Result<T, pakt::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by pakt control-plane operations.
///
/// [`Error::CallFailed`] is the one failure this layer owns; transport
/// and descriptor-file failures pass through untranslated.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A reply carried a status code different from the expected one.
    #[error("{op}: expected retval {expected}, got {reply}")]
    CallFailed {
        /// Operation whose reply failed the check.
        op: &'static str,
        /// Status code the caller expected.
        expected: i32,
        /// Debug representation of the full reply.
        reply: String,
    },

    /// An operation was attempted before `connect`.
    #[error("not connected to the engine")]
    NotConnected,

    /// The operation is not present in the descriptor catalog.
    #[error("operation not in the descriptor catalog: {0}")]
    UnknownOperation(&'static str),

    /// No descriptor files were found under the configured directory.
    #[error("no API descriptors found under {0}")]
    EmptyCatalog(PathBuf),

    /// A descriptor file could not be parsed.
    #[error("descriptor {path}: {source}")]
    Descriptor {
        /// Offending descriptor file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The engine refused the session.
    #[error("session rejected by the engine: {0}")]
    Rejected(String),

    /// Client and engine speak different protocol versions.
    #[error("engine speaks protocol v{engine}, client speaks v{client}")]
    VersionMismatch {
        /// Version this crate implements.
        client: u32,
        /// Version the engine reported.
        engine: u32,
    },

    /// A reply's context id did not match the request it answers.
    #[error("reply context {got} does not match request context {expected}")]
    ContextMismatch {
        /// Context sent with the request.
        expected: u32,
        /// Context echoed in the reply.
        got: u32,
    },

    /// A MAC address string could not be parsed.
    #[error("invalid MAC address: {0}")]
    InvalidMac(String),

    /// A required environment variable is not set.
    #[error("{0} is not set")]
    MissingEnv(&'static str),

    /// An I/O error from the session transport or descriptor discovery.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A descriptor-directory walk error.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}
