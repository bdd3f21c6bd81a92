//! Observation hooks around API calls and CLI executions.
//!
//! A harness can watch every exchange with the engine by registering a
//! [`Hook`]. Structured API calls and inband CLI text are observed on
//! separate callback pairs.

use pakt_proto::Request;

/// Before/after observation seam around every exchange.
///
/// Callbacks are synchronous and observational only: they must not
/// mutate the request and must not block for long, since a blocked
/// hook blocks the whole session. The after callbacks only run when
/// the exchange succeeded.
pub trait Hook {
    /// Called before an API request is written to the transport.
    fn before_api(&mut self, _name: &str, _request: &Request) {}

    /// Called after a successful API call.
    fn after_api(&mut self, _name: &str, _request: &Request) {}

    /// Called before inband CLI text is sent.
    fn before_cli(&mut self, _cmd: &str) {}

    /// Called after a successful CLI execution.
    fn after_cli(&mut self, _cmd: &str) {}
}

/// Default hook: logs every exchange at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceHook;

impl Hook for TraceHook {
    fn before_api(&mut self, name: &str, _request: &Request) {
        tracing::debug!(op = name, "api call");
    }

    fn after_api(&mut self, name: &str, _request: &Request) {
        tracing::debug!(op = name, "api reply ok");
    }

    fn before_cli(&mut self, cmd: &str) {
        tracing::debug!(cmd, "cli exec");
    }

    fn after_cli(&mut self, cmd: &str) {
        tracing::debug!(cmd, "cli done");
    }
}
