//! Synchronous session transport over the engine's Unix API socket.
//!
//! One request, one reply, strictly in order. Timeout and retry policy
//! belong to the engine or the harness, never here.

use std::net::Shutdown;
use std::os::unix::net::UnixStream;
use std::path::Path;

use pakt_proto::{Envelope, Hello, HelloAck, PROTOCOL_VERSION, Request, Response};

use crate::error::{Error, Result};

/// A connected control-plane session.
///
/// Exclusively owned by its Provider between connect and disconnect.
#[derive(Debug)]
pub struct Session {
    /// The underlying stream to the engine.
    stream: UnixStream,
    /// Context id for the next request.
    next_context: u32,
}

impl Session {
    /// Connects to the engine socket and performs the opening
    /// handshake.
    pub fn connect(path: impl AsRef<Path>, name: &str, prefix: &str) -> Result<Self> {
        let stream = UnixStream::connect(path)?;
        Self::handshake(stream, name, prefix)
    }

    /// Performs the opening handshake over an already-open stream.
    pub fn handshake(mut stream: UnixStream, name: &str, prefix: &str) -> Result<Self> {
        pakt_proto::encode(
            &mut stream,
            &Hello {
                name: name.to_owned(),
                prefix: prefix.to_owned(),
                version: PROTOCOL_VERSION,
            },
        )?;
        match pakt_proto::decode::<HelloAck>(&mut stream)? {
            HelloAck::Ready { version } if version == PROTOCOL_VERSION => Ok(Self {
                stream,
                next_context: 1,
            }),
            HelloAck::Ready { version } => Err(Error::VersionMismatch {
                client: PROTOCOL_VERSION,
                engine: version,
            }),
            HelloAck::Rejected(reason) => Err(Error::Rejected(reason)),
            _ => Err(Error::Rejected("unrecognized handshake reply".to_owned())),
        }
    }

    /// Sends one request and blocks until its reply arrives.
    ///
    /// The reply must echo the request's context id.
    pub fn request(&mut self, request: &Request) -> Result<Response> {
        let context = self.next_context;
        self.next_context = self.next_context.wrapping_add(1);

        pakt_proto::encode(
            &mut self.stream,
            &Envelope {
                context,
                body: request,
            },
        )?;
        let reply: Envelope<Response> = pakt_proto::decode(&mut self.stream)?;
        if reply.context != context {
            return Err(Error::ContextMismatch {
                expected: context,
                got: reply.context,
            });
        }
        Ok(reply.body)
    }

    /// Shuts the stream down, releasing the session.
    pub fn disconnect(self) -> Result<()> {
        self.stream.shutdown(Shutdown::Both)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    /// Runs `f` as the engine side of a socket pair and hands the
    /// client end to the caller. Join the handle so engine-side
    /// assertions propagate.
    fn with_engine<F>(f: F) -> (UnixStream, thread::JoinHandle<()>)
    where
        F: FnOnce(UnixStream) + Send + 'static,
    {
        let (client, server) = UnixStream::pair().unwrap();
        let handle = thread::spawn(move || f(server));
        (client, handle)
    }

    fn accept_hello(stream: &mut UnixStream) -> Hello {
        let hello: Hello = pakt_proto::decode(stream).unwrap();
        pakt_proto::encode(
            stream,
            &HelloAck::Ready {
                version: PROTOCOL_VERSION,
            },
        )
        .unwrap();
        hello
    }

    #[test]
    fn handshake_carries_name_and_prefix() {
        let (client, engine) = with_engine(|mut s| {
            let hello = accept_hello(&mut s);
            assert_eq!(hello.name, "harness");
            assert_eq!(hello.prefix, "pakt-test");
        });
        Session::handshake(client, "harness", "pakt-test").unwrap();
        engine.join().unwrap();
    }

    #[test]
    fn handshake_version_mismatch_is_an_error() {
        let (client, engine) = with_engine(|mut s| {
            let _: Hello = pakt_proto::decode(&mut s).unwrap();
            pakt_proto::encode(&mut s, &HelloAck::Ready { version: 99 }).unwrap();
        });
        match Session::handshake(client, "harness", "pakt-test") {
            Err(Error::VersionMismatch { client: c, engine: e }) => {
                assert_eq!(c, PROTOCOL_VERSION);
                assert_eq!(e, 99);
            }
            other => panic!("expected VersionMismatch, got {other:?}"),
        }
        engine.join().unwrap();
    }

    #[test]
    fn handshake_rejection_is_an_error() {
        let (client, engine) = with_engine(|mut s| {
            let _: Hello = pakt_proto::decode(&mut s).unwrap();
            pakt_proto::encode(&mut s, &HelloAck::Rejected("client table full".to_owned()))
                .unwrap();
        });
        match Session::handshake(client, "harness", "pakt-test") {
            Err(Error::Rejected(reason)) => assert_eq!(reason, "client table full"),
            other => panic!("expected Rejected, got {other:?}"),
        }
        engine.join().unwrap();
    }

    #[test]
    fn reply_with_wrong_context_is_an_error() {
        let (client, engine) = with_engine(|mut s| {
            accept_hello(&mut s);
            let env: Envelope<Request> = pakt_proto::decode(&mut s).unwrap();
            pakt_proto::encode(
                &mut s,
                &Envelope {
                    context: env.context + 1,
                    body: Response::Ack { retval: 0 },
                },
            )
            .unwrap();
        });
        let mut session = Session::handshake(client, "harness", "pakt-test").unwrap();
        assert!(matches!(
            session.request(&Request::ShowVersion),
            Err(Error::ContextMismatch { .. })
        ));
        engine.join().unwrap();
    }

    #[test]
    fn reply_with_matching_context_is_returned() {
        let (client, engine) = with_engine(|mut s| {
            accept_hello(&mut s);
            let env: Envelope<Request> = pakt_proto::decode(&mut s).unwrap();
            assert!(matches!(env.body, Request::ShowVersion));
            pakt_proto::encode(
                &mut s,
                &Envelope {
                    context: env.context,
                    body: Response::Version {
                        retval: 0,
                        program: "pakt-engine".to_owned(),
                        version: "26.02".to_owned(),
                        build_date: "2026-08-01".to_owned(),
                    },
                },
            )
            .unwrap();
        });
        let mut session = Session::handshake(client, "harness", "pakt-test").unwrap();
        match session.request(&Request::ShowVersion).unwrap() {
            Response::Version { program, .. } => assert_eq!(program, "pakt-engine"),
            other => panic!("expected Version, got {other:?}"),
        }
        engine.join().unwrap();
    }
}
