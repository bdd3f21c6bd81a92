//! Wire protocol for the pakt engine control-plane API.
//!
//! Requests and replies are serialized with [`postcard`], wrapped in a
//! context-carrying [`Envelope`], and framed with a 4-byte big-endian
//! length prefix, suitable for any reliable byte stream (Unix socket,
//! TCP). A [`Hello`]/[`HelloAck`] exchange opens every session.

mod codec;
mod handshake;
mod message;

pub use codec::{Envelope, decode, encode};
pub use handshake::{Hello, HelloAck, PROTOCOL_VERSION};
pub use message::{
    BridgeDomain, BridgeDomainDetail, GreTunnel, INDEX_NONE, InterfaceAddress, InterfaceDetail,
    InterfaceFilter, InterfaceFlags, IpNeighbor, IpRoute, L2Bridge, L2FibEntry,
    MPLS_IETF_MAX_LABEL, MPLS_LABEL_INVALID, MplsBinding, MplsRoute, MplsTunnel, Request,
    Response, SubInterface, TagRewrite, VtrOp, VxlanTunnel, bd_feature,
};
