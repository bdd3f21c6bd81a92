//! The provider a test harness drives the engine with.
//!
//! Every exchange follows the same contract: before-hook, transport,
//! status check, after-hook. A reply whose status code differs from
//! the expected value fails the call; the after-hook never runs on
//! failure. Each per-capability method below is a pure marshalling
//! shim over [`Provider::call`].

use std::fmt;

use pakt_proto::{
    BridgeDomain, GreTunnel, InterfaceAddress, InterfaceFilter, InterfaceFlags, IpNeighbor,
    IpRoute, L2Bridge, L2FibEntry, MplsBinding, MplsRoute, MplsTunnel, Request, Response,
    SubInterface, TagRewrite, VxlanTunnel,
};

use crate::catalog::Catalog;
use crate::config::ProviderConfig;
use crate::error::{Error, Result};
use crate::hook::{Hook, TraceHook};
use crate::session::Session;

/// Converts MAC text (`aa:bb:cc:dd:ee:ff`) into the engine's 64-bit
/// field alignment: colons stripped, parsed base-16, shifted left 16
/// bits.
pub fn mac_to_u64(mac: &str) -> Result<u64> {
    let hex: String = mac.split(':').collect();
    if hex.len() != 12 {
        return Err(Error::InvalidMac(mac.to_owned()));
    }
    let value = u64::from_str_radix(&hex, 16).map_err(|_| Error::InvalidMac(mac.to_owned()))?;
    Ok(value << 16)
}

/// Control-plane provider: one instance per test session.
///
/// Single-threaded and fully synchronous; each call blocks until the
/// engine replies or the transport errors. The session is exclusively
/// owned between [`connect`](Provider::connect) and
/// [`disconnect`](Provider::disconnect).
pub struct Provider {
    /// Client identity shown in the engine's client table.
    name: String,
    /// Shared-memory/session namespace prefix.
    prefix: String,
    /// Resolved configuration, injected at construction.
    config: ProviderConfig,
    /// Operations the engine advertises.
    catalog: Catalog,
    /// Active observation hook.
    hook: Box<dyn Hook>,
    /// Live session, present between connect and disconnect.
    session: Option<Session>,
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("name", &self.name)
            .field("prefix", &self.prefix)
            .field("connected", &self.session.is_some())
            .finish_non_exhaustive()
    }
}

impl Provider {
    /// Creates a provider and loads the descriptor catalog.
    ///
    /// Fails if the catalog cannot be loaded or is empty; the failure
    /// propagates unrecovered.
    pub fn new(
        name: impl Into<String>,
        prefix: impl Into<String>,
        config: ProviderConfig,
    ) -> Result<Self> {
        let catalog = Catalog::load(&config.descriptor_dir)?;
        Ok(Self {
            name: name.into(),
            prefix: prefix.into(),
            config,
            catalog,
            hook: Box::new(TraceHook),
            session: None,
        })
    }

    /// Replaces the active hook; takes effect on the next call.
    pub fn register_hook(&mut self, hook: Box<dyn Hook>) {
        self.hook = hook;
    }

    /// The loaded descriptor catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Connects to the engine. Must precede any call.
    pub fn connect(&mut self) -> Result<()> {
        let session = Session::connect(&self.config.socket, &self.name, &self.prefix)?;
        self.session = Some(session);
        Ok(())
    }

    /// Releases the session. A no-op if never connected.
    pub fn disconnect(&mut self) -> Result<()> {
        match self.session.take() {
            Some(session) => session.disconnect(),
            None => Ok(()),
        }
    }

    /// Calls an operation expecting the conventional success status `0`.
    pub fn call(&mut self, request: Request) -> Result<Response> {
        self.call_expecting(request, 0)
    }

    /// Calls an operation and checks its reply against `expected`.
    ///
    /// Side-effect order is strict: before-hook, transport, status
    /// check, after-hook. A status mismatch fails with
    /// [`Error::CallFailed`] and skips the after-hook.
    pub fn call_expecting(&mut self, request: Request, expected: i32) -> Result<Response> {
        let op = request.name();
        self.hook.before_api(op, &request);
        let reply = self.forward(op, &request)?;
        self.check_status(op, expected, &reply)?;
        self.hook.after_api(op, &request);
        Ok(reply)
    }

    /// Executes inband CLI text.
    ///
    /// Appends exactly one newline, routes through the CLI hook pair,
    /// and checks the reply status like any other call. Returns the
    /// output with trailing NUL padding stripped, or `None` if the
    /// reply carried no payload.
    pub fn cli(&mut self, cmd: &str) -> Result<Option<String>> {
        self.hook.before_cli(cmd);
        let text = format!("{cmd}\n");
        // Anything near u32::MAX is rejected by the frame codec anyway.
        let length = u32::try_from(text.len()).unwrap_or(u32::MAX);
        let request = Request::CliInband { length, cmd: text };
        let op = request.name();
        let reply = self.forward(op, &request)?;
        self.check_status(op, 0, &reply)?;
        self.hook.after_cli(cmd);
        if let Response::Cli { reply: payload, .. } = reply {
            let output = String::from_utf8_lossy(&payload);
            Ok(Some(output.trim_end_matches('\0').to_owned()))
        } else {
            Ok(None)
        }
    }

    /// Returns the command and its output joined, for harness logs.
    pub fn cli_report(&mut self, cmd: &str) -> Result<String> {
        let output = self.cli(cmd)?;
        Ok(match output {
            Some(text) => format!("{cmd}\n{text}"),
            None => cmd.to_owned(),
        })
    }

    /// Validates the operation against the catalog and forwards it.
    fn forward(&mut self, op: &'static str, request: &Request) -> Result<Response> {
        if !self.catalog.contains(op) {
            return Err(Error::UnknownOperation(op));
        }
        let session = self.session.as_mut().ok_or(Error::NotConnected)?;
        session.request(request)
    }

    /// Applies the status-code convention to a reply.
    ///
    /// Replies without a status field (dumps) always pass.
    fn check_status(&self, op: &'static str, expected: i32, reply: &Response) -> Result<()> {
        if let Some(retval) = reply.retval() {
            if retval != expected {
                let repr = format!("{reply:?}");
                tracing::error!(
                    client = %self.name,
                    op,
                    expected,
                    reply = %repr,
                    "api call failed"
                );
                return Err(Error::CallFailed {
                    op,
                    expected,
                    reply: repr,
                });
            }
        }
        Ok(())
    }

    /// Queries the engine's version.
    pub fn show_version(&mut self) -> Result<Response> {
        self.call(Request::ShowVersion)
    }

    /// Creates a packet-generator interface.
    pub fn pg_create_interface(&mut self, interface_id: u32) -> Result<Response> {
        self.call(Request::PgCreateInterface { interface_id })
    }

    /// Dumps interfaces, optionally filtered by name substring.
    ///
    /// No filter sends the default (match-everything) record.
    pub fn sw_interface_dump(&mut self, filter: Option<&str>) -> Result<Response> {
        let filter = match filter {
            Some(name) => InterfaceFilter {
                name_filter_valid: 1,
                name_filter: name.to_owned(),
            },
            None => InterfaceFilter::default(),
        };
        self.call(Request::SwInterfaceDump(filter))
    }

    /// Binds an interface to an IPv4 or IPv6 FIB table.
    pub fn sw_interface_set_table(
        &mut self,
        sw_if_index: u32,
        is_ipv6: u8,
        table_id: u32,
    ) -> Result<Response> {
        self.call(Request::SwInterfaceSetTable {
            sw_if_index,
            is_ipv6,
            vrf_id: table_id,
        })
    }

    /// Adds or removes an interface address.
    pub fn sw_interface_add_del_address(&mut self, address: InterfaceAddress) -> Result<Response> {
        self.call(Request::SwInterfaceAddDelAddress(address))
    }

    /// Enables or disables MPLS on an interface.
    pub fn sw_interface_enable_disable_mpls(
        &mut self,
        sw_if_index: u32,
        enable: u8,
    ) -> Result<Response> {
        self.call(Request::SwInterfaceSetMplsEnable {
            sw_if_index,
            enable,
        })
    }

    /// Suppresses IPv6 router advertisements on an interface.
    pub fn sw_interface_ra_suppress(&mut self, sw_if_index: u32) -> Result<Response> {
        self.call(Request::SwInterfaceIp6ndRaConfig {
            sw_if_index,
            suppress: 1,
        })
    }

    /// Sets interface admin/link flags.
    pub fn sw_interface_set_flags(&mut self, flags: InterfaceFlags) -> Result<Response> {
        self.call(Request::SwInterfaceSetFlags(flags))
    }

    /// Enables or disables SPAN mirroring between two interfaces.
    pub fn sw_interface_span_enable_disable(
        &mut self,
        sw_if_index_from: u32,
        sw_if_index_to: u32,
        enable: u8,
    ) -> Result<Response> {
        self.call(Request::SwInterfaceSpanEnableDisable {
            sw_if_index_from,
            sw_if_index_to,
            enable,
        })
    }

    /// Creates a loopback interface; an empty MAC lets the engine
    /// assign one.
    pub fn create_loopback(&mut self, mac_address: &str) -> Result<Response> {
        self.call(Request::CreateLoopback {
            mac_address: mac_address.to_owned(),
        })
    }

    /// Creates a dot1q sub-interface.
    pub fn create_vlan_subif(&mut self, sw_if_index: u32, vlan_id: u32) -> Result<Response> {
        self.call(Request::CreateVlanSubif {
            sw_if_index,
            vlan_id,
        })
    }

    /// Creates a sub-interface with full tag matching control.
    pub fn create_subif(&mut self, subif: SubInterface) -> Result<Response> {
        self.call(Request::CreateSubif(subif))
    }

    /// Deletes a sub-interface.
    pub fn delete_subif(&mut self, sw_if_index: u32) -> Result<Response> {
        self.call(Request::DeleteSubif { sw_if_index })
    }

    /// Creates or deletes a bridge domain.
    pub fn bridge_domain_add_del(&mut self, domain: BridgeDomain) -> Result<Response> {
        self.call(Request::BridgeDomainAddDel(domain))
    }

    /// Dumps bridge domains; `bd_id == 0` dumps all of them.
    pub fn bridge_domain_dump(&mut self, bd_id: u32) -> Result<Response> {
        self.call(Request::BridgeDomainDump { bd_id })
    }

    /// Sets or clears bridge-domain feature bits.
    pub fn bridge_flags(&mut self, bd_id: u32, is_set: u8, feature_bitmap: u32) -> Result<Response> {
        self.call(Request::BridgeFlags {
            bd_id,
            is_set,
            feature_bitmap,
        })
    }

    /// Adds or removes an L2 FIB entry for `mac` (textual form).
    pub fn l2fib_add_del(&mut self, mac: &str, entry: L2FibEntry) -> Result<Response> {
        let entry = L2FibEntry {
            mac: mac_to_u64(mac)?,
            ..entry
        };
        self.call(Request::L2FibAddDel(entry))
    }

    /// Adds an interface to (or removes it from) a bridge domain.
    pub fn sw_interface_set_l2_bridge(&mut self, bridge: L2Bridge) -> Result<Response> {
        self.call(Request::SwInterfaceSetL2Bridge(bridge))
    }

    /// Creates or deletes a unidirectional cross-connect from the Rx
    /// interface to the Tx interface.
    pub fn sw_interface_set_l2_xconnect(
        &mut self,
        rx_sw_if_index: u32,
        tx_sw_if_index: u32,
        enable: u8,
    ) -> Result<Response> {
        self.call(Request::SwInterfaceSetL2Xconnect {
            rx_sw_if_index,
            tx_sw_if_index,
            enable,
        })
    }

    /// Configures VLAN tag rewrite on an L2 interface.
    pub fn sw_interface_set_l2_tag_rewrite(&mut self, rewrite: TagRewrite) -> Result<Response> {
        self.call(Request::L2InterfaceVlanTagRewrite(rewrite))
    }

    /// Creates or deletes a VXLAN tunnel.
    pub fn vxlan_add_del_tunnel(&mut self, tunnel: VxlanTunnel) -> Result<Response> {
        self.call(Request::VxlanAddDelTunnel(tunnel))
    }

    /// Creates or deletes a GRE tunnel.
    pub fn gre_tunnel_add_del(&mut self, tunnel: GreTunnel) -> Result<Response> {
        self.call(Request::GreAddDelTunnel(tunnel))
    }

    /// Adds or deletes an IPv4/IPv6 route.
    pub fn ip_add_del_route(&mut self, route: IpRoute) -> Result<Response> {
        self.call(Request::IpAddDelRoute(route))
    }

    /// Adds or deletes an IP neighbor entry.
    pub fn ip_neighbor_add_del(&mut self, neighbor: IpNeighbor) -> Result<Response> {
        self.call(Request::IpNeighborAddDel(neighbor))
    }

    /// Adds or deletes an MPLS route.
    pub fn mpls_route_add_del(&mut self, route: MplsRoute) -> Result<Response> {
        self.call(Request::MplsRouteAddDel(route))
    }

    /// Binds or unbinds an MPLS label to an IP prefix.
    pub fn mpls_ip_bind_unbind(&mut self, binding: MplsBinding) -> Result<Response> {
        self.call(Request::MplsIpBindUnbind(binding))
    }

    /// Creates or deletes an MPLS tunnel.
    pub fn mpls_tunnel_add_del(&mut self, tunnel: MplsTunnel) -> Result<Response> {
        self.call(Request::MplsTunnelAddDel(tunnel))
    }
}

#[cfg(test)]
mod tests {
    use std::os::unix::net::UnixStream;
    use std::path::Path;
    use std::sync::{Arc, Mutex};
    use std::{fs, thread};

    use pakt_proto::{Envelope, Hello, HelloAck, PROTOCOL_VERSION};

    use super::*;

    /// Hook that records callback invocations in order.
    #[derive(Debug, Default)]
    struct RecordingHook {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl Hook for RecordingHook {
        fn before_api(&mut self, name: &str, _request: &Request) {
            self.events.lock().unwrap().push(format!("before_api:{name}"));
        }

        fn after_api(&mut self, name: &str, _request: &Request) {
            self.events.lock().unwrap().push(format!("after_api:{name}"));
        }

        fn before_cli(&mut self, cmd: &str) {
            self.events.lock().unwrap().push(format!("before_cli:{cmd}"));
        }

        fn after_cli(&mut self, cmd: &str) {
            self.events.lock().unwrap().push(format!("after_cli:{cmd}"));
        }
    }

    /// Descriptor catalog covering every operation the tests exercise.
    fn write_catalog(dir: &Path) {
        fs::write(
            dir.join("core.api.json"),
            r#"{"service":"core","operations":[
                {"name":"show_version"},
                {"name":"cli_inband"},
                {"name":"sw_interface_dump"},
                {"name":"bridge_domain_add_del"},
                {"name":"bridge_domain_dump"},
                {"name":"l2fib_add_del"},
                {"name":"ip_add_del_route"},
                {"name":"vxlan_add_del_tunnel"}]}"#,
        )
        .unwrap();
    }

    /// Spawns a scripted engine peer serving `replies` in order, and
    /// returns the requests it saw.
    fn scripted_engine(
        replies: Vec<Response>,
    ) -> (UnixStream, thread::JoinHandle<Vec<Request>>) {
        let (client, mut server) = UnixStream::pair().unwrap();
        let handle = thread::spawn(move || {
            let hello: Hello = pakt_proto::decode(&mut server).unwrap();
            assert_eq!(hello.version, PROTOCOL_VERSION);
            pakt_proto::encode(
                &mut server,
                &HelloAck::Ready {
                    version: PROTOCOL_VERSION,
                },
            )
            .unwrap();
            let mut seen = Vec::new();
            for reply in replies {
                let env: Envelope<Request> = pakt_proto::decode(&mut server).unwrap();
                pakt_proto::encode(
                    &mut server,
                    &Envelope {
                        context: env.context,
                        body: reply,
                    },
                )
                .unwrap();
                seen.push(env.body);
            }
            seen
        });
        (client, handle)
    }

    /// Builds a connected provider backed by a scripted engine.
    fn connected_provider(
        replies: Vec<Response>,
    ) -> (
        Provider,
        thread::JoinHandle<Vec<Request>>,
        tempfile::TempDir,
    ) {
        let dir = tempfile::tempdir().unwrap();
        write_catalog(dir.path());
        let config = ProviderConfig::new(dir.path(), "/nonexistent/api.sock");
        let mut provider = Provider::new("harness", "pakt-test", config).unwrap();
        let (stream, handle) = scripted_engine(replies);
        provider.session = Some(Session::handshake(stream, "harness", "pakt-test").unwrap());
        (provider, handle, dir)
    }

    #[test]
    fn successful_call_runs_hooks_in_order() {
        let (mut provider, handle, _dir) =
            connected_provider(vec![Response::Ack { retval: 0 }]);
        let events = Arc::new(Mutex::new(Vec::new()));
        provider.register_hook(Box::new(RecordingHook {
            events: Arc::clone(&events),
        }));

        provider
            .bridge_domain_add_del(BridgeDomain {
                bd_id: 1,
                ..BridgeDomain::default()
            })
            .unwrap();

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                "before_api:bridge_domain_add_del".to_owned(),
                "after_api:bridge_domain_add_del".to_owned(),
            ]
        );
        let seen = handle.join().unwrap();
        match &seen[0] {
            Request::BridgeDomainAddDel(bd) => {
                assert_eq!(bd.bd_id, 1);
                assert_eq!(bd.is_add, 1);
                assert_eq!(bd.learn, 1);
            }
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[test]
    fn status_mismatch_fails_and_skips_after_hook() {
        let (mut provider, handle, _dir) =
            connected_provider(vec![Response::Ack { retval: -1 }]);
        let events = Arc::new(Mutex::new(Vec::new()));
        provider.register_hook(Box::new(RecordingHook {
            events: Arc::clone(&events),
        }));

        let err = provider
            .bridge_domain_add_del(BridgeDomain::default())
            .unwrap_err();
        match err {
            Error::CallFailed { op, expected, .. } => {
                assert_eq!(op, "bridge_domain_add_del");
                assert_eq!(expected, 0);
            }
            other => panic!("expected CallFailed, got {other:?}"),
        }
        // The before-hook fired, the after-hook did not.
        assert_eq!(
            *events.lock().unwrap(),
            vec!["before_api:bridge_domain_add_del".to_owned()]
        );
        handle.join().unwrap();
    }

    #[test]
    fn call_expecting_accepts_a_matching_nonzero_status() {
        let (mut provider, handle, _dir) =
            connected_provider(vec![Response::Ack { retval: -5 }]);
        let reply = provider
            .call_expecting(
                Request::BridgeDomainDump { bd_id: 0 },
                -5,
            )
            .unwrap();
        assert_eq!(reply.retval(), Some(-5));
        handle.join().unwrap();
    }

    #[test]
    fn dump_reply_without_status_always_passes() {
        let (mut provider, handle, _dir) =
            connected_provider(vec![Response::InterfaceDetails(Vec::new())]);
        let reply = provider.sw_interface_dump(None).unwrap();
        assert!(matches!(reply, Response::InterfaceDetails(_)));
        let seen = handle.join().unwrap();
        match &seen[0] {
            Request::SwInterfaceDump(filter) => {
                assert_eq!(filter.name_filter_valid, 0);
                assert!(filter.name_filter.is_empty());
            }
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[test]
    fn dump_filter_sets_the_valid_flag() {
        let (mut provider, handle, _dir) =
            connected_provider(vec![Response::InterfaceDetails(Vec::new())]);
        provider.sw_interface_dump(Some("eth0")).unwrap();
        let seen = handle.join().unwrap();
        match &seen[0] {
            Request::SwInterfaceDump(filter) => {
                assert_eq!(filter.name_filter_valid, 1);
                assert_eq!(filter.name_filter, "eth0");
            }
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[test]
    fn cli_appends_one_newline_and_strips_trailing_nuls() {
        let (mut provider, handle, _dir) = connected_provider(vec![Response::Cli {
            retval: 0,
            reply: b"pakt-engine 26.02\0\0\0".to_vec(),
        }]);
        let output = provider.cli("show version").unwrap();
        assert_eq!(output.as_deref(), Some("pakt-engine 26.02"));
        let seen = handle.join().unwrap();
        match &seen[0] {
            Request::CliInband { length, cmd } => {
                assert_eq!(cmd, "show version\n");
                assert_eq!(*length as usize, cmd.len());
            }
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[test]
    fn cli_uses_the_cli_hook_pair() {
        let (mut provider, handle, _dir) = connected_provider(vec![Response::Cli {
            retval: 0,
            reply: Vec::new(),
        }]);
        let events = Arc::new(Mutex::new(Vec::new()));
        provider.register_hook(Box::new(RecordingHook {
            events: Arc::clone(&events),
        }));

        provider.cli("show interface").unwrap();
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                "before_cli:show interface".to_owned(),
                "after_cli:show interface".to_owned(),
            ]
        );
        handle.join().unwrap();
    }

    #[test]
    fn cli_failure_skips_the_after_hook() {
        let (mut provider, handle, _dir) = connected_provider(vec![Response::Cli {
            retval: -2,
            reply: Vec::new(),
        }]);
        let events = Arc::new(Mutex::new(Vec::new()));
        provider.register_hook(Box::new(RecordingHook {
            events: Arc::clone(&events),
        }));

        assert!(matches!(
            provider.cli("set interface state eth0 up"),
            Err(Error::CallFailed { .. })
        ));
        assert_eq!(
            *events.lock().unwrap(),
            vec!["before_cli:set interface state eth0 up".to_owned()]
        );
        handle.join().unwrap();
    }

    #[test]
    fn cli_report_joins_command_and_output() {
        let (mut provider, handle, _dir) = connected_provider(vec![Response::Cli {
            retval: 0,
            reply: b"up\0".to_vec(),
        }]);
        let report = provider.cli_report("show interface eth0").unwrap();
        assert_eq!(report, "show interface eth0\nup");
        handle.join().unwrap();
    }

    #[test]
    fn registered_hook_is_used_by_the_next_call() {
        let (mut provider, handle, _dir) = connected_provider(vec![
            Response::Ack { retval: 0 },
            Response::Ack { retval: 0 },
        ]);
        provider.bridge_domain_add_del(BridgeDomain::default()).unwrap();

        let events = Arc::new(Mutex::new(Vec::new()));
        provider.register_hook(Box::new(RecordingHook {
            events: Arc::clone(&events),
        }));
        provider.bridge_domain_add_del(BridgeDomain::default()).unwrap();

        // Only the call after the swap is recorded.
        assert_eq!(events.lock().unwrap().len(), 2);
        handle.join().unwrap();
    }

    #[test]
    fn call_before_connect_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_catalog(dir.path());
        let config = ProviderConfig::new(dir.path(), "/nonexistent/api.sock");
        let mut provider = Provider::new("harness", "pakt-test", config).unwrap();
        assert!(matches!(
            provider.show_version(),
            Err(Error::NotConnected)
        ));
    }

    #[test]
    fn operation_missing_from_catalog_is_rejected() {
        let (mut provider, _handle, _dir) = connected_provider(Vec::new());
        // The test catalog does not list pg_create_interface.
        assert!(matches!(
            provider.pg_create_interface(0),
            Err(Error::UnknownOperation("pg_create_interface"))
        ));
    }

    #[test]
    fn l2fib_entry_carries_the_converted_mac() {
        let (mut provider, handle, _dir) =
            connected_provider(vec![Response::Ack { retval: 0 }]);
        provider
            .l2fib_add_del(
                "aa:bb:cc:dd:ee:ff",
                L2FibEntry {
                    bd_id: 2,
                    sw_if_index: 5,
                    static_mac: 1,
                    ..L2FibEntry::default()
                },
            )
            .unwrap();
        let seen = handle.join().unwrap();
        match &seen[0] {
            Request::L2FibAddDel(entry) => {
                assert_eq!(entry.mac, 0xaabb_ccdd_eeff_0000);
                assert_eq!(entry.bd_id, 2);
                assert_eq!(entry.is_add, 1);
            }
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[test]
    fn mac_conversion_matches_the_field_alignment() {
        assert_eq!(mac_to_u64("aa:bb:cc:dd:ee:ff").unwrap(), 0xaabb_ccdd_eeff_0000);
        assert_eq!(mac_to_u64("00:00:00:00:00:01").unwrap(), 0x1_0000);
    }

    #[test]
    fn malformed_mac_is_an_error() {
        assert!(matches!(
            mac_to_u64("not-a-mac"),
            Err(Error::InvalidMac(_))
        ));
        assert!(matches!(
            mac_to_u64("aa:bb:cc:dd:ee"),
            Err(Error::InvalidMac(_))
        ));
        assert!(matches!(
            mac_to_u64("gg:bb:cc:dd:ee:ff"),
            Err(Error::InvalidMac(_))
        ));
    }

    #[test]
    fn route_request_uses_a_fresh_label_stack_per_value() {
        let (mut provider, handle, _dir) = connected_provider(vec![
            Response::Ack { retval: 0 },
            Response::Ack { retval: 0 },
        ]);
        provider
            .ip_add_del_route(IpRoute {
                dst_address: vec![10, 0, 0, 0],
                dst_address_length: 24,
                next_hop_address: vec![10, 0, 0, 1],
                next_hop_out_label_stack: vec![100],
                ..IpRoute::default()
            })
            .unwrap();
        // A second default route must not see the first one's labels.
        provider
            .ip_add_del_route(IpRoute {
                dst_address: vec![10, 0, 1, 0],
                dst_address_length: 24,
                next_hop_address: vec![10, 0, 0, 1],
                ..IpRoute::default()
            })
            .unwrap();
        let seen = handle.join().unwrap();
        match (&seen[0], &seen[1]) {
            (Request::IpAddDelRoute(first), Request::IpAddDelRoute(second)) => {
                assert_eq!(first.next_hop_out_label_stack, vec![100]);
                assert!(second.next_hop_out_label_stack.is_empty());
            }
            other => panic!("unexpected requests {other:?}"),
        }
    }
}
