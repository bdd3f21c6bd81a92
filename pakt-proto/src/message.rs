//! Typed operation catalog for the engine's control-plane API.
//!
//! One record type per remote operation, with `Default` impls carrying
//! the documented default for every optional field. Mutating operations
//! all carry an explicit add/remove (or enable/disable) discriminator
//! that defaults to "add"/"enable"; callers override it to express the
//! inverse action.

use serde::{Deserialize, Serialize};

/// Sentinel for unset index-valued fields (interface, classify table,
/// decap next node).
pub const INDEX_NONE: u32 = u32::MAX;

/// Largest label value the 20-bit IETF MPLS label field can hold.
pub const MPLS_IETF_MAX_LABEL: u32 = 0xf_ffff;

/// Label value outside the IETF range, meaning "no via label".
pub const MPLS_LABEL_INVALID: u32 = MPLS_IETF_MAX_LABEL + 1;

/// Bridge-domain feature bits for [`Request::BridgeFlags`].
pub mod bd_feature {
    /// MAC learning on all member interfaces.
    pub const LEARN: u32 = 1 << 0;
    /// L2 forwarding on all member interfaces.
    pub const FORWARD: u32 = 1 << 1;
    /// Broadcast/multicast flooding.
    pub const FLOOD: u32 = 1 << 2;
    /// Unknown-unicast flooding.
    pub const UU_FLOOD: u32 = 1 << 3;
    /// ARP termination.
    pub const ARP_TERM: u32 = 1 << 4;
}

/// VLAN tag rewrite operation applied to an L2 interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum VtrOp {
    /// No rewrite.
    #[default]
    Disabled = 0,
    /// Push one tag.
    Push1 = 1,
    /// Push two tags.
    Push2 = 2,
    /// Pop one tag.
    Pop1 = 3,
    /// Pop two tags.
    Pop2 = 4,
    /// Translate one tag to one tag.
    Translate1To1 = 5,
    /// Translate one tag to two tags.
    Translate1To2 = 6,
    /// Translate two tags to one tag.
    Translate2To1 = 7,
    /// Translate two tags to two tags.
    Translate2To2 = 8,
}

/// Name filter for an interface dump.
///
/// The default is "no filter": `name_filter_valid == 0` and an empty
/// name, which the engine treats as "dump everything".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterfaceFilter {
    /// `1` if `name_filter` should be applied.
    pub name_filter_valid: u8,
    /// Substring matched against interface names.
    pub name_filter: String,
}

/// Add or remove an IP address on an interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceAddress {
    /// Target interface index.
    pub sw_if_index: u32,
    /// Packed address bytes (4 for IPv4, 16 for IPv6).
    pub address: Vec<u8>,
    /// Prefix length.
    pub address_length: u8,
    /// `1` for IPv6.
    pub is_ipv6: u8,
    /// `1` to add, `0` to remove.
    pub is_add: u8,
    /// `1` to remove every address on the interface.
    pub del_all: u8,
}

impl Default for InterfaceAddress {
    fn default() -> Self {
        Self {
            sw_if_index: 0,
            address: Vec::new(),
            address_length: 0,
            is_ipv6: 0,
            is_add: 1,
            del_all: 0,
        }
    }
}

/// Admin/link flag update for an interface.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InterfaceFlags {
    /// Target interface index.
    pub sw_if_index: u32,
    /// Desired admin state, `1` = up.
    pub admin_up_down: u8,
    /// Desired link state, `1` = up.
    pub link_up_down: u8,
    /// `1` if the interface was deleted.
    pub deleted: u8,
}

/// Sub-interface creation parameters.
///
/// `dot1ad == 0` selects dot1q outer tagging, `1` selects dot1ad.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SubInterface {
    /// Parent interface index.
    pub sw_if_index: u32,
    /// Sub-interface identifier.
    pub sub_id: u32,
    /// No tags expected on the wire.
    pub no_tags: u8,
    /// Exactly one tag expected.
    pub one_tag: u8,
    /// Exactly two tags expected.
    pub two_tags: u8,
    /// Outer tag is dot1ad rather than dot1q.
    pub dot1ad: u8,
    /// Require an exact tag match.
    pub exact_match: u8,
    /// Catch-all sub-interface for unmatched tags.
    pub default_sub: u8,
    /// Match any outer VLAN id.
    pub outer_vlan_id_any: u8,
    /// Match any inner VLAN id.
    pub inner_vlan_id_any: u8,
    /// Outer VLAN id to match.
    pub outer_vlan_id: u32,
    /// Inner VLAN id to match.
    pub inner_vlan_id: u32,
}

/// Create or delete a bridge domain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BridgeDomain {
    /// Bridge domain identifier.
    pub bd_id: u32,
    /// Broadcast/multicast flooding.
    pub flood: u8,
    /// Unknown-unicast flooding.
    pub uu_flood: u8,
    /// Forwarding on all member interfaces.
    pub forward: u8,
    /// MAC learning on all member interfaces.
    pub learn: u8,
    /// ARP termination.
    pub arp_term: u8,
    /// `1` to create, `0` to delete.
    pub is_add: u8,
}

impl Default for BridgeDomain {
    fn default() -> Self {
        Self {
            bd_id: 0,
            flood: 1,
            uu_flood: 1,
            forward: 1,
            learn: 1,
            arp_term: 0,
            is_add: 1,
        }
    }
}

/// Create or delete an L2 FIB entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct L2FibEntry {
    /// MAC address aligned into the engine's 64-bit field.
    pub mac: u64,
    /// Bridge domain identifier.
    pub bd_id: u32,
    /// Interface the entry points to.
    pub sw_if_index: u32,
    /// `1` to add, `0` to remove.
    pub is_add: u8,
    /// Entry is static (not subject to aging).
    pub static_mac: u8,
    /// Drop frames whose source or destination matches.
    pub filter_mac: u8,
    /// Entry points to the bridge virtual interface.
    pub bvi_mac: u8,
}

impl Default for L2FibEntry {
    fn default() -> Self {
        Self {
            mac: 0,
            bd_id: 0,
            sw_if_index: 0,
            is_add: 1,
            static_mac: 0,
            filter_mac: 0,
            bvi_mac: 0,
        }
    }
}

/// Add an interface to (or remove it from) a bridge domain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct L2Bridge {
    /// Interface to add or remove.
    pub rx_sw_if_index: u32,
    /// Bridge domain identifier.
    pub bd_id: u32,
    /// Split-horizon group.
    pub shg: u8,
    /// Interface acts as the bridge virtual interface.
    pub bvi: u8,
    /// `1` to add, `0` to remove.
    pub enable: u8,
}

impl Default for L2Bridge {
    fn default() -> Self {
        Self {
            rx_sw_if_index: 0,
            bd_id: 0,
            shg: 0,
            bvi: 0,
            enable: 1,
        }
    }
}

/// VLAN tag rewrite configuration for an L2 interface.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TagRewrite {
    /// Interface the rewrite applies to.
    pub sw_if_index: u32,
    /// Rewrite operation.
    pub vtr_op: VtrOp,
    /// First pushed tag is dot1q (`1`) or dot1ad (`0`).
    pub push_dot1q: u8,
    /// Tag for any push or translate operation.
    pub tag1: u32,
    /// Tag for push-2 or translate-x-2 operations.
    pub tag2: u32,
}

/// Create or delete a VXLAN tunnel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VxlanTunnel {
    /// Packed source address bytes.
    pub src_address: Vec<u8>,
    /// Packed destination address bytes.
    pub dst_address: Vec<u8>,
    /// Interface for multicast reachability, [`INDEX_NONE`] if unicast.
    pub mcast_sw_if_index: u32,
    /// `1` to create, `0` to delete.
    pub is_add: u8,
    /// `1` for IPv6 endpoints.
    pub is_ipv6: u8,
    /// VRF used for the encapsulated packets.
    pub encap_vrf_id: u32,
    /// Decap graph node override, [`INDEX_NONE`] for the default.
    pub decap_next_index: u32,
    /// Virtual network identifier.
    pub vni: u32,
}

impl Default for VxlanTunnel {
    fn default() -> Self {
        Self {
            src_address: Vec::new(),
            dst_address: Vec::new(),
            mcast_sw_if_index: INDEX_NONE,
            is_add: 1,
            is_ipv6: 0,
            encap_vrf_id: 0,
            decap_next_index: INDEX_NONE,
            vni: 0,
        }
    }
}

/// Create or delete a GRE tunnel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreTunnel {
    /// Packed source address bytes.
    pub src_address: Vec<u8>,
    /// Packed destination address bytes.
    pub dst_address: Vec<u8>,
    /// FIB used for the outer header lookup.
    pub outer_fib_id: u32,
    /// Transparent ethernet bridging mode.
    pub teb: u8,
    /// `1` to create, `0` to delete.
    pub is_add: u8,
    /// `1` for IPv6 endpoints.
    pub is_ipv6: u8,
}

impl Default for GreTunnel {
    fn default() -> Self {
        Self {
            src_address: Vec::new(),
            dst_address: Vec::new(),
            outer_fib_id: 0,
            teb: 0,
            is_add: 1,
            is_ipv6: 0,
        }
    }
}

/// Add or delete an IPv4/IPv6 route.
///
/// The label stack defaults to a fresh empty `Vec`; its length on the
/// wire is implied by the vector itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpRoute {
    /// Packed destination prefix bytes.
    pub dst_address: Vec<u8>,
    /// Destination prefix length.
    pub dst_address_length: u8,
    /// Packed next-hop address bytes.
    pub next_hop_address: Vec<u8>,
    /// Next-hop interface, [`INDEX_NONE`] to resolve via the FIB.
    pub next_hop_sw_if_index: u32,
    /// FIB table the route is installed in.
    pub table_id: u32,
    /// FIB table the next hop is resolved in.
    pub next_hop_table_id: u32,
    /// ECMP weight.
    pub next_hop_weight: u8,
    /// MPLS labels imposed on the path.
    pub next_hop_out_label_stack: Vec<u32>,
    /// Label to recurse via, [`MPLS_LABEL_INVALID`] for none.
    pub next_hop_via_label: u32,
    /// Create the FIB table if it does not exist.
    pub create_vrf_if_needed: u8,
    /// Recursive resolution must reach a host prefix.
    pub is_resolve_host: u8,
    /// Recursive resolution must reach an attached prefix.
    pub is_resolve_attached: u8,
    /// Classify table for the route, [`INDEX_NONE`] for none.
    pub classify_table_index: u32,
    /// `1` to add, `0` to delete.
    pub is_add: u8,
    /// Drop matching packets.
    pub is_drop: u8,
    /// Reply with ICMP unreachable.
    pub is_unreach: u8,
    /// Reply with ICMP prohibited.
    pub is_prohibit: u8,
    /// `1` for an IPv6 route.
    pub is_ipv6: u8,
    /// Route is local (receive).
    pub is_local: u8,
    /// Route resolves via a classify table.
    pub is_classify: u8,
    /// Add as an additional multipath next hop.
    pub is_multipath: u8,
    /// More paths follow in this update.
    pub not_last: u8,
}

impl Default for IpRoute {
    fn default() -> Self {
        Self {
            dst_address: Vec::new(),
            dst_address_length: 0,
            next_hop_address: Vec::new(),
            next_hop_sw_if_index: INDEX_NONE,
            table_id: 0,
            next_hop_table_id: 0,
            next_hop_weight: 1,
            next_hop_out_label_stack: Vec::new(),
            next_hop_via_label: MPLS_LABEL_INVALID,
            create_vrf_if_needed: 0,
            is_resolve_host: 0,
            is_resolve_attached: 0,
            classify_table_index: INDEX_NONE,
            is_add: 1,
            is_drop: 0,
            is_unreach: 0,
            is_prohibit: 0,
            is_ipv6: 0,
            is_local: 0,
            is_classify: 0,
            is_multipath: 0,
            not_last: 0,
        }
    }
}

/// Add or delete an IP neighbor (ARP / NDP) entry.
///
/// The MAC travels in the engine's packed byte form, unconverted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpNeighbor {
    /// Interface the neighbor is reachable on.
    pub sw_if_index: u32,
    /// Packed MAC address bytes.
    pub mac_address: Vec<u8>,
    /// Packed IP address bytes.
    pub dst_address: Vec<u8>,
    /// VRF the neighbor belongs to.
    pub vrf_id: u32,
    /// `1` to add, `0` to remove.
    pub is_add: u8,
    /// `1` for an IPv6 neighbor.
    pub is_ipv6: u8,
    /// Entry is static (not subject to aging).
    pub is_static: u8,
}

impl Default for IpNeighbor {
    fn default() -> Self {
        Self {
            sw_if_index: 0,
            mac_address: Vec::new(),
            dst_address: Vec::new(),
            vrf_id: 0,
            is_add: 1,
            is_ipv6: 0,
            is_static: 0,
        }
    }
}

/// Add or delete an MPLS route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MplsRoute {
    /// Local label the route matches.
    pub label: u32,
    /// End-of-stack bit.
    pub eos: u8,
    /// Next hop is IPv4 (`1`) or IPv6 (`0`).
    pub next_hop_proto_is_ip4: u8,
    /// Packed next-hop address bytes.
    pub next_hop_address: Vec<u8>,
    /// Next-hop interface, [`INDEX_NONE`] to resolve via the FIB.
    pub next_hop_sw_if_index: u32,
    /// MPLS table the route is installed in.
    pub table_id: u32,
    /// FIB table the next hop is resolved in.
    pub next_hop_table_id: u32,
    /// ECMP weight.
    pub next_hop_weight: u8,
    /// Labels imposed on the path.
    pub next_hop_out_label_stack: Vec<u32>,
    /// Label to recurse via, [`MPLS_LABEL_INVALID`] for none.
    pub next_hop_via_label: u32,
    /// Create the table if it does not exist.
    pub create_table_if_needed: u8,
    /// Recursive resolution must reach a host prefix.
    pub is_resolve_host: u8,
    /// Recursive resolution must reach an attached prefix.
    pub is_resolve_attached: u8,
    /// `1` to add, `0` to delete.
    pub is_add: u8,
    /// Add as an additional multipath next hop.
    pub is_multipath: u8,
    /// Classify table for the route, [`INDEX_NONE`] for none.
    pub classify_table_index: u32,
    /// Route resolves via a classify table.
    pub is_classify: u8,
}

impl Default for MplsRoute {
    fn default() -> Self {
        Self {
            label: 0,
            eos: 0,
            next_hop_proto_is_ip4: 1,
            next_hop_address: Vec::new(),
            next_hop_sw_if_index: INDEX_NONE,
            table_id: 0,
            next_hop_table_id: 0,
            next_hop_weight: 1,
            next_hop_out_label_stack: Vec::new(),
            next_hop_via_label: MPLS_LABEL_INVALID,
            create_table_if_needed: 0,
            is_resolve_host: 0,
            is_resolve_attached: 0,
            is_add: 1,
            is_multipath: 0,
            classify_table_index: INDEX_NONE,
            is_classify: 0,
        }
    }
}

/// Bind or unbind an MPLS label to an IP prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MplsBinding {
    /// Label to bind.
    pub label: u32,
    /// Packed prefix bytes.
    pub address: Vec<u8>,
    /// Prefix length.
    pub address_length: u8,
    /// MPLS table holding the binding.
    pub mpls_table_id: u32,
    /// IP table holding the prefix.
    pub ip_table_id: u32,
    /// `1` for an IPv4 prefix.
    pub is_ip4: u8,
    /// Create the table if it does not exist.
    pub create_table_if_needed: u8,
    /// `1` to bind, `0` to unbind.
    pub is_bind: u8,
}

impl Default for MplsBinding {
    fn default() -> Self {
        Self {
            label: 0,
            address: Vec::new(),
            address_length: 0,
            mpls_table_id: 0,
            ip_table_id: 0,
            is_ip4: 1,
            create_table_if_needed: 0,
            is_bind: 1,
        }
    }
}

/// Create or delete an MPLS tunnel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MplsTunnel {
    /// Tunnel interface to modify, [`INDEX_NONE`] to create a new one.
    pub sw_if_index: u32,
    /// Next hop is IPv4 (`1`) or IPv6 (`0`).
    pub next_hop_proto_is_ip4: u8,
    /// Packed next-hop address bytes.
    pub next_hop_address: Vec<u8>,
    /// Next-hop interface, [`INDEX_NONE`] to resolve via the FIB.
    pub next_hop_sw_if_index: u32,
    /// FIB table the next hop is resolved in.
    pub next_hop_table_id: u32,
    /// ECMP weight.
    pub next_hop_weight: u8,
    /// Labels imposed on the tunnel path.
    pub next_hop_out_label_stack: Vec<u32>,
    /// Create the table if it does not exist.
    pub create_table_if_needed: u8,
    /// `1` to create, `0` to delete.
    pub is_add: u8,
    /// Tunnel carries L2 only.
    pub l2_only: u8,
}

impl Default for MplsTunnel {
    fn default() -> Self {
        Self {
            sw_if_index: INDEX_NONE,
            next_hop_proto_is_ip4: 1,
            next_hop_address: Vec::new(),
            next_hop_sw_if_index: INDEX_NONE,
            next_hop_table_id: 0,
            next_hop_weight: 1,
            next_hop_out_label_stack: Vec::new(),
            create_table_if_needed: 0,
            is_add: 1,
            l2_only: 0,
        }
    }
}

/// Control-plane request sent to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Request {
    /// Query the engine's version.
    ShowVersion,
    /// Execute inband CLI text.
    CliInband {
        /// Byte length of `cmd`.
        length: u32,
        /// CLI text, newline-terminated.
        cmd: String,
    },
    /// Create a packet-generator interface.
    PgCreateInterface {
        /// Packet-generator instance id.
        interface_id: u32,
    },
    /// Dump interfaces, optionally filtered by name.
    SwInterfaceDump(InterfaceFilter),
    /// Bind an interface to an IP FIB table.
    SwInterfaceSetTable {
        /// Target interface index.
        sw_if_index: u32,
        /// `1` for the IPv6 table.
        is_ipv6: u8,
        /// FIB table identifier.
        vrf_id: u32,
    },
    /// Add or remove an interface address.
    SwInterfaceAddDelAddress(InterfaceAddress),
    /// Enable or disable MPLS on an interface.
    SwInterfaceSetMplsEnable {
        /// Target interface index.
        sw_if_index: u32,
        /// `1` to enable, `0` to disable.
        enable: u8,
    },
    /// Configure IPv6 router-advertisement suppression.
    SwInterfaceIp6ndRaConfig {
        /// Target interface index.
        sw_if_index: u32,
        /// `1` to suppress RA transmission.
        suppress: u8,
    },
    /// Set interface admin/link flags.
    SwInterfaceSetFlags(InterfaceFlags),
    /// Enable or disable SPAN mirroring between two interfaces.
    SwInterfaceSpanEnableDisable {
        /// Mirror source.
        sw_if_index_from: u32,
        /// Mirror destination.
        sw_if_index_to: u32,
        /// `1` to enable, `0` to disable.
        enable: u8,
    },
    /// Create a loopback interface.
    CreateLoopback {
        /// MAC address text, empty for an engine-assigned one.
        mac_address: String,
    },
    /// Create a dot1q sub-interface.
    CreateVlanSubif {
        /// Parent interface index.
        sw_if_index: u32,
        /// VLAN id.
        vlan_id: u32,
    },
    /// Create a sub-interface with full tag matching control.
    CreateSubif(SubInterface),
    /// Delete a sub-interface.
    DeleteSubif {
        /// Sub-interface index.
        sw_if_index: u32,
    },
    /// Create or delete a bridge domain.
    BridgeDomainAddDel(BridgeDomain),
    /// Dump bridge domains.
    BridgeDomainDump {
        /// Bridge domain id, `0` for all.
        bd_id: u32,
    },
    /// Set or clear bridge-domain feature bits.
    BridgeFlags {
        /// Bridge domain identifier.
        bd_id: u32,
        /// `1` to set, `0` to clear.
        is_set: u8,
        /// [`bd_feature`] bits to change.
        feature_bitmap: u32,
    },
    /// Add or remove an L2 FIB entry.
    L2FibAddDel(L2FibEntry),
    /// Add an interface to (or remove it from) a bridge domain.
    SwInterfaceSetL2Bridge(L2Bridge),
    /// Create or delete a unidirectional cross-connect.
    SwInterfaceSetL2Xconnect {
        /// Receive side of the cross-connect.
        rx_sw_if_index: u32,
        /// Transmit side of the cross-connect.
        tx_sw_if_index: u32,
        /// `1` to create, `0` to delete.
        enable: u8,
    },
    /// Configure VLAN tag rewrite on an L2 interface.
    L2InterfaceVlanTagRewrite(TagRewrite),
    /// Create or delete a VXLAN tunnel.
    VxlanAddDelTunnel(VxlanTunnel),
    /// Create or delete a GRE tunnel.
    GreAddDelTunnel(GreTunnel),
    /// Add or delete an IP route.
    IpAddDelRoute(IpRoute),
    /// Add or delete an IP neighbor entry.
    IpNeighborAddDel(IpNeighbor),
    /// Add or delete an MPLS route.
    MplsRouteAddDel(MplsRoute),
    /// Bind or unbind an MPLS label to a prefix.
    MplsIpBindUnbind(MplsBinding),
    /// Create or delete an MPLS tunnel.
    MplsTunnelAddDel(MplsTunnel),
}

impl Request {
    /// Wire-level operation name, as listed in the descriptor catalog.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ShowVersion => "show_version",
            Self::CliInband { .. } => "cli_inband",
            Self::PgCreateInterface { .. } => "pg_create_interface",
            Self::SwInterfaceDump(_) => "sw_interface_dump",
            Self::SwInterfaceSetTable { .. } => "sw_interface_set_table",
            Self::SwInterfaceAddDelAddress(_) => "sw_interface_add_del_address",
            Self::SwInterfaceSetMplsEnable { .. } => "sw_interface_set_mpls_enable",
            Self::SwInterfaceIp6ndRaConfig { .. } => "sw_interface_ip6nd_ra_config",
            Self::SwInterfaceSetFlags(_) => "sw_interface_set_flags",
            Self::SwInterfaceSpanEnableDisable { .. } => "sw_interface_span_enable_disable",
            Self::CreateLoopback { .. } => "create_loopback",
            Self::CreateVlanSubif { .. } => "create_vlan_subif",
            Self::CreateSubif(_) => "create_subif",
            Self::DeleteSubif { .. } => "delete_subif",
            Self::BridgeDomainAddDel(_) => "bridge_domain_add_del",
            Self::BridgeDomainDump { .. } => "bridge_domain_dump",
            Self::BridgeFlags { .. } => "bridge_flags",
            Self::L2FibAddDel(_) => "l2fib_add_del",
            Self::SwInterfaceSetL2Bridge(_) => "sw_interface_set_l2_bridge",
            Self::SwInterfaceSetL2Xconnect { .. } => "sw_interface_set_l2_xconnect",
            Self::L2InterfaceVlanTagRewrite(_) => "l2_interface_vlan_tag_rewrite",
            Self::VxlanAddDelTunnel(_) => "vxlan_add_del_tunnel",
            Self::GreAddDelTunnel(_) => "gre_add_del_tunnel",
            Self::IpAddDelRoute(_) => "ip_add_del_route",
            Self::IpNeighborAddDel(_) => "ip_neighbor_add_del",
            Self::MplsRouteAddDel(_) => "mpls_route_add_del",
            Self::MplsIpBindUnbind(_) => "mpls_ip_bind_unbind",
            Self::MplsTunnelAddDel(_) => "mpls_tunnel_add_del",
        }
    }
}

/// One interface record in a dump reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceDetail {
    /// Interface index.
    pub sw_if_index: u32,
    /// Parent interface index (self for top-level interfaces).
    pub sup_sw_if_index: u32,
    /// Interface name.
    pub interface_name: String,
    /// Admin state, `1` = up.
    pub admin_up_down: u8,
    /// Link state, `1` = up.
    pub link_up_down: u8,
    /// Sub-interface id, `0` for top-level interfaces.
    pub sub_id: u32,
}

/// One bridge-domain record in a dump reply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BridgeDomainDetail {
    /// Bridge domain identifier.
    pub bd_id: u32,
    /// Broadcast/multicast flooding enabled.
    pub flood: u8,
    /// Unknown-unicast flooding enabled.
    pub uu_flood: u8,
    /// Forwarding enabled.
    pub forward: u8,
    /// MAC learning enabled.
    pub learn: u8,
    /// ARP termination enabled.
    pub arp_term: u8,
    /// Bridge virtual interface, [`INDEX_NONE`] if absent.
    pub bvi_sw_if_index: u32,
    /// Number of member interfaces.
    pub n_sw_ifs: u32,
}

/// Control-plane reply from the engine.
///
/// A reply may or may not carry a status code: acknowledgments and the
/// CLI/version replies do, dump replies do not.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Response {
    /// Acknowledgment for a mutating operation.
    Ack {
        /// Status code, `0` on success.
        retval: i32,
    },
    /// Acknowledgment for an operation that allocated an interface.
    Created {
        /// Status code, `0` on success.
        retval: i32,
        /// Index of the new interface.
        sw_if_index: u32,
    },
    /// Inband CLI output.
    Cli {
        /// Status code, `0` on success.
        retval: i32,
        /// Output bytes, NUL-padded at the tail.
        reply: Vec<u8>,
    },
    /// Engine version information.
    Version {
        /// Status code, `0` on success.
        retval: i32,
        /// Program name.
        program: String,
        /// Version string.
        version: String,
        /// Build date.
        build_date: String,
    },
    /// Interface dump records.
    InterfaceDetails(Vec<InterfaceDetail>),
    /// Bridge-domain dump records.
    BridgeDomainDetails(Vec<BridgeDomainDetail>),
}

impl Response {
    /// Status code carried by the reply, if it has one.
    pub const fn retval(&self) -> Option<i32> {
        match self {
            Self::Ack { retval }
            | Self::Created { retval, .. }
            | Self::Cli { retval, .. }
            | Self::Version { retval, .. } => Some(*retval),
            Self::InterfaceDetails(_) | Self::BridgeDomainDetails(_) => None,
        }
    }
}
