//! Local network address discovery.

use std::net::{IpAddr, Ipv4Addr};

/// First non-loopback IPv4 address among the host's interfaces.
///
/// Interfaces are scanned in system enumeration order. Returns `None` when
/// the host has no externally visible IPv4 address or enumeration fails.
pub fn external_ipv4() -> Option<Ipv4Addr> {
    let interfaces = if_addrs::get_if_addrs().ok()?;
    interfaces.into_iter().find_map(|iface| {
        if iface.is_loopback() {
            return None;
        }
        match iface.ip() {
            IpAddr::V4(addr) => Some(addr),
            IpAddr::V6(_) => None,
        }
    })
}
