//! Local-network address resolution.
//!
//! Student devices reach the server over the LAN, so the check-in payload must carry an
//! address they can route to rather than `localhost`.

use std::net::{IpAddr, Ipv4Addr};

/// One address bound to a host interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddr {
    pub name: String,
    pub ip: IpAddr,
    pub internal: bool,
}

/// Picks the address a LAN peer should use to reach this host.
///
/// Order of preference:
/// 1. a private IPv4 (10/8, 172.16/12, 192.168/16) on a non-internal interface
/// 2. any other non-internal IPv4 that is not self-assigned (169.254/16)
/// 3. a self-assigned IPv4, as a last resort before loopback
/// 4. `127.0.0.1`
pub fn select_lan_address(interfaces: &[InterfaceAddr]) -> IpAddr {
    let candidates: Vec<(&str, Ipv4Addr)> = interfaces
        .iter()
        .filter(|i| !i.internal)
        .filter_map(|i| match i.ip {
            IpAddr::V4(v4) if !v4.is_loopback() && !v4.is_unspecified() => {
                Some((i.name.as_str(), v4))
            }
            _ => None,
        })
        .collect();

    let chosen = candidates
        .iter()
        .find(|(_, ip)| ip.is_private())
        .or_else(|| candidates.iter().find(|(_, ip)| !ip.is_link_local()))
        .or_else(|| candidates.first());

    match chosen {
        Some((name, ip)) => {
            tracing::debug!(interface = name, ip = %ip, "Selected LAN address");
            IpAddr::V4(*ip)
        }
        None => {
            tracing::debug!("No external IPv4 interface; using loopback");
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        }
    }
}

/// Enumerates the host interfaces and resolves the LAN address.
///
/// Enumeration failure is not an error for callers; it degrades to loopback.
pub fn resolve_lan_address() -> IpAddr {
    let interfaces = match if_addrs::get_if_addrs() {
        Ok(list) => list
            .into_iter()
            .map(|i| InterfaceAddr {
                internal: i.is_loopback(),
                ip: i.ip(),
                name: i.name,
            })
            .collect::<Vec<_>>(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to enumerate network interfaces; using loopback");
            Vec::new()
        }
    };

    select_lan_address(&interfaces)
}
