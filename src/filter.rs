use log::debug;
use network_types::{
    eth::EthHdr,
    ip::{IpProto, Ipv4Hdr},
    udp::UdpHdr,
};

use crate::dhcp::{DhcpHdr, ETH_ALEN, HTYPE_ETHER};
use crate::views::{array_at, view_at};

/// UDP destination port of the DHCP server.
pub const DHCPD_PORT: u16 = 67;

// Offsets of the fields the walk consults. The discriminating bytes are read
// raw rather than through the surrounding header structs, whose enum fields
// (EtherType, IpProto) are not valid for arbitrary wire bytes.
const ETH_SRC: usize = 6;
const IPV4_PROTO: usize = EthHdr::LEN + 9;
const UDP_DEST: usize = EthHdr::LEN + Ipv4Hdr::LEN + 2;
const DHCP_OFFSET: usize = EthHdr::LEN + Ipv4Hdr::LEN + UdpHdr::LEN;

/// Per-packet outcome handed back to the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Continue normal processing.
    Pass,
    /// Discard the frame.
    Drop,
}

enum Walk {
    /// Not a UDP datagram to the DHCP server port; not our concern.
    NotApplicable,
    /// Addressed to the DHCP server port but ends before chaddr is readable.
    Truncated,
    /// A judgeable DHCP message and the source address of the frame
    /// that carried it.
    Candidate { dhcp: DhcpHdr, src_addr: [u8; 6] },
}

/// Walks Ethernet -> IPv4 -> UDP and extracts the DHCP message, if any.
/// Every length failure before the DHCP bound is a pass-through, not a drop.
///
/// Assumes an option-free IPv4 header; a datagram behind an IHL > 5 header is
/// misparsed and falls out as `NotApplicable`.
fn walk(frame: &[u8]) -> Walk {
    let Some(src_addr) = array_at::<6>(frame, ETH_SRC) else {
        return Walk::NotApplicable;
    };
    if frame.len() < EthHdr::LEN + Ipv4Hdr::LEN {
        return Walk::NotApplicable;
    }
    if frame[IPV4_PROTO] != IpProto::Udp as u8 {
        return Walk::NotApplicable;
    }
    if frame.len() < DHCP_OFFSET {
        return Walk::NotApplicable;
    }
    if u16::from_be_bytes([frame[UDP_DEST], frame[UDP_DEST + 1]]) != DHCPD_PORT {
        return Walk::NotApplicable;
    }
    let Some(dhcp) = view_at::<DhcpHdr>(frame, DHCP_OFFSET) else {
        return Walk::Truncated;
    };
    Walk::Candidate { dhcp, src_addr }
}

/// Compares the claimed client hardware address against the frame source
/// address. A non-Ethernet htype/hlen cannot be compared and is dropped.
fn validate(dhcp: &DhcpHdr, src_addr: &[u8; 6]) -> Verdict {
    if dhcp.htype != HTYPE_ETHER || dhcp.hlen != ETH_ALEN {
        debug!(
            "dhcp hardware address is not ethernet (htype {} hlen {})",
            dhcp.htype, dhcp.hlen
        );
        return Verdict::Drop;
    }
    if dhcp.chaddr[..ETH_ALEN as usize] != src_addr[..] {
        debug!("dhcp chaddr does not match the frame source address");
        return Verdict::Drop;
    }
    Verdict::Pass
}

/// Inspects one Ethernet frame and returns the verdict.
///
/// Pure and allocation-free: the frame is borrowed for the duration of the
/// call, nothing is retained, and identical frames always produce identical
/// verdicts, so invocations may run concurrently.
pub fn inspect(frame: &[u8]) -> Verdict {
    match walk(frame) {
        Walk::NotApplicable => Verdict::Pass,
        Walk::Truncated => {
            debug!("truncated dhcp message to port {DHCPD_PORT}, dropping");
            Verdict::Drop
        }
        Walk::Candidate { dhcp, src_addr } => validate(&dhcp, &src_addr),
    }
}
