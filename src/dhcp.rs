use core::mem;

/// Fixed-offset fields of a BOOTP/DHCP message, through the 16-byte client
/// hardware address. The 64-byte `sname`, 128-byte `file` and the variable
/// options field follow on the wire but are never read by this filter, so the
/// view stops at the start of `sname`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct DhcpHdr {
    pub op: u8,
    pub htype: u8,
    pub hlen: u8,
    pub hops: u8,
    pub xid: u32,
    pub secs: u16,
    pub flags: u16,
    pub ciaddr: u32,
    pub yiaddr: u32,
    pub siaddr: u32,
    pub giaddr: u32,
    pub chaddr: [u8; 16],
}

impl DhcpHdr {
    /// 44 bytes, the offset of `sname`. A port-67 datagram shorter than this
    /// cannot be judged and is dropped.
    pub const LEN: usize = mem::size_of::<DhcpHdr>();
}

/// htype value for Ethernet.
pub const HTYPE_ETHER: u8 = 1;

/// hlen value for Ethernet, and the number of chaddr bytes compared.
pub const ETH_ALEN: u8 = 6;
