//! Parse DHCP packets to port 67 to verify that the client hardware address
//! matches the layer-2 source address. If the addresses do not match, the
//! packet is rejected on the interface.
//!
//! The crate is the inspection function itself plus the static chain
//! descriptor handed to the filter-chain arbiter at attach time. Attaching to
//! an interface, scheduling per frame and enforcing the verdict are the host
//! environment's job.

#![cfg_attr(not(test), no_std)]

pub mod chain;
pub mod dhcp;
pub mod filter;
mod views;

pub use chain::{chain_config, ChainConfig};
pub use filter::{inspect, Verdict};
