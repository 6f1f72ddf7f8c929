//! Value types for the network calculator.
//!
//! - [`ipv4`] - address codec, CIDR masks and network/gateway arithmetic
//! - [`CalculationResult`] - the record returned by a successful calculation
//! - [`Preset`] - predefined network/CIDR inputs

mod ipv4;
mod preset;
mod result;

// Re-export public types
pub use ipv4::{
    cidr_mask_string, format_address, gateway_addr, get_cidr_mask, network_addr, parse_address,
    Cidr, NetworkSpec, MAX_LENGTH,
};
pub use preset::{default_presets, parse_presets, Preset};
pub use result::{CalculationResult, DNS1, DNS2};
