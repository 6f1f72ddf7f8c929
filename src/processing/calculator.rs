//! The calculation entry point.
//!
//! Parses the "network/CIDR" text and the host IP, derives mask, network
//! address and gateway, and checks that the IP belongs to the network.

use crate::error::{CalcError, Field};
use crate::models::{
    cidr_mask_string, format_address, parse_address, CalculationResult, Cidr, NetworkSpec,
};

/// Calculate network address, gateway and subnet mask.
///
/// The network field is authoritative: the network address comes from it,
/// masked, and the IP is only checked for membership. Nothing partial is
/// returned on failure.
///
/// # Examples
/// ```
/// let result = netcalc::calculate("192.168.1.0/27", "192.168.1.10").unwrap();
/// assert_eq!(result.gateway(), "192.168.1.1");
/// assert_eq!(result.subnet_mask(), "255.255.255.224");
/// ```
pub fn calculate(network_cidr: &str, ip: &str) -> Result<CalculationResult, CalcError> {
    log::debug!("calculate(network={network_cidr:?}, ip={ip:?})");

    let spec = parse_network(network_cidr)?;
    let ip_bits = parse_address(ip).map_err(|e| e.in_field(Field::Ip))?;

    if !spec.contains(ip_bits) {
        log::info!("{} is outside {spec}", format_address(ip_bits));
        return Err(CalcError::AddressOutOfRange);
    }

    let result = CalculationResult::new(
        spec.to_string(),
        ip,
        format_address(spec.gateway()),
        cidr_mask_string(spec.cidr),
    );
    log::debug!("calculated {:?}", result);
    Ok(result)
}

/// Parse "A.B.C.D/len". Exactly one `/` is required.
pub fn parse_network(network_cidr: &str) -> Result<NetworkSpec, CalcError> {
    let (addr_text, cidr_text) = network_cidr
        .split_once('/')
        .filter(|(_, cidr_text)| !cidr_text.contains('/'))
        .ok_or(CalcError::MissingCidr)?;

    let cidr = Cidr::parse(cidr_text).ok_or_else(|| CalcError::InvalidCidr {
        cidr: cidr_text.trim().to_string(),
    })?;
    let addr = parse_address(addr_text).map_err(|e| e.in_field(Field::Network))?;

    Ok(NetworkSpec::new(addr, cidr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::{DNS1, DNS2};

    #[test]
    fn test_calculate_27() {
        let result = calculate("192.168.1.0/27", "192.168.1.10").expect("Error calculating /27");
        assert_eq!(result.network_address(), "192.168.1.0/27");
        assert_eq!(result.ip(), "192.168.1.10");
        assert_eq!(result.gateway(), "192.168.1.1");
        assert_eq!(result.subnet_mask(), "255.255.255.224");
        assert_eq!(result.dns1(), DNS1);
        assert_eq!(result.dns2(), DNS2);
    }

    #[test]
    fn test_calculate_outside_block() {
        assert_eq!(
            calculate("192.168.1.0/27", "192.168.1.40"),
            Err(CalcError::AddressOutOfRange)
        );
        assert_eq!(
            calculate("10.0.0.0/8", "9.255.255.255"),
            Err(CalcError::AddressOutOfRange)
        );
        // last address of the /27 block is still inside
        assert!(calculate("192.168.1.0/27", "192.168.1.31").is_ok());
    }

    #[test]
    fn test_calculate_missing_cidr() {
        assert_eq!(
            calculate("192.168.1.0", "192.168.1.10"),
            Err(CalcError::MissingCidr)
        );
        assert_eq!(
            calculate("192.168.1.0/24/8", "192.168.1.10"),
            Err(CalcError::MissingCidr)
        );
        assert_eq!(calculate("", "192.168.1.10"), Err(CalcError::MissingCidr));
    }

    #[test]
    fn test_calculate_invalid_cidr() {
        assert_eq!(
            calculate("192.168.1.0/33", "192.168.1.10"),
            Err(CalcError::InvalidCidr {
                cidr: "33".to_string()
            })
        );
        for bad in ["192.168.1.0/", "192.168.1.0/abc", "192.168.1.0/-1", "192.168.1.0/24.5"] {
            let err = calculate(bad, "192.168.1.10").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidCidr, "input {bad:?}");
        }
    }

    #[test]
    fn test_calculate_address_errors_tagged_with_field() {
        assert_eq!(
            calculate("192.168.1.999/24", "192.168.1.10"),
            Err(CalcError::OutOfRange {
                field: Field::Network
            })
        );
        assert_eq!(
            calculate("192.168.1/24", "192.168.1.10"),
            Err(CalcError::InvalidFormat {
                field: Field::Network
            })
        );
        assert_eq!(
            calculate("192.168.1.0/24", "192.168.1.256"),
            Err(CalcError::OutOfRange { field: Field::Ip })
        );
        assert_eq!(
            calculate("192.168.1.0/24", "192.168..1"),
            Err(CalcError::InvalidFormat { field: Field::Ip })
        );
    }

    #[test]
    fn test_calculate_cidr_checked_before_addresses() {
        // both the prefix and the address are bad, the prefix is reported
        assert_eq!(
            calculate("999.1.1.1/40", "x").unwrap_err().kind(),
            ErrorKind::InvalidCidr
        );
    }

    #[test]
    fn test_calculate_masks_network_host_bits() {
        let result =
            calculate("192.168.10.20/24", "192.168.10.99").expect("Error calculating /24");
        assert_eq!(result.network_address(), "192.168.10.0/24");
        assert_eq!(result.gateway(), "192.168.10.1");
        assert_eq!(result.subnet_mask(), "255.255.255.0");
    }

    #[test]
    fn test_calculate_keeps_ip_text() {
        let result = calculate(" 10.0.0.0/8 ", " 10.20.30.40 ").expect("Error calculating /8");
        assert_eq!(result.ip(), " 10.20.30.40 ");
        assert_eq!(result.network_address(), "10.0.0.0/8");
    }

    #[test]
    fn test_calculate_prefix_edges() {
        let any = calculate("172.16.5.4/0", "8.8.8.8").expect("Error calculating /0");
        assert_eq!(any.network_address(), "0.0.0.0/0");
        assert_eq!(any.gateway(), "0.0.0.1");
        assert_eq!(any.subnet_mask(), "0.0.0.0");

        let host = calculate("10.1.1.7/32", "10.1.1.7").expect("Error calculating /32");
        assert_eq!(host.network_address(), "10.1.1.7/32");
        assert_eq!(host.gateway(), "10.1.1.8");
        assert_eq!(host.subnet_mask(), "255.255.255.255");
        assert_eq!(
            calculate("10.1.1.7/32", "10.1.1.8"),
            Err(CalcError::AddressOutOfRange)
        );
    }

    #[test]
    fn test_calculate_gateway_wraps_at_top() {
        let result =
            calculate("255.255.255.255/32", "255.255.255.255").expect("Error calculating top /32");
        assert_eq!(result.gateway(), "0.0.0.0");
    }

    #[test]
    fn test_parse_network() {
        let spec = parse_network("10.2.3.4/16").expect("Error parsing network");
        assert_eq!(spec.to_string(), "10.2.0.0/16");
        assert_eq!(spec.cidr.bits(), 16);
    }
}
