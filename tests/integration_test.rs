//! Integration tests for netcalc
//!
//! These tests drive the public API the way a front end does.

use netcalc::config::Config;
use netcalc::models::{parse_address, DNS1, DNS2};
use netcalc::processing::{Session, SessionState};
use netcalc::{calculate, CalcError, ErrorKind, Field};

#[test]
fn test_scenario_inside_27() {
    let result = calculate("192.168.1.0/27", "192.168.1.10").expect("Failed to calculate");
    assert_eq!(result.network_address(), "192.168.1.0/27");
    assert_eq!(result.gateway(), "192.168.1.1");
    assert_eq!(result.subnet_mask(), "255.255.255.224");
    assert_eq!(result.dns1(), DNS1);
    assert_eq!(result.dns2(), DNS2);
}

#[test]
fn test_scenario_rejections() {
    let cases = [
        ("192.168.1.0/27", "192.168.1.40", ErrorKind::AddressOutOfRange),
        ("10.0.0.0/8", "9.255.255.255", ErrorKind::AddressOutOfRange),
        ("192.168.1.0", "192.168.1.10", ErrorKind::MissingCidr),
        ("192.168.1.0/33", "192.168.1.10", ErrorKind::InvalidCidr),
        ("192.168.1.999/24", "192.168.1.10", ErrorKind::OutOfRange),
    ];
    for (network, ip, kind) in cases {
        let err = calculate(network, ip).expect_err("Calculation should fail");
        assert_eq!(err.kind(), kind, "calculate({network:?}, {ip:?})");
    }
    assert_eq!(
        calculate("192.168.1.999/24", "192.168.1.10"),
        Err(CalcError::OutOfRange {
            field: Field::Network
        })
    );
}

#[test]
fn test_every_preset_accepts_its_own_network_address() {
    let config = Config::default();
    for preset in &config.presets {
        let (addr, prefix) = preset.value.split_once('/').expect("Preset without prefix");
        let result = calculate(&preset.value, addr).expect("Preset should calculate");
        assert!(result.network_address().ends_with(&format!("/{prefix}")));
    }
}

#[test]
fn test_whole_block_membership() {
    // every address of a /27 is inside, the neighbours are not
    let base = parse_address("192.168.1.0").unwrap();
    for offset in 0..32u32 {
        let ip = netcalc::models::format_address(base + offset);
        assert!(calculate("192.168.1.0/27", &ip).is_ok(), "{ip}");
    }
    assert!(calculate("192.168.1.0/27", "192.168.0.255").is_err());
    assert!(calculate("192.168.1.0/27", "192.168.1.32").is_err());
}

#[test]
fn test_session_round() {
    let mut session = Session::new();
    session.set_network("192.168.10.20/24");
    session.set_ip("192.168.10.77");
    match session.calculate() {
        SessionState::Success(result) => {
            assert_eq!(result.network_address(), "192.168.10.0/24");
            assert_eq!(result.ip(), "192.168.10.77");
        }
        other => panic!("Expected success, got {other:?}"),
    }

    session.set_network("192.168.11.0/24");
    assert_eq!(
        session.calculate(),
        &SessionState::Failed(CalcError::AddressOutOfRange)
    );
    assert!(session.copy_text().is_none());
}
