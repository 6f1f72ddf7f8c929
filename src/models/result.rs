//! Outcome of a successful calculation.

use serde::Serialize;

/// Primary DNS server handed out with every result.
pub const DNS1: &str = "8.8.8.8";
/// Secondary DNS server handed out with every result.
pub const DNS2: &str = "8.8.4.4";

/// Facts computed for one network/IP pair.
///
/// Built fresh by [`crate::calculate`] and never modified afterwards.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    network_address: String,
    ip: String,
    gateway: String,
    subnet_mask: String,
    dns1: String,
    dns2: String,
}

impl CalculationResult {
    pub(crate) fn new(
        network_address: String,
        ip: &str,
        gateway: String,
        subnet_mask: String,
    ) -> Self {
        CalculationResult {
            network_address,
            ip: ip.to_string(),
            gateway,
            subnet_mask,
            dns1: DNS1.to_string(),
            dns2: DNS2.to_string(),
        }
    }

    /// Network in "A.B.C.D/CIDR" form, host bits cleared.
    pub fn network_address(&self) -> &str {
        &self.network_address
    }

    /// The IP text exactly as it was entered.
    pub fn ip(&self) -> &str {
        &self.ip
    }

    pub fn gateway(&self) -> &str {
        &self.gateway
    }

    pub fn subnet_mask(&self) -> &str {
        &self.subnet_mask
    }

    pub fn dns1(&self) -> &str {
        &self.dns1
    }

    pub fn dns2(&self) -> &str {
        &self.dns2
    }

    /// Text block put on the clipboard by "copy".
    pub fn clipboard_text(&self) -> String {
        format!(
            "IP: {ip}\nGateway: {gateway}\nSubnet: {mask}\nDNS1: {dns1}\nDNS2: {dns2}",
            ip = self.ip,
            gateway = self.gateway,
            mask = self.subnet_mask,
            dns1 = self.dns1,
            dns2 = self.dns2,
        )
        .trim()
        .to_string()
    }
}
