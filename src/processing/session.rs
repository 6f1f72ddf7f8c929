//! Caller-side state around [`calculate`].
//!
//! `Idle -> calculate -> Success | Failed -> edit input -> Idle`

use crate::error::CalcError;
use crate::models::CalculationResult;
use crate::processing::calculate;

/// Outcome of the last calculation, if it is still current.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Success(CalculationResult),
    Failed(CalcError),
}

/// The two inputs plus the outcome of calculating them.
#[derive(Debug, Clone, Default)]
pub struct Session {
    network: String,
    ip: String,
    state: SessionState,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Replace the network/CIDR input. Drops any previous outcome.
    pub fn set_network(&mut self, network: &str) {
        self.network = network.to_string();
        self.state = SessionState::Idle;
    }

    /// Replace the IP input. Drops any previous outcome.
    pub fn set_ip(&mut self, ip: &str) {
        self.ip = ip.to_string();
        self.state = SessionState::Idle;
    }

    /// Run the calculation on the current inputs.
    ///
    /// The previous outcome is replaced as a whole, so a failed retry never
    /// leaves an old result next to the new error.
    pub fn calculate(&mut self) -> &SessionState {
        self.state = match calculate(&self.network, &self.ip) {
            Ok(result) => SessionState::Success(result),
            Err(e) => {
                log::info!("Rejected network={:?} ip={:?}: {e}", self.network, self.ip);
                SessionState::Failed(e)
            }
        };
        &self.state
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        match &self.state {
            SessionState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CalcError> {
        match &self.state {
            SessionState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Clipboard block for the current result; `None` unless in `Success`.
    pub fn copy_text(&self) -> Option<String> {
        self.result().map(CalculationResult::clipboard_text)
    }
}
