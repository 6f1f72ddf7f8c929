// cargo watch -x 'fmt' -x 'test'

//! IPv4 network calculator.
//!
//! Given a network in CIDR notation and a host IP, [`calculate`] returns the
//! network address, gateway and subnet mask, or the reason the input was
//! rejected.

pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{AddressError, CalcError, ErrorKind, Field};
pub use models::CalculationResult;
pub use processing::calculate;
