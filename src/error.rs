//! Error types for address parsing and network calculation.
//!
//! Every error here is recoverable: a rejected calculation leaves the caller
//! ready to accept the next input.

use std::fmt;

/// Failure decoding a dotted-decimal address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// Not exactly four parts, or an empty part.
    #[error("Invalid IP format")]
    InvalidFormat,
    /// A part that is not a plain decimal number in 0-255.
    #[error("IP parts must be 0-255")]
    OutOfRange,
}

impl AddressError {
    /// Attach the input field the address was read from.
    pub fn in_field(self, field: Field) -> CalcError {
        match self {
            AddressError::InvalidFormat => CalcError::InvalidFormat { field },
            AddressError::OutOfRange => CalcError::OutOfRange { field },
        }
    }
}

/// The two text inputs of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Network,
    Ip,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Network => write!(f, "Network"),
            Field::Ip => write!(f, "IP"),
        }
    }
}

/// A rejected calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("Network must be in CIDR format, e.g. 192.168.100.0/24")]
    MissingCidr,
    #[error("CIDR must be between 0 and 32 (got {cidr:?})")]
    InvalidCidr { cidr: String },
    #[error("{field}: Invalid IP format")]
    InvalidFormat { field: Field },
    #[error("{field}: IP parts must be 0-255")]
    OutOfRange { field: Field },
    #[error("IP is not in the specified network range")]
    AddressOutOfRange,
}

/// Category of a [`CalcError`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingCidr,
    InvalidCidr,
    InvalidFormat,
    OutOfRange,
    AddressOutOfRange,
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::MissingCidr => ErrorKind::MissingCidr,
            CalcError::InvalidCidr { .. } => ErrorKind::InvalidCidr,
            CalcError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            CalcError::OutOfRange { .. } => ErrorKind::OutOfRange,
            CalcError::AddressOutOfRange => ErrorKind::AddressOutOfRange,
        }
    }

    /// The input field the error was found in, if it is tied to one.
    pub fn field(&self) -> Option<Field> {
        match self {
            CalcError::InvalidFormat { field } | CalcError::OutOfRange { field } => Some(*field),
            CalcError::MissingCidr | CalcError::InvalidCidr { .. } => Some(Field::Network),
            CalcError::AddressOutOfRange => None,
        }
    }
}
