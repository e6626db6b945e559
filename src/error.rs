use std::fmt;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    SameFloor,
    OutOfRange { size: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    InvalidRequest {
        pickup: u8,
        dest: u8,
        reason: RejectReason,
    },
    InvalidConfig(String),
}

impl FleetError {
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, FleetError::InvalidRequest { .. })
    }
}

impl Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::InvalidRequest {
                pickup,
                dest,
                reason: RejectReason::SameFloor,
            } => write!(
                f,
                "Invalid request {pickup} -> {dest}: pickup floor is the same as destination"
            ),
            FleetError::InvalidRequest {
                pickup,
                dest,
                reason: RejectReason::OutOfRange { size },
            } => write!(
                f,
                "Invalid request {pickup} -> {dest}: floors must be within 1..={size}"
            ),
            FleetError::InvalidConfig(msg) => write!(f, "Invalid fleet configuration: {msg}"),
        }
    }
}

impl std::error::Error for FleetError {}
