use crate::error::{FleetError, RejectReason};
use crate::types::direction::Direction;

/// A passenger waiting at `pickup` who wants to ride to `dest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Request {
    pub pickup: u8,
    pub dest: u8,
}

impl Request {
    pub fn new(pickup: u8, dest: u8) -> Self {
        Self { pickup, dest }
    }

    pub fn direction(&self) -> Direction {
        Direction::toward(self.pickup, self.dest)
    }

    pub fn validate(&self, size: u8) -> Result<(), FleetError> {
        let reason = if self.pickup == self.dest {
            RejectReason::SameFloor
        } else if !in_shaft(self.pickup, size) || !in_shaft(self.dest, size) {
            RejectReason::OutOfRange { size }
        } else {
            return Ok(());
        };
        Err(FleetError::InvalidRequest {
            pickup: self.pickup,
            dest: self.dest,
            reason,
        })
    }
}

pub(crate) fn in_shaft(floor: u8, size: u8) -> bool {
    (1..=size).contains(&floor)
}
