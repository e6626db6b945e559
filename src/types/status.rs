use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Display;

use crate::types::direction::Direction;

/// Lowest and highest floor a cabin still has to reach, current floor included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ends {
    pub low: u8,
    pub high: u8,
}

impl Ends {
    pub fn at(floor: u8) -> Self {
        Self {
            low: floor,
            high: floor,
        }
    }

    pub fn cover(self, floor: u8) -> Self {
        Self {
            low: self.low.min(floor),
            high: self.high.max(floor),
        }
    }

    pub fn span(&self) -> u32 {
        u32::from(self.high - self.low)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorStatus {
    pub id: usize,
    pub current_floor: u8,
    pub direction: Direction,
    pub ends: Ends,
    /// Floors where a rider must be released, ascending.
    pub stops: Vec<u8>,
    /// Destinations waiting at each floor of the shaft.
    pub requests: BTreeMap<u8, Vec<u8>>,
}

impl ElevatorStatus {
    pub fn is_idle(&self) -> bool {
        self.stops.is_empty() && self.requests.values().all(Vec::is_empty)
    }
}

impl Display for ElevatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pending: BTreeMap<_, _> = self
            .requests
            .iter()
            .filter(|(_, dests)| !dests.is_empty())
            .collect();
        write!(
            f,
            "[elev {}] : {} : {} : stops {:?} reqs {:?}",
            self.id, self.current_floor, self.direction, self.stops, pending
        )
    }
}
