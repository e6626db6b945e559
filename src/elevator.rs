use std::collections::BTreeMap;

use log::debug;

use crate::error::FleetError;
use crate::types::direction::Direction;
use crate::types::request::Request;
use crate::types::status::{ElevatorStatus, Ends};

/// One cabin running the SCAN policy.
///
/// Floors are 1-based; `stops` and `requests` are indexed by `floor - 1`.
#[derive(Debug, Clone)]
pub struct Elevator {
    id: usize,
    size: u8,
    current_floor: u8,
    direction: Direction,
    stops: Vec<bool>,
    requests: Vec<Vec<u8>>,
}

impl Elevator {
    /// A fresh cabin waits at the middle floor, where calls from above and
    /// below are equally likely.
    pub fn new(id: usize, size: u8) -> Self {
        Self {
            id,
            size,
            current_floor: size / 2,
            direction: Direction::Up,
            stops: vec![false; usize::from(size)],
            requests: vec![Vec::new(); usize::from(size)],
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn current_floor(&self) -> u8 {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn idx(floor: u8) -> usize {
        usize::from(floor) - 1
    }

    fn middle_floor(&self) -> u8 {
        self.size / 2
    }

    fn has_work_at(&self, floor: u8) -> bool {
        let idx = Self::idx(floor);
        self.stops[idx] || !self.requests[idx].is_empty()
    }

    pub fn status(&self) -> ElevatorStatus {
        let stops = (1..=self.size)
            .filter(|&floor| self.stops[Self::idx(floor)])
            .collect();
        let requests = (1..=self.size)
            .map(|floor| (floor, self.requests[Self::idx(floor)].clone()))
            .collect::<BTreeMap<_, _>>();
        ElevatorStatus {
            id: self.id,
            current_floor: self.current_floor,
            direction: self.direction,
            ends: self.ends(),
            stops,
            requests,
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.stops.iter().any(|&s| s) && self.requests.iter().all(Vec::is_empty)
    }

    /// Recomputed on every call from the current floor, stops and queued pickups.
    pub fn ends(&self) -> Ends {
        (1..=self.size)
            .filter(|&floor| self.has_work_at(floor))
            .fold(Ends::at(self.current_floor), Ends::cover)
    }

    /// Queue a rider at `pickup_floor`. The cabin does not move.
    pub fn assign(&mut self, pickup_floor: u8, dest_floor: u8) -> Result<(), FleetError> {
        Request::new(pickup_floor, dest_floor).validate(self.size)?;
        debug!(
            "elevator {} queued request {pickup_floor} -> {dest_floor}",
            self.id
        );
        self.requests[Self::idx(pickup_floor)].push(dest_floor);
        Ok(())
    }

    /// Arrive at `floor`: release riders for this floor, then board everyone
    /// waiting here whose destination lies in the travel direction. At the
    /// terminal floors every destination qualifies.
    pub fn update_floor(&mut self, floor: u8) {
        self.current_floor = floor;
        let idx = Self::idx(floor);
        self.stops[idx] = false;

        let at_terminal = floor == 1 || floor == self.size;
        let sign = self.direction.sign();
        let waiting = std::mem::take(&mut self.requests[idx]);
        let (boarding, left): (Vec<u8>, Vec<u8>) = waiting.into_iter().partition(|&dest| {
            at_terminal || sign * (i32::from(dest) - i32::from(floor)) > 0
        });
        for dest in boarding {
            self.stops[Self::idx(dest)] = true;
        }
        self.requests[idx] = left;
    }

    /// SCAN: keep going while anything lies ahead, otherwise reverse. An idle
    /// cabin drifts back to the middle floor.
    ///
    /// Unlike plain SCAN, a cabin that reverses while riders still wait on its
    /// own floor holds that floor for one step so they can board in the new
    /// direction; otherwise it would bounce between two floors forever.
    pub fn next_floor(&mut self) -> u8 {
        if self.is_idle() {
            let middle = self.middle_floor();
            if self.current_floor == middle {
                return self.current_floor;
            }
            self.direction = Direction::toward(self.current_floor, middle);
            return self.direction.advance(self.current_floor);
        }

        let step = self.direction.sign();
        let mut floor = i32::from(self.current_floor) + step;
        let found = loop {
            if floor < 1 || floor > i32::from(self.size) {
                break false;
            }
            if self.has_work_at(floor as u8) {
                break true;
            }
            floor += step;
        };

        if !found {
            self.direction = self.direction.reversed();
            // Riders left waiting here were heading the other way; board them now.
            if !self.requests[Self::idx(self.current_floor)].is_empty() {
                return self.current_floor;
            }
        }
        self.direction.advance(self.current_floor)
    }

    /// Place the cabin without going through the normal transitions.
    pub fn set_state(&mut self, floor: u8, direction: Direction) {
        self.current_floor = floor;
        self.direction = direction;
    }
}
