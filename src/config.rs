use crate::error::FleetError;

pub const DEFAULT_ELEVATORS: usize = 4;
pub const DEFAULT_FLOORS: u8 = 10;

/// Smallest shaft whose middle floor (`floors / 2`) is a real floor.
pub const MIN_FLOORS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetConfig {
    pub elevators: usize,
    pub floors: u8,
    /// Shuffle the scoring order on every pickup.
    pub randomize: bool,
    /// Add slack to estimates that assume a turnaround.
    pub preempt_adjust: bool,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            elevators: DEFAULT_ELEVATORS,
            floors: DEFAULT_FLOORS,
            randomize: true,
            preempt_adjust: true,
        }
    }
}

impl FleetConfig {
    pub fn new(elevators: usize, floors: u8) -> Self {
        Self {
            elevators,
            floors,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FleetError> {
        if self.elevators == 0 {
            return Err(FleetError::InvalidConfig(
                "a fleet needs at least one elevator".to_string(),
            ));
        }
        if self.floors < MIN_FLOORS {
            return Err(FleetError::InvalidConfig(format!(
                "shaft has {} floor(s), need at least {MIN_FLOORS}",
                self.floors
            )));
        }
        Ok(())
    }
}
