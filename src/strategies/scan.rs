use crate::strategy::Strategy;
use crate::types::request::Request;
use crate::types::status::ElevatorStatus;

/// Slack added whenever the estimate assumes a turnaround. The snapshot may
/// be stale by the time the request lands, and new work only lengthens the
/// route.
pub const PREEMPT_ADJUST: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanStrategy {
    preempt_adjust: bool,
}

impl Default for ScanStrategy {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ScanStrategy {
    pub fn new(preempt_adjust: bool) -> Self {
        Self { preempt_adjust }
    }

    pub fn preempt_adjust(&self) -> bool {
        self.preempt_adjust
    }

    pub fn set_preempt_adjust(&mut self, enabled: bool) {
        self.preempt_adjust = enabled;
    }

    fn adjust(&self) -> u32 {
        if self.preempt_adjust { PREEMPT_ADJUST } else { 0 }
    }
}

impl Strategy for ScanStrategy {
    /// Three cases:
    ///  1. same direction (or idle cabin) and the pickup is still ahead: `D`
    ///  2. same direction but already passed: `2L - D`
    ///  3. opposite direction: out to the reversal end, then back to pickup
    fn distance(&self, status: &ElevatorStatus, request: Request) -> u32 {
        let current = status.current_floor;
        let request_sign = request.direction().sign();
        let d = u32::from(request.pickup.abs_diff(current));
        let reach = status.ends.cover(request.pickup).cover(current);

        if request.direction() == status.direction || status.is_idle() {
            if request_sign * d as i32 > 0 {
                d
            } else {
                2 * reach.span() - d + self.adjust()
            }
        } else {
            let end = if status.direction.sign() > 0 {
                reach.high
            } else {
                reach.low
            };
            u32::from(current.abs_diff(end))
                + u32::from(request.pickup.abs_diff(end))
                + self.adjust()
        }
    }
}
