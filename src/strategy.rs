use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::types::request::Request;
use crate::types::status::ElevatorStatus;

/// Scores how far a cabin is from serving a new request. Lower wins.
pub trait Strategy: Send {
    fn distance(&self, status: &ElevatorStatus, request: Request) -> u32;
}

/// Order in which candidate cabins are scored. Only decides ties.
#[derive(Debug, Clone, Default)]
pub enum DispatchOrder {
    /// Fresh permutation on every call.
    #[default]
    Shuffled,
    Seeded(StdRng),
    InOrder,
}

impl DispatchOrder {
    pub fn seeded(seed: u64) -> Self {
        DispatchOrder::Seeded(StdRng::seed_from_u64(seed))
    }

    pub fn arrange(&mut self, ids: &mut [usize]) {
        match self {
            DispatchOrder::Shuffled => ids.shuffle(&mut rand::rng()),
            DispatchOrder::Seeded(rng) => ids.shuffle(rng),
            DispatchOrder::InOrder => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_order_is_identity() {
        let mut ids = vec![0, 1, 2, 3];
        DispatchOrder::InOrder.arrange(&mut ids);
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn seeded_order_is_reproducible_permutation() {
        let mut a: Vec<usize> = (0..8).collect();
        let mut b = a.clone();
        DispatchOrder::seeded(7).arrange(&mut a);
        DispatchOrder::seeded(7).arrange(&mut b);
        assert_eq!(a, b);

        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..8).collect::<Vec<_>>());
    }
}
