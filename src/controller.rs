use std::sync::Arc;

use log::{debug, info};
use tokio::sync::Mutex;

use crate::config::FleetConfig;
use crate::elevator::Elevator;
use crate::error::FleetError;
use crate::strategies::scan::ScanStrategy;
use crate::strategy::{DispatchOrder, Strategy};
use crate::types::direction::Direction;
use crate::types::request::Request;
use crate::types::status::ElevatorStatus;

/// The cabins of one building and the policy that hands out requests.
///
/// All methods run synchronously to completion; share it through
/// [`FleetController`].
#[derive(Debug, Clone)]
pub struct Fleet<ST = ScanStrategy> {
    size: u8,
    elevators: Vec<Elevator>,
    order: DispatchOrder,
    strategy: ST,
}

impl Fleet<ScanStrategy> {
    pub fn new(elevators: usize, size: u8) -> Result<Self, FleetError> {
        Self::with_config(FleetConfig::new(elevators, size))
    }

    pub fn with_config(config: FleetConfig) -> Result<Self, FleetError> {
        Self::with_strategy(config, ScanStrategy::new(config.preempt_adjust))
    }

    pub fn disable_preempt_adjust(&mut self) {
        self.strategy.set_preempt_adjust(false);
    }
}

impl<ST: Strategy> Fleet<ST> {
    pub fn with_strategy(config: FleetConfig, strategy: ST) -> Result<Self, FleetError> {
        config.validate()?;
        let order = if config.randomize {
            DispatchOrder::Shuffled
        } else {
            DispatchOrder::InOrder
        };
        Ok(Self {
            size: config.floors,
            elevators: (0..config.elevators)
                .map(|id| Elevator::new(id, config.floors))
                .collect(),
            order,
            strategy,
        })
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn len(&self) -> usize {
        self.elevators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elevators.is_empty()
    }

    pub fn status(&self) -> Vec<ElevatorStatus> {
        self.elevators.iter().map(Elevator::status).collect()
    }

    /// One status line per cabin, space separated.
    pub fn status_line(&self) -> String {
        self.elevators
            .iter()
            .map(|e| e.status().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn distance(&self, id: usize, pickup: u8, dest: u8) -> u32 {
        self.strategy
            .distance(&self.elevators[id].status(), Request::new(pickup, dest))
    }

    /// Hand the request to the closest cabin and return its estimated
    /// distance. Ties go to whichever cabin was scored first.
    pub fn pickup(&mut self, pickup: u8, dest: u8) -> Result<u32, FleetError> {
        if pickup == dest {
            return Ok(0);
        }
        Request::new(pickup, dest).validate(self.size)?;

        let mut ids: Vec<usize> = (0..self.elevators.len()).collect();
        self.order.arrange(&mut ids);

        let Some((id, distance)) = ids
            .into_iter()
            .map(|id| (id, self.distance(id, pickup, dest)))
            .min_by_key(|&(_, distance)| distance)
        else {
            return Err(FleetError::InvalidConfig("fleet has no elevators".to_string()));
        };

        let elev = &mut self.elevators[id];
        elev.assign(pickup, dest)?;
        debug!("request {pickup} -> {dest} assigned to elevator {id} (distance {distance})");
        // A rider waiting on the cabin's own floor boards right away.
        let here = elev.current_floor();
        elev.update_floor(here);
        Ok(distance)
    }

    /// Move every cabin at most one floor.
    pub fn step(&mut self) {
        for elev in &mut self.elevators {
            let next = elev.next_floor();
            elev.update_floor(next);
        }
        info!("{}", self.status_line());
    }

    pub fn is_idle(&self, id: usize) -> bool {
        self.elevators[id].is_idle()
    }

    pub fn elevator(&self, id: usize) -> &Elevator {
        &self.elevators[id]
    }

    // Diagnostics and test hooks. Not used by dispatch itself.

    pub fn disable_randomizing(&mut self) {
        self.order = DispatchOrder::InOrder;
    }

    pub fn set_dispatch_order(&mut self, order: DispatchOrder) {
        self.order = order;
    }

    /// Out-of-range ids panic.
    pub fn set_elevator_state(&mut self, id: usize, floor: u8, direction: Direction) {
        self.elevators[id].set_state(floor, direction);
    }
}

/// Shared handle to a [`Fleet`]. Every call holds the fleet lock for its
/// whole duration, so callers only ever see a fully updated fleet.
#[derive(Debug, Clone)]
pub struct FleetController {
    fleet: Arc<Mutex<Fleet>>,
}

impl FleetController {
    pub fn new(elevators: usize, size: u8) -> Result<Self, FleetError> {
        Ok(Self::from_fleet(Fleet::new(elevators, size)?))
    }

    pub fn with_config(config: FleetConfig) -> Result<Self, FleetError> {
        Ok(Self::from_fleet(Fleet::with_config(config)?))
    }

    pub fn from_fleet(fleet: Fleet) -> Self {
        Self {
            fleet: Arc::new(Mutex::new(fleet)),
        }
    }

    pub async fn size(&self) -> u8 {
        self.fleet.lock().await.size()
    }

    pub async fn pickup(&self, pickup: u8, dest: u8) -> Result<u32, FleetError> {
        self.fleet.lock().await.pickup(pickup, dest)
    }

    pub async fn step(&self) {
        self.fleet.lock().await.step();
    }

    pub async fn status(&self) -> Vec<ElevatorStatus> {
        self.fleet.lock().await.status()
    }

    pub async fn status_line(&self) -> String {
        self.fleet.lock().await.status_line()
    }

    pub async fn distance(&self, id: usize, pickup: u8, dest: u8) -> u32 {
        self.fleet.lock().await.distance(id, pickup, dest)
    }

    pub async fn is_idle(&self, id: usize) -> bool {
        self.fleet.lock().await.is_idle(id)
    }

    pub async fn disable_randomizing(&self) {
        self.fleet.lock().await.disable_randomizing();
    }

    pub async fn disable_preempt_adjust(&self) {
        self.fleet.lock().await.disable_preempt_adjust();
    }

    pub async fn set_elevator_state(&self, id: usize, floor: u8, direction: Direction) {
        self.fleet
            .lock()
            .await
            .set_elevator_state(id, floor, direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet(elevators: usize) -> Fleet {
        let mut fleet = Fleet::new(elevators, 6).unwrap();
        fleet.disable_randomizing();
        fleet
    }

    #[test]
    fn rejects_bad_configuration() {
        assert!(Fleet::new(0, 6).is_err());
        assert!(FleetController::new(1, 1).is_err());
    }

    #[test]
    fn same_floor_pickup_is_a_no_op() {
        let mut fleet = fleet(1);
        assert_eq!(fleet.pickup(4, 4).unwrap(), 0);
        assert!(fleet.is_idle(0));
    }

    #[test]
    fn out_of_range_pickup_leaves_fleet_untouched() {
        let mut fleet = fleet(2);
        let before = fleet.status();
        let err = fleet.pickup(2, 9).unwrap_err();
        assert!(err.is_invalid_request());
        assert_eq!(fleet.status(), before);
    }

    #[test]
    fn ties_go_to_first_scored_cabin() {
        let mut fleet = fleet(3);
        fleet.pickup(5, 6).unwrap();
        assert!(!fleet.is_idle(0));
        assert!(fleet.is_idle(1));
        assert!(fleet.is_idle(2));
    }

    #[test]
    fn busy_cabin_loses_to_idle_one() {
        let mut fleet = fleet(2);
        fleet.pickup(1, 6).unwrap();
        fleet.step();
        // cabin 0 is heading down to floor 1; cabin 1 is parked at 3
        fleet.pickup(4, 5).unwrap();
        assert_eq!(fleet.status()[1].requests[&4], vec![5]);
    }

    #[test]
    fn pickup_on_current_floor_boards_immediately() {
        let mut fleet = fleet(1);
        fleet.set_elevator_state(0, 2, Direction::Up);
        fleet.pickup(2, 5).unwrap();
        let status = &fleet.status()[0];
        assert_eq!(status.stops, vec![5]);
        assert!(status.requests[&2].is_empty());
    }

    #[test]
    fn pickup_never_turns_the_cabin() {
        let mut fleet = fleet(1);
        fleet.set_elevator_state(0, 2, Direction::Up);
        fleet.pickup(5, 1).unwrap();
        assert_eq!(fleet.elevator(0).direction(), Direction::Up);

        // rider on the cabin's own floor heading the other way stays queued
        fleet.pickup(2, 1).unwrap();
        assert_eq!(fleet.elevator(0).direction(), Direction::Up);
        assert_eq!(fleet.status()[0].requests[&2], vec![1]);

        // same floor, same way: boards at once, still heading up
        fleet.pickup(2, 6).unwrap();
        assert_eq!(fleet.elevator(0).direction(), Direction::Up);
        assert_eq!(fleet.status()[0].stops, vec![6]);
    }

    #[test]
    fn disable_preempt_adjust_turns_off_slack() {
        let mut fleet = fleet(1);
        assert!(fleet.strategy.preempt_adjust());
        fleet.set_elevator_state(0, 3, Direction::Up);
        // idle cabin, pickup just below: round trip 2*1 - 1, plus slack
        assert_eq!(fleet.distance(0, 2, 1), 2);

        fleet.disable_preempt_adjust();
        assert!(!fleet.strategy.preempt_adjust());
        assert_eq!(fleet.distance(0, 2, 1), 1);
    }

    #[test]
    fn status_line_lists_every_cabin() {
        let fleet = fleet(2);
        let line = fleet.status_line();
        assert!(line.contains("[elev 0]"));
        assert!(line.contains("[elev 1]"));
    }

    #[tokio::test]
    async fn controller_serialises_concurrent_callers() {
        let ctrl = FleetController::new(3, 10).unwrap();
        let mut handles = Vec::new();
        for i in 0..8u8 {
            let ctrl = ctrl.clone();
            handles.push(tokio::spawn(async move {
                ctrl.pickup(1 + i, 10 - i).await.unwrap();
                ctrl.step().await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        for _ in 0..100 {
            ctrl.step().await;
        }
        assert!(ctrl.status().await.iter().all(ElevatorStatus::is_idle));
    }
}
