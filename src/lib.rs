//! Dispatch core for a fleet of elevators sharing one shaft height.
//!
//! Each [`Elevator`] runs SCAN: it keeps moving while there is work ahead,
//! reverses otherwise, and parks at the middle floor when idle. The
//! [`Fleet`] scores every cabin with a [`Strategy`] and hands each new
//! request to the closest one. [`FleetController`] shares a fleet behind a
//! single lock, and the [`services`] wrap it as tower services.

pub mod config;
pub mod controller;
pub mod elevator;
pub mod error;
pub mod services;
pub mod strategies;
pub mod strategy;
pub mod types;

pub use config::FleetConfig;
pub use controller::{Fleet, FleetController};
pub use elevator::Elevator;
pub use error::{FleetError, RejectReason};
pub use strategies::scan::ScanStrategy;
pub use strategy::{DispatchOrder, Strategy};
pub use types::cmd::{Command, Reply};
pub use types::direction::Direction;
pub use types::request::Request;
pub use types::status::{ElevatorStatus, Ends};
