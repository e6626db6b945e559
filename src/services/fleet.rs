use std::pin::Pin;
use std::task::{Context, Poll};

use tower::Service;

use crate::controller::FleetController;
use crate::types::cmd::{Command, Reply};

/// Runs [`Command`]s against a shared fleet.
#[derive(Debug, Clone)]
pub struct FleetService {
    fleet: FleetController,
}

impl FleetService {
    pub fn new(fleet: FleetController) -> Self {
        FleetService { fleet }
    }

    pub fn fleet(&self) -> &FleetController {
        &self.fleet
    }
}

impl Service<Command> for FleetService {
    type Response = Reply;
    type Error = anyhow::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Reply, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, command: Command) -> Self::Future {
        let fleet = self.fleet.clone();
        Box::pin(async move {
            match command {
                Command::Pickup { pickup, dest } => {
                    let distance = fleet.pickup(pickup, dest).await?;
                    Ok(Reply::Distance(distance))
                }
                Command::Step(n) => {
                    for _ in 0..n {
                        fleet.step().await;
                    }
                    Ok(Reply::Stepped(n))
                }
                Command::Status => Ok(Reply::Status(fleet.status().await)),
            }
        })
    }
}
