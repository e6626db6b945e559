use std::pin::Pin;
use std::sync::Arc;
use std::task::Poll;

use log::{debug, warn};
use tokio::sync::Mutex;
use tower::filter::Predicate;
use tower::{BoxError, Layer, Service, ServiceExt};

use crate::types::cmd::{Command, Reply};
use crate::types::request::in_shaft;

/// Parses text lines into [`Command`]s for the inner service.
pub struct CommandService<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> CommandService<S> {
    fn new(inner: S) -> Self {
        CommandService {
            inner: Arc::new(Mutex::new(inner)),
        }
    }
}

impl<S> Service<&str> for CommandService<S>
where
    S: Service<Command, Response = Reply> + Send + 'static,
    S::Error: Into<BoxError>,
    S::Future: Send + 'static,
{
    type Response = Reply;
    type Error = BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Reply, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, line: &str) -> Self::Future {
        let maybe_command = Command::try_from(line);
        let inner = self.inner.clone();

        Box::pin(async move {
            let command = match maybe_command {
                Ok(command) => command,
                Err(e) => {
                    warn!("Invalid command: {e:#}");
                    return Err(BoxError::from(e));
                }
            };
            debug!("Command received: {command}");
            let mut guard = inner.lock().await;
            let svc = ServiceExt::<Command>::ready(&mut *guard)
                .await
                .map_err(Into::<BoxError>::into)?;
            svc.call(command).await.map_err(Into::into)
        })
    }
}

pub struct CommandLayer;

impl<S> Layer<S> for CommandLayer {
    type Service = CommandService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CommandService::new(inner)
    }
}

/// Rejects pickups naming floors outside the shaft before they reach the
/// fleet lock.
#[derive(Debug, Clone, Copy)]
pub struct FloorRange {
    floors: u8,
}

impl FloorRange {
    pub fn new(floors: u8) -> Self {
        Self { floors }
    }
}

impl Predicate<Command> for FloorRange {
    type Request = Command;

    fn check(&mut self, command: Command) -> Result<Self::Request, BoxError> {
        if let Command::Pickup { pickup, dest } = command {
            if !in_shaft(pickup, self.floors) || !in_shaft(dest, self.floors) {
                warn!("pickup {pickup} -> {dest} outside floors 1..={}", self.floors);
                return Err(BoxError::from(format!(
                    "floors must be within 1..={}",
                    self.floors
                )));
            }
        }
        Ok(command)
    }
}
