use clap::Parser;
use elevator_fleet::config::{DEFAULT_ELEVATORS, DEFAULT_FLOORS};
use elevator_fleet::services::command::{CommandLayer, FloorRange};
use elevator_fleet::services::fleet::FleetService;
use elevator_fleet::{DispatchOrder, Fleet, FleetConfig, FleetController};
use log::{LevelFilter, info};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Interval;
use tower::{Service, ServiceBuilder, ServiceExt};

/// Console simulator for an elevator fleet.
///
/// Reads commands from stdin, one per line:
///   pickup <from> <to>   (or: p <from> <to>)
///   step [n]             (or: s [n])
///   status
///   quit
#[derive(Debug, Parser)]
struct Args {
    #[arg(long, short, default_value_t = DEFAULT_ELEVATORS)]
    elevators: usize,

    #[arg(long, short, default_value_t = DEFAULT_FLOORS)]
    floors: u8,

    /// Score cabins in id order instead of a random order.
    #[arg(long, default_value_t = false)]
    no_shuffle: bool,

    #[arg(long, default_value_t = false)]
    no_preempt_adjust: bool,

    /// Seed for a reproducible scoring order.
    #[arg(long)]
    seed: Option<u64>,

    /// Step the fleet automatically every N milliseconds (0 = only on `step`).
    #[arg(long, default_value_t = 0)]
    tick_ms: u64,
}

async fn tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = FleetConfig {
        elevators: args.elevators,
        floors: args.floors,
        randomize: !args.no_shuffle,
        preempt_adjust: !args.no_preempt_adjust,
    };

    let mut fleet = Fleet::with_config(config)?;
    if let (Some(seed), true) = (args.seed, config.randomize) {
        fleet.set_dispatch_order(DispatchOrder::seeded(seed));
    }
    let controller = FleetController::from_fleet(fleet);
    info!(
        "Fleet of {} elevator(s) over {} floors ready",
        config.elevators, config.floors
    );

    let mut svc = ServiceBuilder::new()
        .layer(CommandLayer)
        .filter(FloorRange::new(config.floors))
        .service(FleetService::new(controller.clone()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = (args.tick_ms > 0)
        .then(|| tokio::time::interval(Duration::from_millis(args.tick_ms)));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if matches!(line, "q" | "quit" | "exit") {
                    break;
                }
                ServiceExt::<&str>::ready(&mut svc)
                    .await
                    .map_err(|e| anyhow::anyhow!(e))?;
                match svc.call(line).await {
                    Ok(reply) => println!("{reply}"),
                    Err(e) => eprintln!("error: {e}"),
                }
            }
            _ = tick(&mut ticker) => controller.step().await,
        }
    }

    info!("{}", controller.status_line().await);
    Ok(())
}
