// driver.rs - Fixed-rate render/advance loop

use std::convert::Infallible;
use std::future::Future;
use std::io::{self, Write};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::render::render;

pub const FPS: u64 = 3;
pub const FRAME_PERIOD: Duration = Duration::from_nanos(1_000_000_000 / FPS);

/// Seeds a random grid, then draws it and steps it forward once per `period`.
///
/// The grid is owned by this loop alone and replaced by its successor after
/// every frame. The first frame is drawn one period after the call. The loop
/// only ends if writing to `out` fails.
pub async fn run<W: Write>(seed: u64, mut out: W, period: Duration) -> Result<Infallible> {
    let mut grid = Grid::new_random(seed);
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut generation: u64 = 0;
    loop {
        ticker.tick().await;
        render(&grid, &mut out)?;
        debug!(generation, population = grid.population(), "frame drawn");
        grid = grid.next();
        generation += 1;
    }
}

/// Waits for `shutdown` or for the render loop to stop, whichever is first.
///
/// A resolved `shutdown` aborts the loop and counts as a clean exit. A loop
/// that stops on its own is always a failure: either its write error or
/// `Error::Driver` when it panicked or was cancelled.
pub async fn supervise<S>(shutdown: S, mut render_loop: JoinHandle<Result<Infallible>>) -> Result<()>
where
    S: Future<Output = io::Result<()>>,
{
    tokio::select! {
        signal = shutdown => {
            render_loop.abort();
            signal.map_err(Error::Signal)?;
            info!("interrupted, shutting down");
            Ok(())
        }
        joined = &mut render_loop => {
            let err = match joined {
                Ok(Ok(never)) => match never {},
                Ok(Err(err)) => err,
                Err(join) => Error::Driver(join.to_string()),
            };
            error!(%err, "simulation stopped");
            Err(err)
        }
    }
}
