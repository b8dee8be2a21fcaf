// main.rs - Runs the simulation in the foreground terminal until Ctrl-C

use std::io::{self, BufWriter};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing::{info, warn};

use conway_term::driver::{self, FPS, FRAME_PERIOD};
use conway_term::grid::{HEIGHT, WIDTH};
use conway_term::terminal::{self, CursorGuard};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    if let Err(err) = terminal::enable_ansi() {
        warn!(%err, "console did not accept escape-sequence mode");
    }

    // Shown again on every way out of this function
    let _cursor = CursorGuard::hide(io::stdout()).context("hiding the cursor")?;

    let seed = wall_clock_seed();
    info!(seed, width = WIDTH, height = HEIGHT, fps = FPS, "starting simulation");

    let render_loop = tokio::spawn(driver::run(seed, BufWriter::new(io::stdout()), FRAME_PERIOD));

    driver::supervise(tokio::signal::ctrl_c(), render_loop)
        .await
        .context("running the simulation")
}

fn init_tracing() {
    // stdout belongs to the grid
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
