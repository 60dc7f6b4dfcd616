use anyhow::{Context, Result};
use subsurface_demo::core::{tree, Session};
use subsurface_demo::util::logging;
use subsurface_demo::wlog;

fn main() -> Result<()> {
    // Initialize logging
    // Set default log level to info
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,subsurface_demo=debug");
    }
    // Initialize logging with standardized format
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S".to_string(),
        ))
        .with_ansi(false)
        .init();

    wlog!(logging::MAIN, "starting subsurface stacking demo");

    let (mut session, mut app) =
        Session::connect().context("failed to bootstrap Wayland session")?;

    let qh = session.queue.handle();
    let _surfaces =
        tree::build(&session.globals, &qh).context("failed to build the surface tree")?;

    // Nothing left to do but pump server events. The loop ending is
    // also the expected shutdown path, so it exits cleanly.
    tracing::info!("entering dispatch loop");
    loop {
        match session.queue.blocking_dispatch(&mut app) {
            Ok(_) => {}
            Err(err) => {
                tracing::info!("dispatch loop ended: {}", err);
                break;
            }
        }
    }

    wlog!(logging::MAIN, "display connection closed, exiting");
    Ok(())
}
