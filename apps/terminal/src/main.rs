//! # Pizzeria Terminal Entry Point
//!
//! Thin orchestration only; no business rules live here.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Build the in-memory catalog and seed default data
//! 3. Run the menu loop until the user exits

mod menu;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pizzeria_catalog::Pizzeria;

fn main() {
    // RUST_LOG overrides; warnings only by default so the menu stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut app = Pizzeria::new();
    if let Err(err) = app.seed_defaults() {
        error!(%err, "failed to seed default catalog");
        eprintln!("Failed to seed default catalog: {err}");
        std::process::exit(1);
    }
    info!("catalog ready");

    menu::run(&mut app);
    println!("Bye!");
}
