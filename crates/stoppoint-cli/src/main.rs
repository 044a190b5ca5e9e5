mod cli;
mod commands;

use cli::{LangsParams, OffsetParams, StateParams, TableParams, build_cli};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("state", m)) => {
            let params = StateParams::from_matches(m);
            commands::state::run(params.into());
        }
        Some(("offset", m)) => {
            let params = OffsetParams::from_matches(m);
            commands::offset::run(params.into());
        }
        Some(("table", m)) => {
            let params = TableParams::from_matches(m);
            commands::table::run(params.into());
        }
        Some(("langs", m)) => {
            let _params = LangsParams::from_matches(m);
            commands::langs::run();
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (silent when unset).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
