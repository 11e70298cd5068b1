use std::process;

use magboots::{Invocation, try_run};
use magboots_shim::ShimLayout;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MAGBOOTS_LOG";

fn main() {
    init_tracing();

    let result = Invocation::from_env().and_then(|inv| try_run(inv, &ShimLayout::default()));
    let code = match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("[magboots] {err}");
            if let Some(hint) = err.hint() {
                eprintln!("{hint}");
            }
            err.exit_code()
        }
    };

    process::exit(code);
}

/// Diagnostics stay silent unless `MAGBOOTS_LOG` asks for them.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
