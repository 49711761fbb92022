//! Application orchestrator.
//! Initializes logging, installs the signal handler, validates the destination,
//! and drives the read -> resolve -> announce -> transfer loop.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, error, info};

use collectf::cli::Args;
use collectf::logging::init_tracing;
use collectf::output as out;
use collectf::{CollectError, Config, RenameRegistry, fs_ops, input, shutdown};

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let cfg = Config::from_args(&args);

    init_tracing(&cfg.log_level, cfg.json_logs).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    ctrlc::set_handler(|| {
        shutdown::request();
        out::print_warn("Received interrupt; stopping before the next transfer...");
    })
    .context("failed to install signal handler")?;

    // Simulate mode makes no filesystem changes, destination creation included.
    if !cfg.simulate {
        cfg.validate()?;
    }

    debug!(
        dest = %cfg.dest.display(),
        simulate = cfg.simulate,
        move_files = cfg.move_files,
        "starting collectf"
    );

    let verb = if cfg.move_files { "mv" } else { "cp" };
    let mut registry = RenameRegistry::new();
    let mut planned: u64 = 0;
    let mut transferred: u64 = 0;

    // Strictly sequential: one path is read, resolved and transferred at a
    // time, in input order. The registry relies on that ordering.
    for src in input::stdin_paths() {
        if shutdown::is_requested() {
            error!(kind = "interrupted", "run aborted between transfers");
            return Err(CollectError::Interrupted.into());
        }

        let name = registry.resolve(&src);
        let dst = cfg.dest.join(&name);

        // Announce before acting, in simulate mode too.
        out::print_user(&format!("{} {} {}", verb, src, dst.display()));
        planned += 1;
        if cfg.simulate {
            continue;
        }

        let result = if cfg.move_files {
            fs_ops::move_file(Path::new(&src), &dst)
        } else {
            fs_ops::copy_file(Path::new(&src), &dst)
        };
        if let Err(e) = result {
            // First failure aborts the whole run; earlier transfers stay put.
            error!(src = %src, dst = %dst.display(), error = ?e, "transfer failed; aborting");
            return Err(e);
        }
        transferred += 1;
    }

    if cfg.simulate {
        out::print_info(&format!("Simulation complete: {} action(s) planned", planned));
    }
    info!(planned, transferred, names_seen = registry.len(), "all inputs processed");
    Ok(())
}
