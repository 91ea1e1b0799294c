//! The binary entry point for slsh.

use clap::Parser;
use slsh_app::{AppError, PlatformDirs, load_config, run};
use slsh_config::CliArgs;

fn main() {
    let args = CliArgs::parse();

    let dirs = match PlatformDirs::resolve_and_create(args.config.as_deref()) {
        Ok(dirs) => dirs,
        Err(e) => exit_with(AppError::from(e)),
    };

    let config = match load_config(&dirs, &args) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    slsh_log::init_logging(
        Some(&dirs.log_dir),
        config.debug.log_to_file,
        Some(&config),
    );
    tracing::info!("config: {}", dirs.config_dir.display());

    if let Err(e) = run(&config) {
        tracing::error!("{e}");
        std::process::exit(e.exit_code());
    }
}

// Logging is not up yet when directories or config fail.
fn exit_with(e: AppError) -> ! {
    eprintln!("slsh: {e}");
    std::process::exit(e.exit_code());
}
