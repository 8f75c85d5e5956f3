mod cli;
mod config;
mod error;
mod icon;

use config::Config;
use std::env;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let code = cli::execute(
        env::args_os().skip(1),
        Path::new(config::OUTPUT_DIR),
        Config::load,
    );
    ExitCode::from(code)
}
