use clap::Parser;
use netcalc::cli::{run, Args};
use netcalc::config::{init_logging, Config};
use std::error::Error;
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    log::info!("#Start main()");

    let args = Args::parse();

    // This thread blocks on stdin in interactive mode, the copy indicator
    // timers run on the runtime's worker threads.
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();
    run(&args, &config)
}
