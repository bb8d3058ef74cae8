// src/main.rs

use std::path::PathBuf;

use exhausterr::config::{default_config_path, load_from_path, load_or_default};
use exhausterr::{cli, logging, report, run};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("exhausterr error: {err:?}");
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();

    let settings = match &args.config {
        Some(path) => load_from_path(PathBuf::from(path))?,
        None => load_or_default(default_config_path())?,
    };

    logging::init_logging(args.log_level, settings.log_level)?;
    report::install_report_hook(args.report.unwrap_or(settings.report.style));

    let line = run(&args)?;
    println!("{line}");
    Ok(())
}
