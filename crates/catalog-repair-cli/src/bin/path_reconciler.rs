//! Root folder path reconciler.

use catalog_repair_cli::commands::{path_reconciler, report_failure};
use catalog_repair_cli::logging;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = path_reconciler::PathReconcilerArgs::parse();
    logging::init(args.output.verbose);
    let reporter = args.output.reporter();

    match path_reconciler::run(&args, &reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&reporter, &e);
            ExitCode::FAILURE
        }
    }
}
