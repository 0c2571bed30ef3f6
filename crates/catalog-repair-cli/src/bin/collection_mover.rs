//! Collection mover.

use catalog_repair_cli::commands::{collection_mover, report_failure};
use catalog_repair_cli::logging;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = collection_mover::CollectionMoverArgs::parse();
    logging::init(args.output.verbose);
    let reporter = args.output.reporter();

    match collection_mover::run(&args, &reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&reporter, &e);
            ExitCode::FAILURE
        }
    }
}
