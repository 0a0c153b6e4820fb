use std::process::ExitCode;

use clap::Parser;
use xcsync::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    xcsync::logging::init_logging(args.verbose());

    match xcsync::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
