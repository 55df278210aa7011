mod cli;
mod commands;
mod terminal;

use std::process::ExitCode;

use cli::*;
use commands::*;

fn main() -> ExitCode {
    let args = get_args();

    handle_hostname(args)
}
