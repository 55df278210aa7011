use std::{
    io::{self, Write},
    process::ExitCode,
};

use basehost::{
    banner::BannerConfig,
    hostname::{HostnameSource, SystemHostname},
    printer::HostnamePrinter,
};
use termcolor::WriteColor;

use crate::{terminal::*, CLIArgs};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

#[inline]
pub fn handle_hostname(_args: CLIArgs) -> ExitCode {
    let output = get_stderr_output();
    let mut stderr = output.buffer();

    let code = run(SystemHostname::new(), io::stdout().lock(), &mut stderr);

    // stderr is the last channel left, a failure to write there cannot be reported anywhere
    output.print(&stderr).ok();

    ExitCode::from(code)
}

/// Prints the line for `source` to `stdout`, or an error report to `stderr`, and returns the exit status.
pub fn run<S: HostnameSource, O: Write, E: WriteColor>(source: S, stdout: O, stderr: &mut E) -> u8 {
    let printer = HostnamePrinter::new(source, BannerConfig::default());

    match printer.print_to(stdout) {
        Ok(_) => EXIT_SUCCESS,
        Err(err) => {
            // same as above, the exit status still reports the failure
            write_error(stderr, &anyhow::Error::from(err)).ok();

            EXIT_FAILURE
        },
    }
}
