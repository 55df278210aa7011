use std::ffi::OsString;

use clap::{CommandFactory, FromArgMatches, Parser};
use terminal_size::terminal_size;

const APP_NAME: &str = "basehost";
const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
const CARGO_PKG_AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

const APP_ABOUT: &str = "basehost prints the hostname of this computer after the prefix `Base \
                         string: `.\nA name longer than the 1024-byte output buffer is truncated \
                         to fit. Arguments are ignored.";

#[derive(Debug, Default, Parser)]
#[command(name = APP_NAME)]
#[command(term_width = terminal_size().map(|(width, _)| width.0 as usize).unwrap_or(0))]
#[command(version = CARGO_PKG_VERSION)]
#[command(author = CARGO_PKG_AUTHORS)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CLIArgs {
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,
}

pub fn get_args() -> CLIArgs {
    get_args_from(std::env::args_os())
}

/// Parses the command line. Every argument, flags included, is accepted and ignored.
pub fn get_args_from<I, T>(itr: I) -> CLIArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone, {
    let args = CLIArgs::command();

    let about = format!("{APP_NAME} {CARGO_PKG_VERSION}\n{CARGO_PKG_AUTHORS}\n{APP_ABOUT}");

    let args = args.about(about);

    match args.try_get_matches_from(itr) {
        Ok(matches) => CLIArgs::from_arg_matches(&matches).unwrap_or_default(),
        Err(_) => CLIArgs::default(),
    }
}
