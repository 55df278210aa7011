use std::io::{self, Write};

use crate::{
    banner::{self, Banner, BannerConfig, BannerError},
    hostname::{HostnameError, HostnameSource},
};

#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    #[error(transparent)]
    Hostname(#[from] HostnameError),
    #[error(transparent)]
    Banner(#[from] BannerError),
    #[error("cannot write to the output")]
    Io(#[from] io::Error),
}

/// Queries the hostname, appends it to the prefix and emits the line.
#[derive(Debug)]
pub struct HostnamePrinter<S> {
    source: S,
    config: BannerConfig,
}

impl<S: HostnameSource> HostnamePrinter<S> {
    #[inline]
    pub fn new(source: S, config: BannerConfig) -> Self {
        HostnamePrinter {
            source,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &BannerConfig {
        &self.config
    }

    /// Queries the hostname once and composes the banner. The query is not retried.
    pub fn build(&self) -> Result<Banner, PrintError> {
        let hostname = self.source.hostname()?;

        Ok(banner::compose(&self.config, &hostname)?)
    }

    /// Writes the banner and a newline. Nothing is written if the banner cannot be built.
    pub fn print_to<W: Write>(&self, mut writer: W) -> Result<Banner, PrintError> {
        let banner = self.build()?;

        writer.write_all(banner.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(banner)
    }
}
