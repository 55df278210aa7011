use std::{borrow::Cow, fmt};

use crate::hostname::Hostname;

pub const DEFAULT_PREFIX: &str = "Base string: ";

/// The size of the output buffer, terminator included.
pub const BUFFER_SIZE: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BannerError {
    #[error("the output buffer cannot have a zero capacity")]
    ZeroCapacity,
    #[error("the prefix of {len} bytes does not fit in {content_capacity} bytes")]
    PrefixTooLong { len: usize, content_capacity: usize },
    #[error("the output of {len} bytes does not fit in {content_capacity} bytes")]
    Overflow { len: usize, content_capacity: usize },
}

/// What to do when the prefix and the hostname together do not fit in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Silently drop the trailing bytes of the hostname.
    #[default]
    Truncate,
    /// Fail with `BannerError::Overflow`.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerConfig {
    prefix:   Cow<'static, [u8]>,
    capacity: usize,
    overflow: OverflowPolicy,
}

impl BannerConfig {
    pub fn new(
        prefix: impl Into<Cow<'static, [u8]>>,
        capacity: usize,
        overflow: OverflowPolicy,
    ) -> Result<Self, BannerError> {
        if capacity == 0 {
            return Err(BannerError::ZeroCapacity);
        }

        let prefix = prefix.into();
        let content_capacity = capacity - 1;

        if prefix.len() > content_capacity {
            return Err(BannerError::PrefixTooLong {
                len: prefix.len(),
                content_capacity,
            });
        }

        Ok(BannerConfig {
            prefix,
            capacity,
            overflow,
        })
    }

    #[inline]
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;

        self
    }

    #[inline]
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of bytes left for text once the terminator is reserved.
    #[inline]
    pub fn content_capacity(&self) -> usize {
        self.capacity - 1
    }

    #[inline]
    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }
}

impl Default for BannerConfig {
    #[inline]
    fn default() -> Self {
        BannerConfig {
            prefix:   Cow::Borrowed(DEFAULT_PREFIX.as_bytes()),
            capacity: BUFFER_SIZE,
            overflow: OverflowPolicy::Truncate,
        }
    }
}

/// The prefix followed by the hostname, bounded by the buffer capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    bytes:     Vec<u8>,
    truncated: bool,
}

impl Banner {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether some bytes of the hostname were dropped to fit in the buffer.
    #[inline]
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl fmt::Display for Banner {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}

/// Appends the hostname to the prefix, copying no more bytes than the buffer has room for.
pub fn compose(config: &BannerConfig, hostname: &Hostname) -> Result<Banner, BannerError> {
    let content_capacity = config.content_capacity();
    let prefix = config.prefix();
    let hostname = hostname.as_bytes();

    // `BannerConfig::new` guarantees the prefix fits
    let available = content_capacity - prefix.len();

    let truncated = hostname.len() > available;

    if truncated && config.overflow() == OverflowPolicy::Reject {
        return Err(BannerError::Overflow {
            len: prefix.len() + hostname.len(),
            content_capacity,
        });
    }

    let appended = &hostname[..hostname.len().min(available)];

    let mut bytes = Vec::with_capacity(prefix.len() + appended.len());
    bytes.extend_from_slice(prefix);
    bytes.extend_from_slice(appended);

    Ok(Banner {
        bytes,
        truncated,
    })
}
