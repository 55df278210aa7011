use std::{borrow::Cow, ffi::OsString, fmt, io};

/// The size of the buffer the hostname is queried into, terminator included.
pub const HOSTNAME_BUFFER_SIZE: usize = 1024;

#[derive(Debug, thiserror::Error)]
pub enum HostnameError {
    #[error("gethostname: {0}")]
    Query(io::Error),
    #[error("gethostname: hostname of {len} bytes does not fit in a {capacity}-byte buffer")]
    TooLong { len: usize, capacity: usize },
}

impl From<io::Error> for HostnameError {
    #[inline]
    fn from(err: io::Error) -> Self {
        HostnameError::Query(err)
    }
}

/// The name of this computer as reported by the operating system.
///
/// The bytes are kept as they are. They are not guaranteed to be valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hostname(Vec<u8>);

impl Hostname {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Hostname {
    #[inline]
    fn from(v: Vec<u8>) -> Self {
        Hostname(v)
    }
}

impl From<&str> for Hostname {
    #[inline]
    fn from(s: &str) -> Self {
        Hostname(s.as_bytes().to_vec())
    }
}

impl fmt::Display for Hostname {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// Where a hostname comes from.
pub trait HostnameSource {
    fn hostname(&self) -> Result<Hostname, HostnameError>;
}

impl<T: HostnameSource + ?Sized> HostnameSource for &T {
    #[inline]
    fn hostname(&self) -> Result<Hostname, HostnameError> {
        (**self).hostname()
    }
}

/// Queries the operating system (`gethostname(2)` on Unix) with a bounded buffer.
#[derive(Debug, Clone, Copy)]
pub struct SystemHostname {
    buffer_size: usize,
}

impl SystemHostname {
    #[inline]
    pub const fn new() -> Self {
        Self::with_buffer_size(HOSTNAME_BUFFER_SIZE)
    }

    #[inline]
    pub const fn with_buffer_size(buffer_size: usize) -> Self {
        SystemHostname {
            buffer_size,
        }
    }

    #[inline]
    pub const fn buffer_size(&self) -> usize {
        self.buffer_size
    }
}

impl Default for SystemHostname {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl HostnameSource for SystemHostname {
    fn hostname(&self) -> Result<Hostname, HostnameError> {
        let name = ::hostname::get()?;

        fit_in_buffer(os_string_into_bytes(name), self.buffer_size)
    }
}

/// Applies the `gethostname` buffer rules to a raw name: it ends at the first NUL byte and must leave room for the terminator.
pub fn fit_in_buffer(mut name: Vec<u8>, buffer_size: usize) -> Result<Hostname, HostnameError> {
    if let Some(index) = name.iter().position(|&b| b == 0) {
        name.truncate(index);
    }

    if name.len() >= buffer_size {
        return Err(HostnameError::TooLong {
            len: name.len(), capacity: buffer_size
        });
    }

    Ok(Hostname(name))
}

#[cfg(unix)]
#[inline]
fn os_string_into_bytes(s: OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStringExt;

    s.into_vec()
}

#[cfg(not(unix))]
#[inline]
fn os_string_into_bytes(s: OsString) -> Vec<u8> {
    s.to_string_lossy().into_owned().into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_in_buffer_stops_at_nul() {
        let hostname = fit_in_buffer(b"server01\0garbage".to_vec(), HOSTNAME_BUFFER_SIZE).unwrap();

        assert_eq!(b"server01", hostname.as_bytes());
    }

    #[test]
    fn fit_in_buffer_reserves_the_terminator() {
        let hostname = fit_in_buffer(vec![b'a'; 7], 8).unwrap();
        assert_eq!(7, hostname.len());

        match fit_in_buffer(vec![b'a'; 8], 8) {
            Err(HostnameError::TooLong {
                len,
                capacity,
            }) => {
                assert_eq!(8, len);
                assert_eq!(8, capacity);
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn errors_name_the_failed_operation() {
        let err = HostnameError::from(io::Error::new(io::ErrorKind::Other, "no identity"));
        assert_eq!("gethostname: no identity", err.to_string());
        assert!(std::error::Error::source(&err).is_none());

        let err = HostnameError::TooLong {
            len: 2000, capacity: HOSTNAME_BUFFER_SIZE
        };
        assert!(err.to_string().starts_with("gethostname: "));
    }

    #[test]
    fn lossy_display() {
        let hostname = Hostname::from(vec![b'h', 0xFF, b'x']);

        assert_eq!("h\u{FFFD}x", hostname.to_string());
        assert_eq!(3, hostname.len());
    }

    #[test]
    fn system_hostname_matches_os() {
        let hostname = SystemHostname::new().hostname().unwrap();

        let expected = os_string_into_bytes(::hostname::get().unwrap());

        assert_eq!(expected, hostname.into_bytes());
    }
}
