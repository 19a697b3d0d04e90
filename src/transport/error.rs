use std::io;
use std::time::Duration;

use thiserror::Error;

/// Failures while establishing the stream to a mail exchanger.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("timeout connecting to mail-exchanger {addr} after {}ms", after.as_millis())]
    Timeout { addr: String, after: Duration },
    #[error("connection to {addr} failed: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("lookup {host}: no such host")]
    NoSuchHost {
        host: String,
        #[source]
        source: io::Error,
    },
    #[error("connect task for {addr} ended without reporting")]
    Abandoned { addr: String },
    #[error("failed to spawn connect task: {source}")]
    Spawn {
        #[source]
        source: io::Error,
    },
}

impl TransportError {
    /// Wrap a dial failure; OS level timeouts are reported as [`TransportError::Timeout`].
    /// A `TransportError` already carried by `source` is returned as is.
    pub(crate) fn connect(addr: impl Into<String>, source: io::Error, after: Duration) -> Self {
        let source = match source.downcast::<TransportError>() {
            Ok(err) => return err,
            Err(source) => source,
        };
        let addr = addr.into();
        match source.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => Self::Timeout { addr, after },
            _ => Self::Connect { addr, source },
        }
    }

    /// Name resolution failure for `host`, boxed into an [`io::Error`] so it
    /// can leave a [`DialFn`](super::DialFn).
    pub(crate) fn unresolved(host: &str, source: io::Error) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            Self::NoSuchHost {
                host: host.to_string(),
                source,
            },
        )
    }
}

/// A proxy URI that cannot be used.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("invalid proxy uri '{uri}': {source}")]
    Parse {
        uri: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported proxy scheme '{0}' (expected socks5, socks5h, socks4 or socks4a)")]
    Scheme(String),
    #[error("proxy uri '{0}' has no host")]
    MissingHost(String),
    #[error("socks4 target {0} has no IPv4 address")]
    NoIpv4Target(String),
}

impl From<ProxyError> for io::Error {
    fn from(err: ProxyError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
