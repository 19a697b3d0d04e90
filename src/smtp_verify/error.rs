use std::io;

use thiserror::Error;

use crate::transport::TransportError;

use super::types::SmtpReply;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The server answered with an unexpected status. Displays as the bare
    /// reply so it can be classified.
    #[error("{reply}")]
    Reply { reply: SmtpReply },
    #[error("timeout waiting for reply from {host}")]
    ReplyTimeout { host: String },
    #[error("I/O error with {host}: {source}")]
    Io {
        host: String,
        #[source]
        source: io::Error,
    },
    #[error("protocol error: {0}")]
    Protocol(String),
}

impl ProbeError {
    pub(crate) fn reply(reply: SmtpReply) -> Self {
        Self::Reply { reply }
    }

    pub(crate) fn io(host: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => Self::ReplyTimeout {
                host: host.to_string(),
            },
            _ => Self::Io {
                host: host.to_string(),
                source,
            },
        }
    }

    pub fn as_reply(&self) -> Option<&SmtpReply> {
        match self {
            Self::Reply { reply } => Some(reply),
            _ => None,
        }
    }
}
