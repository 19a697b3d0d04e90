use std::io::{BufRead, BufReader, Write};
use std::ops::RangeInclusive;

use crate::transport::BoxedStream;

use super::error::ProbeError;
use super::types::SmtpReply;

const GREETING: RangeInclusive<u16> = 220..=220;
const OK: RangeInclusive<u16> = 250..=250;
const RCPT_OK: RangeInclusive<u16> = 250..=259;
const CLOSING: RangeInclusive<u16> = 221..=221;

/// Minimal SMTP client over an established stream.
pub struct SmtpSession {
    host: String,
    reader: BufReader<BoxedStream>,
}

impl std::fmt::Debug for SmtpSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpSession").field("host", &self.host).finish()
    }
}

impl SmtpSession {
    /// Wrap `stream` and consume the `220` greeting.
    pub fn establish(host: impl Into<String>, stream: BoxedStream) -> Result<Self, ProbeError> {
        let mut session = Self {
            host: host.into(),
            reader: BufReader::new(stream),
        };
        let greeting = session.read_reply()?;
        if !GREETING.contains(&greeting.code) {
            return Err(ProbeError::reply(greeting));
        }
        Ok(session)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// `EHLO`, falling back to `HELO` for servers that refuse it.
    pub fn hello(&mut self, name: &str) -> Result<(), ProbeError> {
        match self.command(&format!("EHLO {name}"), OK) {
            Ok(_) => Ok(()),
            Err(ProbeError::Reply { reply }) => {
                tracing::debug!(host = %self.host, %reply, "EHLO refused, trying HELO");
                self.command(&format!("HELO {name}"), OK).map(|_| ())
            }
            Err(err) => Err(err),
        }
    }

    pub fn mail(&mut self, from: &str) -> Result<(), ProbeError> {
        self.command(&format!("MAIL FROM:<{from}>"), OK).map(|_| ())
    }

    pub fn rcpt(&mut self, to: &str) -> Result<(), ProbeError> {
        self.command(&format!("RCPT TO:<{to}>"), RCPT_OK).map(|_| ())
    }

    /// Best effort `QUIT`; the stream is closed when the session drops.
    pub fn quit(mut self) {
        if let Err(err) = self.command("QUIT", CLOSING) {
            tracing::debug!(host = %self.host, %err, "QUIT not acknowledged");
        }
    }

    fn command(&mut self, command: &str, expected: RangeInclusive<u16>) -> Result<SmtpReply, ProbeError> {
        self.send_line(command)?;
        let reply = self.read_reply()?;
        if expected.contains(&reply.code) {
            Ok(reply)
        } else {
            Err(ProbeError::reply(reply))
        }
    }

    fn send_line(&mut self, command: &str) -> Result<(), ProbeError> {
        let mut line = command.as_bytes().to_vec();
        line.extend_from_slice(b"\r\n");
        let stream = self.reader.get_mut();
        stream
            .write_all(&line)
            .and_then(|()| stream.flush())
            .map_err(|err| ProbeError::io(&self.host, err))
    }

    pub(crate) fn read_reply(&mut self) -> Result<SmtpReply, ProbeError> {
        let mut code = None;
        let mut message_lines = Vec::new();
        loop {
            let mut line = Vec::new();
            let bytes = self
                .reader
                .read_until(b'\n', &mut line)
                .map_err(|err| ProbeError::io(&self.host, err))?;
            if bytes == 0 {
                return Err(ProbeError::Protocol(format!(
                    "connection to {} closed while reading reply",
                    self.host
                )));
            }
            // servers are free to send 8-bit text
            let mut raw = String::from_utf8_lossy(&line).into_owned();
            if raw.ends_with('\n') {
                raw.pop();
                if raw.ends_with('\r') {
                    raw.pop();
                }
            }

            if raw.len() < 3 || !raw.is_char_boundary(3) {
                return Err(ProbeError::Protocol(format!("invalid SMTP reply: '{raw}'")));
            }
            let code_part = &raw[..3];
            let parsed_code = code_part.parse::<u16>().map_err(|_| {
                ProbeError::Protocol(format!("invalid SMTP status code: '{code_part}'"))
            })?;
            if let Some(existing) = code {
                if existing != parsed_code {
                    return Err(ProbeError::Protocol(format!(
                        "inconsistent SMTP reply codes: {existing} vs {parsed_code}"
                    )));
                }
            } else {
                code = Some(parsed_code);
            }
            let continuation = raw.as_bytes().get(3).copied() == Some(b'-');
            let text = raw.get(4..).unwrap_or_default().to_string();
            message_lines.push(text);
            if !continuation {
                break;
            }
        }
        let code = code.ok_or_else(|| ProbeError::Protocol("SMTP reply missing status code".into()))?;
        Ok(SmtpReply {
            code,
            message: message_lines.join("\n"),
        })
    }
}
