use std::borrow::Cow;
use std::time::Duration;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_HELLO_NAME: &str = "localhost";
pub const DEFAULT_FROM_EMAIL: &str = "user@example.org";
pub const DEFAULT_SMTP_PORT: u16 = 25;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Knobs of the SMTP dialogue.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOptions {
    /// Name sent with `EHLO`/`HELO`.
    pub hello_name: String,
    /// Envelope sender used in `MAIL FROM`.
    pub from_email: String,
    pub catch_all_check: bool,
    pub port: u16,
    /// Hard bound on dial + greeting.
    pub connect_timeout: Duration,
    /// Socket read/write timeout for each command, zero disables it.
    pub command_timeout: Duration,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            hello_name: DEFAULT_HELLO_NAME.to_string(),
            from_email: DEFAULT_FROM_EMAIL.to_string(),
            catch_all_check: true,
            port: DEFAULT_SMTP_PORT,
            connect_timeout: DEFAULT_TIMEOUT,
            command_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ProbeOptions {
    pub fn hello_name(&self) -> Cow<'_, str> {
        if self.hello_name.trim().is_empty() {
            Cow::Borrowed(DEFAULT_HELLO_NAME)
        } else {
            Cow::Borrowed(self.hello_name.trim())
        }
    }

    pub fn from_email(&self) -> Cow<'_, str> {
        if self.from_email.trim().is_empty() {
            Cow::Borrowed(DEFAULT_FROM_EMAIL)
        } else {
            Cow::Borrowed(self.from_email.trim())
        }
    }

    /// `host:port`, bracketing IPv6 literals.
    pub fn address_for(&self, host: &str) -> String {
        let host = host.trim_end_matches('.');
        if host.contains(':') && !host.starts_with('[') {
            format!("[{host}]:{}", self.port)
        } else {
            format!("{host}:{}", self.port)
        }
    }
}
