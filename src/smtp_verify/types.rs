use std::fmt;

/// A raw SMTP reply, preserving the numeric status code and message text.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpReply {
    pub code: u16,
    pub message: String,
}

/// Rendered as `"<code> <message>"`, the form [`crate::classify`] parses.
impl fmt::Display for SmtpReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03} {}", self.code, self.message)
    }
}

/// What a single SMTP probe learned about a domain/mailbox.
///
/// `deliverable` only carries information while `catch_all` is false. At most
/// one of `full_inbox` / `disabled` is set, both come from the rejected
/// catch-all probe.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeResult {
    pub host_exists: bool,
    pub full_inbox: bool,
    pub catch_all: bool,
    pub deliverable: bool,
    pub disabled: bool,
    #[cfg_attr(feature = "with-serde", serde(rename = "api"))]
    pub via_vendor_api: bool,
}
