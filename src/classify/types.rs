use std::fmt;

/// Stable categories every SMTP failure is folded into.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Timeout,
    NoSuchHost,
    ServerUnavailable,
    Blocked,
    TryAgainLater,
    FullInbox,
    TooManyRecipients,
    NoRelay,
    MailboxBusy,
    MessagingLimitsExceeded,
    NotAllowed,
    NeedMailBeforeRcpt,
    RecipientHasMoved,
    /// No rule matched; the raw reply text is kept as the message.
    Unclassified,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::NoSuchHost => "no_such_host",
            Self::ServerUnavailable => "server_unavailable",
            Self::Blocked => "blocked",
            Self::TryAgainLater => "try_again_later",
            Self::FullInbox => "full_inbox",
            Self::TooManyRecipients => "too_many_recipients",
            Self::NoRelay => "no_relay",
            Self::MailboxBusy => "mailbox_busy",
            Self::MessagingLimitsExceeded => "messaging_limits_exceeded",
            Self::NotAllowed => "not_allowed",
            Self::NeedMailBeforeRcpt => "need_mail_before_rcpt",
            Self::RecipientHasMoved => "recipient_has_moved",
            Self::Unclassified => "unclassified",
        }
    }

    /// Human readable description. `None` for [`ErrorCategory::Unclassified`],
    /// whose message is the raw reply itself.
    pub fn description(&self) -> Option<&'static str> {
        let text = match self {
            Self::Timeout => "The connection to the mail server has timed out",
            Self::NoSuchHost => "Mail server does not exist",
            Self::ServerUnavailable => "Mail server is unavailable",
            Self::Blocked => "Blocked by mail server",
            Self::TryAgainLater => "Try again later",
            Self::FullInbox => "Recipient out of disk space",
            Self::TooManyRecipients => "Too many recipients",
            Self::NoRelay => "Not an open relay",
            Self::MailboxBusy => "Mailbox busy",
            Self::MessagingLimitsExceeded => "Messaging limits have been exceeded",
            Self::NotAllowed => "Not Allowed",
            Self::NeedMailBeforeRcpt => "Need MAIL before RCPT",
            Self::RecipientHasMoved => "Recipient has moved",
            Self::Unclassified => return None,
        };
        Some(text)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A protocol failure mapped onto the [`ErrorCategory`] taxonomy.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedError {
    /// Three digit SMTP status, `0` when the text carried none.
    pub code: u16,
    pub category: ErrorCategory,
    pub detail: String,
}

impl ClassifiedError {
    pub fn new(code: u16, category: ErrorCategory, detail: impl Into<String>) -> Self {
        Self {
            code,
            category,
            detail: detail.into(),
        }
    }

    pub fn message(&self) -> &str {
        self.category.description().unwrap_or(self.detail.as_str())
    }

    pub fn is(&self, category: ErrorCategory) -> bool {
        self.category == category
    }
}

impl fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.message(), self.detail)
    }
}

impl std::error::Error for ClassifiedError {}
