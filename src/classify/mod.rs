//! SMTP reply classification.
//!
//! [`classify`] maps the text of a failed exchange (dial error, rejected
//! `EHLO`, rejected `RCPT TO`, ...) onto the small [`ErrorCategory`]
//! taxonomy. The rules are kept as ordered tables so each special case can be
//! read and tested on its own.

mod types;

pub use types::{ClassifiedError, ErrorCategory};

use types::ErrorCategory::*;

/// Replies that only say the mailbox is unknown. They win over the numeric
/// status because they are not server faults.
const ADDRESS_NOT_FOUND: &[&str] = &[
    "undeliverable",
    "does not exist",
    "may not exist",
    "user unknown",
    "user not found",
    "invalid address",
    "recipient invalid",
    "recipient rejected",
    "address rejected",
    "no mailbox",
];

const MAILBOX_CAPACITY: &[&str] = &["full", "space", "over quota", "insufficient"];

const REPUTATION_550: &[&str] = &[
    "spamhaus",
    "proofpoint",
    "cloudmark",
    "banned",
    "blacklisted",
    "blocked",
    "block list",
    "denied",
];

const REPUTATION: &[&str] = &[
    "spamhaus",
    "proofpoint",
    "cloudmark",
    "banned",
    "blocked",
    "denied",
];

enum CodeRule {
    Fixed(ErrorCategory),
    Phrases {
        phrases: &'static [&'static str],
        matched: ErrorCategory,
        otherwise: ErrorCategory,
    },
}

const CODE_TABLE: &[(u16, CodeRule)] = &[
    (421, CodeRule::Fixed(TryAgainLater)),
    (450, CodeRule::Fixed(MailboxBusy)),
    (451, CodeRule::Fixed(MessagingLimitsExceeded)),
    (
        452,
        CodeRule::Phrases {
            phrases: MAILBOX_CAPACITY,
            matched: FullInbox,
            otherwise: TooManyRecipients,
        },
    ),
    (503, CodeRule::Fixed(NeedMailBeforeRcpt)),
    (
        550,
        CodeRule::Phrases {
            phrases: REPUTATION_550,
            matched: Blocked,
            otherwise: ServerUnavailable,
        },
    ),
    (551, CodeRule::Fixed(RecipientHasMoved)),
    (552, CodeRule::Fixed(FullInbox)),
    (553, CodeRule::Fixed(NoRelay)),
    (554, CodeRule::Fixed(NotAllowed)),
];

const TEXT_TABLE: &[(&[&str], ErrorCategory)] = &[
    (REPUTATION, Blocked),
    (&["timeout"], Timeout),
    (&["no such host"], NoSuchHost),
    (&["unavailable"], ServerUnavailable),
];

/// Classify the text of a failed SMTP exchange.
///
/// Returns `None` when the leading status code is 400 or below, which is not
/// treated as a failure.
pub fn classify(raw: &str) -> Option<ClassifiedError> {
    let lowered = raw.to_lowercase();

    let code = match leading_status(raw) {
        Some(code) => code,
        None => return Some(classify_text(0, raw, &lowered)),
    };

    if code <= 400 {
        return None;
    }

    if contains_any(&lowered, ADDRESS_NOT_FOUND) {
        return Some(ClassifiedError::new(code, ServerUnavailable, raw));
    }

    let rule = CODE_TABLE
        .iter()
        .find_map(|(candidate, rule)| (*candidate == code).then_some(rule));
    let category = match rule {
        Some(CodeRule::Fixed(category)) => *category,
        Some(CodeRule::Phrases {
            phrases,
            matched,
            otherwise,
        }) => {
            if contains_any(&lowered, phrases) {
                *matched
            } else {
                *otherwise
            }
        }
        None => return Some(classify_text(code, raw, &lowered)),
    };
    Some(ClassifiedError::new(code, category, raw))
}

/// Classify any displayable error through its rendered text.
pub fn classify_error<E: std::fmt::Display + ?Sized>(err: &E) -> Option<ClassifiedError> {
    classify(&err.to_string())
}

fn classify_text(code: u16, raw: &str, lowered: &str) -> ClassifiedError {
    let category = TEXT_TABLE
        .iter()
        .find_map(|(phrases, category)| contains_any(lowered, phrases).then_some(*category))
        .unwrap_or(Unclassified);
    ClassifiedError::new(code, category, raw)
}

fn leading_status(raw: &str) -> Option<u16> {
    let prefix: String = raw.chars().take(3).collect();
    if prefix.chars().count() < 3 || !prefix.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

fn contains_any(lowered: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| lowered.contains(phrase))
}
