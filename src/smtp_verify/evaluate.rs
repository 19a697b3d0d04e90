use crate::classify::{ClassifiedError, ErrorCategory, classify_error};

use super::error::ProbeError;
use super::options::ProbeOptions;
use super::session::SmtpSession;
use super::types::ProbeResult;
use super::util::generate_random_email;

/// What to ask the server once connected.
#[derive(Debug, Clone, Copy)]
pub struct ProbePlan<'a> {
    pub domain: &'a str,
    /// Empty means "host and catch-all only".
    pub username: &'a str,
    /// False when disabled or when the domain is a free-mail provider.
    pub check_catch_all: bool,
}

/// Result of the dialogue plus the classified failure that ended it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub result: ProbeResult,
    pub error: Option<ClassifiedError>,
}

impl Evaluation {
    fn done(result: ProbeResult) -> Self {
        Self {
            result,
            error: None,
        }
    }

    fn failed(result: ProbeResult, err: &ProbeError) -> Self {
        Self {
            result,
            error: classify_error(err),
        }
    }
}

/// Run `EHLO` / `MAIL FROM` / catch-all `RCPT` / recipient `RCPT` on
/// `session`, then `QUIT`. The session is consumed and closed on every path.
pub fn evaluate(mut session: SmtpSession, options: &ProbeOptions, plan: &ProbePlan<'_>) -> Evaluation {
    let evaluation = run_exchange(&mut session, options, plan);
    session.quit();
    evaluation
}

fn run_exchange(session: &mut SmtpSession, options: &ProbeOptions, plan: &ProbePlan<'_>) -> Evaluation {
    let mut result = ProbeResult::default();

    if let Err(err) = session.hello(&options.hello_name()) {
        return Evaluation::failed(result, &err);
    }
    if let Err(err) = session.mail(&options.from_email()) {
        return Evaluation::failed(result, &err);
    }
    result.host_exists = true;

    if plan.check_catch_all {
        probe_catch_all(session, plan.domain, &mut result);
        if result.catch_all {
            tracing::debug!(host = session.host(), domain = plan.domain, "catch-all server, recipient not probed");
            return Evaluation::done(result);
        }
    }

    if plan.username.is_empty() {
        return Evaluation::done(result);
    }

    match session.rcpt(&format!("{}@{}", plan.username, plan.domain)) {
        Ok(()) => {
            result.deliverable = true;
            Evaluation::done(result)
        }
        Err(err) => Evaluation::failed(result, &err),
    }
}

fn probe_catch_all(session: &mut SmtpSession, domain: &str, result: &mut ProbeResult) {
    let random = generate_random_email(domain);
    match session.rcpt(&random) {
        Ok(()) => result.catch_all = true,
        Err(err) => {
            result.catch_all = false;
            match classify_error(&err).map(|e| e.category) {
                Some(ErrorCategory::FullInbox) => result.full_inbox = true,
                Some(ErrorCategory::NotAllowed) => result.disabled = true,
                _ => {}
            }
        }
    }
}
