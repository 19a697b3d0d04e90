//! SMTP reachability probing.
//!
//! [`probe_hosts`] dials the mail exchangers in priority order and keeps the
//! first one that greets us. [`evaluate`] then runs the minimal dialogue on
//! that session (`EHLO`, `MAIL FROM`, a random `RCPT TO` for catch-all
//! detection, the real `RCPT TO`) and always ends with `QUIT`.

mod error;
mod evaluate;
mod options;
mod probe;
mod session;
mod types;
mod util;

pub use error::ProbeError;
pub use evaluate::{Evaluation, ProbePlan, evaluate};
pub use options::{
    DEFAULT_FROM_EMAIL, DEFAULT_HELLO_NAME, DEFAULT_SMTP_PORT, DEFAULT_TIMEOUT, ProbeOptions,
};
pub use probe::{connect_host, probe_hosts};
pub use session::SmtpSession;
pub use types::{ProbeResult, SmtpReply};
pub use util::{RANDOM_LOCAL_PART_LEN, generate_random_email, random_local_part};
