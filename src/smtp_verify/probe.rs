use crate::transport::{TransportConfig, TransportError, run_with_deadline};

use super::error::ProbeError;
use super::options::ProbeOptions;
use super::session::SmtpSession;

/// Dial `host` and read its greeting, both bounded by `connect_timeout`.
pub fn connect_host(
    host: &str,
    transport: &TransportConfig,
    options: &ProbeOptions,
) -> Result<SmtpSession, ProbeError> {
    let addr = options.address_for(host);
    let dial = transport.dial_fn(&addr, options.connect_timeout, options.command_timeout);
    let deadline = options.connect_timeout;
    let session_host = host.trim_end_matches('.').to_string();
    let task_addr = addr.clone();

    run_with_deadline(&addr, deadline, move || {
        let stream = dial().map_err(|source| TransportError::connect(&task_addr, source, deadline))?;
        SmtpSession::establish(session_host, stream)
    })
}

/// Try `hosts` in order and keep the first that greets us.
///
/// An empty list yields `Ok(None)`. When every host fails the error of the
/// first attempt is returned.
pub fn probe_hosts<S: AsRef<str>>(
    hosts: &[S],
    transport: &TransportConfig,
    options: &ProbeOptions,
) -> Result<Option<(SmtpSession, String)>, ProbeError> {
    let mut first_err = None;
    for host in hosts.iter().map(AsRef::as_ref) {
        match connect_host(host, transport, options) {
            Ok(session) => {
                tracing::debug!(host, "mail exchanger accepted connection");
                return Ok(Some((session, host.to_string())));
            }
            Err(err) => {
                tracing::debug!(host, %err, "mail exchanger unusable");
                first_err.get_or_insert(err);
            }
        }
    }
    match first_err {
        Some(err) => Err(err),
        None => Ok(None),
    }
}
