use crate::classify::{ClassifiedError, ErrorCategory, classify_error};
use crate::mx::{MxCheck, MxError, normalize_domain, resolve_with};
use crate::smtp_verify::{Evaluation, ProbePlan, ProbeResult, evaluate, probe_hosts};

use super::{SmtpCheckError, Verifier};

impl Verifier {
    /// Probe `username@domain` over SMTP.
    ///
    /// `Ok(None)` when SMTP checking is disabled. A domain without usable MX
    /// records fails with `no_such_host` (`timeout` when the resolver timed
    /// out) alongside an empty result.
    pub fn check_smtp(&self, domain: &str, username: &str) -> Result<Option<ProbeResult>, SmtpCheckError> {
        if !self.smtp_check_enabled {
            return Ok(None);
        }
        let ascii = match normalize_domain(domain) {
            Ok(ascii) => ascii,
            Err(err) => return self.smtp_with_mx(Err(err), domain, username),
        };
        let lookup = resolve_with(self.mx_resolver.as_ref(), &ascii);
        self.smtp_with_mx(lookup, &ascii, username)
    }

    /// Same as [`check_smtp`](Self::check_smtp) against a caller-supplied
    /// host list, tried in order. An empty list yields `Ok(None)`.
    pub fn check_smtp_for_mx<S: AsRef<str>>(
        &self,
        hosts: &[S],
        domain: &str,
        username: &str,
    ) -> Result<Option<ProbeResult>, SmtpCheckError> {
        if !self.smtp_check_enabled || hosts.is_empty() {
            return Ok(None);
        }

        if let Some((name, vendor)) = self.vendors.find_for_hosts(hosts) {
            tracing::info!(vendor = name, domain, "vendor override replaces SMTP probe");
            return match vendor.check(domain, username) {
                Ok(mut result) => {
                    result.via_vendor_api = true;
                    Ok(Some(result))
                }
                Err(source) => Err(SmtpCheckError::vendor(name, source)),
            };
        }

        let (session, host) = match probe_hosts(hosts, &self.transport, &self.options) {
            Ok(Some(found)) => found,
            Ok(None) => return Ok(None),
            Err(err) => {
                tracing::warn!(domain, %err, "no mail exchanger reachable");
                return Err(SmtpCheckError::classified(
                    ProbeResult::default(),
                    failure(&err),
                ));
            }
        };

        let plan = ProbePlan {
            domain,
            username,
            check_catch_all: self.options.catch_all_check && !self.is_free_domain(domain),
        };
        let Evaluation { result, error } = evaluate(session, &self.options, &plan);
        tracing::debug!(host = %host, domain, ?result, "SMTP probe finished");
        match error {
            None => Ok(Some(result)),
            Some(error) => Err(SmtpCheckError::classified(result, error)),
        }
    }

    pub(crate) fn smtp_with_mx(
        &self,
        lookup: Result<MxCheck, MxError>,
        domain: &str,
        username: &str,
    ) -> Result<Option<ProbeResult>, SmtpCheckError> {
        if !self.smtp_check_enabled {
            return Ok(None);
        }
        let hosts = match lookup {
            Ok(mx) if mx.has_mx_record => mx.hosts(),
            Ok(_) => {
                let error = ClassifiedError::new(
                    0,
                    ErrorCategory::NoSuchHost,
                    format!("no MX records found for {domain}"),
                );
                return Err(SmtpCheckError::classified(ProbeResult::default(), error));
            }
            Err(err) => {
                let fallback = if err.is_timeout() {
                    ErrorCategory::Timeout
                } else {
                    ErrorCategory::NoSuchHost
                };
                let error = ClassifiedError::new(0, fallback, err.to_string());
                return Err(SmtpCheckError::classified(ProbeResult::default(), error));
            }
        };
        self.check_smtp_for_mx(&hosts, domain, username)
    }
}

/// Classified form of a connection failure; `unclassified` when the text
/// carries no verdict.
fn failure<E: std::fmt::Display>(err: &E) -> ClassifiedError {
    classify_error(err)
        .unwrap_or_else(|| ClassifiedError::new(0, ErrorCategory::Unclassified, err.to_string()))
}
