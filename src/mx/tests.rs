use std::sync::Mutex;

use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};

use super::{LookupMx, MxError, MxRecord, check_mx_with, normalize_domain, resolver};

type LookupResult = Result<Vec<MxRecord>, MxError>;
type LookupFn = dyn Fn(&str) -> LookupResult + Send + Sync;

/// Resolver driven by a closure; remembers every queried name.
pub(crate) struct StubResolver {
    on_lookup: Box<LookupFn>,
    queried: Mutex<Vec<String>>,
}

impl StubResolver {
    pub(crate) fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> LookupResult + Send + Sync + 'static,
    {
        Self {
            on_lookup: Box::new(f),
            queried: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with `hosts`, preferences 10, 20, ...
    pub(crate) fn with_hosts(hosts: &[&str]) -> Self {
        let records: Vec<MxRecord> = hosts
            .iter()
            .zip(1u16..)
            .map(|(host, rank)| MxRecord::new(rank * 10, *host))
            .collect();
        Self::new(move |_| Ok(records.clone()))
    }

    pub(crate) fn failing(kind: ResolveErrorKind) -> Self {
        let message = kind.to_string();
        let is_timeout = matches!(kind, ResolveErrorKind::Timeout);
        Self::new(move |domain| {
            let err = if is_timeout {
                ResolveError::from(ResolveErrorKind::Timeout)
            } else {
                ResolveError::from(message.clone())
            };
            Err(MxError::lookup(domain, err))
        })
    }

    pub(crate) fn queried(&self) -> Vec<String> {
        self.queried.lock().expect("queried lock").clone()
    }
}

impl LookupMx for StubResolver {
    fn lookup_mx(&self, domain: &str) -> LookupResult {
        self.queried
            .lock()
            .expect("queried lock")
            .push(domain.to_string());
        (self.on_lookup)(domain)
    }
}

#[test]
fn normalize_domain_rejects_empty() {
    let err = normalize_domain("  ").expect_err("empty domain should fail");
    assert!(matches!(err, MxError::EmptyDomain));
}

#[test]
fn resolve_with_sorts_and_dedups_records() {
    let stub = StubResolver::new(|domain| {
        assert_eq!(domain, "example.com");
        Ok(vec![
            MxRecord::new(20, "mx2.example.com"),
            MxRecord::new(10, "mx1.example.com"),
            MxRecord::new(10, "mx1.example.com"),
            MxRecord::new(30, "mx3.example.com"),
        ])
    });

    let check = resolver::resolve_with(&stub, "example.com").expect("lookup succeeds");
    assert!(check.has_mx_record);
    assert_eq!(
        check.hosts(),
        vec!["mx1.example.com", "mx2.example.com", "mx3.example.com"]
    );
    assert_eq!(check.records[2].preference, 30);
}

#[test]
fn empty_answer_has_no_mx_record() {
    let stub = StubResolver::new(|_| Ok(Vec::new()));
    let check = resolver::resolve_with(&stub, "example.com").expect("lookup succeeds");
    assert!(!check.has_mx_record);
    assert!(check.records.is_empty());
}

#[test]
fn unicode_domains_are_queried_as_punycode() {
    let stub = StubResolver::with_hosts(&["mx.xn--bcher-kva.example"]);
    let check = check_mx_with(&stub, "bücher.example").expect("lookup succeeds");
    assert!(check.has_mx_record);
    assert_eq!(stub.queried(), vec!["xn--bcher-kva.example"]);
}

#[test]
fn lookup_timeouts_are_recognised() {
    let stub = StubResolver::failing(ResolveErrorKind::Timeout);
    let err = check_mx_with(&stub, "example.com").expect_err("times out");
    assert!(err.is_timeout());

    let stub = StubResolver::failing(ResolveErrorKind::Message("SERVFAIL"));
    let err = check_mx_with(&stub, "example.com").expect_err("fails");
    assert!(!err.is_timeout());
    assert!(err.to_string().starts_with("MX lookup for example.com failed"));
}

#[test]
fn normalize_exchange_trims_dot_and_lowercases() {
    let out = resolver::normalize_exchange("Mail.EXAMPLE.com.".to_string());
    assert_eq!(out, "mail.example.com");
}
