use trust_dns_resolver::{
    Resolver,
    error::{ResolveError, ResolveErrorKind},
};

use super::{MxCheck, MxError, MxRecord};

/// Source of MX records. Implemented for the trust-dns [`Resolver`] and for
/// [`SystemResolver`]; tests plug in their own.
pub trait LookupMx: Send + Sync {
    /// Records for an ASCII domain. "No records" is an empty list, not an
    /// error.
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, MxError>;
}

impl LookupMx for Resolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, MxError> {
        let lookup = match Resolver::mx_lookup(self, domain) {
            Ok(lookup) => lookup,
            Err(err) => {
                if should_treat_as_empty(&err) {
                    return Ok(Vec::new());
                }
                return Err(MxError::lookup(domain, err));
            }
        };
        let records = lookup
            .iter()
            .map(|mx| MxRecord::new(mx.preference(), normalize_exchange(mx.exchange().to_utf8())))
            .collect();
        Ok(records)
    }
}

/// Builds a resolver from the system configuration on every lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl LookupMx for SystemResolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, MxError> {
        let resolver = Resolver::from_system_conf().map_err(MxError::resolver_init)?;
        LookupMx::lookup_mx(&resolver, domain)
    }
}

/// Lookup MX records for `domain` using the system resolver.
///
/// The domain is normalized via IDNA before querying DNS.
pub fn check_mx(domain: &str) -> Result<MxCheck, MxError> {
    check_mx_with(&SystemResolver, domain)
}

/// Same as [`check_mx`] with a caller-supplied resolver.
pub fn check_mx_with<R>(resolver: &R, domain: &str) -> Result<MxCheck, MxError>
where
    R: LookupMx + ?Sized,
{
    let ascii = normalize_domain(domain)?;
    resolve_with(resolver, &ascii)
}

pub(crate) fn resolve_with<R>(resolver: &R, ascii_domain: &str) -> Result<MxCheck, MxError>
where
    R: LookupMx + ?Sized,
{
    let mut records = resolver.lookup_mx(ascii_domain)?;

    records.sort();
    records.dedup();

    Ok(MxCheck::from_records(records))
}

pub fn normalize_domain(domain: &str) -> Result<String, MxError> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(MxError::EmptyDomain);
    }
    idna::domain_to_ascii(trimmed).map_err(MxError::idna)
}

pub(crate) fn normalize_exchange(exchange: String) -> String {
    let trimmed = exchange.trim_end_matches('.');
    trimmed.to_ascii_lowercase()
}

fn should_treat_as_empty(err: &ResolveError) -> bool {
    matches!(err.kind(), ResolveErrorKind::NoRecordsFound { .. })
}
