//! Domain and local-part lists consulted by the verifier.
//!
//! Free-mail providers and role accounts are compiled in as `phf` sets.
//! Disposable domains change too often for that and live behind the
//! [`DisposableRepo`] trait; [`MemoryDisposableRepo`] is the default store.

mod builtin;
mod disposable;

pub use builtin::{FREE_DOMAINS, FreeDomains, ROLE_ACCOUNTS, RoleAccounts};
pub use disposable::{DisposableRepo, DisposableRepoUpdater, MemoryDisposableRepo};

/// Membership test over a set of names.
pub trait DomainList: Send + Sync {
    fn contains(&self, name: &str) -> bool;
}

impl DomainList for phf::Set<&'static str> {
    fn contains(&self, name: &str) -> bool {
        phf::Set::contains(self, name)
    }
}
