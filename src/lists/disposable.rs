use std::collections::HashSet;
use std::sync::RwLock;

/// Write side of a disposable-domain store, fed by whatever refresh job the
/// caller runs.
pub trait DisposableRepoUpdater: Send + Sync {
    fn add_disposable_domains(&self, domains: &[String]);
}

pub trait DisposableRepo: DisposableRepoUpdater {
    /// `domain` is expected in ASCII (IDNA) form.
    fn is_domain_disposable(&self, domain: &str) -> bool;
}

/// Thread-safe in-memory set of disposable domains.
#[derive(Debug, Default)]
pub struct MemoryDisposableRepo {
    domains: RwLock<HashSet<String>>,
}

impl MemoryDisposableRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = domains.into_iter().map(|d| normalize(d.as_ref())).collect();
        Self {
            domains: RwLock::new(set),
        }
    }

    pub fn len(&self) -> usize {
        self.domains.read().map_or(0, |set| set.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DisposableRepoUpdater for MemoryDisposableRepo {
    fn add_disposable_domains(&self, domains: &[String]) {
        match self.domains.write() {
            Ok(mut set) => set.extend(domains.iter().map(|d| normalize(d))),
            Err(_) => tracing::warn!("disposable domain store poisoned, update dropped"),
        }
    }
}

impl DisposableRepo for MemoryDisposableRepo {
    fn is_domain_disposable(&self, domain: &str) -> bool {
        self.domains
            .read()
            .is_ok_and(|set| set.contains(&normalize(domain)))
    }
}

fn normalize(domain: &str) -> String {
    domain.trim().trim_end_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn bulk_insert_and_lookup() {
        let repo = MemoryDisposableRepo::with_domains(["mailinator.com"]);
        assert!(repo.is_domain_disposable("Mailinator.com"));
        assert!(!repo.is_domain_disposable("example.com"));

        repo.add_disposable_domains(&["guerrillamail.com".to_string(), "yopmail.com.".to_string()]);
        assert!(repo.is_domain_disposable("yopmail.com"));
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn concurrent_updates_are_all_kept() {
        let repo = Arc::new(MemoryDisposableRepo::new());
        let workers: Vec<_> = (0..4)
            .map(|n| {
                let repo = Arc::clone(&repo);
                thread::spawn(move || repo.add_disposable_domains(&[format!("tmp{n}.example")]))
            })
            .collect();
        for worker in workers {
            worker.join().expect("worker");
        }
        assert_eq!(repo.len(), 4);
        assert!(repo.is_domain_disposable("tmp2.example"));
    }
}
