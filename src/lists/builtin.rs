use phf::phf_set;

use super::DomainList;

/// Public webmail providers. Catch-all probing is skipped for these.
pub static FREE_DOMAINS: phf::Set<&'static str> = phf_set! {
    "aol.com",
    "gmail.com",
    "googlemail.com",
    "gmx.com",
    "gmx.de",
    "gmx.net",
    "hotmail.co.uk",
    "hotmail.com",
    "hotmail.fr",
    "icloud.com",
    "inbox.ru",
    "laposte.net",
    "list.ru",
    "live.com",
    "mac.com",
    "mail.com",
    "mail.ru",
    "me.com",
    "msn.com",
    "naver.com",
    "orange.fr",
    "outlook.com",
    "proton.me",
    "protonmail.com",
    "qq.com",
    "rambler.ru",
    "tutanota.com",
    "web.de",
    "yahoo.co.jp",
    "yahoo.co.uk",
    "yahoo.com",
    "yahoo.fr",
    "yandex.com",
    "yandex.ru",
    "ymail.com",
    "zoho.com",
    "163.com",
    "126.com",
};

/// Local parts that address a function rather than a person.
pub static ROLE_ACCOUNTS: phf::Set<&'static str> = phf_set! {
    "abuse",
    "admin",
    "administrator",
    "billing",
    "contact",
    "help",
    "hostmaster",
    "info",
    "jobs",
    "mail",
    "mailer-daemon",
    "marketing",
    "no-reply",
    "noc",
    "noreply",
    "office",
    "postmaster",
    "privacy",
    "root",
    "sales",
    "security",
    "support",
    "sysadmin",
    "team",
    "webmaster",
};

/// Case-insensitive view over [`FREE_DOMAINS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeDomains;

impl DomainList for FreeDomains {
    fn contains(&self, name: &str) -> bool {
        FREE_DOMAINS.contains(name.trim_end_matches('.').to_ascii_lowercase().as_str())
    }
}

/// Case-insensitive view over [`ROLE_ACCOUNTS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleAccounts;

impl DomainList for RoleAccounts {
    fn contains(&self, name: &str) -> bool {
        ROLE_ACCOUNTS.contains(name.to_lowercase().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_domains_ignore_case_and_root_dot() {
        assert!(FreeDomains.contains("Gmail.com."));
        assert!(!FreeDomains.contains("example.com"));
    }

    #[test]
    fn role_accounts_ignore_case() {
        assert!(RoleAccounts.contains("PostMaster"));
        assert!(!RoleAccounts.contains("alice"));
    }

    #[test]
    fn raw_sets_are_lists_too() {
        fn check(list: &dyn DomainList, name: &str) -> bool {
            list.contains(name)
        }
        assert!(check(&FREE_DOMAINS, "yahoo.com"));
        assert!(!check(&FREE_DOMAINS, "YAHOO.com"));
    }
}
