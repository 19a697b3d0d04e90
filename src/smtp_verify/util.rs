use rand::{Rng, distributions::Alphanumeric};

pub const RANDOM_LOCAL_PART_LEN: usize = 32;

pub fn random_local_part(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Random 32 character mailbox at `domain`, used to detect catch-all servers.
pub fn generate_random_email(domain: &str) -> String {
    format!("{}@{domain}", random_local_part(RANDOM_LOCAL_PART_LEN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_email_has_32_alphanumerics() {
        let email = generate_random_email("example.com");
        let (local, domain) = email.split_once('@').expect("has @");
        assert_eq!(domain, "example.com");
        assert_eq!(local.len(), 32);
        assert!(local.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(email, generate_random_email("example.com"));
    }
}
