//! DNS MX resolution.
//!
//! [`check_mx`] performs a synchronous lookup using the system resolver and
//! returns an [`MxCheck`]. The [`LookupMx`] trait is the seam used by the
//! verifier so another resolver can be injected.

mod error;
mod resolver;
mod types;

pub use error::MxError;
pub use resolver::{LookupMx, SystemResolver, check_mx, check_mx_with, normalize_domain};
pub(crate) use resolver::resolve_with;
pub use types::{MxCheck, MxRecord};

#[cfg(test)]
pub(crate) mod tests;
