#![forbid(unsafe_code)]
//! mailprobe_lib: SMTP reachability probing for e-mail addresses.
//!
//! The [`Verifier`] resolves a domain's mail exchangers, lets a registered
//! vendor override answer when it recognises one of them, and otherwise
//! opens an SMTP session to detect catch-all servers and probe the mailbox.
//! Failures are mapped onto a small [`ErrorCategory`] taxonomy.

pub mod classify;
pub mod lists;
pub mod mx;
pub mod smtp_verify;
pub mod transport;
pub mod vendor;
pub mod verifier;

pub use classify::{ClassifiedError, ErrorCategory, classify, classify_error};
pub use lists::{DisposableRepo, DisposableRepoUpdater, DomainList, MemoryDisposableRepo};
pub use mx::{LookupMx, MxCheck, MxError, MxRecord, check_mx};
pub use smtp_verify::{ProbeError, ProbeOptions, ProbeResult, generate_random_email};
pub use transport::{BoxedStream, DialFn, DialerProvider, TransportConfig, TransportError};
pub use vendor::{ClientProvider, MxSuffixes, SuffixVendor, VendorError, VendorRegistry, VendorVerifier};
pub use verifier::{Reachable, SmtpCheckError, Syntax, Verification, Verifier, VerifyError};

#[cfg(test)]
mod test_support;
