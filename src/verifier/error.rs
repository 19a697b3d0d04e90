use thiserror::Error;

use crate::classify::{ClassifiedError, ErrorCategory};
use crate::mx::MxError;
use crate::smtp_verify::ProbeResult;
use crate::vendor::VendorError;

use super::Verification;

/// Failure of [`Verifier::check_smtp`](super::Verifier::check_smtp).
#[derive(Debug, Error)]
pub enum SmtpCheckError {
    /// The probe ended on a classified failure. `result` holds whatever was
    /// learned before it.
    #[error("{error}")]
    Classified {
        result: ProbeResult,
        error: ClassifiedError,
    },
    #[error("vendor {vendor} check failed: {source}")]
    Vendor {
        vendor: String,
        #[source]
        source: VendorError,
    },
}

impl SmtpCheckError {
    pub(crate) fn classified(result: ProbeResult, error: ClassifiedError) -> Self {
        Self::Classified { result, error }
    }

    pub(crate) fn vendor(vendor: &str, source: VendorError) -> Self {
        Self::Vendor {
            vendor: vendor.to_string(),
            source,
        }
    }

    /// Partial result of a classified failure.
    pub fn result(&self) -> Option<&ProbeResult> {
        match self {
            Self::Classified { result, .. } => Some(result),
            Self::Vendor { .. } => None,
        }
    }

    pub fn classified_error(&self) -> Option<&ClassifiedError> {
        match self {
            Self::Classified { error, .. } => Some(error),
            Self::Vendor { .. } => None,
        }
    }

    pub fn category(&self) -> Option<ErrorCategory> {
        self.classified_error().map(|error| error.category)
    }
}

/// Failure of [`Verifier::verify`](super::Verifier::verify), carrying the
/// checks completed before it.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("MX check failed: {source}")]
    Mx {
        verification: Box<Verification>,
        #[source]
        source: MxError,
    },
    #[error("SMTP check failed: {source}")]
    Smtp {
        verification: Box<Verification>,
        #[source]
        source: SmtpCheckError,
    },
}

impl VerifyError {
    pub(crate) fn mx(verification: Verification, source: MxError) -> Self {
        Self::Mx {
            verification: Box::new(verification),
            source,
        }
    }

    pub(crate) fn smtp(verification: Verification, source: SmtpCheckError) -> Self {
        Self::Smtp {
            verification: Box::new(verification),
            source,
        }
    }

    pub fn verification(&self) -> &Verification {
        match self {
            Self::Mx { verification, .. } | Self::Smtp { verification, .. } => verification,
        }
    }
}
