use anyhow::{Result, bail};
use mailprobe_lib::{ClassifiedError, MxCheck, ProbeResult, SmtpCheckError, Verification, VerifyError};

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug)]
pub struct SmtpReport {
    pub domain: String,
    pub user: String,
    pub enabled: bool,
    pub result: Option<ProbeResult>,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub error: Option<ClassifiedError>,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub vendor_error: Option<String>,
}

impl SmtpReport {
    pub fn new(
        domain: &str,
        user: &str,
        outcome: Result<Option<ProbeResult>, SmtpCheckError>,
    ) -> Self {
        let mut report = Self {
            domain: domain.to_string(),
            user: user.to_string(),
            enabled: true,
            result: None,
            error: None,
            vendor_error: None,
        };
        match outcome {
            Ok(result) => {
                report.enabled = result.is_some();
                report.result = result;
            }
            Err(SmtpCheckError::Classified { result, error }) => {
                report.result = Some(result);
                report.error = Some(error);
            }
            Err(err @ SmtpCheckError::Vendor { .. }) => report.vendor_error = Some(err.to_string()),
        }
        report
    }

    pub fn failed(&self) -> bool {
        self.error.is_some() || self.vendor_error.is_some()
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug)]
pub struct CheckReport {
    #[cfg_attr(feature = "with-serde", serde(flatten))]
    pub verification: Verification,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub error: Option<String>,
}

impl From<Result<Verification, VerifyError>> for CheckReport {
    fn from(outcome: Result<Verification, VerifyError>) -> Self {
        match outcome {
            Ok(verification) => Self {
                verification,
                error: None,
            },
            Err(err) => Self {
                verification: err.verification().clone(),
                error: Some(err.to_string()),
            },
        }
    }
}

pub fn print_check(report: &CheckReport, format: &str) -> Result<()> {
    match format {
        "human" => {
            let v = &report.verification;
            if !v.syntax.valid {
                println!("[INVALID] {}", v.email);
                return Ok(());
            }
            println!("[{}] {}", v.reachable.as_str().to_uppercase(), v.email);
            println!(
                "        free={} role={} disposable={} mx={}",
                v.free, v.role_account, v.disposable, v.has_mx_records
            );
            if let Some(smtp) = &v.smtp {
                println!("        smtp: {}", human_result(smtp));
            }
            if let Some(error) = &report.error {
                println!("        error: {error}");
            }
            Ok(())
        }
        "json" => print_json(report),
        other => bail!("unknown --format '{other}', use: human|json"),
    }
}

pub fn print_mx(domain: &str, mx: &MxCheck, format: &str) -> Result<()> {
    match format {
        "human" => {
            if mx.has_mx_record {
                let summary = mx
                    .records
                    .iter()
                    .map(|r| format!("{}:{}", r.preference, r.exchange))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("[MX]    {domain} :: {summary}");
            } else {
                println!("[NO MX] {domain}");
            }
            Ok(())
        }
        "json" => print_json(mx),
        other => bail!("unknown --format '{other}', use: human|json"),
    }
}

pub fn print_smtp(report: &SmtpReport, format: &str) -> Result<()> {
    match format {
        "human" => {
            let target = if report.user.is_empty() {
                report.domain.clone()
            } else {
                format!("{}@{}", report.user, report.domain)
            };
            if !report.enabled {
                println!("[SKIPPED] {target} :: SMTP check disabled");
                return Ok(());
            }
            let status = if report.failed() { "FAIL" } else { "OK" };
            println!("[{status}] {target}");
            if let Some(result) = &report.result {
                println!("        smtp: {}", human_result(result));
            }
            if let Some(error) = &report.error {
                println!("        {}: {error}", error.category);
            }
            if let Some(error) = &report.vendor_error {
                println!("        vendor: {error}");
            }
            Ok(())
        }
        "json" => print_json(report),
        other => bail!("unknown --format '{other}', use: human|json"),
    }
}

fn human_result(result: &ProbeResult) -> String {
    format!(
        "host_exists={} catch_all={} deliverable={} full_inbox={} disabled={} api={}",
        result.host_exists,
        result.catch_all,
        result.deliverable,
        result.full_inbox,
        result.disabled,
        result.via_vendor_api
    )
}

#[cfg(feature = "with-serde")]
fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn print_json<T>(_: &T) -> Result<()> {
    bail!("format=json requires the 'with-serde' feature")
}
