mod args;
mod output;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use mailprobe_lib::Reachable;
use tracing_subscriber::EnvFilter;

use args::{Cli, Commands};
use output::{CheckReport, SmtpReport};

const LOG_ENV: &str = "MAILPROBE_LOG";

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // exit codes: 0 ok, 2 negative verdict or probe failure, 1 fatal
    match &cli.cmd {
        Commands::Check { email } => {
            let verifier = cli.probe.verifier(false);
            let report = CheckReport::from(verifier.verify(email));
            output::print_check(&report, &cli.format)?;
            let negative = !report.verification.syntax.valid
                || report.verification.reachable == Reachable::No
                || report.error.is_some();
            Ok(exit_code(negative))
        }
        Commands::Mx { domain } => {
            let verifier = cli.probe.verifier(false);
            let mx = verifier
                .check_mx(domain)
                .with_context(|| format!("MX lookup for {domain}"))?;
            output::print_mx(domain, &mx, &cli.format)?;
            Ok(exit_code(!mx.has_mx_record))
        }
        Commands::Smtp { domain, user } => {
            let verifier = cli.probe.verifier(true);
            let report = SmtpReport::new(domain, user, verifier.check_smtp(domain, user));
            output::print_smtp(&report, &cli.format)?;
            Ok(exit_code(report.failed()))
        }
    }
}

fn exit_code(negative: bool) -> ExitCode {
    if negative {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}
