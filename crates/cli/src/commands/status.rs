use std::io::Write;

use clap::Args;
use jiff::Timestamp;
use rebate::status::DiscountStatus;
use serde::Serialize;

use crate::{commands::write_json, error::CliError};

#[derive(Debug, Args)]
pub(crate) struct StatusArgs {
    /// Start of the discount window (RFC 3339)
    #[arg(long)]
    starts_at: Timestamp,

    /// End of the discount window; open-ended when omitted
    #[arg(long)]
    ends_at: Option<Timestamp>,

    /// Evaluate at this instant instead of the system clock
    #[arg(long)]
    now: Option<Timestamp>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport {
    status: DiscountStatus,
    starts_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    ends_at: Option<Timestamp>,
}

pub(crate) fn run(args: &StatusArgs, stdout: impl Write, pretty: bool) -> Result<(), CliError> {
    let status = match args.now {
        Some(now) => DiscountStatus::at(args.starts_at, args.ends_at, now),
        None => DiscountStatus::current(args.starts_at, args.ends_at),
    };

    let report = StatusReport {
        status,
        starts_at: args.starts_at,
        ends_at: args.ends_at,
    };

    write_json(stdout, &report, pretty)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn reports_expired_window() -> TestResult {
        let args = StatusArgs {
            starts_at: "2025-01-01T00:00:00Z".parse()?,
            ends_at: Some("2025-02-01T00:00:00Z".parse()?),
            now: Some("2025-03-01T00:00:00Z".parse()?),
        };
        let mut output = Vec::new();

        run(&args, &mut output, false)?;

        let written: Value = serde_json::from_slice(&output)?;

        assert_eq!(
            written,
            json!({
                "status": "EXPIRED",
                "startsAt": "2025-01-01T00:00:00Z",
                "endsAt": "2025-02-01T00:00:00Z"
            })
        );

        Ok(())
    }

    #[test]
    fn open_ended_window_omits_end() -> TestResult {
        let args = StatusArgs {
            starts_at: "2025-01-01T00:00:00Z".parse()?,
            ends_at: None,
            now: Some("2025-03-01T00:00:00Z".parse()?),
        };
        let mut output = Vec::new();

        run(&args, &mut output, false)?;

        let written: Value = serde_json::from_slice(&output)?;

        assert_eq!(
            written,
            json!({ "status": "ACTIVE", "startsAt": "2025-01-01T00:00:00Z" })
        );

        Ok(())
    }
}
