use std::{io::Write, time::Duration};

use clap::Args;
use commute_client::{
    commute_client::CommuteClient,
    time_window::{TimeWindow, TimeWindowBuilder},
};
use indicatif::{ProgressBar, ProgressStyle};
use jiff::civil::DateTime;
use tracing::info;

use crate::{client_args::ClientArgs, parsers};

#[derive(Args)]
pub struct RecommendArgs {
    /// Start of the departure window, defaults to now
    #[arg(short, long, value_parser = parsers::parse_time)]
    start: Option<DateTime>,

    /// End of the departure window, defaults to the start
    #[arg(short, long, value_parser = parsers::parse_time)]
    end: Option<DateTime>,

    /// Print the request body instead of sending it
    #[arg(long)]
    dry_run: bool,

    #[command(flatten)]
    client: ClientArgs,
}

pub async fn run(args: RecommendArgs) -> anyhow::Result<()> {
    let mut builder = TimeWindowBuilder::default();
    if let Some(start) = args.start {
        builder = builder.with_start(start);
    }
    if let Some(end) = args.end {
        builder = builder.with_end(end);
    }
    let window = builder.build_or(jiff::Zoned::now().datetime());

    let client = CommuteClient::new(args.client.into_params()?);

    if args.dry_run {
        return write_request_body(&client, &window, &mut std::io::stdout());
    }

    info!(
        "Requesting best departure between {} and {}",
        window.formatted_start(),
        window.formatted_end()
    );

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg} ({elapsed})")?);
    spinner.set_message(client.params().api_url.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let text = client
        .request_best_departure_time(window.start(), window.end())
        .await;

    spinner.finish_and_clear();
    println!("{}", text);

    Ok(())
}

/// Pretty-prints the body that would be posted for `window`.
fn write_request_body<W: Write>(
    client: &CommuteClient,
    window: &TimeWindow,
    out: &mut W,
) -> anyhow::Result<()> {
    let request = client.build_request(window)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&request)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use serde_json::Value;

    use super::*;
    use crate::test_utils::{StubServer, create_test_client};

    fn window() -> TimeWindow {
        TimeWindow::new(
            date(2025, 6, 10).at(8, 0, 0, 0),
            date(2025, 6, 10).at(9, 30, 0, 0),
        )
    }

    #[tokio::test]
    async fn test_dry_run_prints_body_without_sending() {
        let server = StubServer::start(r#"{"bestDepartureTime":"08:15"}"#).await;
        let mut out = Vec::new();

        write_request_body(&server.client(), &window(), &mut out).unwrap();

        let body: Value = serde_json::from_slice(&out).unwrap();
        let keys: Vec<&str> = body
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 5);
        for key in [
            "startTimeWindow",
            "endTimeWindow",
            "fromAddresses",
            "toAddress",
            "infrastructureCostFactor",
        ] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(body["startTimeWindow"], "2025-06-10 08:00:00");
        assert_eq!(body["fromAddresses"], serde_json::json!(["Home"]));
        assert_eq!(server.hits(), 0);
    }

    #[test]
    fn test_dry_run_refuses_missing_addresses() {
        let client = CommuteClient::new(
            create_test_client("http://127.0.0.1:9/recommend-team-travel")
                .params()
                .clone()
                .with_to_address(""),
        );
        let mut out = Vec::new();

        let result = write_request_body(&client, &window(), &mut out);

        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
