use std::{io::Write, sync::Arc};

use clap::Args;
use commute_client::{
    commute_client::CommuteClient,
    dispatcher::{DisplayField, RecommendationDispatcher},
    time_window::TimeWindow,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::{client_args::ClientArgs, parsers};

#[derive(Args)]
pub struct InteractiveArgs {
    #[command(flatten)]
    client: ClientArgs,
}

pub async fn run(args: InteractiveArgs) -> anyhow::Result<()> {
    let client = Arc::new(CommuteClient::new(args.client.into_params()?));

    info!("Enter \"<start> <end>\" per line, Ctrl-D to quit");

    run_lines(
        client,
        BufReader::new(tokio::io::stdin()),
        &mut std::io::stdout(),
    )
    .await?;

    Ok(())
}

/// Every `<start> <end>` line fires a request in the background and results
/// are written to `out` as they come back. Returns once `reader` is exhausted
/// and every request has reported back.
pub async fn run_lines<R, W>(
    client: Arc<CommuteClient>,
    reader: R,
    out: &mut W,
) -> anyhow::Result<DisplayField>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (dispatcher, mut updates) = RecommendationDispatcher::new(client);
    let mut dispatcher = Some(dispatcher);
    let mut field = DisplayField::default();
    let mut lines = reader.lines();

    loop {
        tokio::select! {
            line = lines.next_line(), if dispatcher.is_some() => {
                match line? {
                    Some(line) => {
                        if let Some(dispatcher) = &dispatcher {
                            submit(dispatcher, &line);
                        }
                    }
                    // EOF, wait for in-flight requests
                    None => dispatcher = None,
                }
            }
            update = updates.next() => {
                let Some(update) = update else {
                    break;
                };
                field.apply(update);
                debug!("Displaying result of request {:?}", field.last_request_id());
                writeln!(out, "{}", field.text())?;
            }
        }
    }

    Ok(field)
}

fn submit(dispatcher: &RecommendationDispatcher, line: &str) {
    if line.trim().is_empty() {
        return;
    }

    match parsers::parse_window_line(line, jiff::Zoned::now().date()) {
        Ok((start, end)) => {
            dispatcher.dispatch(TimeWindow::new(start, end));
        }
        Err(e) => warn!("{}", e),
    }
}
