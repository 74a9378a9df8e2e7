//! Line-oriented interactive search.
//!
//! Every line read from stdin is treated as an edit of the input field
//! followed by a submit. Lookups run concurrently; the orchestrator decides
//! which response is still current, so a slow answer for an old line never
//! replaces the results of a newer one.

use std::io::{self, Write};
use std::process::ExitCode;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use ziplookup_client::LookupClient;
use ziplookup_search::{LookupService, Notification, Notifier, SearchOrchestrator};

use crate::notifier::TerminalNotifier;
use crate::render;

const PROMPT: &str =
    "Enter the street and house number, then a comma and the city (e.g. הורדים 5, ירושלים):";

pub(crate) async fn run(client: &LookupClient) -> anyhow::Result<ExitCode> {
    let mut orchestrator = SearchOrchestrator::new(TerminalNotifier::new(io::stderr()));
    run_session(
        BufReader::new(tokio::io::stdin()),
        client,
        &mut orchestrator,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await?;
    Ok(ExitCode::SUCCESS)
}

/// Reads addresses from `reader` until EOF, then waits for the lookups still
/// in flight.
///
/// A line that is not valid UTF-8 is reported as an error notification and
/// skipped. A read error is reported the same way and stops reading, but
/// pending lookups still complete.
pub(crate) async fn run_session<R, L, N, W, P>(
    mut reader: R,
    lookup: &L,
    orchestrator: &mut SearchOrchestrator<N>,
    out: &mut W,
    prompt: &mut P,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    L: LookupService,
    N: Notifier,
    W: Write,
    P: Write,
{
    let mut in_flight = FuturesUnordered::new();
    let mut buf = Vec::new();
    let mut reading = true;

    writeln!(prompt, "{PROMPT}")?;

    while reading || !in_flight.is_empty() {
        tokio::select! {
            // Partial reads stay in `buf` when the other branch wins.
            read = reader.read_until(b'\n', &mut buf), if reading => {
                match read {
                    Ok(0) => {
                        tracing::debug!(pending = in_flight.len(), "input closed, draining lookups");
                        reading = false;
                    }
                    Ok(_) => {
                        orchestrator.input_changed();
                        match decode_line(&buf) {
                            Ok(line) => {
                                if let Some(request) = orchestrator.submit(line) {
                                    in_flight.push(async move {
                                        let outcome = lookup.lookup(request.raw_address()).await;
                                        (request.id(), outcome)
                                    });
                                }
                            }
                            Err(e) => {
                                tracing::debug!(error = %e, "skipping undecodable input line");
                                report(orchestrator, format!("Input line is not valid UTF-8: {e}"));
                            }
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to read input");
                        report(orchestrator, format!("Could not read input: {e}"));
                        reading = false;
                    }
                }
                buf.clear();
            }
            Some((id, outcome)) = in_flight.next(), if !in_flight.is_empty() => {
                if orchestrator.complete(id, outcome) {
                    render::render(out, orchestrator.render_input())?;
                    writeln!(prompt, "{PROMPT}")?;
                }
            }
        }
    }

    Ok(())
}

fn decode_line(buf: &[u8]) -> Result<&str, std::str::Utf8Error> {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    std::str::from_utf8(line)
}

fn report<N: Notifier>(orchestrator: &SearchOrchestrator<N>, message: String) {
    if let Err(e) = orchestrator.notifier().notify(Notification::error(message)) {
        tracing::warn!(error = %e, "failed to deliver notification");
    }
}
