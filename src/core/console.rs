// Line-oriented console host: one JSON intent in, JSON lines out

use crate::core::portal::Portal;
use crate::core::routes::{dispatch, parse_intent, Reply};
use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

/// Feed every line of `input` to the portal until EOF.
///
/// Events go to the portal's sink; replies that carry data (leave-day
/// previews, leave history, material listings, stats) are written to
/// `replies`. Returns the number of
/// non-empty lines handled.
pub async fn run_console<R, W>(portal: &mut Portal, input: R, replies: &mut W) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut handled = 0;

    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read intent from input")?
    {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        handled += 1;

        let Some(intent) = parse_intent(portal, line) else {
            continue;
        };
        let name = intent.name();

        match dispatch(portal, intent) {
            Ok(Reply::Done) => debug!(intent = name, "Intent completed"),
            Ok(reply) => {
                serde_json::to_writer(&mut *replies, &reply)
                    .context("Failed to encode reply")?;
                replies
                    .write_all(b"\n")
                    .and_then(|_| replies.flush())
                    .context("Failed to write reply")?;
            }
            // Already surfaced as a notification by the handler
            Err(e) => debug!(intent = name, error = %e, "Intent failed"),
        }
    }

    info!(lines = handled, "Input closed");
    Ok(handled)
}
