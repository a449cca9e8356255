//! Stdio frame pump: reads line-delimited JSON requests
//! from standard input, dispatches each on its own task, and writes
//! responses to standard output in original request order via a
//! sequence-keyed reorder buffer. Malformed input never crashes the
//! process; it answers with a protocol-error envelope.

use crate::mcp::dispatcher::Dispatcher;
use crate::mcp::types::{ToolRequest, ToolResponse};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::{mpsc, watch};

/// Runs the driver until EOF on standard input. Returns once every
/// in-flight response has been flushed.
pub async fn run(dispatcher: Arc<Dispatcher>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    let (response_tx, response_rx) = mpsc::unbounded_channel::<(u64, ToolResponse)>();
    let (cancel_tx, cancel_rx) = watch::channel(false);

    let writer = tokio::spawn(drain_in_order(response_rx));

    let mut next_seq: u64 = 0;
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "stdin read error, treating as EOF");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let seq = next_seq;
        next_seq += 1;

        let dispatcher = Arc::clone(&dispatcher);
        let response_tx = response_tx.clone();
        let cancel_rx = cancel_rx.clone();
        tokio::spawn(async move {
            let response = handle_line(&dispatcher, &line, cancel_rx).await;
            let _ = response_tx.send((seq, response));
        });
    }

    // End-of-input: signal every still-running worker.
    let _ = cancel_tx.send(true);
    drop(response_tx);
    let _ = writer.await;
    Ok(())
}

async fn handle_line(dispatcher: &Dispatcher, line: &str, cancel: watch::Receiver<bool>) -> ToolResponse {
    match serde_json::from_str::<ToolRequest>(line) {
        Ok(request) => dispatcher.dispatch_cancellable(&request.tool, request.arguments, cancel).await,
        Err(e) => ToolResponse::failure(
            "gateway",
            "unknown",
            format!("gateway: ProtocolError: malformed request: {e}"),
        ),
    }
}

/// Buffers out-of-order completions and flushes the longest in-order
/// prefix after each arrival, so stdout preserves stdin's request order
/// even though dispatch itself is unordered.
async fn drain_in_order(mut rx: mpsc::UnboundedReceiver<(u64, ToolResponse)>) {
    let mut stdout = io::stdout();
    let mut pending: BTreeMap<u64, ToolResponse> = BTreeMap::new();
    let mut next_to_write: u64 = 0;

    while let Some((seq, response)) = rx.recv().await {
        pending.insert(seq, response);
        while let Some(response) = pending.remove(&next_to_write) {
            write_response(&mut stdout, &response).await;
            next_to_write += 1;
        }
    }
}

async fn write_response(stdout: &mut io::Stdout, response: &ToolResponse) {
    let line = serde_json::to_string(response).unwrap_or_else(|e| {
        format!(
            r#"{{"product":"gateway","tool":"","success":false,"content":"","error":"failed to serialize response: {e}"}}"#
        )
    });
    let _ = stdout.write_all(line.as_bytes()).await;
    let _ = stdout.write_all(b"\n").await;
    let _ = stdout.flush().await;
}
