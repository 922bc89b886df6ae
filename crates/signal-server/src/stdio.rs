//! Stdio transport for the tool-invocation protocol
//!
//! Newline-delimited JSON-RPC over the process's standard streams, for
//! callers that spawn the server as a child process instead of speaking
//! HTTP. One request per line, one response per line.

use crate::handler::RpcHandler;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

/// Serve the protocol over stdin/stdout until stdin closes
pub async fn serve(handler: Arc<RpcHandler>) -> std::io::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut lines = stdin.lines();

    info!("tool endpoint serving on stdio");
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        debug!(len = line.len(), "stdio request line");
        let response = handler.handle_line(line).await;
        let encoded = serde_json::to_string(&response)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        stdout.write_all(encoded.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    info!("stdin closed, stdio endpoint shutting down");
    Ok(())
}
