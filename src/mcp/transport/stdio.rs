// ABOUTME: Stdio transport for serving MCP.
// ABOUTME: Reads requests line by line, handles each concurrently, writes replies.

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::error::{Error, McpError};
use crate::mcp::{McpResponse, McpRpcError, McpServer};

/// Serves newline-delimited JSON-RPC from a reader to a writer.
pub struct StdioTransport<R, W> {
    reader: R,
    writer: W,
}

impl StdioTransport<Stdin, Stdout> {
    /// The process's own stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stdout())
    }
}

impl<R, W> StdioTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send + 'static,
{
    /// Create a transport over arbitrary streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Serve until the reader reaches end of input.
    ///
    /// Each request runs on its own task; responses go through a single
    /// writer task so lines never interleave. In-flight calls are awaited
    /// before returning.
    pub async fn serve(self, server: McpServer) -> Result<(), Error> {
        let (tx, mut rx) = mpsc::channel::<String>(64);

        let mut writer = self.writer;
        let writer_handle = tokio::spawn(async move {
            while let Some(line) = rx.recv().await {
                writer.write_all(line.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
            Ok::<_, McpError>(())
        });

        let mut in_flight = JoinSet::new();
        let mut reader = BufReader::new(self.reader);
        let mut buf = Vec::new();

        let read_result: Result<(), Error> = loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break Ok(()),
                Ok(_) => {}
                Err(e) => break Err(McpError::Io(e).into()),
            }
            while buf.last().is_some_and(|b| *b == b'\n' || *b == b'\r') {
                buf.pop();
            }
            let line = match String::from_utf8(std::mem::take(&mut buf)) {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, "request line is not valid UTF-8");
                    let response = McpResponse::failure(
                        Value::Null,
                        McpRpcError::parse_error(format!("request is not valid UTF-8: {}", e)),
                    );
                    send(&tx, &response).await;
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            let server = server.clone();
            let tx = tx.clone();
            in_flight.spawn(async move {
                if let Some(response) = server.handle_line(&line).await {
                    send(&tx, &response).await;
                }
            });

            while in_flight.try_join_next().is_some() {}
        };

        debug!(pending = in_flight.len(), "input closed, draining");
        while in_flight.join_next().await.is_some() {}
        drop(tx);

        writer_handle
            .await
            .map_err(|e| McpError::Protocol(format!("writer task failed: {}", e)))??;
        read_result
    }
}

async fn send(tx: &mpsc::Sender<String>, response: &McpResponse) {
    match serde_json::to_string(response) {
        Ok(json) => {
            if tx.send(json).await.is_err() {
                warn!("writer closed, dropping response");
            }
        }
        Err(e) => warn!(error = %e, "failed to serialize response"),
    }
}
