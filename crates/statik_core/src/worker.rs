use std::{net::SocketAddr, sync::Arc};

use bytes::BytesMut;
use statik_cache::TtlCache;
use statik_config::StatikConfig;
use statik_http::responses::send_405;
use statik_static::serve_static;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tracing::{debug, info};

pub trait ClientStream: AsyncRead + AsyncWrite + Unpin + Send {}

impl<T> ClientStream for T where T: AsyncRead + AsyncWrite + Unpin + Send {}

/// Entry point for a logical worker that handles a single connection.
///
/// Reads one request line, serves one response, and lets the stream drop
/// on every exit path so the connection always closes. Errors bubble to
/// the spawning task; they never cross connection boundaries.
pub async fn handle_connection<S: ClientStream>(
    mut stream: S,
    client_addr: SocketAddr,
    cache: Arc<TtlCache>,
    cfg: Arc<StatikConfig>,
) -> anyhow::Result<()> {
    let mut buf = BytesMut::new();

    let Some(request_line) = read_request_line(&mut stream, &mut buf).await? else {
        // Empty or absent request line: a defined no-op, not an error.
        debug!(
            target: "statik::worker",
            %client_addr,
            "Empty request line; closing without response"
        );
        return Ok(());
    };

    let mut tokens = request_line.split_whitespace();
    let (Some(method), Some(path)) = (tokens.next(), tokens.next()) else {
        // Fewer than two tokens is treated as malformed input and closed
        // silently, same as an empty line.
        debug!(
            target: "statik::worker",
            %client_addr,
            line = %request_line,
            "Malformed request line; closing without response"
        );
        return Ok(());
    };

    if method != "GET" {
        send_405(&mut stream).await?;
        log_access(&client_addr, path, 405);
        return Ok(());
    }

    let status = serve_static(&mut stream, cfg.server.root(), path, &cache).await?;
    log_access(&client_addr, path, status);

    Ok(())
}

/// One access-log line per request outcome.
fn log_access(client_addr: &SocketAddr, path: &str, status: u16) {
    info!(
        target: "statik::access",
        "{} requested {} -> {}",
        client_addr.ip(),
        path,
        status
    );
}

/// Read the first line of the request, accepting CRLF or bare LF.
///
/// Returns `None` on EOF before any bytes arrive and on a blank line.
async fn read_request_line<S: ClientStream>(
    stream: &mut S,
    buf: &mut BytesMut,
) -> anyhow::Result<Option<String>> {
    let line_end = loop {
        if let Some(pos) = buf.iter().position(|&b| b == b'\n') {
            break pos + 1;
        }

        let mut tmp = [0u8; 1024];
        let n = stream.read(&mut tmp).await?;
        if n == 0 {
            if buf.is_empty() {
                return Ok(None);
            }
            // EOF mid-line: take what arrived.
            break buf.len();
        }
        buf.extend_from_slice(&tmp[..n]);
    };

    let raw = buf.split_to(line_end);
    let line = String::from_utf8_lossy(&raw);
    let line = line.trim_end_matches(['\n', '\r']);

    if line.is_empty() {
        return Ok(None);
    }
    Ok(Some(line.to_string()))
}
