//! Static file service.
//!
//! Resolves a request path under the content root, consults the shared TTL
//! cache, falls back to a disk read on a miss, and writes the response.

mod mime;
mod routes;

use bytes::Bytes;
use statik_cache::TtlCache;
use statik_http::responses::{send_404, send_response};
use tokio::io::AsyncWrite;
use tracing::debug;

pub use mime::{MIME_FALLBACK, mime_for_path};
pub use routes::resolve_path;

/// Serve one GET request for `req_path` and return the status code written.
///
/// Two concurrent first requests for the same path may both miss the cache
/// and both read the file; the cache keeps whichever put lands last. Both
/// callers still hold complete bodies of their own.
pub async fn serve_static<S>(
    stream: &mut S,
    root: &str,
    req_path: &str,
    cache: &TtlCache,
) -> anyhow::Result<u16>
where
    S: AsyncWrite + Unpin + ?Sized,
{
    let file_path = resolve_path(root, req_path);

    let is_file = tokio::fs::metadata(&file_path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);
    if !is_file {
        send_404(stream).await?;
        return Ok(404);
    }

    let content = match cache.get(&file_path) {
        Some(bytes) => {
            debug!(target: "statik::cache", path = %file_path, "Cache hit");
            bytes
        }
        None => {
            let bytes = Bytes::from(tokio::fs::read(&file_path).await?);
            cache.put(&file_path, bytes.clone());
            debug!(target: "statik::cache", path = %file_path, "Cache miss");
            bytes
        }
    };

    let mime_type = mime_for_path(&file_path);
    send_response(stream, "200 OK", mime_type, &content).await?;
    Ok(200)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use statik_cache::TtlCache;

    use super::serve_static;

    fn cache() -> TtlCache {
        TtlCache::new(Duration::from_secs(60))
    }

    #[tokio::test]
    async fn serves_file_with_mime_and_exact_length() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Hi</h1>").unwrap();
        let root = dir.path().to_str().unwrap();

        let mut out: Vec<u8> = Vec::new();
        let status = serve_static(&mut out, root, "/", &cache()).await.unwrap();

        assert_eq!(status, 200);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Type: text/html\r\n"));
        assert!(text.contains("Content-Length: 11\r\n"));
        assert!(text.ends_with("<h1>Hi</h1>"));
    }

    #[tokio::test]
    async fn missing_file_yields_404_html() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();

        let mut out: Vec<u8> = Vec::new();
        let status = serve_static(&mut out, root, "/missing.png", &cache())
            .await
            .unwrap();

        assert_eq!(status, 404);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(text.contains("Content-Type: text/html\r\n"));
    }

    #[tokio::test]
    async fn directory_yields_404() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let root = dir.path().to_str().unwrap();

        let mut out: Vec<u8> = Vec::new();
        let status = serve_static(&mut out, root, "/sub", &cache()).await.unwrap();
        assert_eq!(status, 404);
    }

    #[tokio::test]
    async fn second_request_is_served_from_cache() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data.json");
        std::fs::write(&file, "{\"a\":1}").unwrap();
        let root = dir.path().to_str().unwrap();
        let cache = cache();

        let mut first: Vec<u8> = Vec::new();
        serve_static(&mut first, root, "/data.json", &cache)
            .await
            .unwrap();

        // Rewrite the file on disk: a cached second read must not see it.
        std::fs::write(&file, "{\"a\":2}").unwrap();

        let mut second: Vec<u8> = Vec::new();
        serve_static(&mut second, root, "/data.json", &cache)
            .await
            .unwrap();

        assert_eq!(first, second);
        let text = String::from_utf8(second).unwrap();
        assert!(text.ends_with("{\"a\":1}"));
    }
}
