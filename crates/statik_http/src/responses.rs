use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Generic helper to send an HTTP response with a binary body.
///
/// The wire format is deliberately bare: status line, Content-Type,
/// Content-Length, blank line, body. No Connection, Date or caching
/// headers are emitted.
pub async fn send_response<S>(
    stream: &mut S,
    status: &str,
    content_type: &str,
    body: &[u8],
) -> anyhow::Result<()>
where
    S: AsyncWrite + Unpin + ?Sized,
{
    let head = format!(
        "HTTP/1.1 {status}\r\n\
         Content-Type: {content_type}\r\n\
         Content-Length: {}\r\n\
         \r\n",
        body.len()
    );

    stream.write_all(head.as_bytes()).await?;
    stream.write_all(body).await?;
    stream.flush().await?;
    Ok(())
}

pub async fn send_404<S>(stream: &mut S) -> anyhow::Result<()>
where
    S: AsyncWrite + Unpin + ?Sized,
{
    send_response(stream, "404 Not Found", "text/html", b"<h1>404 Not Found</h1>").await
}

pub async fn send_405<S>(stream: &mut S) -> anyhow::Result<()>
where
    S: AsyncWrite + Unpin + ?Sized,
{
    send_response(
        stream,
        "405 Method Not Allowed",
        "text/plain",
        b"Only GET is supported\n",
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::{send_404, send_405, send_response};

    #[tokio::test]
    async fn response_head_carries_exact_content_length() {
        let mut out: Vec<u8> = Vec::new();
        send_response(&mut out, "200 OK", "text/html", b"<h1>Hi</h1>")
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Type: text/html\r\n"));
        assert!(text.contains("Content-Length: 11\r\n"));
        assert!(text.ends_with("\r\n\r\n<h1>Hi</h1>"));
    }

    #[tokio::test]
    async fn not_found_body_is_html() {
        let mut out: Vec<u8> = Vec::new();
        send_404(&mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(text.contains("Content-Type: text/html\r\n"));
        assert!(text.contains("<h1>404 Not Found</h1>"));
    }

    #[tokio::test]
    async fn method_not_allowed_body_is_plain_text() {
        let mut out: Vec<u8> = Vec::new();
        send_405(&mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("HTTP/1.1 405 Method Not Allowed\r\n"));
        assert!(text.contains("Content-Type: text/plain\r\n"));
        assert!(!text.ends_with("\r\n\r\n"), "405 must carry a body");
    }
}
