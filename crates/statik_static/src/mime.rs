//! Fixed file-extension -> MIME type table.

const MIME_TABLE: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".htm", "text/html"),
    (".css", "text/css"),
    (".js", "application/javascript"),
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".gif", "image/gif"),
    (".svg", "image/svg+xml"),
    (".json", "application/json"),
    (".ico", "image/x-icon"),
];

pub const MIME_FALLBACK: &str = "application/octet-stream";

/// MIME type for a resolved file path, by case-sensitive suffix match.
pub fn mime_for_path(path: &str) -> &'static str {
    MIME_TABLE
        .iter()
        .find(|(suffix, _)| path.ends_with(suffix))
        .map(|(_, mime)| *mime)
        .unwrap_or(MIME_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::{MIME_FALLBACK, mime_for_path};

    #[test]
    fn known_extensions_map() {
        assert_eq!(mime_for_path("www/index.html"), "text/html");
        assert_eq!(mime_for_path("www/old.htm"), "text/html");
        assert_eq!(mime_for_path("www/site.css"), "text/css");
        assert_eq!(mime_for_path("www/app.js"), "application/javascript");
        assert_eq!(mime_for_path("www/logo.png"), "image/png");
        assert_eq!(mime_for_path("www/photo.jpg"), "image/jpeg");
        assert_eq!(mime_for_path("www/photo.jpeg"), "image/jpeg");
        assert_eq!(mime_for_path("www/anim.gif"), "image/gif");
        assert_eq!(mime_for_path("www/icon.svg"), "image/svg+xml");
        assert_eq!(mime_for_path("www/data.json"), "application/json");
        assert_eq!(mime_for_path("www/favicon.ico"), "image/x-icon");
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(mime_for_path("www/archive.tar"), MIME_FALLBACK);
        assert_eq!(mime_for_path("www/noext"), MIME_FALLBACK);
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        assert_eq!(mime_for_path("www/INDEX.HTML"), MIME_FALLBACK);
        assert_eq!(mime_for_path("www/photo.JPG"), MIME_FALLBACK);
    }
}
