//! Request-path -> filesystem-path resolution.

/// Resolve a request path to a location under the content root.
///
/// A small fixed table special-cases the site pages; every other path is
/// appended to the root verbatim. No normalization or traversal checks are
/// applied: the raw path, dots and all, lands in the resolved string. See
/// DESIGN.md before tightening this.
pub fn resolve_path(root: &str, req_path: &str) -> String {
    match req_path {
        "/" => format!("{root}/index.html"),
        "/about" => format!("{root}/about.html"),
        "/contact" => format!("{root}/contact.html"),
        _ => format!("{root}{req_path}"),
    }
}
