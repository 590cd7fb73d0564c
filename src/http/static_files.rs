//! Static file serving.
//!
//! Maps URL paths to files under the configured static root and builds the
//! full wire response for them.

use std::path::Path;

use tokio::fs;

use crate::http::mime;

/// Resolves a URL path against the static root and loads the file.
///
/// `/` maps to `/index.html`. Returns `None` for missing files, directory
/// targets, and paths that resolve outside the root; all of them surface to
/// the client as the same 404.
pub async fn resolve(root: &Path, url_path: &str) -> Option<(Vec<u8>, &'static str)> {
    let url_path = if url_path == "/" { "/index.html" } else { url_path };
    let file_path = root.join(url_path.trim_start_matches('/'));

    // Containment check: the canonical target must stay under the root.
    let root_canonical = fs::canonicalize(root).await.ok()?;
    let file_canonical = fs::canonicalize(&file_path).await.ok()?;
    if !file_canonical.starts_with(&root_canonical) {
        tracing::warn!("Rejected path escaping static root: {}", url_path);
        return None;
    }

    let metadata = fs::metadata(&file_canonical).await.ok()?;
    if metadata.is_dir() {
        return None;
    }

    let content = fs::read(&file_canonical).await.ok()?;
    let content_type =
        mime::get_content_type(file_canonical.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// Builds the complete 200 response for a static file, headers included. The
/// body stays raw bytes; files are not assumed to be UTF-8.
pub fn build_file_response(content: &[u8], content_type: &str) -> Vec<u8> {
    let header = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        content_type,
        content.len()
    );

    let mut buf = Vec::with_capacity(header.len() + content.len());
    buf.extend_from_slice(header.as_bytes());
    buf.extend_from_slice(content);
    buf
}
