use std::fs;
use std::path::PathBuf;

use webframe::http::static_files::{build_file_response, resolve};

/// Creates a fresh scratch directory for one test.
fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("webframe-static-{}-{}", tag, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[tokio::test]
async fn test_root_path_maps_to_index_html() {
    let root = scratch_dir("index");
    fs::write(root.join("index.html"), "<!DOCTYPE html><h1>home</h1>").unwrap();

    let (content, content_type) = resolve(&root, "/").await.unwrap();

    assert_eq!(content, b"<!DOCTYPE html><h1>home</h1>");
    assert_eq!(content_type, "text/html");
}

#[tokio::test]
async fn test_resolve_file_with_content_type() {
    let root = scratch_dir("css");
    fs::write(root.join("style.css"), "body {}").unwrap();

    let (content, content_type) = resolve(&root, "/style.css").await.unwrap();

    assert_eq!(content, b"body {}");
    assert_eq!(content_type, "text/css");
}

#[tokio::test]
async fn test_unknown_extension_falls_back_to_octet_stream() {
    let root = scratch_dir("bin");
    fs::write(root.join("data.bin"), [0u8, 1, 2, 3]).unwrap();

    let (content, content_type) = resolve(&root, "/data.bin").await.unwrap();

    assert_eq!(content, vec![0, 1, 2, 3]);
    assert_eq!(content_type, "application/octet-stream");
}

#[tokio::test]
async fn test_missing_file_is_none() {
    let root = scratch_dir("missing");

    assert!(resolve(&root, "/nope.html").await.is_none());
}

#[tokio::test]
async fn test_directory_target_is_none() {
    let root = scratch_dir("dir");
    fs::create_dir_all(root.join("subdir")).unwrap();

    assert!(resolve(&root, "/subdir").await.is_none());
}

#[tokio::test]
async fn test_traversal_out_of_root_is_rejected() {
    let base = scratch_dir("traversal");
    let root = base.join("webroot");
    fs::create_dir_all(&root).unwrap();
    fs::write(base.join("secret.txt"), "top secret").unwrap();

    // The file exists on disk but sits outside the static root
    assert!(resolve(&root, "/../secret.txt").await.is_none());
}

#[test]
fn test_file_response_wire_format() {
    let bytes = build_file_response(b"<h1>home</h1>", "text/html");
    let text = String::from_utf8(bytes).unwrap();

    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.contains("Content-Type: text/html\r\n"));
    assert!(text.contains("Content-Length: 13\r\n"));
    assert!(text.contains("Connection: close\r\n"));
    assert!(text.ends_with("\r\n\r\n<h1>home</h1>"));
}

#[test]
fn test_file_response_keeps_binary_body() {
    let content = [0u8, 159, 146, 150]; // not valid UTF-8
    let bytes = build_file_response(&content, "application/octet-stream");

    assert!(bytes.ends_with(&content));
}
