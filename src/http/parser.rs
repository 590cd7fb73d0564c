use crate::http::request::{Method, Request};

/// Upper bound on a declared request body. Anything larger is rejected
/// instead of buffered.
pub const MAX_BODY_SIZE: usize = 1024 * 1024;

#[derive(Debug)]
pub enum ParseError {
    /// More bytes are needed before the request can be parsed.
    Incomplete,
    /// The request line was empty; the connection is dropped silently.
    Empty,
    InvalidRequestLine,
    InvalidMethod,
    InvalidContentLength,
    /// The body was not valid UTF-8.
    InvalidBody,
    BodyTooLarge,
}

/// Parses one HTTP request from the front of `buf`.
///
/// Returns the request and the number of bytes consumed. Only the
/// `Content-Length` header is interpreted; every other header is read and
/// discarded, and header lines without a colon are skipped. A body is read
/// only for POST with a positive `Content-Length`; GET never carries one.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // Look for header/body separator
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let head = std::str::from_utf8(&buf[..headers_end]).map_err(|_| ParseError::InvalidRequestLine)?;

    let mut lines = head.split("\r\n");

    // Request line
    let request_line = lines.next().unwrap_or("");
    let mut parts = request_line.split_whitespace();

    let method_token = parts.next().ok_or(ParseError::Empty)?;
    let target = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let method = Method::from_str(method_token).ok_or(ParseError::InvalidMethod)?;

    // Headers: only Content-Length matters
    let mut content_length = 0usize;
    for line in lines {
        if line.is_empty() {
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            if key.trim() == "Content-Length" {
                content_length = value
                    .trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidContentLength)?;
            }
        }
    }

    // Body: POST only, and only when a positive length was declared
    let body_start = headers_end + 4;
    let (body, consumed) = if method == Method::POST && content_length > 0 {
        if content_length > MAX_BODY_SIZE {
            return Err(ParseError::BodyTooLarge);
        }

        let body_bytes = &buf[body_start..];
        if body_bytes.len() < content_length {
            return Err(ParseError::Incomplete);
        }

        let body = std::str::from_utf8(&body_bytes[..content_length])
            .map_err(|_| ParseError::InvalidBody)?
            .to_string();
        (body, body_start + content_length)
    } else {
        (String::new(), body_start)
    };

    Ok((Request::new(method, target, body), consumed))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
