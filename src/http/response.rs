use std::collections::HashMap;

/// A mutable HTTP response accumulating status, headers, and body.
///
/// Starts as 200 OK with `Content-Type: text/plain; charset=UTF-8` and
/// `Connection: close` pre-seeded. Handlers mutate it through the setters
/// before the connection handler serializes it; a response is never reused.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code
    pub status_code: u16,
    /// The reason phrase sent alongside the status code
    pub status_message: String,
    /// Response headers as key-value pairs, order not significant
    pub headers: HashMap<String, String>,
    /// Response body
    pub body: String,
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

impl Response {
    pub fn new() -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            "text/plain; charset=UTF-8".to_string(),
        );
        headers.insert("Connection".to_string(), "close".to_string());

        Self {
            status_code: 200,
            status_message: "OK".to_string(),
            headers,
            body: String::new(),
        }
    }

    /// Overwrites the status code and reason phrase together.
    pub fn set_status(&mut self, code: u16, message: impl Into<String>) {
        self.status_code = code;
        self.status_message = message.into();
    }

    /// Replaces the body and recomputes `Content-Length` from its UTF-8 byte
    /// length (not the character count).
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
        self.headers
            .insert("Content-Length".to_string(), self.body.len().to_string());
    }

    /// Inserts or overwrites a header. Values go to the wire verbatim; a
    /// value containing CRLF would corrupt the response.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key.into(), value.into());
    }

    /// The canned 404 sent for routing and filesystem misses alike.
    pub fn not_found() -> Self {
        let mut res = Response::new();
        res.set_status(404, "Not Found");
        res.set_header("Content-Type", "text/html");
        res.set_body("<h1>404 Not Found</h1>");
        res
    }
}
