use std::collections::HashMap;

/// HTTP request methods.
///
/// The framework dispatches GET and POST; the remaining methods are parsed
/// but always answered with 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
}

impl Method {
    /// Parses an HTTP method from a request-line token, ignoring case.
    ///
    /// # Example
    ///
    /// ```
    /// # use webframe::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), Some(Method::GET));
    /// assert_eq!(Method::from_str("BREW"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }
}

/// A parsed HTTP request, immutable once constructed.
///
/// Handlers receive a shared reference; the connection handler owns the
/// request for the lifetime of one exchange.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// Request path without the query string (e.g., "/app/hello")
    pub path: String,
    /// Raw query string, if the target contained one
    pub query: Option<String>,
    /// Query parameters; duplicate keys keep the last value
    pub params: HashMap<String, String>,
    /// Request body; empty for GET requests
    pub body: String,
}

impl Request {
    /// Constructs a request from the method, the raw request target, and the
    /// body. The target splits on the first `?` into path and query, and the
    /// query parameters are parsed once here.
    pub fn new(method: Method, target: &str, body: String) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path.to_string(), Some(query.to_string())),
            None => (target.to_string(), None),
        };
        let params = parse_query_params(query.as_deref());

        Self {
            method,
            path,
            query,
            params,
            body,
        }
    }

    /// Returns the value of a query parameter, or `None` when absent.
    pub fn get_value(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Splits the query string on `&`, then each pair on `=`. A pair is kept only
/// when the split yields exactly a key and a value; anything else is dropped.
/// Values are stored as they appear on the wire, no percent-decoding.
fn parse_query_params(query: Option<&str>) -> HashMap<String, String> {
    let mut params = HashMap::new();

    let Some(query) = query else {
        return params;
    };

    for pair in query.split('&') {
        let tokens: Vec<&str> = pair.split('=').collect();
        if tokens.len() == 2 {
            params.insert(tokens[0].to_string(), tokens[1].to_string());
        }
    }

    params
}
