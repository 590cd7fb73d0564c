use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::http::request::Request;
use crate::http::response::Response;

/// Prefix prepended to every registered route path.
pub const ROUTE_PREFIX: &str = "/app";

/// Application-supplied logic behind a route.
///
/// A service returns the response body; the framework installs it with
/// `set_body`, so `Content-Length` stays consistent. Status and headers can
/// be adjusted through `res` before returning.
pub trait Service: Send + Sync {
    fn execute(&self, req: &Request, res: &mut Response) -> String;
}

impl<F> Service for F
where
    F: Fn(&Request, &mut Response) -> String + Send + Sync,
{
    fn execute(&self, req: &Request, res: &mut Response) -> String {
        self(req, res)
    }
}

/// Route table and static file root for one server instance.
///
/// Populated during startup and read-only while serving. Each server owns
/// its router, so tests can build isolated instances side by side.
#[derive(Default)]
pub struct Router {
    get_routes: HashMap<String, Box<dyn Service>>,
    post_routes: HashMap<String, Box<dyn Service>>,
    static_root: Option<PathBuf>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a GET route under the `/app` prefix. Re-registering the
    /// same path silently replaces the previous handler.
    pub fn get(&mut self, path: &str, service: impl Service + 'static) {
        self.get_routes
            .insert(format!("{ROUTE_PREFIX}{path}"), Box::new(service));
    }

    /// Registers a POST route under the `/app` prefix, same overwrite
    /// semantics as `get`.
    pub fn post(&mut self, path: &str, service: impl Service + 'static) {
        self.post_routes
            .insert(format!("{ROUTE_PREFIX}{path}"), Box::new(service));
    }

    /// Sets the directory static files are served from.
    pub fn static_files(&mut self, dir: impl Into<PathBuf>) {
        self.static_root = Some(dir.into());
    }

    /// Exact-match lookup on the full request path; no pattern matching, no
    /// trailing-slash normalization.
    pub fn lookup_get(&self, path: &str) -> Option<&dyn Service> {
        self.get_routes.get(path).map(Box::as_ref)
    }

    pub fn lookup_post(&self, path: &str) -> Option<&dyn Service> {
        self.post_routes.get(path).map(Box::as_ref)
    }

    pub fn static_root(&self) -> Option<&Path> {
        self.static_root.as_deref()
    }
}
