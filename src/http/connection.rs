use std::sync::Arc;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::http::static_files;
use crate::http::writer::{ResponseWriter, serialize_response};
use crate::server::router::{Router, Service};

/// How long a client may take to deliver a complete request before the
/// connection is dropped.
const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// What reading from the socket produced.
enum Inbound {
    Request(Request),
    /// The request line carried a method outside the known set; answered
    /// with the fixed 404, like any other unroutable request.
    UnknownMethod,
    /// Dead or empty connection; dropped without a response.
    Closed,
}

/// Handles one client connection: reads a single request, dispatches it, and
/// writes a single response before the socket closes.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    router: Arc<Router>,
}

impl Connection {
    pub fn new(stream: TcpStream, router: Arc<Router>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            router,
        }
    }

    /// Serves exactly one request. A dead or empty connection returns `Ok`
    /// without writing anything; parse and I/O failures propagate to the
    /// listener, which logs them and moves on.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let inbound = match timeout(READ_TIMEOUT, self.read_request()).await {
            Ok(result) => result?,
            Err(_) => anyhow::bail!("timed out waiting for a complete request"),
        };

        let response_bytes = match inbound {
            Inbound::Request(req) => self.dispatch(&req).await,
            Inbound::UnknownMethod => serialize_response(&Response::not_found()),
            Inbound::Closed => return Ok(()),
        };

        let mut writer = ResponseWriter::new(response_bytes);
        writer.write_to_stream(&mut self.stream).await?;

        Ok(())
    }

    /// Reads until the buffer holds one complete request.
    ///
    /// A client that closed without sending anything or sent an empty
    /// request line counts as a dead connection, not an error.
    async fn read_request(&mut self) -> anyhow::Result<Inbound> {
        loop {
            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    let _ = self.buffer.split_to(consumed);
                    return Ok(Inbound::Request(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(ParseError::Empty) => {
                    return Ok(Inbound::Closed);
                }

                Err(ParseError::InvalidMethod) => {
                    return Ok(Inbound::UnknownMethod);
                }

                Err(e) => {
                    return Err(anyhow::anyhow!("HTTP parse error: {:?}", e));
                }
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(Inbound::Closed);
                }
                anyhow::bail!("connection closed mid-request");
            }
        }
    }

    /// Routes the request and produces the full wire bytes of the response.
    ///
    /// GET falls back to the static resolver on a route miss; POST and every
    /// other method answer a route miss with the fixed 404.
    async fn dispatch(&self, req: &Request) -> Vec<u8> {
        match req.method {
            Method::GET => match self.router.lookup_get(&req.path) {
                Some(service) => invoke(service, req),
                None => self.serve_static(&req.path).await,
            },

            Method::POST => match self.router.lookup_post(&req.path) {
                Some(service) => invoke(service, req),
                None => serialize_response(&Response::not_found()),
            },

            _ => serialize_response(&Response::not_found()),
        }
    }

    async fn serve_static(&self, path: &str) -> Vec<u8> {
        let resolved = match self.router.static_root() {
            Some(root) => static_files::resolve(root, path).await,
            None => None,
        };

        match resolved {
            Some((content, content_type)) => {
                static_files::build_file_response(&content, content_type)
            }
            None => serialize_response(&Response::not_found()),
        }
    }
}

/// Runs a service with a fresh request/response pair. The returned body goes
/// through `set_body` so `Content-Length` is always consistent.
fn invoke(service: &dyn Service, req: &Request) -> Vec<u8> {
    let mut res = Response::new();
    let body = service.execute(req, &mut res);
    res.set_body(body);
    serialize_response(&res)
}
