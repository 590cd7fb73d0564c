//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 subset the framework speaks: one
//! request per connection, `Connection: close` on every response.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection handler driving read → dispatch → write
//! - **`parser`**: Parses incoming HTTP requests from byte buffers
//! - **`request`**: Parsed request representation and query parameter access
//! - **`response`**: Mutable HTTP response with status, headers, and body
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//! - **`static_files`**: Maps URL paths to files under the static root
//!
//! # Connection lifecycle
//!
//! Each client connection goes through a fixed sequence:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Buffer bytes until a full request is available
//!        └──────┬──────┘
//!               │ Request parsed
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Route table hit, static file, or 404
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Closed (no keep-alive)
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod static_files;
pub mod writer;
