//! Webframe - Minimal HTTP/1.1 Web Framework
//!
//! Core library for request parsing, routing, and static file serving.

pub mod config;
pub mod http;
pub mod server;
