// src/http/mod.rs
//
// Transport boundary: every answered request becomes an HttpResponse,
// only a missing answer is an error

pub mod client;
pub mod models;

pub use client::{HttpGetClient, HttpPostClient, ReqwestHttpClient};
pub use models::{status, HttpRequest, HttpResponse, TransportError};
