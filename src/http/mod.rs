//! actix-web listener serving `/announce` and `/scrape`.
//!
//! Every response body is a bencoded dictionary sent as `text/plain`. Request
//! failures carry `failure code` and `failure reason` and a 4xx/5xx status.

pub mod structs;

#[allow(clippy::module_inception)]
pub mod http;
