mod http;

pub use http::HttpTransport;

use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::Url;

/// Raw outcome of a single GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Performs a single HTTP GET.
///
/// The fetch is the only point where a catalog call suspends.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<TransportResponse, TransportError>;
}
