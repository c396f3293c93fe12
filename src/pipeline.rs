use crate::decoders::{Decoder, DetailDecoder, SummaryDecoder};
use crate::endpoint::{build_url, Endpoint};
use crate::error::FetchError;
use crate::model::{RecipeDetail, RecipeSummary};
use crate::response::is_acceptable_status;
use crate::transport::Transport;
use log::{debug, warn};

/// Fetches and decodes catalog data.
///
/// Each call runs URL building, the request, status validation and decoding in
/// that order and stops at the first failure. Calls share no mutable state, so
/// one service can serve many concurrent calls.
pub struct RecipeService {
    transport: Box<dyn Transport>,
    base_url: String,
    default_category: String,
}

impl RecipeService {
    pub fn new(
        transport: Box<dyn Transport>,
        base_url: impl Into<String>,
        default_category: impl Into<String>,
    ) -> Self {
        RecipeService {
            transport,
            base_url: base_url.into(),
            default_category: default_category.into(),
        }
    }

    /// Create a builder for a service
    pub fn builder() -> crate::builder::RecipeServiceBuilder {
        crate::builder::RecipeServiceBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    /// List the recipes in `category`
    pub async fn fetch_summaries(&self, category: &str) -> Result<Vec<RecipeSummary>, FetchError> {
        self.fetch_value(Endpoint::ListByCategory, category, &SummaryDecoder)
            .await
    }

    /// List the recipes in the configured default category
    pub async fn fetch_desserts(&self) -> Result<Vec<RecipeSummary>, FetchError> {
        self.fetch_summaries(&self.default_category).await
    }

    /// Look up the full details of one recipe
    pub async fn fetch_detail(&self, id: &str) -> Result<RecipeDetail, FetchError> {
        self.fetch_value(Endpoint::LookupById, id, &DetailDecoder)
            .await
    }

    async fn fetch_value<D>(
        &self,
        endpoint: Endpoint,
        value: &str,
        decoder: &D,
    ) -> Result<D::Output, FetchError>
    where
        D: Decoder + Sync,
    {
        let url = build_url(&self.base_url, endpoint, value).map_err(|e| {
            warn!("{:?} request for {:?} not sent: {}", endpoint, value, e);
            e
        })?;

        let response = self.transport.fetch(&url).await.map_err(|e| {
            warn!("request to {} failed: {}", url, e);
            FetchError::from(e)
        })?;

        if !is_acceptable_status(response.status) {
            warn!("{} answered with status {}", url, response.status);
            return Err(FetchError::InvalidResponse(format!(
                "unexpected status {}",
                response.status
            )));
        }

        let decoded = decoder.decode(&response.body).map_err(|e| {
            warn!("response from {} rejected: {}", url, e);
            e
        })?;
        debug!("{} decoded", url);

        Ok(decoded)
    }
}
