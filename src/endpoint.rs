use crate::error::FetchError;
use reqwest::Url;

/// Catalog operations and the endpoints serving them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// List recipe summaries in a category
    ListByCategory,
    /// Look up full details for a recipe id
    LookupById,
}

impl Endpoint {
    fn path(&self) -> &'static str {
        match self {
            Endpoint::ListByCategory => "filter.php",
            Endpoint::LookupById => "lookup.php",
        }
    }

    fn query_key(&self) -> &'static str {
        match self {
            Endpoint::ListByCategory => "c",
            Endpoint::LookupById => "i",
        }
    }
}

/// Build the absolute URL for `endpoint`, embedding `value` as its query parameter.
///
/// The value is percent-encoded but otherwise passed through; an empty id is a
/// valid URL that simply finds nothing.
pub fn build_url(base_url: &str, endpoint: Endpoint, value: &str) -> Result<Url, FetchError> {
    let raw = format!("{}/{}", base_url.trim_end_matches('/'), endpoint.path());
    let mut url = Url::parse(&raw)
        .map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))?;

    if url.cannot_be_a_base() {
        return Err(FetchError::InvalidUrl(format!("{raw}: not a hierarchical URL")));
    }

    url.query_pairs_mut()
        .clear()
        .append_pair(endpoint.query_key(), value);

    Ok(url)
}
