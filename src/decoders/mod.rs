use crate::error::FetchError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

mod detail;
mod summary;

pub use self::detail::{DetailDecoder, AREA_PLACEHOLDER};
pub use self::summary::SummaryDecoder;

/// Turns a raw response body into a domain value
pub trait Decoder {
    type Output;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Output, FetchError>;
}

/// Outer wrapper shared by every catalog payload. The list is `null` when nothing matched.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    meals: Option<Vec<T>>,
}

fn parse_envelope<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, FetchError> {
    let envelope: Envelope<T> =
        serde_json::from_slice(bytes).map_err(|e| FetchError::DecodeFailed(e.to_string()))?;
    Ok(envelope.meals.unwrap_or_default())
}
