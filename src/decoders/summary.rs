use crate::decoders::{parse_envelope, Decoder};
use crate::error::FetchError;
use crate::model::RecipeSummary;
use log::debug;
use serde::Deserialize;

/// Decodes a category listing into summaries, in source order
pub struct SummaryDecoder;

#[derive(Debug, Deserialize)]
struct SummaryRecord {
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb")]
    thumbnail: String,
    #[serde(rename = "idMeal")]
    id: String,
}

impl From<SummaryRecord> for RecipeSummary {
    fn from(record: SummaryRecord) -> Self {
        RecipeSummary {
            name: record.name,
            thumbnail_url: record.thumbnail,
            id: record.id,
        }
    }
}

impl Decoder for SummaryDecoder {
    type Output = Vec<RecipeSummary>;

    fn decode(&self, bytes: &[u8]) -> Result<Vec<RecipeSummary>, FetchError> {
        let records: Vec<SummaryRecord> = parse_envelope(bytes)?;
        debug!("decoded {} recipe summaries", records.len());
        Ok(records.into_iter().map(RecipeSummary::from).collect())
    }
}
