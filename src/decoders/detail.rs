use crate::decoders::{parse_envelope, Decoder};
use crate::error::FetchError;
use crate::model::{Ingredient, RecipeDetail};
use log::{debug, warn};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Substituted when a recipe carries no usable `strArea`
pub const AREA_PLACEHOLDER: &str = "Unknown";

const ID_KEY: &str = "idMeal";
const NAME_KEY: &str = "strMeal";
const AREA_KEY: &str = "strArea";
const INSTRUCTIONS_KEY: &str = "strInstructions";
const YOUTUBE_KEY: &str = "strYoutube";

const INGREDIENT_PREFIX: &str = "strIngredient";
const MEASURE_PREFIX: &str = "strMeasure";

/// Decodes a lookup response into a single recipe.
///
/// Only the first record of the envelope is used; the lookup endpoint never
/// returns more than one.
pub struct DetailDecoder;

impl Decoder for DetailDecoder {
    type Output = RecipeDetail;

    fn decode(&self, bytes: &[u8]) -> Result<RecipeDetail, FetchError> {
        let records: Vec<Map<String, Value>> = parse_envelope(bytes)?;
        let record = records.into_iter().next().ok_or(FetchError::NotFound)?;

        let area = match record.get(AREA_KEY).and_then(Value::as_str) {
            Some(area) => area.to_string(),
            None => {
                warn!("recipe has no `{}`, using placeholder", AREA_KEY);
                AREA_PLACEHOLDER.to_string()
            }
        };

        Ok(RecipeDetail {
            id: required_str(&record, ID_KEY)?,
            name: required_str(&record, NAME_KEY)?,
            area,
            instructions: required_str(&record, INSTRUCTIONS_KEY)?,
            youtube_url: required_str(&record, YOUTUBE_KEY)?,
            ingredients: collect_ingredients(&record),
        })
    }
}

fn required_str(record: &Map<String, Value>, key: &str) -> Result<String, FetchError> {
    match record.get(key) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(FetchError::DecodeFailed(format!(
            "field `{key}` is not a string: {other}"
        ))),
        None => Err(FetchError::DecodeFailed(format!("missing field `{key}`"))),
    }
}

/// Which half of an ingredient pair a sparse field supplies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Half {
    Name,
    Measurement,
}

/// Split `strIngredient12` / `strMeasure12` into its half and slot numeral.
/// The numeral is kept as text, so "1" and "01" are different slots.
fn parse_slot(key: &str) -> Option<(Half, &str)> {
    let (half, numeral) = if let Some(rest) = key.strip_prefix(INGREDIENT_PREFIX) {
        (Half::Name, rest)
    } else if let Some(rest) = key.strip_prefix(MEASURE_PREFIX) {
        (Half::Measurement, rest)
    } else {
        return None;
    };

    if numeral.is_empty() || !numeral.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some((half, numeral))
}

#[derive(Debug, Default)]
struct IngredientDraft {
    name: Option<String>,
    measurement: Option<String>,
}

impl IngredientDraft {
    /// Both halves must be present and non-blank, otherwise the draft is dropped
    fn promote(self) -> Option<Ingredient> {
        let name = non_blank(self.name?)?;
        let measurement = non_blank(self.measurement?)?;
        Some(Ingredient::new(name, measurement))
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn collect_ingredients(record: &Map<String, Value>) -> Vec<Ingredient> {
    let mut drafts: BTreeMap<&str, IngredientDraft> = BTreeMap::new();

    for (key, value) in record {
        let Some((half, numeral)) = parse_slot(key) else {
            continue;
        };

        let draft = drafts.entry(numeral).or_default();
        // null or non-string values leave that half empty
        let text = value.as_str().map(str::to_string);
        match half {
            Half::Name => draft.name = text,
            Half::Measurement => draft.measurement = text,
        }
    }

    let seen = drafts.len();
    let ingredients: Vec<Ingredient> = drafts
        .into_values()
        .filter_map(IngredientDraft::promote)
        .collect();
    debug!("{} ingredient slots, {} complete", seen, ingredients.len());

    ingredients
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(record: Value) -> Vec<u8> {
        serde_json::to_vec(&json!({ "meals": [record] })).unwrap()
    }

    fn base_record() -> Value {
        json!({
            "idMeal": "52893",
            "strMeal": "Apple & Blackberry Crumble",
            "strArea": "British",
            "strInstructions": "Heat oven to 190C.",
            "strYoutube": "https://www.youtube.com/watch?v=4vhcOwVBDO4"
        })
    }

    fn with_fields(fields: &[(&str, Value)]) -> Vec<u8> {
        let mut record = base_record();
        for (key, value) in fields {
            record[*key] = value.clone();
        }
        envelope(record)
    }

    #[test]
    fn test_parse_slot() {
        assert_eq!(parse_slot("strIngredient1"), Some((Half::Name, "1")));
        assert_eq!(parse_slot("strMeasure20"), Some((Half::Measurement, "20")));
        assert_eq!(parse_slot("strIngredient01"), Some((Half::Name, "01")));
        assert_eq!(parse_slot("strIngredient"), None);
        assert_eq!(parse_slot("strIngredientA"), None);
        assert_eq!(parse_slot("strMeasure1a"), None);
        assert_eq!(parse_slot("strMeal"), None);
        assert_eq!(parse_slot("xstrIngredient1"), None);
    }

    #[test]
    fn test_scalar_fields() {
        let detail = DetailDecoder.decode(&envelope(base_record())).unwrap();
        assert_eq!(detail.id, "52893");
        assert_eq!(detail.name, "Apple & Blackberry Crumble");
        assert_eq!(detail.area, "British");
        assert_eq!(detail.instructions, "Heat oven to 190C.");
        assert_eq!(detail.youtube_url, "https://www.youtube.com/watch?v=4vhcOwVBDO4");
        assert!(detail.ingredients.is_empty());
    }

    #[test]
    fn test_incomplete_pair_dropped() {
        let body = with_fields(&[
            ("strIngredient1", json!("Flour")),
            ("strMeasure1", json!("2 cups")),
            ("strIngredient2", json!("Sugar")),
        ]);

        let detail = DetailDecoder.decode(&body).unwrap();
        assert_eq!(detail.ingredients, vec![Ingredient::new("Flour", "2 cups")]);
    }

    #[test]
    fn test_blank_name_dropped() {
        let body = with_fields(&[
            ("strIngredient3", json!("")),
            ("strMeasure3", json!("1 tsp")),
            ("strIngredient4", json!("Salt")),
            ("strMeasure4", json!("   ")),
        ]);

        let detail = DetailDecoder.decode(&body).unwrap();
        assert!(detail.ingredients.is_empty());
    }

    #[test]
    fn test_null_values_tolerated() {
        let body = with_fields(&[
            ("strIngredient1", json!("Butter")),
            ("strMeasure1", json!("50g")),
            ("strIngredient2", Value::Null),
            ("strMeasure2", Value::Null),
            ("strIngredient3", json!(7)),
            ("strMeasure3", json!("1 cup")),
        ]);

        let detail = DetailDecoder.decode(&body).unwrap();
        assert_eq!(detail.ingredients, vec![Ingredient::new("Butter", "50g")]);
    }

    #[test]
    fn test_values_are_trimmed() {
        let body = with_fields(&[
            ("strIngredient1", json!("  Plain Flour ")),
            ("strMeasure1", json!("\t120g\n")),
        ]);

        let detail = DetailDecoder.decode(&body).unwrap();
        assert_eq!(detail.ingredients[0].name, "Plain Flour");
        assert_eq!(detail.ingredients[0].measurement, "120g");
    }

    #[test]
    fn test_numerals_are_opaque() {
        let body = with_fields(&[
            ("strIngredient1", json!("Eggs")),
            ("strMeasure01", json!("2")),
        ]);

        let detail = DetailDecoder.decode(&body).unwrap();
        assert!(detail.ingredients.is_empty());
    }

    #[test]
    fn test_no_maximum_slot() {
        let body = with_fields(&[
            ("strIngredient250", json!("Vanilla")),
            ("strMeasure250", json!("1 tsp")),
            ("strIngredient7", json!("Milk")),
            ("strMeasure7", json!("200ml")),
        ]);

        let detail = DetailDecoder.decode(&body).unwrap();
        let mut names: Vec<&str> = detail.ingredients.iter().map(|i| i.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["Milk", "Vanilla"]);
    }

    #[test]
    fn test_missing_area_uses_placeholder() {
        let mut record = base_record();
        record.as_object_mut().unwrap().remove("strArea");

        let detail = DetailDecoder.decode(&envelope(record)).unwrap();
        assert_eq!(detail.area, AREA_PLACEHOLDER);

        let detail = DetailDecoder
            .decode(&with_fields(&[("strArea", Value::Null)]))
            .unwrap();
        assert_eq!(detail.area, AREA_PLACEHOLDER);
    }

    #[test]
    fn test_missing_required_field() {
        for key in ["idMeal", "strMeal", "strInstructions", "strYoutube"] {
            let mut record = base_record();
            record.as_object_mut().unwrap().remove(key);

            let err = DetailDecoder.decode(&envelope(record)).unwrap_err();
            assert!(
                matches!(&err, FetchError::DecodeFailed(msg) if msg.contains(key)),
                "{key}: {err:?}"
            );
        }
    }

    #[test]
    fn test_empty_or_null_list_is_not_found() {
        assert_eq!(DetailDecoder.decode(br#"{"meals": []}"#).unwrap_err(), FetchError::NotFound);
        assert_eq!(DetailDecoder.decode(br#"{"meals": null}"#).unwrap_err(), FetchError::NotFound);
    }

    #[test]
    fn test_unparseable_envelope() {
        let err = DetailDecoder.decode(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::DecodeFailed(_)));

        let err = DetailDecoder.decode(br#"{"meals": ["not an object"]}"#).unwrap_err();
        assert!(matches!(err, FetchError::DecodeFailed(_)));
    }

    #[test]
    fn test_first_record_wins() {
        let mut second = base_record();
        second["idMeal"] = json!("99999");
        let body = serde_json::to_vec(&json!({ "meals": [base_record(), second] })).unwrap();

        let detail = DetailDecoder.decode(&body).unwrap();
        assert_eq!(detail.id, "52893");
    }

    #[test]
    fn test_decoding_twice_is_equal() {
        let body = with_fields(&[
            ("strIngredient1", json!("Flour")),
            ("strMeasure1", json!("2 cups")),
            ("strIngredient2", json!("Sugar")),
            ("strMeasure2", json!("1 cup")),
            ("strIngredient10", json!("Salt")),
            ("strMeasure10", json!("pinch")),
        ]);

        let first = DetailDecoder.decode(&body).unwrap();
        let second = DetailDecoder.decode(&body).unwrap();
        assert_eq!(first, second);
        assert_ne!(first.ingredients[0].id, second.ingredients[0].id);
    }
}
