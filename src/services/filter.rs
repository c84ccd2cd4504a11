use serde::de::DeserializeOwned;

use crate::error::{HarvestError, Result};
use crate::models::types::{FetchOutcome, Product, ReportId, ReportRecord};

/// Parses `body` into `T`, reporting a `MissingField` when the top-level `field` is absent.
pub fn parse_json<T: DeserializeOwned>(url: &str, body: &str, field: &'static str) -> Result<T> {
    let json_err = |source: serde_json::Error| HarvestError::Json { url: url.to_string(), source };
    let value: serde_json::Value = serde_json::from_str(body).map_err(json_err)?;
    if value.get(field).is_none() {
        return Err(HarvestError::MissingField { url: url.to_string(), field });
    }
    serde_json::from_value(value).map_err(json_err)
}

/// Plain substring test on the raw body, before any JSON parsing.
pub fn is_summary(body: &str, marker: &str) -> bool {
    body.contains(marker)
}

/// Turns a raw item body into a record, or `Summary` if the marker is anywhere in it.
pub fn classify_body(id: &ReportId, body: &str, marker: &str) -> Result<FetchOutcome> {
    if is_summary(body, marker) {
        return Ok(FetchOutcome::Summary);
    }
    let product: Product = parse_json(id.as_str(), body, "productText")?;
    Ok(FetchOutcome::Report(ReportRecord {
        id: id.clone(),
        text: product.product_text,
    }))
}
