use serde::{Serialize, Deserialize};
use derive_more::{From, Into, Display, AsRef, FromStr};
use bon::bon;

/// Width of the `=` line that closes every report in the output file.
pub const SEPARATOR_WIDTH: usize = 40;

/// Identifier of a single product: the absolute URL it is served from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, From, Into, Display, AsRef, FromStr)]
#[from(String, &str)]
pub struct ReportId(String);

#[bon]
impl ReportId {
    #[builder]
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Listing returned by `/products/types/{code}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductIndex {
    #[serde(rename = "@graph")]
    pub products: Vec<ProductEntry>,
}

/// One element of the listing `@graph`. Only `@id` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductEntry {
    #[serde(rename = "@id")]
    pub id: ReportId,
    #[serde(default, rename = "id")]
    pub product_id: Option<String>,
    #[serde(default, rename = "issuanceTime")]
    pub issuance_time: Option<String>,
    #[serde(default, rename = "issuingOffice")]
    pub issuing_office: Option<String>,
    #[serde(default, rename = "productCode")]
    pub product_code: Option<String>,
    #[serde(default, rename = "productName")]
    pub product_name: Option<String>,
    #[serde(default, rename = "wmoCollectiveId")]
    pub wmo_collective_id: Option<String>,
}

/// Full product as served at its `@id`.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    #[serde(rename = "productText")]
    pub product_text: String,
    #[serde(default, rename = "issuanceTime")]
    pub issuance_time: Option<String>,
    #[serde(default, rename = "issuingOffice")]
    pub issuing_office: Option<String>,
}

/// Result of fetching one identifier: either the raw body matched the
/// summary marker, or it was parsed into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Summary,
    Report(ReportRecord),
}

/// A report that survived filtering and is ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRecord {
    pub id: ReportId,
    pub text: String,
}

impl ReportRecord {
    /// `<id>\n<text>\n<separator>\n`
    pub fn render(&self) -> String {
        format!("{}\n{}\n{}\n", self.id, self.text, "=".repeat(SEPARATOR_WIDTH))
    }
}

/// Counters reported at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HarvestStats {
    pub listed: usize,
    pub written: usize,
    pub skipped: usize,
}
