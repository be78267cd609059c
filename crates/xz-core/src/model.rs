use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::TalentId;

/// One talent as listed on the catalog page.
///
/// Records are read-only once a roster is loaded. Optional collections
/// deserialize to empty vectors so the engine never has to handle absence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentProfile {
    pub id: TalentId,
    pub name: String,
    pub role: String,
    pub city: String,
    pub exp_years: u32,
    pub tier: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Day rate bounds in yuan. Fractional amounts are allowed.
    pub day_rate_min: f64,
    pub day_rate_max: f64,
    #[serde(default)]
    pub discount_windows: Vec<String>,
    /// Earliest bookable day. Not required to be in the future.
    pub availability: NaiveDate,
    pub calendar_url: String,
    #[serde(default)]
    pub cases: Vec<String>,
    #[serde(default)]
    pub devices: Vec<String>,
    #[serde(default)]
    pub awards: Vec<String>,
    pub rating: f64,
}

impl TalentProfile {
    /// Text the free-text search runs against: name, tags and cases,
    /// each list space-joined, concatenated without a separator.
    pub fn search_haystack(&self) -> String {
        let mut s = String::with_capacity(self.name.len() + 64);
        s.push_str(&self.name);
        s.push_str(&self.tags.join(" "));
        s.push_str(&self.cases.join(" "));
        s
    }
}
