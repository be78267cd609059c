use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::vocab::UNRESTRICTED;

/// Ordering applied to the filtered roster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    #[default]
    Rating,
    Price,
    Experience,
}

impl SortKey {
    /// Unknown keys fall back to rating order instead of failing.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => SortKey::Price,
            "exp" | "experience" => SortKey::Experience,
            _ => SortKey::Rating,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Price => "price",
            SortKey::Experience => "exp",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        SortKey::parse_lenient(&s)
    }
}

impl From<SortKey> for String {
    fn from(k: SortKey) -> Self {
        k.as_str().to_string()
    }
}

/// Filter and sort parameters chosen by the visitor.
///
/// `None` in `role`, `city` or `tier` means "unrestricted". The engine only
/// ever borrows a query; callers rebuild or mutate it between evaluations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryState {
    pub search_text: String,
    #[serde(deserialize_with = "de_selection")]
    pub role: Option<String>,
    #[serde(deserialize_with = "de_selection")]
    pub city: Option<String>,
    #[serde(deserialize_with = "de_selection")]
    pub tier: Option<String>,
    /// Ceiling compared against a talent's minimum day rate.
    pub max_budget: i64,
    pub sort: SortKey,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            role: None,
            city: None,
            tier: None,
            max_budget: i64::MAX,
            sort: SortKey::Rating,
        }
    }
}

impl QueryState {
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.role = selection(role);
        self
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = selection(city);
        self
    }

    pub fn with_tier(mut self, tier: &str) -> Self {
        self.tier = selection(tier);
        self
    }

    pub fn with_max_budget(mut self, max_budget: i64) -> Self {
        self.max_budget = max_budget;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Normalize a dropdown label: empty, "不限" and "unrestricted" mean no filter.
/// Whitespace is kept, so " " is a real (unmatchable) filter value.
pub fn selection(label: &str) -> Option<String> {
    if label.is_empty() || label == UNRESTRICTED || label.eq_ignore_ascii_case("unrestricted") {
        None
    } else {
        Some(label.to_string())
    }
}

/// Coerce free-form budget input to a number. Anything unparseable is 0.
pub fn parse_budget(input: &str) -> i64 {
    let input = input.trim();
    if let Ok(n) = input.parse::<i64>() {
        return n;
    }
    match input.parse::<f64>() {
        Ok(f) if f.is_finite() => f.trunc() as i64,
        _ => 0,
    }
}

fn de_selection<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(selection))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_is_lenient() {
        assert_eq!(SortKey::parse_lenient("price"), SortKey::Price);
        assert_eq!(SortKey::parse_lenient("exp"), SortKey::Experience);
        assert_eq!(SortKey::parse_lenient("Experience"), SortKey::Experience);
        assert_eq!(SortKey::parse_lenient("rating"), SortKey::Rating);
        assert_eq!(SortKey::parse_lenient("popularity"), SortKey::Rating);
        assert_eq!(SortKey::parse_lenient(""), SortKey::Rating);
    }

    #[test]
    fn selection_treats_sentinels_as_unrestricted() {
        assert_eq!(selection(""), None);
        assert_eq!(selection("不限"), None);
        assert_eq!(selection("unrestricted"), None);
        assert_eq!(selection("北京"), Some("北京".to_string()));
    }

    #[test]
    fn selection_keeps_whitespace_labels() {
        assert_eq!(selection(" "), Some(" ".to_string()));
        assert_eq!(selection(" 北京"), Some(" 北京".to_string()));
    }

    #[test]
    fn budget_coercion_never_fails() {
        assert_eq!(parse_budget("20000"), 20000);
        assert_eq!(parse_budget(" 1500 "), 1500);
        assert_eq!(parse_budget("-5"), -5);
        assert_eq!(parse_budget("99.9"), 99);
        assert_eq!(parse_budget("abc"), 0);
        assert_eq!(parse_budget(""), 0);
        assert_eq!(parse_budget("NaN"), 0);
    }

    #[test]
    fn default_query_is_unrestricted() {
        let q = QueryState::default();
        assert!(q.search_text.is_empty());
        assert!(q.role.is_none() && q.city.is_none() && q.tier.is_none());
        assert_eq!(q.max_budget, i64::MAX);
        assert_eq!(q.sort, SortKey::Rating);
    }
}
