use std::path::Path;

use serde_json::Value;
use xz_core::TalentProfile;

use crate::DataLoadError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RosterFormat {
    Json,
    Yaml,
}

impl RosterFormat {
    pub fn from_path(path: &Path) -> Result<Self, DataLoadError> {
        match path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()).as_deref() {
            Some("json") => Ok(RosterFormat::Json),
            Some("yaml") | Some("yml") => Ok(RosterFormat::Yaml),
            _ => Err(DataLoadError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Parse a roster document into profiles, in document order.
///
/// Accepts either a bare list of profiles or `{ talents: [...] }`. Records
/// are decoded one at a time so errors name the offending entry.
pub fn parse_profiles(text: &str, format: RosterFormat, origin: &str) -> Result<Vec<TalentProfile>, DataLoadError> {
    let parse_err = |message: String| DataLoadError::Parse { origin: origin.to_string(), message };

    let doc: Value = match format {
        RosterFormat::Json => serde_json::from_str(text).map_err(|e| parse_err(e.to_string()))?,
        RosterFormat::Yaml => serde_yaml::from_str(text).map_err(|e| parse_err(e.to_string()))?,
    };

    let records = match doc {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("talents") {
            Some(Value::Array(items)) => items,
            _ => return Err(parse_err("expected a list of talents or a `talents` list".to_string())),
        },
        _ => return Err(parse_err("expected a list of talents or a `talents` list".to_string())),
    };

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            serde_json::from_value::<TalentProfile>(record).map_err(|e| parse_err(format!("talents[{i}]: {e}")))
        })
        .collect()
}
