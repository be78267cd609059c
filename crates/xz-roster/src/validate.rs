use std::collections::HashSet;

use xz_core::TalentProfile;

use crate::DataLoadError;

pub fn validate_profile(t: &TalentProfile) -> Result<(), DataLoadError> {
    let id = t.id.as_str();
    let required: [(&'static str, &str); 6] = [
        ("id", id),
        ("name", t.name.as_str()),
        ("role", t.role.as_str()),
        ("city", t.city.as_str()),
        ("tier", t.tier.as_str()),
        ("calendarUrl", t.calendar_url.as_str()),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(DataLoadError::EmptyField { id: id.to_string(), field });
        }
    }
    for (field, value) in [("dayRateMin", t.day_rate_min), ("dayRateMax", t.day_rate_max)] {
        if !value.is_finite() || value < 0.0 {
            return Err(DataLoadError::Rate { id: id.to_string(), field, value });
        }
    }
    if t.day_rate_min > t.day_rate_max {
        return Err(DataLoadError::RateRange {
            id: id.to_string(),
            min: t.day_rate_min,
            max: t.day_rate_max,
        });
    }
    if !t.rating.is_finite() || !(0.0..=5.0).contains(&t.rating) {
        return Err(DataLoadError::Rating { id: id.to_string(), rating: t.rating });
    }
    Ok(())
}

/// Validate every record, then id uniqueness. Stops at the first problem.
pub fn validate_roster(profiles: &[TalentProfile]) -> Result<(), DataLoadError> {
    let mut seen = HashSet::new();
    for t in profiles {
        validate_profile(t)?;
        if !seen.insert(t.id.as_str()) {
            return Err(DataLoadError::DuplicateId(t.id.to_string()));
        }
    }
    Ok(())
}
