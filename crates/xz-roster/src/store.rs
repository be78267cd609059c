use std::path::Path;

use sha2::{Digest, Sha256};
use xz_core::{TalentId, TalentProfile};

use crate::{parse_profiles, validate_roster, DataLoadError, RosterFormat};

const BUILTIN_ROSTER: &str = include_str!("../data/talents.json");

/// Read-only, validated talent roster in load order.
///
/// There is no way to add, remove or edit a profile once loaded, so a
/// `&Roster` can be shared freely.
#[derive(Clone, Debug)]
pub struct Roster {
    profiles: Vec<TalentProfile>,
    digest: String,
}

impl Roster {
    /// The sample roster shipped with the crate.
    pub fn builtin() -> Result<Self, DataLoadError> {
        let profiles = parse_profiles(BUILTIN_ROSTER, RosterFormat::Json, "builtin")?;
        let roster = Self::from_profiles(profiles)?;
        tracing::debug!(count = roster.len(), "builtin roster loaded");
        Ok(roster)
    }

    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let format = RosterFormat::from_path(path)?;
        let text = std::fs::read_to_string(path).map_err(|source| DataLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let profiles = parse_profiles(&text, format, &path.display().to_string())?;
        let roster = Self::from_profiles(profiles)?;
        tracing::info!(path = %path.display(), count = roster.len(), digest = %roster.digest(), "roster loaded");
        Ok(roster)
    }

    pub fn from_profiles(profiles: Vec<TalentProfile>) -> Result<Self, DataLoadError> {
        if let Err(e) = validate_roster(&profiles) {
            tracing::warn!(error = %e, "roster rejected");
            return Err(e);
        }
        let digest = roster_digest(&profiles)?;
        Ok(Self { profiles, digest })
    }

    pub fn all(&self) -> &[TalentProfile] {
        &self.profiles
    }

    pub fn get(&self, id: &TalentId) -> Option<&TalentProfile> {
        self.profiles.iter().find(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// SHA-256 (hex) of the roster's canonical JSON. Same content, same digest.
    pub fn digest(&self) -> &str {
        &self.digest
    }
}

// serde_json::Value keeps object keys sorted, which makes the bytes canonical.
fn roster_digest(profiles: &[TalentProfile]) -> Result<String, DataLoadError> {
    let canonical = serde_json::to_value(profiles)
        .and_then(|v| serde_json::to_vec(&v))
        .map_err(|e| DataLoadError::Parse { origin: "digest".to_string(), message: e.to_string() })?;
    let mut hasher = Sha256::new();
    hasher.update(canonical);
    Ok(hex::encode(hasher.finalize()))
}
