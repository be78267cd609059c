use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use xz_core::{vocab, Endpoints, QueryState, SortKey};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub roster: RosterConfig,
    pub endpoints: Endpoints,
    pub filters: FiltersConfig,
    /// Query the catalog opens with.
    pub query: QueryState,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub source: String, // "builtin" | path to .json/.yaml
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiltersConfig {
    pub roles: Vec<String>,
    pub cities: Vec<String>,
    pub tiers: Vec<String>,
}

/// Where the roster comes from once the config is resolved against a root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RosterSource {
    Builtin,
    File(PathBuf),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster: RosterConfig::default(),
            endpoints: Endpoints::default(),
            filters: FiltersConfig::default(),
            query: QueryState::default()
                .with_role("摄影师")
                .with_max_budget(20000)
                .with_sort(SortKey::Rating),
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self { source: "builtin".to_string() }
    }
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            roles: vocab::to_owned_list(vocab::ROLES),
            cities: vocab::to_owned_list(vocab::CITIES),
            tiers: vocab::to_owned_list(vocab::TIERS),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: Config = toml::from_str(&s).with_context(|| "parse xianzhi.toml")?;
        Ok(cfg)
    }

    /// Load `<root>/.xianzhi/xianzhi.toml`, or defaults when it does not exist.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = Self::config_path(root);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
        let s = toml::to_string_pretty(self).with_context(|| "serialize toml")?;
        std::fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    pub fn roster_source(&self, root: &Path) -> RosterSource {
        let raw = self.roster.source.trim();
        if raw.is_empty() || raw == "builtin" {
            return RosterSource::Builtin;
        }
        let expanded = PathBuf::from(shellexpand::tilde(raw).into_owned());
        if expanded.is_absolute() {
            RosterSource::File(expanded)
        } else {
            RosterSource::File(root.join(expanded))
        }
    }

    pub fn config_path(root: &Path) -> PathBuf {
        root.join(".xianzhi").join("xianzhi.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_catalog_landing_state() {
        let cfg = Config::default();
        assert_eq!(cfg.query.role.as_deref(), Some("摄影师"));
        assert_eq!(cfg.query.city, None);
        assert_eq!(cfg.query.max_budget, 20000);
        assert_eq!(cfg.filters.cities[0], vocab::UNRESTRICTED);
        assert_eq!(cfg.roster_source(Path::new("/srv")), RosterSource::Builtin);
    }

    #[test]
    fn config_roundtrip() {
        let dir = tempdir().unwrap();
        let path = Config::config_path(dir.path());
        let mut cfg = Config::default();
        cfg.endpoints.client_post = "https://forms.example/clients".into();
        cfg.roster.source = "data/roster.yaml".into();
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = Config::config_path(dir.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[query]\ncity = \"上海\"\nsort = \"price\"\n").unwrap();

        let cfg = Config::load_or_default(dir.path()).unwrap();
        assert_eq!(cfg.query.city.as_deref(), Some("上海"));
        assert_eq!(cfg.query.sort, SortKey::Price);
        assert_eq!(cfg.query.role, None);
        assert_eq!(cfg.endpoints, Endpoints::default());
    }

    #[test]
    fn relative_roster_paths_resolve_against_root() {
        let mut cfg = Config::default();
        cfg.roster.source = "rosters/main.json".into();
        assert_eq!(
            cfg.roster_source(Path::new("/srv/site")),
            RosterSource::File(PathBuf::from("/srv/site/rosters/main.json"))
        );
        cfg.roster.source = "/abs/roster.yaml".into();
        assert_eq!(cfg.roster_source(Path::new("/srv/site")), RosterSource::File(PathBuf::from("/abs/roster.yaml")));
    }
}
