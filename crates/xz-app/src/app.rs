use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use xz_core::{evaluate, QueryState, TalentId, TalentProfile};
use xz_roster::Roster;

use crate::{render_results, Config, RosterSource};

/// Catalog shell: configuration plus a validated roster.
///
/// Opening an `App` is the only place a roster is loaded, so a bad data
/// source stops the process before any query runs.
pub struct App {
    pub root: PathBuf,
    pub config: Config,
    pub roster: Roster,
}

impl App {
    /// Write a default config under `root` unless one already exists.
    pub fn init_root(root: &Path) -> Result<PathBuf> {
        let path = Config::config_path(root);
        if path.exists() {
            tracing::info!(path = %path.display(), "config already present");
            return Ok(path);
        }
        Config::default().save_to(&path)?;
        tracing::info!(path = %path.display(), "config written");
        Ok(path)
    }

    pub fn open(root: PathBuf) -> Result<Self> {
        Self::open_with(root, None)
    }

    /// Like `open`, but `roster_override` replaces the configured source.
    pub fn open_with(root: PathBuf, roster_override: Option<&Path>) -> Result<Self> {
        let config = Config::load_or_default(&root)?;
        let source = match roster_override {
            Some(p) => RosterSource::File(p.to_path_buf()),
            None => config.roster_source(&root),
        };
        let roster = load_roster(&source)?;
        Ok(Self { root, config, roster })
    }

    pub fn from_parts(root: PathBuf, config: Config, roster: Roster) -> Self {
        Self { root, config, roster }
    }

    /// The query the catalog opens with.
    pub fn default_query(&self) -> QueryState {
        self.config.query.clone()
    }

    pub fn search(&self, query: &QueryState) -> Vec<&TalentProfile> {
        let hits = evaluate(self.roster.all(), query);
        tracing::debug!(
            roster = self.roster.len(),
            hits = hits.len(),
            sort = %query.sort,
            "query evaluated"
        );
        hits
    }

    pub fn talent(&self, id: &str) -> Option<&TalentProfile> {
        self.roster.get(&TalentId::from_str(id))
    }

    pub fn render(&self, hits: &[&TalentProfile]) -> String {
        render_results(hits, &self.config.endpoints)
    }
}

pub fn load_roster(source: &RosterSource) -> Result<Roster> {
    match source {
        RosterSource::Builtin => Roster::builtin().context("load builtin roster"),
        RosterSource::File(path) => Roster::load(path).with_context(|| format!("load roster {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn init_then_open_uses_builtin_roster() {
        let dir = tempdir().unwrap();
        let path = App::init_root(dir.path()).unwrap();
        assert!(path.exists());

        let app = App::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(app.roster.len(), 3);
        assert_eq!(app.default_query().max_budget, 20000);
    }

    #[test]
    fn init_keeps_existing_config() {
        let dir = tempdir().unwrap();
        let path = Config::config_path(dir.path());
        let mut cfg = Config::default();
        cfg.endpoints.tax_faq = "https://docs.example/tax".into();
        cfg.save_to(&path).unwrap();

        App::init_root(dir.path()).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().endpoints.tax_faq, "https://docs.example/tax");
    }

    #[test]
    fn landing_query_shows_only_photographers() {
        let dir = tempdir().unwrap();
        let app = App::open(dir.path().to_path_buf()).unwrap();
        let hits = app.search(&app.default_query());
        let ids: Vec<&str> = hits.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1"]);
    }

    #[test]
    fn bad_roster_source_fails_open() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = App::open_with(dir.path().to_path_buf(), Some(&missing)).err().unwrap();
        assert!(format!("{err:#}").contains("nope.json"));
    }
}
