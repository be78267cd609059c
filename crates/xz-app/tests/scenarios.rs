use std::path::{Path, PathBuf};

use serde::Deserialize;
use xz_app::{load_roster, App, Config, RosterSource};
use xz_core::QueryState;

#[derive(Debug, Deserialize)]
struct Scenario {
    scenario_id: String,
    roster: String,
    query: QueryState,
    expect_ids: Vec<String>,
}

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures")
}

fn run(dir: &str) -> (Scenario, Vec<String>) {
    let path = fixtures().join("scenarios").join(dir).join("scenario.yaml");
    let text = std::fs::read_to_string(&path).unwrap();
    let sc: Scenario = serde_yaml::from_str(&text).unwrap();

    let source = if sc.roster == "builtin" {
        RosterSource::Builtin
    } else {
        RosterSource::File(fixtures().join("rosters").join(&sc.roster))
    };
    let app = App::from_parts(fixtures(), Config::default(), load_roster(&source).unwrap());
    let got = app.search(&sc.query).iter().map(|t| t.id.as_str().to_string()).collect();
    (sc, got)
}

fn assert_scenario(dir: &str) {
    let (sc, got) = run(dir);
    assert_eq!(got, sc.expect_ids, "scenario {}", sc.scenario_id);
}

#[test]
fn scenario_sc01_role_filter_dominates() {
    assert_scenario("SC-01-role-dominates");
}

#[test]
fn scenario_sc02_price_ascending() {
    assert_scenario("SC-02-price-ascending");
}

#[test]
fn scenario_sc03_text_search_hits_tags_and_cases() {
    assert_scenario("SC-03-text-search");
}

#[test]
fn scenario_sc04_compound_role_label_matches() {
    assert_scenario("SC-04-compound-role");
}

#[test]
fn scenario_sc05_price_ties_keep_roster_order() {
    assert_scenario("SC-05-tie-stability");
}

#[test]
fn scenario_sc06_rating_ties_keep_roster_order() {
    assert_scenario("SC-06-rating-tie-stability");
}

#[test]
fn scenario_sc07_zero_budget_excludes_paid_talent() {
    assert_scenario("SC-07-zero-budget");
}

#[test]
fn scenario_sc08_city_filter_with_experience_order() {
    assert_scenario("SC-08-city-and-experience");
}

#[test]
fn every_scenario_directory_is_covered() {
    let mut dirs: Vec<String> = std::fs::read_dir(fixtures().join("scenarios"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    dirs.sort();
    assert_eq!(dirs.len(), 8, "new scenario directories need their own test: {dirs:?}");
}

#[test]
fn rendered_results_include_inquiry_links() {
    let mut config = Config::default();
    config.endpoints.client_post = "https://forms.example/clients".into();
    let app = App::from_parts(fixtures(), config, load_roster(&RosterSource::Builtin).unwrap());

    let hits = app.search(&QueryState::default().with_search("TVC"));
    let out = app.render(&hits);
    assert!(out.contains("https://forms.example/clients?talent=%E5%88%98%E9%87%8E"));
    assert!(out.find("刘野").unwrap() < out.find("张晨").unwrap());
}
