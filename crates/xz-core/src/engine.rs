use std::cmp::Ordering;

use crate::{QueryState, SortKey, TalentProfile};

/// Pure query evaluation:
/// - keep profiles that pass every filter in `matches`
/// - order them by the query's sort key (stable, ties keep roster order)
///
/// Never fails. A query nothing satisfies simply yields an empty list.
pub fn evaluate<'a>(roster: &'a [TalentProfile], query: &QueryState) -> Vec<&'a TalentProfile> {
    let mut hits: Vec<&TalentProfile> = roster.iter().filter(|t| matches(t, query)).collect();
    // sort_by is stable
    hits.sort_by(|a, b| compare(a, b, query.sort));
    hits
}

/// Filter predicate. A profile passes iff role, city, tier, budget and
/// free text all match.
pub fn matches(talent: &TalentProfile, query: &QueryState) -> bool {
    role_ok(talent, query) && city_ok(talent, query) && tier_ok(talent, query) && budget_ok(talent, query) && text_ok(talent, query)
}

// Substring, so compound labels like "摄影师/导演" still match "摄影师".
fn role_ok(talent: &TalentProfile, query: &QueryState) -> bool {
    query.role.as_deref().map_or(true, |role| talent.role.contains(role))
}

fn city_ok(talent: &TalentProfile, query: &QueryState) -> bool {
    query.city.as_deref().map_or(true, |city| talent.city == city)
}

fn tier_ok(talent: &TalentProfile, query: &QueryState) -> bool {
    query.tier.as_deref().map_or(true, |tier| talent.tier == tier)
}

// Floor rate against the ceiling: a talent whose minimum exceeds the budget is
// out even if part of the range would fit.
fn budget_ok(talent: &TalentProfile, query: &QueryState) -> bool {
    talent.day_rate_min <= query.max_budget as f64
}

fn text_ok(talent: &TalentProfile, query: &QueryState) -> bool {
    query.search_text.is_empty() || talent.search_haystack().contains(query.search_text.as_str())
}

fn compare(a: &TalentProfile, b: &TalentProfile, key: SortKey) -> Ordering {
    match key {
        SortKey::Price => a.day_rate_min.partial_cmp(&b.day_rate_min).unwrap_or(Ordering::Equal),
        SortKey::Experience => b.exp_years.cmp(&a.exp_years),
        // partial_cmp so -0.0 and 0.0 tie; NaN never survives roster validation.
        SortKey::Rating => b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal),
    }
}
