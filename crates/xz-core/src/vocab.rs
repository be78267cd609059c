//! Filter option lists offered by the catalog page.

/// Dropdown label meaning "no restriction".
pub const UNRESTRICTED: &str = "不限";

pub const ROLES: &[&str] = &["摄影师", "灯光师", "美术指导", "导演", "制片", "剪辑", "调色", "编剧", "后期"];

pub const CITIES: &[&str] = &[UNRESTRICTED, "北京", "上海", "广州", "深圳", "杭州"];

// Sample tiers only; profiles may carry others.
pub const TIERS: &[&str] = &[UNRESTRICTED, "专业 Lv2", "精英 Lv4", "大师 Lv5"];

pub fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
