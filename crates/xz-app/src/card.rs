use xz_core::{inquiry_link, Endpoints, TalentProfile};

pub const NO_MATCH_MESSAGE: &str = "没有匹配到合适的人选，试着放宽筛选条件～";

const PLACEHOLDER: &str = "—";

/// Plain-text profile card.
pub fn render_card(t: &TalentProfile, endpoints: &Endpoints) -> String {
    let mut s = String::new();
    s.push_str(&format!("{} · {}  [{}]\n", t.name, t.role, t.id));
    s.push_str(&format!("{} · {} · {}年经验    评分 {:.1}\n", t.city, t.tier, t.exp_years, t.rating));
    if !t.tags.is_empty() {
        s.push_str(&format!("标签: {}\n", t.tags.join(" | ")));
    }
    s.push_str(&format!(
        "日薪区间: ¥{} - {}    折扣档: {}\n",
        thousands(t.day_rate_min),
        thousands(t.day_rate_max),
        join_or_placeholder(&t.discount_windows, " / ")
    ));
    s.push_str(&format!("最早可约: {}\n", t.availability));
    s.push_str(&format!("代表案例: {}\n", join_or_placeholder(&t.cases, "、")));

    let gear: Vec<String> = t.devices.iter().chain(t.awards.iter()).cloned().collect();
    s.push_str(&format!("设备/奖项: {}\n", join_or_placeholder(&gear, "、")));

    s.push_str(&format!("预约档期: {}\n", t.calendar_url));
    s.push_str(&format!("按Case询价: {}\n", inquiry_link(&endpoints.client_post, &t.name)));
    s
}

/// Cards separated by blank lines, or the no-match hint.
pub fn render_results(hits: &[&TalentProfile], endpoints: &Endpoints) -> String {
    if hits.is_empty() {
        return format!("{NO_MATCH_MESSAGE}\n");
    }
    hits.iter()
        .map(|t| render_card(t, endpoints))
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_or_placeholder(items: &[String], sep: &str) -> String {
    if items.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        items.join(sep)
    }
}

/// 18000 -> "18,000", 1499.75 -> "1,499.75". At most two decimals.
pub fn thousands(amount: f64) -> String {
    let fixed = format!("{:.2}", amount);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
