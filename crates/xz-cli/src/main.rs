use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use xz_app::{load_roster, App, Config};
use xz_core::{parse_budget, selection, SortKey};

#[derive(Parser)]
#[command(name = "xz", version, about = "闲职 talent catalog")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config to .xianzhi/xianzhi.toml
    Init,

    /// Load and validate the roster, print its size and digest
    Validate {
        /// Roster file to check instead of the configured source
        #[arg(long)]
        roster: Option<String>,
    },

    /// Filter and sort the roster
    Search {
        /// Free-text match against name, tags and cases
        #[arg(long)]
        q: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        tier: Option<String>,
        /// Budget ceiling; non-numeric input counts as 0
        #[arg(long, allow_hyphen_values = true)]
        max_budget: Option<String>,
        /// rating | price | exp
        #[arg(long)]
        sort: Option<String>,
        /// Start from an unrestricted query instead of the configured default
        #[arg(long, default_value_t = false)]
        all: bool,
        #[arg(long, default_value_t = false)]
        json: bool,
        #[arg(long)]
        roster: Option<String>,
    },

    /// Show one talent card
    Show {
        id: String,
        #[arg(long, default_value_t = false)]
        json: bool,
        #[arg(long)]
        roster: Option<String>,
    },

    /// Print the configured external links
    Links,

    /// Print the filter option lists
    Facets,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let root = std::env::current_dir()?;

    match cli.cmd {
        Command::Init => {
            let path = App::init_root(&root)?;
            println!("Config at {}", path.display());
        }
        Command::Validate { roster } => {
            let config = Config::load_or_default(&root)?;
            let source = match roster {
                Some(p) => xz_app::RosterSource::File(p.into()),
                None => config.roster_source(&root),
            };
            let r = load_roster(&source)?;
            println!("OK: {} talents", r.len());
            println!("digest: {}", r.digest());
        }
        Command::Search { q, role, city, tier, max_budget, sort, all, json, roster } => {
            let app = App::open_with(root, roster.as_deref().map(std::path::Path::new))?;
            let mut query = if all { xz_core::QueryState::default() } else { app.default_query() };
            if let Some(q) = q {
                query.search_text = q;
            }
            if let Some(role) = role {
                query.role = selection(&role);
            }
            if let Some(city) = city {
                query.city = selection(&city);
            }
            if let Some(tier) = tier {
                query.tier = selection(&tier);
            }
            if let Some(b) = max_budget {
                query.max_budget = parse_budget(&b);
            }
            if let Some(s) = sort {
                query.sort = SortKey::parse_lenient(&s);
            }

            tracing::debug!(?query, "search");
            let hits = app.search(&query);
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                print!("{}", app.render(&hits));
            }
        }
        Command::Show { id, json, roster } => {
            let app = App::open_with(root, roster.as_deref().map(std::path::Path::new))?;
            let t = app.talent(&id).ok_or_else(|| anyhow::anyhow!("no talent with id {}", id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(t)?);
            } else {
                print!("{}", xz_app::render_card(t, &app.config.endpoints));
            }
        }
        Command::Links => {
            let config = Config::load_or_default(&root)?;
            let ep = &config.endpoints;
            println!("定价/折扣机制: {}", ep.price_policy);
            println!("税务与个体户: {}", ep.tax_faq);
            println!("发布需求: {}", ep.client_post);
            println!("自由职业者入驻: {}", ep.freelancer_signup);
        }
        Command::Facets => {
            let config = Config::load_or_default(&root)?;
            let f = &config.filters;
            println!("角色: {}", f.roles.join(", "));
            println!("城市: {}", f.cities.join(", "));
            println!("段位: {}", f.tiers.join(", "));
            println!("排序: rating, price, exp");
        }
    }

    Ok(())
}
