pub mod app;
pub mod card;
pub mod config;

pub use app::*;
pub use card::*;
pub use config::*;
