pub mod engine;
pub mod ids;
pub mod links;
pub mod model;
pub mod query;
pub mod vocab;

pub use engine::*;
pub use ids::*;
pub use links::*;
pub use model::*;
pub use query::*;
