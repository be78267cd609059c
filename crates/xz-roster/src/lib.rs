pub mod error;
pub mod source;
pub mod store;
pub mod validate;

pub use error::*;
pub use source::*;
pub use store::*;
pub use validate::*;
