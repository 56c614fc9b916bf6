pub mod dataset;
pub mod query;
pub mod scene;

pub use dataset::*;
pub use query::*;
pub use scene::*;
