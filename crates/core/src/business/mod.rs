pub mod model;
pub mod types;

pub use model::Business;
pub use types::BusinessType;
