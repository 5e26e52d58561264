pub mod model;

pub use model::Site;
