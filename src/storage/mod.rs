mod repository;
mod store;

pub use repository::Repository;
pub use store::Store;
