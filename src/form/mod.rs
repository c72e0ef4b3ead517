pub mod store;

pub use store::DraftStore;
