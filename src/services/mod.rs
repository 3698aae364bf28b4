// Service exports
pub mod mysql;
pub mod source;

pub use mysql::{MySqlListingStore, StoreError};
pub use source::ListingSource;
