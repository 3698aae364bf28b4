// Route exports
pub mod recommend;

use actix_web::web;

use crate::services::ListingSource;

pub use recommend::AppState;

pub fn configure_routes<S: ListingSource + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.configure(recommend::configure::<S>);
}
