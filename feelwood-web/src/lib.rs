pub mod app_state;
pub mod handlers;
pub mod router;

#[cfg(test)]
pub(crate) mod testing;

pub use app_state::AppState;
pub use handlers::*;
pub use router::create_router;
