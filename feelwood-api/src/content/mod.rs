pub mod client;
pub mod params;

pub use client::{ContentClient, ContentClientExt};
pub use params::QueryParams;
