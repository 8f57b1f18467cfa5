pub mod client;

pub use client::{SanityClient, SanityConfig};
