pub mod content;
pub mod error;

pub use content::{ContentClient, ContentClientExt, QueryParams};
pub use error::ClientError;
