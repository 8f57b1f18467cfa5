pub mod sanity;
pub mod theme;

pub use sanity::{SanityClient, SanityConfig};
pub use theme::{TemplateContext, TemplateError, TemplateRenderer, TeraTemplateEngine};
