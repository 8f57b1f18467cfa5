pub mod template_engine;
pub mod markup;
mod embedded;

pub use template_engine::{TemplateContext, TemplateError, TemplateRenderer, TeraTemplateEngine};
pub use markup::render_markup;
