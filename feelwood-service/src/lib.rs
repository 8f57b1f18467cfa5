pub mod content;
pub mod error;
pub mod format;
pub mod localize;
pub mod portable_text;
pub mod presentation;
pub mod share;

pub use content::{
    BlogService, DefaultBlogService,
    CatalogService, DefaultCatalogService,
    PromotionService, DefaultPromotionService,
    PostView, CategoryCard, CategoryView, NavMenu, PromotionView, HERO_SLIDES,
};
pub use error::ContentError;
pub use presentation::{
    HomeCommand, HomeSession, HomeSnapshot, Paginator, PresentationSettings, Rotation, page_size_for_width,
};
pub use share::ShareLinks;
