pub mod queries;
pub mod view;
pub mod blog_service;
pub mod catalog_service;
pub mod promotion_service;
#[cfg(test)]
pub(crate) mod testing;

pub use view::{
    HeroSlide, HERO_SLIDES, NavLink, NavMenu, CategoryCard, CategoryView, PostView, ProductCard, PromotionView,
};
pub use blog_service::{BlogService, DefaultBlogService};
pub use catalog_service::{CatalogService, DefaultCatalogService};
pub use promotion_service::{PromotionService, DefaultPromotionService};
