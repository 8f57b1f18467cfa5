pub mod content;

pub use content::{
    Post, CategoryRef, ImageRef,
    Category, CategoryPage,
    ProductListing, ProductSummary, ProductImage, ProductRef,
    Promotion,
    Localized,
    ContentBlock, TextBlock, ListItem, ListKind, HeadingLevel, Span, MarkDef,
    MarkupNode, Inline,
};
