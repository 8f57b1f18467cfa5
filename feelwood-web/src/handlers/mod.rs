pub mod pages;
pub mod live;

pub use pages::*;
pub use live::*;
