//! 页面展示状态
//!
//! 首页轮播图、文章轮换、博客分页，以及驱动它们的定时任务。
//! 状态本身都是纯数据结构，时间由 [`task::ScopedTask`] 驱动。

pub mod carousel;
pub mod rotation;
pub mod pagination;
pub mod task;
pub mod session;

use std::time::Duration;

pub use carousel::Carousel;
pub use rotation::{IndexUpdate, Rotation};
pub use pagination::{page_size_for_width, Paginator};
pub use task::ScopedTask;
pub use session::{HomeCommand, HomeSession, HomeSnapshot};

/// 展示相关的时间和尺寸参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationSettings {
    /// 首页大图自动切换间隔
    pub hero_interval: Duration,
    /// 文章轮换间隔
    pub rotation_interval: Duration,
    /// 淡出时间，结束后才切换文章
    pub fade_duration: Duration,
    /// 同时展示的文章数上限
    pub rotation_window: usize,
    /// 小于该宽度（像素）时使用窄屏分页
    pub narrow_breakpoint: u32,
    pub narrow_page_size: usize,
    pub wide_page_size: usize,
    /// 首页加载的最新文章数
    pub home_post_limit: usize,
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            hero_interval: Duration::from_millis(8000),
            rotation_interval: Duration::from_millis(9000),
            fade_duration: Duration::from_millis(500),
            rotation_window: 4,
            narrow_breakpoint: 640,
            narrow_page_size: 4,
            wide_page_size: 6,
            home_post_limit: 9,
        }
    }
}
