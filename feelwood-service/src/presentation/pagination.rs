use std::ops::Range;

use super::PresentationSettings;

/// 根据视口宽度选择每页数量，未知宽度按宽屏处理
pub fn page_size_for_width(width: Option<u32>, settings: &PresentationSettings) -> usize {
    match width {
        Some(width) if width < settings.narrow_breakpoint => settings.narrow_page_size,
        _ => settings.wide_page_size,
    }
}

/// 分页状态，页码从1开始
///
/// 条目数或每页数量变化时，当前页会被限制在 `[1, total_pages]` 内。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    count: usize,
    page_size: usize,
    page: usize,
}

impl Paginator {
    pub fn new(count: usize, page_size: usize) -> Self {
        Self {
            count,
            page_size: page_size.max(1),
            page: 1,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// 至少一页
    pub fn total_pages(&self) -> usize {
        self.count.div_ceil(self.page_size).max(1)
    }

    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.clamp();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.clamp();
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page;
        self.clamp();
    }

    pub fn next(&mut self) {
        self.go_to(self.page + 1);
    }

    pub fn previous(&mut self) {
        self.go_to(self.page.saturating_sub(1));
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// 当前页在全部条目中的范围
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.count);
        let end = (self.page * self.page_size).min(self.count);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    fn clamp(&mut self) {
        self.page = self.page.clamp(1, self.total_pages());
    }
}
