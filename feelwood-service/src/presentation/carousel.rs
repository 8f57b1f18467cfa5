/// 首页大图轮播
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 切换到下一张，最后一张之后回到第一张
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
    }

    /// 手动选择，越界时忽略
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active = index;
        true
    }
}
