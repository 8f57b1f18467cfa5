/// 轮换位置的更新方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexUpdate {
    /// 前进一位
    Advance,
    /// 跳到指定的绝对位置
    Jump(usize),
}

/// 首页文章轮换
///
/// 展示从 `offset` 开始的 `min(window, len)` 篇文章（循环取模）。
/// 切换分两步：[`Rotation::begin_transition`] 进入淡出状态，淡出结束后
/// [`Rotation::complete_transition`] 才真正移动位置。新的切换会取代尚未完成的切换。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    len: usize,
    window: usize,
    offset: usize,
    fading: bool,
    pending: Option<IndexUpdate>,
    generation: u64,
}

impl Rotation {
    pub fn new(len: usize, window: usize) -> Self {
        Self {
            len,
            window,
            offset: 0,
            fading: false,
            pending: None,
            generation: 0,
        }
    }

    /// 重新加载后回到起点
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.offset = 0;
        self.fading = false;
        self.pending = None;
        self.generation += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_fading(&self) -> bool {
        self.fading
    }

    /// 当前可见的文章下标
    pub fn visible_indices(&self) -> Vec<usize> {
        if self.len == 0 {
            return Vec::new();
        }
        let count = self.window.min(self.len);
        (0..count).map(|i| (self.offset + i) % self.len).collect()
    }

    /// 开始切换，返回本次切换的代号；没有文章时不切换
    pub fn begin_transition(&mut self, update: IndexUpdate) -> Option<u64> {
        if self.len == 0 {
            return None;
        }
        self.generation += 1;
        self.fading = true;
        self.pending = Some(update);
        Some(self.generation)
    }

    /// 淡出结束，只有最新一次切换会生效
    pub fn complete_transition(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        let Some(update) = self.pending.take() else {
            return false;
        };
        if self.len > 0 {
            let next = match update {
                IndexUpdate::Advance => self.offset + 1,
                IndexUpdate::Jump(index) => index,
            };
            self.offset = next % self.len;
        }
        self.fading = false;
        true
    }

    /// 没有打开详情且至少两篇文章时自动轮换
    pub fn should_autoplay(&self, detail_open: bool) -> bool {
        !detail_open && self.len >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_window_wraps() {
        let mut rotation = Rotation::new(5, 4);
        let generation = rotation.begin_transition(IndexUpdate::Jump(3)).unwrap();
        assert!(rotation.complete_transition(generation));
        assert_eq!(rotation.visible_indices(), vec![3, 4, 0, 1]);
    }

    #[test]
    fn test_window_shrinks_to_len() {
        let rotation = Rotation::new(2, 4);
        assert_eq!(rotation.visible_indices(), vec![0, 1]);
        assert!(Rotation::new(0, 4).visible_indices().is_empty());
    }

    #[test]
    fn test_transition_fades_then_applies() {
        let mut rotation = Rotation::new(3, 4);
        let generation = rotation.begin_transition(IndexUpdate::Advance).unwrap();
        assert!(rotation.is_fading());
        assert_eq!(rotation.offset(), 0);

        assert!(rotation.complete_transition(generation));
        assert!(!rotation.is_fading());
        assert_eq!(rotation.offset(), 1);
    }

    #[test]
    fn test_newer_transition_supersedes() {
        let mut rotation = Rotation::new(5, 4);
        let first = rotation.begin_transition(IndexUpdate::Jump(3)).unwrap();
        let second = rotation.begin_transition(IndexUpdate::Jump(1)).unwrap();

        assert!(!rotation.complete_transition(first));
        assert!(rotation.is_fading());
        assert!(rotation.complete_transition(second));
        assert_eq!(rotation.offset(), 1);
    }

    #[test]
    fn test_updates_are_normalized() {
        let mut rotation = Rotation::new(3, 4);
        let generation = rotation.begin_transition(IndexUpdate::Jump(7)).unwrap();
        rotation.complete_transition(generation);
        assert_eq!(rotation.offset(), 1);

        for _ in 0..2 {
            let generation = rotation.begin_transition(IndexUpdate::Advance).unwrap();
            rotation.complete_transition(generation);
        }
        assert_eq!(rotation.offset(), 0);
    }

    #[test]
    fn test_empty_rotation_ignores_transitions() {
        let mut rotation = Rotation::new(0, 4);
        assert_eq!(rotation.begin_transition(IndexUpdate::Advance), None);
        assert!(!rotation.is_fading());
    }

    #[test]
    fn test_autoplay_rules() {
        assert!(Rotation::new(2, 4).should_autoplay(false));
        assert!(!Rotation::new(2, 4).should_autoplay(true));
        assert!(!Rotation::new(1, 4).should_autoplay(false));
    }

    #[test]
    fn test_reset_discards_pending() {
        let mut rotation = Rotation::new(5, 4);
        let generation = rotation.begin_transition(IndexUpdate::Jump(2)).unwrap();
        rotation.reset(3);
        assert!(!rotation.complete_transition(generation));
        assert_eq!(rotation.offset(), 0);
        assert!(!rotation.is_fading());
    }
}
