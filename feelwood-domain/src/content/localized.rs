/// Localized 表示同一逻辑字段的泰文/英文两个版本
///
/// 文档中以平行字段存储（如 `titleTh` / `titleEn`），
/// 具体取哪个版本由服务层的字段解析器决定。
#[derive(Debug, PartialEq, Eq)]
pub struct Localized<'a, T: ?Sized = str> {
    pub th: Option<&'a T>,
    pub en: Option<&'a T>,
}

impl<'a, T: ?Sized> Localized<'a, T> {
    pub fn new(th: Option<&'a T>, en: Option<&'a T>) -> Self {
        Self { th, en }
    }

    pub fn empty() -> Self {
        Self { th: None, en: None }
    }
}

impl<T: ?Sized> Clone for Localized<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Localized<'_, T> {}

impl<'a> Localized<'a, str> {
    /// 从两个 `Option<String>` 字段借用
    pub fn from_fields(th: &'a Option<String>, en: &'a Option<String>) -> Self {
        Self::new(th.as_deref(), en.as_deref())
    }
}

impl<'a, T> Localized<'a, [T]> {
    /// 从两个 `Option<Vec<T>>` 字段借用
    pub fn from_lists(th: &'a Option<Vec<T>>, en: &'a Option<Vec<T>>) -> Self {
        Self::new(th.as_deref(), en.as_deref())
    }
}
