use feelwood_api::ClientError;
use thiserror::Error;

/// 内容服务错误
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to fetch {what}: {source}")]
    Fetch {
        what: &'static str,
        #[source]
        source: ClientError,
    },

    #[error("{0} not found")]
    NotFound(String),
}

impl ContentError {
    pub fn fetch(what: &'static str) -> impl FnOnce(ClientError) -> Self {
        move |source| ContentError::Fetch { what, source }
    }

    /// 展示给访客的泰文提示
    pub fn user_message(&self) -> &'static str {
        match self {
            ContentError::Fetch { what: "posts", .. } => "ไม่สามารถโหลดบทความได้ กรุณาลองใหม่อีกครั้ง",
            ContentError::Fetch { .. } => "ไม่สามารถโหลดข้อมูลได้ กรุณาลองใหม่อีกครั้ง",
            ContentError::NotFound(_) => "ไม่พบหน้าที่คุณต้องการ",
        }
    }
}
