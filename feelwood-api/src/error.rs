use thiserror::Error;

/// 内容查询层的错误
#[derive(Error, Debug)]
pub enum ClientError {
    /// 网络或传输失败（连接、超时等）
    #[error("Transport error: {0}")]
    Transport(String),

    /// 内容API返回了非2xx状态码
    #[error("Query failed with status {status}: {description}")]
    Status { status: u16, description: String },

    /// 返回的JSON与查询投影的结构不匹配
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid client configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// 是否为服务端返回的错误（而不是本地或网络错误）
    pub fn is_status(&self) -> bool {
        matches!(self, ClientError::Status { .. })
    }
}
