use crate::content::QueryParams;
use crate::error::ClientError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// ContentClient trait 定义对内容库的只读查询
///
/// 查询字符串使用GROQ，返回值为查询投影对应的JSON树。
/// 引用字段由查询本身解析成内嵌对象，调用方不需要二次请求。
#[async_trait]
pub trait ContentClient: Send + Sync {
    async fn fetch(&self, query: &str, params: &QueryParams) -> Result<Value, ClientError>;
}

/// 在ContentClient之上提供带类型的查询
#[async_trait]
pub trait ContentClientExt: ContentClient {
    /// 执行查询并反序列化为指定类型
    async fn fetch_as<T>(&self, query: &str, params: &QueryParams) -> Result<T, ClientError>
    where
        T: DeserializeOwned + Send,
    {
        let value = self.fetch(query, params).await?;
        Ok(serde_json::from_value(value)?)
    }
}

impl<C: ContentClient + ?Sized> ContentClientExt for C {}
