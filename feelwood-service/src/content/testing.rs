use async_trait::async_trait;
use feelwood_api::{ClientError, ContentClient, QueryParams};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// 按查询字符串返回固定结果的内容客户端
#[derive(Default)]
pub struct FakeClient {
    responses: HashMap<&'static str, Value>,
    failing: bool,
    last_params: Mutex<QueryParams>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn respond(mut self, query: &'static str, result: Value) -> Self {
        self.responses.insert(query, result);
        self
    }

    pub fn last_params(&self) -> QueryParams {
        self.last_params.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentClient for FakeClient {
    async fn fetch(&self, query: &str, params: &QueryParams) -> Result<Value, ClientError> {
        *self.last_params.lock().unwrap() = params.clone();
        if self.failing {
            return Err(ClientError::Status {
                status: 500,
                description: "unavailable".to_string(),
            });
        }
        self.responses
            .get(query)
            .cloned()
            .ok_or_else(|| ClientError::Status {
                status: 400,
                description: format!("unexpected query: {}", query),
            })
    }
}
