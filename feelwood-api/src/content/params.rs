use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// GROQ查询参数（`$name` -> JSON值）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    values: BTreeMap<String, Value>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 转换为HTTP查询串参数：`$name` 对应JSON编码后的值
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .map(|(name, value)| (format!("${}", name), value.to_string()))
            .collect()
    }
}
