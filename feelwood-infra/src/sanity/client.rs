use async_trait::async_trait;
use feelwood_api::{ClientError, ContentClient, QueryParams};
use serde_json::Value;
use std::time::{Duration, Instant};
use url::Url;

/// Sanity内容库连接配置
#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    /// 形如 `2025-11-01`，可以带或不带前缀 `v`
    pub api_version: String,
    /// 使用 apicdn 主机（带token时忽略）
    pub use_cdn: bool,
    /// 查询视角，如 `published`
    pub perspective: Option<String>,
    /// 读取私有数据集时使用的token
    pub token: Option<String>,
    pub timeout: Duration,
}

impl Default for SanityConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            dataset: String::new(),
            api_version: "2025-11-01".to_string(),
            use_cdn: true,
            perspective: Some("published".to_string()),
            token: None,
            timeout: Duration::from_secs(10),
        }
    }
}

/// 基于Sanity HTTP查询API的ContentClient实现
///
/// `GET https://{project}.api[cdn].sanity.io/v{version}/data/query/{dataset}?query=...&$param=...`
pub struct SanityClient {
    http: reqwest::Client,
    endpoint: Url,
    perspective: Option<String>,
    token: Option<String>,
}

impl SanityClient {
    pub fn new(config: SanityConfig) -> Result<Self, ClientError> {
        let endpoint = Self::build_endpoint(&config)?;
        Self::with_endpoint(endpoint, config)
    }

    /// 使用指定的查询端点（代理或测试服务器）
    pub fn with_endpoint(endpoint: Url, config: SanityConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            perspective: config.perspective.filter(|p| !p.is_empty()),
            token: config.token.filter(|t| !t.is_empty()),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build_endpoint(config: &SanityConfig) -> Result<Url, ClientError> {
        let project_id = config.project_id.trim();
        if project_id.is_empty() {
            return Err(ClientError::Configuration("Missing Sanity project id".to_string()));
        }
        if !project_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(ClientError::Configuration(format!("Invalid Sanity project id: {}", project_id)));
        }

        let dataset = config.dataset.trim();
        if dataset.is_empty() {
            return Err(ClientError::Configuration("Missing Sanity dataset".to_string()));
        }

        let version = config.api_version.trim().trim_start_matches('v');
        // 带token的请求不能走CDN
        let host = if config.use_cdn && config.token.as_deref().map_or(true, str::is_empty) {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        };

        let raw = format!(
            "https://{}.{}/v{}/data/query/{}",
            project_id, host, version, dataset
        );
        Url::parse(&raw).map_err(|e| ClientError::Configuration(format!("{}: {}", raw, e)))
    }

    /// 构建完整的查询URL
    pub fn query_url(&self, query: &str, params: &QueryParams) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            for (name, value) in params.to_query_pairs() {
                pairs.append_pair(&name, &value);
            }
            if let Some(perspective) = &self.perspective {
                pairs.append_pair("perspective", perspective);
            }
        }
        url
    }
}

#[async_trait]
impl ContentClient for SanityClient {
    async fn fetch(&self, query: &str, params: &QueryParams) -> Result<Value, ClientError> {
        let url = self.query_url(query, params);
        let started = Instant::now();

        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                description: error_description(&body)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string()),
            });
        }

        let mut envelope: Value = serde_json::from_str(&body)?;
        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Content query completed"
        );
        Ok(envelope
            .get_mut("result")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }
}

/// 从错误响应中提取描述信息
fn error_description(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["/error/description", "/message", "/error"]
        .iter()
        .find_map(|pointer| value.pointer(pointer).and_then(Value::as_str))
        .map(str::to_string)
}
