use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tera::{Context, Tera};
use thiserror::Error;

use super::embedded;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Template context error: {0}")]
    Context(#[from] serde_json::Error),

    #[error("Invalid template path: {0}")]
    InvalidPath(String),
}

/// 模板渲染器trait
pub trait TemplateRenderer: Send + Sync {
    /// 渲染模板
    fn render(&self, template_name: &str, context: &TemplateContext) -> Result<String, TemplateError>;
}

/// 模板上下文
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    /// 模型数据
    pub model: HashMap<String, serde_json::Value>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: HashMap<String, serde_json::Value>) -> Self {
        self.model = model;
        self
    }

    /// 插入一个可序列化的模型值
    pub fn insert<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), TemplateError> {
        self.model.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(())
    }
}

/// Tera模板引擎实现
/// 内置模板随二进制发布，主题目录中的同名模板会覆盖内置模板
pub struct TeraTemplateEngine {
    tera: Tera,
    site_name: String,
}

impl TeraTemplateEngine {
    /// 只使用内置模板
    pub fn embedded(site_name: impl Into<String>) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(embedded::TEMPLATES.to_vec())?;
        Ok(Self::configure(tera, site_name))
    }

    /// 从主题目录加载模板，缺失的模板使用内置版本
    pub fn from_dir(theme_dir: &Path, site_name: impl Into<String>) -> Result<Self, TemplateError> {
        let pattern = theme_dir.join("**/*.html");
        let pattern = pattern
            .to_str()
            .ok_or_else(|| TemplateError::InvalidPath(theme_dir.display().to_string()))?;

        let mut tera = Tera::new(pattern)?;
        let mut builtin = Tera::default();
        builtin.add_raw_templates(embedded::TEMPLATES.to_vec())?;
        // extend不会覆盖已有的同名模板
        tera.extend(&builtin)?;

        tracing::info!(
            theme_dir = %theme_dir.display(),
            templates = tera.get_template_names().count(),
            "Theme templates loaded"
        );
        Ok(Self::configure(tera, site_name))
    }

    fn configure(mut tera: Tera, site_name: impl Into<String>) -> Self {
        tera.autoescape_on(vec![".html", ".htm", ".xml"]);
        Self {
            tera,
            site_name: site_name.into(),
        }
    }
}

impl TemplateRenderer for TeraTemplateEngine {
    fn render(&self, template_name: &str, context: &TemplateContext) -> Result<String, TemplateError> {
        // 构建Tera上下文
        let mut tera_context = Context::new();

        // 添加模型数据
        for (key, value) in &context.model {
            tera_context.insert(key, value);
        }

        tera_context.insert("site_name", &self.site_name);

        Ok(self.tera.render(template_name, &tera_context)?)
    }
}
