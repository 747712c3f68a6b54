// ============================================================================
// TransHelper - 目录文件格式
// ============================================================================
//
// 文件: src/core/format.rs
// 职责: 目录文件的解析与序列化（yml / json）
// 边界:
//   - ✅ 格式 trait 定义
//   - ✅ YAML / JSON 实现
//   - ✅ 格式注册表
//   - ❌ 不应包含文件读写逻辑
//   - ❌ 不应包含路径命名约定
//
// ============================================================================

use serde_yaml::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::normalize::normalize_data;
use crate::models::catalogue::Messages;

/// 格式错误
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("YAML 处理失败: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON 处理失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("目录文件的根节点必须是映射")]
    NotAMapping,
}

/// 目录文件格式
pub trait CatalogueFormat: Send + Sync {
    /// 格式名，同时也是文件扩展名
    fn name(&self) -> &'static str;

    /// 解析文件内容，嵌套结构展开为点路径
    fn load(&self, content: &str) -> Result<Messages, FormatError>;

    /// 序列化为文件内容（扁平、按键排序）
    fn dump(&self, messages: &Messages) -> Result<String, FormatError>;
}

/// 把解析出的根节点展开为消息表
fn flatten_root(root: Value) -> Result<Messages, FormatError> {
    match root {
        Value::Null => Ok(Messages::new()),
        Value::Mapping(mapping) => Ok(normalize_data(&mapping, "")),
        _ => Err(FormatError::NotAMapping),
    }
}

/// YAML 格式
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormat;

impl CatalogueFormat for YamlFormat {
    fn name(&self) -> &'static str {
        "yml"
    }

    fn load(&self, content: &str) -> Result<Messages, FormatError> {
        if content.trim().is_empty() {
            return Ok(Messages::new());
        }
        flatten_root(serde_yaml::from_str(content)?)
    }

    fn dump(&self, messages: &Messages) -> Result<String, FormatError> {
        Ok(serde_yaml::to_string(messages)?)
    }
}

/// JSON 格式
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl CatalogueFormat for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn load(&self, content: &str) -> Result<Messages, FormatError> {
        if content.trim().is_empty() {
            return Ok(Messages::new());
        }
        let json: serde_json::Value = serde_json::from_str(content)?;
        flatten_root(serde_yaml::to_value(json)?)
    }

    fn dump(&self, messages: &Messages) -> Result<String, FormatError> {
        let mut content = serde_json::to_string_pretty(messages)?;
        content.push('\n');
        Ok(content)
    }
}

/// 格式注册表，写入器与翻译器共享
#[derive(Clone, Default)]
pub struct FormatRegistry {
    formats: BTreeMap<&'static str, Arc<dyn CatalogueFormat>>,
}

impl FormatRegistry {
    /// 空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 内置 yml 与 json 格式
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(YamlFormat);
        registry.register(JsonFormat);
        registry
    }

    /// 注册格式，同名覆盖
    pub fn register<F: CatalogueFormat + 'static>(&mut self, format: F) {
        self.formats.insert(format.name(), Arc::new(format));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn CatalogueFormat>> {
        self.formats.get(name).cloned()
    }

    pub fn supports(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// 所有格式名（按字母序）
    pub fn names(&self) -> Vec<String> {
        self.formats.keys().map(|name| name.to_string()).collect()
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("formats", &self.names())
            .finish()
    }
}
