// ============================================================================
// TransHelper - 消息目录数据模型
// ============================================================================
//
// 文件: src/models/catalogue.rs
// 职责: 单语言消息目录（domain -> key -> value）及其回退链
// 边界:
//   - ✅ 消息的增删查
//   - ✅ 回退目录链查找
//   - ❌ 不应包含文件解析逻辑
//   - ❌ 不应包含缺失键创建逻辑
//
// ============================================================================

use std::collections::BTreeMap;

/// 单个 domain 下的消息表
pub type Messages = BTreeMap<String, String>;

/// 某一语言的消息目录
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalogue {
    /// 语言标识，如 `fr`、`fr_CH`
    locale: String,
    /// domain -> 消息表
    messages: BTreeMap<String, Messages>,
    /// 回退目录（另一语言）
    fallback: Option<Box<MessageCatalogue>>,
}

impl MessageCatalogue {
    /// 创建空目录
    pub fn new<S: Into<String>>(locale: S) -> Self {
        Self {
            locale: locale.into(),
            messages: BTreeMap::new(),
            fallback: None,
        }
    }

    /// 使用已有消息创建目录
    pub fn with_messages<S: Into<String>>(locale: S, messages: BTreeMap<String, Messages>) -> Self {
        Self {
            locale: locale.into(),
            messages,
            fallback: None,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// 所有 domain 名称
    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// 指定 domain 的全部消息（不含回退目录）
    pub fn all(&self, domain: &str) -> Option<&Messages> {
        self.messages.get(domain)
    }

    /// 设置单条消息
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, id: K, value: V, domain: &str) {
        self.messages
            .entry(domain.to_string())
            .or_default()
            .insert(id.into(), value.into());
    }

    /// 批量合并消息，同名键覆盖
    pub fn add(&mut self, messages: Messages, domain: &str) {
        self.messages
            .entry(domain.to_string())
            .or_default()
            .extend(messages);
    }

    /// 当前目录自身是否定义了该键
    pub fn defines(&self, id: &str, domain: &str) -> bool {
        self.messages
            .get(domain)
            .map_or(false, |messages| messages.contains_key(id))
    }

    /// 当前目录或回退链中是否存在该键
    pub fn has(&self, id: &str, domain: &str) -> bool {
        self.get(id, domain).is_some()
    }

    /// 查找消息，沿回退链逐级查找
    pub fn get(&self, id: &str, domain: &str) -> Option<&str> {
        if let Some(value) = self.messages.get(domain).and_then(|m| m.get(id)) {
            return Some(value.as_str());
        }
        self.fallback
            .as_deref()
            .and_then(|fallback| fallback.get(id, domain))
    }

    pub fn fallback_catalogue(&self) -> Option<&MessageCatalogue> {
        self.fallback.as_deref()
    }

    pub fn set_fallback_catalogue(&mut self, fallback: MessageCatalogue) {
        self.fallback = Some(Box::new(fallback));
    }

    /// 消息总数（不含回退目录）
    pub fn len(&self) -> usize {
        self.messages.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
