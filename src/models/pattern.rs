// ============================================================================
// TransHelper - 装饰模板
// ============================================================================
//
// 文件: src/models/pattern.rs
// 职责: 单占位符装饰模板的解析、校验与应用
// 边界:
//   - ✅ 模板占位符计数与校验
//   - ✅ 模板应用（sprintf 风格 %s / %%）
//   - ❌ 不应包含翻译查找逻辑
//   - ❌ 不应包含文件读写逻辑
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 模板错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// 占位符数量不是 1
    #[error("装饰模板 '{pattern}' 必须且只能包含一个 %s 占位符，实际为 {count} 个")]
    SlotCount { pattern: String, count: usize },
}

/// 装饰模板，例如 `__%s`、`!!!%s???`
///
/// 只接受一个 `%s` 占位符，`%%` 表示字面量 `%`。
/// 其他 `%` 序列（如 `%d`、`%5s`）不是格式说明符，按字面文本原样保留。
/// 应用时被包裹的值原样插入，不会再次解析其中的 `%`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DecorationPattern {
    raw: String,
}

/// 模板片段
enum Segment<'a> {
    Literal(&'a str),
    Percent,
    Slot,
}

impl DecorationPattern {
    /// 创建并校验模板
    pub fn new<S: Into<String>>(raw: S) -> Result<Self, PatternError> {
        let raw = raw.into();
        let count = segments(&raw)
            .iter()
            .filter(|segment| matches!(segment, Segment::Slot))
            .count();
        if count != 1 {
            return Err(PatternError::SlotCount {
                pattern: raw,
                count,
            });
        }
        Ok(Self { raw })
    }

    /// 原样输出的模板 `%s`
    pub fn identity() -> Self {
        Self {
            raw: "%s".to_string(),
        }
    }

    /// 创建器默认模板 `__%s`
    pub fn creator_default() -> Self {
        Self {
            raw: "__%s".to_string(),
        }
    }

    /// 模板原文
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// 把值代入模板
    pub fn apply(&self, value: &str) -> String {
        let mut result = String::with_capacity(self.raw.len() + value.len());
        for segment in segments(&self.raw) {
            match segment {
                Segment::Literal(text) => result.push_str(text),
                Segment::Percent => result.push('%'),
                Segment::Slot => result.push_str(value),
            }
        }
        result
    }
}

/// 切分模板：`%s` 为占位符，`%%` 为字面量百分号，其余 `%` 原样保留
fn segments(raw: &str) -> Vec<Segment<'_>> {
    let mut parts = Vec::new();
    let bytes = raw.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 1 < bytes.len() && matches!(bytes[i + 1], b's' | b'%') {
            if start < i {
                parts.push(Segment::Literal(&raw[start..i]));
            }
            parts.push(if bytes[i + 1] == b's' {
                Segment::Slot
            } else {
                Segment::Percent
            });
            i += 2;
            start = i;
        } else {
            i += 1;
        }
    }
    if start < raw.len() {
        parts.push(Segment::Literal(&raw[start..]));
    }
    parts
}

impl Default for DecorationPattern {
    fn default() -> Self {
        Self::identity()
    }
}

impl FromStr for DecorationPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DecorationPattern {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DecorationPattern> for String {
    fn from(pattern: DecorationPattern) -> Self {
        pattern.raw
    }
}

impl fmt::Display for DecorationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_single_slot() {
        let pattern = DecorationPattern::new("!!!%s???").unwrap();
        assert_eq!(pattern.apply("testtrans"), "!!!testtrans???");
    }

    #[test]
    fn identity_returns_value() {
        assert_eq!(DecorationPattern::identity().apply("testtrans"), "testtrans");
    }

    #[test]
    fn rejects_missing_or_extra_slots() {
        assert_eq!(
            DecorationPattern::new("plain"),
            Err(PatternError::SlotCount {
                pattern: "plain".to_string(),
                count: 0
            })
        );
        assert!(DecorationPattern::new("%s-%s").is_err());
    }

    #[test]
    fn escaped_percent_is_not_a_slot() {
        let pattern = DecorationPattern::new("100%% %s").unwrap();
        assert_eq!(pattern.apply("done"), "100% done");
        assert!(DecorationPattern::new("%%s").is_err());
    }

    #[test]
    fn other_percent_sequences_are_literal() {
        let pattern = DecorationPattern::new("%d: %s (50%)").unwrap();
        assert_eq!(pattern.apply("key"), "%d: key (50%)");
        assert!(DecorationPattern::new("%d").is_err());
    }

    #[test]
    fn value_is_inserted_verbatim() {
        let pattern = DecorationPattern::new("[%s]").unwrap();
        assert_eq!(pattern.apply("50%s"), "[50%s]");
    }

    #[test]
    fn deserializes_with_validation() {
        let ok: DecorationPattern = serde_json::from_str("\"__%s\"").unwrap();
        assert_eq!(ok, DecorationPattern::creator_default());
        assert!(serde_json::from_str::<DecorationPattern>("\"nothing\"").is_err());
    }
}
