// ============================================================================
// TransHelper - 键名与数据规范化
// ============================================================================
//
// 文件: src/core/normalize.rs
// 职责: 嵌套数据扁平化、键名规范化与首字母处理
// 边界:
//   - ✅ 嵌套映射扁平化（点路径 / 末段键）
//   - ✅ 驼峰转下划线键名
//   - ✅ 点路径末段提取
//   - ❌ 不应包含文件读取逻辑
//   - ❌ 不应包含缓存逻辑
//
// ============================================================================

use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// 扁平化后的键值表
pub type FlatMap = BTreeMap<String, String>;

static UPPERCASE: OnceLock<Regex> = OnceLock::new();

/// 把嵌套映射展开为 `a.b.c => value`
///
/// 序列按下标展开（`list.0`），空值被跳过。
pub fn normalize_data(data: &Mapping, path: &str) -> FlatMap {
    let mut result = FlatMap::new();
    for (key, value) in data {
        if let Some(key) = scalar_to_string(key) {
            flatten_with_path(value, &join_path(path, &key), &mut result);
        }
    }
    result
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn flatten_with_path(value: &Value, path: &str, result: &mut FlatMap) {
    match value {
        Value::Mapping(child) => {
            for (key, value) in child {
                if let Some(key) = scalar_to_string(key) {
                    flatten_with_path(value, &join_path(path, &key), result);
                }
            }
        }
        Value::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_with_path(item, &join_path(path, &index.to_string()), result);
            }
        }
        other => {
            if let Some(text) = scalar_to_string(other) {
                result.insert(path.to_string(), text);
            }
        }
    }
}

/// 把嵌套映射展开为 `末段键 => value`
///
/// 注意：不同分支下的同名末段键会互相覆盖，按文档顺序后写入者胜出。
/// 例如 `{a: {title: x}, b: {title: y}}` 展开后 `title => y`。
pub fn normalize_data_with_key(data: &Mapping) -> FlatMap {
    let mut result = FlatMap::new();
    for (key, value) in data {
        flatten_by_key(scalar_to_string(key), value, &mut result);
    }
    result
}

fn flatten_by_key(key: Option<String>, value: &Value, result: &mut FlatMap) {
    match value {
        Value::Mapping(child) => {
            for (key, value) in child {
                flatten_by_key(scalar_to_string(key), value, result);
            }
        }
        Value::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_by_key(Some(index.to_string()), item, result);
            }
        }
        other => {
            if let (Some(key), Some(text)) = (key, scalar_to_string(other)) {
                result.insert(key, text);
            }
        }
    }
}

/// 标量转字符串，空值与复合值返回 None
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Mapping(_) | Value::Sequence(_) => None,
    }
}

/// 取点路径的最后一段：`menu.file.open` -> `open`
pub fn separate_key_from_path(id: &str) -> &str {
    id.rsplit('.').next().unwrap_or(id)
}

/// 首字母大写
pub fn uc_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 首字母小写
pub fn lc_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 驼峰键名转小写下划线：`TestTrans!` -> `test_trans!`
pub fn normalize_key(id: &str) -> String {
    let uppercase = UPPERCASE.get_or_init(|| Regex::new("[A-Z]").expect("静态正则表达式有效"));
    uppercase
        .replace_all(&lc_first(id), "_$0")
        .to_lowercase()
}
