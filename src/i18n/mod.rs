// ============================================================================
// TransHelper - 国际化模块
// ============================================================================
//
// 文件: src/i18n/mod.rs
// 职责: CLI 界面文本的国际化支持
// 边界:
//   - ✅ 翻译表选择和查找
//   - ✅ 翻译宏定义和实现
//   - ✅ 界面语言切换
//   - ✅ 参数化翻译支持
//   - ❌ 不应包含具体翻译内容
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含目录文件操作
//
// ============================================================================

pub mod en_us;
pub mod zh_cn;

use std::sync::{OnceLock, RwLock};

/// 当前界面语言
static LANGUAGE: OnceLock<RwLock<String>> = OnceLock::new();

fn language_slot() -> &'static RwLock<String> {
    LANGUAGE.get_or_init(|| RwLock::new("en_us".to_string()))
}

/// 设置界面语言
pub fn set_language(language: &str) {
    if let Ok(mut current) = language_slot().write() {
        *current = language.to_lowercase();
    }
}

/// 获取界面语言
pub fn current_language() -> String {
    language_slot()
        .read()
        .map(|language| language.clone())
        .unwrap_or_else(|_| "en_us".to_string())
}

/// 获取翻译文本
pub fn get_translation(key: &str) -> String {
    let translation_data = match current_language().as_str() {
        "zh_cn" => zh_cn::TRANSLATIONS,
        _ => en_us::TRANSLATIONS, // 默认使用英文
    };

    translation_data
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
        .unwrap_or_else(|| format!("Unknown translation key: {}", key))
}

/// 简单翻译宏
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::get_translation($key)
    };
}

/// 带参数翻译的辅助函数
pub fn format_with_args(template: String, args: Vec<String>) -> String {
    let mut result = template;
    for arg in args.iter() {
        // 替换第一个 {} 占位符
        if let Some(pos) = result.find("{}") {
            result.replace_range(pos..pos + 2, arg);
        }
    }
    result
}

/// 带参数的翻译宏
#[macro_export]
macro_rules! tf {
    ($key:expr, $($arg:expr),*) => {{
        let template = $crate::i18n::get_translation($key);
        let args = vec![$(format!("{}", $arg)),*];
        $crate::i18n::format_with_args(template, args)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_english_key_has_chinese_counterpart() {
        for (key, _) in en_us::TRANSLATIONS {
            assert!(
                zh_cn::TRANSLATIONS.iter().any(|(k, _)| k == key),
                "missing zh_cn key: {}",
                key
            );
        }
        assert_eq!(en_us::TRANSLATIONS.len(), zh_cn::TRANSLATIONS.len());
    }

    #[test]
    fn format_fills_placeholders_in_order() {
        let result = format_with_args("{} => {}".to_string(), vec!["a".into(), "b".into()]);
        assert_eq!(result, "a => b");
    }

    #[test]
    fn unknown_key_is_reported() {
        assert_eq!(
            get_translation("no.such.key"),
            "Unknown translation key: no.such.key"
        );
    }
}
