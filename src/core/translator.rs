// ============================================================================
// TransHelper - 底层翻译器
// ============================================================================
//
// 文件: src/core/translator.rs
// 职责: 从目录文件加载消息并按语言回退链查找翻译
// 边界:
//   - ✅ 翻译器 trait 定义
//   - ✅ 目录文件扫描与加载
//   - ✅ 语言回退链计算（fr_CH -> fr -> 配置的回退语言）
//   - ❌ 不应包含缺失键创建逻辑
//   - ❌ 不应包含装饰逻辑
//
// ============================================================================

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::format::{FormatError, FormatRegistry};
use crate::models::catalogue::MessageCatalogue;

/// 翻译器错误
#[derive(Debug, thiserror::Error)]
pub enum TranslatorError {
    #[error("读取 {path} 失败: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("解析 {path} 失败: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

/// 翻译查找能力
pub trait Translator {
    /// 查找翻译，未翻译时按约定原样返回 `id`
    fn translate(&self, id: &str, domain: &str, locale: &str) -> String;

    /// 构建指定语言的消息目录（含回退链）
    fn catalogue(&self, locale: &str) -> Result<MessageCatalogue, TranslatorError>;
}

/// 目录文件名拆分为 (domain, locale, format)
pub fn parse_catalogue_filename(file_name: &str) -> Option<(&str, &str, &str)> {
    let mut parts = file_name.rsplitn(3, '.');
    let format = parts.next()?;
    let locale = parts.next()?;
    let domain = parts.next()?;
    if domain.is_empty() || locale.is_empty() {
        return None;
    }
    Some((domain, locale, format))
}

/// 基于文件系统的翻译器
#[derive(Debug, Clone)]
pub struct FileTranslator {
    /// 目录文件所在目录
    resource_dir: PathBuf,
    /// 可识别的格式
    registry: FormatRegistry,
    /// 配置的回退语言
    fallback_locales: Vec<String>,
}

impl FileTranslator {
    pub fn new<P: Into<PathBuf>>(resource_dir: P, registry: FormatRegistry) -> Self {
        Self {
            resource_dir: resource_dir.into(),
            registry,
            fallback_locales: Vec::new(),
        }
    }

    /// 设置回退语言
    pub fn with_fallback_locales(mut self, fallback_locales: Vec<String>) -> Self {
        self.fallback_locales = fallback_locales;
        self
    }

    pub fn resource_dir(&self) -> &Path {
        &self.resource_dir
    }

    pub fn set_resource_dir<P: Into<PathBuf>>(&mut self, resource_dir: P) {
        self.resource_dir = resource_dir.into();
    }

    pub fn fallback_locales(&self) -> &[String] {
        &self.fallback_locales
    }

    /// 计算回退链，不含 `locale` 自身
    ///
    /// 带地区的语言先回退到其父语言（`fr_CH` -> `fr`），再依次尝试配置的回退语言。
    pub fn compute_fallback_locales(&self, locale: &str) -> Vec<String> {
        let mut locales: Vec<String> = Vec::new();

        if let Some(pos) = locale.rfind('_') {
            locales.push(locale[..pos].to_string());
        }
        for fallback in &self.fallback_locales {
            if fallback != locale {
                locales.push(fallback.clone());
            }
        }

        let mut unique = Vec::with_capacity(locales.len());
        for candidate in locales {
            if !unique.contains(&candidate) {
                unique.push(candidate);
            }
        }
        unique
    }

    /// 加载单个语言的消息（不含回退链）
    fn load_locale(&self, locale: &str) -> Result<MessageCatalogue, TranslatorError> {
        let mut catalogue = MessageCatalogue::new(locale);
        if !self.resource_dir.is_dir() {
            return Ok(catalogue);
        }

        let entries = fs::read_dir(&self.resource_dir).map_err(|source| TranslatorError::Io {
            path: self.resource_dir.clone(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| TranslatorError::Io {
                path: self.resource_dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        // 同一 domain 存在多种格式时按文件名顺序合并
        files.sort();

        for path in files {
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some((domain, file_locale, format)) = parse_catalogue_filename(file_name) else {
                continue;
            };
            if file_locale != locale {
                continue;
            }
            let Some(handler) = self.registry.get(format) else {
                continue;
            };

            // 单个文件损坏只跳过该文件，不影响同语言的其他 domain
            let loaded = fs::read_to_string(&path)
                .map_err(|source| TranslatorError::Io {
                    path: path.clone(),
                    source,
                })
                .and_then(|content| {
                    handler
                        .load(&content)
                        .map_err(|source| TranslatorError::Format {
                            path: path.clone(),
                            source,
                        })
                });
            let messages = match loaded {
                Ok(messages) => messages,
                Err(e) => {
                    warn!(error = %e, "跳过无法加载的目录文件");
                    continue;
                }
            };
            debug!(path = %path.display(), entries = messages.len(), "目录文件已加载");
            catalogue.add(messages, domain);
        }

        Ok(catalogue)
    }
}

impl Translator for FileTranslator {
    fn translate(&self, id: &str, domain: &str, locale: &str) -> String {
        match self.catalogue(locale) {
            Ok(catalogue) => catalogue
                .get(id, domain)
                .map(str::to_string)
                .unwrap_or_else(|| id.to_string()),
            Err(e) => {
                warn!(locale, error = %e, "加载目录失败，按未翻译处理");
                id.to_string()
            }
        }
    }

    fn catalogue(&self, locale: &str) -> Result<MessageCatalogue, TranslatorError> {
        let mut primary = self.load_locale(locale)?;

        // 从链尾开始逐级挂接回退目录
        let mut fallback: Option<MessageCatalogue> = None;
        for fallback_locale in self.compute_fallback_locales(locale).iter().rev() {
            let mut catalogue = self.load_locale(fallback_locale)?;
            if let Some(next) = fallback.take() {
                catalogue.set_fallback_catalogue(next);
            }
            fallback = Some(catalogue);
        }
        if let Some(fallback) = fallback {
            primary.set_fallback_catalogue(fallback);
        }

        Ok(primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn translator(dir: &TempDir) -> FileTranslator {
        FileTranslator::new(dir.path(), FormatRegistry::with_defaults())
    }

    #[test]
    fn parses_catalogue_filenames() {
        assert_eq!(
            parse_catalogue_filename("Test.fr_CH.yml"),
            Some(("Test", "fr_CH", "yml"))
        );
        assert_eq!(
            parse_catalogue_filename("app.admin.en.json"),
            Some(("app.admin", "en", "json"))
        );
        assert_eq!(parse_catalogue_filename("README"), None);
        assert_eq!(parse_catalogue_filename("fr.yml"), None);
    }

    #[test]
    fn fallback_chain_includes_parent_then_configured() {
        let dir = TempDir::new().unwrap();
        let translator =
            translator(&dir).with_fallback_locales(vec!["en".to_string(), "fr".to_string()]);

        assert_eq!(translator.compute_fallback_locales("fr_CH"), vec!["fr", "en"]);
        assert_eq!(translator.compute_fallback_locales("en"), vec!["fr"]);
        assert_eq!(translator.compute_fallback_locales("de"), vec!["en", "fr"]);
    }

    #[test]
    fn translates_from_files_and_returns_id_when_missing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Test.fr.yml"), "hello: bonjour\n").unwrap();
        fs::write(dir.path().join("Test.fr.yml~"), "hello: stale\n").unwrap();
        let translator = translator(&dir);

        assert_eq!(translator.translate("hello", "Test", "fr"), "bonjour");
        assert_eq!(translator.translate("missing", "Test", "fr"), "missing");
        assert_eq!(translator.translate("hello", "Other", "fr"), "hello");
    }

    #[test]
    fn regional_locale_falls_back_to_parent() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Test.fr.yml"), "hello: bonjour\n").unwrap();
        let translator = translator(&dir);

        assert_eq!(translator.translate("hello", "Test", "fr_CH"), "bonjour");
        let catalogue = translator.catalogue("fr_CH").unwrap();
        assert_eq!(catalogue.fallback_catalogue().map(|c| c.locale()), Some("fr"));
        assert!(!catalogue.defines("hello", "Test"));
    }

    #[test]
    fn missing_resource_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let translator = FileTranslator::new(dir.path().join("nope"), FormatRegistry::with_defaults());
        assert!(translator.catalogue("fr").unwrap().is_empty());
    }

    #[test]
    fn malformed_file_does_not_hide_other_domains() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Test.fr.yml"), "hello: bonjour\n").unwrap();
        fs::write(dir.path().join("Other.fr.yml"), "key: [unclosed\n").unwrap();
        fs::write(dir.path().join("Broken.fr.json"), "{ broken").unwrap();
        let translator = translator(&dir);

        let catalogue = translator.catalogue("fr").unwrap();
        assert_eq!(catalogue.get("hello", "Test"), Some("bonjour"));
        assert!(catalogue.all("Other").is_none());
        assert_eq!(translator.translate("hello", "Test", "fr"), "bonjour");
    }

    #[test]
    fn malformed_fallback_file_keeps_fallback_values() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Test.fr.yml"), "hello: bonjour\n").unwrap();
        fs::write(dir.path().join("Other.fr.yml"), "- not\n- a mapping\n").unwrap();
        let translator = translator(&dir);

        assert_eq!(translator.translate("hello", "Test", "fr_CH"), "bonjour");
    }
}
