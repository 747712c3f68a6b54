// ============================================================================
// TransHelper - 目录写入器
// ============================================================================
//
// 文件: src/core/writer.rs
// 职责: 把消息目录持久化为 `{path}/{domain}.{locale}.{format}` 文件
// 边界:
//   - ✅ 写入器 trait 定义
//   - ✅ 文件写入、备份文件生成
//   - ✅ 与已有文件内容增量合并
//   - ❌ 不应包含缺失键创建逻辑
//   - ❌ 不应包含备份保留策略
//
// ============================================================================

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::format::{FormatError, FormatRegistry};
use crate::models::catalogue::{MessageCatalogue, Messages};

/// 写入错误
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    #[error("不支持的目录格式: {0}")]
    UnknownFormat(String),

    #[error("写入 {path} 失败: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("处理 {path} 失败: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

/// 写入选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// 目标目录
    pub path: PathBuf,
    /// 覆盖前是否生成 `~` 备份文件
    pub backup: bool,
}

impl WriteOptions {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            backup: true,
        }
    }

    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }
}

/// 目录写入能力
pub trait TranslationWriter {
    /// 支持的格式名
    fn formats(&self) -> Vec<String>;

    /// 按 domain 写入目录，返回写入的文件路径
    fn write(
        &self,
        catalogue: &MessageCatalogue,
        format: &str,
        options: &WriteOptions,
    ) -> Result<Vec<PathBuf>, WriterError>;
}

/// 目录文件路径：`{dir}/{domain}.{locale}.{format}`
pub fn catalogue_path(dir: &Path, domain: &str, locale: &str, format: &str) -> PathBuf {
    dir.join(format!("{}.{}.{}", domain, locale, format))
}

/// 备份文件路径：`{dir}/{domain}.{locale}.{format}~`
pub fn backup_path(dir: &Path, domain: &str, locale: &str, format: &str) -> PathBuf {
    dir.join(format!("{}.{}.{}~", domain, locale, format))
}

/// 基于文件系统的写入器
///
/// 新消息与目标文件中已有的消息合并后整体覆盖写入，同名键以新值为准。
#[derive(Debug, Clone)]
pub struct FileTranslationWriter {
    registry: FormatRegistry,
}

impl FileTranslationWriter {
    pub fn new(registry: FormatRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }
}

impl Default for FileTranslationWriter {
    fn default() -> Self {
        Self::new(FormatRegistry::with_defaults())
    }
}

impl TranslationWriter for FileTranslationWriter {
    fn formats(&self) -> Vec<String> {
        self.registry.names()
    }

    fn write(
        &self,
        catalogue: &MessageCatalogue,
        format: &str,
        options: &WriteOptions,
    ) -> Result<Vec<PathBuf>, WriterError> {
        let handler = self
            .registry
            .get(format)
            .ok_or_else(|| WriterError::UnknownFormat(format.to_string()))?;

        fs::create_dir_all(&options.path).map_err(|source| WriterError::Io {
            path: options.path.clone(),
            source,
        })?;

        let mut written = Vec::new();
        for domain in catalogue.domains() {
            let target = catalogue_path(&options.path, domain, catalogue.locale(), format);
            let mut merged = Messages::new();

            if target.exists() {
                if options.backup {
                    let backup = backup_path(&options.path, domain, catalogue.locale(), format);
                    fs::copy(&target, &backup).map_err(|source| WriterError::Io {
                        path: backup.clone(),
                        source,
                    })?;
                }
                let existing = fs::read_to_string(&target).map_err(|source| WriterError::Io {
                    path: target.clone(),
                    source,
                })?;
                merged = handler
                    .load(&existing)
                    .map_err(|source| WriterError::Format {
                        path: target.clone(),
                        source,
                    })?;
            }

            if let Some(messages) = catalogue.all(domain) {
                merged.extend(messages.iter().map(|(k, v)| (k.clone(), v.clone())));
            }

            let content = handler
                .dump(&merged)
                .map_err(|source| WriterError::Format {
                    path: target.clone(),
                    source,
                })?;
            fs::write(&target, content).map_err(|source| WriterError::Io {
                path: target.clone(),
                source,
            })?;

            debug!(path = %target.display(), entries = merged.len(), "目录文件已写入");
            written.push(target);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn catalogue(locale: &str, domain: &str, pairs: &[(&str, &str)]) -> MessageCatalogue {
        let mut catalogue = MessageCatalogue::new(locale);
        for (k, v) in pairs {
            catalogue.set(*k, *v, domain);
        }
        catalogue
    }

    #[test]
    fn writes_one_file_per_domain() {
        let dir = TempDir::new().unwrap();
        let writer = FileTranslationWriter::default();
        let mut cat = catalogue("fr", "Test", &[("a", "1")]);
        cat.set("b", "2", "admin");

        let written = writer
            .write(&cat, "yml", &WriteOptions::new(dir.path()))
            .unwrap();

        assert_eq!(written.len(), 2);
        assert!(dir.path().join("Test.fr.yml").exists());
        assert!(dir.path().join("admin.fr.yml").exists());
    }

    #[test]
    fn merges_with_existing_file_and_keeps_backup() {
        let dir = TempDir::new().unwrap();
        let writer = FileTranslationWriter::default();
        let options = WriteOptions::new(dir.path());

        writer
            .write(&catalogue("fr", "Test", &[("a", "1")]), "json", &options)
            .unwrap();
        writer
            .write(&catalogue("fr", "Test", &[("b", "2")]), "json", &options)
            .unwrap();

        let content = fs::read_to_string(dir.path().join("Test.fr.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value, serde_json::json!({"a": "1", "b": "2"}));

        let backup = fs::read_to_string(backup_path(dir.path(), "Test", "fr", "json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&backup).unwrap();
        assert_eq!(value, serde_json::json!({"a": "1"}));
    }

    #[test]
    fn no_backup_when_disabled() {
        let dir = TempDir::new().unwrap();
        let writer = FileTranslationWriter::default();
        let options = WriteOptions::new(dir.path()).with_backup(false);

        writer
            .write(&catalogue("fr", "Test", &[("a", "1")]), "yml", &options)
            .unwrap();
        writer
            .write(&catalogue("fr", "Test", &[("a", "2")]), "yml", &options)
            .unwrap();

        assert!(!backup_path(dir.path(), "Test", "fr", "yml").exists());
    }

    #[test]
    fn unknown_format_is_rejected() {
        let dir = TempDir::new().unwrap();
        let writer = FileTranslationWriter::default();
        let result = writer.write(
            &catalogue("fr", "Test", &[("a", "1")]),
            "xliff",
            &WriteOptions::new(dir.path()),
        );
        assert!(matches!(result, Err(WriterError::UnknownFormat(f)) if f == "xliff"));
    }

    #[test]
    fn unwritable_target_is_io_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();

        let writer = FileTranslationWriter::default();
        let result = writer.write(
            &catalogue("fr", "Test", &[("a", "1")]),
            "yml",
            &WriteOptions::new(&blocker),
        );
        assert!(matches!(result, Err(WriterError::Io { .. })));
    }
}
