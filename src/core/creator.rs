// ============================================================================
// TransHelper - 缺失翻译创建器
// ============================================================================
//
// 文件: src/core/creator.rs
// 职责: 为缺失的翻译键确定取值并持久化到目录文件
// 边界:
//   - ✅ 默认值文件加载与缓存
//   - ✅ 取值回退链（完整键 -> 末段键 -> 装饰键名）
//   - ✅ 单条目增量写入与备份文件清理
//   - ❌ 不应包含翻译查找逻辑
//   - ❌ 不应包含目录文件格式细节
//
// 取值顺序:
// 1. 主语言默认值文件中的完整点路径键
// 2. 回退语言默认值文件中的完整点路径键
// 3. 主语言、回退语言默认值文件中的末段键
// 4. 用装饰模板包裹（可选首字母大写）的键名
//
// ============================================================================

use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::cache::LazyCache;
use super::normalize::{
    normalize_data, normalize_data_with_key, separate_key_from_path, uc_first, FlatMap,
};
use super::writer::{backup_path, TranslationWriter, WriteOptions, WriterError};
use crate::models::catalogue::MessageCatalogue;
use crate::models::pattern::DecorationPattern;

/// 创建器错误
#[derive(Debug, thiserror::Error)]
pub enum CreatorError {
    #[error("不支持的格式 '{format}'，支持的格式: {}", .supported.join(", "))]
    UnsupportedFormat {
        format: String,
        supported: Vec<String>,
    },

    #[error(transparent)]
    Writer(#[from] WriterError),

    #[error("删除备份文件 {path} 失败: {source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 缺失翻译创建能力
pub trait Creator {
    /// 为缺失的 `id` 创建翻译，写回 `catalogue` 并持久化，返回创建的值
    fn create_translation(
        &mut self,
        id: &str,
        domain: &str,
        locale: &str,
        catalogue: &mut MessageCatalogue,
    ) -> Result<String, CreatorError>;
}

/// 单个默认值文件的扁平化索引
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultValueIndex {
    /// 完整点路径 -> 值
    by_path: FlatMap,
    /// 末段键 -> 值（同名键后写入者胜出）
    by_key: FlatMap,
}

impl DefaultValueIndex {
    pub fn from_mapping(data: &serde_yaml::Mapping) -> Self {
        Self {
            by_path: normalize_data(data, ""),
            by_key: normalize_data_with_key(data),
        }
    }

    pub fn by_path(&self) -> &FlatMap {
        &self.by_path
    }

    pub fn by_key(&self) -> &FlatMap {
        &self.by_key
    }

    /// 按完整点路径查找，空字符串视为未找到
    pub fn lookup_path(&self, key: &str) -> Option<&str> {
        non_empty(self.by_path.get(key))
    }

    /// 按末段键查找，空字符串视为未找到
    pub fn lookup_key(&self, key: &str) -> Option<&str> {
        non_empty(self.by_key.get(key))
    }
}

/// 只有空字符串视为未找到，`"0"` 这样的假值字符串仍然有效
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// 默认值查找方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    Path,
    Key,
}

/// 解析默认值文件，不存在或无法解析为映射时返回 None
fn load_default_index(filename: &PathBuf) -> Option<DefaultValueIndex> {
    if !filename.is_file() {
        debug!(path = %filename.display(), "默认值文件不存在");
        return None;
    }
    let content = match fs::read_to_string(filename) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %filename.display(), error = %e, "读取默认值文件失败");
            return None;
        }
    };
    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(mapping)) => {
            debug!(path = %filename.display(), "默认值文件已加载");
            Some(DefaultValueIndex::from_mapping(&mapping))
        }
        Ok(_) => {
            debug!(path = %filename.display(), "默认值文件根节点不是映射");
            None
        }
        Err(e) => {
            warn!(path = %filename.display(), error = %e, "默认值文件解析失败");
            None
        }
    }
}

/// 默认创建器
pub struct DefaultCreator {
    /// 目录写入器
    writer: Box<dyn TranslationWriter>,
    /// 写入格式
    format: String,
    /// 目录文件输出目录
    path: PathBuf,
    /// 装饰模板
    decorate: DecorationPattern,
    /// 是否保留写入器生成的备份文件
    backup: bool,
    /// 默认值文件所在目录
    default_yml: Option<PathBuf>,
    /// 默认值文件名前缀
    default_yml_filename: String,
    /// 装饰前是否首字母大写
    uc_first: bool,
    /// 默认值文件缓存
    file_default_value_data: LazyCache<PathBuf, Option<DefaultValueIndex>>,
}

impl DefaultCreator {
    /// 创建创建器，格式不被写入器支持时立即失败
    pub fn new<P: Into<PathBuf>>(
        writer: Box<dyn TranslationWriter>,
        format: &str,
        path: P,
    ) -> Result<Self, CreatorError> {
        let creator = Self {
            writer,
            format: format.to_string(),
            path: path.into(),
            decorate: DecorationPattern::creator_default(),
            backup: false,
            default_yml: None,
            default_yml_filename: "default".to_string(),
            uc_first: true,
            file_default_value_data: LazyCache::new(),
        };
        creator.ensure_supported(format)?;
        Ok(creator)
    }

    fn ensure_supported(&self, format: &str) -> Result<(), CreatorError> {
        let supported = self.writer.formats();
        if supported.iter().any(|f| f == format) {
            Ok(())
        } else {
            Err(CreatorError::UnsupportedFormat {
                format: format.to_string(),
                supported,
            })
        }
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn set_format(&mut self, format: &str) -> Result<(), CreatorError> {
        self.ensure_supported(format)?;
        self.format = format.to_string();
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_path<P: Into<PathBuf>>(&mut self, path: P) {
        self.path = path.into();
    }

    pub fn decorate_pattern(&self) -> &DecorationPattern {
        &self.decorate
    }

    /// 只影响之后创建的键，已持久化的值不变
    pub fn set_decorate(&mut self, decorate: DecorationPattern) {
        self.decorate = decorate;
    }

    pub fn set_backup(&mut self, backup: bool) {
        self.backup = backup;
    }

    pub fn set_default_yml<P: Into<PathBuf>>(&mut self, default_yml: Option<P>) {
        self.default_yml = default_yml.map(Into::into);
    }

    pub fn set_default_yml_filename<S: Into<String>>(&mut self, filename: S) {
        self.default_yml_filename = filename.into();
    }

    pub fn set_uc_first(&mut self, uc_first: bool) {
        self.uc_first = uc_first;
    }

    /// 默认值文件路径：`{default_yml}/{default_yml_filename}.{locale}.yml`
    pub fn default_filename(&self, locale: &str) -> Option<PathBuf> {
        self.default_yml
            .as_ref()
            .map(|dir| dir.join(format!("{}.{}.yml", self.default_yml_filename, locale)))
    }

    /// 读取（并缓存）默认值文件的扁平化索引
    pub fn file_default_value_data(
        &mut self,
        filename: &Path,
        force: bool,
    ) -> Option<&DefaultValueIndex> {
        self.file_default_value_data
            .get_or_load(filename.to_path_buf(), load_default_index, force)
            .as_ref()
    }

    /// 指定语言的默认值索引
    pub fn default_values(&mut self, locale: &str, force: bool) -> Option<&DefaultValueIndex> {
        let filename = self.default_filename(locale)?;
        self.file_default_value_data(&filename, force)
    }

    fn check_for_default_value(&mut self, key: &str, locale: &str, lookup: Lookup) -> Option<String> {
        let index = self.default_values(locale, false)?;
        let found = match lookup {
            Lookup::Path => index.lookup_path(key),
            Lookup::Key => index.lookup_key(key),
        };
        found.map(str::to_string)
    }

    /// 确定缺失键的取值
    pub fn resolve_value(&mut self, id: &str, catalogue: &MessageCatalogue) -> String {
        let locale = catalogue.locale().to_string();
        let fallback_locale = catalogue
            .fallback_catalogue()
            .map(|fallback| fallback.locale().to_string());
        let leaf = separate_key_from_path(id);

        let mut candidates = vec![(id, locale.as_str(), Lookup::Path)];
        if let Some(fallback) = fallback_locale.as_deref() {
            candidates.push((id, fallback, Lookup::Path));
        }
        candidates.push((leaf, locale.as_str(), Lookup::Key));
        if let Some(fallback) = fallback_locale.as_deref() {
            candidates.push((leaf, fallback, Lookup::Key));
        }

        for (key, candidate_locale, lookup) in candidates {
            if let Some(value) = self.check_for_default_value(key, candidate_locale, lookup) {
                debug!(id, locale = candidate_locale, ?lookup, "命中默认值");
                return value;
            }
        }

        self.decorate(id)
    }

    /// 用装饰模板包裹键名
    pub fn decorate(&self, id: &str) -> String {
        if self.uc_first {
            self.decorate.apply(&uc_first(id))
        } else {
            self.decorate.apply(id)
        }
    }
}

impl Creator for DefaultCreator {
    fn create_translation(
        &mut self,
        id: &str,
        domain: &str,
        locale: &str,
        catalogue: &mut MessageCatalogue,
    ) -> Result<String, CreatorError> {
        let value = self.resolve_value(id, catalogue);
        catalogue.set(id, value.as_str(), domain);

        // 只写入本次创建的条目
        let mut single = MessageCatalogue::new(locale);
        single.set(id, value.as_str(), domain);
        self.writer
            .write(&single, &self.format, &WriteOptions::new(&self.path))?;

        if !self.backup {
            let backup = backup_path(&self.path, domain, locale, &self.format);
            if backup.exists() {
                fs::remove_file(&backup).map_err(|source| CreatorError::Backup {
                    path: backup.clone(),
                    source,
                })?;
            }
        }

        info!(id, domain, locale, value = %value, "已创建缺失翻译");
        Ok(value)
    }
}

impl std::fmt::Debug for DefaultCreator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultCreator")
            .field("format", &self.format)
            .field("path", &self.path)
            .field("decorate", &self.decorate)
            .field("backup", &self.backup)
            .field("default_yml", &self.default_yml)
            .field("default_yml_filename", &self.default_yml_filename)
            .field("uc_first", &self.uc_first)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::writer::FileTranslationWriter;
    use tempfile::TempDir;

    fn creator(dir: &TempDir) -> DefaultCreator {
        DefaultCreator::new(
            Box::new(FileTranslationWriter::default()),
            "yml",
            dir.path().join("translations"),
        )
        .unwrap()
    }

    fn with_defaults(dir: &TempDir, files: &[(&str, &str)]) -> DefaultCreator {
        let defaults = dir.path().join("defaults");
        fs::create_dir_all(&defaults).unwrap();
        for (name, content) in files {
            fs::write(defaults.join(name), content).unwrap();
        }
        let mut creator = creator(dir);
        creator.set_default_yml(Some(defaults));
        creator
    }

    fn catalogue_with_fallback(locale: &str, fallback: &str) -> MessageCatalogue {
        let mut catalogue = MessageCatalogue::new(locale);
        catalogue.set_fallback_catalogue(MessageCatalogue::new(fallback));
        catalogue
    }

    #[test]
    fn unsupported_format_fails_fast() {
        let result = DefaultCreator::new(
            Box::new(FileTranslationWriter::default()),
            "xliff",
            "/tmp/unused",
        );
        match result {
            Err(CreatorError::UnsupportedFormat { format, supported }) => {
                assert_eq!(format, "xliff");
                assert_eq!(supported, vec!["json".to_string(), "yml".to_string()]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn set_format_validates() {
        let dir = TempDir::new().unwrap();
        let mut creator = creator(&dir);
        assert!(creator.set_format("json").is_ok());
        assert_eq!(creator.format(), "json");
        assert!(creator.set_format("php").is_err());
        assert_eq!(creator.format(), "json");
    }

    #[test]
    fn decorates_with_uc_first() {
        let dir = TempDir::new().unwrap();
        let mut creator = creator(&dir);
        assert_eq!(creator.decorate("hello"), "__Hello");

        creator.set_uc_first(false);
        creator.set_decorate(DecorationPattern::new("___%s").unwrap());
        assert_eq!(creator.decorate("test_trans!"), "___test_trans!");
    }

    #[test]
    fn resolves_full_key_from_primary_then_fallback() {
        let dir = TempDir::new().unwrap();
        let mut creator = with_defaults(
            &dir,
            &[
                ("default.fr_CH.yml", "menu:\n  open: Ouvrir (CH)\n"),
                ("default.fr.yml", "menu:\n  open: Ouvrir\n  quit: Quitter\n"),
            ],
        );
        let catalogue = catalogue_with_fallback("fr_CH", "fr");

        assert_eq!(creator.resolve_value("menu.open", &catalogue), "Ouvrir (CH)");
        assert_eq!(creator.resolve_value("menu.quit", &catalogue), "Quitter");
    }

    #[test]
    fn stripped_key_checks_primary_before_fallback() {
        let dir = TempDir::new().unwrap();
        let mut creator = with_defaults(
            &dir,
            &[
                ("default.fr_CH.yml", "other:\n  title: Titre CH\n"),
                ("default.fr.yml", "page:\n  title: Titre\n  subtitle: Sous-titre\n"),
            ],
        );
        let catalogue = catalogue_with_fallback("fr_CH", "fr");

        assert_eq!(creator.resolve_value("admin.title", &catalogue), "Titre CH");
        assert_eq!(creator.resolve_value("admin.subtitle", &catalogue), "Sous-titre");
    }

    #[test]
    fn full_path_in_fallback_beats_stripped_key_in_primary() {
        let dir = TempDir::new().unwrap();
        let mut creator = with_defaults(
            &dir,
            &[
                ("default.fr_CH.yml", "title: Titre CH\n"),
                ("default.fr.yml", "page:\n  title: Titre de page\n"),
            ],
        );
        let catalogue = catalogue_with_fallback("fr_CH", "fr");

        assert_eq!(creator.resolve_value("page.title", &catalogue), "Titre de page");
    }

    #[test]
    fn falls_back_to_decoration_when_nothing_found() {
        let dir = TempDir::new().unwrap();
        let mut creator = with_defaults(
            &dir,
            &[("default.fr.yml", "empty: ''\nbroken_elsewhere: x\n")],
        );
        let catalogue = MessageCatalogue::new("fr");

        assert_eq!(creator.resolve_value("empty", &catalogue), "__Empty");
        assert_eq!(creator.resolve_value("unknown.key", &catalogue), "__Unknown.key");
    }

    #[test]
    fn zero_string_is_a_valid_default() {
        let dir = TempDir::new().unwrap();
        let mut creator = with_defaults(&dir, &[("default.fr.yml", "count: '0'\nnone: ''\n")]);
        let catalogue = MessageCatalogue::new("fr");

        assert_eq!(creator.resolve_value("count", &catalogue), "0");
        assert_eq!(creator.resolve_value("none", &catalogue), "__None");
    }

    #[test]
    fn malformed_default_file_is_treated_as_absent() {
        let dir = TempDir::new().unwrap();
        let mut creator = with_defaults(
            &dir,
            &[("default.fr.yml", "key: [unclosed\n"), ("default.en.yml", "- a\n- b\n")],
        );

        assert!(creator.default_values("fr", false).is_none());
        assert!(creator.default_values("en", false).is_none());
        assert!(creator.default_values("de", false).is_none());
        assert_eq!(
            creator.resolve_value("key", &MessageCatalogue::new("fr")),
            "__Key"
        );
    }

    #[test]
    fn default_value_cache_only_reloads_when_forced() {
        let dir = TempDir::new().unwrap();
        let mut creator = with_defaults(&dir, &[("default.fr.yml", "title: Ancien\n")]);
        let file = creator.default_filename("fr").unwrap();

        assert_eq!(
            creator
                .file_default_value_data(&file, false)
                .and_then(|i| i.lookup_path("title")),
            Some("Ancien")
        );

        fs::write(&file, "title: Nouveau\n").unwrap();
        assert_eq!(
            creator
                .file_default_value_data(&file, false)
                .and_then(|i| i.lookup_path("title")),
            Some("Ancien")
        );
        assert_eq!(
            creator
                .file_default_value_data(&file, true)
                .and_then(|i| i.lookup_path("title")),
            Some("Nouveau")
        );
    }

    #[test]
    fn create_translation_persists_single_entry_and_drops_backup() {
        let dir = TempDir::new().unwrap();
        let mut creator = creator(&dir);
        let mut catalogue = MessageCatalogue::new("fr");
        catalogue.set("existing", "déjà là", "Test");

        let value = creator
            .create_translation("hello", "Test", "fr", &mut catalogue)
            .unwrap();
        assert_eq!(value, "__Hello");
        assert_eq!(catalogue.get("hello", "Test"), Some("__Hello"));

        let target = dir.path().join("translations").join("Test.fr.yml");
        let written = fs::read_to_string(&target).unwrap();
        assert!(written.contains("hello"));
        assert!(!written.contains("existing"));

        creator
            .create_translation("bye", "Test", "fr", &mut catalogue)
            .unwrap();
        let written = fs::read_to_string(&target).unwrap();
        assert!(written.contains("hello"));
        assert!(written.contains("bye"));
        assert!(!dir.path().join("translations").join("Test.fr.yml~").exists());
    }

    #[test]
    fn create_translation_keeps_backup_when_enabled() {
        let dir = TempDir::new().unwrap();
        let mut creator = creator(&dir);
        creator.set_backup(true);
        let mut catalogue = MessageCatalogue::new("fr");

        creator
            .create_translation("a", "Test", "fr", &mut catalogue)
            .unwrap();
        creator
            .create_translation("b", "Test", "fr", &mut catalogue)
            .unwrap();

        assert!(dir.path().join("translations").join("Test.fr.yml~").exists());
    }

    #[test]
    fn create_translation_propagates_write_errors() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let mut creator = creator(&dir);
        creator.set_path(&blocker);

        let result = creator.create_translation("a", "Test", "fr", &mut MessageCatalogue::new("fr"));
        assert!(matches!(result, Err(CreatorError::Writer(WriterError::Io { .. }))));
    }
}
