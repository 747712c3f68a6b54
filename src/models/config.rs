// ============================================================================
// TransHelper - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值与运行时参数合并
//   - ✅ 按配置组装写入器、创建器、翻译器与包装器
//   - ❌ 不应包含翻译查找逻辑
//   - ❌ 不应包含 CLI 参数处理
//
// ============================================================================

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::{
    DefaultCreator, FileTranslationWriter, FileTranslator, FormatRegistry, TransPolicy,
    TranslatorWrapper,
};
use crate::models::pattern::DecorationPattern;

/// TransHelper 配置文件结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 创建器配置
    #[serde(default)]
    pub creator: CreatorConfig,
    /// 翻译器配置
    #[serde(default)]
    pub translator: TranslatorConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 创建器配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatorConfig {
    /// 目录文件格式 (yml, json)
    pub format: String,
    /// 目录文件输出目录
    pub path: String,
    /// 创建值的装饰模板
    pub decorate: DecorationPattern,
    /// 是否保留 `~` 备份文件
    pub backup: bool,
    /// 默认值文件目录
    pub default_yml_dir: Option<String>,
    /// 默认值文件名前缀
    pub default_yml_filename: String,
    /// 装饰前是否首字母大写
    pub uc_first: bool,
}

/// 翻译器配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// 目录文件读取目录，未设置时使用创建器输出目录
    pub resource_dir: Option<String>,
    /// 回退语言
    pub fallback_locales: Vec<String>,
    /// 未命中时的装饰模板
    pub decorate: DecorationPattern,
    /// 缺失时是否创建
    pub create: bool,
    /// 是否规范化键名
    pub normalize: bool,
}

/// 输出配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// 是否详细输出
    pub verbose: bool,
    /// 是否彩色输出
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// 界面语言
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub language: Option<String>,
    pub path: Option<String>,
    pub format: Option<String>,
    pub default_yml_dir: Option<String>,
}

/// 配置默认值 trait
pub trait ConfigDefaults {
    /// 获取默认目录格式
    fn default_format() -> String {
        "yml".to_string()
    }

    /// 获取默认目录输出目录
    fn default_path() -> String {
        "translations".to_string()
    }

    /// 获取默认创建器装饰模板
    fn default_creator_decorate() -> DecorationPattern {
        DecorationPattern::creator_default()
    }

    /// 获取默认值文件名前缀
    fn default_yml_filename() -> String {
        "default".to_string()
    }

    /// 获取默认是否首字母大写
    fn default_uc_first() -> bool {
        true
    }

    /// 获取默认是否彩色输出
    fn default_colored() -> bool {
        true
    }

    /// 获取默认语言
    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 加载配置文件，文件不存在时使用默认配置
    pub fn load_from_file(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("读取配置文件失败: {}", config_path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {}", config_path.display()))?;
        Ok(config)
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
        if let Some(path) = args.path {
            // 读取目录跟随输出目录，新建的键才能被再次查到
            self.creator.path = path;
            self.translator.resource_dir = None;
        }
        if let Some(format) = args.format {
            self.creator.format = format;
        }
        if let Some(default_yml_dir) = args.default_yml_dir {
            self.creator.default_yml_dir = Some(default_yml_dir);
        }
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置模板
    pub fn generate_default_template() -> Self {
        let mut config = Self::default();
        config.creator.default_yml_dir = Some("translations/defaults".to_string());
        config.translator.fallback_locales = vec!["en".to_string()];
        config.translator.decorate =
            DecorationPattern::new("!!!%s").unwrap_or_else(|_| DecorationPattern::identity());
        config.translator.create = true;
        config
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &Path) -> anyhow::Result<()> {
        Self::generate_default_template().save_to_file(config_path)
    }

    /// 目录文件读取目录
    pub fn resource_dir(&self) -> PathBuf {
        PathBuf::from(
            self.translator
                .resource_dir
                .as_deref()
                .unwrap_or(&self.creator.path),
        )
    }

    /// 按配置组装创建器
    pub fn build_creator(&self) -> anyhow::Result<DefaultCreator> {
        let writer = FileTranslationWriter::new(FormatRegistry::with_defaults());
        let mut creator =
            DefaultCreator::new(Box::new(writer), &self.creator.format, &self.creator.path)?;
        creator.set_decorate(self.creator.decorate.clone());
        creator.set_backup(self.creator.backup);
        creator.set_default_yml(self.creator.default_yml_dir.as_deref());
        creator.set_default_yml_filename(self.creator.default_yml_filename.as_str());
        creator.set_uc_first(self.creator.uc_first);
        Ok(creator)
    }

    /// 按配置组装翻译器
    pub fn build_translator(&self) -> FileTranslator {
        FileTranslator::new(self.resource_dir(), FormatRegistry::with_defaults())
            .with_fallback_locales(self.translator.fallback_locales.clone())
    }

    /// 按配置组装翻译器包装
    ///
    /// 开启创建时读取目录必须与输出目录一致
    pub fn build_wrapper(&self) -> anyhow::Result<TranslatorWrapper<FileTranslator, DefaultCreator>> {
        let resource_dir = self.resource_dir();
        let output_dir = PathBuf::from(&self.creator.path);
        if self.translator.create && resource_dir != output_dir {
            anyhow::bail!(
                "翻译器读取目录 {} 与创建器输出目录 {} 不一致，新建的键将无法被查到",
                resource_dir.display(),
                output_dir.display()
            );
        }
        let policy = TransPolicy {
            create: self.translator.create,
            normalize: self.translator.normalize,
            decorate: self.translator.decorate.clone(),
        };
        Ok(TranslatorWrapper::new(self.build_translator(), self.build_creator()?).with_policy(policy))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            creator: CreatorConfig::default(),
            translator: TranslatorConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl Default for CreatorConfig {
    fn default() -> Self {
        Self {
            format: Config::default_format(),
            path: Config::default_path(),
            decorate: Config::default_creator_decorate(),
            backup: false,
            default_yml_dir: None,
            default_yml_filename: Config::default_yml_filename(),
            uc_first: Config::default_uc_first(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            resource_dir: None,
            fallback_locales: Vec::new(),
            decorate: DecorationPattern::identity(),
            create: false,
            normalize: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}
