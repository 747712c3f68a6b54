// ============================================================================
// TransHelper - 翻译器包装
// ============================================================================
//
// 文件: src/core/wrapper.rs
// 职责: 拦截翻译请求，按策略创建缺失翻译并装饰结果
// 边界:
//   - ✅ 键名规范化策略
//   - ✅ 缺失时调用创建器
//   - ✅ 参数替换与结果装饰
//   - ❌ 不应包含目录文件读写细节
//   - ❌ 不应包含默认值查找逻辑
//
// ============================================================================

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::creator::{Creator, CreatorError, DefaultCreator};
use super::normalize::normalize_key;
use super::translator::{FileTranslator, Translator, TranslatorError};
use crate::models::pattern::DecorationPattern;

/// 翻译参数，如 `%name% => Bob`
pub type TransParams = BTreeMap<String, String>;

/// 包装器错误
#[derive(Debug, thiserror::Error)]
pub enum WrapperError {
    #[error(transparent)]
    Translator(#[from] TranslatorError),

    #[error(transparent)]
    Creator(#[from] CreatorError),
}

/// 翻译策略快照
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransPolicy {
    /// 缺失时是否创建
    pub create: bool,
    /// 是否规范化键名
    pub normalize: bool,
    /// 未命中目录时的装饰模板
    pub decorate: DecorationPattern,
}

/// 翻译器包装
///
/// 命中目录的翻译原样返回；未命中时（无论是否创建）返回用包装器模板装饰的键名，
/// 创建出的值在下一次查找时才从目录返回。
pub struct TranslatorWrapper<T, C> {
    translator: T,
    creator: C,
    policy: TransPolicy,
}

impl<T: Translator, C: Creator> TranslatorWrapper<T, C> {
    pub fn new(translator: T, creator: C) -> Self {
        Self {
            translator,
            creator,
            policy: TransPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: TransPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 翻译 `key`
    pub fn trans(
        &mut self,
        key: &str,
        params: &TransParams,
        domain: &str,
        locale: &str,
    ) -> Result<String, WrapperError> {
        let id = if self.policy.normalize {
            normalize_key(key)
        } else {
            key.to_string()
        };

        let translated = self.translator.translate(&id, domain, locale);
        if translated != id {
            return Ok(replace_params(&translated, params));
        }

        if self.policy.create {
            let mut catalogue = self.translator.catalogue(locale)?;
            self.creator
                .create_translation(&id, domain, locale, &mut catalogue)?;
        }

        Ok(self.policy.decorate.apply(&replace_params(&id, params)))
    }

    pub fn set_create(&mut self, create: bool) {
        self.policy.create = create;
    }

    pub fn set_normalize(&mut self, normalize: bool) {
        self.policy.normalize = normalize;
    }

    pub fn set_decorate(&mut self, decorate: DecorationPattern) {
        self.policy.decorate = decorate;
    }

    pub fn policy(&self) -> &TransPolicy {
        &self.policy
    }

    pub fn creator(&self) -> &C {
        &self.creator
    }

    /// 单独修改创建器输出目录会让翻译器读不到新建的键，
    /// 文件翻译器场景下用 [`TranslatorWrapper::set_path`]
    pub fn creator_mut(&mut self) -> &mut C {
        &mut self.creator
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    pub fn translator_mut(&mut self) -> &mut T {
        &mut self.translator
    }
}

impl TranslatorWrapper<FileTranslator, DefaultCreator> {
    /// 同时切换创建器输出目录与翻译器读取目录
    pub fn set_path<P: Into<PathBuf>>(&mut self, path: P) {
        let path = path.into();
        self.translator.set_resource_dir(path.clone());
        self.creator.set_path(path);
    }
}

/// 参数替换，参数名按原样匹配（如 `%count%`）
pub fn replace_params(message: &str, params: &TransParams) -> String {
    params
        .iter()
        .fold(message.to_string(), |acc, (name, value)| acc.replace(name.as_str(), value))
}
