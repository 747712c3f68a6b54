// ============================================================================
// TransHelper - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 缺失翻译创建与装饰库的模块导出
// 边界:
//   - ✅ 模块声明和常用类型重新导出
//   - ❌ 不应包含业务实现
//
// ============================================================================

//! 翻译缺失键的创建、持久化与装饰。
//!
//! [`TranslatorWrapper`] 拦截翻译请求：命中目录时原样返回，未命中时
//! 可交由 [`DefaultCreator`] 按默认值文件或装饰模板生成取值并写回
//! `{path}/{domain}.{locale}.{format}` 目录文件。

pub mod cli;
pub mod core;
pub mod i18n;
pub mod models;
pub mod utils;

pub use crate::core::{
    Creator, DefaultCreator, FileTranslationWriter, FileTranslator, TranslationWriter, Translator,
    TranslatorWrapper,
};
pub use crate::models::{DecorationPattern, MessageCatalogue};
