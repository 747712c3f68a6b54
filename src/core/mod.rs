// ============================================================================
// TransHelper - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 核心业务逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含终端输出逻辑
//
// ============================================================================

pub mod cache;
pub mod creator;
pub mod format;
pub mod normalize;
pub mod translator;
pub mod wrapper;
pub mod writer;

// 重新导出常用类型
pub use cache::LazyCache;
pub use creator::{Creator, CreatorError, DefaultCreator, DefaultValueIndex};
pub use format::{CatalogueFormat, FormatError, FormatRegistry, JsonFormat, YamlFormat};
pub use translator::{FileTranslator, Translator, TranslatorError};
pub use wrapper::{TransParams, TransPolicy, TranslatorWrapper, WrapperError};
pub use writer::{FileTranslationWriter, TranslationWriter, WriteOptions, WriterError};
