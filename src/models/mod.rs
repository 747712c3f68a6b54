// ============================================================================
// TransHelper - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 数据模型模块入口
//
// ============================================================================

pub mod catalogue;
pub mod config;
pub mod pattern;

pub use catalogue::{MessageCatalogue, Messages};
pub use config::Config;
pub use pattern::{DecorationPattern, PatternError};
