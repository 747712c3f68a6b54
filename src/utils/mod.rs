// ============================================================================
// TransHelper - 工具模块
// ============================================================================
//
// 文件: src/utils/mod.rs
// 职责: 终端输出、日志与常量工具入口
//
// ============================================================================

pub mod colors;
pub mod constants;
pub mod logger;
