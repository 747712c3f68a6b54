// ============================================================================
// TransHelper - 颜色工具
// ============================================================================
//
// 文件: src/utils/colors.rs
// 职责: 终端颜色输出和主题管理
// 边界:
//   - ✅ 终端颜色代码定义
//   - ✅ 颜色输出格式化
//   - ✅ 颜色开关与终端检测
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文本内容处理
//
// ============================================================================

use std::sync::atomic::{AtomicBool, Ordering};

/// 是否启用颜色输出
static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);

/// ANSI 颜色代码
pub mod ansi {
    /// 重置颜色
    pub const RESET: &str = "\x1b[0m";

    /// 前景色
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// 日志级别颜色主题
pub mod log_colors {
    use super::ansi;

    /// 信息日志颜色 (青色)
    pub const INFO: &str = ansi::CYAN;

    /// 警告日志颜色 (黄色)
    pub const WARN: &str = ansi::YELLOW;

    /// 错误日志颜色 (红色)
    pub const ERROR: &str = ansi::RED;

    /// 成功日志颜色 (绿色)
    pub const SUCCESS: &str = ansi::GREEN;

    /// 次要信息颜色 (灰色)
    pub const MUTED: &str = ansi::GRAY;
}

/// 颜色工具函数
pub struct Colors;

impl Colors {
    /// 设置是否启用颜色，非终端输出时始终关闭
    pub fn set_enabled(enabled: bool) {
        let is_tty = atty::is(atty::Stream::Stdout);
        COLOR_ENABLED.store(enabled && is_tty, Ordering::Relaxed);
    }

    pub fn is_enabled() -> bool {
        COLOR_ENABLED.load(Ordering::Relaxed)
    }

    /// 为文本添加颜色
    pub fn colorize(text: &str, color: &str) -> String {
        if Self::is_enabled() {
            format!("{}{}{}", color, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// 信息颜色
    pub fn info(text: &str) -> String {
        Self::colorize(text, log_colors::INFO)
    }

    /// 警告颜色
    pub fn warn(text: &str) -> String {
        Self::colorize(text, log_colors::WARN)
    }

    /// 错误颜色
    pub fn error(text: &str) -> String {
        Self::colorize(text, log_colors::ERROR)
    }

    /// 成功颜色
    pub fn success(text: &str) -> String {
        Self::colorize(text, log_colors::SUCCESS)
    }

    /// 次要信息颜色
    pub fn muted(text: &str) -> String {
        Self::colorize(text, log_colors::MUTED)
    }
}
