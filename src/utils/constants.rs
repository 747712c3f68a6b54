// ============================================================================
// TransHelper - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 终端图标字符定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "TRANSHELPER";

/// 默认配置文件名
pub const CONFIG_FILE: &str = "transhelper.toml";

/// 默认翻译 domain
pub const DEFAULT_DOMAIN: &str = "messages";

/// 日志过滤环境变量
pub const LOG_ENV: &str = "TRANSHELPER_LOG";

/// 终端图标
pub mod icons {
    /// 目录文件图标
    pub const CATALOGUE: &str = "●";
    /// 箭头图标
    pub const ARROW: &str = "→";
}
