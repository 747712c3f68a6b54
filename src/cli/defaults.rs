// ============================================================================
// TransHelper - 默认值命令处理
// ============================================================================
//
// 文件: src/cli/defaults.rs
// 职责: 展示某一语言默认值文件的扁平化结果
// 边界:
//   - ✅ 默认值命令参数解析
//   - ✅ 点路径视图 / 末段键视图输出
//   - ❌ 不应包含默认值文件解析实现
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::models::config::Config;
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 默认值命令参数
#[derive(Debug, Args)]
pub struct DefaultsArgs {
    /// 语言
    pub locale: String,

    /// 按末段键展示（同名键后写入者胜出）
    #[arg(long)]
    pub leaf: bool,
}

/// 处理默认值命令
pub fn handle_defaults(args: DefaultsArgs, config: &Config) -> Result<()> {
    let mut creator = config.build_creator()?;
    let Some(filename) = creator.default_filename(&args.locale) else {
        Logger::warn(t!("defaults.no_dir"));
        return Ok(());
    };

    let Some(index) = creator.file_default_value_data(&filename, false) else {
        Logger::warn(tf!("defaults.not_found", args.locale, filename.display()));
        return Ok(());
    };

    let entries = if args.leaf {
        index.by_key()
    } else {
        index.by_path()
    };

    Logger::info(tf!("defaults.header", filename.display(), entries.len()));
    for (key, value) in entries {
        println!("  {} {} {}", key, Colors::muted(icons::ARROW), value);
    }

    Ok(())
}
