// ============================================================================
// TransHelper - 创建命令处理
// ============================================================================
//
// 文件: src/cli/create.rs
// 职责: 直接通过创建器为指定键创建翻译
// 边界:
//   - ✅ 创建命令参数解析
//   - ✅ 已存在键的检查与提示
//   - ❌ 不应包含取值回退实现
//   - ❌ 不应包含目录文件写入实现
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::core::{Creator, Translator};
use crate::core::writer::catalogue_path;
use crate::models::config::Config;
use crate::utils::constants::DEFAULT_DOMAIN;
use crate::utils::logger::Logger;
use crate::tf;

/// 创建命令参数
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// 翻译键
    pub key: String,

    /// 翻译 domain
    #[arg(short, long, default_value = DEFAULT_DOMAIN)]
    pub domain: String,

    /// 目标语言
    #[arg(short, long)]
    pub locale: String,

    /// 即使目录中已存在也重新创建
    #[arg(long)]
    pub force: bool,
}

/// 处理创建命令
pub fn handle_create(args: CreateArgs, config: &Config) -> Result<()> {
    let mut creator = config.build_creator()?;
    let translator = config.build_translator();
    let mut catalogue = translator.catalogue(&args.locale)?;

    if let Some(existing) = catalogue.all(&args.domain).and_then(|m| m.get(&args.key)) {
        if !args.force {
            Logger::warn(tf!(
                "create.exists",
                args.key,
                args.domain,
                args.locale,
                existing
            ));
            return Ok(());
        }
    }

    let value = creator.create_translation(&args.key, &args.domain, &args.locale, &mut catalogue)?;
    Logger::success(tf!("create.created", args.key, value));
    Logger::info(tf!(
        "create.written",
        catalogue_path(creator.path(), &args.domain, &args.locale, creator.format()).display()
    ));

    Ok(())
}
