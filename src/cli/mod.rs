// ============================================================================
// TransHelper - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 配置加载与运行时参数合并
//   - ✅ 命令路由分发
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod create;
pub mod defaults;
pub mod init;
pub mod list;
pub mod trans;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::i18n;
use crate::models::config::{Config, RuntimeArgs};
use crate::utils::colors::Colors;
use crate::utils::constants::CONFIG_FILE;
use crate::utils::logger::{init_tracing, Logger};
use crate::{t, tf};
use create::{handle_create, CreateArgs};
use defaults::{handle_defaults, DefaultsArgs};
use init::{handle_init, InitArgs};
use list::{handle_list, ListArgs};
use trans::{handle_trans, TransArgs};

/// TransHelper - Missing translation creator and decorator
#[derive(Debug, Parser)]
#[command(name = "transhelper")]
#[command(about = "Create, persist and decorate missing translations")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(long, global = true)]
    pub language: Option<String>,

    /// Config file path
    #[arg(short = 'c', long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Catalogue output directory
    #[arg(short = 'P', long, global = true)]
    pub path: Option<String>,

    /// Catalogue format (yml, json)
    #[arg(short = 'f', long, global = true)]
    pub format: Option<String>,

    /// Default value file directory
    #[arg(long, global = true)]
    pub default_yml_dir: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Translate a key, optionally creating it when missing
    Trans(TransArgs),
    /// Create a missing key directly through the creator
    Create(CreateArgs),
    /// Show the flattened default values of a locale
    Defaults(DefaultsArgs),
    /// List catalogue files and their entry counts
    List(ListArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let config_exists = cli.config.exists();
    let mut config = if config_exists {
        Config::load_from_file(&cli.config)?
    } else {
        Config::default()
    };

    // Merge runtime args to config
    config.merge_runtime_args(build_runtime_args(&cli));

    i18n::set_language(&config.i18n.language);
    Colors::set_enabled(config.output.colored);
    init_tracing(config.output.verbose);

    if config.output.verbose {
        if config_exists {
            Logger::info(tf!("config.loaded", cli.config.display()));
        } else {
            Logger::info(t!("config.not_found"));
        }
    }

    match cli.command {
        Commands::Trans(args) => handle_trans(args, &config),
        Commands::Create(args) => handle_create(args, &config),
        Commands::Defaults(args) => handle_defaults(args, &config),
        Commands::List(args) => handle_list(args, &config),
        Commands::Init(args) => handle_init(args, &cli.config),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        language: cli.language.clone(),
        path: cli.path.clone(),
        format: cli.format.clone(),
        default_yml_dir: cli.default_yml_dir.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_trans_with_globals() {
        let cli = Cli::try_parse_from([
            "transhelper",
            "--no-color",
            "trans",
            "TestTrans!",
            "-d",
            "Test",
            "-l",
            "fr",
            "--create",
            "-p",
            "%name%=Bob",
        ])
        .unwrap();

        let runtime = build_runtime_args(&cli);
        assert_eq!(runtime.colored, Some(false));
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE));
        match cli.command {
            Commands::Trans(args) => {
                assert_eq!(args.key, "TestTrans!");
                assert_eq!(args.domain, "Test");
                assert!(args.create);
                assert_eq!(args.params, vec!["%name%=Bob".to_string()]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
