// ============================================================================
// TransHelper - 翻译命令处理
// ============================================================================
//
// 文件: src/cli/trans.rs
// 职责: 处理单个键的翻译请求
// 边界:
//   - ✅ 翻译命令参数解析
//   - ✅ 命令行策略覆盖配置策略
//   - ✅ 翻译参数解析 (name=value)
//   - ❌ 不应包含翻译查找实现
//   - ❌ 不应包含缺失键创建实现
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::core::TransParams;
use crate::models::config::Config;
use crate::models::pattern::DecorationPattern;
use crate::utils::constants::DEFAULT_DOMAIN;
use crate::tf;

/// 翻译命令参数
#[derive(Debug, Args)]
pub struct TransArgs {
    /// 翻译键
    pub key: String,

    /// 翻译 domain
    #[arg(short, long, default_value = DEFAULT_DOMAIN)]
    pub domain: String,

    /// 目标语言
    #[arg(short, long)]
    pub locale: String,

    /// 缺失时创建翻译
    #[arg(long)]
    pub create: bool,

    /// 规范化键名 (TestTrans -> test_trans)
    #[arg(long)]
    pub normalize: bool,

    /// 未命中时的装饰模板，例如 '!!!%s'
    #[arg(long)]
    pub decorate: Option<DecorationPattern>,

    /// 翻译参数 name=value，可重复
    #[arg(short, long = "param")]
    pub params: Vec<String>,
}

/// 处理翻译命令
pub fn handle_trans(args: TransArgs, config: &Config) -> Result<()> {
    let params = parse_params(&args.params)?;
    let mut config = config.clone();
    if args.create {
        config.translator.create = true;
    }
    if args.normalize {
        config.translator.normalize = true;
    }
    if let Some(decorate) = args.decorate {
        config.translator.decorate = decorate;
    }
    let mut wrapper = config.build_wrapper()?;

    let result = wrapper.trans(&args.key, &params, &args.domain, &args.locale)?;
    println!("{}", result);
    Ok(())
}

/// 解析 `name=value` 形式的参数
pub fn parse_params(raw: &[String]) -> Result<TransParams> {
    let mut params = TransParams::new();
    for item in raw {
        match item.split_once('=') {
            Some((name, value)) if !name.is_empty() => {
                params.insert(name.to_string(), value.to_string());
            }
            _ => anyhow::bail!(tf!("error.param_format", item)),
        }
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_value_pairs() {
        let params = parse_params(&["%name%=Bob".to_string(), "%n%=a=b".to_string()]).unwrap();
        assert_eq!(params.get("%name%").map(String::as_str), Some("Bob"));
        assert_eq!(params.get("%n%").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(parse_params(&["novalue".to_string()]).is_err());
        assert!(parse_params(&["=x".to_string()]).is_err());
    }
}
