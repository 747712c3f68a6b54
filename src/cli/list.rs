// ============================================================================
// TransHelper - 列表命令处理
// ============================================================================
//
// 文件: src/cli/list.rs
// 职责: 列出目录文件夹中的目录文件及条目数
// 边界:
//   - ✅ 列表命令参数解析
//   - ✅ 目录文件扫描与文件名过滤
//   - ❌ 不应包含目录文件格式实现
//   - ❌ 不应修改任何文件
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::core::translator::parse_catalogue_filename;
use crate::core::FormatRegistry;
use crate::models::config::Config;
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 列表命令参数
#[derive(Debug, Args)]
pub struct ListArgs {
    /// 文件名过滤（glob），例如 '*.fr.yml'
    #[arg(long)]
    pub filter: Option<String>,
}

/// 单个目录文件的摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueFileSummary {
    pub path: PathBuf,
    pub domain: String,
    pub locale: String,
    pub format: String,
    pub entries: usize,
}

/// 处理列表命令
pub fn handle_list(args: ListArgs, config: &Config) -> Result<()> {
    let dir = config.resource_dir();
    if !dir.is_dir() {
        anyhow::bail!(tf!("error.dir_not_exist", dir.display()));
    }
    if config.output.verbose {
        Logger::info(tf!("list.scanning", dir.display()));
    }

    let filter = args
        .filter
        .as_deref()
        .map(glob::Pattern::new)
        .transpose()?;
    let summaries = scan_catalogues(&dir, &FormatRegistry::with_defaults(), filter.as_ref())?;

    if summaries.is_empty() {
        Logger::warn(t!("list.empty"));
        return Ok(());
    }

    let mut total = 0;
    for summary in &summaries {
        total += summary.entries;
        println!(
            "{} {}",
            Colors::success(icons::CATALOGUE),
            tf!(
                "list.entry",
                summary.path.display(),
                summary.domain,
                summary.locale,
                summary.format,
                summary.entries
            )
        );
    }
    Logger::info(tf!("list.total", summaries.len(), total));

    Ok(())
}

/// 扫描目录文件夹（不递归），跳过备份文件与无法识别的格式
pub fn scan_catalogues(
    dir: &std::path::Path,
    registry: &FormatRegistry,
    filter: Option<&glob::Pattern>,
) -> Result<Vec<CatalogueFileSummary>> {
    let mut summaries = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.context(t!("error.walk_directory"))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        if let Some(pattern) = filter {
            if !pattern.matches(file_name) {
                continue;
            }
        }
        let Some((domain, locale, format)) = parse_catalogue_filename(file_name) else {
            continue;
        };
        let Some(handler) = registry.get(format) else {
            continue;
        };

        let loaded = fs::read_to_string(entry.path())
            .map_err(anyhow::Error::from)
            .and_then(|content| handler.load(&content).map_err(anyhow::Error::from));
        match loaded {
            Ok(messages) => summaries.push(CatalogueFileSummary {
                path: entry.path().to_path_buf(),
                domain: domain.to_string(),
                locale: locale.to_string(),
                format: format.to_string(),
                entries: messages.len(),
            }),
            Err(e) => Logger::warn(tf!("list.invalid", entry.path().display(), e)),
        }
    }

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn scans_known_catalogues_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Test.fr.yml"), "a: '1'\nb: '2'\n").unwrap();
        fs::write(dir.path().join("Test.fr.yml~"), "a: '1'\n").unwrap();
        fs::write(dir.path().join("Test.en.json"), "{\"a\": \"1\"}").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let summaries =
            scan_catalogues(dir.path(), &FormatRegistry::with_defaults(), None).unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].locale, "en");
        assert_eq!(summaries[0].entries, 1);
        assert_eq!(summaries[1].domain, "Test");
        assert_eq!(summaries[1].entries, 2);
    }

    #[test]
    fn applies_glob_filter() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Test.fr.yml"), "a: '1'\n").unwrap();
        fs::write(dir.path().join("Test.en.yml"), "a: '1'\n").unwrap();

        let pattern = glob::Pattern::new("*.fr.yml").unwrap();
        let summaries =
            scan_catalogues(dir.path(), &FormatRegistry::with_defaults(), Some(&pattern)).unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].locale, "fr");
    }
}
