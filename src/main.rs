// ============================================================================
// TransHelper - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 命令行程序入口与错误输出
//
// ============================================================================

use transhelper::cli::run_cli;
use transhelper::utils::logger::Logger;

fn main() {
    if let Err(e) = run_cli() {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
