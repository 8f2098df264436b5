//! 交互式控制台
//!
//! 命令解析与执行、结果打印、Tab 补全

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{parse_command, Command, CommandResult, Shell, ShellGraph};
pub use completer::ShellCompleter;
pub use printer::{PrintMode, Printer};

use std::path::PathBuf;

/// 控制台配置
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// 提示符
    pub prompt: String,
    /// 打印模式
    pub print_mode: PrintMode,
    /// 历史记录文件；None 时不保存历史
    pub history_file: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "wdigraph> ".to_string(),
            print_mode: PrintMode::Table,
            history_file: dirs::home_dir().map(|home| home.join(".wdigraph_history")),
        }
    }
}
