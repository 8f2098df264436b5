//! wdigraph CLI 工具
//!
//! 交互式命令行界面

use anyhow::Context;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wdigraph::cli::{CommandResult, PrintMode, Printer, Shell, ShellCompleter, ShellConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Vertical,
    Json,
}

impl From<OutputFormat> for PrintMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => PrintMode::Table,
            OutputFormat::Vertical => PrintMode::Vertical,
            OutputFormat::Json => PrintMode::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "wdigraph-cli")]
#[command(about = "有向带权图命令行工具")]
struct Args {
    /// 日志级别（RUST_LOG 优先）
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// 输出格式
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// 历史记录文件
    #[arg(long)]
    history: Option<PathBuf>,

    /// 执行以 ';' 分隔的命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = ShellConfig {
        print_mode: args.format.into(),
        ..ShellConfig::default()
    };
    if args.history.is_some() {
        config.history_file = args.history;
    }

    let mut shell = Shell::new(Printer::new(config.print_mode));

    // 单次执行模式
    if let Some(script) = args.execute {
        for line in script.split(';') {
            if !report(shell.run_line(line)) {
                break;
            }
        }
        return Ok(());
    }

    println!("wdigraph CLI - 有向带权图");
    println!("输入 'help' 查看命令列表，'quit' 退出\n");

    let mut editor: Editor<ShellCompleter, DefaultHistory> =
        Editor::new().context("无法初始化行编辑器")?;
    editor.set_helper(Some(ShellCompleter::new()));
    if let Some(path) = &config.history_file {
        // 首次运行时历史文件不存在
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline(&config.prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                if !report(shell.run_line(&line)) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("读取输入失败"),
        }
    }

    if let Some(path) = &config.history_file {
        editor
            .save_history(path)
            .with_context(|| format!("无法保存历史记录到 {}", path.display()))?;
    }

    println!("再见！");
    Ok(())
}

/// 输出命令结果；返回 false 表示应当退出
fn report(result: CommandResult) -> bool {
    match result {
        CommandResult::Continue => true,
        CommandResult::Exit => false,
        CommandResult::Message(msg) => {
            println!("{}", msg);
            true
        }
        CommandResult::Error(msg) => {
            eprintln!("{} {}", "错误:".red().bold(), msg);
            true
        }
    }
}
