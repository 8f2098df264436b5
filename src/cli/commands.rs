//! 控制台命令处理
//!
//! 把一行输入解析为 [`Command`]，再由 [`Shell`] 在图和集合上执行

use crate::algorithm::{DepthFirst, FacilityPlacement};
use crate::bst::IntSet;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};

use super::printer::Printer;

/// 控制台使用的图：整数顶点、浮点距离
pub type ShellGraph = Graph<i64, f64>;

/// 顶点子命令
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VertexAction {
    Add,
    Remove,
    Has,
}

/// 边子命令
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeAction {
    Remove,
    Has,
}

/// 集合子命令
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetAction {
    Insert,
    Erase,
    Has,
}

/// 解析后的命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Stats,
    Vertex(VertexAction, i64),
    Vertices,
    AddEdge(i64, i64, f64),
    /// 带距离时按终点和距离精确匹配
    Edge(EdgeAction, i64, i64, Option<f64>),
    Edges(i64),
    Order,
    Degree,
    Path(i64, i64),
    Walk(i64),
    Reach(i64),
    Facility(i64),
    Set(SetAction, i32),
    SetShow,
}

/// 命令执行结果
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

fn parse_arg<T: std::str::FromStr>(args: &[&str], idx: usize, usage: &str) -> Result<T> {
    args.get(idx)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| Error::ParseError(format!("用法: {}", usage)))
}

fn parse_opt<T: std::str::FromStr>(args: &[&str], idx: usize, usage: &str) -> Result<Option<T>> {
    match args.get(idx) {
        None => Ok(None),
        Some(_) => parse_arg(args, idx, usage).map(Some),
    }
}

/// 解析一行输入
pub fn parse_command(input: &str) -> Result<Command> {
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some((head, rest)) = words.split_first() else {
        return Err(Error::ParseError("空命令".to_string()));
    };
    let sub = rest.first().map(|s| s.to_lowercase());
    let sub = sub.as_deref();
    let tail = rest.get(1..).unwrap_or(&[]);

    let cmd = match head.to_lowercase().as_str() {
        "help" | "h" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "stats" | "info" => Command::Stats,
        "vertices" => Command::Vertices,
        "order" => Command::Order,
        "degree" => Command::Degree,

        "vertex" | "v" => {
            const USAGE: &str = "vertex add|remove|has <顶点>";
            let action = match sub {
                Some("add") => VertexAction::Add,
                Some("remove" | "rm") => VertexAction::Remove,
                Some("has") => VertexAction::Has,
                _ => return Err(Error::ParseError(format!("用法: {}", USAGE))),
            };
            Command::Vertex(action, parse_arg(tail, 0, USAGE)?)
        }

        "edge" | "e" => match sub {
            Some("add") => {
                const USAGE: &str = "edge add <起点> <终点> <距离>";
                Command::AddEdge(
                    parse_arg(tail, 0, USAGE)?,
                    parse_arg(tail, 1, USAGE)?,
                    parse_arg(tail, 2, USAGE)?,
                )
            }
            Some(action @ ("remove" | "rm" | "has")) => {
                const USAGE: &str = "edge remove|has <起点> <终点> [距离]";
                let action = if action == "has" {
                    EdgeAction::Has
                } else {
                    EdgeAction::Remove
                };
                Command::Edge(
                    action,
                    parse_arg(tail, 0, USAGE)?,
                    parse_arg(tail, 1, USAGE)?,
                    parse_opt(tail, 2, USAGE)?,
                )
            }
            _ => {
                return Err(Error::ParseError(
                    "用法: edge add|remove|has <起点> <终点> ...".to_string(),
                ))
            }
        },

        "edges" => Command::Edges(parse_arg(rest, 0, "edges <顶点>")?),
        "path" | "shortest" => Command::Path(
            parse_arg(rest, 0, "path <起点> <终点>")?,
            parse_arg(rest, 1, "path <起点> <终点>")?,
        ),
        "walk" | "dfs" => Command::Walk(parse_arg(rest, 0, "walk <顶点>")?),
        "reach" => Command::Reach(parse_arg(rest, 0, "reach <顶点>")?),
        "facility" => Command::Facility(parse_arg(rest, 0, "facility <目标顶点>")?),

        "set" => {
            const USAGE: &str = "set insert|erase|has <整数> | set show";
            let action = match sub {
                Some("show" | "print") => return Ok(Command::SetShow),
                Some("insert" | "add") => SetAction::Insert,
                Some("erase" | "remove" | "rm") => SetAction::Erase,
                Some("has" | "contains") => SetAction::Has,
                _ => return Err(Error::ParseError(format!("用法: {}", USAGE))),
            };
            Command::Set(action, parse_arg(tail, 0, USAGE)?)
        }

        other => {
            return Err(Error::ParseError(format!(
                "未知命令: {}。输入 'help' 查看帮助。",
                other
            )))
        }
    };

    Ok(cmd)
}

/// 控制台会话：持有图、集合和打印器
#[derive(Default)]
pub struct Shell {
    graph: ShellGraph,
    set: IntSet,
    printer: Printer,
}

impl Shell {
    pub fn new(printer: Printer) -> Self {
        Self {
            graph: ShellGraph::new(),
            set: IntSet::new(),
            printer,
        }
    }

    pub fn graph(&self) -> &ShellGraph {
        &self.graph
    }

    pub fn set(&self) -> &IntSet {
        &self.set
    }

    /// 解析并执行一行输入
    pub fn run_line(&mut self, line: &str) -> CommandResult {
        let line = line.trim();
        if line.is_empty() {
            return CommandResult::Continue;
        }
        match parse_command(line).and_then(|cmd| self.execute(cmd)) {
            Ok(result) => result,
            Err(e) => CommandResult::Error(e.to_string()),
        }
    }

    /// 执行命令
    pub fn execute(&mut self, cmd: Command) -> Result<CommandResult> {
        let message = match cmd {
            Command::Help => Printer::print_help(),
            Command::Quit => return Ok(CommandResult::Exit),
            Command::Stats => self.printer.print_stats(
                self.graph.order(),
                self.graph.edge_count(),
                self.graph.degree(),
                self.set.len(),
            ),

            Command::Vertex(VertexAction::Add, v) => {
                self.graph.add_vertex(v);
                format!("已添加顶点 {}", v)
            }
            Command::Vertex(VertexAction::Remove, v) => {
                if self.graph.remove_vertex(&v) {
                    format!("已删除顶点 {}", v)
                } else {
                    format!("顶点 {} 不存在", v)
                }
            }
            Command::Vertex(VertexAction::Has, v) => self.graph.has_vertex(&v).to_string(),
            Command::Vertices => self.printer.format_vertices(&self.graph.vertices()),

            Command::AddEdge(from, to, d) => {
                self.graph.add_edge(from, to, d);
                Edge::new(from, to, d).to_string()
            }
            Command::Edge(action, from, to, distance) => {
                let found = match (action, distance) {
                    (EdgeAction::Remove, None) => self.graph.remove_edge(&from, &to),
                    (EdgeAction::Remove, Some(d)) => {
                        self.graph.remove_edge_exact(&Edge::new(from, to, d))
                    }
                    (EdgeAction::Has, None) => self.graph.has_edge(&from, &to),
                    (EdgeAction::Has, Some(d)) => {
                        self.graph.has_edge_exact(&Edge::new(from, to, d))
                    }
                };
                found.to_string()
            }
            Command::Edges(v) => self.printer.format_edges(&self.graph.edges(&v))?,
            Command::Order => self.graph.order().to_string(),
            Command::Degree => self.graph.degree().to_string(),

            Command::Path(from, to) => {
                let path = self.graph.shortest_path(&from, &to)?;
                self.printer.format_path(&path)
            }
            Command::Walk(v) => self.printer.format_vertices(&self.graph.walk(&v)?),
            Command::Reach(v) => DepthFirst::new(&self.graph).reachable_set(&v)?.to_string(),
            Command::Facility(target) => {
                match FacilityPlacement::new(&self.graph).optimal_for(&target)? {
                    Some(placement) => format!(
                        "最佳位置: {} (最长边: {})\n{}",
                        placement.vertex,
                        placement.bottleneck,
                        self.printer.format_edge_lines(&placement.path)
                    ),
                    None => format!("没有顶点能到达 {}", target),
                }
            }

            Command::Set(SetAction::Insert, k) => self.set.insert(k).to_string(),
            Command::Set(SetAction::Erase, k) => self.set.erase(k).to_string(),
            Command::Set(SetAction::Has, k) => self.set.contains(k).to_string(),
            Command::SetShow => self.set.to_string(),
        };

        Ok(CommandResult::Message(message))
    }
}
