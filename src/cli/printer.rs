//! 结果打印器
//!
//! 提供表格、垂直和 JSON 格式的结果输出

use crate::algorithm::ShortestPath;
use crate::error::Result;
use crate::graph::Edge;
use prettytable::{format, row, Cell, Row, Table};
use std::fmt::Display;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
    /// JSON
    Json,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 顶点列表
    pub fn format_vertices<V: Display>(&self, vertices: &[V]) -> String {
        if vertices.is_empty() {
            return "Empty set\n".to_string();
        }
        let rows: Vec<Vec<String>> = vertices.iter().map(|v| vec![v.to_string()]).collect();
        self.format_rows(&["vertex".to_string()], &rows)
    }

    /// 边列表
    pub fn format_edges(&self, edges: &[Edge<i64, f64>]) -> Result<String> {
        if self.mode == PrintMode::Json {
            return Ok(serde_json::to_string_pretty(edges)?);
        }
        if edges.is_empty() {
            return Ok("Empty set\n".to_string());
        }
        let columns = ["from".to_string(), "to".to_string(), "distance".to_string()];
        let rows: Vec<Vec<String>> = edges
            .iter()
            .map(|e| vec![e.from.to_string(), e.to.to_string(), e.distance.to_string()])
            .collect();
        Ok(self.format_rows(&columns, &rows))
    }

    /// 每条边一行：`from -> to (distance: d)`
    pub fn format_edge_lines<V: Display, D: Display>(&self, edges: &[Edge<V, D>]) -> String {
        edges
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 最短路径
    pub fn format_path(&self, path: &ShortestPath<i64, f64>) -> String {
        match path {
            ShortestPath::Found(edges) => match path.total_distance() {
                Some(total) => format!("{}\n总距离: {}", self.format_edge_lines(edges), total),
                None => format!("{}\n总距离: 溢出", self.format_edge_lines(edges)),
            },
            ShortestPath::Unreachable => "不可达".to_string(),
            ShortestPath::TrivialSelf => "起点即终点（空路径）".to_string(),
        }
    }

    fn format_rows(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let output = match self.mode {
            PrintMode::Vertical => self.format_vertical(columns, rows),
            PrintMode::Table | PrintMode::Json => self.format_table(columns, rows),
        };
        format!("{}{} row(s) in set\n", output, rows.len())
    }

    /// 表格格式
    fn format_table(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 统计信息
    pub fn print_stats(
        &self,
        order: usize,
        edge_count: usize,
        degree: usize,
        set_len: usize,
    ) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Order", order.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.add_row(row!["Max Out-Degree", degree.to_string()]);
        table.add_row(row!["Set Size", set_len.to_string()]);
        table.to_string()
    }

    /// 帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   wdigraph 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?                     显示帮助
  quit, exit, q                  退出程序
  stats, info                    显示统计信息

图:
  vertex add|remove|has <v>      顶点操作
  vertices                       列出所有顶点
  edge add <from> <to> <d>       添加边（端点不存在时自动添加）
  edge remove <from> <to> [d]    删除边（给出 d 时精确匹配距离）
  edge has <from> <to> [d]       检查边
  edges <v>                      列出顶点的出边
  order                          顶点数
  degree                         最大出度

算法:
  path <from> <to>               Bellman-Ford 最短路径
  walk <v>                       深度优先遍历
  reach <v>                      可达顶点（升序）
  facility <target>              设施选址（最长边最小）

集合:
  set insert|erase|has <k>       集合操作
  set show                       升序显示集合

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}
