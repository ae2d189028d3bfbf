//! 三条处理流程的编排：逐文件提取→匹配→文件操作，最后标注并回写Excel
//!
//! 单个文件的失败只计数、不中断整体处理；
//! 准备阶段的错误（路径、表格、缺列）直接返回并终止。

pub mod rename;
pub mod transfer;

use crate::error::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// 一次运行的统计
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub extract_failed: usize,
    pub errors: usize,
}

/// 单个文件的处理结果（用于运行报告）
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub file_name: String,
    pub identifier: Option<String>,
    pub matched: bool,
    pub detail: Option<String>,
}

/// 运行报告（--report输出的JSON）
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub stats: RunStats,
    pub files: Vec<FileOutcome>,
}

pub fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// 目标文件名冲突时在扩展名前追加`_1`、`_2`……
pub fn unique_dest_path(dir: &Path, file_name: &str) -> PathBuf {
    let dest = dir.join(file_name);
    if !dest.exists() {
        return dest;
    }

    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.to_string());
    let ext = name
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut counter = 1;
    loop {
        let candidate = dir.join(format!("{}_{}{}", stem, counter, ext));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
