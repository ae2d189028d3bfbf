//! 按身份证号或姓名匹配，并将命中的PDF复制/移动到结果文件夹

use crate::error::{MatchPdfError, Result};
use crate::excel::{backup_path, Sheet};
use crate::extract;
use crate::matcher;
use crate::pipeline::{unique_dest_path, write_report, FileOutcome, RunReport, RunStats};
use crate::scanner;
use std::collections::HashSet;
use std::path::Path;

/// 匹配所用的键：决定列、提取方式与比较规则
#[derive(Debug, Clone, Copy)]
pub enum MatchKey {
    /// 身份证号（末位X不区分大小写）
    IdNumber,
    /// 姓名（精确比较）
    Name,
}

impl MatchKey {
    pub fn column_keywords(&self) -> &'static [&'static str] {
        match self {
            MatchKey::IdNumber => &["身份证号", "身份证"],
            MatchKey::Name => &["姓名"],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchKey::IdNumber => "身份证号",
            MatchKey::Name => "姓名",
        }
    }

    /// 身份证号统一按大写比较
    pub fn uppercase(&self) -> bool {
        matches!(self, MatchKey::IdNumber)
    }

    pub fn extract(&self, filename: &str) -> Option<String> {
        match self {
            MatchKey::IdNumber => extract::id_number(filename),
            MatchKey::Name => extract::person_name(filename),
        }
    }
}

/// 匹配成功后的文件操作
#[derive(Debug, Clone, Copy)]
pub enum TransferMode {
    Copy,
    Move,
}

impl TransferMode {
    pub fn verb(&self) -> &'static str {
        match self {
            TransferMode::Copy => "复制",
            TransferMode::Move => "移动",
        }
    }

    fn apply(&self, src: &Path, dest: &Path) -> std::io::Result<()> {
        match self {
            TransferMode::Copy => {
                std::fs::copy(src, dest)?;
                Ok(())
            }
            TransferMode::Move => match std::fs::rename(src, dest) {
                Ok(()) => Ok(()),
                // 跨文件系统时rename失败，退化为复制+删除
                Err(_) => {
                    std::fs::copy(src, dest)?;
                    std::fs::remove_file(src)
                }
            },
        }
    }
}

pub fn run(
    key: MatchKey,
    mode: TransferMode,
    pdf_dir: &Path,
    excel_path: &Path,
    output_dir_name: &str,
    report: Option<&Path>,
    verbose: bool,
) -> Result<RunStats> {
    if !pdf_dir.exists() {
        return Err(MatchPdfError::FolderNotFound(pdf_dir.display().to_string()));
    }
    if !pdf_dir.is_dir() {
        return Err(MatchPdfError::NotADirectory(pdf_dir.display().to_string()));
    }

    println!("[1/3] 正在读取Excel文件: {}", excel_path.display());
    let mut sheet = Sheet::load(excel_path)?;
    let key_col = sheet.require_column(key.column_keywords())?;
    let keys = matcher::key_set(&sheet, key_col, key.uppercase());
    println!("✔ 成功读取Excel文件，共 {} 个{}\n", keys.len(), key.label());

    let pdf_files = scanner::scan_pdfs(pdf_dir)?;
    println!("[2/3] 开始处理PDF文件，共 {} 个", pdf_files.len());

    let output_dir = pdf_dir.join(output_dir_name);
    std::fs::create_dir_all(&output_dir)
        .map_err(|e| MatchPdfError::OutputDir(format!("{}: {}", output_dir.display(), e)))?;
    println!("输出文件夹: {}\n", output_dir.display());

    let mut stats = RunStats {
        total: pdf_files.len(),
        ..Default::default()
    };
    let mut outcomes: Vec<FileOutcome> = Vec::new();
    // 成功复制/移动的键值，用于标注Excel
    let mut transferred_keys: HashSet<String> = HashSet::new();

    for pdf in &pdf_files {
        let identifier = match key.extract(&pdf.file_name) {
            Some(id) => id,
            None => {
                println!("跳过: {} (无法提取{})", pdf.file_name, key.label());
                stats.extract_failed += 1;
                outcomes.push(FileOutcome {
                    file_name: pdf.file_name.clone(),
                    identifier: None,
                    matched: false,
                    detail: Some(format!("无法提取{}", key.label())),
                });
                continue;
            }
        };

        if !keys.contains(&identifier) {
            println!(
                "未匹配: {} ({}: {} 在Excel中未找到)",
                pdf.file_name,
                key.label(),
                identifier
            );
            stats.unmatched += 1;
            outcomes.push(FileOutcome {
                file_name: pdf.file_name.clone(),
                identifier: Some(identifier),
                matched: false,
                detail: Some("在Excel中未找到".to_string()),
            });
            continue;
        }

        let dest = unique_dest_path(&output_dir, &pdf.file_name);
        match mode.apply(&pdf.path, &dest) {
            Ok(()) => {
                if verbose {
                    println!("{}: {} -> {}", mode.verb(), pdf.file_name, dest.display());
                }
                stats.matched += 1;
                transferred_keys.insert(identifier.clone());
                outcomes.push(FileOutcome {
                    file_name: pdf.file_name.clone(),
                    identifier: Some(identifier),
                    matched: true,
                    detail: dest.file_name().map(|n| n.to_string_lossy().to_string()),
                });
            }
            Err(e) => {
                println!("错误: {}失败 {}: {}", mode.verb(), pdf.file_name, e);
                stats.errors += 1;
                outcomes.push(FileOutcome {
                    file_name: pdf.file_name.clone(),
                    identifier: Some(identifier),
                    matched: false,
                    detail: Some(e.to_string()),
                });
            }
        }
    }

    println!("\n[3/3] 正在Excel中标注匹配状态...");
    let (marked_ok, marked_fail) =
        matcher::annotate(&mut sheet, key_col, &transferred_keys, key.uppercase());
    let written = sheet.save_with_backup(excel_path)?;
    println!("已保存标注结果到: {}", written.display());
    println!("原文件已备份为: {}", backup_path(excel_path).display());
    println!("匹配成功: {} 条 / 匹配失败: {} 条", marked_ok, marked_fail);

    if let Some(report_path) = report {
        write_report(
            report_path,
            &RunReport {
                stats: stats.clone(),
                files: outcomes,
            },
        )?;
        println!("运行报告: {}", report_path.display());
    }

    Ok(stats)
}
