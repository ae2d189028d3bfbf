//! 合同编号重命名流程
//!
//! `协商解除劳动合同协议书_<合同编号>.pdf` → `协商解除劳动合同协议书_<姓名><身份证号>.pdf`

use crate::error::{MatchPdfError, Result};
use crate::excel::{backup_path, normalize_key, Sheet};
use crate::extract::{self, AGREEMENT_PREFIX};
use crate::matcher;
use crate::pipeline::{write_report, FileOutcome, RunReport, RunStats};
use crate::scanner;
use std::collections::HashSet;
use std::path::Path;

pub fn run(
    folder: &Path,
    excel_name: &str,
    report: Option<&Path>,
    verbose: bool,
) -> Result<RunStats> {
    if !folder.exists() {
        return Err(MatchPdfError::FolderNotFound(folder.display().to_string()));
    }
    if !folder.is_dir() {
        return Err(MatchPdfError::NotADirectory(folder.display().to_string()));
    }

    let excel_path = folder.join(excel_name);
    println!("[1/3] 正在读取Excel文件: {}", excel_path.display());
    let mut sheet = Sheet::load(&excel_path)?;
    let contract_col = sheet.require_column(&["合同编号"])?;
    let name_col = sheet.require_column(&["姓名"])?;
    let id_col = sheet.require_column(&["身份证号", "身份证"])?;
    println!("✔ 成功读取Excel文件，共 {} 行记录\n", sheet.rows.len());

    let pdf_files = scanner::scan_pdfs(folder)?;
    println!("[2/3] 开始处理PDF文件，共 {} 个\n", pdf_files.len());

    let mut stats = RunStats {
        total: pdf_files.len(),
        ..Default::default()
    };
    let mut outcomes: Vec<FileOutcome> = Vec::new();
    // 重命名成功的合同编号，用于标注Excel
    let mut renamed_keys: HashSet<String> = HashSet::new();

    for pdf in &pdf_files {
        let contract = match extract::contract_number(&pdf.file_name) {
            Some(c) => c,
            None => {
                println!("跳过: {} (文件名格式不匹配)", pdf.file_name);
                stats.extract_failed += 1;
                outcomes.push(FileOutcome {
                    file_name: pdf.file_name.clone(),
                    identifier: None,
                    matched: false,
                    detail: Some("文件名格式不匹配".to_string()),
                });
                continue;
            }
        };

        let row = match matcher::find_row(&sheet, contract_col, &contract, false) {
            Some(r) => r,
            None => {
                println!(
                    "未匹配: {} (合同编号 {} 在Excel中未找到)",
                    pdf.file_name, contract
                );
                stats.unmatched += 1;
                outcomes.push(FileOutcome {
                    file_name: pdf.file_name.clone(),
                    identifier: Some(contract),
                    matched: false,
                    detail: Some("在Excel中未找到".to_string()),
                });
                continue;
            }
        };

        let name = sheet.cell(row, name_col).trim().to_string();
        let id_num = normalize_key(sheet.cell(row, id_col));

        if name.is_empty() || id_num.is_empty() {
            let which = if name.is_empty() { "姓名" } else { "身份证号" };
            println!(
                "警告: {} (合同编号 {} 对应的{}为空)",
                pdf.file_name, contract, which
            );
            stats.errors += 1;
            outcomes.push(FileOutcome {
                file_name: pdf.file_name.clone(),
                identifier: Some(contract),
                matched: false,
                detail: Some(format!("{}为空", which)),
            });
            continue;
        }

        let new_filename = format!("{}_{}{}.pdf", AGREEMENT_PREFIX, name, id_num);
        let new_path = folder.join(&new_filename);

        // 绝不覆盖已存在的目标文件（目标就是自己除外）
        if new_path.exists() && new_path != pdf.path {
            println!(
                "跳过: {} -> {} (目标文件已存在)",
                pdf.file_name, new_filename
            );
            stats.errors += 1;
            outcomes.push(FileOutcome {
                file_name: pdf.file_name.clone(),
                identifier: Some(contract),
                matched: false,
                detail: Some("目标文件已存在".to_string()),
            });
            continue;
        }

        match std::fs::rename(&pdf.path, &new_path) {
            Ok(()) => {
                if verbose {
                    println!("成功: {} -> {}", pdf.file_name, new_filename);
                }
                stats.matched += 1;
                renamed_keys.insert(contract.clone());
                outcomes.push(FileOutcome {
                    file_name: pdf.file_name.clone(),
                    identifier: Some(contract),
                    matched: true,
                    detail: Some(new_filename),
                });
            }
            Err(e) => {
                println!("错误: 重命名失败 {}: {}", pdf.file_name, e);
                stats.errors += 1;
                outcomes.push(FileOutcome {
                    file_name: pdf.file_name.clone(),
                    identifier: Some(contract),
                    matched: false,
                    detail: Some(e.to_string()),
                });
            }
        }
    }

    println!("\n[3/3] 正在Excel中标注匹配状态...");
    let (marked_ok, marked_fail) = matcher::annotate(&mut sheet, contract_col, &renamed_keys, false);
    let written = sheet.save_with_backup(&excel_path)?;
    println!("已保存标注结果到: {}", written.display());
    println!("原文件已备份为: {}", backup_path(&excel_path).display());
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
