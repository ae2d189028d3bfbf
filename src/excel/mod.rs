//! Excel读写（加载·标注·备份回写）
//!
//! 读取使用calamine（兼容旧版.xls与新版.xlsx/.xlsm），
//! 写入使用rust_xlsxwriter（仅生成.xlsx）。

use crate::error::{MatchPdfError, Result};
use calamine::{open_workbook, open_workbook_auto, Data, Range, Reader, Xls, Xlsx};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// 内存中的表格：表头 + 按行存储的单元格文本
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// 读取Excel文件的第一个工作表
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MatchPdfError::ExcelNotFound(path.display().to_string()));
        }

        let range = open_first_sheet(path)?;
        let mut rows_iter = range.rows();

        let header = rows_iter
            .next()
            .ok_or_else(|| MatchPdfError::ExcelRead("工作表为空".to_string()))?;
        let columns: Vec<String> = header.iter().map(cell_to_string).collect();

        let width = columns.len();
        let rows = rows_iter
            .map(|row| {
                let mut cells: Vec<String> = row.iter().map(cell_to_string).collect();
                cells.resize(width, String::new());
                cells
            })
            .collect();

        Ok(Sheet { columns, rows })
    }

    /// 按关键字查找列（表头去空格后包含关键字即命中，依次尝试各关键字）
    pub fn column_index(&self, keywords: &[&str]) -> Option<usize> {
        for keyword in keywords {
            if let Some(idx) = self
                .columns
                .iter()
                .position(|c| c.trim().contains(keyword))
            {
                return Some(idx);
            }
        }
        None
    }

    /// 查找必需列，找不到时报错并列出可用列
    pub fn require_column(&self, keywords: &[&str]) -> Result<usize> {
        self.column_index(keywords)
            .ok_or_else(|| MatchPdfError::MissingColumn {
                column: keywords[0].to_string(),
                available: self.columns.clone(),
            })
    }

    /// 确保存在指定名称的列（精确匹配），不存在则追加并用空串补齐各行
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.columns.iter().position(|c| c == name) {
            return idx;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.columns.len() - 1
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: impl Into<String>) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value.into();
        }
    }

    /// 先备份原文件再回写
    ///
    /// - .xlsx/.xlsm: 复制原文件到`<文件名>.backup`后原地覆盖
    /// - .xls: 将原文件移为`<文件名>.backup`，另存为同名.xlsx（写入端不支持旧格式）
    ///
    /// 返回实际写入的路径。已存在的旧备份会被覆盖。
    pub fn save_with_backup(&self, path: &Path) -> Result<PathBuf> {
        let backup = backup_path(path);
        if backup.exists() {
            std::fs::remove_file(&backup)
                .map_err(|e| MatchPdfError::Backup(format!("{}: {}", backup.display(), e)))?;
        }

        let is_legacy = path
            .extension()
            .map(|e| e.to_string_lossy().eq_ignore_ascii_case("xls"))
            .unwrap_or(false);

        let out_path = if is_legacy {
            std::fs::rename(path, &backup)
                .map_err(|e| MatchPdfError::Backup(format!("{}: {}", backup.display(), e)))?;
            path.with_extension("xlsx")
        } else {
            std::fs::copy(path, &backup)
                .map_err(|e| MatchPdfError::Backup(format!("{}: {}", backup.display(), e)))?;
            path.to_path_buf()
        };

        self.write(&out_path)?;
        Ok(out_path)
    }

    /// 写出为.xlsx，保持列顺序
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col, name) in self.columns.iter().enumerate() {
            worksheet.write_string(0, col as u16, name.as_str())?;
        }
        for (row_idx, row) in self.rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    worksheet.write_string((row_idx + 1) as u32, col as u16, value.as_str())?;
                }
            }
        }

        workbook.save(path)?;
        Ok(())
    }
}

/// 备份路径：原文件名追加`.backup`
pub fn backup_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    path.with_file_name(format!("{}.backup", file_name))
}

/// 打开第一个工作表
///
/// 先按扩展名自动选择解析器，失败时依次尝试xlsx、xls
/// （实际数据中存在扩展名为.xls但内容是xlsx的文件）。
fn open_first_sheet(path: &Path) -> Result<Range<Data>> {
    let mut last_error = String::new();

    match open_workbook_auto(path) {
        Ok(mut workbook) => match workbook.worksheet_range_at(0) {
            Some(Ok(range)) => return Ok(range),
            Some(Err(e)) => last_error = e.to_string(),
            None => last_error = "文件中没有工作表".to_string(),
        },
        Err(e) => last_error = e.to_string(),
    }

    let xlsx: std::result::Result<Xlsx<_>, _> = open_workbook(path);
    if let Ok(mut workbook) = xlsx {
        if let Some(Ok(range)) = workbook.worksheet_range_at(0) {
            return Ok(range);
        }
    }

    let xls: std::result::Result<Xls<_>, _> = open_workbook(path);
    if let Ok(mut workbook) = xls {
        if let Some(Ok(range)) = workbook.worksheet_range_at(0) {
            return Ok(range);
        }
    }

    Err(MatchPdfError::ExcelRead(last_error))
}

/// 单元格转文本：整数值的数字单元格去掉小数点（避免编号变成浮点表示）
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{:.0}", f)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// 键值规整：去空格；含小数点且可解析为数字的值截断为整数数字串
/// （Excel数字单元格可能带上`.0`尾巴）
pub fn normalize_key(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.contains('.') {
        if let Ok(f) = trimmed.parse::<f64>() {
            return format!("{:.0}", f.trunc());
        }
    }
    trimmed.to_string()
}
