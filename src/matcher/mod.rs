//! 标识符与Excel行的匹配、匹配状态标注

use crate::excel::{normalize_key, Sheet};
use std::collections::HashSet;

/// 标注列的列名
pub const STATUS_COLUMN: &str = "匹配状态";

/// 每行的匹配结果，以本地化文本写入标注列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched,
    Unmatched,
}

impl MatchOutcome {
    pub fn status_text(&self) -> &'static str {
        match self {
            MatchOutcome::Matched => "成功",
            MatchOutcome::Unmatched => "失败",
        }
    }
}

/// 在指定列中查找键值相等的第一行（去空格后精确比较）
///
/// `ignore_ascii_case`用于身份证号末位X的大小写兼容。
/// 多行同键时取第一行。
pub fn find_row(sheet: &Sheet, col: usize, key: &str, ignore_ascii_case: bool) -> Option<usize> {
    (0..sheet.rows.len()).find(|&idx| {
        let cell = normalize_key(sheet.cell(idx, col));
        if ignore_ascii_case {
            cell.eq_ignore_ascii_case(key)
        } else {
            cell == key
        }
    })
}

/// 收集指定列的全部非空键值
pub fn key_set(sheet: &Sheet, col: usize, uppercase: bool) -> HashSet<String> {
    let mut keys = HashSet::new();
    for idx in 0..sheet.rows.len() {
        let mut key = normalize_key(sheet.cell(idx, col));
        if key.is_empty() {
            continue;
        }
        if uppercase {
            key = key.to_ascii_uppercase();
        }
        keys.insert(key);
    }
    keys
}

/// 在标注列中写入每行的匹配状态，返回（成功数, 失败数）
///
/// 键值为空的行不标注。`matched_keys`为已匹配成功的键值集合。
pub fn annotate(
    sheet: &mut Sheet,
    key_col: usize,
    matched_keys: &HashSet<String>,
    uppercase: bool,
) -> (usize, usize) {
    let status_col = sheet.ensure_column(STATUS_COLUMN);
    let mut success = 0;
    let mut failed = 0;

    for idx in 0..sheet.rows.len() {
        let mut key = normalize_key(sheet.cell(idx, key_col));
        if key.is_empty() {
            continue;
        }
        if uppercase {
            key = key.to_ascii_uppercase();
        }

        let outcome = if matched_keys.contains(&key) {
            success += 1;
            MatchOutcome::Matched
        } else {
            failed += 1;
            MatchOutcome::Unmatched
        };
        sheet.set_cell(idx, status_col, outcome.status_text());
    }

    (success, failed)
}
