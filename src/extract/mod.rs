//! 从PDF文件名中提取标识符（合同编号·身份证号·姓名）
//!
//! 三条流程各用一种提取方式，输入均为不含路径的文件名。
//! 提取失败（文件名不符合任何已知格式）与"Excel中未找到"是两种不同的结果。

use lazy_static::lazy_static;
use regex::Regex;

/// 协议书文件名的固定前缀
pub const AGREEMENT_PREFIX: &str = "协商解除劳动合同协议书";

/// 承诺书文件名中的文档标签
pub const PLEDGE_LABEL: &str = "承诺书";

lazy_static! {
    // 协议书_<合同编号>.pdf（完整匹配）
    static ref CONTRACT_RE: Regex =
        Regex::new(&format!(r"^{}_(\d+)\.pdf$", AGREEMENT_PREFIX)).unwrap();
    // 身份证号：17位数字 + 1位数字或X（文件名中任意位置）
    static ref ID_NUMBER_RE: Regex = Regex::new(r"\d{17}[\dXx]").unwrap();
    // 姓名-承诺书.pdf / 姓名-承诺书(数字).pdf
    static ref NAME_SUFFIX_RE: Regex =
        Regex::new(&format!(r"^(.+?)-{}(?:\(\d+\))?\.pdf$", PLEDGE_LABEL)).unwrap();
    // 承诺书-姓名.pdf / 承诺书-姓名(数字).pdf
    static ref NAME_PREFIX_RE: Regex =
        Regex::new(&format!(r"^{}-(.+?)(?:\(\d+\))?\.pdf$", PLEDGE_LABEL)).unwrap();
    // 通用形式：A-B.pdf / A-B(数字).pdf，含"承诺书"的一侧是文档标签，另一侧是姓名
    static ref NAME_GENERIC_RE: Regex =
        Regex::new(r"^(.+?)-(.+?)(?:\(\d+\))?\.pdf$").unwrap();
}

/// 从文件名中提取合同编号
///
/// 仅接受`协商解除劳动合同协议书_<数字>.pdf`这一种格式，
/// 其余文件名一律返回None。
pub fn contract_number(filename: &str) -> Option<String> {
    CONTRACT_RE
        .captures(filename)
        .map(|c| c[1].to_string())
}

/// 从文件名中提取身份证号（18位，末位可为X）
///
/// 在整个文件名中扫描，取最后一个匹配（最靠近文件名末尾的），
/// 末位x统一转为大写。
pub fn id_number(filename: &str) -> Option<String> {
    ID_NUMBER_RE
        .find_iter(filename)
        .last()
        .map(|m| m.as_str().to_ascii_uppercase())
}

/// 从文件名中提取姓名
///
/// 按固定优先级依次尝试以下格式，取第一个命中的：
/// 1. `姓名-承诺书.pdf` / `姓名-承诺书(数字).pdf`
/// 2. `承诺书-姓名.pdf` / `承诺书-姓名(数字).pdf`
/// 3. `A-B.pdf` / `A-B(数字).pdf`，其中恰有一侧含"承诺书"
pub fn person_name(filename: &str) -> Option<String> {
    if let Some(caps) = NAME_SUFFIX_RE.captures(filename) {
        let name = caps[1].trim().to_string();
        if !name.is_empty() {
            return Some(name);
        }
    }

    if let Some(caps) = NAME_PREFIX_RE.captures(filename) {
        let name = caps[1].trim().to_string();
        if !name.is_empty() {
            return Some(name);
        }
    }

    if let Some(caps) = NAME_GENERIC_RE.captures(filename) {
        let part1 = caps[1].trim();
        let part2 = caps[2].trim();
        if part2.contains(PLEDGE_LABEL) {
            if !part1.is_empty() {
                return Some(part1.to_string());
            }
        } else if part1.contains(PLEDGE_LABEL) && !part2.is_empty() {
            return Some(part2.to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_number_exact_shape() {
        assert_eq!(
            contract_number("协商解除劳动合同协议书_4008070793657015304.pdf"),
            Some("4008070793657015304".to_string())
        );
        assert_eq!(contract_number("协商解除劳动合同协议书_123.pdf"), Some("123".to_string()));
    }

    #[test]
    fn test_contract_number_rejects_other_shapes() {
        assert_eq!(contract_number("协商解除劳动合同协议书_张三.pdf"), None);
        assert_eq!(contract_number("其他文件_123.pdf"), None);
        assert_eq!(contract_number("协商解除劳动合同协议书_123.txt"), None);
        // 前后多余内容也不接受
        assert_eq!(contract_number("x协商解除劳动合同协议书_123.pdf"), None);
    }

    #[test]
    fn test_id_number_found_anywhere() {
        assert_eq!(
            id_number("协商解除劳动合同协议书_张三110101199001011234.pdf"),
            Some("110101199001011234".to_string())
        );
        assert_eq!(
            id_number("任意前缀11010119900101123X后缀.pdf"),
            Some("11010119900101123X".to_string())
        );
    }

    #[test]
    fn test_id_number_uppercases_x() {
        assert_eq!(
            id_number("张三11010119900101123x.pdf"),
            Some("11010119900101123X".to_string())
        );
    }

    #[test]
    fn test_id_number_last_match_wins() {
        assert_eq!(
            id_number("110101199001011234_220202200002022345.pdf"),
            Some("220202200002022345".to_string())
        );
    }

    #[test]
    fn test_id_number_wrong_shape() {
        // 长度不足
        assert_eq!(id_number("张三1101011990010112.pdf"), None);
        // 末位字母非X
        assert_eq!(id_number("张三1101011990010112Y34Z.pdf"), None);
        assert_eq!(id_number("没有编号.pdf"), None);
    }

    #[test]
    fn test_person_name_suffix_shape() {
        assert_eq!(person_name("陈玲-承诺书.pdf"), Some("陈玲".to_string()));
        assert_eq!(person_name("吴慧贤-承诺书(2).pdf"), Some("吴慧贤".to_string()));
    }

    #[test]
    fn test_person_name_prefix_shape() {
        assert_eq!(person_name("承诺书-陈冬如.pdf"), Some("陈冬如".to_string()));
        assert_eq!(person_name("承诺书-李四(3).pdf"), Some("李四".to_string()));
    }

    #[test]
    fn test_person_name_generic_shape() {
        assert_eq!(person_name("离职承诺书-王五.pdf"), Some("王五".to_string()));
        assert_eq!(person_name("赵六-入职承诺书.pdf"), Some("赵六".to_string()));
    }

    #[test]
    fn test_person_name_priority_order() {
        // 同时符合格式1和格式2时，格式1（姓名在前）优先
        assert_eq!(person_name("承诺书-承诺书.pdf"), Some("承诺书".to_string()));
    }

    #[test]
    fn test_person_name_no_match() {
        assert_eq!(person_name("随便一个文件.pdf"), None);
        assert_eq!(person_name("张三李四.pdf"), None);
        // 两侧都不含承诺书
        assert_eq!(person_name("张三-李四.pdf"), None);
    }
}
