//! 排版字符替换
//!
//! 仅用于 PDF 渲染，文本产物保留原字符

use phf::phf_map;

/// 需要替换为 ASCII 的排版字符
static TYPOGRAPHIC_REPLACEMENTS: phf::Map<char, char> = phf_map! {
    '\u{2013}' => '-',  // en dash
    '\u{2014}' => '-',  // em dash
    '\u{2019}' => '\'', // right single quotation mark
};

/// 把破折号和右单引号替换成普通 ASCII 字符
pub fn normalize_typography(text: &str) -> String {
    text.chars()
        .map(|c| TYPOGRAPHIC_REPLACEMENTS.get(&c).copied().unwrap_or(c))
        .collect()
}
