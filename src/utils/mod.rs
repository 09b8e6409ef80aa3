pub mod fountain_constants;

pub use fountain_constants::{FountainConstants, TitleKeywordFormat, BLOCK_REGEX, TITLE_PAGE_DISPLAY};

/// 检查一行文本是否为空行
///
/// 只含两个及以上空格的行在对白中表示有意的空行，不算作空行
pub fn is_blank_line(text: &str, in_dialogue: bool) -> bool {
    if in_dialogue && BLOCK_REGEX["line_break"].is_match(text) {
        return false;
    }
    BLOCK_REGEX["block_end"].is_match(text)
}

/// 把标题页的键转成 token 类型，如 `Draft date` → `draft_date`
pub fn slugify_key(key: &str) -> String {
    key.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
