use std::collections::HashMap;
use lazy_static::lazy_static;
use regex::Regex;

/// 标题页键在 FDX 标题页中的位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleKeywordFormat {
    pub position: String,  // cc: 页面中部居中; br: 右下角，FDX 中左对齐
    pub index: i32,        // 同一位置内的先后顺序
}

pub struct FountainConstants;

impl FountainConstants {
    // 行内样式标记，较长的必须排在前面
    pub fn style_markers() -> [&'static str; 5] {
        ["***", "**", "*", "~~", "_"]
    }

    // 可转义的样式字符
    pub fn escapable_chars() -> &'static str {
        "*_~\\"
    }
}

lazy_static! {
    // 块级元素正则
    pub static ref BLOCK_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        map.insert("block_end", Regex::new(r"^\s*$").unwrap());
        map.insert("line_break", Regex::new(r"^ {2,}$").unwrap());
        map.insert("action_force", Regex::new(r"^(\s*)(\!)(.*)").unwrap());
        map.insert("lyric", Regex::new(r"^(\s*)(\~)(\s*)(.*)").unwrap());
        map
    };

    // 标题页中会转成 FDX 段落的键
    pub static ref TITLE_PAGE_DISPLAY: HashMap<&'static str, TitleKeywordFormat> = {
        let mut map = HashMap::new();
        map.insert("title", TitleKeywordFormat { position: "cc".to_string(), index: 0 });
        map.insert("credit", TitleKeywordFormat { position: "cc".to_string(), index: 1 });
        map.insert("author", TitleKeywordFormat { position: "cc".to_string(), index: 2 });
        map.insert("authors", TitleKeywordFormat { position: "cc".to_string(), index: 3 });
        map.insert("source", TitleKeywordFormat { position: "cc".to_string(), index: 4 });
        map.insert("draft_date", TitleKeywordFormat { position: "br".to_string(), index: 0 });
        map.insert("date", TitleKeywordFormat { position: "br".to_string(), index: 1 });
        map.insert("contact", TitleKeywordFormat { position: "br".to_string(), index: 2 });
        map.insert("contact_info", TitleKeywordFormat { position: "br".to_string(), index: 3 });
        map
    };
}
