use lazy_static::lazy_static;
use regex::Regex;

/// 只有属性、从不包含文本的元素；写出时必须使用 `<Tag .../>` 形式，
/// Final Draft 不接受这些元素写成 `<Tag ...></Tag>`。
pub const SELF_CLOSING_TAGS: [&str; 18] = [
    "SceneProperties",
    "Member",
    "FontSpec",
    "DynamicLabel",
    "IgnoredRanges",
    "AutoCastList",
    "WindowState",
    "TextState",
    "ParagraphSpec",
    "Behavior",
    "ScriptNoteDefinition",
    "DialogueBreaks",
    "SceneBreaks",
    "LockedPages",
    "Revision",
    "ActivateIn",
    "Actor",
    "Element",
];

lazy_static! {
    static ref EXPLICIT_EMPTY: Vec<(Regex, String)> = SELF_CLOSING_TAGS
        .iter()
        .map(|tag| {
            let pattern = format!(r"<{tag}(\s[^<>]*)?></{tag}>", tag = tag);
            (Regex::new(&pattern).unwrap(), format!("<{}${{1}}/>", tag))
        })
        .collect();
}

pub fn is_self_closing(tag: &str) -> bool {
    SELF_CLOSING_TAGS.contains(&tag)
}

/// 把已序列化文本中列表内元素的 `<Tag attr="v"></Tag>` 改写为 `<Tag attr="v"/>`
///
/// 编码器本身已按元素种类决定是否自闭合，所以对编码结果调用本函数不会产生变化；
/// 多次调用与调用一次结果相同。
pub fn normalize_self_closing(src: &str) -> String {
    let mut out = src.to_string();
    for (pattern, replacement) in EXPLICIT_EMPTY.iter() {
        if pattern.is_match(&out) {
            out = pattern.replace_all(&out, replacement.as_str()).into_owned();
        }
    }
    out
}
