use std::fmt;
use bitflags::bitflags;
use log::warn;
use serde::{Deserialize, Serialize};
use crate::error::FdxResult;
use crate::models::metadata::{DynamicLabel, SceneProperties};
use crate::models::{Extra, Node, XmlRecord};

/// 段落类型
///
/// 未知的类型名通过 `Other` 原样保留，渲染时不套用任何特殊规则。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    General,
    SceneHeading,
    Action,
    Character,
    Dialogue,
    Parenthetical,
    Transition,
    CastList,
    Shot,
    Singing,
    Other(String),
}

impl ElementType {
    pub fn from_name(name: &str) -> Self {
        match name {
            "General" => ElementType::General,
            "Scene Heading" => ElementType::SceneHeading,
            "Action" => ElementType::Action,
            "Character" => ElementType::Character,
            "Dialogue" => ElementType::Dialogue,
            "Parenthetical" => ElementType::Parenthetical,
            "Transition" => ElementType::Transition,
            "Cast List" => ElementType::CastList,
            "Shot" => ElementType::Shot,
            "Singing" => ElementType::Singing,
            other => ElementType::Other(other.to_string()),
        }
    }

    /// FDX 中使用的类型名
    pub fn as_str(&self) -> &str {
        match self {
            ElementType::General => "General",
            ElementType::SceneHeading => "Scene Heading",
            ElementType::Action => "Action",
            ElementType::Character => "Character",
            ElementType::Dialogue => "Dialogue",
            ElementType::Parenthetical => "Parenthetical",
            ElementType::Transition => "Transition",
            ElementType::CastList => "Cast List",
            ElementType::Shot => "Shot",
            ElementType::Singing => "Singing",
            ElementType::Other(name) => name,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 段落对齐方式，缺省为左对齐
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Full,
    Other(String),
}

impl Alignment {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Left" => Alignment::Left,
            "Center" => Alignment::Center,
            "Right" => Alignment::Right,
            "Full" => Alignment::Full,
            other => Alignment::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Alignment::Left => "Left",
            Alignment::Center => "Center",
            Alignment::Right => "Right",
            Alignment::Full => "Full",
            Alignment::Other(name) => name,
        }
    }
}

bitflags! {
    /// 文本片段的样式标记，各位互相独立
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct StyleFlags: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const ALL_CAPS = 1 << 4;
    }
}

/// `Style` 属性中各标记的写出顺序
const STYLE_TOKENS: [(StyleFlags, &str); 5] = [
    (StyleFlags::BOLD, "Bold"),
    (StyleFlags::ITALIC, "Italic"),
    (StyleFlags::UNDERLINE, "Underline"),
    (StyleFlags::STRIKETHROUGH, "Strikeout"),
    (StyleFlags::ALL_CAPS, "AllCaps"),
];

impl StyleFlags {
    /// 解析 `Bold+Underline+AllCaps` 形式的样式串，返回识别出的标记和无法识别的部分
    pub fn parse(style: &str) -> (StyleFlags, Vec<String>) {
        let mut flags = StyleFlags::empty();
        let mut unknown = Vec::new();
        for token in style.split('+').map(str::trim).filter(|t| !t.is_empty()) {
            match token {
                "Bold" => flags |= StyleFlags::BOLD,
                "Italic" => flags |= StyleFlags::ITALIC,
                "Underline" => flags |= StyleFlags::UNDERLINE,
                "Strikeout" | "Strikethrough" => flags |= StyleFlags::STRIKETHROUGH,
                "AllCaps" => flags |= StyleFlags::ALL_CAPS,
                other => unknown.push(other.to_string()),
            }
        }
        (flags, unknown)
    }

    /// 按固定顺序拼出样式串，未识别的部分附在最后
    pub fn to_style_string(self, unknown: &[String]) -> String {
        STYLE_TOKENS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .chain(unknown.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("+")
    }
}

/// 一段样式一致的文本，对应 FDX 中的 `<Text>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    pub style: StyleFlags,
    /// `Style` 中无法识别的标记，如 `Shadow`
    pub style_extra: Vec<String>,
    pub adornment_style: Option<String>,
    pub background: Option<String>,
    pub color: Option<String>,
    pub font: Option<String>,
    pub revision_id: Option<String>,
    pub size: Option<String>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Extra::is_empty")]
    pub extra: Extra,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        TextRun {
            text: text.into(),
            ..TextRun::default()
        }
    }

    pub fn styled(text: impl Into<String>, style: StyleFlags) -> Self {
        TextRun {
            style,
            ..TextRun::new(text)
        }
    }
}

impl XmlRecord for TextRun {
    const TAG: &'static str = "Text";

    fn from_node(node: &Node) -> FdxResult<Self> {
        let mut run = TextRun::new(node.text.clone().unwrap_or_default());
        for (key, value) in &node.attributes {
            match key.as_str() {
                "AdornmentStyle" => run.adornment_style = Some(value.clone()),
                "Background" => run.background = Some(value.clone()),
                "Color" => run.color = Some(value.clone()),
                "Font" => run.font = Some(value.clone()),
                "RevisionID" => run.revision_id = Some(value.clone()),
                "Size" => run.size = Some(value.clone()),
                "Style" => {
                    let (flags, unknown) = StyleFlags::parse(value);
                    if !unknown.is_empty() {
                        warn!("无法识别的文本样式: {}", unknown.join("+"));
                    }
                    run.style = flags;
                    run.style_extra = unknown;
                }
                _ => run.extra.attributes.push((key.clone(), value.clone())),
            }
        }
        run.extra.children = node.children.clone();
        Ok(run)
    }

    fn to_node(&self) -> Node {
        let mut node = Node::text_node(Self::TAG, &self.text);
        node.push_attr("AdornmentStyle", self.adornment_style.as_deref());
        node.push_attr("Background", self.background.as_deref());
        node.push_attr("Color", self.color.as_deref());
        node.push_attr("Font", self.font.as_deref());
        node.push_attr("RevisionID", self.revision_id.as_deref());
        node.push_attr("Size", self.size.as_deref());
        if !self.style.is_empty() || !self.style_extra.is_empty() {
            let style = self.style.to_style_string(&self.style_extra);
            node.push_attr("Style", Some(&style));
        }
        self.extra.apply_to(&mut node);
        node
    }
}

/// 剧本中的一个段落（场景标题、一句对白等）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub element_type: Option<ElementType>,
    pub number: Option<String>,
    pub alignment: Option<Alignment>,
    pub first_indent: Option<String>,
    pub leading: Option<String>,
    pub left_indent: Option<String>,
    pub right_indent: Option<String>,
    pub space_before: Option<String>,
    pub spacing: Option<String>,
    pub starts_new_page: bool,
    pub scene_properties: Vec<SceneProperties>,
    pub dynamic_labels: Vec<DynamicLabel>,
    pub runs: Vec<TextRun>,
    #[serde(default, skip_serializing_if = "Extra::is_empty")]
    pub extra: Extra,
}

impl Paragraph {
    pub fn new(element_type: ElementType) -> Self {
        Paragraph {
            element_type: Some(element_type),
            ..Paragraph::default()
        }
    }

    /// 创建只含一段无样式文本的段落
    pub fn with_text(element_type: ElementType, text: impl Into<String>) -> Self {
        let mut paragraph = Paragraph::new(element_type);
        paragraph.runs.push(TextRun::new(text));
        paragraph
    }

    /// 生效的对齐方式，缺省为左对齐
    pub fn effective_alignment(&self) -> Alignment {
        self.alignment.clone().unwrap_or_default()
    }

    pub fn is_type(&self, element_type: &ElementType) -> bool {
        self.element_type.as_ref() == Some(element_type)
    }

    /// 所有文本片段拼接后的纯文本
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

fn is_yes(value: &str) -> bool {
    value.eq_ignore_ascii_case("yes") || value.eq_ignore_ascii_case("true")
}

impl XmlRecord for Paragraph {
    const TAG: &'static str = "Paragraph";

    fn from_node(node: &Node) -> FdxResult<Self> {
        let mut paragraph = Paragraph::default();
        for (key, value) in &node.attributes {
            match key.as_str() {
                "Type" => paragraph.element_type = Some(ElementType::from_name(value)),
                "Number" => paragraph.number = Some(value.clone()),
                "Alignment" => paragraph.alignment = Some(Alignment::from_name(value)),
                "FirstIndent" => paragraph.first_indent = Some(value.clone()),
                "Leading" => paragraph.leading = Some(value.clone()),
                "LeftIndent" => paragraph.left_indent = Some(value.clone()),
                "RightIndent" => paragraph.right_indent = Some(value.clone()),
                "SpaceBefore" => paragraph.space_before = Some(value.clone()),
                "Spacing" => paragraph.spacing = Some(value.clone()),
                "StartsNewPage" => paragraph.starts_new_page = is_yes(value),
                _ => paragraph.extra.attributes.push((key.clone(), value.clone())),
            }
        }
        for child in &node.children {
            match child.name.as_str() {
                "SceneProperties" => paragraph.scene_properties.push(SceneProperties::from_node(child)?),
                "DynamicLabel" => paragraph.dynamic_labels.push(DynamicLabel::from_node(child)?),
                "Text" => paragraph.runs.push(TextRun::from_node(child)?),
                _ => paragraph.extra.children.push(child.clone()),
            }
        }
        Ok(paragraph)
    }

    fn to_node(&self) -> Node {
        let mut node = Node::new(Self::TAG);
        node.push_attr("Type", self.element_type.as_ref().map(ElementType::as_str));
        node.push_attr("Number", self.number.as_deref());
        node.push_attr("Alignment", self.alignment.as_ref().map(Alignment::as_str));
        node.push_attr("FirstIndent", self.first_indent.as_deref());
        node.push_attr("Leading", self.leading.as_deref());
        node.push_attr("LeftIndent", self.left_indent.as_deref());
        node.push_attr("RightIndent", self.right_indent.as_deref());
        node.push_attr("SpaceBefore", self.space_before.as_deref());
        node.push_attr("Spacing", self.spacing.as_deref());
        if self.starts_new_page {
            node.push_attr("StartsNewPage", Some("Yes"));
        }
        node.children.extend(self.scene_properties.iter().map(XmlRecord::to_node));
        node.children.extend(self.dynamic_labels.iter().map(XmlRecord::to_node));
        node.children.extend(self.runs.iter().map(XmlRecord::to_node));
        self.extra.apply_to(&mut node);
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_type_names_round_trip() {
        for name in [
            "General", "Scene Heading", "Action", "Character", "Dialogue",
            "Parenthetical", "Transition", "Cast List", "Shot", "Singing",
        ] {
            let element_type = ElementType::from_name(name);
            assert!(!matches!(element_type, ElementType::Other(_)), "{}", name);
            assert_eq!(element_type.as_str(), name);
        }
        let unknown = ElementType::from_name("Lyrics Block");
        assert_eq!(unknown, ElementType::Other("Lyrics Block".to_string()));
        assert_eq!(unknown.as_str(), "Lyrics Block");
    }

    #[test]
    fn style_string_is_order_independent() {
        let (a, _) = StyleFlags::parse("Underline+Bold");
        let (b, _) = StyleFlags::parse("Bold+Underline");
        assert_eq!(a, b);
        assert_eq!(a.to_style_string(&[]), "Bold+Underline");
    }

    #[test]
    fn unknown_style_tokens_are_kept() {
        let (flags, unknown) = StyleFlags::parse("Shadow+Italic+Strikethrough");
        assert_eq!(flags, StyleFlags::ITALIC | StyleFlags::STRIKETHROUGH);
        assert_eq!(unknown, vec!["Shadow"]);
        assert_eq!(flags.to_style_string(&unknown), "Italic+Strikeout+Shadow");
    }

    #[test]
    fn text_run_node_keeps_whitespace() {
        let mut node = Node::text_node("Text", "  ");
        node.push_attr("Style", Some("Bold"));
        let run = TextRun::from_node(&node).unwrap();
        assert_eq!(run.text, "  ");
        assert_eq!(run.style, StyleFlags::BOLD);
        assert_eq!(run.to_node(), node);
    }

    #[test]
    fn paragraph_reads_flags_and_children() {
        let mut node = Node::new("Paragraph");
        node.push_attr("Type", Some("Scene Heading"));
        node.push_attr("StartsNewPage", Some("Yes"));
        let mut props = Node::new("SceneProperties");
        props.push_attr("Length", Some("1/8"));
        node.children.push(props);
        node.children.push(Node::text_node("Text", "INT. HOUSE - DAY"));

        let paragraph = Paragraph::from_node(&node).unwrap();
        assert!(paragraph.is_type(&ElementType::SceneHeading));
        assert!(paragraph.starts_new_page);
        assert_eq!(paragraph.scene_properties[0].length.as_deref(), Some("1/8"));
        assert_eq!(paragraph.plain_text(), "INT. HOUSE - DAY");
        assert_eq!(paragraph.effective_alignment(), Alignment::Left);
        assert_eq!(paragraph.to_node(), node);
    }
}
