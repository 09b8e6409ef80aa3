use serde::{Deserialize, Serialize};
use crate::error::FdxResult;

/// 通用 XML 元素树
///
/// 解码时先把整个文档读成 `Node` 树，再映射到具体的记录类型；
/// 记录类型不认识的属性和子元素也以 `Node` 的形式原样保留。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
    pub text: Option<String>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            ..Node::default()
        }
    }

    /// 创建只含文本的叶子元素，如 `<Word>abc</Word>`
    pub fn text_node(name: impl Into<String>, text: &str) -> Self {
        Node {
            name: name.into(),
            text: Some(text.to_string()),
            ..Node::default()
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// 值存在时追加属性，`None` 表示该属性在文档中缺省
    pub fn push_attr(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.attributes.push((key.to_string(), value.to_string()));
        }
    }

    /// 没有子元素也没有文本内容
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.as_deref().map_or(true, str::is_empty)
    }
}

/// 记录上未识别的属性与子元素，按文档顺序保存
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extra {
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Extra {
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty()
    }

    /// 把未识别的内容追加到已写好已知字段的元素之后
    pub fn apply_to(&self, node: &mut Node) {
        node.attributes.extend(self.attributes.iter().cloned());
        node.children.extend(self.children.iter().cloned());
    }
}

/// 与 FDX 中某一种元素一一对应的记录
pub trait XmlRecord: Sized {
    /// 元素标签名
    const TAG: &'static str;

    fn from_node(node: &Node) -> FdxResult<Self>;

    fn to_node(&self) -> Node;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_node_ignores_blank_text() {
        let mut node = Node::new("IgnoredRanges");
        assert!(node.is_empty());
        node.text = Some(String::new());
        assert!(node.is_empty());
        node.text = Some(" ".to_string());
        assert!(!node.is_empty());
    }

    #[test]
    fn push_attr_skips_absent_values() {
        let mut node = Node::new("Text");
        node.push_attr("Font", None);
        node.push_attr("Style", Some(""));
        assert_eq!(node.attributes, vec![("Style".to_string(), String::new())]);
        assert_eq!(node.attr("Style"), Some(""));
        assert_eq!(node.attr("Font"), None);
    }
}
