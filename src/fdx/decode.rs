use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use crate::error::{FdxError, FdxResult};
use crate::models::{Node, Screenplay, XmlRecord};

/// 把 FDX 字节解码为文档模型
pub fn decode(src: &[u8]) -> FdxResult<Screenplay> {
    let root = read_tree(src)?;
    let screenplay = Screenplay::from_node(&root)?;
    debug!(
        "解码完成: {} 个正文段落, 标题页: {}",
        screenplay.paragraphs().len(),
        screenplay.title_page.is_some()
    );
    Ok(screenplay)
}

fn malformed(message: impl Into<String>) -> FdxError {
    FdxError::MalformedInput(message.into())
}

/// 读取整个 XML 文档为通用元素树
///
/// 元素之间仅起排版作用的空白会被丢弃；没有子元素的元素保留全部文本，包括纯空白。
/// 含 CDATA 的元素即使有子元素也保留纯空白文本。
pub fn read_tree(src: &[u8]) -> FdxResult<Node> {
    let text = std::str::from_utf8(src).map_err(|e| malformed(format!("输入不是有效的 UTF-8: {}", e)))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = Reader::from_str(text);
    let mut stack: Vec<Node> = Vec::new();
    // 与 stack 对齐：该元素是否出现过 CDATA
    let mut has_cdata: Vec<bool> = Vec::new();
    let mut root: Option<Node> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| malformed(format!("第 {} 字节处 XML 解析失败: {}", reader.buffer_position(), e)))?;
        match event {
            Event::Start(start) => {
                stack.push(start_node(&start)?);
                has_cdata.push(false);
            }
            Event::Empty(start) => {
                let node = start_node(&start)?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::End(_) => {
                let mut node = stack.pop().ok_or_else(|| malformed("出现多余的结束标签"))?;
                let literal = has_cdata.pop().unwrap_or(false);
                let blank = node.text.as_deref().map_or(false, |t| t.trim().is_empty());
                if blank && !literal && !node.children.is_empty() {
                    node.text = None;
                }
                attach(&mut stack, &mut root, node)?;
            }
            Event::Text(content) => {
                let content = content
                    .unescape()
                    .map_err(|e| malformed(format!("文本转义无效: {}", e)))?;
                push_text(&mut stack, &content)?;
            }
            Event::CData(data) => {
                let content = String::from_utf8(data.into_inner().into_owned())
                    .map_err(|e| malformed(format!("CDATA 不是有效的 UTF-8: {}", e)))?;
                push_text(&mut stack, &content)?;
                if let Some(flag) = has_cdata.last_mut() {
                    *flag = true;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(malformed(format!("元素 <{}> 没有闭合", open.name)));
    }
    root.ok_or_else(|| malformed("文档中没有根元素"))
}

fn start_node(start: &BytesStart<'_>) -> FdxResult<Node> {
    let mut node = Node::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
    for attr in start.attributes() {
        let attr = attr.map_err(|e| malformed(format!("属性无效: {}", e)))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| malformed(format!("属性 {} 的值无效: {}", key, e)))?
            .into_owned();
        node.attributes.push((key, value));
    }
    Ok(node)
}

fn attach(stack: &mut [Node], root: &mut Option<Node>, node: Node) -> FdxResult<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else if root.is_some() {
        return Err(malformed(format!("存在多个根元素: <{}>", node.name)));
    } else {
        *root = Some(node);
    }
    Ok(())
}

fn push_text(stack: &mut [Node], content: &str) -> FdxResult<()> {
    match stack.last_mut() {
        Some(node) => node.text.get_or_insert_with(String::new).push_str(content),
        None if content.trim().is_empty() => {}
        None => return Err(malformed("根元素之外出现文本")),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_whitespace_is_dropped() {
        let src = b"<FinalDraft>\n  <Content>\n    <Paragraph Type=\"Action\">\n      <Text> </Text>\n    </Paragraph>\n  </Content>\n</FinalDraft>";
        let root = read_tree(src).unwrap();
        assert_eq!(root.text, None);
        let paragraph = &root.children[0].children[0];
        assert_eq!(paragraph.text, None);
        assert_eq!(paragraph.children[0].text.as_deref(), Some(" "));
    }

    #[test]
    fn entities_and_cdata_are_text() {
        let src = b"<FinalDraft><Content><Paragraph><Text>A &amp; B<![CDATA[ <c>]]></Text></Paragraph></Content></FinalDraft>";
        let screenplay = decode(src).unwrap();
        assert_eq!(screenplay.paragraphs()[0].runs[0].text, "A & B <c>");
    }

    #[test]
    fn blank_cdata_beside_children_is_kept() {
        let src = b"<FinalDraft><Note><![CDATA[  ]]><Mark/></Note></FinalDraft>";
        let root = read_tree(src).unwrap();
        assert_eq!(root.children[0].text.as_deref(), Some("  "));
        assert_eq!(root.children[0].children[0].name, "Mark");
    }

    #[test]
    fn malformed_inputs_fail() {
        for src in [
            &b""[..],
            b"not xml at all",
            b"<FinalDraft><Content></FinalDraft>",
            b"<FinalDraft>",
            b"<FinalDraft></FinalDraft><FinalDraft></FinalDraft>",
            b"<Screenplay></Screenplay>",
            b"\xff\xfe<FinalDraft/>",
        ] {
            let err = decode(src).unwrap_err();
            assert!(matches!(err, FdxError::MalformedInput(_)), "{:?}", String::from_utf8_lossy(src));
        }
    }

    #[test]
    fn absent_sections_decode() {
        let screenplay = decode(b"<?xml version=\"1.0\"?><FinalDraft DocumentType=\"Script\"/>").unwrap();
        assert!(screenplay.body.is_none());
        assert!(screenplay.title_page.is_none());
        assert_eq!(screenplay.document_type.as_deref(), Some("Script"));
    }
}
