use log::debug;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use crate::error::{FdxError, FdxResult};
use crate::fdx::normalize::is_self_closing;
use crate::models::{Node, Screenplay, XmlRecord};

/// FDX 文件固定的声明行
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no" ?>"#;

/// 每层缩进的空格数
const INDENT_SIZE: usize = 4;

/// 把文档模型序列化为 FDX 字节
pub fn encode(screenplay: &Screenplay) -> FdxResult<Vec<u8>> {
    let root = screenplay.to_node();
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);
    write_node(&mut writer, &root)?;
    let body = writer.into_inner();

    let mut out = Vec::with_capacity(XML_DECLARATION.len() + 1 + body.len());
    out.extend_from_slice(XML_DECLARATION.as_bytes());
    out.push(b'\n');
    out.extend_from_slice(&body);
    debug!("编码完成: {} 个正文段落, {} 字节", screenplay.paragraphs().len(), out.len());
    Ok(out)
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> FdxResult<()> {
    writer
        .write_event(event)
        .map_err(|e| FdxError::Encoding(e.to_string()))
}

/// XML 1.0 允许出现在文档中的字符
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{d7ff}' | '\u{e000}'..='\u{fffd}' | '\u{10000}'..='\u{10ffff}')
}

fn check_chars(value: &str, owner: &str) -> FdxResult<()> {
    match value.chars().find(|c| !is_xml_char(*c)) {
        Some(c) => Err(FdxError::Encoding(format!("<{}> 含有 XML 不允许的字符 U+{:04X}", owner, c as u32))),
        None => Ok(()),
    }
}

fn check_name(name: &str, owner: &str) -> FdxResult<()> {
    let invalid = name.is_empty()
        || name.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '.')
        || name.chars().any(|c| c.is_whitespace() || "<>&\"'/=!?".contains(c) || !is_xml_char(c));
    if invalid {
        return Err(FdxError::Encoding(format!("<{}> 中的名称无效: {:?}", owner, name)));
    }
    Ok(())
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> FdxResult<()> {
    check_name(&node.name, &node.name)?;
    let mut start = BytesStart::new(node.name.as_str());
    for (key, value) in &node.attributes {
        check_name(key, &node.name)?;
        check_chars(value, &node.name)?;
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if node.is_empty() {
        if is_self_closing(&node.name) {
            return write_event(writer, Event::Empty(start));
        }
        // 空文本让结束标签紧跟开始标签，不换行
        write_event(writer, Event::Start(start))?;
        write_event(writer, Event::Text(BytesText::new("")))?;
        return write_event(writer, Event::End(BytesEnd::new(node.name.as_str())));
    }

    let text = node.text.as_deref().unwrap_or_default();
    check_chars(text, &node.name)?;
    write_event(writer, Event::Start(start))?;
    if text.is_empty() {
        for child in &node.children {
            write_node(writer, child)?;
        }
        return write_event(writer, Event::End(BytesEnd::new(node.name.as_str())));
    }

    if node.children.is_empty() {
        write_event(writer, Event::Text(BytesText::new(text)))?;
    } else {
        // 混合内容不缩进，否则缩进空白会并入文本
        write_event(writer, Event::Text(BytesText::new("")))?;
        let mut inner = Writer::new(Vec::new());
        if text.trim().is_empty() {
            write_event(&mut inner, Event::CData(BytesCData::new(text)))?;
        } else {
            write_event(&mut inner, Event::Text(BytesText::new(text)))?;
        }
        for child in &node.children {
            write_node(&mut inner, child)?;
        }
        writer.get_mut().extend_from_slice(&inner.into_inner());
    }
    write_event(writer, Event::End(BytesEnd::new(node.name.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ElementType, Paragraph, TextRun, WindowState};

    fn encode_str(screenplay: &Screenplay) -> String {
        String::from_utf8(encode(screenplay).unwrap()).unwrap()
    }

    #[test]
    fn new_screenplay_layout() {
        let out = encode_str(&Screenplay::new());
        assert_eq!(
            out,
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="no" ?>"#, "\n",
                r#"<FinalDraft DocumentType="Script" Template="No" Version="1">"#, "\n",
                "    <Content></Content>\n",
                "</FinalDraft>",
            )
        );
    }

    #[test]
    fn text_stays_on_one_line_and_leaves_self_close() {
        let mut screenplay = Screenplay::new();
        screenplay.body.as_mut().unwrap().paragraphs.push(Paragraph::with_text(ElementType::Action, "Tom & Jerry <run>"));
        screenplay.window_state = Some(WindowState {
            height: Some("800".to_string()),
            ..WindowState::default()
        });

        let out = encode_str(&screenplay);
        assert!(out.contains("        <Paragraph Type=\"Action\">\n            <Text>Tom &amp; Jerry &lt;run&gt;</Text>\n        </Paragraph>"));
        assert!(out.contains("    <WindowState Height=\"800\"/>"));
    }

    #[test]
    fn mixed_content_is_written_inline() {
        let mut run = TextRun::new("abc");
        run.extra.children.push(Node::new("Note"));
        let mut screenplay = Screenplay::new();
        let mut paragraph = Paragraph::new(ElementType::Action);
        paragraph.runs.push(run);
        screenplay.body.as_mut().unwrap().paragraphs.push(paragraph);

        let out = encode_str(&screenplay);
        assert!(out.contains("            <Text>abc<Note></Note></Text>\n"));
        assert_eq!(crate::fdx::decode(out.as_bytes()).unwrap(), screenplay);
    }

    #[test]
    fn blank_text_beside_children_survives() {
        let mut run = TextRun::new("  ");
        run.extra.children.push(Node::text_node("Note", "n"));
        let mut screenplay = Screenplay::new();
        let mut paragraph = Paragraph::new(ElementType::Action);
        paragraph.runs.push(run);
        screenplay.body.as_mut().unwrap().paragraphs.push(paragraph);

        let out = encode_str(&screenplay);
        assert!(out.contains("<Text><![CDATA[  ]]><Note>n</Note></Text>"));
        assert_eq!(crate::fdx::decode(out.as_bytes()).unwrap(), screenplay);
    }

    #[test]
    fn forbidden_characters_are_rejected() {
        let mut screenplay = Screenplay::new();
        screenplay.body.as_mut().unwrap().paragraphs.push(Paragraph::with_text(ElementType::Action, "bell\u{1}"));
        assert!(matches!(encode(&screenplay), Err(FdxError::Encoding(_))));

        let mut screenplay = Screenplay::new();
        screenplay.extra.attributes.push(("Note".to_string(), "\u{fffe}".to_string()));
        assert!(matches!(encode(&screenplay), Err(FdxError::Encoding(_))));

        let mut screenplay = Screenplay::new();
        screenplay.extra.children.push(Node::new("Bad Name"));
        assert!(matches!(encode(&screenplay), Err(FdxError::Encoding(_))));

        let mut screenplay = Screenplay::new();
        screenplay.body.as_mut().unwrap().paragraphs.push(Paragraph::with_text(ElementType::Action, "tab\tand\nnewline"));
        assert!(encode(&screenplay).is_ok());
    }
}
