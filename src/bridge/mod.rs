//! Fountain 解析结果到 FDX 文档模型的转换

use log::debug;
use crate::models::{Alignment, ElementType, Paragraph, Screenplay, ScriptToken, Section, TitlePage};
use crate::parser::text_processor::parse_inline_styles;
use crate::parser::FountainScript;
use crate::utils::TITLE_PAGE_DISPLAY;

/// 由 Fountain 解析结果构建剧本
///
/// 正文元素按顺序转为段落，无法对应的元素被丢弃；
/// 标题页中有可转换的键时生成标题页。
pub fn from_fountain(script: &FountainScript) -> Screenplay {
    let mut screenplay = Screenplay::new();
    screenplay.title_page = title_page_section(&script.title_page);

    let mut paragraphs = Vec::new();
    let mut new_page = false;
    for token in &script.tokens {
        if token.is_type(&["page_break"]) {
            new_page = true;
            continue;
        }
        match token_paragraph(token) {
            Some(mut paragraph) => {
                paragraph.starts_new_page = std::mem::take(&mut new_page);
                paragraphs.push(paragraph);
            }
            None => debug!("第 {} 行的 {} 元素没有对应的段落类型，已忽略", token.line, token.token_type),
        }
    }

    screenplay.body = Some(Section::new(paragraphs));
    screenplay
}

fn styled_paragraph(element_type: ElementType, text: &str) -> Paragraph {
    let mut paragraph = Paragraph::new(element_type);
    paragraph.runs = parse_inline_styles(text);
    paragraph
}

// 单个正文元素转为段落
fn token_paragraph(token: &ScriptToken) -> Option<Paragraph> {
    let paragraph = match token.token_type.as_str() {
        "scene_heading" => {
            let mut paragraph = styled_paragraph(ElementType::SceneHeading, &token.text);
            paragraph.number = token.number.clone();
            paragraph
        }
        "action" => styled_paragraph(ElementType::Action, &token.text),
        "character" => styled_paragraph(ElementType::Character, &token.text),
        "dialogue" => styled_paragraph(ElementType::Dialogue, &token.text),
        "parenthetical" => styled_paragraph(ElementType::Parenthetical, &token.text),
        "transition" => styled_paragraph(ElementType::Transition, &token.text),
        "lyrics" => styled_paragraph(ElementType::Singing, &token.text),
        "centered" => {
            let mut paragraph = styled_paragraph(ElementType::Action, &token.text);
            paragraph.alignment = Some(Alignment::Center);
            paragraph
        }
        _ => return None,
    };
    Some(paragraph)
}

// 标题页键值转为 General 段落：页面中部的键居中，其余左对齐
fn title_page_section(tokens: &[ScriptToken]) -> Option<TitlePage> {
    let mut fields: Vec<(&ScriptToken, u8, i32)> = tokens
        .iter()
        .filter_map(|token| {
            let format = TITLE_PAGE_DISPLAY.get(token.token_type.as_str())?;
            let rank = if format.position == "cc" { 0 } else { 1 };
            Some((token, rank, format.index))
        })
        .collect();
    if fields.is_empty() {
        return None;
    }
    fields.sort_by_key(|&(_, rank, index)| (rank, index));

    let mut paragraphs = Vec::new();
    for (token, rank, _) in fields {
        let alignment = if rank == 0 { Alignment::Center } else { Alignment::Left };
        for line in token.text.lines() {
            let mut paragraph = styled_paragraph(ElementType::General, line.trim());
            paragraph.alignment = Some(alignment.clone());
            paragraphs.push(paragraph);
        }
    }
    Some(TitlePage::new(paragraphs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StyleFlags;

    fn token(token_type: &str, text: &str) -> ScriptToken {
        ScriptToken::new(token_type, text, 0)
    }

    #[test]
    fn body_tokens_map_to_paragraphs() {
        let mut heading = token("scene_heading", "INT. HOUSE - DAY");
        heading.number = Some("4".to_string());
        let script = FountainScript {
            tokens: vec![
                heading,
                token("action", "Quiet."),
                token("note", "ignored"),
                token("page_break", ""),
                token("character", "BOB"),
                token("dialogue", "*Hi*."),
                token("centered", "THE END"),
            ],
            title_page: Vec::new(),
        };

        let screenplay = from_fountain(&script);
        assert!(screenplay.title_page.is_none());
        let paragraphs = screenplay.paragraphs();
        assert_eq!(paragraphs.len(), 5);
        assert!(paragraphs[0].is_type(&ElementType::SceneHeading));
        assert_eq!(paragraphs[0].number.as_deref(), Some("4"));
        assert!(!paragraphs[1].starts_new_page);
        assert!(paragraphs[2].is_type(&ElementType::Character));
        assert!(paragraphs[2].starts_new_page);
        assert_eq!(paragraphs[3].runs[0].style, StyleFlags::ITALIC);
        assert_eq!(paragraphs[3].plain_text(), "Hi.");
        assert_eq!(paragraphs[4].effective_alignment(), Alignment::Center);
        assert!(paragraphs[4].is_type(&ElementType::Action));
    }

    #[test]
    fn title_page_order_and_alignment() {
        let script = FountainScript {
            tokens: Vec::new(),
            title_page: vec![
                token("contact", "1 Main St\nSpringfield"),
                token("author", "Jane Doe"),
                token("title", "Brick"),
                token("notes", "dropped"),
                token("draft_date", "1/2/2024"),
            ],
        };

        let screenplay = from_fountain(&script);
        let title_page = screenplay.title_page.as_ref().unwrap();
        let texts: Vec<String> = title_page.paragraphs.iter().map(Paragraph::plain_text).collect();
        assert_eq!(texts, ["Brick", "Jane Doe", "1/2/2024", "1 Main St", "Springfield"]);
        assert_eq!(title_page.paragraphs[0].effective_alignment(), Alignment::Center);
        assert_eq!(title_page.paragraphs[2].effective_alignment(), Alignment::Left);
        assert!(title_page.paragraphs.iter().all(|p| p.is_type(&ElementType::General)));
    }

    #[test]
    fn unknown_title_keys_only() {
        let script = FountainScript {
            tokens: Vec::new(),
            title_page: vec![token("watermark", "DRAFT")],
        };
        assert!(from_fountain(&script).title_page.is_none());
    }
}
