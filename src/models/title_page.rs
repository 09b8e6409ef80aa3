use std::collections::HashMap;
use lazy_static::lazy_static;
use regex::Regex;
use crate::models::{Alignment, Screenplay};

lazy_static! {
    static ref CREDIT_LINE: Regex =
        Regex::new(r"(?i)^(written|screenplay|story|teleplay|created|adapted)?(\s*(and|&)\s*directed)?\s*by$").unwrap();
    static ref SOURCE_LINE: Regex = Regex::new(r"(?i)^(based on|from)\b").unwrap();
    static ref NUMERIC_DATE: Regex = Regex::new(r"\b\d{1,4}[/.\-]\d{1,2}[/.\-]\d{1,4}\b").unwrap();
    static ref MONTH_NAME: Regex = Regex::new(
        r"(?i)\b(jan(uary)?|feb(ruary)?|mar(ch)?|apr(il)?|may|june?|july?|aug(ust)?|sep(t(ember)?)?|oct(ober)?|nov(ember)?|dec(ember)?)\b"
    ).unwrap();
}

fn looks_like_date(text: &str) -> bool {
    NUMERIC_DATE.is_match(text)
        || (MONTH_NAME.is_match(text) && text.chars().any(|c| c.is_ascii_digit()))
}

fn append_field(fields: &mut HashMap<String, String>, key: &str, value: &str) {
    fields
        .entry(key.to_string())
        .and_modify(|existing| {
            existing.push('\n');
            existing.push_str(value);
        })
        .or_insert_with(|| value.to_string());
}

impl Screenplay {
    /// 按 Fountain 标题页的键名归类标题页内容
    ///
    /// 居中段落依次识别为 `Title`、`Credit`、`Author`、`Source`，
    /// 其余段落中像日期的归为 `Draft date`，剩下的归为 `Contact`。
    /// 没有标题页或标题页全为空行时返回空表。
    pub fn title_page_fields(&self) -> HashMap<String, String> {
        let mut fields = HashMap::new();
        let Some(title_page) = &self.title_page else {
            return fields;
        };

        let mut last_key: Option<&str> = None;
        for paragraph in &title_page.paragraphs {
            let text = paragraph.plain_text();
            let text = text.trim();
            if text.is_empty() {
                continue;
            }

            if paragraph.effective_alignment() == Alignment::Center {
                let key = if CREDIT_LINE.is_match(text) {
                    "Credit"
                } else if SOURCE_LINE.is_match(text) {
                    "Source"
                } else {
                    match last_key {
                        None => "Title",
                        Some("Credit") => "Author",
                        Some("Author") => "Source",
                        Some(other) => other,
                    }
                };
                append_field(&mut fields, key, text);
                last_key = Some(key);
            } else if looks_like_date(text) {
                append_field(&mut fields, "Draft date", text);
            } else {
                append_field(&mut fields, "Contact", text);
            }
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ElementType, Paragraph, TitlePage};

    fn line(text: &str, alignment: Alignment) -> Paragraph {
        let mut paragraph = Paragraph::with_text(ElementType::General, text);
        paragraph.alignment = Some(alignment);
        paragraph
    }

    #[test]
    fn no_title_page_gives_empty_map() {
        let screenplay = Screenplay::new();
        assert!(screenplay.title_page_fields().is_empty());

        let mut blank = Screenplay::new();
        blank.title_page = Some(TitlePage::new(vec![line("   ", Alignment::Center)]));
        assert!(blank.title_page_fields().is_empty());
    }

    #[test]
    fn classic_title_page_is_classified() {
        let mut screenplay = Screenplay::new();
        screenplay.title_page = Some(TitlePage::new(vec![
            line("BIG FISH", Alignment::Center),
            line("", Alignment::Center),
            line("Written by", Alignment::Center),
            line("John August", Alignment::Center),
            line("Based on the novel by Daniel Wallace", Alignment::Center),
            line("April 20, 2002", Alignment::Left),
            line("Agency Name", Alignment::Left),
            line("555-0100", Alignment::Left),
        ]));

        let fields = screenplay.title_page_fields();
        assert_eq!(fields["Title"], "BIG FISH");
        assert_eq!(fields["Credit"], "Written by");
        assert_eq!(fields["Author"], "John August");
        assert_eq!(fields["Source"], "Based on the novel by Daniel Wallace");
        assert_eq!(fields["Draft date"], "April 20, 2002");
        assert_eq!(fields["Contact"], "Agency Name\n555-0100");
    }

    #[test]
    fn numeric_dates_are_detected() {
        assert!(looks_like_date("10/12/2017"));
        assert!(looks_like_date("2017-10-12"));
        assert!(!looks_like_date("May the force be with you"));
        assert!(!looks_like_date("Suite 100"));
    }
}
