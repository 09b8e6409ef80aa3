use std::collections::HashMap;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use crate::models::ScriptToken;
use crate::utils::{is_blank_line, slugify_key, BLOCK_REGEX};

/// Fountain 解析结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FountainScript {
    /// 正文元素，按出现顺序
    pub tokens: Vec<ScriptToken>,
    /// 标题页键值，token_type 为规范化后的键名
    pub title_page: Vec<ScriptToken>,
}

impl FountainScript {
    pub fn new() -> Self {
        FountainScript::default()
    }

    // 按键名查找标题页的值
    pub fn title_value(&self, key: &str) -> Option<&str> {
        self.title_page
            .iter()
            .find(|token| token.token_type == key)
            .map(|token| token.text.as_str())
    }
}

pub struct FountainParser {
    result: FountainScript,
    in_dialogue: bool,
    last_blank: bool,
    regex: HashMap<String, Regex>,
}

impl Default for FountainParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FountainParser {
    pub fn new() -> Self {
        let mut parser = FountainParser {
            result: FountainScript::new(),
            in_dialogue: false,
            last_blank: true,
            regex: HashMap::new(),
        };

        // 初始化正则表达式
        parser.init_regex();

        parser
    }

    /// 解析 Fountain 文本
    pub fn parse(&mut self, script: &str) -> FountainScript {
        self.result = FountainScript::new();
        self.in_dialogue = false;
        self.last_blank = true;

        let script = script.replace("\r\n", "\n").replace('\r', "\n");
        let script = script.strip_prefix('\u{feff}').unwrap_or(&script);
        let lines: Vec<&str> = script.split('\n').collect();

        let body_start = self.parse_title_page(&lines);
        for index in body_start..lines.len() {
            let next_blank = lines
                .get(index + 1)
                .map_or(true, |next| is_blank_line(next, false));
            self.parse_line(lines[index], index + 1, next_blank);
        }

        debug!(
            "Fountain 解析完成: {} 个元素, {} 个标题页字段",
            self.result.tokens.len(),
            self.result.title_page.len()
        );
        std::mem::take(&mut self.result)
    }

    // 解析标题页，返回正文开始的行号
    fn parse_title_page(&mut self, lines: &[&str]) -> usize {
        let title_regex = &self.regex["title_page"];
        let starts_title_page = lines
            .first()
            .map_or(false, |line| title_regex.is_match(line));
        if !starts_title_page {
            return 0;
        }

        let mut index = 0;
        while index < lines.len() && !is_blank_line(lines[index], false) {
            let line = lines[index];
            if let Some(caps) = title_regex.captures(line) {
                let key = slugify_key(&caps[1]);
                let value = caps[2].trim();
                self.result.title_page.push(ScriptToken::new(&key, value, index + 1));
            } else if let Some(token) = self.result.title_page.last_mut() {
                // 缩进的续行
                if !token.text.is_empty() {
                    token.text.push('\n');
                }
                token.text.push_str(line.trim());
            }
            index += 1;
        }
        index
    }

    fn parse_line(&mut self, line: &str, line_num: usize, next_blank: bool) {
        if is_blank_line(line, self.in_dialogue) {
            self.in_dialogue = false;
            self.last_blank = true;
            return;
        }
        let last_blank = self.last_blank;
        self.last_blank = false;
        let trimmed = line.trim();

        if self.in_dialogue {
            if self.regex["parenthetical"].is_match(trimmed) {
                self.push_token(ScriptToken::new("parenthetical", trimmed, line_num));
            } else {
                self.push_or_extend("dialogue", trimmed, line_num);
            }
            return;
        }

        if self.regex["page_break"].is_match(line) {
            self.push_token(ScriptToken::new("page_break", "", line_num));
            self.last_blank = true;
            return;
        }

        if let Some(caps) = BLOCK_REGEX["action_force"].captures(line) {
            self.push_token(ScriptToken::new("action", caps[3].trim(), line_num));
            return;
        }

        if let Some(caps) = BLOCK_REGEX["lyric"].captures(line) {
            self.push_token(ScriptToken::new("lyrics", caps[4].trim_end(), line_num));
            return;
        }

        if let Some(caps) = self.regex["centered"].captures(line) {
            self.push_token(ScriptToken::new("centered", caps[1].trim(), line_num));
            return;
        }

        if last_blank {
            if let Some(token) = self.scene_heading(trimmed, line_num) {
                self.push_token(token);
                return;
            }

            if let Some(caps) = self.regex["transition"].captures(line) {
                let text = if caps.get(1).is_some() {
                    trimmed.trim_start_matches('>').trim()
                } else {
                    trimmed
                };
                self.push_token(ScriptToken::new("transition", text, line_num));
                return;
            }

            if !next_blank && self.regex["character"].is_match(line) {
                let text = self.trim_character_force_symbol(trimmed);
                let text = self.trim_dual_marker(&text);
                self.push_token(ScriptToken::new("character", text, line_num));
                self.in_dialogue = true;
                return;
            }
        }

        if last_blank {
            self.push_token(ScriptToken::new("action", trimmed, line_num));
        } else {
            self.push_or_extend("action", trimmed, line_num);
        }
    }

    // 识别场景标题，支持 `.` 强制标记和 `#编号#`
    fn scene_heading(&self, text: &str, line_num: usize) -> Option<ScriptToken> {
        let forced = text.starts_with('.') && !text.starts_with("..");
        if !forced && !self.regex["scene_heading"].is_match(text) {
            return None;
        }

        let mut heading = if forced { &text[1..] } else { text };
        let mut number = None;
        if let Some(caps) = self.regex["scene_number"].captures(heading) {
            number = Some(caps[1].trim().to_string());
            heading = &heading[..caps.get(0).map_or(heading.len(), |m| m.start())];
        }

        let mut token = ScriptToken::new("scene_heading", heading.trim(), line_num);
        token.number = number;
        Some(token)
    }

    // 去除角色名前的@符号
    fn trim_character_force_symbol(&self, text: &str) -> String {
        text.trim_start().trim_start_matches('@').to_string()
    }

    // 去除双对话标记 ^
    fn trim_dual_marker(&self, text: &str) -> String {
        text.trim_end().trim_end_matches('^').trim_end().to_string()
    }

    // 添加token到结果
    fn push_token(&mut self, token: ScriptToken) {
        self.result.tokens.push(token);
    }

    // 同一块中的连续行合并到上一个token
    fn push_or_extend(&mut self, token_type: &str, text: &str, line_num: usize) {
        if let Some(last) = self.result.tokens.last_mut() {
            if last.token_type == token_type {
                last.text.push('\n');
                last.text.push_str(text);
                return;
            }
        }
        self.push_token(ScriptToken::new(token_type, text, line_num));
    }

    fn init_regex(&mut self) {
        self.regex.insert(
            "title_page".to_string(),
            Regex::new(r"(?i)^[ \t]*(title|credit|author[s]?|source|notes|draft date|date|watermark|contact(?: info)?|revision|copyright|font|tl|tc|tr|cc|br|bl|header|footer)\:(.*)$").unwrap()
        );
        self.regex.insert(
            "scene_heading".to_string(),
            Regex::new(r"^(?i:int|ext|est|int[.]?\/ext|i[.]?\/e)[. ]").unwrap()
        );
        self.regex.insert(
            "scene_number".to_string(),
            Regex::new(r"\s*#\s*([^#\s][^#]*?)\s*#\s*$").unwrap()
        );
        self.regex.insert(
            "transition".to_string(),
            Regex::new(r"^\s*(?:(>)[^\n\r<]*|[A-Z ]+TO:)\s*$").unwrap()
        );
        self.regex.insert(
            "character".to_string(),
            Regex::new(r"^[ \t]*((\p{Lu}[^\p{Ll}\r\n@]*)|(@[^\r\n\(（\^]*))(\(.*\)|（.*）)?(\s*\^)?\s*$").unwrap()
        );
        self.regex.insert(
            "parenthetical".to_string(),
            Regex::new(r"^[ \t]*(\(.+\)|（.+）)\s*$").unwrap()
        );
        self.regex.insert(
            "centered".to_string(),
            Regex::new(r"^[ \t]*>\s*(.+?)\s*<\s*$").unwrap()
        );
        self.regex.insert(
            "page_break".to_string(),
            Regex::new(r"^\s*\={3,}\s*$").unwrap()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(script: &str) -> FountainScript {
        FountainParser::new().parse(script)
    }

    fn types(script: &FountainScript) -> Vec<&str> {
        script.tokens.iter().map(|t| t.token_type.as_str()).collect()
    }

    #[test]
    fn dialogue_block() {
        let script = parse("INT. HOUSE - DAY\n\nBOB (V.O.)\n(quietly)\nHello.\nIt's me.\n\nShe leaves.\n");
        assert_eq!(types(&script), ["scene_heading", "character", "parenthetical", "dialogue", "action"]);
        assert_eq!(script.tokens[1].text, "BOB (V.O.)");
        assert_eq!(script.tokens[3].text, "Hello.\nIt's me.");
    }

    #[test]
    fn character_needs_following_line() {
        let script = parse("Some action.\n\nBOOM\n\nMore.");
        assert_eq!(types(&script), ["action", "action", "action"]);
    }

    #[test]
    fn scene_heading_force_and_number() {
        let script = parse(".flashback #12A#\n\nint. office - night");
        assert_eq!(script.tokens[0].text, "flashback");
        assert_eq!(script.tokens[0].number.as_deref(), Some("12A"));
        assert_eq!(script.tokens[1].token_type, "scene_heading");
        assert_eq!(script.tokens[1].text, "int. office - night");
    }

    #[test]
    fn ellipsis_is_not_a_scene_heading() {
        let script = parse("...and then nothing.");
        assert_eq!(types(&script), ["action"]);
    }

    #[test]
    fn transitions_centered_lyrics_and_breaks() {
        let script = parse("CUT TO:\n\n> THE END <\n\n>SMASH CUT\n\n~Sing along\n\n===\n\n!LOUD NOISE");
        assert_eq!(
            types(&script),
            ["transition", "centered", "transition", "lyrics", "page_break", "action"]
        );
        assert_eq!(script.tokens[1].text, "THE END");
        assert_eq!(script.tokens[2].text, "SMASH CUT");
        assert_eq!(script.tokens[3].text, "Sing along");
        assert_eq!(script.tokens[5].text, "LOUD NOISE");
    }

    #[test]
    fn forced_character_and_dual_marker() {
        let script = parse("@McCLANE ^\nYippee.");
        assert_eq!(script.tokens[0].token_type, "character");
        assert_eq!(script.tokens[0].text, "McCLANE");
    }

    #[test]
    fn title_page_with_continuations() {
        let script = parse("Title: Big Fish\nCredit: written by\nAuthor: John August\nContact:\n    1 Main St\n    Springfield\n\nFADE TO:\n");
        assert_eq!(script.title_value("title"), Some("Big Fish"));
        assert_eq!(script.title_value("author"), Some("John August"));
        assert_eq!(script.title_value("contact"), Some("1 Main St\nSpringfield"));
        assert_eq!(types(&script), ["transition"]);
    }

    #[test]
    fn crlf_and_multiline_action() {
        let script = parse("Line one\r\nLine two\r\n\r\nLine three");
        assert_eq!(types(&script), ["action", "action"]);
        assert_eq!(script.tokens[0].text, "Line one\nLine two");
    }
}
