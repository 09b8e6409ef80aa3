use crate::models::{StyleFlags, TextRun};
use crate::utils::FountainConstants;

#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Text(String),
    Marker(&'static str),
}

// 样式标记对应的样式位
fn marker_style(marker: &str) -> StyleFlags {
    match marker {
        "***" => StyleFlags::BOLD | StyleFlags::ITALIC,
        "**" => StyleFlags::BOLD,
        "*" => StyleFlags::ITALIC,
        "_" => StyleFlags::UNDERLINE,
        "~~" => StyleFlags::STRIKETHROUGH,
        _ => StyleFlags::empty(),
    }
}

// 拆分出文本和样式标记，转义字符作为普通文本
fn split_markers(text: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut buffer = String::new();
    let mut rest = text;

    'outer: while let Some(c) = rest.chars().next() {
        if c == '\\' {
            if let Some(next) = rest[1..].chars().next() {
                if FountainConstants::escapable_chars().contains(next) {
                    buffer.push(next);
                    rest = &rest[1 + next.len_utf8()..];
                    continue;
                }
            }
        }
        for marker in FountainConstants::style_markers() {
            if let Some(after) = rest.strip_prefix(marker) {
                if !buffer.is_empty() {
                    pieces.push(Piece::Text(std::mem::take(&mut buffer)));
                }
                pieces.push(Piece::Marker(marker));
                rest = after;
                continue 'outer;
            }
        }
        buffer.push(c);
        rest = &rest[c.len_utf8()..];
    }
    if !buffer.is_empty() {
        pieces.push(Piece::Text(buffer));
    }
    pieces
}

// 把缓冲区的文本写成一个片段，样式相同时并入上一个片段
fn flush(buffer: &mut String, style: StyleFlags, runs: &mut Vec<TextRun>) {
    if buffer.is_empty() {
        return;
    }
    match runs.last_mut() {
        Some(last) if last.style == style => last.text.push_str(buffer),
        _ => runs.push(TextRun::styled(buffer.as_str(), style)),
    }
    buffer.clear();
}

/// 把带 Fountain 行内样式的文本拆成文本片段
///
/// 支持 `***`、`**`、`*`、`_`、`~~` 以及 `\*`、`\_` 转义；
/// 没有对应结束标记的开始标记按普通文本处理。结果至少包含一个片段。
pub fn parse_inline_styles(text: &str) -> Vec<TextRun> {
    let pieces = split_markers(text);
    let mut runs: Vec<TextRun> = Vec::new();
    let mut active = StyleFlags::empty();
    let mut open: Vec<&'static str> = Vec::new();
    let mut buffer = String::new();

    for (index, piece) in pieces.iter().enumerate() {
        match piece {
            Piece::Text(text) => buffer.push_str(text),
            &Piece::Marker(marker) => {
                let style = marker_style(marker);
                if open.last() == Some(&marker) {
                    flush(&mut buffer, active, &mut runs);
                    open.pop();
                    active.remove(style);
                } else if !active.intersects(style)
                    && pieces[index + 1..].contains(&Piece::Marker(marker))
                {
                    flush(&mut buffer, active, &mut runs);
                    open.push(marker);
                    active.insert(style);
                } else {
                    buffer.push_str(marker);
                }
            }
        }
    }
    flush(&mut buffer, active, &mut runs);

    if runs.is_empty() {
        runs.push(TextRun::new(""));
    }
    runs
}
