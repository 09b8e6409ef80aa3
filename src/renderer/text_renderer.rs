use log::debug;
use crate::models::{Alignment, Conf, ElementType, Paragraph, Screenplay, StyleFlags, TextRun};

/// 按默认配置把剧本渲染为 Fountain 文本
pub fn render(screenplay: &Screenplay) -> String {
    render_with(screenplay, &Conf::default())
}

/// 把剧本渲染为 Fountain 文本
///
/// 先输出标题页段落并以一个空行分隔，再依次输出正文段落。渲染不会失败。
pub fn render_with(screenplay: &Screenplay, conf: &Conf) -> String {
    let mut out = String::new();

    if conf.print_title_page {
        if let Some(title_page) = &screenplay.title_page {
            for paragraph in &title_page.paragraphs {
                out.push_str(&render_paragraph(paragraph));
            }
            out.push('\n');
        }
    }

    for paragraph in screenplay.paragraphs() {
        out.push_str(&render_paragraph(paragraph));
    }

    if conf.trailing_newline {
        out.push('\n');
    }
    debug!("渲染完成: {} 个正文段落, {} 字节", screenplay.paragraphs().len(), out.len());
    out
}

// 段落类型要求全部大写
fn is_upper_case_type(paragraph: &Paragraph) -> bool {
    matches!(
        paragraph.element_type,
        Some(ElementType::SceneHeading | ElementType::Character | ElementType::Transition)
    )
}

// 段落之后需要空一行
fn is_spaced_type(paragraph: &Paragraph) -> bool {
    matches!(
        paragraph.element_type,
        Some(ElementType::SceneHeading | ElementType::Action | ElementType::Dialogue | ElementType::Transition)
    )
}

/// 渲染一个段落：每个文本片段单独成行，必要时追加一个空行
pub fn render_paragraph(paragraph: &Paragraph) -> String {
    let mut out = String::new();
    if paragraph.starts_new_page {
        out.push_str("===\n\n");
    }

    let upper = is_upper_case_type(paragraph);
    for run in &paragraph.runs {
        let mut line = render_run_with_case(run, upper);

        match paragraph.element_type {
            Some(ElementType::Singing) => line.insert(0, '~'),
            Some(ElementType::Parenthetical) => {
                let trimmed = line.trim();
                if !(trimmed.starts_with('(') && trimmed.ends_with(')')) {
                    line = format!("({})", line);
                }
            }
            _ => {}
        }

        if paragraph.effective_alignment() == Alignment::Center {
            line = format!(">{}<", line);
        }

        out.push_str(&line);
        out.push('\n');
    }

    if is_spaced_type(paragraph) {
        out.push('\n');
    }
    out
}

/// 渲染单个文本片段的样式标记
pub fn render_run(run: &TextRun) -> String {
    render_run_with_case(run, false)
}

fn render_run_with_case(run: &TextRun, upper: bool) -> String {
    let capitals = run.font.as_deref().map_or(false, |font| font.contains("Capitals"));
    let mut text = if upper || capitals || run.style.contains(StyleFlags::ALL_CAPS) {
        run.text.to_uppercase()
    } else {
        run.text.clone()
    };

    if run.style.contains(StyleFlags::ITALIC) {
        text = format!("*{}*", text);
    }
    if run.style.contains(StyleFlags::BOLD) {
        text = format!("**{}**", text);
    }
    if run.style.contains(StyleFlags::UNDERLINE) {
        text = format!("_{}_", text);
    }
    if run.style.contains(StyleFlags::STRIKETHROUGH) {
        text = format!("~~{}~~", text);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Section, TitlePage};

    fn screenplay_with(paragraphs: Vec<Paragraph>) -> Screenplay {
        let mut screenplay = Screenplay::new();
        screenplay.body = Some(Section::new(paragraphs));
        screenplay
    }

    #[test]
    fn all_styles_nest_in_fixed_order() {
        let run = TextRun::styled("x", StyleFlags::all());
        assert_eq!(render_run(&run), "~~_***X***_~~");
    }

    #[test]
    fn single_styles() {
        assert_eq!(render_run(&TextRun::styled("a", StyleFlags::ITALIC)), "*a*");
        assert_eq!(render_run(&TextRun::styled("a", StyleFlags::BOLD)), "**a**");
        assert_eq!(render_run(&TextRun::styled("a", StyleFlags::UNDERLINE)), "_a_");
        assert_eq!(render_run(&TextRun::styled("a", StyleFlags::STRIKETHROUGH)), "~~a~~");
        assert_eq!(render_run(&TextRun::new("a")), "a");
    }

    #[test]
    fn capitals_font_upper_cases() {
        let mut run = TextRun::new("quiet");
        run.font = Some("Courier Final Draft Capitals".to_string());
        assert_eq!(render_run(&run), "QUIET");
    }

    #[test]
    fn scene_heading_is_upper_case_and_spaced() {
        let paragraph = Paragraph::with_text(ElementType::SceneHeading, "int. office - day");
        assert_eq!(render_paragraph(&paragraph), "INT. OFFICE - DAY\n\n");
    }

    #[test]
    fn parenthetical_wrapping() {
        let bare = Paragraph::with_text(ElementType::Parenthetical, "beat");
        assert_eq!(render_paragraph(&bare), "(beat)\n");
        let wrapped = Paragraph::with_text(ElementType::Parenthetical, "(beat)");
        assert_eq!(render_paragraph(&wrapped), "(beat)\n");
    }

    #[test]
    fn singing_centered_and_page_break() {
        let mut paragraph = Paragraph::with_text(ElementType::Singing, "la la");
        paragraph.alignment = Some(Alignment::Center);
        paragraph.starts_new_page = true;
        assert_eq!(render_paragraph(&paragraph), "===\n\n>~la la<\n");
    }

    #[test]
    fn runs_render_on_separate_lines() {
        let mut paragraph = Paragraph::new(ElementType::Action);
        paragraph.runs.push(TextRun::new("He walks "));
        paragraph.runs.push(TextRun::styled("slowly", StyleFlags::ITALIC));
        assert_eq!(render_paragraph(&paragraph), "He walks \n*slowly*\n\n");
    }

    #[test]
    fn unknown_and_empty_paragraphs() {
        let unknown = Paragraph::with_text(ElementType::Other("Lyrics Block".to_string()), "text");
        assert_eq!(render_paragraph(&unknown), "text\n");
        assert_eq!(render_paragraph(&Paragraph::new(ElementType::Action)), "\n");
        assert_eq!(render_paragraph(&Paragraph::new(ElementType::General)), "");
    }

    #[test]
    fn empty_screenplay_renders_nothing() {
        assert_eq!(render(&Screenplay::new()), "");
        assert_eq!(render(&Screenplay::default()), "");
    }

    #[test]
    fn dialogue_block() {
        let screenplay = screenplay_with(vec![
            Paragraph::with_text(ElementType::Character, "bob"),
            Paragraph::with_text(ElementType::Parenthetical, "quietly"),
            Paragraph::with_text(ElementType::Dialogue, "Hello."),
            Paragraph::with_text(ElementType::Transition, "cut to:"),
        ]);
        assert_eq!(render(&screenplay), "BOB\n(quietly)\nHello.\n\nCUT TO:\n\n");
    }

    #[test]
    fn title_page_precedes_body() {
        let mut title = Paragraph::with_text(ElementType::General, "Brick & Steel");
        title.alignment = Some(Alignment::Center);
        let mut screenplay = screenplay_with(vec![Paragraph::with_text(ElementType::Action, "Rain.")]);
        screenplay.title_page = Some(TitlePage::new(vec![title]));

        assert_eq!(render(&screenplay), ">Brick & Steel<\n\nRain.\n\n");

        let conf = Conf {
            print_title_page: false,
            trailing_newline: true,
        };
        assert_eq!(render_with(&screenplay, &conf), "Rain.\n\n\n");
    }
}
