use log::warn;
use serde::{Deserialize, Serialize};
use crate::error::{FdxError, FdxResult};
use crate::models::metadata::*;
use crate::models::{Extra, Node, Paragraph, XmlRecord};

/// 正文：有序段落，外加可选的页眉页脚设置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// 对应根元素下的 `<HeaderAndFooter>`
    pub header_and_footer: Option<HeaderAndFooter>,
    pub paragraphs: Vec<Paragraph>,
    /// `<Content>` 上未识别的内容
    #[serde(default, skip_serializing_if = "Extra::is_empty")]
    pub extra: Extra,
}

impl Section {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Section {
            paragraphs,
            ..Section::default()
        }
    }
}

/// 标题页，对应 `<TitlePage>`，内含自己的页眉页脚与 `<Content>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitlePage {
    pub header_and_footer: Option<HeaderAndFooter>,
    pub paragraphs: Vec<Paragraph>,
    /// 内层 `<Content>` 上未识别的内容
    #[serde(default, skip_serializing_if = "Extra::is_empty")]
    pub content_extra: Extra,
    /// `<TitlePage>` 上未识别的内容
    #[serde(default, skip_serializing_if = "Extra::is_empty")]
    pub extra: Extra,
}

impl TitlePage {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        TitlePage {
            paragraphs,
            ..TitlePage::default()
        }
    }
}

fn read_content(node: &Node, paragraphs: &mut Vec<Paragraph>, extra: &mut Extra) -> FdxResult<()> {
    extra.attributes.extend(node.attributes.iter().cloned());
    for child in &node.children {
        if child.name == Paragraph::TAG {
            paragraphs.push(Paragraph::from_node(child)?);
        } else {
            extra.children.push(child.clone());
        }
    }
    Ok(())
}

fn content_node(paragraphs: &[Paragraph], extra: &Extra) -> Node {
    let mut node = Node::new("Content");
    node.children.extend(paragraphs.iter().map(XmlRecord::to_node));
    extra.apply_to(&mut node);
    node
}

impl XmlRecord for TitlePage {
    const TAG: &'static str = "TitlePage";

    fn from_node(node: &Node) -> FdxResult<Self> {
        let mut title_page = TitlePage::default();
        title_page.extra.attributes.extend(node.attributes.iter().cloned());
        let mut seen_content = false;
        for child in &node.children {
            match child.name.as_str() {
                "HeaderAndFooter" if title_page.header_and_footer.is_none() => {
                    title_page.header_and_footer = Some(HeaderAndFooter::from_node(child)?);
                }
                "Content" if !seen_content => {
                    read_content(child, &mut title_page.paragraphs, &mut title_page.content_extra)?;
                    seen_content = true;
                }
                _ => title_page.extra.children.push(child.clone()),
            }
        }
        Ok(title_page)
    }

    fn to_node(&self) -> Node {
        let mut node = Node::new(Self::TAG);
        if let Some(header_and_footer) = &self.header_and_footer {
            node.children.push(header_and_footer.to_node());
        }
        node.children.push(content_node(&self.paragraphs, &self.content_extra));
        self.extra.apply_to(&mut node);
        node
    }
}

/// 剧本文档模型的根，对应 FDX 的 `<FinalDraft>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenplay {
    pub document_type: Option<String>,
    pub template: Option<String>,
    pub version: Option<String>,
    /// 正文；其页眉页脚对应根元素下的 `<HeaderAndFooter>`
    pub body: Option<Section>,
    pub title_page: Option<TitlePage>,
    pub element_settings: Vec<ElementSettings>,
    pub spell_check_ignore_lists: Option<SpellCheckIgnoreLists>,
    pub page_layout: Option<PageLayout>,
    pub window_state: Option<WindowState>,
    pub text_state: Option<TextState>,
    pub script_note_definitions: Option<ScriptNoteDefinitions>,
    pub smart_type: Option<SmartType>,
    pub mores_and_continueds: Option<MoresAndContinueds>,
    pub locked_pages: Option<LockedPages>,
    pub revisions: Option<Revisions>,
    pub split_state: Option<SplitState>,
    pub macros: Option<Macros>,
    pub actors: Option<Actors>,
    pub cast: Option<Cast>,
    pub scene_number_options: Option<SceneNumberOptions>,
    #[serde(default, skip_serializing_if = "Extra::is_empty")]
    pub extra: Extra,
}

impl Screenplay {
    /// 最小可用的剧本：`DocumentType="Script"`、`Version="1"`、空正文
    pub fn new() -> Self {
        Screenplay {
            document_type: Some("Script".to_string()),
            template: Some("No".to_string()),
            version: Some("1".to_string()),
            body: Some(Section::default()),
            ..Screenplay::default()
        }
    }

    /// 正文段落，没有正文时为空
    pub fn paragraphs(&self) -> &[Paragraph] {
        self.body.as_ref().map(|body| body.paragraphs.as_slice()).unwrap_or(&[])
    }

    /// 以 JSON 形式导出整个文档模型
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// 把只允许出现一次的子元素读入 `slot`，重复出现的放进 `extra`
fn read_once<T: XmlRecord>(slot: &mut Option<T>, node: &Node, extra: &mut Extra) -> FdxResult<()> {
    if slot.is_some() {
        warn!("重复的 <{}> 元素，按未知内容保留", node.name);
        extra.children.push(node.clone());
    } else {
        *slot = Some(T::from_node(node)?);
    }
    Ok(())
}

fn push_node<T: XmlRecord>(node: &mut Node, record: &Option<T>) {
    if let Some(record) = record {
        node.children.push(record.to_node());
    }
}

impl XmlRecord for Screenplay {
    const TAG: &'static str = "FinalDraft";

    fn from_node(node: &Node) -> FdxResult<Self> {
        if node.name != Self::TAG {
            return Err(FdxError::MalformedInput(format!(
                "根元素应为 <{}>，实际为 <{}>",
                Self::TAG,
                node.name
            )));
        }

        let mut screenplay = Screenplay::default();
        for (key, value) in &node.attributes {
            match key.as_str() {
                "DocumentType" => screenplay.document_type = Some(value.clone()),
                "Template" => screenplay.template = Some(value.clone()),
                "Version" => screenplay.version = Some(value.clone()),
                _ => screenplay.extra.attributes.push((key.clone(), value.clone())),
            }
        }

        let mut seen_content = false;
        let mut seen_header_and_footer = false;
        for child in &node.children {
            let extra = &mut screenplay.extra;
            match child.name.as_str() {
                "Content" if !seen_content => {
                    seen_content = true;
                    let body = screenplay.body.get_or_insert_with(Section::default);
                    read_content(child, &mut body.paragraphs, &mut body.extra)?;
                }
                "TitlePage" if screenplay.title_page.is_none() => {
                    screenplay.title_page = Some(TitlePage::from_node(child)?);
                }
                "HeaderAndFooter" if !seen_header_and_footer => {
                    seen_header_and_footer = true;
                    let header_and_footer = HeaderAndFooter::from_node(child)?;
                    screenplay.body.get_or_insert_with(Section::default).header_and_footer = Some(header_and_footer);
                }
                "ElementSettings" => screenplay.element_settings.push(ElementSettings::from_node(child)?),
                "SpellCheckIgnoreLists" => read_once(&mut screenplay.spell_check_ignore_lists, child, extra)?,
                "PageLayout" => read_once(&mut screenplay.page_layout, child, extra)?,
                "WindowState" => read_once(&mut screenplay.window_state, child, extra)?,
                "TextState" => read_once(&mut screenplay.text_state, child, extra)?,
                "ScriptNoteDefinitions" => read_once(&mut screenplay.script_note_definitions, child, extra)?,
                "SmartType" => read_once(&mut screenplay.smart_type, child, extra)?,
                "MoresAndContinueds" => read_once(&mut screenplay.mores_and_continueds, child, extra)?,
                "LockedPages" => read_once(&mut screenplay.locked_pages, child, extra)?,
                "Revisions" => read_once(&mut screenplay.revisions, child, extra)?,
                "SplitState" => read_once(&mut screenplay.split_state, child, extra)?,
                "Macros" => read_once(&mut screenplay.macros, child, extra)?,
                "Actors" => read_once(&mut screenplay.actors, child, extra)?,
                "Cast" => read_once(&mut screenplay.cast, child, extra)?,
                "SceneNumberOptions" => read_once(&mut screenplay.scene_number_options, child, extra)?,
                other => {
                    warn!("未知的根级元素 <{}>，按原样保留", other);
                    extra.children.push(child.clone());
                }
            }
        }
        Ok(screenplay)
    }

    fn to_node(&self) -> Node {
        let mut node = Node::new(Self::TAG);
        node.push_attr("DocumentType", self.document_type.as_deref());
        node.push_attr("Template", self.template.as_deref());
        node.push_attr("Version", self.version.as_deref());

        if let Some(body) = &self.body {
            node.children.push(content_node(&body.paragraphs, &body.extra));
        }
        if let Some(title_page) = &self.title_page {
            node.children.push(title_page.to_node());
        }
        node.children.extend(self.element_settings.iter().map(XmlRecord::to_node));
        let header_and_footer = self.body.as_ref().and_then(|body| body.header_and_footer.clone());
        push_node(&mut node, &header_and_footer);
        push_node(&mut node, &self.spell_check_ignore_lists);
        push_node(&mut node, &self.page_layout);
        push_node(&mut node, &self.window_state);
        push_node(&mut node, &self.text_state);
        push_node(&mut node, &self.script_note_definitions);
        push_node(&mut node, &self.smart_type);
        push_node(&mut node, &self.mores_and_continueds);
        push_node(&mut node, &self.locked_pages);
        push_node(&mut node, &self.revisions);
        push_node(&mut node, &self.split_state);
        push_node(&mut node, &self.macros);
        push_node(&mut node, &self.actors);
        push_node(&mut node, &self.cast);
        push_node(&mut node, &self.scene_number_options);
        self.extra.apply_to(&mut node);
        node
    }
}
