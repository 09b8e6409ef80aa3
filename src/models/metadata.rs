//! FDX 中没有渲染行为的元数据区块
//!
//! 这些记录只为无损往返而存在：字段一律按原样保存，不做语义处理。

use crate::models::Paragraph;

xml_record! {
    /// 段落上的场景属性（长度、页码、标题）
    pub struct SceneProperties = "SceneProperties" {
        attrs { length: "Length", page: "Page", title: "Title" }
        one {}
        many {}
        texts {}
    }
}

xml_record! {
    /// 动态标签，如页码 `Page #`、`Last Revised`
    pub struct DynamicLabel = "DynamicLabel" {
        attrs { label_type: "Type" }
        one {}
        many {}
        texts {}
    }
}

xml_record! {
    pub struct HeaderAndFooter = "HeaderAndFooter" {
        attrs {
            footer_first_page: "FooterFirstPage",
            footer_visible: "FooterVisible",
            header_first_page: "HeaderFirstPage",
            header_visible: "HeaderVisible",
            starting_page: "StartingPage",
        }
        one { header: Header, footer: Footer }
        many {}
        texts {}
    }
}

xml_record! {
    pub struct Header = "Header" {
        attrs {}
        one {}
        many { paragraphs: Paragraph }
        texts {}
    }
}

xml_record! {
    pub struct Footer = "Footer" {
        attrs {}
        one {}
        many { paragraphs: Paragraph }
        texts {}
    }
}

xml_record! {
    /// 每种段落类型的默认字体、版式与行为
    pub struct ElementSettings = "ElementSettings" {
        attrs { element_type: "Type" }
        one { font_spec: FontSpec, paragraph_spec: ParagraphSpec, behavior: Behavior }
        many {}
        texts {}
    }
}

xml_record! {
    pub struct FontSpec = "FontSpec" {
        attrs {
            adornment_style: "AdornmentStyle",
            background: "Background",
            color: "Color",
            font: "Font",
            revision_id: "RevisionID",
            size: "Size",
            style: "Style",
        }
        one {}
        many {}
        texts {}
    }
}

xml_record! {
    pub struct ParagraphSpec = "ParagraphSpec" {
        attrs {
            alignment: "Alignment",
            first_indent: "FirstIndent",
            leading: "Leading",
            left_indent: "LeftIndent",
            right_indent: "RightIndent",
            space_before: "SpaceBefore",
            spacing: "Spacing",
            starts_new_page: "StartsNewPage",
        }
        one {}
        many {}
        texts {}
    }
}

xml_record! {
    pub struct Behavior = "Behavior" {
        attrs { paginate_as: "PaginateAs", return_key: "ReturnKey", shortcut: "Shortcut" }
        one {}
        many {}
        texts {}
    }
}

xml_record! {
    pub struct SpellCheckIgnoreLists = "SpellCheckIgnoreLists" {
        attrs {}
        one { ignored_ranges: IgnoredRanges }
        many { ignored_words: IgnoredWords }
        texts {}
    }
}

xml_record! {
    pub struct IgnoredRanges = "IgnoredRanges" {
        attrs {}
        one {}
        many {}
        texts {}
    }
}

xml_record! {
    pub struct IgnoredWords = "IgnoredWords" {
        attrs {}
        one {}
        many {}
        texts { words: "Word" }
    }
}

xml_record! {
    pub struct PageLayout = "PageLayout" {
        attrs {
            background_color: "BackgroundColor",
            bottom_margin: "BottomMargin",
            break_dialogue_and_action_at_sentences: "BreakDialogueAndActionAtSentences",
            document_leading: "DocumentLeading",
            footer_margin: "FooterMargin",
            foreground_color: "ForegroundColor",
            header_margin: "HeaderMargin",
            invisibles_color: "InvisiblesColor",
            top_margin: "TopMargin",
            uses_smart_quotes: "UsesSmartQuotes",
        }
        one { auto_cast_list: AutoCastList }
        many {}
        texts {}
    }
}

xml_record! {
    pub struct AutoCastList = "AutoCastList" {
        attrs {
            add_parentheses: "AddParentheses",
            automatically_generate: "AutomaticallyGenerate",
            cast_list_element: "CastListElement",
        }
        one {}
        many {}
        texts {}
    }
}

xml_record! {
    pub struct WindowState = "WindowState" {
        attrs { height: "Height", left: "Left", mode: "Mode", top: "Top", width: "Width" }
        one {}
        many {}
        texts {}
    }
}

xml_record! {
    pub struct TextState = "TextState" {
        attrs { scaling: "Scaling", selection: "Selection", show_invisibles: "ShowInvisibles" }
        one {}
        many {}
        texts {}
    }
}

xml_record! {
    pub struct ScriptNoteDefinitions = "ScriptNoteDefinitions" {
        attrs { active: "Active" }
        one {}
        many { definitions: ScriptNoteDefinition }
        texts {}
    }
}

xml_record! {
    pub struct ScriptNoteDefinition = "ScriptNoteDefinition" {
        attrs { color: "Color", id: "ID", marker: "Marker", name: "Name" }
        one {}
        many {}
        texts {}
    }
}

xml_record! {
    /// 自动补全词表
    pub struct SmartType = "SmartType" {
        attrs {}
        one {
            characters: Characters,
            extensions: Extensions,
            scene_intros: SceneIntros,
            locations: Locations,
            times_of_day: TimesOfDay,
            transitions: Transitions,
        }
        many {}
        texts {}
    }
}

xml_record! {
    pub struct Characters = "Characters" {
        attrs {}
        one {}
        many {}
        texts { entries: "Character" }
    }
}

xml_record! {
    pub struct Extensions = "Extensions" {
        attrs {}
        one {}
        many {}
        texts { entries: "Extension" }
    }
}

xml_record! {
    pub struct SceneIntros = "SceneIntros" {
        attrs {}
        one {}
        many {}
        texts { entries: "SceneIntro" }
    }
}

xml_record! {
    pub struct Locations = "Locations" {
        attrs {}
        one {}
        many {}
        texts { entries: "Location" }
    }
}

xml_record! {
    pub struct TimesOfDay = "TimesOfDay" {
        attrs { separator: "Separator" }
        one {}
        many {}
        texts { entries: "TimeOfDay" }
    }
}

xml_record! {
    pub struct Transitions = "Transitions" {
        attrs {}
        one {}
        many {}
        texts { entries: "Transition" }
    }
}

xml_record! {
    /// 跨页对白与场景的 MORE / CONT'D 设置
    pub struct MoresAndContinueds = "MoresAndContinueds" {
        attrs {}
        one { font_spec: FontSpec, dialogue_breaks: DialogueBreaks, scene_breaks: SceneBreaks }
        many {}
        texts {}
    }
}

xml_record! {
    pub struct DialogueBreaks = "DialogueBreaks" {
        attrs {
            bottom_of_page: "BottomOfPage",
            dialogue_bottom: "DialogueBottom",
            dialogue_top: "DialogueTop",
            top_of_next: "TopOfNext",
        }
        one {}
        many {}
        texts {}
    }
}

xml_record! {
    pub struct SceneBreaks = "SceneBreaks" {
        attrs {
            continued_number: "ContinuedNumber",
            scene_bottom: "SceneBottom",
            scene_bottom_of_page: "SceneBottomOfPage",
            scene_top: "SceneTop",
            scene_top_of_next: "SceneTopOfNext",
        }
        one {}
        many {}
        texts {}
    }
}

xml_record! {
    pub struct LockedPages = "LockedPages" {
        attrs {}
        one {}
        many {}
        texts {}
    }
}

xml_record! {
    pub struct Revisions = "Revisions" {
        attrs {
            active_set: "ActiveSet",
            location: "Location",
            revision_mode: "RevisionMode",
            revisions_shown: "RevisionsShown",
            show_all_marks: "ShowAllMarks",
            show_all_sets: "ShowAllSets",
        }
        one {}
        many { revisions: Revision }
        texts {}
    }
}

xml_record! {
    pub struct Revision = "Revision" {
        attrs {
            color: "Color",
            full_revision: "FullRevision",
            id: "ID",
            mark: "Mark",
            name: "Name",
            style: "Style",
        }
        one {}
        many {}
        texts {}
    }
}

xml_record! {
    pub struct SplitState = "SplitState" {
        attrs {
            active_panel: "ActivePanel",
            split_mode: "SplitMode",
            splitter_position: "SplitterPosition",
        }
        one { script_panel: ScriptPanel }
        many {}
        texts {}
    }
}

xml_record! {
    pub struct ScriptPanel = "ScriptPanel" {
        attrs { display_mode: "DisplayMode" }
        one { font_spec: FontSpec }
        many {}
        texts {}
    }
}

xml_record! {
    pub struct Macros = "Macros" {
        attrs {}
        one {}
        many { macros: Macro }
        texts {}
    }
}

xml_record! {
    pub struct Macro = "Macro" {
        attrs {
            element: "Element",
            name: "Name",
            shortcut: "Shortcut",
            text: "Text",
            transition: "Transition",
        }
        one {}
        many { aliases: Alias }
        texts {}
    }
}

xml_record! {
    pub struct Alias = "Alias" {
        attrs {
            confirm: "Confirm",
            match_case: "MatchCase",
            smart_replace: "SmartReplace",
            text: "Text",
            word_only: "WordOnly",
        }
        one {}
        many { activate_in: ActivateIn }
        texts {}
    }
}

xml_record! {
    pub struct ActivateIn = "ActivateIn" {
        attrs { element: "Element" }
        one {}
        many {}
        texts {}
    }
}

xml_record! {
    /// 朗读功能使用的演员声音
    pub struct Actors = "Actors" {
        attrs {}
        one {}
        many { actors: Actor }
        texts {}
    }
}

xml_record! {
    pub struct Actor = "Actor" {
        attrs {
            mac_voice: "MacVoice",
            name: "Name",
            pitch: "Pitch",
            speed: "Speed",
            win_voice: "WinVoice",
        }
        one {}
        many {}
        texts {}
    }
}

xml_record! {
    pub struct Cast = "Cast" {
        attrs {}
        one { narrator: Narrator }
        many { members: Member }
        texts {}
    }
}

xml_record! {
    pub struct Narrator = "Narrator" {
        attrs {}
        one {}
        many { elements: CastElement }
        texts {}
    }
}

xml_record! {
    /// 旁白负责朗读的段落类型
    pub struct CastElement = "Element" {
        attrs { element_type: "Type" }
        one {}
        many {}
        texts {}
    }
}

xml_record! {
    pub struct Member = "Member" {
        attrs { actor: "Actor", character: "Character" }
        one {}
        many {}
        texts {}
    }
}

xml_record! {
    pub struct SceneNumberOptions = "SceneNumberOptions" {
        attrs {
            left_location: "LeftLocation",
            right_location: "RightLocation",
            show_numbers_on_left: "ShowNumbersOnLeft",
            show_numbers_on_right: "ShowNumbersOnRight",
        }
        one { font_spec: FontSpec }
        many {}
        texts {}
    }
}
