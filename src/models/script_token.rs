use serde::{Deserialize, Serialize};

/// Fountain 解析出的一个元素
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptToken {
    pub token_type: String,  // token类型: scene_heading, character, dialogue等；标题页中为键名，如 title、draft_date
    pub text: String,        // 去掉强制标记后的文本
    pub line: usize,         // 所在行号
    pub number: Option<String>, // 场景编号
}

impl ScriptToken {
    pub fn new(token_type: &str, text: impl Into<String>, line: usize) -> Self {
        ScriptToken {
            token_type: token_type.to_string(),
            text: text.into(),
            line,
            number: None,
        }
    }

    // 检查token类型是否匹配
    pub fn is_type(&self, types: &[&str]) -> bool {
        types.contains(&self.token_type.as_str())
    }
}
