use serde::{Deserialize, Serialize};

/// 转换配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// 是否输出标题页
    pub print_title_page: bool,
    /// 输出末尾是否追加换行
    pub trailing_newline: bool,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            print_title_page: true,
            trailing_newline: false,
        }
    }
}

impl Conf {
    /// 从 JSON 读取配置，缺少的字段取默认值
    pub fn from_json(src: &str) -> serde_json::Result<Conf> {
        serde_json::from_str(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let conf = Conf::from_json(r#"{ "trailing_newline": true }"#).unwrap();
        assert!(conf.print_title_page);
        assert!(conf.trailing_newline);
    }
}
