//! 面向命令行工具的转换接口
//!
//! 每个函数完成一次完整的转换：读入一种表示，输出另一种表示。

use crate::bridge::from_fountain;
use crate::error::{FdxError, FdxResult};
use crate::fdx::{decode, encode};
use crate::models::{Conf, Screenplay};
use crate::parser::{FountainParser, FountainScript};
use crate::renderer::render_with;

/// 解析 Fountain 文本
pub fn parse_fountain(text: &str) -> FountainScript {
    let mut parser = FountainParser::new();
    parser.parse(text)
}

/// 解析 Fountain 文本并构建剧本
pub fn fountain_to_screenplay(text: &str) -> Screenplay {
    from_fountain(&parse_fountain(text))
}

/// FDX 字节转为 Fountain 文本
pub fn fdx_to_fountain(src: &[u8], conf: &Conf) -> FdxResult<String> {
    let screenplay = decode(src)?;
    Ok(render_with(&screenplay, conf))
}

/// Fountain 文本转为 FDX 字节
pub fn fountain_to_fdx(text: &str) -> FdxResult<Vec<u8>> {
    encode(&fountain_to_screenplay(text))
}

/// FDX 字节转为 JSON 形式的文档模型
pub fn fdx_to_json(src: &[u8]) -> FdxResult<String> {
    let screenplay = decode(src)?;
    screenplay
        .to_json()
        .map_err(|e| FdxError::Encoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fountain_round_trips_through_fdx() {
        let text = "INT. HOUSE - DAY\n\nRain.\n\nBOB\n(quietly)\nHello.\n\nCUT TO:\n\n";
        let fdx = fountain_to_fdx(text).unwrap();
        let back = fdx_to_fountain(&fdx, &Conf::default()).unwrap();
        assert_eq!(back, text);
    }

    #[test]
    fn json_view_names_paragraphs() {
        let fdx = fountain_to_fdx("Rain.").unwrap();
        let json = fdx_to_json(&fdx).unwrap();
        assert!(json.contains("\"Action\""));
        assert!(json.contains("Rain."));
    }
}
