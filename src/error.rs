use thiserror::Error;

/// FDX 编解码错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FdxError {
    /// 输入不是格式良好的 XML，或者根元素不是 FinalDraft
    #[error("无效的 FDX 输入: {0}")]
    MalformedInput(String),

    /// 序列化时写出失败
    #[error("FDX 编码错误: {0}")]
    Encoding(String),
}

/// FDX 编解码结果
pub type FdxResult<T> = Result<T, FdxError>;
