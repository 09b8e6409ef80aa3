//! 两个命令行工具共用的输入输出与日志设置

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// 日志输出到标准错误；`quiet` 关闭日志，`verbose` 打开调试日志
pub fn init_logger(verbose: bool, quiet: bool) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level(verbose, quiet)))
        .target(env_logger::Target::Stderr)
        .init();
}

fn log_level(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "off"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// 读取输入文件，缺省读取标准输入
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("无法读取 {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("无法读取标准输入")?;
            Ok(buf)
        }
    }
}

/// 写出到文件，缺省写到标准输出
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => fs::write(path, bytes).with_context(|| format!("无法写入 {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("无法写入标准输出")?;
            stdout.flush().context("无法写入标准输出")
        }
    }
}

/// 用于错误信息的输入名称
pub fn display_name(path: Option<&Path>) -> String {
    path.map_or_else(|| "标准输入".to_string(), |p| p.display().to_string())
}
