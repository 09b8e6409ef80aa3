//! txt2fdx 读取 Fountain 纯文本，输出 Final Draft 的 FDX 文件。

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::debug;

use fdx_fountain::cli::{display_name, init_logger, read_input, write_output};
use fdx_fountain::{encode, fountain_to_screenplay, LICENSE_TEXT};

#[derive(Parser, Debug)]
#[command(name = "txt2fdx")]
#[command(version)]
#[command(about = "把 Fountain 纯文本转换为 FDX 剧本")]
#[command(long_about = "txt2fdx 读取 Fountain 纯文本并输出 FDX 文件。

示例:
  txt2fdx -i screenplay.fountain -o screenplay.fdx
  cat screenplay.fountain | txt2fdx > screenplay.fdx")]
struct Options {
    /// 输入文件，缺省读取标准输入
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// 输出文件，缺省写到标准输出
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// 输出末尾追加换行
    #[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    newline: bool,

    /// 不输出错误信息
    #[arg(short, long)]
    quiet: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,

    /// 显示许可证
    #[arg(long)]
    license: bool,
}

fn main() {
    let options = Options::parse();
    init_logger(options.verbose, options.quiet);

    if let Err(err) = run(&options) {
        if !options.quiet {
            eprintln!("{:#}", err);
        }
        process::exit(1);
    }
}

fn run(options: &Options) -> Result<()> {
    if options.license {
        println!("{}", LICENSE_TEXT);
        return Ok(());
    }

    let src = read_input(options.input.as_deref())?;
    let text = String::from_utf8(src)
        .with_context(|| format!("{} 不是有效的 UTF-8 文本", display_name(options.input.as_deref())))?;
    let screenplay = fountain_to_screenplay(&text);
    let mut out = encode(&screenplay).context("无法生成 FDX")?;
    if options.newline {
        out.push(b'\n');
    }

    debug!("{} 个段落, 输出 {} 字节", screenplay.paragraphs().len(), out.len());
    write_output(options.output.as_deref(), &out)
}
