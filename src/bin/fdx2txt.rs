//! fdx2txt 读取 Final Draft 的 FDX 文件，输出 Fountain 纯文本。

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use fdx_fountain::cli::{display_name, init_logger, read_input, write_output};
use fdx_fountain::{decode, render_with, Conf, LICENSE_TEXT};

#[derive(Parser, Debug)]
#[command(name = "fdx2txt")]
#[command(version)]
#[command(about = "把 FDX 剧本转换为 Fountain 纯文本")]
#[command(long_about = "fdx2txt 读取 FDX 文件并输出 Fountain 纯文本。

示例:
  fdx2txt -i screenplay.fdx -o screenplay.fountain
  cat screenplay.fdx | fdx2txt > screenplay.fountain")]
struct Options {
    /// 输入文件，缺省读取标准输入
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// 输出文件，缺省写到标准输出
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// 输出末尾追加换行
    #[arg(long)]
    newline: bool,

    /// 输出 JSON 形式的文档模型
    #[arg(long)]
    json: bool,

    /// 不输出错误信息
    #[arg(short, long)]
    quiet: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,

    /// JSON 配置文件
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// 不输出标题页
    #[arg(long)]
    no_title_page: bool,

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

    let conf = load_conf(options)?;
    let src = read_input(options.input.as_deref())?;
    let screenplay = decode(&src).with_context(|| format!("无法解析 {}", display_name(options.input.as_deref())))?;

    let mut text = if options.json {
        screenplay.to_json().context("无法生成 JSON")?
    } else {
        render_with(&screenplay, &conf)
    };
    if options.json && conf.trailing_newline {
        text.push('\n');
    }

    debug!("输出 {} 字节", text.len());
    write_output(options.output.as_deref(), text.as_bytes())
}

// 读取配置文件，命令行参数覆盖文件中的设置
fn load_conf(options: &Options) -> Result<Conf> {
    let mut conf = match &options.config {
        Some(path) => {
            let src = fs::read_to_string(path)
                .with_context(|| format!("无法读取配置文件 {}", path.display()))?;
            Conf::from_json(&src).with_context(|| format!("配置文件格式错误 {}", path.display()))?
        }
        None => Conf::default(),
    };
    if options.no_title_page {
        conf.print_title_page = false;
    }
    if options.newline {
        conf.trailing_newline = true;
    }
    Ok(conf)
}
