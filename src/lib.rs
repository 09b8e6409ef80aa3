pub mod error;
pub mod models;
pub mod utils;
pub mod parser;
pub mod fdx;
pub mod renderer;
pub mod bridge;
pub mod api;
pub mod cli;

pub use error::{FdxError, FdxResult};

pub use models::{
    Screenplay,
    Section,
    TitlePage,
    Paragraph,
    TextRun,
    ElementType,
    Alignment,
    StyleFlags,
    ScriptToken,
    Conf,
};

pub use parser::{
    FountainParser,
    FountainScript,
};

pub use fdx::{
    decode,
    encode,
    normalize_self_closing,
};

pub use renderer::{
    render,
    render_with,
};

pub use bridge::from_fountain;

pub use api::{
    parse_fountain,
    fountain_to_screenplay,
    fdx_to_fountain,
    fountain_to_fdx,
    fdx_to_json,
};

/// 命令行工具 `--license` 输出的许可证文本
pub const LICENSE_TEXT: &str = "\
fdx_fountain, Final Draft XML and Fountain screenplay conversion

Copyright (c) 2026, the fdx_fountain authors
All rights reserved.

Redistribution and use in source and binary forms, with or without
modification, are permitted provided that the following conditions are met:

1. Redistributions of source code must retain the above copyright notice, this
   list of conditions and the following disclaimer.

2. Redistributions in binary form must reproduce the above copyright notice,
   this list of conditions and the following disclaimer in the documentation
   and/or other materials provided with the distribution.

3. Neither the name of the copyright holder nor the names of its
   contributors may be used to endorse or promote products derived from
   this software without specific prior written permission.

THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS \"AS IS\"
AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.";
