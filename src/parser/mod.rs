pub mod fountain_parser;
pub mod text_processor;

pub use fountain_parser::FountainParser;
pub use fountain_parser::FountainScript;
pub use text_processor::parse_inline_styles;
