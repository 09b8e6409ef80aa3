#[macro_use]
mod record;

pub mod node;
pub mod paragraph;
pub mod metadata;
pub mod screenplay;
pub mod title_page;
pub mod script_token;
pub mod conf;

pub use node::{Node, Extra, XmlRecord};
pub use paragraph::{Paragraph, TextRun, ElementType, Alignment, StyleFlags};
pub use metadata::*;
pub use screenplay::{Screenplay, Section, TitlePage};
pub use script_token::ScriptToken;
pub use conf::Conf;
