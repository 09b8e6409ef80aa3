pub mod decode;
pub mod encode;
pub mod normalize;

pub use decode::{decode, read_tree};
pub use encode::{encode, XML_DECLARATION};
pub use normalize::{normalize_self_closing, is_self_closing, SELF_CLOSING_TAGS};
