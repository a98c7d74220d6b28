mod common;
mod javascript;

pub use common::{children_of_kind, descendants, node_text};
pub use javascript::{JsParser, SourceTree};
