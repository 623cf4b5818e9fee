mod parser;
mod syntax;

pub use parser::PathParser;
pub use syntax::{MarkupSyntax, PathSyntax};
