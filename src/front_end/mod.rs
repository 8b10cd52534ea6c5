//! Edge list input.

pub use ast::EdgeList;
pub use parser::{parse, EdgeListRule};
pub use reader::read_edge_list;

mod ast;
mod parser;
mod reader;
