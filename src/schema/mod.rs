//! Schema domain: the field tree, the converter, and file import/export

mod convert;
mod field;
mod io;

pub use convert::*;
pub use field::*;
pub use io::*;
