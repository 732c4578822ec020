mod catalog;
mod document;
mod summary;

pub use catalog::*;
pub use document::*;
pub use summary::*;
