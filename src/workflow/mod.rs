pub mod document;
pub mod export;
pub mod node;

pub use document::*;
pub use node::*;
