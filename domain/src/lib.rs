pub mod entity;
pub mod error;
pub mod language;
pub mod port;

pub use entity::*;
pub use error::*;
pub use language::*;
pub use port::*;
