pub mod capture;
pub mod dto;
pub mod error;
pub mod session;
pub mod usecase;

pub use capture::*;
pub use dto::*;
pub use error::*;
pub use session::*;
pub use usecase::*;
