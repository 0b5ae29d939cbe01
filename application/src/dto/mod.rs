mod interpret;

pub use interpret::*;
