pub mod use_language;
pub mod validation;

pub use use_language::*;
pub use validation::*;
