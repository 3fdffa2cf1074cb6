// preprocessor/mod.rs
pub mod lang;
pub mod prepare;
pub mod utils;

pub use lang::{LanguageMode, Segment, split_into_han_segments};
pub use prepare::prepare;
pub use utils::SENTINEL;
