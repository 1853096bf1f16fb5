pub mod use_draft;

pub use use_draft::*;
