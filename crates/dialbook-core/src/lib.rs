pub mod domain;
pub mod dto;
pub mod error;
pub mod index;
pub mod keypad;
pub mod rules;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use index::{ContactIndex, IndexEntry};
pub use keypad::{is_keypad_query, keypad_code};
pub use rules::*;
