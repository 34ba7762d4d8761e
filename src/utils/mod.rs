pub mod prompt;
pub mod table;

pub use prompt::{Prompter, StdPrompter};
pub use table::Table;
