//! Console surface: the line prompter, its stdin feed and the screen renderers.

pub mod presenter;
pub mod prompter;
pub mod stdin;

pub use prompter::Prompter;
