// Presentation layer: turns operator input into service calls and renders the results.

pub mod command;
pub mod console;
