//! Terminal front end: rendering, prompts, and the page loop glue.

pub mod pages;
pub mod prompts;
pub mod render;
