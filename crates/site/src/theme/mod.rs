//! Template rendering built on Tera.

mod engine;

pub use engine::ThemeEngine;
