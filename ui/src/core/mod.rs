//! Framework-light building blocks shared by components.

pub mod classes;
pub mod location;
