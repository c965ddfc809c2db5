// src/core.rs
pub mod categorize;
pub mod classify;
pub mod detect;
pub mod walk;
