// src/models.rs
pub mod kind;
pub mod report;
pub mod window;

pub use kind::{ChangeKind, EnabledKinds};
pub use report::{CategorizedReport, Category, KindLists};
pub use window::{CaptureWindow, OpenCapture};
