//! # lm-platform
//!
//! Platform-side implementations of the linkmark ports: the external resolver
//! subprocess, Python environment discovery and pip management, system
//! clipboard access, and a line-buffer editor for headless hosts and tests.

pub mod clipboard;
pub mod editor;
pub mod python;
pub mod resolver;
pub mod ui;

pub use clipboard::SystemClipboard;
pub use editor::InMemoryEditor;
pub use python::SystemPythonEnvironment;
pub use resolver::ProcessTitleResolver;
pub use ui::StaticConfirm;
