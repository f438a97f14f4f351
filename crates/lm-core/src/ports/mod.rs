//! Port interfaces for the application layer.
//!
//! Ports define the contract between the use cases and the host editor /
//! platform implementations, keeping the core workflow independent of any
//! concrete editor API or operating system service.

pub mod clipboard;
pub mod editor;
pub mod python_env;
pub mod title_resolver;
pub mod ui;

pub use clipboard::{ClipboardError, ClipboardPort};
pub use editor::{EditorError, EditorPort};
pub use python_env::{EnvironmentError, PythonEnvironmentPort};
pub use title_resolver::TitleResolverPort;
pub use ui::UiPort;
