//! # lm-app
//!
//! Use cases for linkmark: the paste-and-resolve orchestration, the
//! tab-navigate and escape-revert commands, and the Python bootstrap flow.
//! Each use case is a struct holding its port dependencies behind `Arc` and
//! exposing a single async `execute`.

pub mod session;
pub mod usecases;

pub use session::Session;
pub use usecases::bootstrap_python::BootstrapPythonUseCase;
pub use usecases::jump_past_link::JumpPastLinkUseCase;
pub use usecases::paste_link::{PasteLinkUseCase, PasteOutcome};
pub use usecases::revert_link::{RevertLinkUseCase, RevertOutcome};
