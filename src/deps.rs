//! Dependency grouping for [`Linkmark`](crate::Linkmark) construction.
//!
//! Not a builder: no build steps, no defaults, no hidden logic. The struct
//! just groups the ports the command surface needs.

use std::sync::Arc;

use lm_core::ports::{ClipboardPort, EditorPort, PythonEnvironmentPort, TitleResolverPort, UiPort};
use lm_core::LinkmarkConfig;

/// Everything [`Linkmark::new`](crate::Linkmark::new) needs, in one place.
pub struct LinkmarkDeps {
    pub clipboard: Arc<dyn ClipboardPort>,
    pub editor: Arc<dyn EditorPort>,
    pub resolver: Arc<dyn TitleResolverPort>,
    pub environment: Arc<dyn PythonEnvironmentPort>,
    pub ui: Arc<dyn UiPort>,
    pub config: LinkmarkConfig,
}
