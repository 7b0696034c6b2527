//! Profile Page
//!
//! Renders a single-page academic/professional profile from one JSON
//! document into a page template.
//!
//! Layout:
//! - `model`: the profile document
//! - `fetch`: one-shot document loading (HTTP or file)
//! - `dom`: the document seam and an in-memory implementation
//! - `anchors`: per-pass anchor resolution
//! - `render/`: section renderers and the pipeline that runs them
//! - `interaction/`: project filter and card expansion state
//! - `lookup/`: static skill and project tables
//! - `page`: `init` and the event handlers of a mounted page

pub mod anchors;
pub mod config;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod interaction;
pub mod lookup;
pub mod model;
pub mod page;
pub mod render;

// Re-export commonly used types
pub use anchors::Anchors;
pub use config::{RenderConfig, Selectors};
pub use dom::{Dom, NodeId, ScrollBehavior, StaticDom};
pub use error::{FetchError, LookupError, RenderError};
pub use fetch::{fetch_profile, load_profile, DataSource};
pub use interaction::{Activation, CardOutcome, EventTarget, ProjectsController, ScheduledScroll};
pub use model::ProfileDocument;
pub use page::{init, ProfilePage};
pub use render::{RenderPipeline, RenderReport, SectionOutcome};
