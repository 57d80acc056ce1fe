// Alert feed module for the bounded, deduplicated notification list.
//
// Architecture:
// - model.rs: Alert kinds and records
// - time_ago.rs: Relative-time labels
// - view.rs: Rendering surface abstraction and in-memory view
// - feed.rs: Insertion, dedup, eviction and label refresh
// - error.rs: View and feed failures

pub mod error;
pub mod feed;
pub mod model;
pub mod time_ago;
pub mod view;

pub use error::{FeedError, ViewError};
pub use feed::{AlertFeed, FeedConfig, SharedFeed, SubmitOutcome};
pub use model::{Alert, AlertKind};
pub use time_ago::time_ago;
pub use view::{AlertView, MemoryView, RenderedAlert};
