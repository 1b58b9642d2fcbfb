//! Analysis session lifecycle for phishscope.
//!
//! One [`SessionController`] drives one fetch-and-analyze operation at a time
//! through `Idle -> Loading -> Succeeded | Failed`, re-entering `Loading` on
//! each new trigger. The presentation layer consumes it through three calls:
//!
//! ```no_run
//! use futures::stream::StreamExt;
//! use phishscope_session::{Config, SessionController};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let controller = SessionController::connect(&Config::default());
//! let mut states = controller.subscribe();
//!
//! controller.trigger();
//! while let Some(state) = states.next().await {
//!     println!("session is now {}", state.as_str());
//!     if state.is_terminal() {
//!         break;
//!     }
//! }
//! # }
//! ```
//!
//! Failures of any kind (transport, bad status, malformed payload, contract
//! violations found during normalization) collapse into a single `Failed`
//! state carrying [`FETCH_FAILED_MESSAGE`]; the underlying error is logged via
//! `tracing` for operators and never exposed to end users.

pub mod config;
pub mod controller;
pub mod error;

pub use config::{Config, DEFAULT_BASE_URL, resolve_base_url};
pub use controller::{FETCH_FAILED_MESSAGE, SessionController, StateStream};
pub use error::{Error, Result};

// Re-export the state type so consumers don't need phishscope-types directly.
pub use phishscope_types::SessionState;
