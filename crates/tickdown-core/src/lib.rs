//! Core state machine for the tickdown countdown widget.
//!
//! Everything in here is pure and clock-agnostic: interval math, the
//! countdown decomposition, the share-link codec and the controller that
//! ties them together. Rendering and input live in the CLI crate.

pub mod clock;
pub mod codec;
pub mod controller;
pub mod display;
pub mod error;
pub mod interval;
pub mod link;
pub mod progress;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::Controller;
pub use display::{CountdownView, countdown_view};
pub use error::{Error, Result};
pub use interval::{Endpoint, Interval, truncate_to_millis};
pub use link::{InMemoryLink, LinkSlot};
pub use progress::{Remaining, percentage_complete, remaining};
