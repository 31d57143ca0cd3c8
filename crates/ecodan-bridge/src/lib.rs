//! Ecodan bridge: device-state tracking over the FTC serial protocol.
//!
//! This crate turns decoded [`ecodan_protocol::Frame`]s into a canonical
//! device-state snapshot and a stream of named value updates for a host
//! integration, and keeps the FIFO of in-flight writes that the protocol's
//! identifier-less acknowledgements require.
//!
//! The flow is single-threaded and run-to-completion: the transport hands
//! one frame to [`Dispatcher::handle_response`], which fully updates the
//! snapshot and publishes every changed field (raw and derived) to the
//! [`StateSink`] before returning. Decode failures and unknown codes are
//! absorbed as diagnostics; the snapshot keeps its last valid values.
//!
//! # Example
//!
//! ```rust,ignore
//! use ecodan_bridge::{Dispatcher, MemorySink};
//!
//! let mut dispatcher = Dispatcher::new();
//! let mut sink = MemorySink::new();
//! while let Some(frame) = codec.decode()? {
//!     dispatcher.handle_response(&frame, &mut sink);
//! }
//! println!("{:.1} C outside", dispatcher.status().outside_temperature);
//! ```

mod derived;
mod dispatch;
mod handlers;
mod sink;
mod status;
mod tracker;

pub use derived::{recompute, DerivedField, DERIVED_FIELDS};
pub use dispatch::{DispatchStats, Dispatcher};
pub use handlers::{handler_for, Handler};
pub use sink::{MemorySink, StateSink};
pub use status::*;
pub use tracker::CommandTracker;
