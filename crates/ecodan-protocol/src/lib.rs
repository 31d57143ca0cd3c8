//! Ecodan FTC Serial Protocol
//!
//! This crate provides types and utilities for talking to the FTC controller
//! of an Ecodan air-to-water heat pump over its proprietary serial protocol.
//! The protocol uses framed messages where each frame carries a message type
//! byte and, for status responses, a packet code identifying the payload
//! layout.
//!
//! # Protocol Overview
//!
//! Traffic is strictly request/response:
//!
//! - **Requests** (host → controller): connect handshake, get/configuration
//!   reads, set writes.
//! - **Responses** (controller → host): one response per request, with set
//!   acknowledgements arriving in send order and carrying no correlation id.
//!
//! Nothing here is officially documented; field offsets and scales reproduce
//! observed controller behavior.
//!
//! # Example
//!
//! ```rust,ignore
//! use ecodan_protocol::{Command, FrameCodec};
//!
//! // Build the handshake
//! let bytes = Command::connect().encode();
//!
//! // Parse whatever comes back
//! let mut codec = FrameCodec::new();
//! codec.push(&received);
//! while let Some(frame) = codec.decode()? {
//!     // route on frame.message_type() / frame.packet_code()
//! }
//! ```

mod commands;
mod constants;
pub mod decode;
mod error;
mod fault;
mod frame;
mod types;

pub use commands::*;
pub use constants::*;
pub use error::*;
pub use fault::*;
pub use frame::*;
pub use types::*;
