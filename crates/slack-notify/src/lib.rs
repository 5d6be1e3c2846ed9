//! Slack notification rendering and delivery
//!
//! This crate turns a list of pull requests into a Slack Block Kit
//! message and posts it to an incoming-webhook URL.
//!
//! Rendering (`message`) is pure; delivery (`webhook`) wraps a single
//! HTTP POST with no retry.

pub mod block;
pub mod message;
pub mod webhook;

pub use block::{Block, Message, Text};
pub use message::build_message;
pub use webhook::WebhookClient;
