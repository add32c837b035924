//! Tool domain module
//!
//! The relay exposes exactly three device operations to the model, plus a
//! batch wrapper:
//!
//! | Operation | [`ToolCall`] | Device API |
//! |-----------|--------------|------------|
//! | `list_devices` | `List` | `GET /api/devices` |
//! | `get_device(id)` | `Get { id }` | `GET /api/devices/{id}` |
//! | `update_device_state(id, state)` | `Update { id, state }` | `PUT /api/devices/{id}` |
//! | several of the above | `Batch { calls }` | one request per member, in order |
//!
//! ```text
//! model text ──extract──▶ ToolCall ──execute──▶ ToolResult ──▶ next model turn
//! ```
//!
//! Calls travel on the wire (HTTP responses, follow-up prompts) in the
//! action-descriptor form `{"action": "get", "id": "lamp1"}`; see
//! [`ToolCall::from_descriptor`] and [`ToolCall::to_descriptor`].

pub mod entities;
pub mod value_objects;

pub use entities::{GET_DEVICE, LIST_DEVICES, ToolCall, UPDATE_DEVICE_STATE};
pub use value_objects::{MULTI_STATUS, ToolResult};
