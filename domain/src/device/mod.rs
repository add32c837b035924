//! Device domain.
//!
//! Devices are owned by the external device API; the relay only reads them to
//! describe the home to the model.

pub mod entities;

pub use entities::Device;
