//! Subject/observer coordination.
//!
//! This module contains the notification contract shared by the station and
//! its displays:
//! - `traits`: the `Observer` and `Subject` capabilities
//! - `registry`: an ordered, snapshot-on-notify observer list

pub mod registry;
pub mod traits;

pub use registry::ObserverRegistry;
pub use traits::{Observer, Subject};
