//! User-facing alerts: category catalog and the cooldown gate

pub mod catalog;
pub mod gate;

pub use catalog::{spec, AlertCategory, AlertSpec};
pub use gate::{AlertSink, AlertToggles, LogSink, NotificationGate};
