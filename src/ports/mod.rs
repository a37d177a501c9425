//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.

mod result_notifier;

pub use result_notifier::{NotifyError, ResultAttachment, ResultNotifier};
