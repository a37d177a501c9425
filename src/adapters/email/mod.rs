//! Email adapters - result delivery over the Resend HTTP API.

mod resend_notifier;

pub use resend_notifier::ResendNotifier;
