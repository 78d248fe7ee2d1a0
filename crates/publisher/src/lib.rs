//! Webhook publish dispatch.
//!
//! Scheduled content items are delivered to the user-configured automation
//! webhook one at a time, in batch order. Delivery is retry-free per item:
//! a failed item is counted and left Scheduled so a later dispatch run can
//! pick it up again. The HTTP transport sits behind the [`Delivery`] seam
//! so the partial-failure contract is testable without a network.

pub mod delivery;
pub mod dispatch;
pub mod error;
pub mod payload;

pub use delivery::{Delivery, WebhookDelivery};
pub use dispatch::{dispatch_scheduled, DispatchReport};
pub use error::PublishError;
pub use payload::PublishRequest;
