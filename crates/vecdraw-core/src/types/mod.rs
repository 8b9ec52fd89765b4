//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for `Rc<RefCell<T>>` and its weak counterpart.
//! - [`subscription`]: Handles identifying registered change listeners.

pub mod aliases;
pub mod subscription;

pub use aliases::*;
pub use subscription::SubscriptionId;
