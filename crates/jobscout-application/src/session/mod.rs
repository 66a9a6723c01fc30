//! Session store and its change notifications.

mod listeners;
mod store;

pub use listeners::{ListenerRegistry, SessionListener, Subscription};
pub use store::SessionStore;
