//! Inbound ports - Interfaces that the application exposes to the host

use crate::application::ports::outbound::HostPort;

/// Receives the host's lifecycle notifications
///
/// The host delivers `on_post_init` once, after every registry is finalized
/// and before interactive operation begins. Listeners run synchronously on the
/// host's thread and must finish before returning.
pub trait LifecycleListener {
    fn on_post_init(&mut self, host: &dyn HostPort);
}
