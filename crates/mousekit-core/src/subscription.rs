//! Keeps listener registrations in step with a consumer's configuration.
//!
//! A [`MouseSubscription`] registers one handler per enabled kind on its
//! input source. Whenever the resolved configuration changes it removes every
//! registration made under the previous configuration before registering for
//! the new one. There is no incremental diff: a swap from `{down, move}` to
//! `{down}` removes and re-adds the `down` listener too.
//!
//! ```text
//! Uninitialized --start--> Active --stop--> Terminated
//!                            |  ^
//!                            +--+ reconfigure (teardown + rebuild)
//! ```

use crate::config::{ActiveKinds, MouseEvents};
use crate::event::MouseEventKind;
use crate::source::{InputSource, MouseEventHandler};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionPhase {
    Uninitialized,
    Active,
    Terminated,
}

pub struct MouseSubscription<S: InputSource> {
    source: Option<S>,
    handler: MouseEventHandler,
    phase: SubscriptionPhase,
    config: Option<MouseEvents>,
    registered: ActiveKinds,
}

impl<S: InputSource> MouseSubscription<S> {
    /// Creates an uninitialized subscription.
    ///
    /// Without a source every operation still succeeds but nothing is ever
    /// registered.
    pub fn new(source: Option<S>, handler: MouseEventHandler) -> Self {
        Self {
            source,
            handler,
            phase: SubscriptionPhase::Uninitialized,
            config: None,
            registered: ActiveKinds::new(),
        }
    }

    pub fn phase(&self) -> SubscriptionPhase {
        self.phase
    }

    /// The configuration currently applied, if any.
    pub fn config(&self) -> Option<MouseEvents> {
        self.config
    }

    /// Kinds this subscription currently holds a registration for.
    pub fn registered_kinds(&self) -> &[MouseEventKind] {
        &self.registered
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn handler(&self) -> &MouseEventHandler {
        &self.handler
    }

    /// Activates the subscription, or reconfigures it if already active.
    pub fn start(&mut self, config: MouseEvents) {
        match self.phase {
            SubscriptionPhase::Uninitialized => {
                self.attach(config);
                self.phase = SubscriptionPhase::Active;
            }
            SubscriptionPhase::Active => self.reconfigure(config),
            SubscriptionPhase::Terminated => {
                log::debug!("ignoring start on terminated mouse subscription");
            }
        }
    }

    /// Applies `config`, tearing down and rebuilding registrations if it
    /// differs from the configuration in effect.
    pub fn reconfigure(&mut self, config: MouseEvents) {
        match self.phase {
            SubscriptionPhase::Uninitialized => self.start(config),
            SubscriptionPhase::Active => {
                if self.config == Some(config) {
                    return;
                }
                log::debug!(
                    "mouse subscription reconfigured: {:?} -> {:?}",
                    self.config,
                    config
                );
                self.detach_all();
                self.attach(config);
            }
            SubscriptionPhase::Terminated => {
                log::debug!("ignoring reconfigure on terminated mouse subscription");
            }
        }
    }

    /// Removes every registration and terminates.
    ///
    /// Calling it again only retries removals the source refused earlier;
    /// once nothing is left registered it is a no-op.
    pub fn stop(&mut self) {
        if self.phase == SubscriptionPhase::Terminated && self.registered.is_empty() {
            return;
        }
        self.detach_all();
        self.config = None;
        self.phase = SubscriptionPhase::Terminated;
    }

    fn attach(&mut self, config: MouseEvents) {
        self.config = Some(config);
        let Some(source) = self.source.as_ref() else {
            log::debug!("no input source available; mouse events will not be observed");
            return;
        };

        for kind in config.active_kinds() {
            if !source.supports(kind) {
                log::debug!("input source does not deliver {kind} events; skipping");
                continue;
            }
            match source.register(kind, &self.handler) {
                Ok(()) => {
                    log::debug!("registered {kind} handler {}", self.handler.id());
                    // A kind whose removal failed is still registered on the source.
                    if !self.registered.contains(&kind) {
                        self.registered.push(kind);
                    }
                }
                Err(err) => log::warn!("failed to register {kind} handler: {err}"),
            }
        }
    }

    /// Kinds the source refuses to deregister stay in `registered` so a
    /// later teardown retries them.
    fn detach_all(&mut self) {
        let Some(source) = self.source.as_ref() else {
            self.registered.clear();
            return;
        };
        let handler = &self.handler;
        self.registered
            .retain(|kind| match source.deregister(*kind, handler) {
                Ok(()) => {
                    log::debug!("deregistered {kind} handler {}", handler.id());
                    false
                }
                Err(err) => {
                    log::warn!("failed to deregister {kind} handler: {err}");
                    true
                }
            });
    }
}

impl<S: InputSource> Drop for MouseSubscription<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "tests/subscription_tests.rs"]
mod tests;
