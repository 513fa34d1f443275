//! Page navigation with a delayed commit.
//!
//! Selecting a new page puts the navigator into `Transitioning` and hands out a
//! [`TransitionTicket`]. The caller schedules `commit(ticket)` after the delay.
//! Only the ticket of the latest transition commits; requests that arrive while
//! a transition is pending restart it with the newest target, so an earlier
//! timer can never land a stale page.

use std::time::Duration;

use super::pages::{PageContent, PageKey, resolve};

pub const TRANSITION_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Transitioning {
        target: PageKey,
        ticket: TransitionTicket,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateOutcome {
    /// Already on (or already heading to) the requested page.
    Ignored,
    Started {
        ticket: TransitionTicket,
        delay: Duration,
    },
    /// A pending transition was replaced by one toward the newer target.
    Restarted {
        ticket: TransitionTicket,
        delay: Duration,
    },
    /// The pending transition was dropped because the current page was requested.
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    current: PageKey,
    phase: Phase,
    delay: Duration,
    next_ticket: u64,
}

impl Navigator {
    pub fn new(start: PageKey, delay: Duration) -> Self {
        Self {
            current: start,
            phase: Phase::Idle,
            delay,
            next_ticket: 0,
        }
    }

    pub fn current(&self) -> PageKey {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn pending_target(&self) -> Option<PageKey> {
        match self.phase {
            Phase::Idle => None,
            Phase::Transitioning { target, .. } => Some(target),
        }
    }

    /// Content currently on screen. During a transition this is still the
    /// page being left.
    pub fn displayed(&self) -> &'static PageContent {
        resolve(self.current)
    }

    pub fn navigate(&mut self, target: PageKey) -> NavigateOutcome {
        match self.phase {
            Phase::Idle if target == self.current => NavigateOutcome::Ignored,
            Phase::Idle => {
                let ticket = self.begin(target);
                tracing::debug!(from = ?self.current, to = ?target, "Navigation started");
                NavigateOutcome::Started {
                    ticket,
                    delay: self.delay,
                }
            }
            Phase::Transitioning { target: pending, .. } if pending == target => {
                NavigateOutcome::Ignored
            }
            Phase::Transitioning { .. } if target == self.current => {
                self.phase = Phase::Idle;
                tracing::debug!(page = ?self.current, "Navigation cancelled");
                NavigateOutcome::Cancelled
            }
            Phase::Transitioning { target: pending, .. } => {
                let ticket = self.begin(target);
                tracing::debug!(replaced = ?pending, to = ?target, "Navigation restarted");
                NavigateOutcome::Restarted {
                    ticket,
                    delay: self.delay,
                }
            }
        }
    }

    /// Settles a pending transition. Returns `false` for tickets that were
    /// superseded, cancelled, or already committed.
    pub fn commit(&mut self, ticket: TransitionTicket) -> bool {
        match self.phase {
            Phase::Transitioning {
                target,
                ticket: pending,
            } if pending == ticket => {
                self.current = target;
                self.phase = Phase::Idle;
                tracing::debug!(page = ?target, "Navigation committed");
                true
            }
            _ => {
                tracing::debug!(?ticket, "Ignoring stale navigation commit");
                false
            }
        }
    }

    fn begin(&mut self, target: PageKey) -> TransitionTicket {
        self.next_ticket += 1;
        let ticket = TransitionTicket(self.next_ticket);
        self.phase = Phase::Transitioning { target, ticket };
        ticket
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(PageKey::default(), TRANSITION_DELAY)
    }
}
