//! Two-page wizard navigation
//!
//! The page index only moves while `Idle`. A successful move enters
//! `Transitioning { target, ticket }`; the caller returns to `Idle` with
//! `finish_transition(ticket)` once the presentational delay has elapsed.
//! Tickets are never reused, so an unlock scheduled for an earlier move
//! cannot end a later one. Nothing here gates field edits.

pub const TOTAL_PAGES: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Idle,
    Transitioning { target: u8, ticket: u32 },
}

/// A page change that holds the lock until its ticket is finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMove {
    pub page: u8,
    pub ticket: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wizard {
    page: u8,
    transition: Transition,
    last_ticket: u32,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            page: 1,
            transition: Transition::Idle,
            last_ticket: 0,
        }
    }

    /// Active page, 1-based
    pub fn page(&self) -> u8 {
        self.page
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.transition, Transition::Transitioning { .. })
    }

    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.page == TOTAL_PAGES
    }

    /// Advance one page; `None` when locked or at the end
    pub fn go_next(&mut self) -> Option<PageMove> {
        if self.is_transitioning() || self.is_last_page() {
            return None;
        }
        self.move_to(self.page + 1)
    }

    /// Go back one page; `None` when locked or at the start
    pub fn go_prev(&mut self) -> Option<PageMove> {
        if self.is_transitioning() || self.is_first_page() {
            return None;
        }
        self.move_to(self.page - 1)
    }

    fn move_to(&mut self, target: u8) -> Option<PageMove> {
        self.last_ticket = self.last_ticket.wrapping_add(1);
        let ticket = self.last_ticket;
        self.page = target;
        self.transition = Transition::Transitioning { target, ticket };
        Some(PageMove {
            page: target,
            ticket,
        })
    }

    /// Unlock if `ticket` belongs to the transition in progress
    pub fn finish_transition(&mut self, ticket: u32) -> bool {
        match self.transition {
            Transition::Transitioning { ticket: current, .. } if current == ticket => {
                self.transition = Transition::Idle;
                true
            }
            _ => false,
        }
    }

    /// Back to page 1, unlocked; outstanding tickets stay spent
    pub fn reset(&mut self) {
        self.page = 1;
        self.transition = Transition::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(step: Option<PageMove>) -> u32 {
        step.map(|m| m.ticket).unwrap_or_default()
    }

    #[test]
    fn test_next_reaches_last_page_then_stops() {
        let mut wizard = Wizard::new();
        let step = wizard.go_next();
        assert_eq!(step.map(|m| m.page), Some(2));
        assert!(wizard.finish_transition(ticket(step)));
        assert_eq!(wizard.go_next(), None);
        assert_eq!(wizard.page(), 2);
    }

    #[test]
    fn test_prev_on_first_page_is_noop() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.go_prev(), None);
        assert_eq!(wizard.page(), 1);
        assert_eq!(wizard.transition(), Transition::Idle);
    }

    #[test]
    fn test_locked_while_transitioning() {
        let mut wizard = Wizard::new();
        let step = wizard.go_next();
        assert_eq!(
            wizard.transition(),
            Transition::Transitioning {
                target: 2,
                ticket: ticket(step)
            }
        );
        assert_eq!(wizard.go_prev(), None);
        assert_eq!(wizard.page(), 2);

        assert!(wizard.finish_transition(ticket(step)));
        assert_eq!(wizard.go_prev().map(|m| m.page), Some(1));
        assert!(wizard.is_first_page());
    }

    #[test]
    fn test_finish_ignores_unknown_ticket() {
        let mut wizard = Wizard::new();
        let step = wizard.go_next();
        assert!(!wizard.finish_transition(ticket(step) + 1));
        assert!(wizard.is_transitioning());
        assert!(!wizard.finish_transition(0));
        assert!(wizard.is_transitioning());
    }

    #[test]
    fn test_reset() {
        let mut wizard = Wizard::new();
        wizard.go_next();
        wizard.reset();
        assert_eq!(wizard.page(), 1);
        assert_eq!(wizard.transition(), Transition::Idle);
    }

    #[test]
    fn test_stale_unlock_after_reset_keeps_new_lock() {
        let mut wizard = Wizard::new();
        let first = wizard.go_next();
        wizard.reset();

        let second = wizard.go_next();
        assert_ne!(ticket(first), ticket(second));

        // the timer from the first move fires inside the second window
        assert!(!wizard.finish_transition(ticket(first)));
        assert!(wizard.is_transitioning());
        assert_eq!(wizard.go_prev(), None);
        assert_eq!(wizard.page(), 2);

        assert!(wizard.finish_transition(ticket(second)));
        assert_eq!(wizard.go_prev().map(|m| m.page), Some(1));
    }
}
