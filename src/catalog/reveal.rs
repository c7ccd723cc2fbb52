use super::{INCREMENT, PAGE_SIZE};

/// Identifies one "loading more" cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Decides how many records of the derived view are rendered.
///
/// The count starts at one page and grows by a fixed increment each time the
/// sentinel below the grid is in view. Growth is blocked while a cycle is in
/// flight; the cycle ends when the cosmetic timer calls [`finish_fetch`] with
/// the ticket it was scheduled for.
///
/// [`finish_fetch`]: RevealController::finish_fetch
#[derive(Debug, Clone)]
pub struct RevealController {
    visible: usize,
    increment: usize,
    sentinel_visible: bool,
    fetching: bool,
    cycle: u64,
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(PAGE_SIZE, INCREMENT)
    }
}

impl RevealController {
    pub fn new(page_size: usize, increment: usize) -> Self {
        Self {
            visible: page_size,
            increment,
            sentinel_visible: false,
            fetching: false,
            cycle: 0,
        }
    }

    /// Raw count; may exceed the view, use [`visible_len`](Self::visible_len) to slice.
    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn visible_len(&self, total: usize) -> usize {
        self.visible.min(total)
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn set_sentinel_visible(&mut self, visible: bool) {
        self.sentinel_visible = visible;
    }

    pub fn wants_more(&self, total: usize) -> bool {
        self.sentinel_visible && !self.fetching && self.has_more(total)
    }

    pub fn reveal_more(&mut self, total: usize) -> Option<FetchTicket> {
        if !self.wants_more(total) {
            return None;
        }
        self.visible += self.increment;
        self.fetching = true;
        self.cycle += 1;
        Some(FetchTicket(self.cycle))
    }

    pub fn finish_fetch(&mut self, ticket: FetchTicket) -> bool {
        if !self.fetching || ticket.0 != self.cycle {
            return false;
        }
        self.fetching = false;
        true
    }

    pub fn cancel(&mut self) {
        self.cycle += 1;
        self.fetching = false;
        self.sentinel_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_len_is_clamped() {
        let reveal = RevealController::default();
        assert_eq!(reveal.visible(), 6);
        assert_eq!(reveal.visible_len(2), 2);
        assert_eq!(reveal.visible_len(0), 0);
        assert_eq!(reveal.visible_len(20), 6);
        assert!(!reveal.has_more(2));
    }

    #[test]
    fn test_reveal_requires_visible_sentinel() {
        let mut reveal = RevealController::default();
        assert!(reveal.reveal_more(10).is_none());
        reveal.set_sentinel_visible(true);
        assert!(reveal.reveal_more(10).is_some());
        assert_eq!(reveal.visible(), 9);
    }

    #[test]
    fn test_no_double_increment_while_fetching() {
        let mut reveal = RevealController::default();
        reveal.set_sentinel_visible(true);
        let ticket = reveal.reveal_more(20).expect("should reveal");
        assert!(reveal.is_fetching());

        // rapid re-intersection
        reveal.set_sentinel_visible(false);
        reveal.set_sentinel_visible(true);
        assert!(reveal.reveal_more(20).is_none());
        assert_eq!(reveal.visible(), 9);

        assert!(reveal.finish_fetch(ticket));
        assert!(!reveal.is_fetching());
        assert!(reveal.reveal_more(20).is_some());
        assert_eq!(reveal.visible(), 12);
    }

    #[test]
    fn test_stops_when_everything_is_visible() {
        let mut reveal = RevealController::default();
        reveal.set_sentinel_visible(true);
        let ticket = reveal.reveal_more(7).expect("one more page");
        reveal.finish_fetch(ticket);
        assert_eq!(reveal.visible_len(7), 7);
        assert!(!reveal.wants_more(7));
        assert!(reveal.reveal_more(7).is_none());
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut reveal = RevealController::default();
        reveal.set_sentinel_visible(true);
        let ticket = reveal.reveal_more(20).expect("should reveal");
        reveal.cancel();
        assert!(!reveal.is_fetching());
        assert!(!reveal.finish_fetch(ticket));
        // cancel also forgets the sentinel
        assert!(reveal.reveal_more(20).is_none());
    }
}
