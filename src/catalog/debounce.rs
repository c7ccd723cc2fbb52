/// Identifies one scheduled settle. Only the most recent ticket can settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket(u64);

/// A value that only takes effect once input has been quiet for a while.
///
/// The caller schedules a timer for each ticket returned by [`Debounced::push`]
/// and calls [`Debounced::settle`] when it fires. Superseded or cancelled
/// tickets settle nothing, so a late timer can never apply stale input.
#[derive(Debug, Clone, Default)]
pub struct Debounced<T> {
    settled: T,
    pending: Option<T>,
    generation: u64,
}

impl<T> Debounced<T> {
    pub fn new(value: T) -> Self {
        Self {
            settled: value,
            pending: None,
            generation: 0,
        }
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    /// Latest value pushed, settled or not.
    pub fn latest(&self) -> &T {
        self.pending.as_ref().unwrap_or(&self.settled)
    }

    pub fn push(&mut self, value: T) -> SettleTicket {
        self.generation += 1;
        self.pending = Some(value);
        SettleTicket(self.generation)
    }

    /// Returns true if the settled value changed hands.
    pub fn settle(&mut self, ticket: SettleTicket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match self.pending.take() {
            Some(value) => {
                self.settled = value;
                true
            }
            None => false,
        }
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_ticket_settles() {
        let mut search = Debounced::new(String::new());
        let first = search.push("r".to_string());
        let second = search.push("re".to_string());
        let third = search.push("rea".to_string());

        assert_eq!(search.settled(), "");
        assert_eq!(search.latest(), "rea");
        assert!(!search.settle(first));
        assert!(!search.settle(second));
        assert_eq!(search.settled(), "");

        assert!(search.settle(third));
        assert_eq!(search.settled(), "rea");
        assert_eq!(search.latest(), "rea");
        // firing twice is harmless
        assert!(!search.settle(third));
    }

    #[test]
    fn test_cancel_invalidates_pending() {
        let mut search = Debounced::new("start".to_string());
        let ticket = search.push("next".to_string());
        search.cancel();
        assert!(!search.settle(ticket));
        assert_eq!(search.settled(), "start");
        assert_eq!(search.latest(), "start");
    }
}
