/// Cancel-and-reschedule bookkeeping for a single deferred action.
///
/// Every [`Debounce::arm`] supersedes the tickets handed out before it, so a
/// deferred callback only runs its action if nothing re-armed in between.
#[derive(Clone, Copy, Debug, Default)]
pub struct Debounce {
    generation: u64,
    fired: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

impl Debounce {
    pub fn arm(&mut self) -> DebounceTicket {
        self.generation = self.generation.wrapping_add(1);
        self.fired = false;
        DebounceTicket(self.generation)
    }

    pub fn is_pending(&self) -> bool {
        self.generation != 0 && !self.fired
    }

    /// Returns true exactly once, for the most recent ticket only.
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        if ticket.0 != self.generation || self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_ticket_does_not_fire() {
        let mut d = Debounce::default();
        let first = d.arm();
        let second = d.arm();
        assert!(!d.fire(first));
        assert!(d.fire(second));
    }

    #[test]
    fn only_the_last_of_many_rearms_fires() {
        let mut d = Debounce::default();
        let tickets: Vec<DebounceTicket> = (0..500).map(|_| d.arm()).collect();
        let (last, stale) = tickets.split_last().unwrap();
        assert!(stale.iter().all(|t| !d.fire(*t)));
        assert!(d.is_pending());
        assert!(d.fire(*last));
    }

    #[test]
    fn ticket_fires_once() {
        let mut d = Debounce::default();
        let t = d.arm();
        assert!(d.is_pending());
        assert!(d.fire(t));
        assert!(!d.fire(t));
        assert!(!d.is_pending());
    }
}
