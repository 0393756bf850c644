/// Sequence numbers for search-as-you-type.
///
/// Every keystroke takes a new number. A debounce tick only releases the
/// query it was scheduled for if nothing newer was typed meanwhile, and a
/// response is only applied while its number is still the latest, so an
/// older request that resolves late can never overwrite newer results.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchGate {
    seq: u64,
    pending: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchInput {
    /// blank query, drop results without touching the network
    Clear,
    /// start the debounce timer for this sequence number
    Schedule(u64),
}

impl SearchGate {
    pub fn input(&mut self, query: &str) -> SearchInput {
        self.seq += 1;
        let query = query.trim();
        if query.is_empty() {
            self.pending = None;
            SearchInput::Clear
        } else {
            self.pending = Some(query.to_string());
            SearchInput::Schedule(self.seq)
        }
    }

    /// Called when the debounce timer of `seq` elapses.
    pub fn fire(&mut self, seq: u64) -> Option<String> {
        if self.is_current(seq) {
            self.pending.take()
        } else {
            None
        }
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.seq == seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_last_keystroke_fires() {
        let mut gate = SearchGate::default();
        let ticks: Vec<u64> = ["a", "an", "ana"]
            .into_iter()
            .map(|q| match gate.input(q) {
                SearchInput::Schedule(seq) => seq,
                SearchInput::Clear => unreachable!(),
            })
            .collect();

        assert_eq!(gate.fire(ticks[0]), None);
        assert_eq!(gate.fire(ticks[1]), None);
        assert_eq!(gate.fire(ticks[2]), Some("ana".to_string()));
        // a timer can only release its query once
        assert_eq!(gate.fire(ticks[2]), None);
    }

    #[test]
    fn blank_input_clears_and_invalidates() {
        let mut gate = SearchGate::default();
        let SearchInput::Schedule(seq) = gate.input("bo") else {
            panic!("expected a scheduled search");
        };
        assert_eq!(gate.input("   "), SearchInput::Clear);
        assert!(!gate.is_current(seq));
        assert_eq!(gate.fire(seq), None);
    }

    #[test]
    fn query_is_trimmed() {
        let mut gate = SearchGate::default();
        let SearchInput::Schedule(seq) = gate.input("  ana ") else {
            panic!("expected a scheduled search");
        };
        assert_eq!(gate.fire(seq), Some("ana".to_string()));
    }
}
