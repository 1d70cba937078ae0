use crate::automaton::{Automaton, State, StateId};

/// A matcher that executes an [`Automaton`] against input.
///
/// Matching is a single greedy walk: for each input character the first
/// viable candidate of the current state is taken, and there is no
/// backtracking. Since only the current state is tracked, a matcher is cheap
/// to create and never mutates the automaton.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    automaton: &'a Automaton,
}

impl<'a> Matcher<'a> {
    /// Create a new matcher for the given automaton
    pub fn new(automaton: &'a Automaton) -> Self {
        Self { automaton }
    }

    /// Check if the entire input is accepted.
    pub fn accepts(&self, input: &str) -> bool {
        let mut curr = self.automaton.start();
        let mut last = None;
        for ch in input.chars() {
            curr = match self.step(curr, ch) {
                Some(next) => next,
                None => {
                    debug!("rejected {:?}: no candidate for {:?}", input, ch);
                    return false;
                }
            };
            last = Some(ch);
        }
        curr = self.settle(curr, last);
        let accepted = self.automaton.is_final(curr);
        debug!("{:?} accepted: {}", input, accepted);
        accepted
    }

    /// Find the state that consumes `ch` from `curr`.
    ///
    /// Candidates are tried in order. When a candidate is a quantifier, its
    /// own candidates are tried instead and the last one that consumes `ch`
    /// wins. A quantifier that has no such candidate is passed over.
    fn step(&self, curr: StateId, ch: char) -> Option<StateId> {
        let fsm = self.automaton;
        for &candidate in fsm.candidates(curr) {
            if fsm.state(candidate).is_quantifier() {
                let inner = fsm
                    .candidates(candidate)
                    .iter()
                    .rev()
                    .copied()
                    .find(|&inner| fsm.accepts_self(inner, ch));
                if let Some(inner) = inner {
                    trace!("{} -> {} (via {}) on {:?}", curr, inner, candidate, ch);
                    return Some(inner);
                }
            } else if fsm.accepts_self(candidate, ch) {
                trace!("{} -> {} on {:?}", curr, candidate, ch);
                return Some(candidate);
            }
        }
        None
    }

    /// Once the input is exhausted, `curr` may be a repeated state sitting
    /// one step short of its quantifier, which is the state that actually
    /// lists the continuation. Move onto the quantifier if the last character
    /// was one of its repetitions, or if nothing was consumed and the
    /// quantifier allows zero repetitions.
    fn settle(&self, curr: StateId, last: Option<char>) -> StateId {
        let fsm = self.automaton;
        let first = match fsm.candidates(curr).first() {
            Some(&first) => first,
            None => return curr,
        };
        match (fsm.state(first), last) {
            (
                &State::ZeroOrMore { checking, .. }
                | &State::OneOrMore { checking, .. },
                Some(ch),
            ) if fsm.accepts_self(checking, ch) => first,
            (State::ZeroOrMore { .. }, None) => first,
            _ => curr,
        }
    }
}
