use crate::{
    automaton::{Automaton, State, StateId},
    CompileResult, UnsupportedTokenError,
};

/// Compiler that converts a pattern into an [`Automaton`].
///
/// Compilation is a single left-to-right pass. Each token is appended as a
/// candidate of the state before it. A token followed by `*` is compiled as a
/// `ZeroOrMore` wrapping the token's own state, and that inner state loops
/// back to the wrapper so it can repeat.
///
/// Since matching never backtracks, whatever comes after a `*` or `+` must be
/// a direct candidate of both the quantifier (stop repeating) and the state
/// it wraps (just repeated once more). The compiler tracks the wrapped state
/// as "pending" until the next state exists and can be wired to it.
#[derive(Debug)]
pub struct Compiler {
    automaton: Automaton,
}

impl Compiler {
    /// Create a new compiler
    pub fn new() -> Self {
        Self { automaton: Automaton::with_pattern("") }
    }

    /// Compile `pattern` into an automaton.
    pub fn compile(mut self, pattern: &str) -> CompileResult<Automaton> {
        self.automaton = Automaton::with_pattern(pattern);
        let start = self.automaton.add_state(State::Start { next: vec![] });
        self.automaton.set_start(start);

        let tokens: Vec<(usize, char)> = pattern.char_indices().collect();
        let mut prev = start;
        let mut pending: Option<StateId> = None;
        let mut i = 0;
        while i < tokens.len() {
            let (offset, token) = tokens[i];
            let peek = tokens.get(i + 1).map(|&(_, ch)| ch);

            if peek == Some('*') {
                // Note that a pending state from an earlier quantifier is
                // dropped here without being wired to the new wrapper.
                let inner = self.compile_token(token, offset, prev)?;
                let star = self.automaton.zero_or_more(inner);
                trace!("added state {} for '{}*' at {}", star, token, offset);
                self.automaton.connect(inner, star);
                self.automaton.connect(prev, star);
                prev = star;
                pending = Some(inner);
                i += 2;
                continue;
            }

            let state = self.compile_token(token, offset, prev)?;
            if let Some(repeated) = pending.take() {
                self.automaton.connect(repeated, state);
            }
            if let State::OneOrMore { checking, .. } = *self.automaton.state(state) {
                pending = Some(checking);
            }
            self.automaton.connect(prev, state);
            prev = state;
            i += 1;
        }

        let term = self.automaton.add_state(State::Termination);
        if let Some(repeated) = pending {
            self.automaton.connect(repeated, term);
        }
        self.automaton.connect(prev, term);

        debug!(
            "compiled {:?} into {} states",
            pattern,
            self.automaton.len()
        );
        Ok(self.automaton)
    }

    /// Create the state for a single token. Quantifier tokens wrap `prev`.
    fn compile_token(
        &mut self,
        token: char,
        offset: usize,
        prev: StateId,
    ) -> CompileResult<StateId> {
        let id = match token {
            '.' => self.automaton.add_state(State::Wildcard { next: vec![] }),
            '*' => self.automaton.zero_or_more(prev),
            '+' => self.automaton.one_or_more(prev),
            ch if ch.is_ascii() => {
                self.automaton.add_state(State::Literal { ch, next: vec![] })
            }
            ch => return Err(UnsupportedTokenError::new(ch, offset)),
        };
        trace!("added state {} for {:?} at {}", id, token, offset);
        Ok(id)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
