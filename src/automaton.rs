/*!
The state graph produced by the [`Compiler`](crate::Compiler).

Repetition makes the graph cyclic: a quantifier state lists the state it
wraps as a candidate, and the wrapped state lists the quantifier right back.
So states are never owned by one another. They all live in one arena owned by
the [`Automaton`], and refer to each other by [`StateId`].
*/

use std::fmt;

/// A state ID in the automaton. It is an index into [`Automaton::states`].
pub type StateId = usize;

/// A single node of the automaton.
///
/// Every variant except `Termination` carries its ordered list of
/// candidates: the states that may be moved to after this one. Order only
/// matters as a tie-breaker during matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// Where every match begins. Never consumes a character itself.
    Start { next: Vec<StateId> },
    /// Reaching a state that lists this as a candidate once the input is
    /// exhausted means the input is accepted.
    Termination,
    /// `.`, matches any one character.
    Wildcard { next: Vec<StateId> },
    /// Matches exactly `ch`.
    Literal { ch: char, next: Vec<StateId> },
    /// `x*`, where `checking` is the state for `x`.
    ZeroOrMore { checking: StateId, next: Vec<StateId> },
    /// `x+`, where `checking` is the state for `x`.
    OneOrMore { checking: StateId, next: Vec<StateId> },
}

impl State {
    /// The candidates of this state, in the order they were added.
    pub fn candidates(&self) -> &[StateId] {
        match self {
            State::Start { next }
            | State::Wildcard { next }
            | State::Literal { next, .. }
            | State::ZeroOrMore { next, .. }
            | State::OneOrMore { next, .. } => next.as_slice(),
            State::Termination => &[],
        }
    }

    /// The wrapped state, if this is a quantifier.
    pub fn checking(&self) -> Option<StateId> {
        match *self {
            State::ZeroOrMore { checking, .. }
            | State::OneOrMore { checking, .. } => Some(checking),
            _ => None,
        }
    }

    pub fn is_quantifier(&self) -> bool {
        self.checking().is_some()
    }

    pub fn is_termination(&self) -> bool {
        matches!(self, State::Termination)
    }

    fn candidates_mut(&mut self) -> Option<&mut Vec<StateId>> {
        match self {
            State::Start { next }
            | State::Wildcard { next }
            | State::Literal { next, .. }
            | State::ZeroOrMore { next, .. }
            | State::OneOrMore { next, .. } => Some(next),
            State::Termination => None,
        }
    }
}

/// A compiled pattern.
///
/// An automaton is built once by a [`Compiler`](crate::Compiler) and is
/// read-only afterwards. Matching borrows it immutably, so it may be shared
/// freely between threads.
#[derive(Clone, PartialEq, Eq)]
pub struct Automaton {
    /// All states, indexed by `StateId`.
    states: Vec<State>,
    start: StateId,
    pattern: String,
}

impl Automaton {
    /// Compile `pattern`. Shorthand for `Compiler::new().compile(pattern)`.
    pub fn new(pattern: &str) -> crate::CompileResult<Automaton> {
        crate::Compiler::new().compile(pattern)
    }

    /// Returns true if this automaton accepts the whole of `input`.
    pub fn accepts(&self, input: &str) -> bool {
        crate::Matcher::new(self).accepts(input)
    }

    /// The start state.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// The pattern this automaton was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// # Panics
    ///
    /// When `id` does not belong to this automaton.
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The number of states, including start and termination.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The candidates of the state `id`.
    pub fn candidates(&self, id: StateId) -> &[StateId] {
        self.state(id).candidates()
    }

    /// Whether the state `id` would consume `ch`.
    ///
    /// Start and termination states never consume anything. A quantifier
    /// consumes whatever the state it wraps consumes.
    pub fn accepts_self(&self, id: StateId, ch: char) -> bool {
        match *self.state(id) {
            State::Start { .. } | State::Termination => false,
            State::Wildcard { .. } => true,
            State::Literal { ch: expected, .. } => ch == expected,
            State::ZeroOrMore { checking, .. }
            | State::OneOrMore { checking, .. } => {
                self.accepts_self(checking, ch)
            }
        }
    }

    /// Whether a termination state is among the candidates of `id`.
    pub fn is_final(&self, id: StateId) -> bool {
        self.candidates(id).iter().any(|&c| self.state(c).is_termination())
    }

    pub(crate) fn with_pattern(pattern: &str) -> Automaton {
        Automaton { states: Vec::new(), start: 0, pattern: pattern.to_string() }
    }

    pub(crate) fn set_start(&mut self, start: StateId) {
        self.start = start;
    }

    /// Add a new state and return its ID.
    pub(crate) fn add_state(&mut self, state: State) -> StateId {
        let id = self.states.len();
        self.states.push(state);
        id
    }

    /// Create a quantifier wrapping `checking`. The wrapped state is its
    /// first candidate.
    pub(crate) fn zero_or_more(&mut self, checking: StateId) -> StateId {
        self.add_state(State::ZeroOrMore { checking, next: vec![checking] })
    }

    pub(crate) fn one_or_more(&mut self, checking: StateId) -> StateId {
        self.add_state(State::OneOrMore { checking, next: vec![checking] })
    }

    /// Append `to` to the candidates of `from`. Termination states have no
    /// candidates, so connecting from one is a no-op.
    pub(crate) fn connect(&mut self, from: StateId, to: StateId) {
        if let Some(next) = self.states[from].candidates_mut() {
            next.push(to);
        }
    }
}

impl fmt::Debug for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Automaton({:?})", self.pattern)?;
        for (id, state) in self.states.iter().enumerate() {
            let marker = if id == self.start { '>' } else { ' ' };
            write!(f, "{}{:06}: ", marker, id)?;
            match *state {
                State::Start { .. } => write!(f, "start")?,
                State::Termination => write!(f, "MATCH")?,
                State::Wildcard { .. } => write!(f, "any")?,
                State::Literal { ch, .. } => write!(f, "{:?}", ch)?,
                State::ZeroOrMore { checking, .. } => {
                    write!(f, "star(checking={:06})", checking)?
                }
                State::OneOrMore { checking, .. } => {
                    write!(f, "plus(checking={:06})", checking)?
                }
            }
            if !state.is_termination() {
                write!(f, " => [")?;
                for (i, next) in state.candidates().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:06}", next)?;
                }
                write!(f, "]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
