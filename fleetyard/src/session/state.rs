// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
/// Input state of a [`PlacementSession`][crate::session::PlacementSession].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SessionState {
    /// Ready to handle the next event.
    AwaitingInput,
    /// An event is being handled. Events arriving now are dropped.
    Busy,
    /// Every ship is placed. Terminal.
    Complete,
}

impl SessionState {
    /// Move to [`Busy`][SessionState::Busy] if the session accepts input. Returns false,
    /// leaving the state untouched, if the event must be dropped.
    pub(super) fn try_begin(&mut self) -> bool {
        match self {
            SessionState::AwaitingInput => {
                *self = SessionState::Busy;
                true
            }
            SessionState::Busy | SessionState::Complete => false,
        }
    }

    /// Leave [`Busy`][SessionState::Busy], becoming complete or awaiting more input.
    pub(super) fn finish(&mut self, complete: bool) {
        *self = if complete {
            SessionState::Complete
        } else {
            SessionState::AwaitingInput
        };
    }

    /// Returns true if the next event will be handled.
    pub fn accepts_input(self) -> bool {
        self == SessionState::AwaitingInput
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::AwaitingInput
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions() {
        let mut state = SessionState::default();
        assert!(state.try_begin());
        assert_eq!(state, SessionState::Busy);
        assert!(!state.try_begin());
        state.finish(false);
        assert!(state.accepts_input());

        assert!(state.try_begin());
        state.finish(true);
        assert_eq!(state, SessionState::Complete);
        assert!(!state.try_begin());
        assert_eq!(state, SessionState::Complete);
    }
}
