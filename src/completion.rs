/*
 *   Copyright (c) 2024 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Tab-completion sub-loop: cycle candidates in place without touching the real
//! buffer until one is committed.

/// Candidates returned by a completion callback for the current buffer contents.
#[derive(Debug, Default)]
pub struct Completions(pub Vec<String>);

impl Completions {
    pub fn push(&mut self, candidate: impl Into<String>) {
        self.0.push(candidate.into());
    }
}

/// Drives the candidate-cycling sub-loop started by pressing Tab.
pub struct CompletionSession {
    candidates: Vec<String>,
    /// `index == candidates.len()` means "show the original buffer".
    index: usize,
}

impl CompletionSession {
    pub fn new(candidates: Completions) -> Option<Self> {
        if candidates.0.is_empty() {
            None
        } else {
            Some(Self { candidates: candidates.0, index: 0 })
        }
    }

    /// What to display in place of the real buffer right now, or `None` to show the
    /// real buffer unchanged.
    pub fn display(&self) -> Option<&str> {
        self.candidates.get(self.index).map(String::as_str)
    }

    /// Advances to the next candidate, wrapping through "show original buffer"
    /// (index == len) before repeating. Returns `true` if it wrapped past the last
    /// candidate back to the original buffer (the caller should beep).
    pub fn advance(&mut self) -> bool {
        self.index = (self.index + 1) % (self.candidates.len() + 1);
        self.index == self.candidates.len()
    }

    /// The candidate to commit to the real buffer, if the session stopped on one
    /// rather than on "original buffer".
    pub fn commit(&self) -> Option<&str> {
        self.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(words: &[&str]) -> Completions {
        let mut c = Completions::default();
        for w in words {
            c.push(*w);
        }
        c
    }

    #[test]
    fn empty_candidates_yields_no_session() {
        assert!(CompletionSession::new(Completions::default()).is_none());
    }

    #[test]
    fn first_candidate_is_shown_immediately() {
        let s = CompletionSession::new(candidates(&["foo", "foobar"])).unwrap();
        assert_eq!(s.display(), Some("foo"));
    }

    #[test]
    fn advance_cycles_and_wraps_to_original_buffer() {
        let mut s = CompletionSession::new(candidates(&["foo", "foobar"])).unwrap();
        assert!(!s.advance());
        assert_eq!(s.display(), Some("foobar"));
        assert!(s.advance());
        assert_eq!(s.display(), None);
        assert!(!s.advance());
        assert_eq!(s.display(), Some("foo"));
    }

    #[test]
    fn commit_returns_none_when_stopped_on_original_buffer() {
        let mut s = CompletionSession::new(candidates(&["foo"])).unwrap();
        s.advance();
        assert_eq!(s.commit(), None);
    }
}
