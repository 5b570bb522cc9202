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

/// Construction-time limits for an [`crate::Editor`]. The `Default` impl reproduces the
/// historical fixed buffer sizes of the line editor this crate is descended from;
/// raising them is supported, shrinking them below 1 is not (the editor will clamp to
/// 1 rather than panic, but a zero-capacity editor is not a useful one).
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Maximum number of bytes the edit buffer may hold. Insertions that would exceed
    /// this are silently dropped (see [`crate::error::ReadlineError`] docs: this is not
    /// surfaced as an error).
    pub max_line_bytes: usize,

    /// Maximum number of entries retained in the history store. When full, the oldest
    /// entry is dropped to make room for a new one.
    pub max_history_entries: usize,

    /// Number of rotating slots in the kill ring.
    pub max_kill_slots: usize,

    /// `TERM` values for which raw-mode editing is refused outright (the caller falls
    /// back to cooked line-oriented reads).
    pub unsupported_terms: Vec<&'static str>,
}

pub const DEFAULT_MAX_LINE_BYTES: usize = 4096;
pub const DEFAULT_MAX_HISTORY_ENTRIES: usize = 1024;
pub const DEFAULT_MAX_KILL_SLOTS: usize = 8;

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
            max_history_entries: DEFAULT_MAX_HISTORY_ENTRIES,
            max_kill_slots: DEFAULT_MAX_KILL_SLOTS,
            unsupported_terms: vec!["dumb", "cons25", "emacs"],
        }
    }
}

impl EditorConfig {
    pub fn is_unsupported_term(&self, term: &str) -> bool {
        self.unsupported_terms.iter().any(|t| *t == term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_historical_limits() {
        let config = EditorConfig::default();
        assert_eq!(config.max_line_bytes, 4096);
        assert_eq!(config.max_history_entries, 1024);
        assert_eq!(config.max_kill_slots, 8);
    }

    #[test]
    fn unsupported_terms_gate() {
        let config = EditorConfig::default();
        assert!(config.is_unsupported_term("dumb"));
        assert!(config.is_unsupported_term("cons25"));
        assert!(config.is_unsupported_term("emacs"));
        assert!(!config.is_unsupported_term("xterm-256color"));
    }
}
