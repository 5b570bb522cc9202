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

//! Persistent line history and incremental reverse search.

use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{ReadlineError, Result};

/// A bounded FIFO of previously entered lines, plus the cursor (`index`) over which
/// entry is currently being viewed while the user recalls history with the arrow
/// keys. Entry `len() - 1` is always the newest.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: Vec<String>,
    capacity: usize,
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self { entries: Vec::new(), capacity: capacity.max(1) }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&str> {
        self.entries.get(i).map(String::as_str)
    }

    /// Appends `line` unless it repeats the current newest entry. Evicts the oldest
    /// entry once at capacity. Returns whether the line was actually retained.
    pub fn add(&mut self, line: &str) -> bool {
        if self.entries.last().map(String::as_str) == Some(line) {
            return false;
        }
        if self.entries.len() == self.capacity {
            self.entries.remove(0);
        }
        self.entries.push(line.to_string());
        true
    }

    /// Overwrites the entry at `index` in place, used to stash the in-progress edit
    /// buffer before navigating away from it during history recall.
    pub fn set(&mut self, index: usize, line: &str) {
        if let Some(slot) = self.entries.get_mut(index) {
            *slot = line.to_string();
        }
    }

    /// Appends the synthetic "currently editing" slot a `read_line` call recalls
    /// into and stashes the in-progress buffer against while the user browses older
    /// entries. Unlike [`HistoryStore::add`] this never deduplicates: the slot must
    /// exist even if the newest real entry is also empty.
    pub fn begin_edit(&mut self) {
        if self.entries.len() == self.capacity {
            self.entries.remove(0);
        }
        self.entries.push(String::new());
    }

    /// Removes the synthetic editing slot [`HistoryStore::begin_edit`] pushed, once
    /// the `read_line` call that owns it returns (submitted or not).
    pub fn end_edit(&mut self) {
        self.entries.pop();
    }

    /// Index of the slot the `hindex` convention (0 = the entry currently shown,
    /// increasing = older) refers to, into the raw 0-is-oldest entry array.
    pub fn slot_for_hindex(&self, hindex: usize) -> usize {
        self.entries.len() - 1 - hindex.min(self.entries.len().saturating_sub(1))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path).map_err(ReadlineError::HistoryIo)?;
        for line in &self.entries {
            writeln!(file, "{line}").map_err(ReadlineError::HistoryIo)?;
        }
        Ok(())
    }

    /// Loads history from `path`, replacing the current contents. A missing file is
    /// treated as an empty history, not an error.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let file = match std::fs::File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                self.entries.clear();
                return Ok(());
            }
            Err(e) => return Err(ReadlineError::HistoryIo(e)),
        };
        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(ReadlineError::HistoryIo)?;
            entries.push(line);
        }
        if entries.len() > self.capacity {
            let drop = entries.len() - self.capacity;
            entries.drain(0..drop);
        }
        self.entries = entries;
        Ok(())
    }
}

/// State of an in-progress `CTRL-R` incremental reverse search.
pub struct SearchState {
    query: String,
    /// Entry index (0 = oldest) currently displayed.
    pub entry: usize,
    /// Byte offset into that entry's text where the match starts.
    pub match_start: usize,
    pub failed: bool,
    saved_entry: usize,
    saved_pos: usize,
}

impl SearchState {
    pub fn start(history: &HistoryStore, current_entry: usize, current_pos: usize) -> Option<Self> {
        if history.len() <= 1 {
            return None;
        }
        Some(Self {
            query: String::new(),
            entry: current_entry,
            match_start: current_pos,
            failed: false,
            saved_entry: current_entry,
            saved_pos: current_pos,
        })
    }

    pub fn prompt(&self) -> String {
        let (before, after) = self.query.split_at(self.match_start.min(self.query.len()));
        let prefix = if self.failed { "(failed reverse-i-search `" } else { "(reverse-i-search `" };
        format!("{prefix}{before}\x1b[4m{after}\x1b[24m') ")
    }

    /// Handles backspace: shortens the query by one byte.
    pub fn backspace(&mut self) {
        self.query.pop();
        self.match_start = self.match_start.min(self.query.len());
    }

    /// Handles another `CTRL-R`: step the scan anchor back, or move to an older
    /// entry and restart the anchor from its end.
    pub fn step_older(&mut self, history: &HistoryStore) {
        if self.match_start > 0 {
            self.match_start -= 1;
        } else if self.entry > 0 {
            self.entry -= 1;
            self.match_start = history.get(self.entry).map_or(0, str::len);
        }
    }

    /// Appends a literal byte of query text and re-scans from the current anchor.
    pub fn push_byte(&mut self, byte: u8, history: &HistoryStore) {
        self.query.push(byte as char);
        self.rescan(history);
    }

    fn rescan(&mut self, history: &HistoryStore) {
        self.failed = true;
        let mut entry = self.entry;
        loop {
            let Some(text) = history.get(entry) else { break };
            let anchor = (self.match_start + self.query.len()).min(text.len());
            if let Some(pos) = rfind_within(text, &self.query, anchor) {
                self.entry = entry;
                self.match_start = pos;
                self.failed = false;
                break;
            }
            if entry == 0 {
                break;
            }
            entry -= 1;
        }
    }

    pub fn cancel(&self) -> (usize, usize) {
        (self.saved_entry, self.saved_pos)
    }
}

/// Finds the last occurrence of `needle` in `text[..anchor]` (or in the whole of
/// `text` if `anchor > text.len()`), byte-wise.
fn rfind_within(text: &str, needle: &str, anchor: usize) -> Option<usize> {
    if needle.is_empty() {
        return Some(anchor.min(text.len()));
    }
    let haystack = &text.as_bytes()[..anchor.min(text.len())];
    haystack
        .windows(needle.len())
        .rposition(|w| w == needle.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn add_deduplicates_adjacent_repeats() {
        let mut h = HistoryStore::new(8);
        h.add("ls");
        h.add("ls");
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn add_evicts_oldest_at_capacity() {
        let mut h = HistoryStore::new(2);
        h.add("a");
        h.add("b");
        h.add("c");
        assert_eq!(h.len(), 2);
        assert_eq!(h.get(0), Some("b"));
        assert_eq!(h.get(1), Some("c"));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let mut h = HistoryStore::new(8);
        h.add("alpha");
        h.add("beta");
        let file = NamedTempFile::new().unwrap();
        h.save(file.path()).unwrap();

        let mut loaded = HistoryStore::new(8);
        loaded.load(file.path()).unwrap();
        assert_eq!(loaded.get(0), Some("alpha"));
        assert_eq!(loaded.get(1), Some("beta"));
    }

    #[test]
    fn load_missing_file_is_empty_not_error() {
        let mut h = HistoryStore::new(8);
        h.add("stale");
        h.load(Path::new("/nonexistent/path/to/history")).unwrap();
        assert!(h.is_empty());
    }

    #[test]
    fn search_finds_last_match_and_fails_gracefully() {
        let mut h = HistoryStore::new(8);
        h.add("alpha");
        h.add("beta");
        h.add("gamma");
        let mut s = SearchState::start(&h, 2, 5).unwrap();
        s.push_byte(b'b', &h);
        assert!(!s.failed);
        assert_eq!(h.get(s.entry), Some("beta"));
        s.push_byte(b'e', &h);
        assert!(!s.failed);
        s.push_byte(b'z', &h);
        assert!(s.failed);
    }

    #[test]
    fn single_entry_history_has_no_search() {
        let mut h = HistoryStore::new(8);
        h.add("only");
        assert!(SearchState::start(&h, 0, 0).is_none());
    }

    #[test]
    fn cancel_returns_saved_position() {
        let mut h = HistoryStore::new(8);
        h.add("alpha");
        h.add("beta");
        let s = SearchState::start(&h, 1, 3).unwrap();
        assert_eq!(s.cancel(), (1, 3));
    }

    #[test]
    fn begin_and_end_edit_bracket_a_synthetic_slot() {
        let mut h = HistoryStore::new(8);
        h.add("alpha");
        h.begin_edit();
        assert_eq!(h.len(), 2);
        assert_eq!(h.get(1), Some(""));
        h.end_edit();
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn slot_for_hindex_counts_back_from_newest() {
        let mut h = HistoryStore::new(8);
        h.add("alpha");
        h.add("beta");
        h.add("gamma");
        assert_eq!(h.slot_for_hindex(0), 2);
        assert_eq!(h.slot_for_hindex(1), 1);
        assert_eq!(h.slot_for_hindex(2), 0);
    }
}
