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

//! The editor loop: ties the buffer, history, kill ring, decoder and refresh
//! modules together into `read_line`, and owns the raw-mode lifecycle around it.

use std::io::BufRead;
use std::os::unix::io::RawFd;
use std::path::Path;

use crate::buffer::EditBuffer;
use crate::completion::{CompletionSession, Completions};
use crate::config::EditorConfig;
use crate::decoder;
use crate::error::{ReadlineError, Result};
use crate::history::{HistoryStore, SearchState};
use crate::kill_ring::KillRing;
use crate::refresh::{self, RefreshInput};
use crate::terminal::{self, RawTerminal, Terminal};
use crate::unicode;

const fn ctrl(c: u8) -> u8 {
    c ^ 0x40
}

const CTRL_A: u8 = ctrl(b'A');
const CTRL_B: u8 = ctrl(b'B');
const CTRL_D: u8 = ctrl(b'D');
const CTRL_E: u8 = ctrl(b'E');
const CTRL_F: u8 = ctrl(b'F');
const CTRL_G: u8 = ctrl(b'G');
const CTRL_H: u8 = ctrl(b'H');
const CTRL_K: u8 = ctrl(b'K');
const CTRL_L: u8 = ctrl(b'L');
const CTRL_N: u8 = ctrl(b'N');
const CTRL_P: u8 = ctrl(b'P');
const CTRL_R: u8 = ctrl(b'R');
const CTRL_T: u8 = ctrl(b'T');
const CTRL_U: u8 = ctrl(b'U');
const CTRL_W: u8 = ctrl(b'W');
const CTRL_X: u8 = ctrl(b'X');
const CTRL_Y: u8 = ctrl(b'Y');
const DEL: u8 = 0x7f;
const ESC: u8 = 0x1b;

/// A hint line drawn after the cursor, set by the hints callback.
#[derive(Debug, Clone)]
pub struct Hint {
    pub text: String,
    pub ansi_prefix: Option<String>,
    pub ansi_suffix: Option<String>,
}

impl Hint {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ansi_prefix: None, ansi_suffix: None }
    }

    pub fn with_ansi(text: impl Into<String>, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self { text: text.into(), ansi_prefix: Some(prefix.into()), ansi_suffix: Some(suffix.into()) }
    }
}

pub type CompletionCallback = Box<dyn FnMut(&str, &mut Completions)>;
pub type HintsCallback = Box<dyn FnMut(&str) -> Option<Hint>>;
pub type FreeHintsCallback = Box<dyn FnMut(&Hint)>;

/// Outcome of one of the Tab/CTRL-R sub-loops.
enum SubloopResult {
    /// The sub-loop resolved on its own (cancelled); read a fresh keystroke.
    Continue,
    /// The sub-loop's read hit end of input; apply the same EOF handling the main
    /// loop applies to its own reads.
    Eof,
    /// The sub-loop ended on a keystroke that belongs to the main dispatch table.
    Redispatch(Vec<u8>),
}

enum DispatchOutcome {
    Continue,
    Submit,
    Eof,
}

/// A single-threaded, blocking line editor: the state behind one or more
/// [`Editor::read_line`] calls. Not `Sync`; use one per terminal.
///
/// Generic over the terminal it drives: [`RawTerminal`] (the default, used by
/// [`Editor::read_line`] and friends) for real ttys, or
/// [`crate::pipe_terminal::PipeTerminal`] for driving the whole loop from an
/// in-memory byte queue in tests.
pub struct Editor<T: Terminal = RawTerminal> {
    config: EditorConfig,
    buffer: EditBuffer,
    history: HistoryStore,
    kill_ring: KillRing,
    mask_mode: bool,
    completion_callback: Option<CompletionCallback>,
    hints_callback: Option<HintsCallback>,
    free_hints_callback: Option<FreeHintsCallback>,
    active_terminal: Option<T>,
}

impl<T: Terminal> Default for Editor<T> {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl<T: Terminal> Editor<T> {
    pub fn new(config: EditorConfig) -> Self {
        tracing::debug!(
            message = "constructing editor",
            max_line_bytes = config.max_line_bytes,
            max_history_entries = config.max_history_entries,
            max_kill_slots = config.max_kill_slots,
        );
        Self {
            buffer: EditBuffer::new(config.max_line_bytes),
            history: HistoryStore::new(config.max_history_entries),
            kill_ring: KillRing::new(config.max_kill_slots),
            mask_mode: false,
            completion_callback: None,
            hints_callback: None,
            free_hints_callback: None,
            active_terminal: None,
            config,
        }
    }

    pub fn set_completion_callback(&mut self, cb: CompletionCallback) {
        self.completion_callback = Some(cb);
    }

    pub fn set_hints_callback(&mut self, cb: HintsCallback) {
        self.hints_callback = Some(cb);
    }

    /// Registered for interface parity with the C library this crate descends from,
    /// which needs it to free hint strings it allocated on the heap. Rust's hints
    /// are owned `String`s dropped normally, so this is invoked but never required
    /// for correctness; callers that don't need a teardown hook can skip it.
    pub fn set_free_hints_callback(&mut self, cb: FreeHintsCallback) {
        self.free_hints_callback = Some(cb);
    }

    pub fn mask_mode_enable(&mut self) {
        self.mask_mode = true;
    }

    pub fn mask_mode_disable(&mut self) {
        self.mask_mode = false;
    }

    /// Appends `line` to history unless it repeats the newest entry. Returns whether
    /// it was actually added.
    pub fn add_history(&mut self, line: &str) -> bool {
        self.history.add(line)
    }

    pub fn free_history(&mut self) {
        self.history = HistoryStore::new(self.config.max_history_entries);
    }

    pub fn save_history(&self, path: &Path) -> Result<()> {
        self.history.save(path)
    }

    pub fn load_history(&mut self, path: &Path) -> Result<()> {
        self.history.load(path)
    }

    pub fn add_completion(candidates: &mut Completions, candidate: impl Into<String>) {
        candidates.push(candidate);
    }

    /// Home cursor and clear the whole screen of `fd`, independent of any in-flight
    /// `read_line` call.
    pub fn clear_screen(&self, fd: RawFd) -> Result<()> {
        terminal::write_all(fd, refresh::clear_screen().as_bytes())
    }

    /// Ends the raw-mode portion of whichever `read_line_raw` call is in flight. A
    /// no-op if none is (there is no process-wide raw-mode singleton to tear down).
    pub fn disable_raw_mode(&mut self) {
        if let Some(term) = self.active_terminal.as_mut() {
            term.disable_raw();
        }
    }

    /// Drives a full `read_line` over an already-constructed terminal, for embedding
    /// or testing with something other than a real fd (see
    /// [`crate::pipe_terminal::PipeTerminal`]). The terminal is handed back alongside
    /// the result so a test can inspect what was written to it.
    pub fn read_line_over(&mut self, prompt: &str, term: T) -> (Result<Option<String>>, T) {
        self.active_terminal = Some(term);
        let result = self.run_loop(prompt);
        let term = self.active_terminal.take().expect("set immediately above");
        (result, term)
    }

    fn term(&mut self) -> &mut T {
        self.active_terminal.as_mut().expect("run_loop only runs with an active terminal")
    }

    fn run_loop(&mut self, prompt: &str) -> Result<Option<String>> {
        self.buffer.clear();
        self.history.begin_edit();
        let outcome = self.run_loop_inner(prompt);
        self.history.end_edit();
        outcome
    }

    fn run_loop_inner(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut cols = self.term().window_size().cols;
        let mut old_pos = 0usize;
        let mut max_rows_drawn = 0u32;
        let mut hindex = 0usize;
        let mut prev_seq: Vec<u8> = Vec::new();
        let mut last_yank: Option<(usize, usize)> = None;

        self.term().write_all(prompt.as_bytes())?;

        loop {
            self.observe_signals(prompt, &mut cols, &mut old_pos, &mut max_rows_drawn)?;

            let mut seq = match decoder::read_sequence(self.term())? {
                Some(s) => s,
                None => return self.handle_eof(prompt, cols, &mut old_pos, &mut max_rows_drawn),
            };

            if seq[0] == CTRL_R {
                match self.search_loop(&mut hindex, cols, &mut old_pos, &mut max_rows_drawn)? {
                    SubloopResult::Continue => continue,
                    SubloopResult::Eof => return self.handle_eof(prompt, cols, &mut old_pos, &mut max_rows_drawn),
                    SubloopResult::Redispatch(s) => seq = s,
                }
            } else if seq[0] == b'\t' && self.completion_callback.is_some() {
                match self.completion_loop(prompt, cols, &mut old_pos, &mut max_rows_drawn)? {
                    SubloopResult::Continue => continue,
                    SubloopResult::Eof => return self.handle_eof(prompt, cols, &mut old_pos, &mut max_rows_drawn),
                    SubloopResult::Redispatch(s) => seq = s,
                }
            }

            let prev = std::mem::replace(&mut prev_seq, seq.clone());

            match self.dispatch(&seq, &prev, &mut hindex, &mut last_yank)? {
                DispatchOutcome::Continue => {
                    let buf = self.buffer.as_bytes().to_vec();
                    let pos = self.buffer.pos();
                    self.repaint(prompt, &buf, pos, true, cols, &mut old_pos, &mut max_rows_drawn)?;
                }
                DispatchOutcome::Submit => return self.submit(prompt, cols, &mut old_pos, &mut max_rows_drawn),
                DispatchOutcome::Eof => return Ok(None),
            }
        }
    }

    /// Redraws the line. `buf`/`pos` stand in for the real buffer so the completion
    /// and search sub-loops can preview a candidate/match without touching it.
    fn repaint(
        &mut self,
        prompt: &str,
        buf: &[u8],
        pos: usize,
        with_hint: bool,
        cols: u32,
        old_pos: &mut usize,
        max_rows_drawn: &mut u32,
    ) -> Result<()> {
        let hint = if with_hint {
            let text = std::str::from_utf8(buf).unwrap_or("");
            self.hints_callback.as_mut().and_then(|f| f(text))
        } else {
            None
        };
        let hint_tuple = hint.as_ref().map(|h| (h.ansi_prefix.as_deref(), h.text.clone(), h.ansi_suffix.as_deref()));
        let input = RefreshInput { prompt, buf, pos, cols, mask_mode: self.mask_mode, hint: hint_tuple };
        let out = refresh::refresh_line(&input, *old_pos, *max_rows_drawn);
        self.term().write_all(out.frame.as_bytes())?;
        *old_pos = pos;
        *max_rows_drawn = out.max_rows_drawn;
        if let Some(h) = &hint {
            if let Some(f) = self.free_hints_callback.as_mut() {
                f(h);
            }
        }
        Ok(())
    }

    /// Re-applies raw mode after a SIGCONT (a suspend/resume can reset terminal
    /// attributes underneath us) and re-probes the window size after a SIGWINCH,
    /// repainting in both cases.
    fn observe_signals(
        &mut self,
        prompt: &str,
        cols: &mut u32,
        old_pos: &mut usize,
        max_rows_drawn: &mut u32,
    ) -> Result<()> {
        let mut dirty = false;
        if terminal::take_cont() {
            tracing::debug!(message = "observed SIGCONT, reapplying raw mode");
            self.term().reapply_raw()?;
            dirty = true;
        }
        if terminal::take_winch() {
            *cols = self.term().window_size().cols;
            tracing::debug!(message = "observed SIGWINCH", cols = *cols);
            dirty = true;
        }
        if dirty {
            let buf = self.buffer.as_bytes().to_vec();
            let pos = self.buffer.pos();
            self.repaint(prompt, &buf, pos, true, *cols, old_pos, max_rows_drawn)?;
        }
        Ok(())
    }

    fn submit(&mut self, prompt: &str, cols: u32, old_pos: &mut usize, max_rows_drawn: &mut u32) -> Result<Option<String>> {
        self.buffer.move_end();
        if self.hints_callback.is_some() {
            let buf = self.buffer.as_bytes().to_vec();
            let pos = self.buffer.pos();
            self.repaint(prompt, &buf, pos, false, cols, old_pos, max_rows_drawn)?;
        }
        Ok(Some(self.buffer.as_str().to_string()))
    }

    fn handle_eof(&mut self, prompt: &str, cols: u32, old_pos: &mut usize, max_rows_drawn: &mut u32) -> Result<Option<String>> {
        if self.buffer.is_empty() {
            Ok(None)
        } else {
            self.submit(prompt, cols, old_pos, max_rows_drawn)
        }
    }

    // --- History navigation --------------------------------------------------

    fn history_goto(&mut self, target: usize, hindex: &mut usize) {
        if self.history.len() <= 1 {
            return;
        }
        let target = target.min(self.history.len() - 1);
        let current_slot = self.history.slot_for_hindex(*hindex);
        let current_text = self.buffer.as_str().to_string();
        self.history.set(current_slot, &current_text);
        *hindex = target;
        let slot = self.history.slot_for_hindex(*hindex);
        let line = self.history.get(slot).unwrap_or("").to_string();
        self.buffer.replace(&line);
    }

    fn history_move(&mut self, hindex: &mut usize, dx: i64) {
        let target = (*hindex as i64 + dx).max(0) as usize;
        self.history_goto(target, hindex);
    }

    // --- CTRL-R incremental reverse search ------------------------------------

    fn search_loop(
        &mut self,
        hindex: &mut usize,
        cols: u32,
        old_pos: &mut usize,
        max_rows_drawn: &mut u32,
    ) -> Result<SubloopResult> {
        let entry = self.history.slot_for_hindex(*hindex);
        let Some(mut search) = SearchState::start(&self.history, entry, self.buffer.pos()) else {
            return Ok(SubloopResult::Continue);
        };

        loop {
            let search_prompt = search.prompt();
            let buf = self.history.get(search.entry).unwrap_or("").as_bytes().to_vec();
            let pos = search.match_start.min(buf.len());
            self.repaint(&search_prompt, &buf, pos, false, cols, old_pos, max_rows_drawn)?;

            let seq = match decoder::read_sequence(self.term())? {
                Some(s) => s,
                None => return Ok(SubloopResult::Eof),
            };

            match seq[0] {
                DEL | CTRL_H => search.backspace(),
                CTRL_R => search.step_older(&self.history),
                CTRL_G => {
                    let (entry, pos) = search.cancel();
                    self.jump_to_history_entry(entry, pos, hindex);
                    return Ok(SubloopResult::Continue);
                }
                b if unicode::is_control(b as u32) => {
                    let (entry, pos) = (search.entry, search.match_start);
                    self.jump_to_history_entry(entry, pos, hindex);
                    return Ok(SubloopResult::Redispatch(seq));
                }
                _ => {
                    for byte in &seq {
                        search.push_byte(*byte, &self.history);
                    }
                }
            }
        }
    }

    /// Loads `entry`'s text into the buffer at `pos` and sets `hindex` to match —
    /// used to land a search (accepted or cancelled) back in the main loop. No
    /// stash is needed: search only ever copies already-stored history text into
    /// the buffer, it never introduces new content to preserve.
    fn jump_to_history_entry(&mut self, entry: usize, pos: usize, hindex: &mut usize) {
        let line = self.history.get(entry).unwrap_or("").to_string();
        self.buffer.replace(&line);
        self.buffer.set_pos(pos);
        *hindex = self.history.len().saturating_sub(1).saturating_sub(entry);
    }

    // --- Tab completion --------------------------------------------------------

    fn completion_loop(
        &mut self,
        prompt: &str,
        cols: u32,
        old_pos: &mut usize,
        max_rows_drawn: &mut u32,
    ) -> Result<SubloopResult> {
        let current = self.buffer.as_str().to_string();
        let mut candidates = Completions::default();
        if let Some(cb) = self.completion_callback.as_mut() {
            cb(&current, &mut candidates);
        }
        let Some(mut session) = CompletionSession::new(candidates) else {
            self.term().write_all(b"\x07")?;
            return Ok(SubloopResult::Continue);
        };

        loop {
            let (buf, pos): (Vec<u8>, usize) = match session.display() {
                Some(cand) => (cand.as_bytes().to_vec(), cand.len()),
                None => (self.buffer.as_bytes().to_vec(), self.buffer.pos()),
            };
            self.repaint(prompt, &buf, pos, true, cols, old_pos, max_rows_drawn)?;

            let seq = match decoder::read_sequence(self.term())? {
                Some(s) => s,
                None => return Ok(SubloopResult::Eof),
            };

            if seq[0] == b'\t' {
                if session.advance() {
                    self.term().write_all(b"\x07")?;
                }
                continue;
            }

            if let Some(candidate) = session.commit() {
                self.buffer.replace(candidate);
            }
            return Ok(SubloopResult::Redispatch(seq));
        }
    }

    // --- Main dispatch table ----------------------------------------------------

    fn dispatch(&mut self, seq: &[u8], prev: &[u8], hindex: &mut usize, last_yank: &mut Option<(usize, usize)>) -> Result<DispatchOutcome> {
        if seq[0] < 0x20 || seq[0] == DEL {
            tracing::trace!(message = "dispatch control byte", byte = format!("{:#04x}", seq[0]));
        }
        match seq[0] {
            b'\r' => return Ok(DispatchOutcome::Submit),
            CTRL_D => {
                if self.buffer.is_empty() {
                    return Ok(DispatchOutcome::Eof);
                }
                self.buffer.delete_forward();
            }
            CTRL_A => self.buffer.move_home(),
            CTRL_E => self.buffer.move_end(),
            CTRL_B => self.buffer.move_left(),
            CTRL_F => self.buffer.move_right(),
            CTRL_P => self.history_move(hindex, 1),
            CTRL_N => self.history_move(hindex, -1),
            0x00 => self.buffer.set_mark(),
            CTRL_X => {
                if prev.first() == Some(&CTRL_X) {
                    self.buffer.goto_mark();
                }
            }
            CTRL_L => {
                self.term().write_all(refresh::clear_screen().as_bytes())?;
            }
            CTRL_U => {
                let bytes = self.buffer.kill_left();
                self.kill_ring.push(&bytes);
            }
            CTRL_K => {
                let bytes = self.buffer.kill_right();
                self.kill_ring.push(&bytes);
            }
            CTRL_W => {
                let bytes = self.buffer.delete_word_backward();
                self.kill_ring.push(&bytes);
            }
            CTRL_T => self.buffer.transpose(),
            CTRL_Y => self.do_yank(last_yank),
            DEL | CTRL_H => {
                self.buffer.delete_backward();
            }
            ESC => self.dispatch_escape(seq, prev, hindex, last_yank)?,
            b if !unicode::is_control(b as u32) => {
                self.buffer.insert(seq);
            }
            _ => {}
        }
        Ok(DispatchOutcome::Continue)
    }

    fn dispatch_escape(&mut self, seq: &[u8], prev: &[u8], hindex: &mut usize, last_yank: &mut Option<(usize, usize)>) -> Result<()> {
        tracing::trace!(message = "dispatch escape sequence", seq = ?seq);
        let Some(&second) = seq.get(1) else { return Ok(()) };
        match second {
            b'<' => self.history_goto(usize::MAX, hindex),
            b'>' => self.history_goto(0, hindex),
            b'y' => self.do_rotate(prev, last_yank),
            b'\\' => self.buffer.squeeze(),
            b'b' => self.buffer.move_left_word(),
            b'f' => self.buffer.move_right_word(),
            b'h' | CTRL_H => {
                let bytes = self.buffer.delete_word_backward();
                self.kill_ring.push(&bytes);
            }
            b'd' => {
                let bytes = self.buffer.delete_word_forward();
                self.kill_ring.push(&bytes);
            }
            b'l' => self.buffer.xlat_word(unicode::to_lower),
            b'u' => self.buffer.xlat_word(unicode::to_upper),
            b'c' => {
                let mut first = true;
                self.buffer.xlat_word(move |c| unicode::capitalize(c, &mut first));
            }
            b't' => self.buffer.transpose_words(),
            b'[' => self.dispatch_csi(seq, hindex),
            b'O' => match seq.get(2) {
                Some(b'H') => self.buffer.move_home(),
                Some(b'F') => self.buffer.move_end(),
                _ => {}
            },
            _ => {}
        }
        Ok(())
    }

    fn dispatch_csi(&mut self, seq: &[u8], hindex: &mut usize) {
        let Some(&third) = seq.get(2) else { return };
        if third.is_ascii_digit() {
            if seq.get(3) == Some(&b'~') {
                match third {
                    b'1' => self.buffer.move_home(),
                    b'3' => {
                        self.buffer.delete_forward();
                    }
                    b'4' => self.buffer.move_end(),
                    _ => {}
                }
            }
            return;
        }
        match third {
            b'A' => self.history_move(hindex, 1),
            b'B' => self.history_move(hindex, -1),
            b'C' => self.buffer.move_right(),
            b'D' => self.buffer.move_left(),
            b'H' => self.buffer.move_home(),
            b'F' => self.buffer.move_end(),
            _ => {}
        }
    }

    fn do_yank(&mut self, last_yank: &mut Option<(usize, usize)>) {
        if let Some(text) = self.kill_ring.current() {
            let text = text.to_vec();
            if let Some(span) = self.buffer.yank(&text) {
                *last_yank = Some(span);
            }
        }
    }

    fn do_rotate(&mut self, prev: &[u8], last_yank: &mut Option<(usize, usize)>) {
        let was_yank = prev.first() == Some(&CTRL_Y) || (prev.first() == Some(&ESC) && prev.get(1) == Some(&b'y'));
        if !was_yank {
            return;
        }
        if let Some((start, end)) = last_yank.take() {
            self.buffer.undo_yank(start, end);
        }
        self.kill_ring.rotate();
        self.do_yank(last_yank);
    }
}

impl Editor<RawTerminal> {
    /// Reads one line, choosing the raw-mode editor when `infd` is a terminal the
    /// config doesn't blacklist, and a plain buffered read otherwise.
    pub fn read_line(&mut self, prompt: &str, infd: RawFd, outfd: RawFd) -> Result<Option<String>> {
        let term_is_tty = unsafe { libc::isatty(infd) } == 1;
        let term_name = std::env::var("TERM").unwrap_or_default();
        if term_is_tty && !self.config.is_unsupported_term(&term_name) {
            self.read_line_raw(prompt, infd, outfd)
        } else {
            self.read_line_cooked(prompt, outfd)
        }
    }

    /// Reads one line with full raw-mode emacs-style editing. Returns `Ok(None)` at
    /// end of input with an empty buffer; otherwise the submitted line (possibly
    /// empty).
    pub fn read_line_raw(&mut self, prompt: &str, infd: RawFd, outfd: RawFd) -> Result<Option<String>> {
        let mut term = RawTerminal::new(infd, outfd);
        term.enable_raw()?;
        self.active_terminal = Some(term);

        let result = terminal::guard_terminating_signals(|| self.run_loop(prompt));

        if let Some(mut term) = self.active_terminal.take() {
            term.disable_raw();
        }

        match result {
            Err(ReadlineError::Signal(sig)) => {
                unsafe { libc::raise(sig) };
                Err(ReadlineError::Signal(sig))
            }
            other => other,
        }
    }

    /// Plain, unedited line read for non-terminal input (pipes, unsupported `TERM`):
    /// no history, no key bindings, just a line of bytes read from the process's
    /// standard input regardless of `outfd` (which only receives the prompt) —
    /// there is no raw fd to read arbitrarily from once canonical mode is in play.
    pub fn read_line_cooked(&mut self, prompt: &str, outfd: RawFd) -> Result<Option<String>> {
        terminal::write_all(outfd, prompt.as_bytes())?;
        let mut line = String::new();
        let stdin = std::io::stdin();
        let n = stdin.lock().read_line(&mut line).map_err(ReadlineError::Io)?;
        if n == 0 {
            return Ok(None);
        }
        while line.ends_with(['\n', '\r']) {
            line.pop();
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::ByteSource;
    use crate::pipe_terminal::PipeTerminal;

    struct SliceSource<'a> {
        bytes: std::slice::Iter<'a, u8>,
    }

    impl<'a> SliceSource<'a> {
        fn new(bytes: &'a [u8]) -> Self {
            Self { bytes: bytes.iter() }
        }
    }

    impl ByteSource for SliceSource<'_> {
        fn read_byte(&mut self) -> std::io::Result<Option<u8>> {
            Ok(self.bytes.next().copied())
        }
    }

    fn read_all(bytes: &[u8]) -> Vec<Vec<u8>> {
        let mut source = SliceSource::new(bytes);
        let mut out = Vec::new();
        while let Some(seq) = decoder::read_sequence(&mut source).unwrap() {
            out.push(seq);
        }
        out
    }

    #[test]
    fn typed_word_then_enter_dispatches_insert_then_submit() {
        let mut editor = Editor::default();
        let mut hindex = 0usize;
        let mut last_yank = None;
        let mut prev = Vec::new();
        for seq in read_all(b"hi") {
            let p = std::mem::replace(&mut prev, seq.clone());
            let outcome = editor.dispatch(&seq, &p, &mut hindex, &mut last_yank).unwrap();
            assert!(matches!(outcome, DispatchOutcome::Continue));
        }
        assert_eq!(editor.buffer.as_str(), "hi");

        let seq = read_all(b"\r").remove(0);
        let outcome = editor.dispatch(&seq, &prev, &mut hindex, &mut last_yank).unwrap();
        assert!(matches!(outcome, DispatchOutcome::Submit));
    }

    #[test]
    fn ctrl_d_on_empty_buffer_is_eof() {
        let mut editor = Editor::default();
        let mut hindex = 0usize;
        let mut last_yank = None;
        let outcome = editor.dispatch(&[CTRL_D], &[], &mut hindex, &mut last_yank).unwrap();
        assert!(matches!(outcome, DispatchOutcome::Eof));
    }

    #[test]
    fn ctrl_d_on_nonempty_buffer_deletes_forward() {
        let mut editor = Editor::default();
        editor.buffer.insert(b"abc");
        editor.buffer.move_home();
        let mut hindex = 0usize;
        let mut last_yank = None;
        editor.dispatch(&[CTRL_D], &[], &mut hindex, &mut last_yank).unwrap();
        assert_eq!(editor.buffer.as_str(), "bc");
    }

    #[test]
    fn ctrl_u_kills_to_kill_ring_and_ctrl_y_yanks_it_back() {
        let mut editor = Editor::default();
        editor.buffer.insert(b"hello world");
        editor.buffer.set_pos(5);
        let mut hindex = 0usize;
        let mut last_yank = None;
        editor.dispatch(&[CTRL_U], &[], &mut hindex, &mut last_yank).unwrap();
        assert_eq!(editor.buffer.as_str(), " world");
        editor.dispatch(&[CTRL_Y], &[], &mut hindex, &mut last_yank).unwrap();
        assert_eq!(editor.buffer.as_str(), "hello world");
    }

    #[test]
    fn ctrl_x_ctrl_x_goes_to_mark_only_as_a_chord() {
        let mut editor = Editor::default();
        editor.buffer.insert(b"hello");
        editor.buffer.set_pos(2);
        editor.buffer.set_mark();
        editor.buffer.move_end();
        let mut hindex = 0usize;
        let mut last_yank = None;
        // A lone CTRL-X (no preceding CTRL-X) does nothing.
        editor.dispatch(&[CTRL_X], &[b'a'], &mut hindex, &mut last_yank).unwrap();
        assert_eq!(editor.buffer.pos(), 5);
        // CTRL-X CTRL-X jumps to the mark.
        editor.dispatch(&[CTRL_X], &[CTRL_X], &mut hindex, &mut last_yank).unwrap();
        assert_eq!(editor.buffer.pos(), 2);
    }

    #[test]
    fn history_move_up_then_down_restores_in_progress_edit() {
        let mut editor = Editor::default();
        editor.add_history("first");
        editor.history.begin_edit();
        editor.buffer.insert(b"typing");
        let mut hindex = 0usize;
        editor.history_move(&mut hindex, 1);
        assert_eq!(editor.buffer.as_str(), "first");
        editor.history_move(&mut hindex, -1);
        assert_eq!(editor.buffer.as_str(), "typing");
    }

    #[test]
    fn non_control_byte_inserts_literally() {
        let mut editor = Editor::default();
        let mut hindex = 0usize;
        let mut last_yank = None;
        editor.dispatch(b"x", &[], &mut hindex, &mut last_yank).unwrap();
        assert_eq!(editor.buffer.as_str(), "x");
    }

    #[test]
    fn meta_u_uppercases_word() {
        let mut editor = Editor::default();
        editor.buffer.insert(b"hello world");
        editor.buffer.move_home();
        let mut hindex = 0usize;
        let mut last_yank = None;
        editor.dispatch(&[ESC, b'u'], &[], &mut hindex, &mut last_yank).unwrap();
        assert_eq!(editor.buffer.as_str(), "HELLO world");
    }

    #[test]
    fn completion_session_commits_candidate_into_buffer() {
        let mut session =
            CompletionSession::new({ let mut c = Completions::default(); c.push("foobar"); c }).unwrap();
        assert_eq!(session.display(), Some("foobar"));
        assert_eq!(session.commit(), Some("foobar"));
    }

    // --- End-to-end, driven over PipeTerminal instead of a real fd ----------------

    #[test]
    fn plain_line_submits_over_a_pipe_terminal() {
        let mut editor: Editor<PipeTerminal> = Editor::default();
        let term = PipeTerminal::new(*b"hello\r");
        let (result, term) = editor.read_line_over("> ", term);
        assert_eq!(result.unwrap(), Some("hello".to_string()));
        assert!(term.output().starts_with(b"> "));
    }

    #[test]
    fn utf8_rubout_deletes_the_whole_code_point() {
        let mut editor: Editor<PipeTerminal> = Editor::default();
        // "caf" + U+00E9 (0xC3 0xA9) + rubout + Enter.
        let mut input = b"caf\xc3\xa9".to_vec();
        input.push(DEL);
        input.push(b'\r');
        let term = PipeTerminal::new(input);
        let (result, _term) = editor.read_line_over("> ", term);
        assert_eq!(result.unwrap(), Some("caf".to_string()));
    }

    #[test]
    fn kill_yank_then_meta_y_rotates_to_the_older_kill() {
        let mut editor: Editor<PipeTerminal> = Editor::default();
        let mut input = b"one two".to_vec();
        input.push(CTRL_U); // kills "one two" into the ring.
        input.extend_from_slice(b"three");
        input.push(CTRL_U); // kills "three"; ring now [.., "one two", "three"].
        input.push(CTRL_Y); // yanks "three" back in.
        input.push(ESC);
        input.push(b'y'); // Meta-y: undoes that yank, rotates, yanks "one two".
        input.push(b'\r');
        let term = PipeTerminal::new(input);
        let (result, _term) = editor.read_line_over("> ", term);
        assert_eq!(result.unwrap(), Some("one two".to_string()));
    }

    #[test]
    fn ctrl_r_reverse_search_finds_a_prefix_and_submits_it() {
        let mut editor: Editor<PipeTerminal> = Editor::default();
        editor.add_history("hello");
        let mut input = vec![CTRL_R];
        input.extend_from_slice(b"hel");
        input.push(b'\r');
        let term = PipeTerminal::new(input);
        let (result, _term) = editor.read_line_over("> ", term);
        assert_eq!(result.unwrap(), Some("hello".to_string()));
    }

    #[test]
    fn sigwinch_updates_cols_and_triggers_a_repaint() {
        let mut editor: Editor<PipeTerminal> = Editor::default();
        editor.buffer.insert(b"hi");
        editor.active_terminal = Some(PipeTerminal::new(Vec::new()).with_window(24, 80));
        let mut cols = 80u32;
        let mut old_pos = 0usize;
        let mut max_rows_drawn = 0u32;

        terminal::force_winch();
        editor.term().set_window(24, 5);
        editor.observe_signals("> ", &mut cols, &mut old_pos, &mut max_rows_drawn).unwrap();

        assert_eq!(cols, 5);
        let term = editor.active_terminal.take().unwrap();
        assert!(!term.output().is_empty());
    }
}

/// This works with the binary under test, `readline_echo_bin`. Non-tty stdin (what
/// `assert_cmd` pipes in) routes `Editor::read_line` through `read_line_cooked`, so
/// this exercises the process boundary of `read_line` plus history persistence that
/// no in-process test can reach.
///
/// See: `src/bin/readline_echo_bin.rs`.
#[cfg(test)]
mod process_level {
    use assert_cmd::Command;
    use tempfile::tempdir;

    #[test]
    fn echoes_each_line_back_with_a_prefix() {
        let output = Command::cargo_bin("readline_echo_bin")
            .unwrap()
            .write_stdin("hello\nworld\n")
            .ok()
            .unwrap();

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout, "echo: hello\necho: world\n");
    }

    #[test]
    fn history_written_on_eof_is_loaded_back_on_next_run() {
        let dir = tempdir().unwrap();
        let history_path = dir.path().join("history.txt");

        Command::cargo_bin("readline_echo_bin")
            .unwrap()
            .arg(&history_path)
            .write_stdin("first line\nsecond line\n")
            .ok()
            .unwrap();

        let saved = std::fs::read_to_string(&history_path).unwrap();
        assert!(saved.contains("first line"));
        assert!(saved.contains("second line"));

        let output = Command::cargo_bin("readline_echo_bin")
            .unwrap()
            .arg(&history_path)
            .write_stdin("third line\n")
            .ok()
            .unwrap();
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout, "echo: third line\n");
    }
}
