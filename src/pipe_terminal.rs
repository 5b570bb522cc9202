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

//! An in-memory [`crate::terminal::Terminal`]: keystrokes come from a byte queue
//! instead of a real fd, and repainted frames land in a `Vec<u8>` instead of a
//! screen. There is no raw mode or signal handling to restore here — a pipe was
//! never in cooked mode to begin with — so [`Terminal::reapply_raw`] and
//! [`Terminal::disable_raw`] keep their no-op defaults.
//!
//! This is what makes [`crate::Editor::read_line_over`] reachable from a plain
//! `#[test]`: feed it the raw bytes a real terminal would have sent, then inspect
//! what the editor wrote back.

use std::collections::VecDeque;

use crate::decoder::ByteSource;
use crate::error::Result;
use crate::terminal::{Terminal, WindowSize};

/// A [`Terminal`] backed by an in-memory input queue and output buffer.
#[derive(Debug, Clone)]
pub struct PipeTerminal {
    input: VecDeque<u8>,
    output: Vec<u8>,
    window: WindowSize,
}

impl PipeTerminal {
    /// A pipe terminal pre-loaded with `input` (the bytes a test wants the editor
    /// loop to read) at the default 24x80 window size.
    pub fn new(input: impl Into<Vec<u8>>) -> Self {
        Self { input: input.into().into(), output: Vec::new(), window: WindowSize::FALLBACK }
    }

    /// Overrides the window size reported to the editor loop.
    pub fn with_window(mut self, rows: u32, cols: u32) -> Self {
        self.window = WindowSize { rows, cols };
        self
    }

    /// Appends more input, for tests that want to feed bytes after the editor has
    /// already consumed some (e.g. simulating a resize mid-edit).
    pub fn push_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied());
    }

    /// Changes the reported window size in place, for tests simulating a resize.
    pub fn set_window(&mut self, rows: u32, cols: u32) {
        self.window = WindowSize { rows, cols };
    }

    /// Everything written to this terminal so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Takes and clears the accumulated output.
    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }
}

impl ByteSource for PipeTerminal {
    fn read_byte(&mut self) -> std::io::Result<Option<u8>> {
        Ok(self.input.pop_front())
    }
}

impl Terminal for PipeTerminal {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.output.extend_from_slice(bytes);
        Ok(())
    }

    fn window_size(&mut self) -> WindowSize {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_back_pushed_input_byte_by_byte() {
        let mut term = PipeTerminal::new(b"hi".to_vec());
        assert_eq!(term.read_byte().unwrap(), Some(b'h'));
        assert_eq!(term.read_byte().unwrap(), Some(b'i'));
        assert_eq!(term.read_byte().unwrap(), None);
    }

    #[test]
    fn write_all_accumulates_into_output() {
        let mut term = PipeTerminal::new(Vec::new());
        Terminal::write_all(&mut term, b"abc").unwrap();
        Terminal::write_all(&mut term, b"def").unwrap();
        assert_eq!(term.output(), b"abcdef");
    }

    #[test]
    fn window_defaults_to_fallback_and_is_overridable() {
        let mut term = PipeTerminal::new(Vec::new());
        assert_eq!(term.window_size(), WindowSize::FALLBACK);
        term.set_window(40, 100);
        assert_eq!(term.window_size(), WindowSize { rows: 40, cols: 100 });
    }

    #[test]
    fn take_output_clears_the_buffer() {
        let mut term = PipeTerminal::new(Vec::new());
        Terminal::write_all(&mut term, b"abc").unwrap();
        assert_eq!(term.take_output(), b"abc");
        assert_eq!(term.output(), b"");
    }
}
