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

//! Screen repaint: recomputes the prompt + buffer + hint layout against the known
//! window size and writes one escape-sequence-laden frame through a single `write`.
//!
//! Everything here builds into an in-memory [`AppendBuffer`] rather than writing
//! directly to the fd, one byte sequence at a time, the way the rest of this
//! codebase tends to shell out to `libc` calls immediately. That's deliberate: a
//! flickering terminal is a partial-write terminal, so every repaint goes out as
//! exactly one `write(2)`, and building it up first is also what makes this module
//! testable without a pty.

use crate::unicode::monospace_width;

/// Accumulates one frame's worth of output before it goes to the terminal in a
/// single write.
#[derive(Debug, Default)]
pub struct AppendBuffer(Vec<u8>);

impl AppendBuffer {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    fn push_str(&mut self, s: &str) {
        self.0.extend_from_slice(s.as_bytes());
    }

    fn push_bytes(&mut self, b: &[u8]) {
        self.0.extend_from_slice(b);
    }

    fn cursor_up(&mut self, n: u32) {
        if n > 0 {
            self.push_str(&format!("\x1b[{n}A"));
        }
    }

    fn carriage_return_clear_line(&mut self) {
        self.push_str("\r\x1b[K");
    }
}

fn width_of(bytes: &[u8]) -> u32 {
    std::str::from_utf8(bytes)
        .unwrap_or("")
        .chars()
        .map(|c| monospace_width(c as u32))
        .sum()
}

/// Everything the refresh needs to know about the line being drawn.
pub struct RefreshInput<'a> {
    pub prompt: &'a str,
    pub buf: &'a [u8],
    pub pos: usize,
    pub cols: u32,
    pub mask_mode: bool,
    pub hint: Option<(Option<&'a str>, String, Option<&'a str>)>,
}

/// Result of a repaint: the frame to write, plus the updated row-tracking state the
/// caller (the `Editor`) must persist for the next refresh.
pub struct RefreshOutput {
    pub frame: AppendBuffer,
    pub max_rows_drawn: u32,
}

/// Repaints the line. `old_pos` and `max_rows_drawn` are the values stored by the
/// previous call (both start at 0 for a fresh prompt).
pub fn refresh_line(input: &RefreshInput<'_>, old_pos: usize, max_rows_drawn: u32) -> RefreshOutput {
    let mut ab = AppendBuffer::new();
    let cols = input.cols.max(1);
    let pwidth = width_of(input.prompt.as_bytes());
    let buf_width = width_of(input.buf);

    let rpos = (pwidth + width_of(&input.buf[..old_pos.min(input.buf.len())]) + cols) / cols;
    let mut rows = (pwidth + buf_width + cols - 1) / cols;
    let mut max_rows_drawn = max_rows_drawn.max(rows);

    if max_rows_drawn > rpos {
        ab.cursor_up(max_rows_drawn - rpos);
    }
    for _ in 0..max_rows_drawn.saturating_sub(1) {
        ab.push_str("\r\x1b[K\x1b[A");
    }
    ab.carriage_return_clear_line();

    ab.push_str(input.prompt);
    if input.mask_mode {
        let n = std::str::from_utf8(input.buf).unwrap_or("").chars().count();
        ab.push_bytes("*".repeat(n).as_bytes());
    } else {
        ab.push_bytes(input.buf);
    }

    if let Some((pre, hint, post)) = &input.hint {
        if let Some(pre) = pre {
            ab.push_str(pre);
        }
        ab.push_str(hint);
        if let Some(post) = post {
            ab.push_str(post);
        }
    }

    let prefix_width = width_of(&input.buf[..input.pos.min(input.buf.len())]);
    if input.pos != 0 && input.pos == input.buf.len() && (pwidth + prefix_width) % cols == 0 {
        ab.push_str("\n\r");
        rows += 1;
        max_rows_drawn = max_rows_drawn.max(rows);
    }

    let rpos2 = (pwidth + prefix_width + cols) / cols;
    if rows > rpos2 {
        ab.cursor_up(rows - rpos2);
    }
    let col = (pwidth + prefix_width) % cols;
    if col != 0 {
        ab.push_str(&format!("\r\x1b[{col}C"));
    } else {
        ab.push_bytes(b"\r");
    }

    RefreshOutput { frame: ab, max_rows_drawn }
}

/// `ESC [ H ESC [ 2 J`: home cursor, clear the whole screen. Used by the
/// clear-screen command before a full refresh.
pub fn clear_screen() -> AppendBuffer {
    let mut ab = AppendBuffer::new();
    ab.push_str("\x1b[H\x1b[2J");
    ab
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn input<'a>(prompt: &'a str, buf: &'a [u8], pos: usize, cols: u32) -> RefreshInput<'a> {
        RefreshInput { prompt, buf, pos, cols, mask_mode: false, hint: None }
    }

    #[test]
    fn short_line_fits_on_one_row() {
        let out = refresh_line(&input("> ", b"hi", 2, 80), 0, 0);
        let frame = std::str::from_utf8(out.frame.as_bytes()).unwrap();
        assert!(frame.contains("> "));
        assert!(frame.contains("hi"));
        assert_eq!(out.max_rows_drawn, 1);
    }

    #[test]
    fn mask_mode_hides_buffer_contents() {
        let out = refresh_line(
            &RefreshInput { mask_mode: true, ..input("> ", b"secret", 6, 80) },
            0,
            0,
        );
        let frame = std::str::from_utf8(out.frame.as_bytes()).unwrap();
        assert!(!frame.contains("secret"));
        assert!(frame.contains("******"));
    }

    #[test]
    fn cursor_lands_mid_line_via_column_escape() {
        let out = refresh_line(&input("> ", b"hello", 2, 80), 0, 0);
        let frame = std::str::from_utf8(out.frame.as_bytes()).unwrap();
        // prompt width 2 + pos 2 = column 4.
        assert!(frame.contains("\x1b[4C"));
    }

    #[test]
    fn hint_text_is_wrapped_in_supplied_ansi() {
        let out = refresh_line(
            &RefreshInput { hint: Some((Some("\x1b[90m"), "hint".into(), Some("\x1b[39m"))), ..input("> ", b"x", 1, 80) },
            0,
            0,
        );
        let frame = std::str::from_utf8(out.frame.as_bytes()).unwrap();
        assert!(frame.contains("\x1b[90mhint\x1b[39m"));
    }

    #[test]
    fn exact_width_end_of_line_forces_wrap() {
        let out = refresh_line(&input("", b"1234567890", 10, 10), 0, 0);
        let frame = std::str::from_utf8(out.frame.as_bytes()).unwrap();
        assert!(frame.contains("\n\r"));
        assert_eq!(out.max_rows_drawn, 2);
    }

    #[test]
    fn clear_screen_emits_home_and_clear() {
        let ab = clear_screen();
        assert_eq!(ab.as_bytes(), b"\x1b[H\x1b[2J");
    }

    #[test]
    fn first_frame_is_exact_bytes_for_a_known_buffer() {
        let out = refresh_line(&input("> ", b"hi", 2, 80), 0, 0);
        let frame = std::str::from_utf8(out.frame.as_bytes()).unwrap();
        assert_eq!(frame, "\r\x1b[K> hi\r\x1b[4C");
    }
}
