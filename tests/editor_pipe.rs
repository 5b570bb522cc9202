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

//! End-to-end coverage driven entirely through the public API, over
//! [`PipeTerminal`] instead of a real fd: each scenario feeds the exact bytes a
//! terminal would have sent for a keystroke sequence and inspects the line
//! `read_line_over` returns (and, where relevant, what was written back).

use r3bl_readline::{Editor, PipeTerminal};

const ESC: u8 = 0x1b;
const CTRL_R: u8 = 0x12;
const CTRL_U: u8 = 0x15;
const CTRL_Y: u8 = 0x19;
const DEL: u8 = 0x7f;

#[test]
fn plain_line() {
    let mut editor = Editor::<PipeTerminal>::default();
    let term = PipeTerminal::new(*b"hello world\r");

    let (result, term) = editor.read_line_over("> ", term);

    assert_eq!(result.unwrap(), Some("hello world".to_string()));
    assert!(term.output().starts_with(b"> "));
}

#[test]
fn utf8_rubout_removes_one_whole_code_point() {
    let mut editor = Editor::<PipeTerminal>::default();
    // "na" + U+00EF (ï, 0xC3 0xAF) + rubout + Enter.
    let mut input = b"na\xc3\xaf".to_vec();
    input.push(DEL);
    input.push(b'\r');
    let term = PipeTerminal::new(input);

    let (result, _term) = editor.read_line_over("> ", term);

    assert_eq!(result.unwrap(), Some("na".to_string()));
}

#[test]
fn kill_then_yank_restores_the_killed_text() {
    let mut editor = Editor::<PipeTerminal>::default();
    let mut input = b"delete me".to_vec();
    input.push(CTRL_U); // kill the whole line into the kill ring.
    input.push(CTRL_Y); // yank it straight back.
    input.push(b'\r');
    let term = PipeTerminal::new(input);

    let (result, _term) = editor.read_line_over("> ", term);

    assert_eq!(result.unwrap(), Some("delete me".to_string()));
}

#[test]
fn meta_y_rotates_to_an_older_kill_after_a_yank() {
    let mut editor = Editor::<PipeTerminal>::default();
    let mut input = b"first kill".to_vec();
    input.push(CTRL_U);
    input.extend_from_slice(b"second kill");
    input.push(CTRL_U);
    input.push(CTRL_Y); // yanks "second kill".
    input.push(ESC);
    input.push(b'y'); // Meta-y: rotate back to "first kill" and re-yank.
    input.push(b'\r');
    let term = PipeTerminal::new(input);

    let (result, _term) = editor.read_line_over("> ", term);

    assert_eq!(result.unwrap(), Some("first kill".to_string()));
}

#[test]
fn ctrl_r_reverse_search_recalls_a_prior_line() {
    let mut editor = Editor::<PipeTerminal>::default();
    editor.add_history("git commit");
    let mut input = vec![CTRL_R];
    input.extend_from_slice(b"git");
    input.push(b'\r');
    let term = PipeTerminal::new(input);

    let (result, _term) = editor.read_line_over("> ", term);

    assert_eq!(result.unwrap(), Some("git commit".to_string()));
}

#[test]
fn custom_window_size_is_honored_for_a_short_line() {
    let mut editor = Editor::<PipeTerminal>::default();
    let term = PipeTerminal::new(*b"hi\r").with_window(24, 120);

    let (result, term) = editor.read_line_over("> ", term);

    assert_eq!(result.unwrap(), Some("hi".to_string()));
    assert!(term.output().windows(2).any(|w| w == b"hi"));
}

#[test]
fn eof_on_an_empty_buffer_returns_none() {
    let mut editor = Editor::<PipeTerminal>::default();
    let term = PipeTerminal::new(Vec::new());

    let (result, _term) = editor.read_line_over("> ", term);

    assert_eq!(result.unwrap(), None);
}
