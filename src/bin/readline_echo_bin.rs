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

//! Binary under test for the `assert_cmd`-driven process-level tests in
//! `editor.rs`. Takes one optional argument, a history file path; reads lines
//! from stdin with [`r3bl_readline::Editor::read_line`] and echoes each one back
//! to stdout, loading history from the path on start and saving it on EOF.
//!
//! There is no easy way to exercise the non-tty fallback path and history
//! persistence together without spawning a real process, so this is the binary
//! `assert_cmd` spawns.

use std::path::PathBuf;

use r3bl_readline::Editor;

fn main() {
    let history_path = std::env::args().nth(1).map(PathBuf::from);

    let mut editor = Editor::default();
    if let Some(path) = &history_path {
        editor.load_history(path).ok();
    }

    // Empty prompt: read_line_cooked still writes it unconditionally, and a
    // non-empty one would interleave with the `echo: ...` lines below on stdout.
    while let Some(line) = editor.read_line("", 0, 1).expect("read_line") {
        println!("echo: {line}");
        editor.add_history(&line);
    }

    if let Some(path) = &history_path {
        editor.save_history(path).expect("save history");
    }
}
