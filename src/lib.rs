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

//! `r3bl_readline` is a blocking, single-threaded line-editing library for building
//! interactive command-line prompts, in the spirit of `linenoise`/`bestline`.
//!
//! # What this crate does
//!
//! [`Editor::read_line`] puts the terminal into raw mode and runs an emacs-style
//! editing loop over a single line of UTF-8 input:
//!
//! - Cursor motion by character and by word, home/end, arrow keys.
//! - Kill ring: `Ctrl-U`/`Ctrl-K`/`Ctrl-W`/`Meta-d`/`Meta-h` kill text into a ring,
//!   `Ctrl-Y` yanks it back, `Meta-y` rotates the ring and re-yanks.
//! - Bounded in-memory history with save/load to a file, arrow-key recall, and
//!   `Ctrl-R` incremental reverse search.
//! - Tab completion via a user-supplied callback, cycled in place with repeated Tabs.
//! - Input hints via a user-supplied callback, rendered past the cursor.
//! - Password-style masking of the displayed line.
//! - `Ctrl-C`/`SIGWINCH`/`SIGCONT` are handled cooperatively: raw mode is restored
//!   before a terminating signal is re-raised, and the screen is redrawn after a
//!   resize or a resume from suspend.
//!
//! If the input fd is not a TTY (e.g. the process is being piped into), or `TERM`
//! names an unsupported terminal, [`Editor::read_line`] falls back to reading one
//! line from `stdin` with no editing.
//!
//! # Example
//!
//! ```no_run
//! use r3bl_readline::Editor;
//!
//! let mut editor = Editor::default();
//! editor.load_history(std::path::Path::new("history.txt")).ok();
//! while let Some(line) = editor.read_line("> ", 0, 1)? {
//!     editor.add_history(&line);
//!     println!("you said: {line}");
//! }
//! editor.save_history(std::path::Path::new("history.txt"))?;
//! # Ok::<(), r3bl_readline::ReadlineError>(())
//! ```

pub mod buffer;
pub mod completion;
pub mod config;
pub mod decoder;
pub mod editor;
pub mod error;
pub mod history;
pub mod kill_ring;
pub mod logging;
pub mod pipe_terminal;
pub mod refresh;
pub mod terminal;
pub mod unicode;
pub mod utf8;

// Re-export the public API at the crate root.
pub use completion::{CompletionSession, Completions};
pub use config::EditorConfig;
pub use editor::{CompletionCallback, Editor, FreeHintsCallback, Hint, HintsCallback};
pub use error::{ReadlineError, Result};
pub use history::HistoryStore;
pub use kill_ring::KillRing;
pub use pipe_terminal::PipeTerminal;
pub use terminal::{RawTerminal, Terminal, WindowSize};
pub use logging::{LogDestination, LoggingConfig};
