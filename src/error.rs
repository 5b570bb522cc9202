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

//! Error types returned by [`crate::Editor`].

/// Failure modes of the line editor. `EndOfInput` is deliberately not a variant here:
/// reaching EOF is an expected outcome of [`crate::Editor::read_line`], represented as
/// `Ok(None)`, not an error.
#[derive(thiserror::Error, Debug)]
pub enum ReadlineError {
    /// The input decoder reached end of input in the middle of a multi-byte sequence
    /// (a partial UTF-8 rune or an unterminated escape sequence).
    #[error("input ended mid-sequence")]
    IllegalSequence,

    /// A read, write, or poll on the terminal file descriptors failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// `enable_raw` refused to touch the terminal: `TERM` is in the unsupported list,
    /// or the fd does not refer to a terminal at all.
    #[error("terminal does not support raw mode editing")]
    NoTerminal,

    /// Loading or saving the history file failed for a reason other than the file
    /// simply not existing (that case is treated as success with no changes).
    #[error("history file I/O failed")]
    HistoryIo(#[source] std::io::Error),

    /// Tagged return value used by the non-local-jump boundary described in the
    /// terminal lifecycle design notes: `read_line` observed SIGINT or SIGQUIT,
    /// restored cooked mode, and is handing control back so the caller can re-raise
    /// the same signal to the process.
    #[error("caught signal {0}")]
    Signal(i32),
}

pub type Result<T> = std::result::Result<T, ReadlineError>;
