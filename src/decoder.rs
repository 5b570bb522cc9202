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

//! Byte-at-a-time phase machine that turns raw terminal input into a single
//! canonical keystroke: a UTF-8 rune, a C0 control byte, or an escape/CSI/SS/string
//! sequence, returned as the exact bytes read.
//!
//! Driven one byte at a time rather than matching the whole buffer at once because
//! the fd underneath this is non-blocking: a multi-byte sequence can legitimately
//! arrive split across several `read`s, and the phase has to be resumable across
//! those.

use crate::error::{ReadlineError, Result};
use crate::utf8::Rune;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Ascii,
    Utf8,
    Esc,
    Csi1,
    Csi2,
    Ss,
    Nf,
    Str,
    Str2,
}

/// Byte source the decoder reads from, one byte at a time. `terminal::RawTerminal`
/// implements this over a real fd with poll/EINTR handling; tests implement it over
/// an in-memory slice.
pub trait ByteSource {
    /// Reads one byte, or `Ok(None)` at end of input.
    fn read_byte(&mut self) -> std::io::Result<Option<u8>>;
}

/// Reads one full keystroke from `source`, returning its raw bytes. `Ok(None)` means
/// end of input was reached before any byte was read (a clean EOF). A multi-byte
/// sequence truncated by EOF is reported as [`ReadlineError::IllegalSequence`], not
/// silently returned short.
pub fn read_sequence(source: &mut impl ByteSource) -> Result<Option<Vec<u8>>> {
    let mut out: Vec<u8> = Vec::with_capacity(8);
    let mut phase = Phase::Ascii;
    let mut rune = Rune { value: 0, remaining: 0 };

    loop {
        let byte = match source.read_byte()? {
            Some(b) => b,
            None => {
                return if out.is_empty() { Ok(None) } else { Err(ReadlineError::IllegalSequence) };
            }
        };
        out.push(byte);

        match step(phase, byte, &mut rune) {
            Step::Continue(next) => phase = next,
            Step::Done => return Ok(Some(out)),
            Step::Whoopsie => {
                // The byte that broke the current sequence starts a new one: keep
                // only it and restart from `Ascii`, mirroring the original state
                // machine's `goto Whoopsie` recovery instead of emitting a `goto`.
                tracing::trace!(message = "decoder resync", phase = ?phase, byte = format!("{byte:#04x}"));
                out.clear();
                out.push(byte);
                phase = Phase::Ascii;
                if let Step::Done = step(phase, byte, &mut rune) {
                    return Ok(Some(out));
                }
                // `step` on Ascii never returns `Whoopsie`, and if it advances the
                // phase we've already applied that below via the recursive match.
            }
        }
    }
}

enum Step {
    Continue(Phase),
    Done,
    Whoopsie,
}

fn step(phase: Phase, c: u8, rune: &mut Rune) -> Step {
    use Step::*;
    match phase {
        Phase::Ascii => {
            if c < 0x80 {
                if c == 0x1b {
                    Continue(Phase::Esc)
                } else {
                    Done
                }
            } else if c >= 0xc0 {
                match Rune::decode(c) {
                    Ok(r) => {
                        *rune = r;
                        Continue(Phase::Utf8)
                    }
                    Err(_) => Done,
                }
            } else {
                // Overlong / stray continuation byte with no lead: the original
                // silently ignores it and keeps reading for the real sequence.
                Continue(Phase::Ascii)
            }
        }
        Phase::Utf8 => {
            if (c & 0xc0) == 0x80 {
                let complete = rune.push_continuation(c);
                if complete {
                    match rune.value {
                        0x1b => Continue(Phase::Esc),
                        0x9b => Continue(Phase::Csi1),
                        0x8e | 0x8f => Continue(Phase::Ss),
                        0x90 | 0x98 | 0x9d | 0x9e | 0x9f => Continue(Phase::Str),
                        _ => Done,
                    }
                } else {
                    Continue(Phase::Utf8)
                }
            } else {
                Whoopsie
            }
        }
        Phase::Esc => {
            if (0x20..=0x2f).contains(&c) {
                Continue(Phase::Nf)
            } else if (0x30..=0x3f).contains(&c) {
                Done
            } else if c == b'[' {
                Continue(Phase::Csi1)
            } else if c == b'N' || c == b'O' {
                Continue(Phase::Ss)
            } else if matches!(c, b'P' | b'X' | b']' | b'^' | b'_') {
                Continue(Phase::Str)
            } else if c == b'\\' {
                Whoopsie
            } else if (0x20..=0x5f).contains(&c) {
                Done
            } else if (0x60..=0x7e).contains(&c) {
                Done
            } else if c == 0x1b {
                // Alt-chording: a second ESC shortly after the first is folded into
                // the same sequence rather than starting a new one.
                Continue(Phase::Esc)
            } else {
                Done
            }
        }
        Phase::Ss => Done,
        Phase::Nf => {
            if (0x30..=0x7e).contains(&c) {
                Done
            } else if !(0x20..=0x2f).contains(&c) {
                Whoopsie
            } else {
                Continue(Phase::Nf)
            }
        }
        Phase::Csi1 => {
            if (0x20..=0x2f).contains(&c) {
                Continue(Phase::Csi2)
            } else if (0x40..=0x7e).contains(&c) {
                Done
            } else if !(0x30..=0x3f).contains(&c) {
                Whoopsie
            } else {
                Continue(Phase::Csi1)
            }
        }
        Phase::Csi2 => {
            if (0x40..=0x7e).contains(&c) {
                Done
            } else if !(0x20..=0x2f).contains(&c) {
                Whoopsie
            } else {
                Continue(Phase::Csi2)
            }
        }
        Phase::Str => match c {
            0x07 => Done,
            0x1b | 0xc2 => Continue(Phase::Str2),
            _ => Continue(Phase::Str),
        },
        Phase::Str2 => match c {
            0x07 | b'\\' | 0x9c => Done,
            _ => Continue(Phase::Str),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn decode_all(bytes: &[u8]) -> Vec<Vec<u8>> {
        let mut source = SliceSource::new(bytes);
        let mut out = Vec::new();
        while let Some(seq) = read_sequence(&mut source).unwrap() {
            out.push(seq);
        }
        out
    }

    #[test]
    fn plain_ascii_byte_is_one_sequence() {
        assert_eq!(decode_all(b"a"), vec![b"a".to_vec()]);
    }

    #[test]
    fn empty_input_is_clean_eof() {
        assert_eq!(decode_all(b""), Vec::<Vec<u8>>::new());
    }

    #[test]
    fn multibyte_utf8_rune_is_one_sequence() {
        let bytes = "中".as_bytes();
        assert_eq!(decode_all(bytes), vec![bytes.to_vec()]);
    }

    #[test]
    fn csi_cursor_up_sequence() {
        // ESC [ A : cursor up.
        assert_eq!(decode_all(b"\x1b[A"), vec![b"\x1b[A".to_vec()]);
    }

    #[test]
    fn csi_with_parameter_bytes() {
        // ESC [ 3 ~ : delete key.
        assert_eq!(decode_all(b"\x1b[3~"), vec![b"\x1b[3~".to_vec()]);
    }

    #[test]
    fn bare_escape_is_its_own_sequence_on_timeout_equivalent_input() {
        // A lone ESC followed by an ordinary letter (not '[', 'O', 'N', etc.)
        // completes immediately per the Esc phase's Fe/Fs handling.
        assert_eq!(decode_all(b"\x1bq"), vec![b"\x1bq".to_vec()]);
    }

    #[test]
    fn truncated_multibyte_sequence_is_illegal() {
        let mut source = SliceSource::new(&[0xe4, 0xb8]); // first two bytes of 中
        assert!(matches!(read_sequence(&mut source), Err(ReadlineError::IllegalSequence)));
    }

    #[test]
    fn orphaned_continuation_byte_is_absorbed_into_next_sequence() {
        // A stray continuation byte with no lead is ignored in place (the phase
        // stays `Ascii`) rather than terminating anything, so it rides along with
        // whatever completes the sequence next.
        assert_eq!(decode_all(&[0x80, b'a']), vec![vec![0x80, b'a']]);
    }

    #[test]
    fn underlong_utf8_sequence_triggers_whoopsie_recovery() {
        // 0xc3 starts a 2-byte sequence but is followed by an ASCII byte instead of
        // a continuation byte: the partial sequence is discarded and `b` restarts
        // decoding on its own.
        assert_eq!(decode_all(&[0xc3, b'b']), vec![vec![b'b']]);
    }

    #[test]
    fn multiple_sequences_back_to_back() {
        assert_eq!(decode_all(b"ab"), vec![vec![b'a'], vec![b'b']]);
    }
}
