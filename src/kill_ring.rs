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

//! Emacs-style kill ring: a fixed number of rotating slots, most recent overwrite
//! first, so Alt-Y can cycle back through a handful of prior kills instead of just
//! the last one.

/// Rotating buffer of killed text. `push` always writes to the next slot; `rotate`
/// walks backwards to the newest non-empty slot before it, wrapping around.
#[derive(Debug, Clone)]
pub struct KillRing {
    slots: Vec<Option<Vec<u8>>>,
    index: usize,
}

impl KillRing {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { slots: vec![None; capacity], index: 0 }
    }

    /// Stores a fresh kill, overwriting the slot after the current one. A kill of
    /// zero-length text is a no-op: nothing was actually deleted.
    pub fn push(&mut self, text: &[u8]) {
        if text.is_empty() {
            return;
        }
        let n = self.slots.len();
        self.index = (self.index + 1) % n;
        self.slots[self.index] = Some(text.to_vec());
    }

    /// The text at the current ring position, if any has ever been killed.
    pub fn current(&self) -> Option<&[u8]> {
        self.slots[self.index].as_deref()
    }

    /// Moves the ring position back to the previous non-empty slot, wrapping around.
    /// A no-op if every slot is still empty.
    pub fn rotate(&mut self) {
        let n = self.slots.len();
        for _ in 0..n {
            self.index = (self.index + n - 1) % n;
            if self.slots[self.index].is_some() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ring_yanks_nothing() {
        let ring = KillRing::new(4);
        assert_eq!(ring.current(), None);
    }

    #[test]
    fn push_then_yank_returns_same_text() {
        let mut ring = KillRing::new(4);
        ring.push(b"hello");
        assert_eq!(ring.current(), Some(&b"hello"[..]));
    }

    #[test]
    fn empty_kill_does_not_overwrite() {
        let mut ring = KillRing::new(4);
        ring.push(b"hello");
        ring.push(b"");
        assert_eq!(ring.current(), Some(&b"hello"[..]));
    }

    #[test]
    fn rotate_cycles_through_recent_kills() {
        let mut ring = KillRing::new(4);
        ring.push(b"one");
        ring.push(b"two");
        ring.push(b"three");
        assert_eq!(ring.current(), Some(&b"three"[..]));
        ring.rotate();
        assert_eq!(ring.current(), Some(&b"two"[..]));
        ring.rotate();
        assert_eq!(ring.current(), Some(&b"one"[..]));
    }

    #[test]
    fn rotate_wraps_around_and_skips_empty_slots() {
        let mut ring = KillRing::new(4);
        ring.push(b"one");
        ring.push(b"two");
        // Only 2 of 4 slots are occupied; rotating 3 times should land back on "two".
        ring.rotate();
        ring.rotate();
        ring.rotate();
        assert_eq!(ring.current(), Some(&b"two"[..]));
    }

    #[test]
    fn capacity_zero_clamps_to_one() {
        let mut ring = KillRing::new(0);
        ring.push(b"only");
        assert_eq!(ring.current(), Some(&b"only"[..]));
    }
}
