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

//! Self-contained Unicode predicates and case transforms for the editor.
//!
//! Terminal emulators disagree wildly on which wide/combining code points they
//! actually honor, so pulling in `unicode-width`/`unicode-segmentation` and trusting
//! their up-to-date tables would change the editor's column arithmetic out from under
//! a fixed terminal. The tables in [`tables`] are a closed, versioned snapshot instead:
//! same input, same cursor math, forever.

mod tables;

/// A code point outside the printable range: C0 controls and the C1 set.
pub fn is_control(c: u32) -> bool {
    (0x00..=0x1f).contains(&c) || (0x7f..=0x9f).contains(&c)
}

/// Terminal column width of a single code point: 0 for controls, 1 for ordinary
/// characters, 2 for code points in an East Asian Wide or Fullwidth block.
pub fn monospace_width(c: u32) -> u32 {
    let narrow = u32::from(!is_control(c));
    let wide = u32::from(
        c >= 0x1100
            && (c <= 0x115f
                || c == 0x2329
                || c == 0x232a
                || (0x2e80..=0xa4cf).contains(&c) && c != 0x303f
                || (0xac00..=0xd7a3).contains(&c)
                || (0xf900..=0xfaff).contains(&c)
                || (0xfe10..=0xfe19).contains(&c)
                || (0xfe30..=0xfe6f).contains(&c)
                || (0xff00..=0xff60).contains(&c)
                || (0xffe0..=0xffe6).contains(&c)
                || (0x20000..=0x2fffd).contains(&c)
                || (0x30000..=0x3fffd).contains(&c)),
    );
    narrow + wide
}

/// True if `c` is not alphanumeric: used to delimit words for the word-motion and
/// word-editing commands. Roughly "not in Unicode categories Lu/Ll/Lt/Lm/Lo/Nd/Nl/No",
/// plus a handful of symbol blocks that behave like words in practice (CJK, Braille,
/// enclosed alphanumerics).
pub fn is_separator(c: u32) -> bool {
    if c < 0x80 {
        return !((b'0' as u32..=b'9' as u32).contains(&c)
            || (b'A' as u32..=b'Z' as u32).contains(&c)
            || (b'a' as u32..=b'z' as u32).contains(&c));
    }
    if c <= 0xffff {
        !in_interval_table(tables::GLYPHS, c)
    } else {
        !in_interval_table(tables::ASTRAL_GLYPHS, c)
    }
}

pub fn is_word_char(c: u32) -> bool {
    !is_separator(c)
}

/// Lowercases `c`, leaving it unchanged if it has no lowercase form.
pub fn to_lower(c: u32) -> u32 {
    if c < 0x80 {
        if (b'A' as u32..=b'Z' as u32).contains(&c) {
            return c + 32;
        }
        return c;
    }
    if c <= 0xffff {
        if (0x0100..=0x0176).contains(&c)
            || (0x01de..=0x01ee).contains(&c)
            || (0x01f8..=0x021e).contains(&c)
            || (0x0222..=0x0232).contains(&c)
            || (0x1e00..=0x1eff).contains(&c)
        {
            if c == 0x0130 {
                return c - 199;
            }
            if c == 0x1e9e {
                return c;
            }
            return c + (!c & 1);
        }
        if (0x01cf..=0x01db).contains(&c) {
            return c + (c & 1);
        }
        if (0x13a0..=0x13ef).contains(&c) {
            return c + 38864;
        }
        apply_interval_delta(tables::LOWER, c)
    } else {
        apply_interval_delta(tables::ASTRAL_LOWER, c)
    }
}

/// Uppercases `c`, leaving it unchanged if it has no uppercase form.
pub fn to_upper(c: u32) -> u32 {
    if c < 0x80 {
        if (b'a' as u32..=b'z' as u32).contains(&c) {
            return c - 32;
        }
        return c;
    }
    if c <= 0xffff {
        if (0x0101..=0x0177).contains(&c)
            || (0x01df..=0x01ef).contains(&c)
            || (0x01f8..=0x021e).contains(&c)
            || (0x0222..=0x0232).contains(&c)
            || (0x1e01..=0x1eff).contains(&c)
        {
            if c == 0x0131 {
                return c + 232;
            }
            if c == 0x1e9e {
                return c;
            }
            return c - (c & 1);
        }
        if (0x01d0..=0x01dc).contains(&c) {
            return c - (!c & 1);
        }
        if (0xab70..=0xabbf).contains(&c) {
            return c - 38864;
        }
        apply_interval_delta(tables::UPPER, c)
    } else {
        apply_interval_delta(tables::ASTRAL_UPPER, c)
    }
}

/// Upper-cases only the first letter of a run of word characters. Callers drive this
/// by resetting `first` to `true` at the start of each word and threading the updated
/// value back in for every subsequent code point in that word.
pub fn capitalize(c: u32, first: &mut bool) -> u32 {
    if *first {
        *first = false;
        to_upper(c)
    } else {
        c
    }
}

fn in_interval_table(table: &[(u32, u32)], c: u32) -> bool {
    let i = table.partition_point(|&(_, hi)| hi < c);
    i < table.len() && table[i].0 <= c && c <= table[i].1
}

fn apply_interval_delta(table: &[(u32, u32, i32)], c: u32) -> u32 {
    let i = table.partition_point(|&(_, hi, _)| hi < c);
    if i < table.len() && table[i].0 <= c && c <= table[i].1 {
        (c as i64 + table[i].2 as i64) as u32
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_boundaries() {
        assert!(is_control(0x00));
        assert!(is_control(0x1f));
        assert!(!is_control(0x20));
        assert!(is_control(0x7f));
        assert!(is_control(0x9f));
        assert!(!is_control(0xa0));
    }

    #[test]
    fn width_of_ascii_and_wide_cjk() {
        assert_eq!(monospace_width('a' as u32), 1);
        assert_eq!(monospace_width(0x00), 0);
        assert_eq!(monospace_width(0x4e2d), 2); // 中
        assert_eq!(monospace_width(0xac00), 2); // Hangul
    }

    #[test]
    fn separator_ascii() {
        assert!(!is_separator('a' as u32));
        assert!(!is_separator('Z' as u32));
        assert!(!is_separator('5' as u32));
        assert!(is_separator(' ' as u32));
        assert!(is_separator('.' as u32));
    }

    #[test]
    fn separator_latin_extended_is_word_char() {
        assert!(!is_separator(0x00c0)); // À
    }

    #[test]
    fn separator_astral_cjk_extension_is_word_char() {
        assert!(!is_separator(0x20000));
    }

    #[test]
    fn lower_upper_ascii_roundtrip() {
        assert_eq!(to_lower('A' as u32), 'a' as u32);
        assert_eq!(to_upper('a' as u32), 'A' as u32);
        assert_eq!(to_lower('5' as u32), '5' as u32);
    }

    #[test]
    fn lower_upper_latin1_supplement() {
        assert_eq!(to_lower(0x00c0), 0x00e0); // À -> à
        assert_eq!(to_upper(0x00e0), 0x00c0); // à -> À
    }

    #[test]
    fn cherokee_special_case() {
        assert_eq!(to_lower(0x13a0), 0x13a0 + 38864);
        assert_eq!(to_upper(0x13a0 + 38864), 0x13a0);
    }

    #[test]
    fn astral_math_alphanumeric_roundtrip() {
        assert_eq!(to_lower(0x1d400), 0x1d41a); // 𝐀 -> 𝐚
        assert_eq!(to_upper(0x1d41a), 0x1d400);
    }

    #[test]
    fn astral_upper_tail_is_well_formed_after_correction() {
        // This pair sits right where the upstream table had its corrupted trailing
        // rows; it must resolve through the retained, well-formed entry.
        assert_eq!(to_upper(0x1d770), 0x1d756);
        assert_eq!(to_lower(0x1d756), 0x1d770);
    }

    #[test]
    fn unmapped_code_point_is_unchanged() {
        assert_eq!(to_lower(0x4e2d), 0x4e2d);
        assert_eq!(to_upper(0x4e2d), 0x4e2d);
    }

    #[test]
    fn capitalize_only_first_letter_of_word() {
        let mut first = true;
        let out: Vec<u32> = "hello".chars().map(|c| capitalize(c as u32, &mut first)).collect();
        let s: String = out.into_iter().map(|c| char::from_u32(c).unwrap()).collect();
        assert_eq!(s, "Hello");
    }
}
