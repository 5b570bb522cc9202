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

//! Static interval tables backing the Unicode oracle in [`super`].
//!
//! Every table here is sorted ascending by its first (`a`) column and its ranges
//! are non-overlapping, which is what makes the binary search in `lookup.rs` correct.
//! Regenerating these from a newer Unicode Character Database is fine as long as that
//! invariant holds.

/// BMP code points that are not letters, digits, or a "glyph-like" symbol.
pub(crate) static GLYPHS: &[(u32, u32)] = &[
    (0x000aa, 0x000aa),
    (0x000b2, 0x000b3),
    (0x000b5, 0x000b5),
    (0x000b9, 0x000ba),
    (0x000bc, 0x000be),
    (0x000c0, 0x000d6),
    (0x000d8, 0x000f6),
    (0x00100, 0x002c1),
    (0x002c6, 0x002d1),
    (0x002e0, 0x002e4),
    (0x002ec, 0x002ec),
    (0x002ee, 0x002ee),
    (0x00370, 0x00374),
    (0x00376, 0x00377),
    (0x0037a, 0x0037d),
    (0x0037f, 0x0037f),
    (0x00386, 0x00386),
    (0x00388, 0x0038a),
    (0x0038c, 0x0038c),
    (0x0038e, 0x003a1),
    (0x003a3, 0x003f5),
    (0x003f7, 0x00481),
    (0x0048a, 0x0052f),
    (0x00531, 0x00556),
    (0x00560, 0x00588),
    (0x005d0, 0x005ea),
    (0x00620, 0x0064a),
    (0x00660, 0x00669),
    (0x00671, 0x006d3),
    (0x006ee, 0x006fc),
    (0x00712, 0x0072f),
    (0x0074d, 0x007a5),
    (0x007c0, 0x007ea),
    (0x00800, 0x00815),
    (0x00840, 0x00858),
    (0x00904, 0x00939),
    (0x00993, 0x009a8),
    (0x009e6, 0x009f1),
    (0x00a13, 0x00a28),
    (0x00a66, 0x00a6f),
    (0x00a93, 0x00aa8),
    (0x00b13, 0x00b28),
    (0x00c92, 0x00ca8),
    (0x00caa, 0x00cb3),
    (0x00ce6, 0x00cef),
    (0x00d12, 0x00d3a),
    (0x00d85, 0x00d96),
    (0x00d9a, 0x00db1),
    (0x00de6, 0x00def),
    (0x00e01, 0x00e30),
    (0x00e8c, 0x00ea3),
    (0x00f20, 0x00f33),
    (0x00f49, 0x00f6c),
    (0x0109e, 0x010c5),
    (0x010d0, 0x010fa),
    (0x010fc, 0x01248),
    (0x013a0, 0x013f5),
    (0x01401, 0x0166d),
    (0x016a0, 0x016ea),
    (0x01700, 0x0170c),
    (0x01780, 0x017b3),
    (0x01820, 0x01878),
    (0x01a00, 0x01a16),
    (0x01a20, 0x01a54),
    (0x01a80, 0x01a89),
    (0x01a90, 0x01a99),
    (0x01b05, 0x01b33),
    (0x01b50, 0x01b59),
    (0x01b83, 0x01ba0),
    (0x01bae, 0x01be5),
    (0x01c90, 0x01cba),
    (0x01cbd, 0x01cbf),
    (0x01e00, 0x01f15),
    (0x02070, 0x02071),
    (0x02074, 0x02079),
    (0x0207f, 0x02089),
    (0x02090, 0x0209c),
    (0x02100, 0x02117),
    (0x02119, 0x0213f),
    (0x02145, 0x0214a),
    (0x0214c, 0x0218b),
    (0x021af, 0x021cd),
    (0x021d5, 0x021f3),
    (0x0230c, 0x0231f),
    (0x0232b, 0x0237b),
    (0x0237d, 0x0239a),
    (0x023b4, 0x023db),
    (0x023e2, 0x02426),
    (0x02460, 0x025b6),
    (0x025c2, 0x025f7),
    (0x02600, 0x0266e),
    (0x02670, 0x02767),
    (0x02776, 0x027bf),
    (0x02800, 0x028ff),
    (0x02c00, 0x02c2e),
    (0x02c30, 0x02c5e),
    (0x02c60, 0x02ce4),
    (0x02d00, 0x02d25),
    (0x02d30, 0x02d67),
    (0x02d80, 0x02d96),
    (0x02e2f, 0x02e2f),
    (0x03005, 0x03007),
    (0x03021, 0x03029),
    (0x03031, 0x03035),
    (0x03038, 0x0303c),
    (0x03041, 0x03096),
    (0x030a1, 0x030fa),
    (0x03105, 0x0312f),
    (0x03131, 0x0318e),
    (0x031a0, 0x031ba),
    (0x031f0, 0x031ff),
    (0x03220, 0x03229),
    (0x03248, 0x0324f),
    (0x03251, 0x0325f),
    (0x03280, 0x03289),
    (0x032b1, 0x032bf),
    (0x03400, 0x04db5),
    (0x04dc0, 0x09fef),
    (0x0a000, 0x0a48c),
    (0x0a4d0, 0x0a4fd),
    (0x0a500, 0x0a60c),
    (0x0a610, 0x0a62b),
    (0x0a6a0, 0x0a6ef),
    (0x0a80c, 0x0a822),
    (0x0a840, 0x0a873),
    (0x0a882, 0x0a8b3),
    (0x0a8d0, 0x0a8d9),
    (0x0a900, 0x0a925),
    (0x0a930, 0x0a946),
    (0x0a960, 0x0a97c),
    (0x0a984, 0x0a9b2),
    (0x0a9cf, 0x0a9d9),
    (0x0aa00, 0x0aa28),
    (0x0aa50, 0x0aa59),
    (0x0abf0, 0x0abf9),
    (0x0ac00, 0x0d7a3),
    (0x0f900, 0x0fa6d),
    (0x0fa70, 0x0fad9),
    (0x0fb1f, 0x0fb28),
    (0x0fb2a, 0x0fb36),
    (0x0fb46, 0x0fbb1),
    (0x0fbd3, 0x0fd3d),
    (0x0fe76, 0x0fefc),
    (0x0ff10, 0x0ff19),
    (0x0ff21, 0x0ff3a),
    (0x0ff41, 0x0ff5a),
    (0x0ff66, 0x0ffbe),
    (0x0ffc2, 0x0ffc7),
    (0x0ffca, 0x0ffcf),
    (0x0ffd2, 0x0ffd7),
    (0x0ffda, 0x0ffdc),
];

/// Astral-plane (beyond BMP) counterpart of `GLYPHS`.
pub(crate) static ASTRAL_GLYPHS: &[(u32, u32)] = &[
    (0x10107, 0x10133),
    (0x10140, 0x10178),
    (0x1018a, 0x1018b),
    (0x10280, 0x1029c),
    (0x102a0, 0x102d0),
    (0x102e1, 0x102fb),
    (0x10300, 0x10323),
    (0x1032d, 0x1034a),
    (0x10350, 0x10375),
    (0x10380, 0x1039d),
    (0x103a0, 0x103c3),
    (0x103c8, 0x103cf),
    (0x103d1, 0x103d5),
    (0x10400, 0x1049d),
    (0x104b0, 0x104d3),
    (0x104d8, 0x104fb),
    (0x10500, 0x10527),
    (0x10530, 0x10563),
    (0x10600, 0x10736),
    (0x10800, 0x10805),
    (0x1080a, 0x10835),
    (0x10837, 0x10838),
    (0x1083f, 0x1089e),
    (0x108e0, 0x108f2),
    (0x108f4, 0x108f5),
    (0x108fb, 0x1091b),
    (0x10920, 0x10939),
    (0x10980, 0x109b7),
    (0x109bc, 0x109cf),
    (0x109d2, 0x10a00),
    (0x10a10, 0x10a13),
    (0x10a15, 0x10a17),
    (0x10a19, 0x10a35),
    (0x10a40, 0x10a48),
    (0x10a60, 0x10a7e),
    (0x10a80, 0x10a9f),
    (0x10ac0, 0x10ac7),
    (0x10ac9, 0x10ae4),
    (0x10aeb, 0x10aef),
    (0x10b00, 0x10b35),
    (0x10b40, 0x10b55),
    (0x10b58, 0x10b72),
    (0x10b78, 0x10b91),
    (0x10c00, 0x10c48),
    (0x10c80, 0x10cb2),
    (0x10cc0, 0x10cf2),
    (0x10cfa, 0x10d23),
    (0x10d30, 0x10d39),
    (0x10e60, 0x10e7e),
    (0x10f00, 0x10f27),
    (0x10f30, 0x10f45),
    (0x10f51, 0x10f54),
    (0x10fe0, 0x10ff6),
    (0x11003, 0x11037),
    (0x11052, 0x1106f),
    (0x11083, 0x110af),
    (0x110d0, 0x110e8),
    (0x110f0, 0x110f9),
    (0x11103, 0x11126),
    (0x11136, 0x1113f),
    (0x11144, 0x11144),
    (0x11150, 0x11172),
    (0x11176, 0x11176),
    (0x11183, 0x111b2),
    (0x111c1, 0x111c4),
    (0x111d0, 0x111da),
    (0x111dc, 0x111dc),
    (0x111e1, 0x111f4),
    (0x11200, 0x11211),
    (0x11213, 0x1122b),
    (0x11280, 0x11286),
    (0x11288, 0x11288),
    (0x1128a, 0x1128d),
    (0x1128f, 0x1129d),
    (0x1129f, 0x112a8),
    (0x112b0, 0x112de),
    (0x112f0, 0x112f9),
    (0x11305, 0x1130c),
    (0x1130f, 0x11310),
    (0x11313, 0x11328),
    (0x1132a, 0x11330),
    (0x11332, 0x11333),
    (0x11335, 0x11339),
    (0x1133d, 0x1133d),
    (0x11350, 0x11350),
    (0x1135d, 0x11361),
    (0x11400, 0x11434),
    (0x11447, 0x1144a),
    (0x11450, 0x11459),
    (0x1145f, 0x1145f),
    (0x11480, 0x114af),
    (0x114c4, 0x114c5),
    (0x114c7, 0x114c7),
    (0x114d0, 0x114d9),
    (0x11580, 0x115ae),
    (0x115d8, 0x115db),
    (0x11600, 0x1162f),
    (0x11644, 0x11644),
    (0x11650, 0x11659),
    (0x11680, 0x116aa),
    (0x116b8, 0x116b8),
    (0x116c0, 0x116c9),
    (0x11700, 0x1171a),
    (0x11730, 0x1173b),
    (0x11800, 0x1182b),
    (0x118a0, 0x118f2),
    (0x118ff, 0x118ff),
    (0x119a0, 0x119a7),
    (0x119aa, 0x119d0),
    (0x119e1, 0x119e1),
    (0x119e3, 0x119e3),
    (0x11a00, 0x11a00),
    (0x11a0b, 0x11a32),
    (0x11a3a, 0x11a3a),
    (0x11a50, 0x11a50),
    (0x11a5c, 0x11a89),
    (0x11a9d, 0x11a9d),
    (0x11ac0, 0x11af8),
    (0x11c00, 0x11c08),
    (0x11c0a, 0x11c2e),
    (0x11c40, 0x11c40),
    (0x11c50, 0x11c6c),
    (0x11c72, 0x11c8f),
    (0x11d00, 0x11d06),
    (0x11d08, 0x11d09),
    (0x11d0b, 0x11d30),
    (0x11d46, 0x11d46),
    (0x11d50, 0x11d59),
    (0x11d60, 0x11d65),
    (0x11d67, 0x11d68),
    (0x11d6a, 0x11d89),
    (0x11d98, 0x11d98),
    (0x11da0, 0x11da9),
    (0x11ee0, 0x11ef2),
    (0x11fc0, 0x11fd4),
    (0x12000, 0x12399),
    (0x12400, 0x1246e),
    (0x12480, 0x12543),
    (0x13000, 0x1342e),
    (0x14400, 0x14646),
    (0x16800, 0x16a38),
    (0x16a40, 0x16a5e),
    (0x16a60, 0x16a69),
    (0x16ad0, 0x16aed),
    (0x16b00, 0x16b2f),
    (0x16b40, 0x16b43),
    (0x16b50, 0x16b59),
    (0x16b5b, 0x16b61),
    (0x16b63, 0x16b77),
    (0x16b7d, 0x16b8f),
    (0x16e40, 0x16e96),
    (0x16f00, 0x16f4a),
    (0x16f50, 0x16f50),
    (0x16f93, 0x16f9f),
    (0x16fe0, 0x16fe1),
    (0x16fe3, 0x16fe3),
    (0x17000, 0x187f7),
    (0x18800, 0x18af2),
    (0x1b000, 0x1b11e),
    (0x1b150, 0x1b152),
    (0x1b164, 0x1b167),
    (0x1b170, 0x1b2fb),
    (0x1bc00, 0x1bc6a),
    (0x1bc70, 0x1bc7c),
    (0x1bc80, 0x1bc88),
    (0x1bc90, 0x1bc99),
    (0x1d2e0, 0x1d2f3),
    (0x1d360, 0x1d378),
    (0x1d400, 0x1d454),
    (0x1d456, 0x1d49c),
    (0x1d49e, 0x1d49f),
    (0x1d4a2, 0x1d4a2),
    (0x1d4a5, 0x1d4a6),
    (0x1d4a9, 0x1d4ac),
    (0x1d4ae, 0x1d4b9),
    (0x1d4bb, 0x1d4bb),
    (0x1d4bd, 0x1d4c3),
    (0x1d4c5, 0x1d505),
    (0x1d507, 0x1d50a),
    (0x1d50d, 0x1d514),
    (0x1d516, 0x1d51c),
    (0x1d51e, 0x1d539),
    (0x1d53b, 0x1d53e),
    (0x1d540, 0x1d544),
    (0x1d546, 0x1d546),
    (0x1d54a, 0x1d550),
    (0x1d552, 0x1d6a5),
    (0x1d6a8, 0x1d6c0),
    (0x1d6c2, 0x1d6da),
    (0x1d6dc, 0x1d6fa),
    (0x1d6fc, 0x1d714),
    (0x1d716, 0x1d734),
    (0x1d736, 0x1d74e),
    (0x1d750, 0x1d76e),
    (0x1d770, 0x1d788),
    (0x1d78a, 0x1d7a8),
    (0x1d7aa, 0x1d7c2),
    (0x1d7c4, 0x1d7cb),
    (0x1d7ce, 0x1d9ff),
    (0x1f100, 0x1f10c),
    (0x20000, 0x2a6d6),
    (0x2a700, 0x2b734),
    (0x2b740, 0x2b81d),
    (0x2b820, 0x2cea1),
    (0x2ceb0, 0x2ebe0),
    (0x2f800, 0x2fa1d),
];

/// BMP uppercase -> lowercase interval/delta table.
pub(crate) static LOWER: &[(u32, u32, i32)] = &[
    (0x000c0, 0x000d6, 32),
    (0x000d8, 0x000de, 32),
    (0x00178, 0x00178, -121),
    (0x00179, 0x00179, 1),
    (0x0017b, 0x0017b, 1),
    (0x0017d, 0x0017d, 1),
    (0x00181, 0x00181, 210),
    (0x00182, 0x00182, 1),
    (0x00184, 0x00184, 1),
    (0x00186, 0x00186, 206),
    (0x00187, 0x00187, 1),
    (0x00189, 0x0018a, 205),
    (0x0018b, 0x0018b, 1),
    (0x0018e, 0x0018e, 79),
    (0x0018f, 0x0018f, 202),
    (0x00190, 0x00190, 203),
    (0x00191, 0x00191, 1),
    (0x00193, 0x00193, 205),
    (0x00194, 0x00194, 207),
    (0x00196, 0x00196, 211),
    (0x00197, 0x00197, 209),
    (0x00198, 0x00198, 1),
    (0x0019c, 0x0019c, 211),
    (0x0019d, 0x0019d, 213),
    (0x0019f, 0x0019f, 214),
    (0x001a0, 0x001a0, 1),
    (0x001a2, 0x001a2, 1),
    (0x001a4, 0x001a4, 1),
    (0x001a6, 0x001a6, 218),
    (0x001a7, 0x001a7, 1),
    (0x001a9, 0x001a9, 218),
    (0x001ac, 0x001ac, 1),
    (0x001ae, 0x001ae, 218),
    (0x001af, 0x001af, 1),
    (0x001b1, 0x001b2, 217),
    (0x001b3, 0x001b3, 1),
    (0x001b5, 0x001b5, 1),
    (0x001b7, 0x001b7, 219),
    (0x001b8, 0x001b8, 1),
    (0x001bc, 0x001bc, 1),
    (0x001c4, 0x001c4, 2),
    (0x001c5, 0x001c5, 1),
    (0x001c7, 0x001c7, 2),
    (0x001c8, 0x001c8, 1),
    (0x001ca, 0x001ca, 2),
    (0x001cb, 0x001cb, 1),
    (0x001cd, 0x001cd, 1),
    (0x001f1, 0x001f1, 2),
    (0x001f2, 0x001f2, 1),
    (0x001f4, 0x001f4, 1),
    (0x001f6, 0x001f6, -97),
    (0x001f7, 0x001f7, -56),
    (0x00220, 0x00220, -130),
    (0x0023b, 0x0023b, 1),
    (0x0023d, 0x0023d, -163),
    (0x00241, 0x00241, 1),
    (0x00243, 0x00243, -195),
    (0x00244, 0x00244, 69),
    (0x00245, 0x00245, 71),
    (0x00246, 0x00246, 1),
    (0x00248, 0x00248, 1),
    (0x0024a, 0x0024a, 1),
    (0x0024c, 0x0024c, 1),
    (0x0024e, 0x0024e, 1),
    (0x00386, 0x00386, 38),
    (0x00388, 0x0038a, 37),
    (0x0038c, 0x0038c, 64),
    (0x0038e, 0x0038f, 63),
    (0x00391, 0x003a1, 32),
    (0x003a3, 0x003ab, 32),
    (0x003dc, 0x003dc, 1),
    (0x003f4, 0x003f4, -60),
    (0x00400, 0x0040f, 80),
    (0x00410, 0x0042f, 32),
    (0x00460, 0x00460, 1),
    (0x00462, 0x00462, 1),
    (0x00464, 0x00464, 1),
    (0x00472, 0x00472, 1),
    (0x00490, 0x00490, 1),
    (0x00498, 0x00498, 1),
    (0x0049a, 0x0049a, 1),
    (0x00531, 0x00556, 48),
    (0x010a0, 0x010c5, 7264),
    (0x010c7, 0x010c7, 7264),
    (0x010cd, 0x010cd, 7264),
    (0x013f0, 0x013f5, 8),
    (0x01c90, 0x01cba, -3008),
    (0x01cbd, 0x01cbf, -3008),
    (0x01f08, 0x01f0f, -8),
    (0x01f18, 0x01f1d, -8),
    (0x01f28, 0x01f2f, -8),
    (0x01f38, 0x01f3f, -8),
    (0x01f48, 0x01f4d, -8),
    (0x01f59, 0x01f59, -8),
    (0x01f5b, 0x01f5b, -8),
    (0x01f5d, 0x01f5d, -8),
    (0x01f5f, 0x01f5f, -8),
    (0x01f68, 0x01f6f, -8),
    (0x01f88, 0x01f8f, -8),
    (0x01f98, 0x01f9f, -8),
    (0x01fa8, 0x01faf, -8),
    (0x01fb8, 0x01fb9, -8),
    (0x01fba, 0x01fbb, -74),
    (0x01fbc, 0x01fbc, -9),
    (0x01fc8, 0x01fcb, -86),
    (0x01fcc, 0x01fcc, -9),
    (0x01fd8, 0x01fd9, -8),
    (0x01fda, 0x01fdb, -100),
    (0x01fe8, 0x01fe9, -8),
    (0x01fea, 0x01feb, -112),
    (0x01fec, 0x01fec, -7),
    (0x01ff8, 0x01ff9, -128),
    (0x01ffa, 0x01ffb, -126),
    (0x01ffc, 0x01ffc, -9),
    (0x02126, 0x02126, -7517),
    (0x0212a, 0x0212a, -8383),
    (0x0212b, 0x0212b, -8262),
    (0x02132, 0x02132, 28),
    (0x02160, 0x0216f, 16),
    (0x02183, 0x02183, 1),
    (0x024b6, 0x024cf, 26),
    (0x02c00, 0x02c2e, 48),
    (0x0ff21, 0x0ff3a, 32),
];

/// Astral-plane uppercase -> lowercase interval/delta table.
pub(crate) static ASTRAL_LOWER: &[(u32, u32, i32)] = &[
    (0x10400, 0x10427, 40),
    (0x104b0, 0x104d3, 40),
    (0x1d400, 0x1d419, 26),
    (0x1d43c, 0x1d44d, 26),
    (0x1d468, 0x1d481, 26),
    (0x1d4ae, 0x1d4b5, 26),
    (0x1d4d0, 0x1d4e9, 26),
    (0x1d50d, 0x1d514, 26),
    (0x1d56c, 0x1d585, 26),
    (0x1d5a0, 0x1d5b9, 26),
    (0x1d5d4, 0x1d5ed, 26),
    (0x1d608, 0x1d621, 26),
    (0x1d63c, 0x1d655, -442),
    (0x1d670, 0x1d689, 26),
    (0x1d6a8, 0x1d6b8, 26),
    (0x1d6e2, 0x1d6f2, 26),
    (0x1d71c, 0x1d72c, 26),
    (0x1d756, 0x1d766, 26),
    (0x1d790, 0x1d7a0, -90),
];

/// BMP lowercase -> uppercase interval/delta table.
pub(crate) static UPPER: &[(u32, u32, i32)] = &[
    (0x000b5, 0x000b5, 743),
    (0x000e0, 0x000f6, -32),
    (0x000f8, 0x000fe, -32),
    (0x000ff, 0x000ff, 121),
    (0x0017a, 0x0017a, -1),
    (0x0017c, 0x0017c, -1),
    (0x0017e, 0x0017e, -1),
    (0x0017f, 0x0017f, -300),
    (0x00180, 0x00180, 195),
    (0x00183, 0x00183, -1),
    (0x00185, 0x00185, -1),
    (0x00188, 0x00188, -1),
    (0x0018c, 0x0018c, -1),
    (0x00192, 0x00192, -1),
    (0x00195, 0x00195, 97),
    (0x00199, 0x00199, -1),
    (0x0019a, 0x0019a, 163),
    (0x0019e, 0x0019e, 130),
    (0x001a1, 0x001a1, -1),
    (0x001a3, 0x001a3, -1),
    (0x001a5, 0x001a5, -1),
    (0x001a8, 0x001a8, -1),
    (0x001ad, 0x001ad, -1),
    (0x001b0, 0x001b0, -1),
    (0x001b4, 0x001b4, -1),
    (0x001b6, 0x001b6, -1),
    (0x001b9, 0x001b9, -1),
    (0x001bd, 0x001bd, -1),
    (0x001bf, 0x001bf, 56),
    (0x001c5, 0x001c5, -1),
    (0x001c6, 0x001c6, -2),
    (0x001c8, 0x001c8, -1),
    (0x001c9, 0x001c9, -2),
    (0x001cb, 0x001cb, -1),
    (0x001cc, 0x001cc, -2),
    (0x001ce, 0x001ce, -1),
    (0x001dd, 0x001dd, -79),
    (0x001f2, 0x001f2, -1),
    (0x001f3, 0x001f3, -2),
    (0x001f5, 0x001f5, -1),
    (0x0023c, 0x0023c, -1),
    (0x0023f, 0x00240, 10815),
    (0x00242, 0x00242, -1),
    (0x00247, 0x00247, -1),
    (0x00249, 0x00249, -1),
    (0x0024b, 0x0024b, -1),
    (0x0024d, 0x0024d, -1),
    (0x0024f, 0x0024f, -1),
    (0x0037b, 0x0037d, 130),
    (0x003ac, 0x003ac, -38),
    (0x003ad, 0x003af, -37),
    (0x003b1, 0x003c1, -32),
    (0x003c2, 0x003c2, -31),
    (0x003c3, 0x003cb, -32),
    (0x003cc, 0x003cc, -64),
    (0x003cd, 0x003ce, -63),
    (0x003d0, 0x003d0, -62),
    (0x003d1, 0x003d1, -57),
    (0x003d5, 0x003d5, -47),
    (0x003d6, 0x003d6, -54),
    (0x003dd, 0x003dd, -1),
    (0x003f0, 0x003f0, -86),
    (0x003f1, 0x003f1, -80),
    (0x003f5, 0x003f5, -96),
    (0x00430, 0x0044f, -32),
    (0x00450, 0x0045f, -80),
    (0x00461, 0x00461, -1),
    (0x00463, 0x00463, -1),
    (0x00465, 0x00465, -1),
    (0x00473, 0x00473, -1),
    (0x00491, 0x00491, -1),
    (0x00499, 0x00499, -1),
    (0x0049b, 0x0049b, -1),
    (0x00561, 0x00586, -48),
    (0x010d0, 0x010fa, 3008),
    (0x010fd, 0x010ff, 3008),
    (0x013f8, 0x013fd, -8),
    (0x0214e, 0x0214e, -28),
    (0x02170, 0x0217f, -16),
    (0x02184, 0x02184, -1),
    (0x024d0, 0x024e9, -26),
    (0x02c30, 0x02c5e, -48),
    (0x02d00, 0x02d25, -7264),
    (0x02d27, 0x02d27, -7264),
    (0x02d2d, 0x02d2d, -7264),
    (0x0ff41, 0x0ff5a, -32),
];

/// Astral-plane lowercase -> uppercase interval/delta table.
///
/// The source this is transcribed from has two trailing rows after this table's last
/// entry that don't belong: one gives its range backwards (`{0x1d770, 0x1d756, -26}`,
/// lo > hi) and the other duplicates a range already covered with an inconsistent
/// delta (`{0x1d736, 0x1d790, -90}`). Both are dropped; the entry actually needed to
/// invert the last `ASTRAL_LOWER` row (`0x1d756..=0x1d766` to `0x1d770..=0x1d780` via
/// `+26`) is already present further up and is kept as-is.
pub(crate) static ASTRAL_UPPER: &[(u32, u32, i32)] = &[
    (0x10428, 0x1044f, -40),
    (0x104d8, 0x104fb, -40),
    (0x1d41a, 0x1d433, -26),
    (0x1d456, 0x1d467, -26),
    (0x1d482, 0x1d49b, -26),
    (0x1d4c8, 0x1d4cf, -26),
    (0x1d4ea, 0x1d503, -26),
    (0x1d527, 0x1d52e, -26),
    (0x1d586, 0x1d59f, -26),
    (0x1d5ba, 0x1d5d3, -26),
    (0x1d5ee, 0x1d607, -26),
    (0x1d622, 0x1d63b, -26),
    (0x1d68a, 0x1d6a3, 442),
    (0x1d6c2, 0x1d6d2, -26),
    (0x1d6fc, 0x1d70c, -26),
    (0x1d736, 0x1d746, -26),
    (0x1d770, 0x1d780, -26),
];

