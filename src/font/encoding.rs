//! Standard PDF text encodings and glyph name resolution.
//!
//! An encoding maps byte codes to glyph names. The four predefined
//! encodings here are the ones a font dictionary can name directly; a
//! dictionary encoding starts from one of them (or from nothing) and
//! patches it with a `Differences` array.

use std::borrow::Cow;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::error::{RenderError, RenderResult};
use crate::object::Value;

/// A byte-code-to-glyph-name table.
pub(crate) type EncodingTable = [Option<&'static str>; 256];

/// Byte codes resolved from a PDF `Encoding` value, possibly patched by
/// `Differences`.
pub(crate) type GlyphNames = [Option<Cow<'static, str>>; 256];

/// The printable ASCII range shared by the predefined encodings, using
/// the WinAnsi/MacRoman variants at 0x27 and 0x60.
const ASCII: &[(u8, &str)] = &[
    (32, "space"),
    (33, "exclam"),
    (34, "quotedbl"),
    (35, "numbersign"),
    (36, "dollar"),
    (37, "percent"),
    (38, "ampersand"),
    (39, "quotesingle"),
    (40, "parenleft"),
    (41, "parenright"),
    (42, "asterisk"),
    (43, "plus"),
    (44, "comma"),
    (45, "hyphen"),
    (46, "period"),
    (47, "slash"),
    (48, "zero"),
    (49, "one"),
    (50, "two"),
    (51, "three"),
    (52, "four"),
    (53, "five"),
    (54, "six"),
    (55, "seven"),
    (56, "eight"),
    (57, "nine"),
    (58, "colon"),
    (59, "semicolon"),
    (60, "less"),
    (61, "equal"),
    (62, "greater"),
    (63, "question"),
    (64, "at"),
    (65, "A"),
    (66, "B"),
    (67, "C"),
    (68, "D"),
    (69, "E"),
    (70, "F"),
    (71, "G"),
    (72, "H"),
    (73, "I"),
    (74, "J"),
    (75, "K"),
    (76, "L"),
    (77, "M"),
    (78, "N"),
    (79, "O"),
    (80, "P"),
    (81, "Q"),
    (82, "R"),
    (83, "S"),
    (84, "T"),
    (85, "U"),
    (86, "V"),
    (87, "W"),
    (88, "X"),
    (89, "Y"),
    (90, "Z"),
    (91, "bracketleft"),
    (92, "backslash"),
    (93, "bracketright"),
    (94, "asciicircum"),
    (95, "underscore"),
    (96, "grave"),
    (97, "a"),
    (98, "b"),
    (99, "c"),
    (100, "d"),
    (101, "e"),
    (102, "f"),
    (103, "g"),
    (104, "h"),
    (105, "i"),
    (106, "j"),
    (107, "k"),
    (108, "l"),
    (109, "m"),
    (110, "n"),
    (111, "o"),
    (112, "p"),
    (113, "q"),
    (114, "r"),
    (115, "s"),
    (116, "t"),
    (117, "u"),
    (118, "v"),
    (119, "w"),
    (120, "x"),
    (121, "y"),
    (122, "z"),
    (123, "braceleft"),
    (124, "bar"),
    (125, "braceright"),
    (126, "asciitilde"),
];

/// Adobe StandardEncoding outside the shared ASCII range, plus its two
/// quote variants.
const STANDARD_EXTRA: &[(u8, &str)] = &[
    (39, "quoteright"),
    (96, "quoteleft"),
    (161, "exclamdown"),
    (162, "cent"),
    (163, "sterling"),
    (164, "fraction"),
    (165, "yen"),
    (166, "florin"),
    (167, "section"),
    (168, "currency"),
    (169, "quotesingle"),
    (170, "quotedblleft"),
    (171, "guillemotleft"),
    (172, "guilsinglleft"),
    (173, "guilsinglright"),
    (174, "fi"),
    (175, "fl"),
    (177, "endash"),
    (178, "dagger"),
    (179, "daggerdbl"),
    (180, "periodcentered"),
    (182, "paragraph"),
    (183, "bullet"),
    (184, "quotesinglbase"),
    (185, "quotedblbase"),
    (186, "quotedblright"),
    (187, "guillemotright"),
    (188, "ellipsis"),
    (189, "perthousand"),
    (191, "questiondown"),
    (193, "grave"),
    (194, "acute"),
    (195, "circumflex"),
    (196, "tilde"),
    (197, "macron"),
    (198, "breve"),
    (199, "dotaccent"),
    (200, "dieresis"),
    (202, "ring"),
    (203, "cedilla"),
    (205, "hungarumlaut"),
    (206, "ogonek"),
    (207, "caron"),
    (208, "emdash"),
    (225, "AE"),
    (227, "ordfeminine"),
    (232, "Lslash"),
    (233, "Oslash"),
    (234, "OE"),
    (235, "ordmasculine"),
    (241, "ae"),
    (245, "dotlessi"),
    (248, "lslash"),
    (249, "oslash"),
    (250, "oe"),
    (251, "germandbls"),
];

/// WinAnsiEncoding outside the shared ASCII range.
const WIN_ANSI_EXTRA: &[(u8, &str)] = &[
    (128, "Euro"),
    (130, "quotesinglbase"),
    (131, "florin"),
    (132, "quotedblbase"),
    (133, "ellipsis"),
    (134, "dagger"),
    (135, "daggerdbl"),
    (136, "circumflex"),
    (137, "perthousand"),
    (138, "Scaron"),
    (139, "guilsinglleft"),
    (140, "OE"),
    (142, "Zcaron"),
    (145, "quoteleft"),
    (146, "quoteright"),
    (147, "quotedblleft"),
    (148, "quotedblright"),
    (149, "bullet"),
    (150, "endash"),
    (151, "emdash"),
    (152, "tilde"),
    (153, "trademark"),
    (154, "scaron"),
    (155, "guilsinglright"),
    (156, "oe"),
    (158, "zcaron"),
    (159, "Ydieresis"),
    (161, "exclamdown"),
    (162, "cent"),
    (163, "sterling"),
    (164, "currency"),
    (165, "yen"),
    (166, "brokenbar"),
    (167, "section"),
    (168, "dieresis"),
    (169, "copyright"),
    (170, "ordfeminine"),
    (171, "guillemotleft"),
    (172, "logicalnot"),
    (173, "hyphen"),
    (174, "registered"),
    (175, "macron"),
    (176, "degree"),
    (177, "plusminus"),
    (178, "twosuperior"),
    (179, "threesuperior"),
    (180, "acute"),
    (181, "mu"),
    (182, "paragraph"),
    (183, "periodcentered"),
    (184, "cedilla"),
    (185, "onesuperior"),
    (186, "ordmasculine"),
    (187, "guillemotright"),
    (188, "onequarter"),
    (189, "onehalf"),
    (190, "threequarters"),
    (191, "questiondown"),
    (192, "Agrave"),
    (193, "Aacute"),
    (194, "Acircumflex"),
    (195, "Atilde"),
    (196, "Adieresis"),
    (197, "Aring"),
    (198, "AE"),
    (199, "Ccedilla"),
    (200, "Egrave"),
    (201, "Eacute"),
    (202, "Ecircumflex"),
    (203, "Edieresis"),
    (204, "Igrave"),
    (205, "Iacute"),
    (206, "Icircumflex"),
    (207, "Idieresis"),
    (208, "Eth"),
    (209, "Ntilde"),
    (210, "Ograve"),
    (211, "Oacute"),
    (212, "Ocircumflex"),
    (213, "Otilde"),
    (214, "Odieresis"),
    (215, "multiply"),
    (216, "Oslash"),
    (217, "Ugrave"),
    (218, "Uacute"),
    (219, "Ucircumflex"),
    (220, "Udieresis"),
    (221, "Yacute"),
    (222, "Thorn"),
    (223, "germandbls"),
    (224, "agrave"),
    (225, "aacute"),
    (226, "acircumflex"),
    (227, "atilde"),
    (228, "adieresis"),
    (229, "aring"),
    (230, "ae"),
    (231, "ccedilla"),
    (232, "egrave"),
    (233, "eacute"),
    (234, "ecircumflex"),
    (235, "edieresis"),
    (236, "igrave"),
    (237, "iacute"),
    (238, "icircumflex"),
    (239, "idieresis"),
    (240, "eth"),
    (241, "ntilde"),
    (242, "ograve"),
    (243, "oacute"),
    (244, "ocircumflex"),
    (245, "otilde"),
    (246, "odieresis"),
    (247, "divide"),
    (248, "oslash"),
    (249, "ugrave"),
    (250, "uacute"),
    (251, "ucircumflex"),
    (252, "udieresis"),
    (253, "yacute"),
    (254, "thorn"),
    (255, "ydieresis"),
];

/// MacRomanEncoding outside the shared ASCII range.
const MAC_ROMAN_EXTRA: &[(u8, &str)] = &[
    (128, "Adieresis"),
    (129, "Aring"),
    (130, "Ccedilla"),
    (131, "Eacute"),
    (132, "Ntilde"),
    (133, "Odieresis"),
    (134, "Udieresis"),
    (135, "aacute"),
    (136, "agrave"),
    (137, "acircumflex"),
    (138, "adieresis"),
    (139, "atilde"),
    (140, "aring"),
    (141, "ccedilla"),
    (142, "eacute"),
    (143, "egrave"),
    (144, "ecircumflex"),
    (145, "edieresis"),
    (146, "iacute"),
    (147, "igrave"),
    (148, "icircumflex"),
    (149, "idieresis"),
    (150, "ntilde"),
    (151, "oacute"),
    (152, "ograve"),
    (153, "ocircumflex"),
    (154, "odieresis"),
    (155, "otilde"),
    (156, "uacute"),
    (157, "ugrave"),
    (158, "ucircumflex"),
    (159, "udieresis"),
    (160, "dagger"),
    (161, "degree"),
    (162, "cent"),
    (163, "sterling"),
    (164, "section"),
    (165, "bullet"),
    (166, "paragraph"),
    (167, "germandbls"),
    (168, "registered"),
    (169, "copyright"),
    (170, "trademark"),
    (171, "acute"),
    (172, "dieresis"),
    (173, "notequal"),
    (174, "AE"),
    (175, "Oslash"),
    (176, "infinity"),
    (177, "plusminus"),
    (178, "lessequal"),
    (179, "greaterequal"),
    (180, "yen"),
    (181, "mu"),
    (182, "partialdiff"),
    (183, "summation"),
    (184, "product"),
    (185, "pi"),
    (186, "integral"),
    (187, "ordfeminine"),
    (188, "ordmasculine"),
    (189, "Omega"),
    (190, "ae"),
    (191, "oslash"),
    (192, "questiondown"),
    (193, "exclamdown"),
    (194, "logicalnot"),
    (195, "radical"),
    (196, "florin"),
    (197, "approxequal"),
    (198, "Delta"),
    (199, "guillemotleft"),
    (200, "guillemotright"),
    (201, "ellipsis"),
    (202, "space"),
    (203, "Agrave"),
    (204, "Atilde"),
    (205, "Otilde"),
    (206, "OE"),
    (207, "oe"),
    (208, "endash"),
    (209, "emdash"),
    (210, "quotedblleft"),
    (211, "quotedblright"),
    (212, "quoteleft"),
    (213, "quoteright"),
    (214, "divide"),
    (215, "lozenge"),
    (216, "ydieresis"),
    (217, "Ydieresis"),
    (218, "fraction"),
    (219, "currency"),
    (220, "guilsinglleft"),
    (221, "guilsinglright"),
    (222, "fi"),
    (223, "fl"),
    (224, "daggerdbl"),
    (225, "periodcentered"),
    (226, "quotesinglbase"),
    (227, "quotedblbase"),
    (228, "perthousand"),
    (229, "Acircumflex"),
    (230, "Ecircumflex"),
    (231, "Aacute"),
    (232, "Edieresis"),
    (233, "Egrave"),
    (234, "Iacute"),
    (235, "Icircumflex"),
    (236, "Idieresis"),
    (237, "Igrave"),
    (238, "Oacute"),
    (239, "Ocircumflex"),
    (240, "apple"),
    (241, "Ograve"),
    (242, "Uacute"),
    (243, "Ucircumflex"),
    (244, "Ugrave"),
    (245, "dotlessi"),
    (246, "circumflex"),
    (247, "tilde"),
    (248, "macron"),
    (249, "breve"),
    (250, "dotaccent"),
    (251, "ring"),
    (252, "cedilla"),
    (253, "hungarumlaut"),
    (254, "ogonek"),
    (255, "caron"),
];

/// MacExpertEncoding. The expert sets carry small caps, oldstyle figures,
/// and fraction pieces; codes without an entry here stay unmapped.
const MAC_EXPERT_PAIRS: &[(u8, &str)] = &[
    (32, "space"),
    (33, "exclamsmall"),
    (34, "Hungarumlautsmall"),
    (36, "dollaroldstyle"),
    (37, "dollarsuperior"),
    (38, "ampersandsmall"),
    (39, "Acutesmall"),
    (40, "parenleftsuperior"),
    (41, "parenrightsuperior"),
    (42, "twodotenleader"),
    (43, "onedotenleader"),
    (44, "comma"),
    (45, "hyphen"),
    (46, "period"),
    (47, "fraction"),
    (48, "zerooldstyle"),
    (49, "oneoldstyle"),
    (50, "twooldstyle"),
    (51, "threeoldstyle"),
    (52, "fouroldstyle"),
    (53, "fiveoldstyle"),
    (54, "sixoldstyle"),
    (55, "sevenoldstyle"),
    (56, "eightoldstyle"),
    (57, "nineoldstyle"),
    (58, "colon"),
    (59, "semicolon"),
    (61, "threequartersemdash"),
    (63, "questionsmall"),
    (68, "Ethsmall"),
    (71, "onequarter"),
    (72, "onehalf"),
    (73, "threequarters"),
    (74, "oneeighth"),
    (75, "threeeighths"),
    (76, "fiveeighths"),
    (77, "seveneighths"),
    (78, "onethird"),
    (79, "twothirds"),
    (86, "ff"),
    (87, "fi"),
    (88, "fl"),
    (89, "ffi"),
    (90, "ffl"),
    (91, "parenleftinferior"),
    (93, "parenrightinferior"),
    (94, "Circumflexsmall"),
    (95, "hypheninferior"),
    (96, "Gravesmall"),
    (97, "Asmall"),
    (98, "Bsmall"),
    (99, "Csmall"),
    (100, "Dsmall"),
    (101, "Esmall"),
    (102, "Fsmall"),
    (103, "Gsmall"),
    (104, "Hsmall"),
    (105, "Ismall"),
    (106, "Jsmall"),
    (107, "Ksmall"),
    (108, "Lsmall"),
    (109, "Msmall"),
    (110, "Nsmall"),
    (111, "Osmall"),
    (112, "Psmall"),
    (113, "Qsmall"),
    (114, "Rsmall"),
    (115, "Ssmall"),
    (116, "Tsmall"),
    (117, "Usmall"),
    (118, "Vsmall"),
    (119, "Wsmall"),
    (120, "Xsmall"),
    (121, "Ysmall"),
    (122, "Zsmall"),
    (123, "colonmonetary"),
    (124, "onefitted"),
    (125, "rupiah"),
    (126, "Tildesmall"),
    (129, "asuperior"),
    (130, "centsuperior"),
    (135, "Aacutesmall"),
    (136, "Agravesmall"),
    (137, "Acircumflexsmall"),
    (138, "Adieresissmall"),
    (139, "Atildesmall"),
    (140, "Aringsmall"),
    (141, "Ccedillasmall"),
    (142, "Eacutesmall"),
    (143, "Egravesmall"),
    (144, "Ecircumflexsmall"),
    (145, "Edieresissmall"),
    (146, "Iacutesmall"),
    (147, "Igravesmall"),
    (148, "Icircumflexsmall"),
    (149, "Idieresissmall"),
    (150, "Ntildesmall"),
    (151, "Oacutesmall"),
    (152, "Ogravesmall"),
    (153, "Ocircumflexsmall"),
    (154, "Odieresissmall"),
    (155, "Otildesmall"),
    (156, "Uacutesmall"),
    (157, "Ugravesmall"),
    (158, "Ucircumflexsmall"),
    (159, "Udieresissmall"),
    (161, "eightsuperior"),
    (162, "fourinferior"),
    (163, "threeinferior"),
    (164, "sixinferior"),
    (165, "eightinferior"),
    (166, "seveninferior"),
    (167, "Scaronsmall"),
    (169, "centinferior"),
    (170, "twoinferior"),
];

fn build_table(parts: &[&[(u8, &'static str)]]) -> EncodingTable {
    let mut table: EncodingTable = [None; 256];
    for pairs in parts {
        for &(code, name) in *pairs {
            table[code as usize] = Some(name);
        }
    }
    table
}

fn standard_encoding() -> &'static EncodingTable {
    static TABLE: OnceLock<EncodingTable> = OnceLock::new();
    TABLE.get_or_init(|| build_table(&[ASCII, STANDARD_EXTRA]))
}

fn win_ansi_encoding() -> &'static EncodingTable {
    static TABLE: OnceLock<EncodingTable> = OnceLock::new();
    TABLE.get_or_init(|| build_table(&[ASCII, WIN_ANSI_EXTRA]))
}

fn mac_roman_encoding() -> &'static EncodingTable {
    static TABLE: OnceLock<EncodingTable> = OnceLock::new();
    TABLE.get_or_init(|| build_table(&[ASCII, MAC_ROMAN_EXTRA]))
}

fn mac_expert_encoding() -> &'static EncodingTable {
    static TABLE: OnceLock<EncodingTable> = OnceLock::new();
    TABLE.get_or_init(|| build_table(&[MAC_EXPERT_PAIRS]))
}

fn predefined(name: &str) -> Option<&'static EncodingTable> {
    match name {
        "StandardEncoding" => Some(standard_encoding()),
        "WinAnsiEncoding" => Some(win_ansi_encoding()),
        "MacRomanEncoding" => Some(mac_roman_encoding()),
        "MacExpertEncoding" => Some(mac_expert_encoding()),
        _ => None,
    }
}

fn empty_names() -> GlyphNames {
    std::array::from_fn(|_| None)
}

fn names_from_table(table: &'static EncodingTable) -> GlyphNames {
    std::array::from_fn(|i| table[i].map(Cow::Borrowed))
}

/// Resolve a PDF `Encoding` value into glyph names per byte code.
///
/// A name selects one of the predefined encodings. A dictionary starts
/// from its `BaseEncoding` (or from nothing) and applies `Differences`:
/// an integer resets the code, each following name fills consecutive
/// codes. Null means "use the font's builtin encoding" and yields an
/// empty table.
pub(crate) fn resolve(encoding: &Value) -> RenderResult<GlyphNames> {
    match encoding {
        Value::Null => Ok(empty_names()),
        Value::Name(name) => match predefined(name) {
            Some(table) => Ok(names_from_table(table)),
            None => Err(RenderError::UnsupportedFont(format!(
                "unknown encoding: {}",
                name
            ))),
        },
        Value::Dict(_) => {
            let base = encoding.key("BaseEncoding").unwrap_or(&Value::Null);
            let mut names = resolve(base)?;
            if let Some(diff) = encoding.key("Differences") {
                let mut code: i64 = 0;
                for i in 0..diff.len() {
                    let Some(item) = diff.index(i) else { break };
                    match item {
                        Value::Integer(n) => code = n - 1,
                        Value::Real(n) => code = *n as i64 - 1,
                        Value::Name(name) => {
                            code += 1;
                            if (0..256).contains(&code) {
                                names[code as usize] = Some(Cow::Owned(name.clone()));
                            }
                        }
                        _ => {}
                    }
                }
            }
            Ok(names)
        }
        _ => Err(RenderError::UnsupportedFont(
            "invalid encoding value".to_string(),
        )),
    }
}

/// Map a glyph name to a Unicode code point.
///
/// Covers the names used by the predefined encodings plus the `uniXXXX`
/// and `uXXXX[XX]` forms.
pub(crate) fn name_to_unicode(name: &str) -> Option<u32> {
    if let Some(&u) = glyph_list().get(name) {
        return Some(u);
    }
    if let Some(hex) = name.strip_prefix("uni") {
        if hex.len() == 4 {
            if let Ok(u) = u32::from_str_radix(hex, 16) {
                return Some(u);
            }
        }
    }
    if let Some(hex) = name.strip_prefix('u') {
        if (4..=6).contains(&hex.len()) {
            if let Ok(u) = u32::from_str_radix(hex, 16) {
                return Some(u);
            }
        }
    }
    None
}

fn glyph_list() -> &'static FxHashMap<&'static str, u32> {
    static LIST: OnceLock<FxHashMap<&'static str, u32>> = OnceLock::new();
    LIST.get_or_init(|| {
        let mut map = FxHashMap::default();
        // The shared ASCII range maps straight to its code points.
        for &(code, name) in ASCII {
            map.insert(name, code as u32);
        }
        for &(name, u) in GLYPH_UNICODE {
            map.insert(name, u);
        }
        map
    })
}

/// Glyph names from the predefined encodings that do not coincide with
/// their byte codes, with their Unicode values from the Adobe Glyph List.
const GLYPH_UNICODE: &[(&str, u32)] = &[
    ("quoteleft", 0x2018),
    ("quoteright", 0x2019),
    ("quotedblleft", 0x201C),
    ("quotedblright", 0x201D),
    ("quotesinglbase", 0x201A),
    ("quotedblbase", 0x201E),
    ("exclamdown", 0x00A1),
    ("cent", 0x00A2),
    ("sterling", 0x00A3),
    ("currency", 0x00A4),
    ("yen", 0x00A5),
    ("brokenbar", 0x00A6),
    ("section", 0x00A7),
    ("dieresis", 0x00A8),
    ("copyright", 0x00A9),
    ("ordfeminine", 0x00AA),
    ("guillemotleft", 0x00AB),
    ("logicalnot", 0x00AC),
    ("registered", 0x00AE),
    ("macron", 0x00AF),
    ("degree", 0x00B0),
    ("plusminus", 0x00B1),
    ("twosuperior", 0x00B2),
    ("threesuperior", 0x00B3),
    ("acute", 0x00B4),
    ("mu", 0x00B5),
    ("paragraph", 0x00B6),
    ("periodcentered", 0x00B7),
    ("cedilla", 0x00B8),
    ("onesuperior", 0x00B9),
    ("ordmasculine", 0x00BA),
    ("guillemotright", 0x00BB),
    ("onequarter", 0x00BC),
    ("onehalf", 0x00BD),
    ("threequarters", 0x00BE),
    ("questiondown", 0x00BF),
    ("Agrave", 0x00C0),
    ("Aacute", 0x00C1),
    ("Acircumflex", 0x00C2),
    ("Atilde", 0x00C3),
    ("Adieresis", 0x00C4),
    ("Aring", 0x00C5),
    ("AE", 0x00C6),
    ("Ccedilla", 0x00C7),
    ("Egrave", 0x00C8),
    ("Eacute", 0x00C9),
    ("Ecircumflex", 0x00CA),
    ("Edieresis", 0x00CB),
    ("Igrave", 0x00CC),
    ("Iacute", 0x00CD),
    ("Icircumflex", 0x00CE),
    ("Idieresis", 0x00CF),
    ("Eth", 0x00D0),
    ("Ntilde", 0x00D1),
    ("Ograve", 0x00D2),
    ("Oacute", 0x00D3),
    ("Ocircumflex", 0x00D4),
    ("Otilde", 0x00D5),
    ("Odieresis", 0x00D6),
    ("multiply", 0x00D7),
    ("Oslash", 0x00D8),
    ("Ugrave", 0x00D9),
    ("Uacute", 0x00DA),
    ("Ucircumflex", 0x00DB),
    ("Udieresis", 0x00DC),
    ("Yacute", 0x00DD),
    ("Thorn", 0x00DE),
    ("germandbls", 0x00DF),
    ("agrave", 0x00E0),
    ("aacute", 0x00E1),
    ("acircumflex", 0x00E2),
    ("atilde", 0x00E3),
    ("adieresis", 0x00E4),
    ("aring", 0x00E5),
    ("ae", 0x00E6),
    ("ccedilla", 0x00E7),
    ("egrave", 0x00E8),
    ("eacute", 0x00E9),
    ("ecircumflex", 0x00EA),
    ("edieresis", 0x00EB),
    ("igrave", 0x00EC),
    ("iacute", 0x00ED),
    ("icircumflex", 0x00EE),
    ("idieresis", 0x00EF),
    ("eth", 0x00F0),
    ("ntilde", 0x00F1),
    ("ograve", 0x00F2),
    ("oacute", 0x00F3),
    ("ocircumflex", 0x00F4),
    ("otilde", 0x00F5),
    ("odieresis", 0x00F6),
    ("divide", 0x00F7),
    ("oslash", 0x00F8),
    ("ugrave", 0x00F9),
    ("uacute", 0x00FA),
    ("ucircumflex", 0x00FB),
    ("udieresis", 0x00FC),
    ("yacute", 0x00FD),
    ("thorn", 0x00FE),
    ("ydieresis", 0x00FF),
    ("Lslash", 0x0141),
    ("lslash", 0x0142),
    ("OE", 0x0152),
    ("oe", 0x0153),
    ("Scaron", 0x0160),
    ("scaron", 0x0161),
    ("Ydieresis", 0x0178),
    ("Zcaron", 0x017D),
    ("zcaron", 0x017E),
    ("florin", 0x0192),
    ("dotlessi", 0x0131),
    ("circumflex", 0x02C6),
    ("caron", 0x02C7),
    ("breve", 0x02D8),
    ("dotaccent", 0x02D9),
    ("ring", 0x02DA),
    ("ogonek", 0x02DB),
    ("tilde", 0x02DC),
    ("hungarumlaut", 0x02DD),
    ("Delta", 0x0394),
    ("Omega", 0x03A9),
    ("pi", 0x03C0),
    ("endash", 0x2013),
    ("emdash", 0x2014),
    ("dagger", 0x2020),
    ("daggerdbl", 0x2021),
    ("bullet", 0x2022),
    ("ellipsis", 0x2026),
    ("perthousand", 0x2030),
    ("guilsinglleft", 0x2039),
    ("guilsinglright", 0x203A),
    ("fraction", 0x2044),
    ("Euro", 0x20AC),
    ("trademark", 0x2122),
    ("partialdiff", 0x2202),
    ("product", 0x220F),
    ("summation", 0x2211),
    ("radical", 0x221A),
    ("infinity", 0x221E),
    ("integral", 0x222B),
    ("approxequal", 0x2248),
    ("notequal", 0x2260),
    ("lessequal", 0x2264),
    ("greaterequal", 0x2265),
    ("lozenge", 0x25CA),
    ("apple", 0xF8FF),
    ("fi", 0xFB01),
    ("fl", 0xFB02),
    ("ff", 0xFB00),
    ("ffi", 0xFB03),
    ("ffl", 0xFB04),
    ("onedotenleader", 0x2024),
    ("twodotenleader", 0x2025),
    ("oneeighth", 0x215B),
    ("threeeighths", 0x215C),
    ("fiveeighths", 0x215D),
    ("seveneighths", 0x215E),
    ("onethird", 0x2153),
    ("twothirds", 0x2154),
    ("parenleftsuperior", 0x207D),
    ("parenrightsuperior", 0x207E),
    ("parenleftinferior", 0x208D),
    ("parenrightinferior", 0x208E),
    ("colonmonetary", 0x20A1),
];
