//! Type 1 and bare-CFF import via hayro-font.
//!
//! PDFs frequently store CFF font programs (Type1C) under the Type1
//! subtype, so both formats are detected by header and handled here.
//! Outlines come back in font units and are transformed into unit-em
//! space by the font's FontMatrix.

use hayro_font::cff;
use hayro_font::type1::Table as Type1Table;

use super::encoding;
use super::{GlyphSink, SimpleFont};
use crate::error::{RenderError, RenderResult};
use crate::geom::Affine;
use crate::object::Value;

/// hayro-font does not expose Type 1 charstring widths, so slots without
/// real metrics get this advance, in font units.
const DEFAULT_ADVANCE: f32 = 500.0;

pub(crate) fn from_type1(data: &[u8], pdf_encoding: &Value) -> RenderResult<SimpleFont> {
    if is_cff(data) {
        return from_cff(data, pdf_encoding);
    }

    let table = Type1Table::parse(data)
        .ok_or_else(|| RenderError::FontParse("invalid Type 1 font program".to_string()))?;
    let fm = matrix_to_affine(table.matrix());
    let names = encoding::resolve(pdf_encoding)?;

    let mut font = SimpleFont::empty();
    for code in 0..256usize {
        // Fill holes in the supplied encoding with the font's builtin one.
        let builtin = || table.code_to_string(code as u8).map(str::to_string);
        let Some(name) = names[code]
            .as_ref()
            .map(|n| n.to_string())
            .or_else(builtin)
        else {
            continue;
        };
        let mut sink = GlyphSink::new(fm);
        if table.outline(&name, &mut sink).is_none() {
            continue;
        }
        let glyph = font.glyph_mut(code as u8);
        glyph.outline = sink.finish();
        glyph.advance = DEFAULT_ADVANCE * fm.a;
    }
    Ok(font)
}

fn from_cff(data: &[u8], pdf_encoding: &Value) -> RenderResult<SimpleFont> {
    let table = cff::Table::parse(data)
        .ok_or_else(|| RenderError::FontParse("invalid CFF font program".to_string()))?;
    let fm = matrix_to_affine(table.matrix());
    let names = encoding::resolve(pdf_encoding)?;

    let mut font = SimpleFont::empty();
    for code in 0..256usize {
        let gid = match &names[code] {
            Some(name) => table.glyph_index_by_name(name),
            None => table.glyph_index(code as u8),
        };
        let Some(gid) = gid else { continue };
        let mut sink = GlyphSink::new(fm);
        if table.outline(gid, &mut sink).is_err() {
            continue;
        }
        let glyph = font.glyph_mut(code as u8);
        glyph.outline = sink.finish();
        glyph.advance = table
            .glyph_width(gid)
            .map(|w| w as f32)
            .unwrap_or(DEFAULT_ADVANCE)
            * fm.a;
    }
    Ok(font)
}

/// Bare CFF data starts with major version 1 and a four or five byte
/// header.
fn is_cff(data: &[u8]) -> bool {
    data.len() >= 4 && data[0] == 1 && (data[2] == 4 || data[2] == 5)
}

fn matrix_to_affine(m: hayro_font::Matrix) -> Affine {
    Affine::new(m.sx, m.ky, m.kx, m.sy, m.tx, m.ty)
}
