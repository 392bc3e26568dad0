//! TrueType and OpenType import via ttf-parser.

use ttf_parser::{Face, GlyphId, PlatformId};

use super::encoding;
use super::{GlyphSink, SimpleFont};
use crate::error::{RenderError, RenderResult};
use crate::geom::Affine;
use crate::object::Value;

/// Build a [`SimpleFont`] from SFNT data and a PDF `Encoding` value.
///
/// With no encoding, byte codes go through the font's builtin cmap: a
/// (3, 0) symbol subtable is preferred, folding codes of the form
/// `0x00XX`, `0xF0XX`, `0xF1XX`, `0xF2XX` down to their low byte, with a
/// (1, 0) subtable filling any remaining slots. With an encoding, each
/// byte maps to a glyph name, then to Unicode, then through the font's
/// Unicode cmap.
pub(crate) fn from_sfnt(data: &[u8], pdf_encoding: &Value) -> RenderResult<SimpleFont> {
    let face = Face::parse(data, 0).map_err(|e| RenderError::FontParse(e.to_string()))?;
    let upem = face.units_per_em() as f32;
    let scale = 1.0 / upem;
    let to_em = Affine::scale(scale, scale);

    let mut gids = [GlyphId(0); 256];
    if pdf_encoding.is_null() {
        builtin_cmap_gids(&face, &mut gids);
    } else {
        let names = encoding::resolve(pdf_encoding)?;
        for (code, name) in names.iter().enumerate() {
            let Some(name) = name else { continue };
            let Some(u) = encoding::name_to_unicode(name) else {
                log::warn!("no Unicode value for glyph name {:?}", name);
                continue;
            };
            let Some(ch) = char::from_u32(u) else { continue };
            if let Some(gid) = face.glyph_index(ch) {
                gids[code] = gid;
            }
        }
    }

    let mut font = SimpleFont::empty();
    for (code, &gid) in gids.iter().enumerate() {
        if gid.0 == 0 {
            continue;
        }
        let mut sink = GlyphSink::new(to_em);
        let has_outline = face.outline_glyph(gid, &mut sink).is_some();
        let glyph = font.glyph_mut(code as u8);
        glyph.advance = face.glyph_hor_advance(gid).unwrap_or(0) as f32 * scale;
        if has_outline {
            glyph.outline = sink.finish();
        }
    }
    Ok(font)
}

/// Fill `gids` from the font's own cmap for encoding-less fonts.
fn builtin_cmap_gids(face: &Face, gids: &mut [GlyphId; 256]) {
    let Some(cmap) = face.tables().cmap else {
        return;
    };

    for subtable in cmap.subtables {
        if subtable.platform_id != PlatformId::Windows || subtable.encoding_id != 0 {
            continue;
        }
        // Symbol fonts address glyphs as 0x00XX or 0xF0XX..0xF2XX; either
        // way the low byte is the character code.
        subtable.codepoints(|code| match code & 0xFF00 {
            0x0000 | 0xF000 | 0xF100 | 0xF200 => {
                let b = (code & 0xFF) as usize;
                if gids[b].0 == 0 {
                    if let Some(gid) = subtable.glyph_index(code) {
                        gids[b] = gid;
                    }
                }
            }
            _ => {}
        });
    }

    for subtable in cmap.subtables {
        if subtable.platform_id != PlatformId::Macintosh || subtable.encoding_id != 0 {
            continue;
        }
        subtable.codepoints(|code| {
            if code > 255 {
                return;
            }
            let b = code as usize;
            if gids[b].0 == 0 {
                if let Some(gid) = subtable.glyph_index(code) {
                    gids[b] = gid;
                }
            }
        });
    }
}
