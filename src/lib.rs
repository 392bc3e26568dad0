//! # pdf-ink: a PDF page imaging engine
//!
//! pdf-ink renders the graphics content of a PDF page, paths, fills,
//! strokes, text, and images, onto an abstract 2D drawing surface. It
//! consumes the stream of page-description operators plus the font and
//! resource dictionaries exposed by a surrounding PDF object model, and
//! produces filled primitives for a downstream rasterizer.
//!
//! ## Architecture
//!
//! - [`interp`]: a stack-based interpreter that dispatches page
//!   operators.
//! - [`canvas`]: the graphics-state machine with its save/restore stack
//!   of transforms, clips, colors, and text state.
//! - [`stroke`]: a geometric stroker that widens cubic Bezier paths into
//!   closed, fillable outlines.
//! - [`font`]: an importer that turns embedded TrueType and Type 1 fonts
//!   into 256-slot glyph tables with unit-em outlines.
//! - [`image`]: DCT (JPEG) pass-through and 1-bit bitmap decoding.
//! - [`surface`]: the thin contract a rendering backend implements; a
//!   tiny-skia implementation ships behind the `skia` feature.
//!
//! Parsing PDF files, resolving objects, and decoding stream filters are
//! the surrounding reader's job; see [`object`] for the contract.
//!
//! ## Example
//!
//! ```
//! use pdf_ink::object::{Page, Value};
//! use pdf_ink::surface::RecordingSurface;
//!
//! // Instructions normally come from the upstream content-stream
//! // tokenizer; any iterator of (operands, operator) pairs works.
//! let ops = vec![
//!     (vec![], "q".to_string()),
//!     (
//!         vec![
//!             Value::Integer(10),
//!             Value::Integer(10),
//!             Value::Integer(100),
//!             Value::Integer(50),
//!         ],
//!         "re".to_string(),
//!     ),
//!     (vec![], "f".to_string()),
//!     (vec![], "Q".to_string()),
//! ];
//!
//! let page = Page::new(Value::Null);
//! let mut surface = RecordingSurface::new();
//! pdf_ink::render_page(&page, &mut ops.into_iter(), &mut surface).unwrap();
//! assert_eq!(surface.fills().len(), 1);
//! ```

pub mod canvas;
pub mod error;
pub mod font;
pub mod geom;
pub mod image;
pub mod interp;
pub mod object;
pub mod path;
pub mod stroke;
pub mod surface;
mod text;

#[cfg(feature = "skia")]
pub mod skia;

pub use canvas::{Canvas, GraphicsState, Rgba, TextRenderMode};
pub use error::{RenderError, RenderResult};
pub use font::{Glyph, SimpleFont};
pub use geom::{Affine, Point};
pub use image::{decode_image, Image};
pub use interp::{render_page, Interpreter, OpCode};
pub use object::{ContentReader, Dict, FontDict, Page, Stream, Value};
pub use path::{PathBuilder, PathElement};
pub use stroke::{stroke, Cap, Join, Options, Segment};
pub use surface::{FillRule, Handle, RecordingSurface, Surface, SurfaceEvent};

#[cfg(feature = "skia")]
pub use skia::SkiaSurface;
