//! The upstream object-model contract.
//!
//! The surrounding PDF reader resolves files, cross references, and
//! stream filters; the renderer only ever sees fully resolved [`Value`]s.
//! A [`ContentReader`] hands over page-description instructions one at a
//! time, and [`Page`] and [`FontDict`] are typed views over the resource
//! dictionaries the interpreter needs.

use std::collections::HashMap;

/// A dictionary of resolved PDF values.
pub type Dict = HashMap<String, Value>;

/// A stream object: its dictionary plus fully decoded data.
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    pub dict: Dict,
    pub data: Vec<u8>,
}

/// A resolved PDF value.
///
/// Indirect references have already been chased by the upstream reader;
/// arrays and dictionaries contain their actual contents.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Real(f32),
    /// A string, as raw bytes. Text strings are interpreted through the
    /// current font's encoding, never as UTF-8.
    String(Vec<u8>),
    Name(String),
    Array(Vec<Value>),
    Dict(Dict),
    Stream(Stream),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The value as an integer. Reals are truncated.
    pub fn int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Real(n) => Some(*n as i64),
            _ => None,
        }
    }

    /// The value as a float. Integers are widened.
    pub fn float(&self) -> Option<f32> {
        match self {
            Value::Integer(n) => Some(*n as f32),
            Value::Real(n) => Some(*n),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Value::Name(n) => Some(n),
            _ => None,
        }
    }

    pub fn raw_string(&self) -> Option<&[u8]> {
        match self {
            Value::String(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// The number of elements if this is an array, zero otherwise.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn index(&self, i: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(i),
            _ => None,
        }
    }

    /// Look up a key in a dictionary or a stream's dictionary.
    pub fn key(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Dict(dict) => dict.get(name),
            Value::Stream(stream) => stream.dict.get(name),
            _ => None,
        }
    }

    /// The decoded data if this is a stream.
    pub fn reader(&self) -> Option<&[u8]> {
        match self {
            Value::Stream(stream) => Some(&stream.data),
            _ => None,
        }
    }
}

static NULL: Value = Value::Null;

/// Yields page-description instructions: the operands read so far and
/// the operator that consumed them.
///
/// Implemented by the upstream content-stream tokenizer. Any iterator of
/// `(operands, operator)` pairs works out of the box.
pub trait ContentReader {
    fn read_instruction(&mut self) -> Option<(Vec<Value>, String)>;
}

impl<I> ContentReader for I
where
    I: Iterator<Item = (Vec<Value>, String)>,
{
    fn read_instruction(&mut self) -> Option<(Vec<Value>, String)> {
        self.next()
    }
}

/// A page object, as far as rendering is concerned: its resource
/// dictionary and content stream.
#[derive(Debug, Clone, Default)]
pub struct Page {
    value: Value,
}

impl Page {
    /// Wrap a resolved page dictionary.
    pub fn new(value: Value) -> Page {
        Page { value }
    }

    /// The page's resource dictionary, or null if absent.
    pub fn resources(&self) -> &Value {
        self.value.key("Resources").unwrap_or(&NULL)
    }

    /// The page's content stream, if present.
    pub fn contents(&self) -> Option<&Value> {
        self.value.key("Contents")
    }

    /// Look up a font by resource name.
    pub fn font(&self, name: &str) -> Option<FontDict<'_>> {
        let font = self.resources().key("Font")?.key(name)?;
        if font.is_null() {
            return None;
        }
        Some(FontDict { value: font })
    }

    /// Look up an ExtGState dictionary by resource name.
    pub fn ext_g_state(&self, name: &str) -> Option<&Value> {
        self.resources().key("ExtGState")?.key(name)
    }

    /// Look up an XObject by resource name.
    pub fn xobject(&self, name: &str) -> Option<&Value> {
        self.resources().key("XObject")?.key(name)
    }
}

/// A typed view over a font dictionary.
#[derive(Debug, Clone, Copy)]
pub struct FontDict<'a> {
    value: &'a Value,
}

impl<'a> FontDict<'a> {
    pub fn new(value: &'a Value) -> FontDict<'a> {
        FontDict { value }
    }

    /// The font subtype name, e.g. `TrueType` or `Type1`.
    pub fn subtype(&self) -> Option<&str> {
        self.value.key("Subtype").and_then(Value::name)
    }

    pub fn base_font(&self) -> Option<&str> {
        self.value.key("BaseFont").and_then(Value::name)
    }

    /// The `Encoding` entry, or null if absent.
    pub fn encoding(&self) -> &Value {
        self.value.key("Encoding").unwrap_or(&NULL)
    }

    /// The embedded font program from the font descriptor.
    ///
    /// Checks `FontFile2`, `FontFile`, and `FontFile3` in that order;
    /// some producers store CFF data under the wrong key for the
    /// subtype, so all three are tried.
    pub fn font_file(&self) -> Option<&[u8]> {
        let descriptor = self.value.key("FontDescriptor")?;
        for key in ["FontFile2", "FontFile", "FontFile3"] {
            if let Some(data) = descriptor.key(key).and_then(Value::reader) {
                return Some(data);
            }
        }
        None
    }
}
