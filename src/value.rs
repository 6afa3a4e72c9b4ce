//! Contains the `Value` tree, a native Rust representation of a parsed
//! document, and the serialization logic for writing a `Value` back out
//! as text.

use indexmap::IndexMap;
use std::fmt;

/// A parsed number.
///
/// Whether a literal is an `Int` or a `Float` is decided purely by the
/// presence of a decimal point in the source text, not by its value.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Number {
    /// A number written without a decimal point, e.g., `42`.
    Int(i64),
    /// A number written with a decimal point, e.g., `-3.5`.
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            // A float always prints a decimal point, so re-parsing the
            // output yields a float again.
            Number::Float(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{:.1}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

/// A native Rust representation of any parsed value.
///
/// A `Value` owns all its children exclusively; there is no sharing and,
/// with no back-references, no cycles. Object keys keep their insertion
/// order, and a duplicate key overwrites the earlier value in place.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A number.
    Number(Number),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A mapping from string keys to values, in insertion order.
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Serializes the value into a compact text document.
    ///
    /// The output obeys the same grammar the tokenizer reads, so a
    /// serialized value re-parses to a structurally equal tree.
    ///
    /// # Errors
    /// Returns `fmt::Error` if the value contains something the grammar
    /// cannot express: a non-finite float, or a string containing a `"`
    /// or a control character.
    pub fn to_text(&self) -> Result<String, fmt::Error> {
        let mut output = String::new();
        Self::write_value(self, &mut output)?;
        Ok(output)
    }

    /// Recursive helper to write any `Value` to a string buffer.
    fn write_value<W: fmt::Write>(value: &Value, w: &mut W) -> fmt::Result {
        match value {
            Value::Null => w.write_str("null"),
            Value::Boolean(b) => w.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => Self::write_number(n, w),
            Value::String(s) => Self::write_string(s, w),
            Value::Array(a) => Self::write_array(a, w),
            Value::Object(o) => Self::write_object(o, w),
        }
    }

    /// Helper to write a number, rejecting NaN/infinity, which the
    /// grammar has no literal for.
    fn write_number<W: fmt::Write>(n: &Number, w: &mut W) -> fmt::Result {
        match n {
            Number::Float(f) if !f.is_finite() => Err(fmt::Error),
            _ => write!(w, "{}", n),
        }
    }

    /// Helper to write an array (compact).
    fn write_array<W: fmt::Write>(arr: &[Value], w: &mut W) -> fmt::Result {
        w.write_char('[')?;
        let mut first = true;
        for val in arr {
            if !first {
                w.write_char(',')?;
            }
            Self::write_value(val, w)?;
            first = false;
        }
        w.write_char(']')
    }

    /// Helper to write an object (compact).
    fn write_object<W: fmt::Write>(obj: &IndexMap<String, Value>, w: &mut W) -> fmt::Result {
        w.write_char('{')?;
        let mut first = true;
        for (key, val) in obj {
            if !first {
                w.write_char(',')?;
            }
            Self::write_string(key, w)?;
            w.write_char(':')?;
            Self::write_value(val, w)?;
            first = false;
        }
        w.write_char('}')
    }

    /// Helper to write a string literal.
    ///
    /// Content is written raw between quotes; the grammar has no escape
    /// sequences, so a string containing a quote or a control character
    /// cannot be expressed and is a hard error.
    fn write_string<W: fmt::Write>(s: &str, w: &mut W) -> fmt::Result {
        if s.chars().any(|c| matches!(c, '"' | '\u{0000}'..='\u{001F}')) {
            return Err(fmt::Error);
        }
        w.write_char('"')?;
        w.write_str(s)?;
        w.write_char('"')
    }

    // --- Pretty-Printing Logic ---
    /// The indentation string for pretty-printing (two spaces).
    const INDENT: &'static str = "  ";

    /// Serializes the value into a human-readable, indented text document.
    ///
    /// # Errors
    /// Same as [`Value::to_text`].
    pub fn to_text_pretty(&self) -> Result<String, fmt::Error> {
        let mut output = String::new();
        Self::write_value_pretty(self, &mut output, 0)?;
        Ok(output)
    }

    /// Recursive helper for pretty-printing a value.
    fn write_value_pretty<W: fmt::Write>(value: &Value, w: &mut W, depth: usize) -> fmt::Result {
        match value {
            Value::Null => w.write_str("null"),
            Value::Boolean(b) => w.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => Self::write_number(n, w),
            Value::String(s) => Self::write_string(s, w),
            Value::Array(a) => Self::write_array_pretty(a, w, depth),
            Value::Object(o) => Self::write_object_pretty(o, w, depth),
        }
    }

    /// Helper to pretty-print an array.
    fn write_array_pretty<W: fmt::Write>(arr: &[Value], w: &mut W, depth: usize) -> fmt::Result {
        // Empty array is just "[]"
        if arr.is_empty() {
            return w.write_str("[]");
        }

        let new_depth = depth + 1;
        let indent = Self::INDENT.repeat(new_depth);
        let closing_indent = Self::INDENT.repeat(depth);

        w.write_str("[\n")?;

        let mut first = true;
        for val in arr {
            if !first {
                w.write_str(",\n")?;
            }
            w.write_str(&indent)?;
            Self::write_value_pretty(val, w, new_depth)?;
            first = false;
        }

        write!(w, "\n{}", closing_indent)?;
        w.write_char(']')
    }

    /// Helper to pretty-print an object.
    fn write_object_pretty<W: fmt::Write>(
        obj: &IndexMap<String, Value>,
        w: &mut W,
        depth: usize,
    ) -> fmt::Result {
        // Empty object is just "{}"
        if obj.is_empty() {
            return w.write_str("{}");
        }

        let new_depth = depth + 1;
        let indent = Self::INDENT.repeat(new_depth);
        let closing_indent = Self::INDENT.repeat(depth);

        w.write_str("{\n")?;

        let mut first = true;
        for (key, val) in obj {
            if !first {
                w.write_str(",\n")?;
            }
            w.write_str(&indent)?;
            Self::write_string(key, w)?;
            w.write_str(": ")?;
            Self::write_value_pretty(val, w, new_depth)?;
            first = false;
        }

        write!(w, "\n{}", closing_indent)?;
        w.write_char('}')
    }
}
