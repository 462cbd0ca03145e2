//! Dynamically-typed construction arguments.

use super::VariantTag;
use crate::{
    color::Color,
    error::{Error, Result},
};

/// A single construction argument.
///
/// Scripts hand arguments over as loosely typed values; each variant's
/// initializer checks their arity and shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value.
    Str(String),
    /// Boolean value.
    Bool(bool),
    /// Color value.
    Color(Color),
}

impl Arg {
    /// Short name of the argument's type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Float(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Color(_) => "color",
        }
    }
}

impl From<i32> for Arg {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Arg {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for Arg {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<bool> for Arg {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Color> for Arg {
    fn from(v: Color) -> Self {
        Self::Color(v)
    }
}

/// Sequential reader over an argument list, producing `InvalidArgument`
/// errors that name the variant and the offending position.
pub(super) struct ArgReader<'a> {
    /// Variant being constructed.
    tag: VariantTag,
    /// Full argument list.
    args: &'a [Arg],
    /// Index of the next unread argument.
    pos: usize,
}

impl<'a> ArgReader<'a> {
    /// Start reading `args` for `tag`.
    pub(super) fn new(tag: VariantTag, args: &'a [Arg]) -> Self {
        Self { tag, args, pos: 0 }
    }

    /// Take the next argument, if any.
    fn next(&mut self) -> Option<(usize, &'a Arg)> {
        let arg = self.args.get(self.pos)?;
        self.pos += 1;
        Some((self.pos, arg))
    }

    /// Build an error for argument number `n`.
    fn mismatch(&self, n: usize, what: &str, expected: &str, got: &Arg) -> Error {
        Error::InvalidArgument(format!(
            "{} argument {n} ({what}): expected {expected}, got {}",
            self.tag,
            got.type_name()
        ))
    }

    /// Read an optional number.
    pub(super) fn number_or(&mut self, what: &str, default: f32) -> Result<f32> {
        match self.next() {
            None => Ok(default),
            Some((_, Arg::Int(v))) => Ok(*v as f32),
            Some((_, Arg::Float(v))) => Ok(*v as f32),
            Some((n, other)) => Err(self.mismatch(n, what, "number", other)),
        }
    }

    /// Read an optional color. Strings are parsed as hex or palette names.
    pub(super) fn color_or(&mut self, what: &str, default: Color) -> Result<Color> {
        match self.next() {
            None => Ok(default),
            Some((_, Arg::Color(c))) => Ok(*c),
            Some((_, Arg::Str(s))) => Color::parse(s),
            Some((n, other)) => Err(self.mismatch(n, what, "color", other)),
        }
    }

    /// Read a required string.
    pub(super) fn string(&mut self, what: &str) -> Result<String> {
        match self.next() {
            None => Err(Error::InvalidArgument(format!(
                "{} requires argument {} ({what})",
                self.tag,
                self.pos + 1
            ))),
            Some((_, Arg::Str(s))) => Ok(s.clone()),
            Some((n, other)) => Err(self.mismatch(n, what, "string", other)),
        }
    }

    /// Fail if unread arguments remain.
    pub(super) fn finish(self) -> Result<()> {
        if self.pos < self.args.len() {
            return Err(Error::InvalidArgument(format!(
                "{} takes at most {} arguments, got {}",
                self.tag,
                self.pos,
                self.args.len()
            )));
        }
        Ok(())
    }
}
