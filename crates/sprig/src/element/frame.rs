use super::{Arg, ArgReader, Attributes, ElementKind, Variant, VariantTag};
use crate::{color::Color, error::Result};

/// A plain container. Draws its background and border and nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame;

impl Frame {
    /// Typed initializer.
    pub fn create(
        &mut self,
        attrs: &mut Attributes,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) {
        attrs.place(x, y, width, height);
        attrs.background_color = color;
    }
}

impl Variant for Frame {
    const TAG: VariantTag = VariantTag::Frame;

    fn construct(&mut self, attrs: &mut Attributes, args: &[Arg]) -> Result<()> {
        let mut r = ArgReader::new(Self::TAG, args);
        let x = r.number_or("x", 0.0)?;
        let y = r.number_or("y", 0.0)?;
        let width = r.number_or("width", 0.0)?;
        let height = r.number_or("height", 0.0)?;
        let color = r.color_or("color", Color::WHITE)?;
        r.finish()?;
        self.create(attrs, x, y, width, height, color);
        Ok(())
    }

    fn project(kind: &ElementKind) -> Option<&Self> {
        match kind {
            ElementKind::Frame(v) => Some(v),
            _ => None,
        }
    }

    fn project_mut(kind: &mut ElementKind) -> Option<&mut Self> {
        match kind {
            ElementKind::Frame(v) => Some(v),
            _ => None,
        }
    }
}
