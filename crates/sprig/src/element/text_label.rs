use sprig_geom::Matrix;

use super::{Arg, ArgReader, Attributes, ElementKind, Variant, VariantTag, draw_box, draw_text};
use crate::{
    color::Color,
    error::Result,
    paint::{Painter, TextAlign},
};

/// A box displaying a line of text at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    /// Displayed text.
    pub text: String,
    /// Text color.
    pub text_color: Color,
    /// Text size.
    pub font_size: f32,
}

impl Default for TextLabel {
    fn default() -> Self {
        Self {
            text: String::new(),
            text_color: Color::BLACK,
            font_size: 20.0,
        }
    }
}

impl TextLabel {
    /// Typed initializer.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        &mut self,
        attrs: &mut Attributes,
        text: impl Into<String>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) {
        attrs.place(x, y, width, height);
        self.text = text.into();
        self.text_color = color;
    }
}

impl Variant for TextLabel {
    const TAG: VariantTag = VariantTag::TextLabel;

    fn construct(&mut self, attrs: &mut Attributes, args: &[Arg]) -> Result<()> {
        let mut r = ArgReader::new(Self::TAG, args);
        let text = r.string("text")?;
        let x = r.number_or("x", 0.0)?;
        let y = r.number_or("y", 0.0)?;
        let width = r.number_or("width", 0.0)?;
        let height = r.number_or("height", 0.0)?;
        let color = r.color_or("color", Color::BLACK)?;
        r.finish()?;
        self.create(attrs, text, x, y, width, height, color);
        Ok(())
    }

    fn draw(&self, attrs: &Attributes, world: &Matrix, painter: &mut dyn Painter) -> Result<()> {
        draw_box(attrs, world, painter)?;
        draw_text(
            attrs,
            world,
            painter,
            &self.text,
            self.font_size,
            self.text_color,
            TextAlign::TopLeft,
        )
    }

    fn project(kind: &ElementKind) -> Option<&Self> {
        match kind {
            ElementKind::TextLabel(v) => Some(v),
            _ => None,
        }
    }

    fn project_mut(kind: &mut ElementKind) -> Option<&mut Self> {
        match kind {
            ElementKind::TextLabel(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn text_is_required() {
        let mut attrs = Attributes::default();
        let err = TextLabel::default().construct(&mut attrs, &[Arg::from(1)]);
        assert!(matches!(err, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn construct_sets_text_and_color() -> Result<()> {
        let mut attrs = Attributes::default();
        let mut label = TextLabel::default();
        label.construct(
            &mut attrs,
            &[
                Arg::from("hello"),
                Arg::from(1.5f64),
                Arg::from(2),
                Arg::from(30),
                Arg::from(40),
                Arg::from("red"),
            ],
        )?;
        assert_eq!(label.text, "hello");
        assert_eq!(label.text_color, Color::RED);
        assert_eq!(attrs.size.x, 30.0);
        assert_eq!(attrs.transform.position.x, 1.5);
        Ok(())
    }
}
