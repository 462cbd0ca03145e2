use sprig_geom::Matrix;

use super::{
    Arg, ArgReader, Attributes, ElementKind, Variant, VariantTag, draw_border, draw_text,
};
use crate::{
    color::Color,
    error::Result,
    paint::{Painter, TextAlign},
};

/// A filled box with optional rounded corners and a centered caption.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    /// Corner roundness in `0.0..=1.0`. Zero draws square corners.
    pub roundness: f32,
    /// Caption, drawn centered. Empty by default.
    pub text: String,
    /// Caption color.
    pub text_color: Color,
    /// Caption size.
    pub font_size: f32,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            roundness: 0.0,
            text: String::new(),
            text_color: Color::BLACK,
            font_size: 20.0,
        }
    }
}

impl Button {
    /// Typed initializer: position, size and fill color. Resets roundness.
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
        self.roundness = 0.0;
    }
}

impl Variant for Button {
    const TAG: VariantTag = VariantTag::Button;

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

    fn draw(&self, attrs: &Attributes, world: &Matrix, painter: &mut dyn Painter) -> Result<()> {
        let fill = attrs.fade(attrs.background_color.faded(attrs.background_transparency()));
        if !fill.is_invisible() {
            if self.roundness > 0.0 {
                painter.fill_rounded_rect(world, attrs.size, self.roundness, fill)?;
            } else {
                painter.fill_rect(world, attrs.size, fill)?;
            }
        }
        draw_border(attrs, world, painter)?;
        draw_text(
            attrs,
            world,
            painter,
            &self.text,
            self.font_size,
            self.text_color,
            TextAlign::Center,
        )
    }

    fn project(kind: &ElementKind) -> Option<&Self> {
        match kind {
            ElementKind::Button(v) => Some(v),
            _ => None,
        }
    }

    fn project_mut(kind: &mut ElementKind) -> Option<&mut Self> {
        match kind {
            ElementKind::Button(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_matches_typed_create() -> Result<()> {
        let mut typed_attrs = Attributes::default();
        let mut typed = Button {
            roundness: 0.5,
            ..Button::default()
        };
        typed.create(&mut typed_attrs, 200.0, 200.0, 100.0, 100.0, Color::WHITE);

        let mut attrs = Attributes::default();
        let mut b = Button {
            roundness: 0.5,
            ..Button::default()
        };
        b.construct(
            &mut attrs,
            &[
                Arg::from(200),
                Arg::from(200),
                Arg::from(100),
                Arg::from(100),
                Arg::from(Color::WHITE),
            ],
        )?;
        assert_eq!(attrs, typed_attrs);
        assert_eq!(b, typed);
        assert_eq!(b.roundness, 0.0);
        Ok(())
    }

    #[test]
    fn construct_defaults() -> Result<()> {
        let mut attrs = Attributes {
            background_color: Color::RED,
            ..Attributes::default()
        };
        Button::default().construct(&mut attrs, &[])?;
        assert_eq!(attrs.background_color, Color::WHITE);
        assert!(attrs.size.is_zero());
        assert!(attrs.transform.position.is_zero());
        Ok(())
    }
}
