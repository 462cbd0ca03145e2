//! A painter that describes draw calls as text.

use sprig::{
    Color, Painter, Result, TextAlign,
    geom::{Matrix, Vec2},
};

/// Collects one line of text per draw call.
#[derive(Debug, Default)]
pub struct TextPainter {
    /// Rendered lines.
    pub lines: Vec<String>,
}

/// Format the screen-space origin and scale of a world matrix.
fn place(world: &Matrix, local: Vec2) -> String {
    let p = world.apply(local);
    format!("@({}, {})", p.x, p.y)
}

impl Painter for TextPainter {
    fn fill_rect(&mut self, world: &Matrix, size: Vec2, color: Color) -> Result<()> {
        self.lines.push(format!(
            "fill {} {}x{} {color}",
            place(world, Vec2::ZERO),
            size.x,
            size.y
        ));
        Ok(())
    }

    fn stroke_rect(
        &mut self,
        world: &Matrix,
        size: Vec2,
        thickness: f32,
        color: Color,
    ) -> Result<()> {
        self.lines.push(format!(
            "stroke {} {}x{} {thickness}px {color}",
            place(world, Vec2::ZERO),
            size.x,
            size.y
        ));
        Ok(())
    }

    fn fill_rounded_rect(
        &mut self,
        world: &Matrix,
        size: Vec2,
        roundness: f32,
        color: Color,
    ) -> Result<()> {
        self.lines.push(format!(
            "rounded {} {}x{} r{roundness} {color}",
            place(world, Vec2::ZERO),
            size.x,
            size.y
        ));
        Ok(())
    }

    fn text(
        &mut self,
        world: &Matrix,
        origin: Vec2,
        text: &str,
        font_size: f32,
        color: Color,
        align: TextAlign,
    ) -> Result<()> {
        let anchor = match align {
            TextAlign::TopLeft => "top-left",
            TextAlign::Center => "center",
        };
        self.lines.push(format!(
            "text {} {anchor} {font_size}pt {color} {text:?}",
            place(world, origin)
        ));
        Ok(())
    }
}
