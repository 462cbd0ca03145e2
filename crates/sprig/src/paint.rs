//! The drawing boundary between the element tree and a rendering backend.

use sprig_geom::{Matrix, Vec2};

use crate::{
    color::Color,
    error::Result,
    registry::{ElementId, UiEngine},
};

/// Anchor for a text draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// The origin is the top-left corner of the text.
    TopLeft,
    /// The origin is the center of the text.
    Center,
}

/// The trait implemented by rendering collaborators.
///
/// All geometry is given in the element's local space: the rectangle spans
/// `(0, 0)` to `size`, and `world` maps local space to screen space. Colors
/// arrive with transparency already applied.
pub trait Painter {
    /// Fill a rectangle.
    fn fill_rect(&mut self, world: &Matrix, size: Vec2, color: Color) -> Result<()>;
    /// Stroke the outline of a rectangle.
    fn stroke_rect(&mut self, world: &Matrix, size: Vec2, thickness: f32, color: Color)
    -> Result<()>;
    /// Fill a rectangle with rounded corners. `roundness` is in `0.0..=1.0`.
    fn fill_rounded_rect(
        &mut self,
        world: &Matrix,
        size: Vec2,
        roundness: f32,
        color: Color,
    ) -> Result<()>;
    /// Draw a line of text anchored at `origin`.
    fn text(
        &mut self,
        world: &Matrix,
        origin: Vec2,
        text: &str,
        font_size: f32,
        color: Color,
        align: TextAlign,
    ) -> Result<()>;
}

/// Paint every root and its visible descendants.
///
/// Roots are painted in z-order, as are the children of each element; equal
/// z-indices keep insertion order. An invisible element hides its subtree.
pub fn paint_tree(ui: &UiEngine, painter: &mut dyn Painter) -> Result<()> {
    for root in ui.roots_in_paint_order() {
        paint_node(ui, root, &Matrix::identity(), painter)?;
    }
    Ok(())
}

/// Paint a node and recurse into its children.
fn paint_node(
    ui: &UiEngine,
    id: ElementId,
    parent_world: &Matrix,
    painter: &mut dyn Painter,
) -> Result<()> {
    let element = ui.element(id)?;
    if !element.attrs.visible {
        return Ok(());
    }
    let world = *parent_world * element.attrs.transform.compose();
    element.draw(&world, painter)?;
    for child in ui.children_in_paint_order(id)? {
        paint_node(ui, child, &world, painter)?;
    }
    Ok(())
}
