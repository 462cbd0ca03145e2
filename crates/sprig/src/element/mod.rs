//! Element attributes and the closed set of element variants.
//!
//! Every element pairs a shared [`Attributes`] block with an
//! [`ElementKind`] payload. The payload fixes the element's [`VariantTag`]
//! for its whole lifetime, and all per-variant behavior is reached by an
//! exhaustive `match` over [`ElementKind`].

use std::{fmt, str::FromStr};

use sprig_geom::{Matrix, Transform, Vec2};

/// Dynamically-typed construction arguments.
mod args;
/// Button variant.
mod button;
/// Frame variant.
mod frame;
/// Text label variant.
mod text_label;

pub use args::Arg;
use args::ArgReader;
pub use button::Button;
pub use frame::Frame;
pub use text_label::TextLabel;

use crate::{
    color::Color,
    error::{Error, Result},
    paint::{Painter, TextAlign},
    registry::ElementId,
};

/// Discriminator naming the concrete variant of an element.
///
/// `None` is the sentinel for names that match no variant. No element ever
/// carries it; dispatch on it records a diagnostic and constructs nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantTag {
    /// No variant.
    None,
    /// Plain container.
    Frame,
    /// Clickable box with an optional caption.
    Button,
    /// Box displaying a line of text.
    TextLabel,
}

impl VariantTag {
    /// Every tag that names a real variant.
    pub const ALL: [Self; 3] = [Self::Frame, Self::Button, Self::TextLabel];

    /// The canonical name of the tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Frame => "Frame",
            Self::Button => "Button",
            Self::TextLabel => "TextLabel",
        }
    }

    /// Resolve a variant name, case-insensitively. Unknown names resolve to
    /// [`VariantTag::None`].
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
            .unwrap_or(Self::None)
    }
}

impl FromStr for VariantTag {
    type Err = Error;

    /// Strict variant of [`VariantTag::from_name`]: unknown names, and the
    /// sentinel itself, are an error.
    fn from_str(s: &str) -> Result<Self> {
        match Self::from_name(s) {
            Self::None => Err(Error::UnknownVariant(s.to_string())),
            tag => Ok(tag),
        }
    }
}

impl fmt::Display for VariantTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Behavior shared by all element variants.
pub trait Variant: Default {
    /// The tag of this variant.
    const TAG: VariantTag;

    /// Variant-specific initializer. Reads `args` and writes the shared
    /// attributes along with the variant's own state.
    fn construct(&mut self, attrs: &mut Attributes, args: &[Arg]) -> Result<()>;

    /// Issue draw calls for this element. The default draws the background
    /// box and border, which is all a container needs.
    fn draw(&self, attrs: &Attributes, world: &Matrix, painter: &mut dyn Painter) -> Result<()> {
        draw_box(attrs, world, painter)
    }

    /// Borrow this variant out of a kind, if the kind holds it.
    fn project(kind: &ElementKind) -> Option<&Self>;

    /// Mutably borrow this variant out of a kind, if the kind holds it.
    fn project_mut(kind: &mut ElementKind) -> Option<&mut Self>;
}

/// Variant payload of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// A [`Frame`].
    Frame(Frame),
    /// A [`Button`].
    Button(Button),
    /// A [`TextLabel`].
    TextLabel(TextLabel),
}

impl ElementKind {
    /// Default-initialized payload for a tag, or `None` for the sentinel.
    pub fn for_tag(tag: VariantTag) -> Option<Self> {
        match tag {
            VariantTag::None => None,
            VariantTag::Frame => Some(Self::Frame(Frame)),
            VariantTag::Button => Some(Self::Button(Button::default())),
            VariantTag::TextLabel => Some(Self::TextLabel(TextLabel::default())),
        }
    }

    /// The tag of the held variant.
    pub fn tag(&self) -> VariantTag {
        match self {
            Self::Frame(_) => Frame::TAG,
            Self::Button(_) => Button::TAG,
            Self::TextLabel(_) => TextLabel::TAG,
        }
    }

    /// Dispatch to the held variant's draw implementation.
    fn draw(&self, attrs: &Attributes, world: &Matrix, painter: &mut dyn Painter) -> Result<()> {
        match self {
            Self::Frame(v) => v.draw(attrs, world, painter),
            Self::Button(v) => v.draw(attrs, world, painter),
            Self::TextLabel(v) => v.draw(attrs, world, painter),
        }
    }
}

impl From<Frame> for ElementKind {
    fn from(v: Frame) -> Self {
        Self::Frame(v)
    }
}

impl From<Button> for ElementKind {
    fn from(v: Button) -> Self {
        Self::Button(v)
    }
}

impl From<TextLabel> for ElementKind {
    fn from(v: TextLabel) -> Self {
        Self::TextLabel(v)
    }
}

/// Layout and paint attributes shared by every variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    /// Name used by lookups. Defaults to the variant name.
    pub name: String,
    /// Placement relative to the parent.
    pub transform: Transform,
    /// Width and height in local units.
    pub size: Vec2,
    /// Whether the element accepts input. Stored for the shell; painting
    /// ignores it.
    pub active: bool,
    /// Invisible elements are skipped along with their whole subtree.
    pub visible: bool,
    /// Fill color of the background box.
    pub background_color: Color,
    /// Stroke color of the border.
    pub border_color: Color,
    /// Border thickness in pixels. Zero disables the border.
    pub border_size_pixel: i32,
    /// Paint order among siblings, lowest first.
    pub z_index: i32,
    /// Background transparency percentage, clamped to `0..=100`.
    background_transparency: i32,
    /// Whole-element transparency percentage, clamped to `0..=100`.
    transparency: i32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            name: String::new(),
            transform: Transform::default(),
            size: Vec2::ZERO,
            active: true,
            visible: true,
            background_color: Color::WHITE,
            border_color: Color::BLACK,
            border_size_pixel: 0,
            z_index: 0,
            background_transparency: 0,
            transparency: 0,
        }
    }
}

impl Attributes {
    /// Set position and size in one go, as every initializer does.
    pub fn place(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.transform.position = Vec2::new(x, y);
        self.size = Vec2::new(width, height);
    }

    /// Background transparency percentage.
    pub fn background_transparency(&self) -> i32 {
        self.background_transparency
    }

    /// Set background transparency, clamped to `0..=100`.
    pub fn set_background_transparency(&mut self, v: i32) {
        self.background_transparency = v.clamp(0, 100);
    }

    /// Whole-element transparency percentage.
    pub fn transparency(&self) -> i32 {
        self.transparency
    }

    /// Set whole-element transparency, clamped to `0..=100`.
    pub fn set_transparency(&mut self, v: i32) {
        self.transparency = v.clamp(0, 100);
    }

    /// Apply whole-element transparency to a color.
    pub fn fade(&self, c: Color) -> Color {
        c.faded(self.transparency)
    }
}

/// Draw the background box and border of an element.
pub fn draw_box(attrs: &Attributes, world: &Matrix, painter: &mut dyn Painter) -> Result<()> {
    let fill = attrs.fade(attrs.background_color.faded(attrs.background_transparency));
    if !fill.is_invisible() {
        painter.fill_rect(world, attrs.size, fill)?;
    }
    draw_border(attrs, world, painter)
}

/// Draw the border of an element, if it has one.
pub fn draw_border(attrs: &Attributes, world: &Matrix, painter: &mut dyn Painter) -> Result<()> {
    let stroke = attrs.fade(attrs.border_color);
    if attrs.border_size_pixel > 0 && !stroke.is_invisible() {
        painter.stroke_rect(world, attrs.size, attrs.border_size_pixel as f32, stroke)?;
    }
    Ok(())
}

/// Draw a line of text if it is non-empty and visible.
pub(crate) fn draw_text(
    attrs: &Attributes,
    world: &Matrix,
    painter: &mut dyn Painter,
    text: &str,
    font_size: f32,
    color: Color,
    align: TextAlign,
) -> Result<()> {
    let color = attrs.fade(color);
    if text.is_empty() || color.is_invisible() {
        return Ok(());
    }
    let origin = match align {
        TextAlign::TopLeft => Vec2::ZERO,
        TextAlign::Center => attrs.size * 0.5,
    };
    painter.text(world, origin, text, font_size, color, align)
}

/// A node in the element tree.
///
/// Elements live in a [`UiEngine`](crate::UiEngine) arena. Tree links are
/// only changed through the registry, so `parent` and `children` stay
/// consistent with each other.
#[derive(Debug, Clone)]
pub struct Element {
    /// Shared attributes.
    pub attrs: Attributes,
    /// Variant payload. Never replaced after creation.
    pub(crate) kind: ElementKind,
    /// Non-owning link to the owning parent.
    pub(crate) parent: Option<ElementId>,
    /// Owned children in insertion order.
    pub(crate) children: Vec<ElementId>,
}

impl Element {
    /// Create an unattached element holding `kind`, named after its variant.
    pub fn new(kind: impl Into<ElementKind>) -> Self {
        let kind = kind.into();
        let attrs = Attributes {
            name: kind.tag().name().to_string(),
            ..Attributes::default()
        };
        Self {
            attrs,
            kind,
            parent: None,
            children: Vec::new(),
        }
    }

    /// The variant tag, fixed at creation.
    pub fn tag(&self) -> VariantTag {
        self.kind.tag()
    }

    /// The variant payload.
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Borrow the payload as a specific variant.
    pub fn variant<V: Variant>(&self) -> Option<&V> {
        V::project(&self.kind)
    }

    /// Mutably borrow the payload as a specific variant.
    pub fn variant_mut<V: Variant>(&mut self) -> Option<&mut V> {
        V::project_mut(&mut self.kind)
    }

    /// The owning parent, if attached under another element.
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Text carried by the element, for variants that have any.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Frame(_) => None,
            ElementKind::Button(b) => Some(&b.text),
            ElementKind::TextLabel(t) => Some(&t.text),
        }
    }

    /// Replace the element's text. Fails for variants without text.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        match &mut self.kind {
            ElementKind::Frame(_) => Err(Error::InvalidArgument(format!(
                "{} has no text",
                VariantTag::Frame
            ))),
            ElementKind::Button(b) => {
                b.text = text.into();
                Ok(())
            }
            ElementKind::TextLabel(t) => {
                t.text = text.into();
                Ok(())
            }
        }
    }

    /// Issue draw calls for this element under the composed world matrix.
    pub fn draw(&self, world: &Matrix, painter: &mut dyn Painter) -> Result<()> {
        self.kind.draw(&self.attrs, world, painter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_names_round_trip() {
        for tag in VariantTag::ALL {
            assert_eq!(VariantTag::from_name(tag.name()), tag);
        }
        assert_eq!(VariantTag::from_name("textlabel"), VariantTag::TextLabel);
        assert_eq!(VariantTag::from_name("Slider"), VariantTag::None);
        assert_eq!(VariantTag::from_name("None"), VariantTag::None);
    }

    #[test]
    fn strict_parse_rejects_unknown_names() {
        assert_eq!("button".parse::<VariantTag>(), Ok(VariantTag::Button));
        assert_eq!(
            "Slider".parse::<VariantTag>(),
            Err(Error::UnknownVariant("Slider".into()))
        );
        assert!("None".parse::<VariantTag>().is_err());
    }

    #[test]
    fn every_tag_has_a_payload() {
        for tag in VariantTag::ALL {
            let kind = ElementKind::for_tag(tag).unwrap();
            assert_eq!(kind.tag(), tag);
        }
        assert!(ElementKind::for_tag(VariantTag::None).is_none());
    }

    #[test]
    fn new_elements_are_unattached() {
        let e = Element::new(Button::default());
        assert_eq!(e.tag(), VariantTag::Button);
        assert_eq!(e.attrs.name, "Button");
        assert!(e.parent().is_none());
        assert!(e.children().is_empty());
        assert!(e.variant::<Button>().is_some());
        assert!(e.variant::<Frame>().is_none());
    }

    #[test]
    fn text_access() -> Result<()> {
        let mut label = Element::new(TextLabel::default());
        label.set_text("hi")?;
        assert_eq!(label.text(), Some("hi"));

        let mut frame = Element::new(Frame);
        assert_eq!(frame.text(), None);
        assert!(matches!(frame.set_text("x"), Err(Error::InvalidArgument(_))));
        Ok(())
    }

    #[test]
    fn transparency_is_clamped() {
        let mut a = Attributes::default();
        a.set_transparency(150);
        assert_eq!(a.transparency(), 100);
        a.set_background_transparency(-3);
        assert_eq!(a.background_transparency(), 0);
    }
}
