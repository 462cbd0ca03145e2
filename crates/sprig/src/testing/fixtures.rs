use crate::{
    color::Color,
    element::{Button, Frame, TextLabel},
    error::Result,
    registry::{ElementId, UiEngine},
};

/// Ids of the elements built by [`sample_tree`].
#[derive(Debug, Clone, Copy)]
pub struct SampleTree {
    /// The single root, a 640x480 frame.
    pub root: ElementId,
    /// A button at (200, 200) under the root.
    pub button: ElementId,
    /// A label at (10, 10) under the root.
    pub label: ElementId,
    /// A small frame nested inside the button.
    pub badge: ElementId,
}

/// Build a small attached tree:
///
/// ```text
/// root (Frame)
/// ├── button (Button, caption "ok")
/// │   └── badge (Frame)
/// └── label (TextLabel, "hello")
/// ```
pub fn sample_tree(ui: &mut UiEngine) -> Result<SampleTree> {
    let root = ui.create(Frame);
    ui.element_mut(root)?.attrs.place(0.0, 0.0, 640.0, 480.0);
    ui.element_mut(root)?.attrs.name = "root".into();

    let button = ui.create(Button {
        text: "ok".into(),
        ..Button::default()
    });
    if let Some(b) = ui.element_mut(button)?.variant_mut::<Button>() {
        b.roundness = 0.2;
    }
    let e = ui.element_mut(button)?;
    e.attrs.place(200.0, 200.0, 100.0, 100.0);
    e.attrs.border_size_pixel = 1;

    let label = ui.create(TextLabel {
        text: "hello".into(),
        ..TextLabel::default()
    });
    ui.element_mut(label)?.attrs.place(10.0, 10.0, 80.0, 20.0);

    let badge = ui.create(Frame);
    let e = ui.element_mut(badge)?;
    e.attrs.place(90.0, -10.0, 20.0, 20.0);
    e.attrs.background_color = Color::RED;

    ui.add_element(root)?;
    ui.add_child(root, button)?;
    ui.add_child(button, badge)?;
    ui.add_child(root, label)?;
    Ok(SampleTree {
        root,
        button,
        label,
        badge,
    })
}
