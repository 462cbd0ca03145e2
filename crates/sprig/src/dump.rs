//! Human-readable rendering of the element tree, for shells and debugging.

use std::io::Write;

use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::{
    element::ElementKind,
    error::Result,
    registry::{ElementId, UiEngine},
};

/// Render every root and its descendants as indented plain text.
pub fn dump(ui: &UiEngine) -> Result<String> {
    render(ui, Buffer::no_color())
}

/// Like [`dump`], with ANSI color escapes.
pub fn dump_ansi(ui: &UiEngine) -> Result<String> {
    render(ui, Buffer::ansi())
}

/// Write all roots into `buffer` and return its contents.
fn render(ui: &UiEngine, mut buffer: Buffer) -> Result<String> {
    for root in ui.roots() {
        dump_node(&mut buffer, ui, *root, 0)?;
    }
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// Write an indented, colored label followed by a value.
fn write_field(buffer: &mut Buffer, indent: &str, label: &str, value: &str) -> Result<()> {
    write!(buffer, "{indent}  ")?;
    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(buffer, "{label}")?;
    buffer.reset()?;
    writeln!(buffer, " {value}")?;
    Ok(())
}

/// Walk an element subtree and emit formatted output.
fn dump_node(buffer: &mut Buffer, ui: &UiEngine, id: ElementId, level: usize) -> Result<()> {
    let element = ui.element(id)?;
    let attrs = &element.attrs;
    let indent = "    ".repeat(level);

    write!(buffer, "{indent}")?;
    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(buffer, "{} {:?}", element.tag(), attrs.name)?;
    buffer.reset()?;

    let mut indicators = Vec::new();
    if !attrs.visible {
        indicators.push("hidden");
    }
    if !attrs.active {
        indicators.push("inactive");
    }
    if !indicators.is_empty() {
        buffer.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(buffer, " {}", indicators.join(", "))?;
        buffer.reset()?;
    }
    writeln!(buffer)?;

    let t = &attrs.transform;
    write_field(
        buffer,
        &indent,
        "pos:",
        &format!("({}, {})", t.position.x, t.position.y),
    )?;
    write_field(
        buffer,
        &indent,
        "size:",
        &format!("{} × {}", attrs.size.x, attrs.size.y),
    )?;
    if t.rotation() != 0.0 || t.scale.x != 1.0 || t.scale.y != 1.0 {
        write_field(
            buffer,
            &indent,
            "transform:",
            &format!(
                "rotation {}°, scale ({}, {})",
                t.rotation_degrees(),
                t.scale.x,
                t.scale.y
            ),
        )?;
    }
    write_field(buffer, &indent, "color:", &attrs.background_color.to_string())?;
    if attrs.z_index != 0 {
        write_field(buffer, &indent, "z:", &attrs.z_index.to_string())?;
    }
    match element.kind() {
        ElementKind::Frame(_) => {}
        ElementKind::Button(b) => {
            if !b.text.is_empty() {
                write_field(buffer, &indent, "text:", &format!("{:?}", b.text))?;
            }
        }
        ElementKind::TextLabel(l) => {
            write_field(buffer, &indent, "text:", &format!("{:?}", l.text))?;
        }
    }

    for child in element.children() {
        dump_node(buffer, ui, *child, level + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        element::{Button, Frame, TextLabel},
        error::Result,
    };

    #[test]
    fn dump_shows_hierarchy() -> Result<()> {
        let mut ui = UiEngine::new();
        let root = ui.create(Frame);
        let btn = ui.create(Button {
            text: "go".into(),
            ..Button::default()
        });
        let label = ui.create(TextLabel::default());
        ui.add_element(root)?;
        ui.add_child(root, btn)?;
        ui.add_child(btn, label)?;
        ui.element_mut(label)?.attrs.visible = false;

        let out = dump(&ui)?;
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Frame \"Frame\"");
        assert!(out.contains("    Button \"Button\"\n"));
        assert!(out.contains("        TextLabel \"TextLabel\" hidden\n"));
        assert!(out.contains("text: \"go\""));
        assert!(!out.contains('\u{1b}'));
        assert!(dump_ansi(&ui)?.contains('\u{1b}'));
        Ok(())
    }

    #[test]
    fn empty_tree_dumps_nothing() -> Result<()> {
        assert_eq!(dump(&UiEngine::new())?, "");
        Ok(())
    }
}
