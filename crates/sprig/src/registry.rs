//! Element ownership, tree mutation and construction dispatch.

#[cfg(debug_assertions)]
use std::collections::HashSet;
use std::{
    mem,
    sync::atomic::{AtomicU64, Ordering},
};

use slotmap::{SlotMap, new_key_type};
use tracing::{debug, warn};

use crate::{
    element::{Arg, Element, ElementKind, Variant, VariantTag},
    error::{Error, Result},
    paint::{self, Painter},
};

new_key_type! {
    /// Opaque identifier for an element stored in a [`UiEngine`] arena.
    pub struct ElementId;
}

/// Diagnostics kept between drains. Older entries are dropped first.
pub const DIAGNOSTIC_LIMIT: usize = 256;

/// Source of engine identities.
static NEXT_ENGINE: AtomicU64 = AtomicU64::new(1);

/// Identity of a [`UiEngine`], unique within the process. Element ids are
/// only meaningful together with the engine that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineId(u64);

impl EngineId {
    /// Allocate a fresh identity.
    fn next() -> Self {
        Self(NEXT_ENGINE.fetch_add(1, Ordering::Relaxed))
    }
}

/// Category of a recorded diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Dispatch met a tag or name with no variant behind it.
    UnknownVariant,
}

/// A recoverable problem noted by the registry instead of being returned
/// as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Category.
    pub kind: DiagnosticKind,
    /// Human-readable detail.
    pub message: String,
}

/// The element registry: owns every live element and the ordered list of
/// roots.
///
/// Elements are created unattached. They become reachable from the roots via
/// [`UiEngine::add_element`] or [`UiEngine::add_child`], and are freed with
/// their subtree by [`UiEngine::destroy`].
#[derive(Debug)]
pub struct UiEngine {
    /// Identity checked by script handles.
    engine: EngineId,
    /// Element storage arena.
    nodes: SlotMap<ElementId, Element>,
    /// Top-level elements, in insertion order.
    roots: Vec<ElementId>,
    /// Recorded diagnostics, oldest first.
    diagnostics: Vec<Diagnostic>,
    /// Set when the tree changed since the shell last painted.
    redraw_requested: bool,
}

impl Default for UiEngine {
    fn default() -> Self {
        Self {
            engine: EngineId::next(),
            nodes: SlotMap::with_key(),
            roots: Vec::new(),
            diagnostics: Vec::new(),
            redraw_requested: false,
        }
    }
}

impl UiEngine {
    /// Construct an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// This engine's identity.
    pub fn engine_id(&self) -> EngineId {
        self.engine
    }

    /// Number of live elements, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Return true if no elements are alive.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return true if `id` names a live element.
    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Borrow an element.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(id)
    }

    /// Mutably borrow an element's attributes and payload. Tree links are not
    /// reachable through the returned reference. Marks the tree for redraw.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        let e = self.nodes.get_mut(id)?;
        self.redraw_requested = true;
        Some(e)
    }

    /// Borrow an element, failing if it does not exist.
    pub fn element(&self, id: ElementId) -> Result<&Element> {
        self.nodes.get(id).ok_or(Error::NodeNotFound(id))
    }

    /// Mutably borrow an element, failing if it does not exist.
    pub fn element_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.get_mut(id).ok_or(Error::NodeNotFound(id))
    }

    /// Borrow an element's payload as a specific variant.
    pub fn variant_mut<V: Variant>(&mut self, id: ElementId) -> Result<&mut V> {
        let e = self.element_mut(id)?;
        let tag = e.tag();
        e.variant_mut::<V>().ok_or_else(|| {
            Error::InvalidArgument(format!("{id:?} is a {tag}, not a {}", V::TAG))
        })
    }

    /// The root sequence.
    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    /// Create an unattached element.
    pub fn create(&mut self, kind: impl Into<ElementKind>) -> ElementId {
        let id = self.nodes.insert(Element::new(kind));
        debug!(?id, "created element");
        id
    }

    /// Append an element to the root sequence. An element that is attached
    /// elsewhere is detached first; an element that is already a root stays
    /// where it is.
    pub fn add_element(&mut self, id: ElementId) -> Result<()> {
        if !self.nodes.contains_key(id) {
            return Err(Error::NodeNotFound(id));
        }
        if self.roots.contains(&id) {
            return Ok(());
        }
        self.unlink(id);
        self.roots.push(id);
        self.redraw_requested = true;
        self.debug_assert_tree_invariants();
        Ok(())
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// A child that already has an owner (another parent, or the root list)
    /// is detached from it first. Attaching an element under itself or under
    /// one of its own descendants fails with [`Error::CycleDetected`].
    pub fn add_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        if !self.nodes.contains_key(parent) {
            return Err(Error::NodeNotFound(parent));
        }
        if !self.nodes.contains_key(child) {
            return Err(Error::NodeNotFound(child));
        }
        if parent == child || self.is_ancestor(child, parent) {
            return Err(Error::CycleDetected { parent, child });
        }

        self.unlink(child);
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }
        debug!(?parent, ?child, "attached element");

        self.redraw_requested = true;
        self.debug_assert_tree_invariants();
        Ok(())
    }

    /// Detach an element from its parent or from the root list. The element
    /// stays alive, unattached.
    pub fn detach(&mut self, id: ElementId) -> Result<()> {
        if !self.nodes.contains_key(id) {
            return Err(Error::NodeNotFound(id));
        }
        if self.unlink(id) {
            self.redraw_requested = true;
        }
        self.debug_assert_tree_invariants();
        Ok(())
    }

    /// Remove an element and all of its descendants from the arena.
    pub fn destroy(&mut self, id: ElementId) -> Result<()> {
        if !self.nodes.contains_key(id) {
            return Err(Error::NodeNotFound(id));
        }
        self.unlink(id);
        let doomed = self.subtree_post_order(id);
        for node_id in &doomed {
            self.nodes.remove(*node_id);
        }
        debug!(?id, count = doomed.len(), "destroyed subtree");
        self.redraw_requested = true;
        self.debug_assert_tree_invariants();
        Ok(())
    }

    /// Remove `id` from whatever owns it. Returns true if it had an owner.
    fn unlink(&mut self, id: ElementId) -> bool {
        let parent = self.nodes.get(id).and_then(|n| n.parent);
        if let Some(parent) = parent {
            if let Some(node) = self.nodes.get_mut(parent) {
                node.children.retain(|c| *c != id);
            }
            if let Some(node) = self.nodes.get_mut(id) {
                node.parent = None;
            }
            return true;
        }
        let before = self.roots.len();
        self.roots.retain(|r| *r != id);
        before != self.roots.len()
    }

    /// Re-run an element's variant initializer with `args`.
    ///
    /// Dispatch is an exhaustive match over the payload, so every variant
    /// reaches its own initializer.
    pub fn construct(&mut self, id: ElementId, args: &[Arg]) -> Result<()> {
        let Element { attrs, kind, .. } = self.element_mut(id)?;
        match kind {
            ElementKind::Frame(v) => v.construct(attrs, args),
            ElementKind::Button(v) => v.construct(attrs, args),
            ElementKind::TextLabel(v) => v.construct(attrs, args),
        }
    }

    /// Create and construct an unattached element from a tag.
    ///
    /// The sentinel [`VariantTag::None`] constructs nothing: a diagnostic is
    /// recorded and `Ok(None)` is returned. Argument errors discard the new
    /// element and are returned to the caller.
    pub fn spawn(&mut self, tag: VariantTag, args: &[Arg]) -> Result<Option<ElementId>> {
        let kind = match tag {
            VariantTag::None => {
                self.diagnose(DiagnosticKind::UnknownVariant, "spawn on variant None".into());
                return Ok(None);
            }
            VariantTag::Frame | VariantTag::Button | VariantTag::TextLabel => {
                ElementKind::for_tag(tag).ok_or_else(|| Error::UnknownVariant(tag.to_string()))?
            }
        };
        let id = self.create(kind);
        if let Err(e) = self.construct(id, args) {
            self.nodes.remove(id);
            return Err(e);
        }
        Ok(Some(id))
    }

    /// Like [`UiEngine::spawn`], resolving the variant by name. Unknown
    /// names record a diagnostic that includes the name.
    pub fn spawn_named(&mut self, name: &str, args: &[Arg]) -> Result<Option<ElementId>> {
        let tag = VariantTag::from_name(name);
        if tag == VariantTag::None {
            self.diagnose(
                DiagnosticKind::UnknownVariant,
                format!("no element variant named {name:?}"),
            );
            return Ok(None);
        }
        self.spawn(tag, args)
    }

    /// Record and log a diagnostic, dropping the oldest one past
    /// [`DIAGNOSTIC_LIMIT`].
    fn diagnose(&mut self, kind: DiagnosticKind, message: String) {
        warn!(?kind, "{message}");
        if self.diagnostics.len() >= DIAGNOSTIC_LIMIT {
            self.diagnostics.remove(0);
        }
        self.diagnostics.push(Diagnostic { kind, message });
    }

    /// Diagnostics recorded since the last drain, at most
    /// [`DIAGNOSTIC_LIMIT`] of them.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drain recorded diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        mem::take(&mut self.diagnostics)
    }

    /// Ask the shell to repaint on its next frame.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Take and clear the redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        mem::replace(&mut self.redraw_requested, false)
    }

    /// Return true if `ancestor` appears in the parent chain of `node`,
    /// including `node` itself.
    pub fn is_ancestor(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(id).and_then(|n| n.parent);
        }
        false
    }

    /// The parent chain of `id`, nearest first.
    pub fn ancestors(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut current = self.nodes.get(id).and_then(|n| n.parent);
        while let Some(p) = current {
            out.push(p);
            current = self.nodes.get(p).and_then(|n| n.parent);
        }
        out
    }

    /// Return true if `id` is a root or has a root in its parent chain.
    pub fn is_attached(&self, id: ElementId) -> bool {
        let top = self.ancestors(id).last().copied().unwrap_or(id);
        self.roots.contains(&top)
    }

    /// Find the first root-reachable element named `name`, in pre-order.
    pub fn find_by_name(&self, name: &str) -> Option<ElementId> {
        self.roots
            .iter()
            .flat_map(|r| self.subtree_pre_order(*r))
            .find(|id| self.nodes.get(*id).is_some_and(|n| n.attrs.name == name))
    }

    /// Children of `id` sorted by z-index, ties in insertion order.
    pub fn children_in_paint_order(&self, id: ElementId) -> Result<Vec<ElementId>> {
        let mut children = self.element(id)?.children.clone();
        self.sort_by_z(&mut children);
        Ok(children)
    }

    /// Roots sorted by z-index, ties in insertion order.
    pub fn roots_in_paint_order(&self) -> Vec<ElementId> {
        let mut roots = self.roots.clone();
        self.sort_by_z(&mut roots);
        roots
    }

    /// Stable sort of ids by their element's z-index.
    fn sort_by_z(&self, ids: &mut [ElementId]) {
        ids.sort_by_key(|id| self.nodes.get(*id).map_or(0, |n| n.attrs.z_index));
    }

    /// Paint the whole tree through `painter`.
    pub fn paint(&self, painter: &mut dyn Painter) -> Result<()> {
        paint::paint_tree(self, painter)
    }

    /// Collect a subtree in pre-order, including the root.
    pub fn subtree_pre_order(&self, root: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(node_id) = stack.pop() {
            let Some(node) = self.nodes.get(node_id) else {
                continue;
            };
            out.push(node_id);
            for child in node.children.iter().rev() {
                stack.push(*child);
            }
        }
        out
    }

    /// Collect a subtree in post-order, including the root.
    fn subtree_post_order(&self, root: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![(root, false)];
        while let Some((node_id, visited)) = stack.pop() {
            let Some(node) = self.nodes.get(node_id) else {
                continue;
            };
            if visited {
                out.push(node_id);
                continue;
            }
            stack.push((node_id, true));
            for child in node.children.iter().rev() {
                stack.push((*child, false));
            }
        }
        out
    }

    /// Assert structural invariants on the element tree in debug builds.
    #[cfg(debug_assertions)]
    fn debug_assert_tree_invariants(&self) {
        let mut seen_roots = HashSet::with_capacity(self.roots.len());
        for root in &self.roots {
            debug_assert!(seen_roots.insert(*root), "duplicate root {root:?}");
            debug_assert!(
                self.nodes.get(*root).is_some_and(|n| n.parent.is_none()),
                "root {root:?} missing or has a parent"
            );
        }
        for (id, node) in self.nodes.iter() {
            self.debug_assert_node_links(id, node);
            debug_assert!(
                !self.parent_chain_has_cycle(id),
                "cycle detected from {id:?}"
            );
        }
    }

    /// Release builds skip the tree checks.
    #[cfg(not(debug_assertions))]
    fn debug_assert_tree_invariants(&self) {}

    /// Assert parent/child link invariants for a specific node in debug builds.
    #[cfg(debug_assertions)]
    fn debug_assert_node_links(&self, id: ElementId, node: &Element) {
        let mut seen = HashSet::with_capacity(node.children.len());
        for child in &node.children {
            debug_assert!(
                seen.insert(*child),
                "duplicate child {child:?} under {id:?}"
            );
            let child_node = self.nodes.get(*child);
            debug_assert!(child_node.is_some(), "child {child:?} missing");
            if let Some(child_node) = child_node {
                debug_assert!(
                    child_node.parent == Some(id),
                    "child {child:?} parent mismatch under {id:?}"
                );
            }
        }
        if let Some(parent) = node.parent {
            let parent_node = self.nodes.get(parent);
            debug_assert!(parent_node.is_some(), "parent {parent:?} missing");
            if let Some(parent_node) = parent_node {
                debug_assert!(
                    parent_node.children.contains(&id),
                    "parent {parent:?} missing child {id:?}"
                );
            }
        }
    }

    /// Return true if a node's parent chain contains a cycle.
    #[cfg(debug_assertions)]
    fn parent_chain_has_cycle(&self, start: ElementId) -> bool {
        let mut seen = HashSet::new();
        let mut current = Some(start);
        while let Some(id) = current {
            if !seen.insert(id) {
                return true;
            }
            current = self.nodes.get(id).and_then(|n| n.parent);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::Color,
        element::{Button, Frame, TextLabel},
    };

    /// Build root -> (a -> a1, b).
    fn tree(ui: &mut UiEngine) -> Result<(ElementId, ElementId, ElementId, ElementId)> {
        let root = ui.create(Frame);
        let a = ui.create(Frame);
        let a1 = ui.create(Button::default());
        let b = ui.create(TextLabel::default());
        ui.add_element(root)?;
        ui.add_child(root, a)?;
        ui.add_child(a, a1)?;
        ui.add_child(root, b)?;
        Ok((root, a, a1, b))
    }

    #[test]
    fn add_child_links_both_ways() -> Result<()> {
        let mut ui = UiEngine::new();
        let (root, a, a1, b) = tree(&mut ui)?;
        assert_eq!(ui.element(a)?.parent(), Some(root));
        assert_eq!(ui.element(root)?.children(), &[a, b]);
        assert_eq!(ui.element(a)?.children(), &[a1]);
        assert_eq!(ui.ancestors(a1), vec![a, root]);
        assert!(ui.is_attached(a1));
        Ok(())
    }

    #[test]
    fn cycles_are_rejected() -> Result<()> {
        let mut ui = UiEngine::new();
        let (root, a, a1, _) = tree(&mut ui)?;
        assert_eq!(
            ui.add_child(a, a),
            Err(Error::CycleDetected { parent: a, child: a })
        );
        assert_eq!(
            ui.add_child(a1, root),
            Err(Error::CycleDetected {
                parent: a1,
                child: root
            })
        );
        // Nothing moved.
        assert_eq!(ui.roots(), &[root]);
        assert_eq!(ui.element(a1)?.parent(), Some(a));
        Ok(())
    }

    #[test]
    fn reparenting_detaches_first() -> Result<()> {
        let mut ui = UiEngine::new();
        let (root, a, a1, b) = tree(&mut ui)?;
        ui.add_child(b, a1)?;
        assert!(ui.element(a)?.children().is_empty());
        assert_eq!(ui.element(b)?.children(), &[a1]);
        assert_eq!(ui.element(a1)?.parent(), Some(b));

        // A root moved under another element leaves the root list.
        let other = ui.create(Frame);
        ui.add_element(other)?;
        ui.add_child(root, other)?;
        assert_eq!(ui.roots(), &[root]);

        // And an attached element promoted to root leaves its parent.
        ui.add_element(a)?;
        assert_eq!(ui.roots(), &[root, a]);
        assert!(ui.element(a)?.parent().is_none());
        assert!(!ui.element(root)?.children().contains(&a));
        Ok(())
    }

    #[test]
    fn add_element_is_idempotent() -> Result<()> {
        let mut ui = UiEngine::new();
        let f = ui.create(Frame);
        ui.add_element(f)?;
        ui.add_element(f)?;
        assert_eq!(ui.roots(), &[f]);
        Ok(())
    }

    #[test]
    fn destroy_removes_subtree() -> Result<()> {
        let mut ui = UiEngine::new();
        let (root, a, a1, b) = tree(&mut ui)?;
        ui.destroy(a)?;
        assert!(!ui.contains(a));
        assert!(!ui.contains(a1));
        assert_eq!(ui.element(root)?.children(), &[b]);
        assert_eq!(ui.destroy(a), Err(Error::NodeNotFound(a)));
        ui.destroy(root)?;
        assert!(ui.is_empty());
        assert!(ui.roots().is_empty());
        Ok(())
    }

    #[test]
    fn detach_keeps_element_alive() -> Result<()> {
        let mut ui = UiEngine::new();
        let (root, a, a1, _) = tree(&mut ui)?;
        ui.detach(a)?;
        assert!(ui.contains(a));
        assert!(!ui.is_attached(a1));
        assert!(!ui.element(root)?.children().contains(&a));
        assert_eq!(ui.find_by_name("Button"), None);
        Ok(())
    }

    #[test]
    fn construct_reaches_every_variant() -> Result<()> {
        let mut ui = UiEngine::new();
        for tag in VariantTag::ALL {
            let id = ui.create(ElementKind::for_tag(tag).unwrap());
            let args = match tag {
                VariantTag::TextLabel => vec![Arg::from("t"), Arg::from(5)],
                _ => vec![Arg::from(5)],
            };
            ui.construct(id, &args)?;
            let e = ui.element(id)?;
            assert_eq!(e.tag(), tag);
            assert_eq!(e.attrs.transform.position.x, 5.0);
        }
        Ok(())
    }

    #[test]
    fn construct_button_exact_values() -> Result<()> {
        let mut ui = UiEngine::new();
        let btn = ui.create(Button::default());
        ui.construct(
            btn,
            &[
                Arg::from(200),
                Arg::from(200),
                Arg::from(100),
                Arg::from(100),
                Arg::from(Color::WHITE),
            ],
        )?;
        let e = ui.element(btn)?;
        assert_eq!(e.attrs.transform.position.x, 200.0);
        assert_eq!(e.attrs.transform.position.y, 200.0);
        assert_eq!(e.attrs.size.x, 100.0);
        assert_eq!(e.attrs.size.y, 100.0);
        assert_eq!(e.attrs.background_color, Color::WHITE);
        assert_eq!(e.variant::<Button>().map(|b| b.roundness), Some(0.0));
        Ok(())
    }

    #[test]
    fn construct_bad_arguments_surface() -> Result<()> {
        let mut ui = UiEngine::new();
        let btn = ui.create(Button::default());
        let too_many: Vec<Arg> = (0..6).map(Arg::from).collect();
        assert!(matches!(
            ui.construct(btn, &too_many),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            ui.spawn(VariantTag::Frame, &[Arg::from(true)]),
            Err(Error::InvalidArgument(_))
        ));
        // The failed spawn left nothing behind.
        assert_eq!(ui.len(), 1);
        Ok(())
    }

    #[test]
    fn spawn_none_records_diagnostic() -> Result<()> {
        let mut ui = UiEngine::new();
        assert_eq!(ui.spawn(VariantTag::None, &[])?, None);
        assert_eq!(ui.spawn_named("Slider", &[Arg::from(1)])?, None);
        assert!(ui.is_empty());
        let d = ui.take_diagnostics();
        assert_eq!(d.len(), 2);
        assert!(d.iter().all(|d| d.kind == DiagnosticKind::UnknownVariant));
        assert!(d[1].message.contains("Slider"));
        assert!(ui.diagnostics().is_empty());
        Ok(())
    }

    #[test]
    fn diagnostics_are_capped() -> Result<()> {
        let mut ui = UiEngine::new();
        for i in 0..DIAGNOSTIC_LIMIT + 10 {
            ui.spawn_named(&format!("Widget{i}"), &[])?;
        }
        let d = ui.diagnostics();
        assert_eq!(d.len(), DIAGNOSTIC_LIMIT);
        assert!(d[0].message.contains("\"Widget10\""));
        Ok(())
    }

    #[test]
    fn engines_have_distinct_identities() {
        let a = UiEngine::new();
        let b = UiEngine::new();
        assert_ne!(a.engine_id(), b.engine_id());
        assert_eq!(a.engine_id(), a.engine_id());
    }

    #[test]
    fn paint_order_is_stable_by_z() -> Result<()> {
        let mut ui = UiEngine::new();
        let root = ui.create(Frame);
        let kids: Vec<ElementId> = (0..4).map(|_| ui.create(Frame)).collect();
        for k in &kids {
            ui.add_child(root, *k)?;
        }
        ui.element_mut(kids[0])?.attrs.z_index = 2;
        ui.element_mut(kids[3])?.attrs.z_index = -1;
        assert_eq!(
            ui.children_in_paint_order(root)?,
            vec![kids[3], kids[1], kids[2], kids[0]]
        );
        Ok(())
    }

    #[test]
    fn variant_mut_checks_kind() -> Result<()> {
        let mut ui = UiEngine::new();
        let f = ui.create(Frame);
        assert!(matches!(
            ui.variant_mut::<Button>(f),
            Err(Error::InvalidArgument(_))
        ));
        let b = ui.create(Button::default());
        ui.variant_mut::<Button>(b)?.roundness = 0.25;
        assert_eq!(ui.element(b)?.variant::<Button>().map(|b| b.roundness), Some(0.25));
        Ok(())
    }

    #[test]
    fn redraw_flag() -> Result<()> {
        let mut ui = UiEngine::new();
        assert!(!ui.take_redraw_request());
        let f = ui.create(Frame);
        ui.add_element(f)?;
        assert!(ui.take_redraw_request());
        assert!(!ui.take_redraw_request());
        ui.request_redraw();
        assert!(ui.take_redraw_request());
        Ok(())
    }

    #[test]
    fn find_by_name_searches_preorder() -> Result<()> {
        let mut ui = UiEngine::new();
        let (_, a, _, _) = tree(&mut ui)?;
        ui.element_mut(a)?.attrs.name = "panel".into();
        assert_eq!(ui.find_by_name("panel"), Some(a));
        assert_eq!(ui.find_by_name("missing"), None);
        Ok(())
    }
}
