//! The canvas surface: a fixed-size viewport with one ordered render list.
//!
//! Structural changes (`add_element` / `remove_element`) only become visible after `commit()`,
//! which snapshots the render list into the frame that is painted and hit-tested. Callers batch
//! any number of changes and commit once before handing control back.

use egui::{Context, Painter, Pos2, Rect, Vec2};
use log::{debug, info, warn};

use crate::element::{Element, ElementType, Interaction};
use crate::error::{EditorError, EditorResult};
use crate::event::EditorEvent;
use crate::id_generator::ElementId;
use crate::texture_manager::TextureManager;

pub const DEFAULT_CONTAINER: &str = "container";

/// A named place in the host UI a surface can be bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPoint {
    name: String,
}

impl MountPoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An element on the render list together with where it is currently drawn.
/// Dragging moves the drawn position only.
#[derive(Debug)]
struct RenderNode {
    element: ElementType,
    screen_position: Pos2,
}

#[derive(Debug)]
pub struct CanvasSurface {
    container: String,
    viewport: Vec2,
    nodes: Vec<RenderNode>,
    /// Ids visible as of the last commit, bottom to top
    frame: Vec<ElementId>,
    frame_version: u64,
    dirty: bool,
    torn_down: bool,
    textures: TextureManager,
}

impl CanvasSurface {
    /// Binds a new surface to the mount point called `container`
    pub fn initialize(mounts: &[MountPoint], container: &str, viewport: Vec2) -> EditorResult<Self> {
        if !mounts.iter().any(|m| m.name() == container) {
            return Err(EditorError::MountFailure(container.to_owned()));
        }

        info!(
            "Canvas surface mounted on `{}` ({}x{})",
            container, viewport.x, viewport.y
        );

        Ok(Self {
            container: container.to_owned(),
            viewport,
            nodes: Vec::new(),
            frame: Vec::new(),
            frame_version: 0,
            dirty: false,
            torn_down: false,
            textures: TextureManager::new(),
        })
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Appends an element on top of the render list
    pub fn add_element(&mut self, element: ElementType) {
        if self.torn_down {
            warn!("Ignoring add of {} {} after teardown", element.kind(), element.id());
            return;
        }
        debug!("Surface add {} {}", element.kind(), element.id());
        self.nodes.push(RenderNode {
            screen_position: element.position(),
            element,
        });
        self.dirty = true;
    }

    /// Detaches an element and releases its rendering resources.
    /// Removing an element that is not on the surface does nothing.
    pub fn remove_element(&mut self, id: ElementId) -> Option<ElementType> {
        let index = self.nodes.iter().position(|n| n.element.id() == id)?;
        let node = self.nodes.remove(index);
        self.textures.release(id);
        self.dirty = true;
        debug!("Surface remove {} {}", node.element.kind(), id);
        Some(node.element)
    }

    /// Redraws the current render list
    pub fn commit(&mut self) {
        if self.torn_down {
            return;
        }
        self.frame = self.nodes.iter().map(|n| n.element.id()).collect();
        self.frame_version += 1;
        self.dirty = false;
    }

    /// Releases the whole surface. Later mutations are ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        info!("Tearing down canvas surface ({} elements)", self.nodes.len());
        self.nodes.clear();
        self.frame.clear();
        self.textures.clear();
        self.dirty = false;
        self.torn_down = true;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn element(&self, id: ElementId) -> Option<&ElementType> {
        self.node(id).map(|n| &n.element)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut ElementType> {
        self.nodes
            .iter_mut()
            .find(|n| n.element.id() == id)
            .map(|n| &mut n.element)
    }

    /// All elements on the render list, committed or not, bottom to top
    pub fn elements(&self) -> impl Iterator<Item = &ElementType> {
        self.nodes.iter().map(|n| &n.element)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids drawn by the last commit, bottom to top
    pub fn visible_ids(&self) -> &[ElementId] {
        &self.frame
    }

    pub fn frame_version(&self) -> u64 {
        self.frame_version
    }

    pub fn has_uncommitted_changes(&self) -> bool {
        self.dirty
    }

    /// Where the element is drawn right now, in canvas coordinates
    pub fn screen_position(&self, id: ElementId) -> Option<Pos2> {
        self.node(id).map(|n| n.screen_position)
    }

    /// Topmost visible element under `pos`
    pub fn hit_test(&self, pos: Pos2) -> Option<ElementId> {
        self.frame.iter().rev().copied().find(|id| {
            self.node(*id)
                .is_some_and(|n| n.element.rect_at(n.screen_position).contains(pos))
        })
    }

    /// Delivers a click at `pos` to the topmost element under it
    pub fn click(&self, pos: Pos2) -> Vec<EditorEvent> {
        let Some(node) = self.hit_test(pos).and_then(|id| self.node(id)) else {
            return Vec::new();
        };
        node.element.emit(Interaction::Click, node.screen_position)
    }

    /// Moves the drawn position of a visible element. Returns false if nothing moved.
    pub fn drag_by(&mut self, id: ElementId, delta: Vec2) -> bool {
        if !self.frame.contains(&id) {
            return false;
        }
        match self.nodes.iter_mut().find(|n| n.element.id() == id) {
            Some(node) if node.element.draggable() => {
                node.screen_position += delta;
                true
            }
            _ => false,
        }
    }

    /// Finishes a drag gesture and runs the element's drag-end subscriptions
    pub fn end_drag(&self, id: ElementId) -> Vec<EditorEvent> {
        match self.node(id) {
            Some(node) => node.element.emit(Interaction::DragEnd, node.screen_position),
            None => Vec::new(),
        }
    }

    /// Paints the committed frame with the canvas' top-left corner at `origin`
    pub fn paint(&mut self, ctx: &Context, painter: &Painter, origin: Pos2) {
        let viewport = Rect::from_min_size(origin, self.viewport);
        let painter = painter.with_clip_rect(viewport);

        let Self {
            frame,
            nodes,
            textures,
            ..
        } = self;

        for id in frame.iter() {
            let Some(node) = nodes.iter().find(|n| n.element.id() == *id) else {
                continue;
            };
            let rect = node
                .element
                .rect_at(origin + node.screen_position.to_vec2());

            let texture = match &node.element {
                ElementType::Image(image) => {
                    match textures.get_or_create(*id, image.decoded().pixels(), ctx) {
                        Ok(texture) => Some(texture),
                        Err(err) => {
                            warn!("No texture for image {}: {}", id, err);
                            None
                        }
                    }
                }
                ElementType::Text(_) => None,
            };

            node.element.draw(&painter, rect, texture);
        }
    }

    fn node(&self, id: ElementId) -> Option<&RenderNode> {
        self.nodes.iter().find(|n| n.element.id() == id)
    }
}
