//! Scene graph storage and z-order
//!
//! Objects live in a slotmap arena keyed by [`ObjectId`]. The canvas root and
//! every [`GCompound`] keep an ordered child list; index 0 is the backmost
//! object and the last index is painted on top.
//!
//! Ownership moves into the scene on `add`, so one object can never appear
//! twice. Removing an id detaches its whole subtree and hands the root object
//! back to the caller.

use std::fmt;
use std::marker::PhantomData;

use gcanvas_core::{DrawContext, Point, Rect, Transform};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::compound::GCompound;
use crate::error::{GraphicsError, Result};
use crate::object::{GObject, ObjectKind};

new_key_type! {
    /// Stable identifier of an object in a scene
    pub struct ObjectId;
}

/// A typed [`ObjectId`] (cheap to copy)
pub struct Handle<T> {
    id: ObjectId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub(crate) fn new(id: ObjectId) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Handle<T> {}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle").field(&self.id).finish()
    }
}

impl<T> From<Handle<T>> for ObjectId {
    fn from(handle: Handle<T>) -> Self {
        handle.id
    }
}

type ChildList = SmallVec<[ObjectId; 4]>;

#[derive(Debug)]
struct Node {
    object: Box<dyn GObject>,
    parent: Option<ObjectId>,
    /// Ordered children, back to front. Only compounds have any.
    children: ChildList,
    is_compound: bool,
}

/// Where a z-order move sends an object
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ZMove {
    Front,
    Back,
    Forward,
    Backward,
}

/// The arena of objects shown on a canvas
#[derive(Debug, Default)]
pub struct Scene {
    nodes: SlotMap<ObjectId, Node>,
    roots: Vec<ObjectId>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            roots: Vec::new(),
        }
    }

    /// Total number of objects, nested ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: impl Into<ObjectId>) -> bool {
        self.nodes.contains_key(id.into())
    }

    /// Ids of every live object, in no particular order
    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.nodes.keys()
    }

    fn node(&self, id: ObjectId) -> Result<&Node> {
        self.nodes.get(id).ok_or(GraphicsError::NotFound(id))
    }

    fn compound_node(&self, id: ObjectId) -> Result<&Node> {
        let node = self.node(id)?;
        if !node.is_compound {
            return Err(GraphicsError::NotACompound(id));
        }
        Ok(node)
    }

    fn is_complete(&self, compound: ObjectId) -> bool {
        self.nodes
            .get(compound)
            .and_then(|n| n.object.as_any().downcast_ref::<GCompound>())
            .is_some_and(GCompound::is_complete)
    }

    fn check_mutable(&self, compound: ObjectId) -> Result<()> {
        if self.is_complete(compound) {
            return Err(GraphicsError::CompoundComplete(compound));
        }
        Ok(())
    }

    // =========================================================================
    // ADD / REMOVE
    // =========================================================================

    /// Add an object on top of the canvas root list
    pub fn add<T: GObject>(&mut self, object: T) -> Handle<T> {
        Handle::new(self.insert(Box::new(object), None))
    }

    pub fn add_boxed(&mut self, object: Box<dyn GObject>) -> ObjectId {
        self.insert(object, None)
    }

    /// Add an object on top of a compound's children
    pub fn add_to<T: GObject>(&mut self, compound: impl Into<ObjectId>, object: T) -> Result<Handle<T>> {
        self.add_boxed_to(compound, Box::new(object)).map(Handle::new)
    }

    pub fn add_boxed_to(&mut self, compound: impl Into<ObjectId>, object: Box<dyn GObject>) -> Result<ObjectId> {
        let compound = compound.into();
        self.compound_node(compound)?;
        self.check_mutable(compound)?;
        Ok(self.insert(object, Some(compound)))
    }

    fn insert(&mut self, object: Box<dyn GObject>, parent: Option<ObjectId>) -> ObjectId {
        let kind = object.kind();
        let is_compound = object.as_any().is::<GCompound>();
        let id = self.nodes.insert(Node {
            object,
            parent,
            children: ChildList::new(),
            is_compound,
        });
        self.attach(id, parent);
        tracing::debug!(?id, %kind, ?parent, "added object");
        id
    }

    /// Link `id` on top of its parent's child list
    fn attach(&mut self, id: ObjectId, parent: Option<ObjectId>) {
        match parent {
            None => self.roots.push(id),
            Some(p) => {
                if let Some(node) = self.nodes.get_mut(p) {
                    node.children.push(id);
                }
            }
        }
    }

    fn siblings(&self, parent: Option<ObjectId>) -> &[ObjectId] {
        match parent {
            None => &self.roots,
            Some(p) => self.nodes.get(p).map(|n| n.children.as_slice()).unwrap_or(&[]),
        }
    }

    fn siblings_mut(&mut self, parent: Option<ObjectId>) -> &mut [ObjectId] {
        match parent {
            None => &mut self.roots,
            Some(p) => match self.nodes.get_mut(p) {
                Some(n) => n.children.as_mut_slice(),
                None => &mut [],
            },
        }
    }

    /// Remove an object together with everything nested in it, returning
    /// the object itself
    pub fn remove(&mut self, id: impl Into<ObjectId>) -> Result<Box<dyn GObject>> {
        let id = id.into();
        let parent = self.node(id)?.parent;
        if let Some(p) = parent {
            self.check_mutable(p)?;
        }
        self.detach(id);
        let removed = self.drop_subtree(id);
        tracing::debug!(?id, removed, "removed object");
        self.nodes
            .remove(id)
            .map(|node| node.object)
            .ok_or(GraphicsError::NotFound(id))
    }

    /// Remove every root object
    pub fn remove_all(&mut self) {
        let count = self.nodes.len();
        self.nodes.clear();
        self.roots.clear();
        tracing::debug!(count, "cleared scene");
    }

    /// Remove every child of a compound
    pub fn remove_all_from(&mut self, compound: impl Into<ObjectId>) -> Result<()> {
        let compound = compound.into();
        let children = self.compound_node(compound)?.children.clone();
        self.check_mutable(compound)?;
        for child in children {
            self.drop_subtree(child);
            self.nodes.remove(child);
        }
        if let Some(node) = self.nodes.get_mut(compound) {
            node.children.clear();
        }
        Ok(())
    }

    /// Unlink `id` from its parent's child list
    fn detach(&mut self, id: ObjectId) {
        let parent = self.nodes.get(id).and_then(|n| n.parent);
        match parent {
            None => self.roots.retain(|&c| c != id),
            Some(p) => {
                if let Some(node) = self.nodes.get_mut(p) {
                    node.children.retain(|c| *c != id);
                }
            }
        }
    }

    /// Drop all descendants of `id` (not `id` itself); returns how many
    fn drop_subtree(&mut self, id: ObjectId) -> usize {
        let mut stack: Vec<ObjectId> = self
            .nodes
            .get_mut(id)
            .map(|n| std::mem::take(&mut n.children).into_vec())
            .unwrap_or_default();
        let mut count = 0;
        while let Some(child) = stack.pop() {
            if let Some(node) = self.nodes.remove(child) {
                stack.extend(node.children);
                count += 1;
            }
        }
        count
    }

    /// Move an object into another container (`None` is the canvas root),
    /// keeping its location relative to its new parent
    pub fn reparent(&mut self, id: impl Into<ObjectId>, parent: Option<ObjectId>) -> Result<()> {
        let id = id.into();
        let old_parent = self.node(id)?.parent;
        if let Some(p) = parent {
            self.compound_node(p)?;
            self.check_mutable(p)?;
            if self.ancestors_and_self(p).any(|a| a == id) {
                return Err(GraphicsError::Cycle(id));
            }
        }
        if let Some(p) = old_parent {
            self.check_mutable(p)?;
        }
        self.detach(id);
        if let Some(node) = self.nodes.get_mut(id) {
            node.parent = parent;
        }
        self.attach(id, parent);
        tracing::debug!(?id, ?parent, "reparented object");
        Ok(())
    }

    fn ancestors_and_self(&self, id: ObjectId) -> impl Iterator<Item = ObjectId> + '_ {
        std::iter::successors(Some(id), move |&cur| self.nodes.get(cur).and_then(|n| n.parent))
    }

    // =========================================================================
    // ACCESS
    // =========================================================================

    pub fn object(&self, id: impl Into<ObjectId>) -> Option<&dyn GObject> {
        self.nodes.get(id.into()).map(|n| n.object.as_ref())
    }

    pub fn object_mut(&mut self, id: impl Into<ObjectId>) -> Option<&mut dyn GObject> {
        self.nodes.get_mut(id.into()).map(|n| n.object.as_mut())
    }

    pub fn get<T: GObject>(&self, handle: Handle<T>) -> Result<&T> {
        self.downcast(handle.id)
    }

    pub fn get_mut<T: GObject>(&mut self, handle: Handle<T>) -> Result<&mut T> {
        self.downcast_mut(handle.id)
    }

    /// Typed access through a raw id
    pub fn downcast<T: GObject>(&self, id: impl Into<ObjectId>) -> Result<&T> {
        let id = id.into();
        self.node(id)?
            .object
            .as_any()
            .downcast_ref::<T>()
            .ok_or(GraphicsError::TypeMismatch(id))
    }

    pub fn downcast_mut<T: GObject>(&mut self, id: impl Into<ObjectId>) -> Result<&mut T> {
        let id = id.into();
        self.nodes
            .get_mut(id)
            .ok_or(GraphicsError::NotFound(id))?
            .object
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or(GraphicsError::TypeMismatch(id))
    }

    /// Turn a raw id into a typed handle after checking the type
    pub fn handle<T: GObject>(&self, id: ObjectId) -> Result<Handle<T>> {
        self.downcast::<T>(id)?;
        Ok(Handle::new(id))
    }

    pub fn kind(&self, id: impl Into<ObjectId>) -> Option<ObjectKind> {
        self.object(id).map(|o| o.kind())
    }

    pub fn parent(&self, id: impl Into<ObjectId>) -> Result<Option<ObjectId>> {
        let id = id.into();
        Ok(self.node(id)?.parent)
    }

    /// Whether the object and every compound above it are visible
    pub fn is_shown(&self, id: impl Into<ObjectId>) -> bool {
        let id = id.into();
        self.contains(id)
            && self
                .ancestors_and_self(id)
                .all(|a| self.nodes.get(a).is_some_and(|n| n.object.is_visible()))
    }

    pub fn is_compound(&self, id: impl Into<ObjectId>) -> bool {
        self.nodes.get(id.into()).is_some_and(|n| n.is_compound)
    }

    /// Root objects, back to front
    pub fn roots(&self) -> &[ObjectId] {
        &self.roots
    }

    /// Children of a compound, back to front
    pub fn children(&self, compound: impl Into<ObjectId>) -> Result<&[ObjectId]> {
        Ok(self.compound_node(compound.into())?.children.as_slice())
    }

    pub fn element_count(&self) -> usize {
        self.roots.len()
    }

    /// The root object at `index` in z-order
    pub fn element(&self, index: usize) -> Result<ObjectId> {
        self.roots
            .get(index)
            .copied()
            .ok_or(GraphicsError::IndexOutOfRange {
                index,
                len: self.roots.len(),
            })
    }

    pub fn element_count_in(&self, compound: impl Into<ObjectId>) -> Result<usize> {
        Ok(self.children(compound)?.len())
    }

    pub fn element_in(&self, compound: impl Into<ObjectId>, index: usize) -> Result<ObjectId> {
        let children = self.children(compound)?;
        children
            .get(index)
            .copied()
            .ok_or(GraphicsError::IndexOutOfRange {
                index,
                len: children.len(),
            })
    }

    /// Index of an object within its parent's list
    pub fn z_index(&self, id: impl Into<ObjectId>) -> Result<usize> {
        let id = id.into();
        let parent = self.node(id)?.parent;
        self.siblings(parent)
            .iter()
            .position(|&c| c == id)
            .ok_or(GraphicsError::NotFound(id))
    }

    // =========================================================================
    // Z-ORDER
    // =========================================================================

    pub fn send_to_front(&mut self, id: impl Into<ObjectId>) -> Result<()> {
        self.restack(id.into(), ZMove::Front)
    }

    pub fn send_to_back(&mut self, id: impl Into<ObjectId>) -> Result<()> {
        self.restack(id.into(), ZMove::Back)
    }

    pub fn send_forward(&mut self, id: impl Into<ObjectId>) -> Result<()> {
        self.restack(id.into(), ZMove::Forward)
    }

    pub fn send_backward(&mut self, id: impl Into<ObjectId>) -> Result<()> {
        self.restack(id.into(), ZMove::Backward)
    }

    fn restack(&mut self, id: ObjectId, to: ZMove) -> Result<()> {
        let index = self.z_index(id)?;
        let parent = self.node(id)?.parent;
        let list = self.siblings_mut(parent);
        let last = list.len() - 1;
        match to {
            ZMove::Front => list[index..].rotate_left(1),
            ZMove::Back => list[..=index].rotate_right(1),
            ZMove::Forward if index < last => list.swap(index, index + 1),
            ZMove::Backward if index > 0 => list.swap(index, index - 1),
            ZMove::Forward | ZMove::Backward => {}
        }
        Ok(())
    }

    // =========================================================================
    // GEOMETRY
    // =========================================================================

    /// Bounds in parent coordinates. A compound's bounds are the union of
    /// its visible children's bounds, offset by its location.
    pub fn bounds(&self, id: impl Into<ObjectId>) -> Result<Rect> {
        let id = id.into();
        let node = self.node(id)?;
        Ok(self.node_bounds(node))
    }

    fn node_bounds(&self, node: &Node) -> Rect {
        if !node.is_compound {
            return node.object.bounds();
        }
        let loc = node.object.location();
        // Min/max over corners so lines with zero width or height still count
        let corners = node
            .children
            .iter()
            .filter_map(|&c| self.nodes.get(c))
            .filter(|c| c.object.is_visible())
            .map(|c| self.node_bounds(c))
            .flat_map(|r| [r.origin, Point::new(r.right(), r.bottom())]);
        match Rect::bounding(corners) {
            Some(r) => r.offset(loc.x, loc.y),
            None => Rect::from_origin_size(loc, Default::default()),
        }
    }

    /// Whether a point in parent coordinates hits the object. Compounds hit
    /// when any visible child does.
    pub fn hit_test(&self, id: impl Into<ObjectId>, point: Point) -> Result<bool> {
        let node = self.node(id.into())?;
        Ok(self.node_contains(node, point))
    }

    fn node_contains(&self, node: &Node, point: Point) -> bool {
        if !node.is_compound {
            return node.object.contains(point);
        }
        let loc = node.object.location();
        let local = Point::new(point.x - loc.x, point.y - loc.y);
        node.children
            .iter()
            .filter_map(|&c| self.nodes.get(c))
            .any(|c| c.object.is_visible() && self.node_contains(c, local))
    }

    fn topmost_in(&self, list: &[ObjectId], point: Point) -> Option<ObjectId> {
        list.iter().rev().copied().find(|&id| {
            self.nodes
                .get(id)
                .is_some_and(|n| n.object.is_visible() && self.node_contains(n, point))
        })
    }

    /// Topmost visible root object containing a canvas point
    pub fn element_at(&self, point: Point) -> Option<ObjectId> {
        self.topmost_in(&self.roots, point)
    }

    /// Topmost visible child of a compound containing a point given in the
    /// compound's local coordinates
    pub fn element_at_in(&self, compound: impl Into<ObjectId>, point: Point) -> Result<Option<ObjectId>> {
        let node = self.compound_node(compound.into())?;
        Ok(self.topmost_in(&node.children, point))
    }

    /// Sum of the locations of every compound above `id`
    fn origin_of(&self, id: ObjectId) -> Result<Point> {
        let mut origin = Point::ZERO;
        let mut parent = self.node(id)?.parent;
        while let Some(p) = parent {
            let node = self.node(p)?;
            origin = origin.offset(node.object.x(), node.object.y());
            parent = node.parent;
        }
        Ok(origin)
    }

    /// Convert a point in `id`'s parent coordinates to canvas coordinates
    pub fn local_to_canvas(&self, id: impl Into<ObjectId>, point: Point) -> Result<Point> {
        let origin = self.origin_of(id.into())?;
        Ok(point.offset(origin.x, origin.y))
    }

    /// Convert a canvas point to `id`'s parent coordinates
    pub fn canvas_to_local(&self, id: impl Into<ObjectId>, point: Point) -> Result<Point> {
        let origin = self.origin_of(id.into())?;
        Ok(point.offset(-origin.x, -origin.y))
    }

    /// Bounds in canvas coordinates
    pub fn canvas_bounds(&self, id: impl Into<ObjectId>) -> Result<Rect> {
        let id = id.into();
        let origin = self.origin_of(id)?;
        Ok(self.bounds(id)?.offset(origin.x, origin.y))
    }

    /// Scale a compound's contents about its origin: child locations are
    /// scaled and scalable children are resized. Nested compounds recurse.
    pub fn scale_compound(&mut self, compound: impl Into<ObjectId>, sx: f32, sy: f32) -> Result<()> {
        let compound = compound.into();
        let children = self.compound_node(compound)?.children.clone();
        for child in children {
            let nested = self.is_compound(child);
            if let Some(node) = self.nodes.get_mut(child) {
                let loc = node.object.location();
                node.object.set_location(loc.x * sx, loc.y * sy);
                if let Some(scalable) = node.object.as_scalable_mut() {
                    scalable.scale(sx, sy);
                }
            }
            if nested {
                self.scale_compound(child, sx, sy)?;
            }
        }
        Ok(())
    }

    // =========================================================================
    // PAINT
    // =========================================================================

    /// Paint every visible root object back to front
    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        for &id in &self.roots {
            self.paint_node(id, ctx);
        }
    }

    fn paint_node(&self, id: ObjectId, ctx: &mut dyn DrawContext) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if !node.object.is_visible() {
            return;
        }
        if !node.is_compound {
            node.object.paint(ctx);
            return;
        }
        let loc = node.object.location();
        ctx.push_transform(Transform::translate(loc.x, loc.y));
        for &child in &node.children {
            self.paint_node(child, ctx);
        }
        ctx.pop_transform();
    }

    /// Mutable access to every object of type `T`
    pub fn for_each_mut<T: GObject>(&mut self, mut f: impl FnMut(ObjectId, &mut T)) {
        for (id, node) in self.nodes.iter_mut() {
            if let Some(object) = node.object.as_any_mut().downcast_mut::<T>() {
                f(id, object);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{GLine, GOval, GRect};
    use gcanvas_core::{DrawCommand, RecordingContext, Size};

    fn three_rects(scene: &mut Scene) -> [ObjectId; 3] {
        [
            scene.add(GRect::with_bounds(0.0, 0.0, 10.0, 10.0)).id(),
            scene.add(GRect::with_bounds(5.0, 5.0, 10.0, 10.0)).id(),
            scene.add(GRect::with_bounds(8.0, 8.0, 10.0, 10.0)).id(),
        ]
    }

    #[test]
    fn test_add_and_typed_access() {
        let mut scene = Scene::new();
        let rect = scene.add(GRect::new(10.0, 20.0));
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.get(rect).unwrap().height(), 20.0);

        scene.get_mut(rect).unwrap().set_location(3.0, 4.0);
        assert_eq!(scene.object(rect).unwrap().location(), Point::new(3.0, 4.0));

        assert!(matches!(
            scene.downcast::<GOval>(rect.id()),
            Err(GraphicsError::TypeMismatch(_))
        ));
        assert!(scene.handle::<GRect>(rect.id()).is_ok());
    }

    #[test]
    fn test_z_order_moves() {
        let mut scene = Scene::new();
        let [a, b, c] = three_rects(&mut scene);

        scene.send_to_front(a).unwrap();
        assert_eq!(scene.roots(), &[b, c, a]);
        scene.send_to_back(c).unwrap();
        assert_eq!(scene.roots(), &[c, b, a]);
        scene.send_forward(c).unwrap();
        assert_eq!(scene.roots(), &[b, c, a]);
        scene.send_backward(a).unwrap();
        assert_eq!(scene.roots(), &[b, a, c]);

        // Already at the ends
        scene.send_forward(c).unwrap();
        scene.send_backward(b).unwrap();
        assert_eq!(scene.roots(), &[b, a, c]);
        assert_eq!(scene.z_index(a).unwrap(), 1);
    }

    #[test]
    fn test_element_at_picks_topmost_visible() {
        let mut scene = Scene::new();
        let [a, b, c] = three_rects(&mut scene);
        let p = Point::new(9.0, 9.0);
        assert_eq!(scene.element_at(p), Some(c));
        scene.object_mut(c).unwrap().set_visible(false);
        assert_eq!(scene.element_at(p), Some(b));
        scene.send_to_front(a).unwrap();
        assert_eq!(scene.element_at(p), Some(a));
        assert_eq!(scene.element_at(Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn test_compound_bounds_and_hit() {
        let mut scene = Scene::new();
        let group = scene.add(GCompound::at(100.0, 100.0));
        assert_eq!(scene.bounds(group).unwrap(), Rect::new(100.0, 100.0, 0.0, 0.0));

        let r = scene.add_to(group, GRect::with_bounds(0.0, 0.0, 10.0, 10.0)).unwrap();
        scene.add_to(group, GOval::with_bounds(20.0, 20.0, 10.0, 10.0)).unwrap();
        assert_eq!(scene.bounds(group).unwrap(), Rect::new(100.0, 100.0, 30.0, 30.0));

        assert_eq!(scene.element_at(Point::new(105.0, 105.0)), Some(group.id()));
        assert_eq!(scene.element_at(Point::new(115.0, 115.0)), None);
        assert_eq!(
            scene.element_at_in(group, Point::new(5.0, 5.0)).unwrap(),
            Some(r.id())
        );

        assert_eq!(scene.local_to_canvas(r, Point::new(1.0, 2.0)).unwrap(), Point::new(101.0, 102.0));
        assert_eq!(scene.canvas_to_local(r, Point::new(101.0, 102.0)).unwrap(), Point::new(1.0, 2.0));
        assert_eq!(scene.canvas_bounds(r).unwrap(), Rect::new(100.0, 100.0, 10.0, 10.0));
    }

    #[test]
    fn test_compound_of_lines_has_full_bounds() {
        let mut scene = Scene::new();
        let group = scene.add(GCompound::at(10.0, 10.0));
        scene.add_to(group, GLine::new(0.0, 0.0, 50.0, 0.0)).unwrap();
        scene.add_to(group, GLine::new(25.0, -20.0, 25.0, 20.0)).unwrap();
        assert_eq!(scene.bounds(group).unwrap(), Rect::new(10.0, -10.0, 50.0, 40.0));

        let hidden = scene.add_to(group, GLine::new(0.0, 0.0, 200.0, 0.0)).unwrap();
        scene.object_mut(hidden).unwrap().set_visible(false);
        assert_eq!(scene.bounds(group).unwrap(), Rect::new(10.0, -10.0, 50.0, 40.0));
    }

    #[test]
    fn test_remove_takes_subtree() {
        let mut scene = Scene::new();
        let outer = scene.add(GCompound::new());
        let inner = scene.add_to(outer, GCompound::new()).unwrap();
        let leaf = scene.add_to(inner, GLine::new(0.0, 0.0, 5.0, 5.0)).unwrap();
        scene.add(GRect::new(1.0, 1.0));
        assert_eq!(scene.len(), 4);

        let removed = scene.remove(outer).unwrap();
        assert_eq!(removed.kind(), ObjectKind::Compound);
        assert_eq!(scene.len(), 1);
        assert!(!scene.contains(leaf));
        assert!(matches!(scene.remove(inner), Err(GraphicsError::NotFound(_))));
    }

    #[test]
    fn test_complete_compound_rejects_changes() {
        let mut scene = Scene::new();
        let group = scene.add(GCompound::new());
        let child = scene.add_to(group, GRect::new(1.0, 1.0)).unwrap();
        scene.get_mut(group).unwrap().mark_as_complete();

        assert!(matches!(
            scene.add_to(group, GRect::new(1.0, 1.0)),
            Err(GraphicsError::CompoundComplete(_))
        ));
        assert!(matches!(scene.remove(child), Err(GraphicsError::CompoundComplete(_))));
        assert!(matches!(
            scene.remove_all_from(group),
            Err(GraphicsError::CompoundComplete(_))
        ));
        assert_eq!(scene.element_count_in(group).unwrap(), 1);
    }

    #[test]
    fn test_reparent_rejects_cycles() {
        let mut scene = Scene::new();
        let outer = scene.add(GCompound::new());
        let inner = scene.add_to(outer, GCompound::new()).unwrap();

        assert!(matches!(
            scene.reparent(outer, Some(outer.id())),
            Err(GraphicsError::Cycle(_))
        ));
        assert!(matches!(
            scene.reparent(outer, Some(inner.id())),
            Err(GraphicsError::Cycle(_))
        ));

        scene.reparent(inner, None).unwrap();
        assert_eq!(scene.element_count(), 2);
        assert_eq!(scene.parent(inner).unwrap(), None);
    }

    #[test]
    fn test_non_compound_container_ops_fail() {
        let mut scene = Scene::new();
        let rect = scene.add(GRect::new(1.0, 1.0));
        assert!(matches!(
            scene.add_to(rect, GRect::new(1.0, 1.0)),
            Err(GraphicsError::NotACompound(_))
        ));
        assert!(matches!(
            scene.element(3),
            Err(GraphicsError::IndexOutOfRange { index: 3, len: 1 })
        ));
    }

    #[test]
    fn test_scale_compound() {
        let mut scene = Scene::new();
        let group = scene.add(GCompound::at(10.0, 10.0));
        let r = scene.add_to(group, GRect::with_bounds(5.0, 5.0, 10.0, 10.0)).unwrap();
        scene.scale_compound(group, 2.0, 3.0).unwrap();
        assert_eq!(scene.bounds(r).unwrap(), Rect::new(10.0, 15.0, 20.0, 30.0));
        assert_eq!(scene.get(group).unwrap().location(), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_paint_translates_compounds_and_skips_hidden() {
        let mut scene = Scene::new();
        let group = scene.add(GCompound::at(10.0, 20.0));
        scene.add_to(group, GRect::new(5.0, 5.0)).unwrap();
        let hidden = scene.add(GRect::new(5.0, 5.0));
        scene.get_mut(hidden).unwrap().set_visible(false);

        let mut ctx = RecordingContext::new(Size::new(50.0, 50.0));
        scene.paint(&mut ctx);
        let cmds = ctx.commands();
        assert_eq!(cmds.len(), 3);
        assert_eq!(cmds[0], DrawCommand::PushTransform(Transform::translate(10.0, 20.0)));
        assert!(matches!(cmds[1], DrawCommand::StrokePath { .. }));
        assert_eq!(cmds[2], DrawCommand::PopTransform);
    }
}
