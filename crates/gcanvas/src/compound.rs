//! Groups of objects moved as a unit

use gcanvas_core::{DrawContext, Size};

use crate::object::{object_plumbing, GObject, ObjectKind, ObjectState};

/// A container whose children use its location as their origin.
///
/// The children themselves live in the [`Scene`](crate::Scene), so a
/// compound's bounds, hit-testing and painting are answered by the scene
/// (see [`Scene::bounds`](crate::Scene::bounds)). On its own the compound
/// reports an empty size and paints nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GCompound {
    state: ObjectState,
    complete: bool,
}

impl GCompound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(x: f32, y: f32) -> Self {
        Self {
            state: ObjectState::at(x, y),
            complete: false,
        }
    }

    /// Freeze the child list; later adds and removes fail
    pub fn mark_as_complete(&mut self) {
        self.complete = true;
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

impl GObject for GCompound {
    object_plumbing!();

    fn kind(&self) -> ObjectKind {
        ObjectKind::Compound
    }

    fn size(&self) -> Size {
        Size::ZERO
    }

    fn paint(&self, _ctx: &mut dyn DrawContext) {}
}
