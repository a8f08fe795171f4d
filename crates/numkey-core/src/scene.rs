use crate::{Color, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u64);

/// Renderable output of a paint pass.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
    },
    Image {
        rect: Rect,
        handle: ImageHandle,
        tint: Color,
    },
}

impl Scene {
    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }
}
