use numkey_core::{InterfaceIdiom, Scene, SceneNode};

use crate::key::{KeyId, KeyPayload};
use crate::keypad::NumberKeypad;
use crate::style::{
    DIGIT_FONT_SIZE, DONE_FONT_SIZE, PAD_CORNER_RADIUS, PAD_SHADOW_OFFSET, pad_shadow_color,
    separator_color,
};

impl NumberKeypad {
    /// Paints visible keys, then separators, into `scene`.
    pub fn paint(&mut self, scene: &mut Scene) {
        self.layout_if_needed();
        let idiom = self.interface_idiom();
        let radius = match idiom {
            InterfaceIdiom::Pad => PAD_CORNER_RADIUS,
            InterfaceIdiom::Phone => 0.0,
        };

        for key in self.keys().filter(|k| !k.is_hidden()) {
            let look = key.style().appearance(key.is_highlighted(), idiom);
            let rect = key.rect();

            if idiom == InterfaceIdiom::Pad {
                scene.push(SceneNode::Rect {
                    rect: rect.offset(0.0, PAD_SHADOW_OFFSET),
                    color: pad_shadow_color(),
                    radius,
                });
            }
            scene.push(SceneNode::Rect {
                rect,
                color: look.fill,
                radius,
            });

            match key.payload() {
                KeyPayload::Label(text) => scene.push(SceneNode::Text {
                    rect,
                    text: text.clone(),
                    color: look.control,
                    size: if key.id() == KeyId::Done {
                        DONE_FONT_SIZE
                    } else {
                        DIGIT_FONT_SIZE
                    },
                }),
                KeyPayload::Icon(icon) => scene.push(SceneNode::Image {
                    rect,
                    handle: icon.handle(),
                    tint: look.control,
                }),
                KeyPayload::Empty => {}
            }
        }

        for sep in self.separators() {
            scene.push(SceneNode::Rect {
                rect: *sep,
                color: separator_color(),
                radius: 0.0,
            });
        }
    }
}
