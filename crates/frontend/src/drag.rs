use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use seatmap_shared::viewport::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent};

/// Bit for the primary button in `MouseEvent.buttons`.
const PRIMARY_BUTTON_BIT: u16 = 1;

/// Whether the primary button is still down according to a move event.
pub fn primary_held(buttons: u16) -> bool {
    buttons & PRIMARY_BUTTON_BIT != 0
}

/// Apply one document-level move to the viewport. A move without the primary
/// button means it was released somewhere we never saw a mouseup.
pub fn track_move(viewport: &mut Viewport, buttons: u16, x: f64, y: f64) {
    if !viewport.is_panning() {
        return;
    }
    if primary_held(buttons) {
        viewport.pan_to(x, y);
    } else {
        viewport.end_pan();
    }
}

type MouseListener = Closure<dyn FnMut(MouseEvent)>;

/// `mousemove` / `mouseup` listeners on `document` that drive an in-progress
/// pan, so a drag keeps going after the pointer crosses the map edge.
pub struct DocumentDrag {
    document: Document,
    on_move: MouseListener,
    on_up: MouseListener,
}

impl DocumentDrag {
    pub fn attach(viewport: Signal<Viewport>) -> Option<Self> {
        let document = web_sys::window().and_then(|w| w.document())?;

        let mut move_target = viewport;
        let on_move: MouseListener = Closure::new(move |evt: MouseEvent| {
            if !move_target.peek().is_panning() {
                return;
            }
            track_move(
                &mut *move_target.write(),
                evt.buttons(),
                f64::from(evt.client_x()),
                f64::from(evt.client_y()),
            );
        });

        let mut up_target = viewport;
        let on_up: MouseListener = Closure::new(move |_evt: MouseEvent| {
            if up_target.peek().is_panning() {
                up_target.write().end_pan();
            }
        });

        let drag = DocumentDrag {
            document,
            on_move,
            on_up,
        };
        if let Err(e) = drag.listen() {
            warn!(error = ?e, "Could not attach drag listeners, panning stops at the map edge");
            drag.detach();
            return None;
        }
        Some(drag)
    }

    fn listen(&self) -> Result<(), wasm_bindgen::JsValue> {
        self.document
            .add_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref())?;
        self.document
            .add_event_listener_with_callback("mouseup", self.on_up.as_ref().unchecked_ref())?;
        Ok(())
    }

    pub fn detach(&self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("mouseup", self.on_up.as_ref().unchecked_ref());
    }
}
