//! Leptos DragDrop Utilities
//!
//! Mouse-event drag gestures for reorderable lists.
//! Uses a movement threshold to tell a click from a drag, then reports
//! index-based gestures: `Start` once the threshold is crossed, `Over` each
//! time the pointer enters another item, `End` on mouse-up anywhere.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Gesture reported to the list owner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragGesture {
    /// Dragging began on the item at this index
    Start(usize),
    /// Pointer entered the item currently at this index
    Over(usize),
    /// Mouse released, inside or outside any item
    End,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// A drag is in progress (threshold crossed)
    pub active_read: ReadSignal<bool>,
    pub active_write: WriteSignal<bool>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending index (mousedown but not yet dragging)
    pub pending_index_read: ReadSignal<Option<usize>>,
    pub pending_index_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    on_gesture: Callback<DragGesture>,
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Whether the pointer moved far enough from the press point to start a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals(on_gesture: Callback<DragGesture>) -> DndSignals {
    let (active_read, active_write) = signal(false);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_index_read, pending_index_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        active_read,
        active_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_index_read,
        pending_index_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        on_gesture,
    }
}

/// End drag operation; click handlers see `drag_just_ended` for 100ms afterwards
pub fn end_drag(dnd: &DndSignals) {
    dnd.active_write.set(false);
    dnd.pending_index_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable items.
/// Records a pending drag at the item's current index.
pub fn make_on_mousedown(dnd: DndSignals, index: Signal<Option<usize>>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore presses on inputs and buttons
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        if let Some(current) = index.get_untracked() {
            dnd.pending_index_write.set(Some(current));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mouseenter handler for items. Reports `Over` with the index the
/// item holds right now, so reshuffles during the drag are respected.
pub fn make_on_item_mouseenter(dnd: DndSignals, index: Signal<Option<usize>>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if !dnd.active_read.get_untracked() {
            return;
        }
        if let Some(current) = index.get_untracked() {
            dnd.on_gesture.run(DragGesture::Over(current));
        }
    }
}

/// Bind document mousemove: starts the drag once the threshold is crossed
fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_index_read.get_untracked() else {
            return;
        };
        if dnd.active_read.get_untracked() {
            return;
        }
        let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
        if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
            dnd.active_write.set(true);
            dnd.on_gesture.run(DragGesture::Start(pending));
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind document mouseup (drop anywhere) and mousemove (drag start)
pub fn bind_global_listeners(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let was_dragging = dnd.active_read.get_untracked();
        if was_dragging {
            end_drag(&dnd);
            dnd.on_gesture.run(DragGesture::End);
        } else {
            // Plain click: the element's click handler fires on its own
            dnd.pending_index_write.set(None);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}
