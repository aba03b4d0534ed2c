//! Drag context
//!
//! Holds gesture state for one sortable list, the registry of sortable nodes,
//! and the window listeners that feed moves and releases back into it.

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::geometry::{closest_center, Point, Rect, Transform};
use crate::sensors::{Activation, ActivationConstraint, Sensor, SensorKind};
use crate::sortable::vertical_list_sorting_strategy;

/// Transition applied to sortable nodes that are not under the pointer
pub const SORT_TRANSITION: &str = "transform 250ms ease";

/// Delivered when a drag gesture finishes (not when it is cancelled)
#[derive(Clone, Debug, PartialEq)]
pub struct DragEndEvent {
    pub active: String,
    pub over: Option<String>,
}

/// A press that may or may not have turned into a drag yet
#[derive(Clone, Debug, PartialEq)]
struct Gesture {
    seq: u32,
    id: String,
    sensor: SensorKind,
    origin: Point,
}

/// DnD state for one list
#[derive(Clone, Copy)]
pub struct DndContext {
    pub active_id: RwSignal<Option<String>>,
    pub over_id: RwSignal<Option<String>>,
    delta: RwSignal<Point>,
    gesture: RwSignal<Option<Gesture>>,
    next_seq: StoredValue<u32>,
    /// Sortable ids in display order
    items: RwSignal<Vec<String>>,
    /// Rects measured when the drag activated, in display order
    rects: RwSignal<Vec<(String, Rect)>>,
    nodes: StoredValue<Vec<(String, NodeRef<html::Div>)>>,
    sensors: StoredValue<Vec<Sensor>>,
    on_drag_end: Callback<DragEndEvent>,
}

impl DndContext {
    /// Create the context and bind its window listeners to the current owner
    pub fn new(sensors: Vec<Sensor>, on_drag_end: Callback<DragEndEvent>) -> Self {
        let ctx = Self {
            active_id: RwSignal::new(None),
            over_id: RwSignal::new(None),
            delta: RwSignal::new(Point::default()),
            gesture: RwSignal::new(None),
            next_seq: StoredValue::new(0),
            items: RwSignal::new(Vec::new()),
            rects: RwSignal::new(Vec::new()),
            nodes: StoredValue::new(Vec::new()),
            sensors: StoredValue::new(sensors),
            on_drag_end,
        };
        bind_window_listeners(ctx);
        ctx
    }

    pub fn set_items(&self, ids: Vec<String>) {
        self.items.set(ids);
    }

    pub fn register(&self, id: String, node: NodeRef<html::Div>) {
        self.nodes.update_value(|nodes| {
            nodes.retain(|(key, _)| *key != id);
            nodes.push((id, node));
        });
    }

    pub fn unregister(&self, id: &str) {
        self.nodes.try_update_value(|nodes| nodes.retain(|(key, _)| key != id));
    }

    fn sensor(&self, kind: SensorKind) -> Option<Sensor> {
        self.sensors.with_value(|sensors| sensors.iter().copied().find(|s| s.kind == kind))
    }

    /// Record a press on a sortable node. Ignored while another gesture is live.
    pub fn press(&self, id: String, kind: SensorKind, at: Point) {
        if self.gesture.with_untracked(Option::is_some) {
            return;
        }
        let Some(sensor) = self.sensor(kind) else { return };

        let seq = self.next_seq.get_value().wrapping_add(1);
        self.next_seq.set_value(seq);
        self.gesture.set(Some(Gesture { seq, id, sensor: kind, origin: at }));

        if let ActivationConstraint::Delay { delay_ms, .. } = sensor.activation {
            let ctx = *self;
            Timeout::new(delay_ms, move || {
                let still_pending = ctx
                    .gesture
                    .try_with_untracked(|g| matches!(g, Some(g) if g.seq == seq))
                    .unwrap_or(false);
                if still_pending && ctx.active_id.with_untracked(Option::is_none) {
                    ctx.activate();
                }
            })
            .forget();
        }
    }

    /// Pointer moved; activates a pending press or tracks an active drag
    pub fn pointer_moved(&self, kind: SensorKind, at: Point) {
        let Some(gesture) = self.gesture.get_untracked() else { return };
        if gesture.sensor != kind {
            return;
        }

        if self.active_id.with_untracked(Option::is_none) {
            let Some(sensor) = self.sensor(kind) else { return };
            match sensor.activation.on_move(gesture.origin, at) {
                Activation::Pending => return,
                Activation::Abort => {
                    self.gesture.set(None);
                    return;
                }
                Activation::Activate => self.activate(),
            }
        }

        let delta = at - gesture.origin;
        self.delta.set(delta);
        self.update_over(&gesture.id, delta);
    }

    /// Pointer released; fires the drag-end callback if a drag was active
    pub fn released(&self, kind: SensorKind) {
        let Some(gesture) = self.gesture.get_untracked() else { return };
        if gesture.sensor != kind {
            return;
        }
        let active = self.active_id.get_untracked();
        let over = self.over_id.get_untracked();
        self.reset();

        if let Some(active) = active {
            log::debug!("drop: active={} over={:?}", active, over);
            self.on_drag_end.run(DragEndEvent { active, over });
        }
    }

    /// Abort the current gesture without reporting a drop
    pub fn cancel(&self) {
        if self.gesture.with_untracked(Option::is_some) {
            log::debug!("drag cancelled");
            self.reset();
        }
    }

    fn reset(&self) {
        self.gesture.set(None);
        self.active_id.set(None);
        self.over_id.set(None);
        self.delta.set(Point::default());
        self.rects.set(Vec::new());
    }

    fn activate(&self) {
        let Some(gesture) = self.gesture.get_untracked() else { return };
        log::debug!("drag start: {} via {:?}", gesture.id, gesture.sensor);
        self.rects.set(self.measure());
        self.delta.set(Point::default());
        self.active_id.set(Some(gesture.id.clone()));
        self.over_id.set(Some(gesture.id));
    }

    fn measure(&self) -> Vec<(String, Rect)> {
        let order = self.items.get_untracked();
        self.nodes.with_value(|nodes| {
            order
                .iter()
                .filter_map(|id| {
                    let (_, node) = nodes.iter().find(|(key, _)| key == id)?;
                    let el = node.get_untracked()?;
                    Some((id.clone(), Rect::from(&el.get_bounding_client_rect())))
                })
                .collect()
        })
    }

    fn update_over(&self, active: &str, delta: Point) {
        let over = self.rects.with_untracked(|rects| {
            let (_, active_rect) = rects.iter().find(|(id, _)| id == active)?;
            closest_center(active_rect.translated(delta), rects)
        });
        if self.over_id.get_untracked() != over {
            self.over_id.set(over);
        }
    }

    pub fn is_dragging(&self, id: &str) -> bool {
        self.active_id.with(|active| active.as_deref() == Some(id))
    }

    /// Current transform for a sortable node (reactive)
    pub fn transform_for(&self, id: &str) -> Option<Transform> {
        let active = self.active_id.get()?;
        if active == id {
            let delta = self.delta.get();
            return Some(Transform::translate(delta.x, delta.y));
        }
        let over = self.over_id.get()?;
        self.rects.with(|measured| {
            let index_of = |key: &str| measured.iter().position(|(k, _)| k == key);
            let active_index = index_of(&active)?;
            let over_index = index_of(&over)?;
            let index = index_of(id)?;
            let rects: Vec<Rect> = measured.iter().map(|(_, r)| *r).collect();
            vertical_list_sorting_strategy(&rects, active_index, over_index, index)
        })
    }

    /// Current transition for a sortable node (reactive)
    pub fn transition_for(&self, id: &str) -> Option<&'static str> {
        if self.is_dragging(id) {
            None
        } else {
            Some(SORT_TRANSITION)
        }
    }
}

/// Get the drag context provided by an enclosing `DragDropContext`
pub fn use_dnd_context() -> DndContext {
    expect_context::<DndContext>()
}

fn mouse_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

fn touch_point(ev: &web_sys::TouchEvent) -> Option<Point> {
    let touch = ev.touches().get(0)?;
    Some(Point::new(touch.client_x() as f64, touch.client_y() as f64))
}

/// Presses that start on a control inside the row never begin a drag
fn starts_on_control(ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("button, input, textarea, [data-dnd-ignore]").ok().flatten())
        .is_some()
}

fn bind_window_listeners(ctx: DndContext) {
    let handles = vec![
        window_event_listener(ev::pointermove, move |e| ctx.pointer_moved(SensorKind::Pointer, mouse_point(&e))),
        window_event_listener(ev::mousemove, move |e| ctx.pointer_moved(SensorKind::Mouse, mouse_point(&e))),
        window_event_listener(ev::touchmove, move |e| {
            if let Some(point) = touch_point(&e) {
                ctx.pointer_moved(SensorKind::Touch, point);
            }
        }),
        window_event_listener(ev::pointerup, move |_| ctx.released(SensorKind::Pointer)),
        window_event_listener(ev::mouseup, move |_| ctx.released(SensorKind::Mouse)),
        window_event_listener(ev::touchend, move |_| ctx.released(SensorKind::Touch)),
        window_event_listener(ev::pointercancel, move |_| ctx.cancel()),
        window_event_listener(ev::touchcancel, move |_| ctx.cancel()),
        window_event_listener(ev::keydown, move |e| {
            if e.key() == "Escape" {
                ctx.cancel();
            }
        }),
    ];
    on_cleanup(move || handles.into_iter().for_each(|h| h.remove()));
}

/// Create pointerdown handler for sortable nodes
pub fn make_on_pointerdown(ctx: DndContext, id: String) -> impl Fn(web_sys::PointerEvent) + Clone + 'static {
    move |ev: web_sys::PointerEvent| {
        if ev.button() == 0 && !starts_on_control(&ev) {
            ctx.press(id.clone(), SensorKind::Pointer, mouse_point(&ev));
        }
    }
}

/// Create mousedown handler for sortable nodes
pub fn make_on_mousedown(ctx: DndContext, id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 && !starts_on_control(&ev) {
            ctx.press(id.clone(), SensorKind::Mouse, mouse_point(&ev));
        }
    }
}

/// Create touchstart handler for sortable nodes
pub fn make_on_touchstart(ctx: DndContext, id: String) -> impl Fn(web_sys::TouchEvent) + Clone + 'static {
    move |ev: web_sys::TouchEvent| {
        if starts_on_control(&ev) {
            return;
        }
        if let Some(point) = touch_point(&ev) {
            ctx.press(id.clone(), SensorKind::Touch, point);
        }
    }
}

/// Inline style for a sortable node
pub fn sortable_style(transform: Option<Transform>, transition: Option<&str>) -> String {
    let mut style = String::new();
    if let Some(t) = transform {
        style.push_str(&format!("transform: {};", t.to_css()));
    }
    if let Some(tr) = transition {
        if !style.is_empty() {
            style.push(' ');
        }
        style.push_str(&format!("transition: {};", tr));
    }
    style
}

/// Registration handle returned by `use_sortable`
#[derive(Clone, Copy)]
pub struct Sortable {
    pub ctx: DndContext,
    pub node_ref: NodeRef<html::Div>,
    pub is_dragging: Signal<bool>,
    pub style: Signal<String>,
}

/// Register the calling component as a sortable node keyed by `id`
pub fn use_sortable(id: impl Into<String>) -> Sortable {
    let ctx = use_dnd_context();
    let id: String = id.into();
    let node_ref = NodeRef::<html::Div>::new();

    ctx.register(id.clone(), node_ref);
    {
        let id = id.clone();
        on_cleanup(move || ctx.unregister(&id));
    }

    let is_dragging = {
        let id = id.clone();
        Signal::derive(move || ctx.is_dragging(&id))
    };
    let style = Signal::derive(move || sortable_style(ctx.transform_for(&id), ctx.transition_for(&id)));

    Sortable { ctx, node_ref, is_dragging, style }
}

/// Provides a `DndContext` to its children
#[component]
pub fn DragDropContext(
    sensors: Vec<Sensor>,
    #[prop(into)] on_drag_end: Callback<DragEndEvent>,
    children: Children,
) -> impl IntoView {
    let ctx = DndContext::new(sensors, on_drag_end);
    provide_context(ctx);
    children()
}

/// Declares the display order of the sortable nodes below it
#[component]
pub fn SortableContext(#[prop(into)] items: Signal<Vec<String>>, children: Children) -> impl IntoView {
    let ctx = use_dnd_context();
    Effect::new(move |_| ctx.set_items(items.get()));
    children()
}
