//! Leptos DragDrop Utilities
//!
//! Sortable lists for Leptos: pointer, mouse and touch sensors with an
//! activation constraint to tell a click from a drag, closest-center
//! collision detection, and a vertical list sorting strategy that animates
//! neighbours out of the way while an item is dragged.

mod context;
mod geometry;
mod sensors;
mod sortable;

pub use context::{
    make_on_mousedown, make_on_pointerdown, make_on_touchstart, sortable_style, use_dnd_context,
    use_sortable, DndContext, DragDropContext, DragEndEvent, Sortable, SortableContext,
    SORT_TRANSITION,
};
pub use geometry::{closest_center, Point, Rect, Transform};
pub use sensors::{
    use_sensors, Activation, ActivationConstraint, Sensor, SensorKind, DEFAULT_DISTANCE_PX,
};
pub use sortable::{array_move, vertical_list_sorting_strategy};
