//! Sortable list helpers: reorder and the vertical list sorting strategy.

use crate::geometry::{Rect, Transform};

/// Move the element at `from` to `to`, shifting the elements in between.
///
/// This is a single remove + insert, not a swap. Out-of-range indices leave
/// the order untouched.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    if from >= moved.len() || to >= moved.len() || from == to {
        return moved;
    }
    let item = moved.remove(from);
    moved.insert(to, item);
    moved
}

/// Space between the item at `index` and its neighbour, measured on the side
/// the active item is coming from.
fn item_gap(rects: &[Rect], index: usize, active_index: usize) -> f64 {
    let Some(current) = rects.get(index) else { return 0.0 };
    let previous = index.checked_sub(1).and_then(|i| rects.get(i));
    let next = rects.get(index + 1);

    let gap_before = previous.map(|p| current.top - p.bottom());
    let gap_after = next.map(|n| n.top - current.bottom());

    if active_index < index {
        gap_before.or(gap_after).unwrap_or(0.0)
    } else {
        gap_after.or(gap_before).unwrap_or(0.0)
    }
}

/// Vertical list sorting strategy.
///
/// Given the measured rects (in list order), the active and over indices,
/// returns the transform for the item at `index`. Items between the active and
/// over positions shift by the active item's height plus gap to open a slot;
/// the active item itself is offset onto the over slot.
pub fn vertical_list_sorting_strategy(
    rects: &[Rect],
    active_index: usize,
    over_index: usize,
    index: usize,
) -> Option<Transform> {
    let active = rects.get(active_index)?;

    if index == active_index {
        let over = rects.get(over_index)?;
        let y = if active_index < over_index {
            over.bottom() - active.bottom()
        } else {
            over.top - active.top
        };
        return Some(Transform::translate(0.0, y));
    }

    let gap = item_gap(rects, index, active_index);

    if index > active_index && index <= over_index {
        return Some(Transform::translate(0.0, -active.height - gap));
    }
    if index < active_index && index >= over_index {
        return Some(Transform::translate(0.0, active.height + gap));
    }
    Some(Transform::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[(u32, &str)]) -> Vec<u32> {
        items.iter().map(|(id, _)| *id).collect()
    }

    #[test]
    fn test_array_move_last_to_first() {
        let list = vec![(1, "A"), (2, "B"), (3, "C")];
        assert_eq!(ids(&array_move(&list, 2, 0)), vec![3, 1, 2]);
    }

    #[test]
    fn test_array_move_first_to_last() {
        let list = vec![(1, "A"), (2, "B"), (3, "C"), (4, "D")];
        assert_eq!(ids(&array_move(&list, 0, 3)), vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_array_move_is_a_move_not_a_swap() {
        let list = vec![1, 2, 3, 4, 5];
        assert_eq!(array_move(&list, 1, 3), vec![1, 3, 4, 2, 5]);
    }

    #[test]
    fn test_array_move_preserves_every_item() {
        let list: Vec<u32> = (0..6).collect();
        for from in 0..list.len() {
            for to in 0..list.len() {
                let mut moved = array_move(&list, from, to);
                assert_eq!(moved[to], list[from]);
                moved.sort();
                assert_eq!(moved, list);
            }
        }
    }

    #[test]
    fn test_array_move_out_of_range_is_noop() {
        let list = vec![1, 2, 3];
        assert_eq!(array_move(&list, 5, 0), list);
        assert_eq!(array_move(&list, 0, 3), list);
    }

    fn column() -> Vec<Rect> {
        // 40px rows with 10px gaps
        (0..4).map(|i| Rect::new(0.0, i as f64 * 50.0, 200.0, 40.0)).collect()
    }

    #[test]
    fn test_vertical_strategy_dragging_down() {
        let rects = column();
        // active 0 hovering over 2: items 1 and 2 move up one slot
        assert_eq!(
            vertical_list_sorting_strategy(&rects, 0, 2, 1),
            Some(Transform::translate(0.0, -50.0))
        );
        assert_eq!(
            vertical_list_sorting_strategy(&rects, 0, 2, 2),
            Some(Transform::translate(0.0, -50.0))
        );
        assert_eq!(
            vertical_list_sorting_strategy(&rects, 0, 2, 3),
            Some(Transform::default())
        );
        assert_eq!(
            vertical_list_sorting_strategy(&rects, 0, 2, 0),
            Some(Transform::translate(0.0, 100.0))
        );
    }

    #[test]
    fn test_vertical_strategy_dragging_up() {
        let rects = column();
        assert_eq!(
            vertical_list_sorting_strategy(&rects, 3, 1, 1),
            Some(Transform::translate(0.0, 50.0))
        );
        assert_eq!(
            vertical_list_sorting_strategy(&rects, 3, 1, 0),
            Some(Transform::default())
        );
        assert_eq!(
            vertical_list_sorting_strategy(&rects, 3, 1, 3),
            Some(Transform::translate(0.0, -100.0))
        );
    }

    #[test]
    fn test_vertical_strategy_unmeasured_active() {
        assert_eq!(vertical_list_sorting_strategy(&[], 0, 0, 0), None);
    }
}
