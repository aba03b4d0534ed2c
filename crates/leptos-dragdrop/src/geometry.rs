//! Geometry primitives used by collision detection and sorting strategies.

/// A point in client (viewport) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned client rect of a measured node
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Rect shifted by a drag delta
    pub fn translated(&self, delta: Point) -> Rect {
        Rect::new(self.left + delta.x, self.top + delta.y, self.width, self.height)
    }
}

impl From<&web_sys::DomRect> for Rect {
    fn from(r: &web_sys::DomRect) -> Self {
        Rect::new(r.left(), r.top(), r.width(), r.height())
    }
}

/// Visual offset applied to a sortable node while sorting
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, scale_x: 1.0, scale_y: 1.0 }
    }
}

impl Transform {
    pub fn translate(x: f64, y: f64) -> Self {
        Self { x, y, ..Default::default() }
    }

    /// CSS `transform` value
    pub fn to_css(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scaleX({}) scaleY({})",
            self.x, self.y, self.scale_x, self.scale_y
        )
    }
}

/// Closest-center collision detection.
///
/// Returns the id of the droppable whose center lies nearest to the center of
/// `collision_rect`. Ties resolve to the earliest droppable.
pub fn closest_center(collision_rect: Rect, droppables: &[(String, Rect)]) -> Option<String> {
    let center = collision_rect.center();
    droppables
        .iter()
        .map(|(id, rect)| (id, rect.center().distance_to(center)))
        .fold(None::<(&String, f64)>, |best, (id, dist)| match best {
            Some((_, best_dist)) if best_dist <= dist => best,
            _ => Some((id, dist)),
        })
        .map(|(id, _)| id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column() -> Vec<(String, Rect)> {
        vec![
            ("a".to_string(), Rect::new(0.0, 0.0, 100.0, 40.0)),
            ("b".to_string(), Rect::new(0.0, 50.0, 100.0, 40.0)),
            ("c".to_string(), Rect::new(0.0, 100.0, 100.0, 40.0)),
        ]
    }

    #[test]
    fn test_transform_css() {
        assert_eq!(
            Transform::translate(0.0, -50.0).to_css(),
            "translate3d(0px, -50px, 0) scaleX(1) scaleY(1)"
        );
        assert_eq!(
            Transform::translate(2.5, 10.0).to_css(),
            "translate3d(2.5px, 10px, 0) scaleX(1) scaleY(1)"
        );
    }

    #[test]
    fn test_closest_center_picks_nearest() {
        let rects = column();
        // "a" dragged down by 55px sits closest to "b"
        let dragged = rects[0].1.translated(Point::new(0.0, 55.0));
        assert_eq!(closest_center(dragged, &rects), Some("b".to_string()));

        let dragged = rects[0].1.translated(Point::new(0.0, 400.0));
        assert_eq!(closest_center(dragged, &rects), Some("c".to_string()));
    }

    #[test]
    fn test_closest_center_without_movement_is_self() {
        let rects = column();
        assert_eq!(closest_center(rects[1].1, &rects), Some("b".to_string()));
    }

    #[test]
    fn test_closest_center_ties_keep_first() {
        let rects = vec![
            ("x".to_string(), Rect::new(0.0, 0.0, 10.0, 10.0)),
            ("y".to_string(), Rect::new(0.0, 20.0, 10.0, 10.0)),
        ];
        let between = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert_eq!(closest_center(between, &rects), Some("x".to_string()));
    }

    #[test]
    fn test_closest_center_empty() {
        assert_eq!(closest_center(Rect::default(), &[]), None);
    }
}
