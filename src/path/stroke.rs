use crate::foundation::core::Point;

/// Ordered freehand points in surface coordinates. Order defines stroke direction.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokePath {
    points: Vec<Point>,
}

impl StrokePath {
    /// Start a new stroke at `start`.
    pub fn begin(start: Point) -> Self {
        Self {
            points: vec![start],
        }
    }

    /// Append a point to the end of the stroke.
    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Points in stroke order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of recorded points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Return `true` when no points were recorded.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A stroke needs at least two points to define a direction.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }
}

impl From<Vec<Point>> for StrokePath {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for StrokePath {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
