use sw_types::{Point, ProgressRecord};

/// Collects progress notifications from a search.
///
/// ```
/// use sw_engine::{find_min_tri, Point, ProgressRecorder, Step};
///
/// let mut recorder = ProgressRecorder::new();
/// let outcome = find_min_tri(
///     2,
///     Point::new(0, 0),
///     Step::new(2, 2),
///     |x, y| ((x - 3).pow(2) + (y - 4).pow(2) + 1) as f64,
///     Some(&mut recorder.callback()),
/// );
/// assert_eq!(recorder.best().map(|r| r.point), Some(outcome.point));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProgressRecorder {
    records: Vec<ProgressRecord>,
}

impl ProgressRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, point: Point, value: f64) {
        self.records.push(ProgressRecord {
            sequence: self.records.len(),
            point,
            value,
        });
    }

    /// A callback that appends to this recorder.
    pub fn callback(&mut self) -> impl FnMut(Point, f64) + '_ {
        move |point, value| self.record(point, value)
    }

    pub fn records(&self) -> &[ProgressRecord] {
        &self.records
    }

    /// The most recent record, which is the best point reported so far.
    pub fn best(&self) -> Option<&ProgressRecord> {
        self.records.last()
    }

    /// Accepted moves, not counting the starting point.
    pub fn moves(&self) -> usize {
        self.records.len().saturating_sub(1)
    }

    pub fn is_strictly_decreasing(&self) -> bool {
        self.records
            .windows(2)
            .all(|pair| pair[1].value < pair[0].value)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
