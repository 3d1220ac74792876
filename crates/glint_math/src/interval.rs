/// A closed parameter range `[min, max]` along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Same lower bound, new upper bound. Used to shrink the search range
    /// once a closer hit is known.
    pub fn with_max(&self, max: f64) -> Interval {
        Interval::new(self.min, max)
    }

    /// Everything from `min` to positive infinity.
    pub fn from_min(min: f64) -> Interval {
        Interval::new(min, f64::INFINITY)
    }
}
