// Series statistics - min, max and average of a channel
use super::channel::BoundsPolicy;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStatistics {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl SeriesStatistics {
    /// Returns `None` for an empty slice.
    pub fn compute(values: &[f64]) -> Option<Self> {
        let (&first, rest) = values.split_first()?;

        let (min, max, sum) = rest
            .iter()
            .fold((first, first, first), |(min, max, sum), &v| {
                (min.min(v), max.max(v), sum + v)
            });

        Some(Self {
            min,
            max,
            average: sum / values.len() as f64,
        })
    }

    pub fn axis_bounds(&self, policy: &BoundsPolicy) -> (f64, f64) {
        policy.apply(self.min, self.max)
    }
}
