//! Index-stride downsampling.

use crate::domain::growth_index::TimeSeries;
use crate::shared::Granularity;

/// Keep the element at index `i` iff `i % granularity == 0`.
///
/// The result has `ceil(len / granularity)` elements and element `i` is
/// `items[i * granularity]`. Stride 1 is the identity.
pub fn downsample<T: Clone>(items: &[T], granularity: Granularity) -> Vec<T> {
    items.iter().step_by(granularity.get()).cloned().collect()
}

impl TimeSeries {
    /// A copy of this series keeping every `granularity`-th point.
    pub fn downsampled(&self, granularity: Granularity) -> TimeSeries {
        TimeSeries::new(self.label.clone(), downsample(&self.points, granularity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::growth_index::GrowthPoint;
    use chrono::{Duration, NaiveDate};

    fn weekly(n: usize) -> TimeSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let points = (0..n)
            .map(|i| GrowthPoint::new(start + Duration::weeks(i as i64), i as f64))
            .collect();
        TimeSeries::new("s", points)
    }

    #[test]
    fn test_length_is_ceil_of_len_over_stride() {
        for len in 0..20usize {
            for g in Granularity::options() {
                let out = downsample(&(0..len).collect::<Vec<_>>(), g);
                assert_eq!(out.len(), len.div_ceil(g.get()), "len={} g={}", len, g);
            }
        }
    }

    #[test]
    fn test_element_i_is_input_i_times_stride() {
        let input: Vec<usize> = (0..17).collect();
        for g in Granularity::options() {
            let out = downsample(&input, g);
            for (i, v) in out.iter().enumerate() {
                assert_eq!(*v, input[i * g.get()]);
            }
        }
    }

    #[test]
    fn test_stride_one_is_identity() {
        let series = weekly(9);
        assert_eq!(series.downsampled(Granularity::ONE), series);
    }

    #[test]
    fn test_odd_stride_and_empty() {
        let g = Granularity::new(3).unwrap();
        assert_eq!(downsample(&[1, 2, 3, 4, 5, 6, 7], g), [1, 4, 7]);
        assert!(downsample::<u8>(&[], g).is_empty());
    }

    #[test]
    fn test_series_keeps_label() {
        let out = weekly(8).downsampled(Granularity::TWO);
        assert_eq!(out.label, "s");
        let values: Vec<f64> = out.points.iter().map(|p| p.value).collect();
        assert_eq!(values, [0.0, 2.0, 4.0, 6.0]);
    }
}
