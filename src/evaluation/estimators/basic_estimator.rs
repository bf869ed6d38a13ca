use crate::evaluation::estimators::Estimator;

/// Plain mean of the observations; `NaN` inputs are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEstimator {
    len: usize,
    sum: f64,
}

impl Estimator for BasicEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0 {
            self.sum / self.len as f64
        } else {
            f64::NAN
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_ignores_nan() {
        let mut e = BasicEstimator::default();
        assert!(e.estimation().is_nan());
        e.add(1.0);
        e.add(f64::NAN);
        e.add(0.0);
        assert_eq!(e.count(), 2);
        assert!((e.estimation() - 0.5).abs() < 1e-12);
    }
}
