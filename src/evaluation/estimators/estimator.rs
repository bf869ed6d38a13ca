/// Running estimate of a scalar quantity fed one observation at a time.
pub trait Estimator {
    fn add(&mut self, v: f64);

    /// `NaN` until something was added.
    fn estimation(&self) -> f64;

    /// Number of observations that counted.
    fn count(&self) -> usize;
}
