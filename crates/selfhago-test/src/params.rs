//! Regression test parameters and operations

use crate::error::TestError;
use selfhago_core::Image;

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, and success status. Every comparison
/// records a [`TestError`] instead of panicking, so one test binary
/// can report all mismatches at once; `cleanup()` returns the verdict.
pub struct RegParams {
    /// Name of the test (e.g., "bilateral")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "bilateral")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn record(&mut self, failure: TestError) {
        eprintln!("Failure in {}_reg: {}", self.test_name, failure);
        self.failures.push(failure);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value (typically a reference result)
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.record(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            });
            false
        } else {
            true
        }
    }

    /// Assert that a condition holds
    ///
    /// # Arguments
    ///
    /// * `condition` - Condition that must be true
    /// * `label` - Description shown on failure
    pub fn compare_bool(&mut self, condition: bool, label: &str) -> bool {
        self.index += 1;

        if !condition {
            self.record(TestError::ConditionFailed {
                index: self.index,
                label: label.to_string(),
            });
            false
        } else {
            true
        }
    }

    /// Compare two images channel by channel within a tolerance
    ///
    /// # Arguments
    ///
    /// * `image1` - First image
    /// * `image2` - Second image
    /// * `delta` - Maximum allowed per-channel difference
    ///
    /// # Returns
    ///
    /// `true` if the images have equal dimensions and every channel of
    /// every pixel matches within delta, `false` otherwise.
    pub fn compare_images(&mut self, image1: &Image, image2: &Image, delta: f32) -> bool {
        self.index += 1;

        if image1.width() != image2.width() || image1.height() != image2.height() {
            self.record(TestError::ImageMismatch {
                index: self.index,
                detail: "dimension mismatch".to_string(),
            });
            return false;
        }

        for (i, (p1, p2)) in image1.data().iter().zip(image2.data()).enumerate() {
            let channels = [
                (p1.r, p2.r),
                (p1.g, p2.g),
                (p1.b, p2.b),
                (p1.a, p2.a),
            ];
            if channels.iter().any(|(a, b)| (a - b).abs() > delta) {
                let x = i as u32 % image1.width();
                let y = i as u32 / image1.width();
                self.record(TestError::ImageMismatch {
                    index: self.index,
                    detail: format!("pixel mismatch at ({}, {})", x, y),
                });
                return false;
            }
        }

        true
    }

    /// Get list of recorded failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }

    /// Finish the test and report the overall result
    ///
    /// # Returns
    ///
    /// `true` if all comparisons succeeded, `false` otherwise.
    pub fn cleanup(&self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg ({} checks)", self.test_name, self.index);
        } else {
            eprintln!(
                "FAILURE: {}_reg ({} of {} checks failed)",
                self.test_name,
                self.failures.len(),
                self.index
            );
        }
        self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selfhago_core::Rgba;

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("params_values");
        assert!(rp.compare_values(1.0, 1.05, 0.1));
        assert!(!rp.compare_values(1.0, 2.0, 0.1));
        assert_eq!(rp.index(), 2);
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_images_tracks_failures() {
        let mut rp = RegParams::new("params_images");
        let a = Image::new_with_value(4, 4, Rgba::gray(0.5)).unwrap();
        let b = Image::new_with_value(4, 4, Rgba::gray(0.6)).unwrap();
        assert!(rp.compare_images(&a, &a.clone(), 0.0));
        assert!(!rp.compare_images(&a, &b, 0.05));
        assert!(rp.compare_images(&a, &b, 0.2));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_failures_are_structured() {
        let mut rp = RegParams::new("params_failures");
        rp.compare_values(1.0, 2.0, 0.1);
        rp.compare_bool(false, "never holds");
        let a = Image::new_with_value(2, 2, Rgba::BLACK).unwrap();
        let b = Image::new_with_value(3, 2, Rgba::BLACK).unwrap();
        rp.compare_images(&a, &b, 0.0);

        let failures = rp.failures();
        assert_eq!(failures.len(), 3);
        assert!(matches!(
            failures[0],
            TestError::ValueMismatch { index: 1, .. }
        ));
        assert!(matches!(
            failures[1],
            TestError::ConditionFailed { index: 2, .. }
        ));
        assert!(matches!(
            failures[2],
            TestError::ImageMismatch { index: 3, .. }
        ));
        assert!(!rp.cleanup());
    }
}
