//! Numeric primitives shared by the certificate and report calculators.

/// Restrict `value` to the inclusive range `[low, high]`.
pub fn clamp<T: PartialOrd>(value: T, low: T, high: T) -> T {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// Linearly map `score` from `[0, source_max]` onto `[target_low, target_high]`,
/// rounded to the nearest integer.
///
/// Scores outside the source range clamp to its ends. A non-positive
/// `source_max` yields `target_low` rather than dividing by zero.
pub fn rescale(score: f64, source_max: f64, target_low: f64, target_high: f64) -> i64 {
    if source_max <= 0.0 {
        return target_low.round() as i64;
    }
    let ratio = clamp(score, 0.0, source_max) / source_max;
    (target_low + ratio * (target_high - target_low)).round() as i64
}

/// Scale a raw domain score (0-30) onto the certificate bar range [80, 130].
///
/// Takes `f64` because the Speed bucket averages two raw values before
/// scaling.
pub fn scale_domain(raw: f64) -> i64 {
    rescale(raw, 30.0, 80.0, 130.0)
}

/// Estimate an IQ value from a total score (0-150) onto [70, 130].
pub fn estimate_iq(total: i64) -> i64 {
    rescale(total as f64, 150.0, 70.0, 130.0)
}

/// Standard normal cumulative distribution function.
///
/// Abramowitz & Stegun 26.2.17 rational approximation with
/// `t = 1/(1 + 0.2316419|z|)` and a 5th-order polynomial in `t`, mirrored
/// around zero. Absolute error stays below 7.5e-8, well inside the 1e-6 the
/// percentile math needs.
pub fn normal_cdf(z: f64) -> f64 {
    const B0: f64 = 0.231_641_9;
    const B1: f64 = 0.319_381_530;
    const B2: f64 = -0.356_563_782;
    const B3: f64 = 1.781_477_937;
    const B4: f64 = -1.821_255_978;
    const B5: f64 = 1.330_274_429;

    let t = 1.0 / (1.0 + B0 * z.abs());
    let poly = t * (B1 + t * (B2 + t * (B3 + t * (B4 + t * B5))));
    let tail = (-z * z / 2.0).exp() / (2.0 * std::f64::consts::PI).sqrt() * poly;
    if z > 0.0 {
        1.0 - tail
    } else {
        tail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-1, 0, 10), 0);
        assert_eq!(clamp(11, 0, 10), 10);
        assert_eq!(clamp(2.5, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_estimate_iq_anchors() {
        assert_eq!(estimate_iq(0), 70);
        assert_eq!(estimate_iq(75), 100);
        assert_eq!(estimate_iq(150), 130);
        // Out-of-range totals clamp to the anchors.
        assert_eq!(estimate_iq(-20), 70);
        assert_eq!(estimate_iq(9000), 130);
    }

    #[test]
    fn test_scale_domain_anchors() {
        assert_eq!(scale_domain(0.0), 80);
        assert_eq!(scale_domain(30.0), 130);
        assert_eq!(scale_domain(15.0), 105);
        // Negative raw scores clamp to the bottom of the bar.
        assert_eq!(scale_domain(-5.0), scale_domain(0.0));
    }

    #[test]
    fn test_rescale_zero_source_max() {
        assert_eq!(rescale(10.0, 0.0, 80.0, 130.0), 80);
        assert_eq!(rescale(10.0, -1.0, 80.0, 130.0), 80);
    }

    #[test]
    fn test_normal_cdf_reference_values() {
        // Reference values from the standard normal table, 1e-6 tolerance.
        let cases = [
            (0.0, 0.5),
            (0.5, 0.691_462_461_274_013),
            (1.0, 0.841_344_746_068_543),
            (1.96, 0.975_002_104_851_780),
            (2.0, 0.977_249_868_051_821),
            (3.0, 0.998_650_101_968_370),
            (4.0, 0.999_968_328_758_167),
            (-1.0, 0.158_655_253_931_457),
            (-2.0, 0.022_750_131_948_179),
            (-3.0, 0.001_349_898_031_630),
        ];
        for (z, expected) in cases {
            let got = normal_cdf(z);
            assert!(
                (got - expected).abs() <= 1e-6,
                "normal_cdf({z}) = {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_normal_cdf_symmetry() {
        for i in 0..=40 {
            let z = i as f64 / 10.0;
            let sum = normal_cdf(z) + normal_cdf(-z);
            assert!((sum - 1.0).abs() <= 2e-7, "symmetry broken at z = {z}");
        }
    }
}
