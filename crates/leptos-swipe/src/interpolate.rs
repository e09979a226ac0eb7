//! Piecewise-linear mappings.

/// Map `x` through the polyline defined by `input` -> `output`.
///
/// `input` must be ascending. Values outside the input range clamp to the
/// end points. Only the first `min(input.len(), output.len())` points are
/// used; with no usable points the result is 0.
pub fn interpolate(x: f64, input: &[f64], output: &[f64]) -> f64 {
    let n = input.len().min(output.len());
    let (input, output) = (&input[..n], &output[..n]);
    let (Some(&first), Some(&last)) = (input.first(), input.last()) else {
        return 0.0;
    };
    if x <= first {
        return output[0];
    }
    if x >= last {
        return output[n - 1];
    }

    for i in 1..n {
        let (x0, x1) = (input[i - 1], input[i]);
        if x <= x1 {
            let span = x1 - x0;
            if span == 0.0 {
                return output[i];
            }
            let t = (x - x0) / span;
            return output[i - 1] + t * (output[i] - output[i - 1]);
        }
    }
    output[n - 1]
}

/// Elastic drag constraint: motion past `bound` is compressed by `elastic`.
pub fn elastic_clamp(x: f64, bound: f64, elastic: f64) -> f64 {
    if x > bound {
        bound + (x - bound) * elastic
    } else if x < -bound {
        -bound + (x + bound) * elastic
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_point_line() {
        let input = [-300.0, 300.0];
        let output = [-15.0, 15.0];
        assert_eq!(interpolate(0.0, &input, &output), 0.0);
        assert_eq!(interpolate(150.0, &input, &output), 7.5);
        assert_eq!(interpolate(-300.0, &input, &output), -15.0);
    }

    #[test]
    fn test_clamps_outside_range() {
        let input = [-300.0, 300.0];
        let output = [-15.0, 15.0];
        assert_eq!(interpolate(900.0, &input, &output), 15.0);
        assert_eq!(interpolate(-900.0, &input, &output), -15.0);
    }

    #[test]
    fn test_multi_segment() {
        let input = [-300.0, -50.0, 0.0, 50.0, 300.0];
        let output = [0.0, 1.0, 1.0, 1.0, 0.0];
        assert_eq!(interpolate(175.0, &input, &output), 0.5);
        assert_eq!(interpolate(-175.0, &input, &output), 0.5);
        assert_eq!(interpolate(25.0, &input, &output), 1.0);
    }

    #[test]
    fn test_mismatched_point_lists() {
        // Output shorter than input: extra input points are ignored
        assert_eq!(interpolate(500.0, &[-300.0, 300.0, 600.0], &[-15.0, 15.0]), 15.0);
        assert_eq!(interpolate(10.0, &[-300.0, 300.0], &[]), 0.0);
        assert_eq!(interpolate(10.0, &[], &[1.0]), 0.0);
    }

    #[test]
    fn test_elastic_clamp() {
        assert_eq!(elastic_clamp(200.0, 400.0, 0.1), 200.0);
        assert_eq!(elastic_clamp(500.0, 400.0, 0.1), 410.0);
        assert_eq!(elastic_clamp(-500.0, 400.0, 0.1), -410.0);
        assert_eq!(elastic_clamp(-400.0, 400.0, 0.1), -400.0);
    }
}
