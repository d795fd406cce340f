//! L4 Atomic Layer: Clamped piecewise-linear interpolation
//!
//! Inputs outside the breakpoint domain hold the nearest boundary output; the
//! mapping never extrapolates.

use super::timing::lerp;

/// Map `value` through the breakpoints `input` onto `output`
///
/// `input` may be ascending or descending (e.g. `[-10.0, -50.0]`) and must be
/// the same length as `output`. A segment whose two breakpoints are equal
/// resolves to its right-hand output.
pub fn interpolate(value: f64, input: &[f64], output: &[f64]) -> f64 {
    let n = input.len().min(output.len());
    debug_assert!(n >= 2, "interpolate needs at least two breakpoints");
    match n {
        0 => return value,
        1 => return output[0],
        _ => {}
    }

    let ascending = input[0] <= input[n - 1];
    let at = |i: usize| if ascending { i } else { n - 1 - i };

    if value.is_nan() || value <= input[at(0)] {
        return output[at(0)];
    }
    if value >= input[at(n - 1)] {
        return output[at(n - 1)];
    }

    for k in 0..n - 1 {
        let (a, b) = (at(k), at(k + 1));
        let (x0, x1) = (input[a], input[b]);
        if value <= x1 {
            if x1 == x0 {
                return output[b];
            }
            let t = (value - x0) / (x1 - x0);
            return lerp(output[a], output[b], t);
        }
    }

    output[at(n - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_ascending_two_point() {
        assert!(approx(interpolate(0.5, &[0.0, 1.0], &[0.0, 80.0]), 40.0));
        assert_eq!(interpolate(-1.0, &[0.0, 1.0], &[0.0, 80.0]), 0.0);
        assert_eq!(interpolate(2.0, &[0.0, 1.0], &[0.0, 80.0]), 80.0);
    }

    #[test]
    fn test_descending_domain() {
        let input = [-10.0, -50.0];
        let output = [0.0, -50.0];
        assert!(approx(interpolate(-30.0, &input, &output), -25.0));
        assert_eq!(interpolate(0.0, &input, &output), 0.0);
        assert_eq!(interpolate(-80.0, &input, &output), -50.0);
    }

    #[test]
    fn test_three_point_segments() {
        let input = [-50.0, -45.0, 0.0];
        let output = [1.3, 1.0, 1.0];
        assert!(approx(interpolate(-47.5, &input, &output), 1.15));
        assert_eq!(interpolate(-20.0, &input, &output), 1.0);
        assert_eq!(interpolate(-200.0, &input, &output), 1.3);
        assert_eq!(interpolate(30.0, &input, &output), 1.0);
    }

    #[test]
    fn test_reversed_output_range() {
        assert!(approx(interpolate(0.25, &[0.0, 1.0], &[1.0, 0.0]), 0.75));
        assert!(approx(interpolate(0.95, &[0.9, 1.0], &[0.0, 1.0]), 0.5));
    }

    #[test]
    fn test_nan_holds_first_boundary() {
        assert_eq!(interpolate(f64::NAN, &[0.0, 1.0], &[3.0, 4.0]), 3.0);
    }
}
