use crate::errors::ContingencyError;

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    let mut s = String::new();
    for i in items {
        s.push_str(i);
        s.push_str(&String::from(", "));
    }
    s
}

/// Round a float to a given number of decimal places.
pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}

/// Check that observed and expected slices line up and that every expected
/// count is strictly positive. Shared by the statistic and residual
/// computations, which are undefined otherwise.
///
/// * `cols` - Number of columns used to report the failing cell; pass the
///   slice length for 1-D inputs.
pub fn validate_observed_expected(
    observed: &[u64],
    expected: &[f64],
    cols: usize,
) -> Result<(), ContingencyError> {
    if observed.len() != expected.len() {
        return Err(ContingencyError::InvalidShape(
            format!("{} expected counts", observed.len()),
            format!("{}", expected.len()),
        ));
    }
    for (idx, &e) in expected.iter().enumerate() {
        if !(e > 0.0) {
            return Err(ContingencyError::DegenerateExpectation(idx / cols, idx % cols, e));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_round() {
        assert_eq!(0.3, precision_round(0.3333, 1));
        assert_eq!(0.2343, precision_round(0.2343123123123, 4));
    }

    #[test]
    fn test_validate_mismatched_lengths() {
        let res = validate_observed_expected(&[1, 2, 3], &[1.0, 2.0], 3);
        assert!(res.is_err());
    }

    #[test]
    fn test_validate_degenerate_cell() {
        let res = validate_observed_expected(&[1, 2, 3, 4], &[1.0, 2.0, 0.0, 4.0], 2);
        match res {
            Err(ContingencyError::DegenerateExpectation(i, j, e)) => {
                assert_eq!((i, j), (1, 0));
                assert_eq!(e, 0.0);
            }
            _ => panic!("expected DegenerateExpectation"),
        }
    }

    #[test]
    fn test_validate_nan_cell() {
        let res = validate_observed_expected(&[1, 2], &[1.0, f64::NAN], 2);
        assert!(res.is_err());
    }
}
