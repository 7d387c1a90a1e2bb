//! Resize a 1-D array to an odd length around its center.

use crate::error::{MeasureError, MeasureResult};

/// Pad or crop `arr` to `newsize` samples, keeping it centered.
///
/// Shorter arrays are zero-padded on both sides; longer arrays are cropped
/// to their central excerpt. An even-length input has no center sample, so
/// the excerpt is taken one sample toward the later half.
///
/// Fails if `newsize` is even.
pub fn centered(arr: &[f64], newsize: usize) -> MeasureResult<Vec<f64>> {
    if newsize % 2 == 0 {
        return Err(MeasureError::EvenTargetSize(newsize));
    }

    let n = arr.len();
    let mut out = vec![0.0; newsize];

    if n < newsize {
        let i0 = (newsize - n) / 2;
        out[i0..i0 + n].copy_from_slice(arr);
    } else {
        let mut i0 = (n - newsize) / 2;
        if n % 2 == 0 {
            i0 += 1;
        }
        out.copy_from_slice(&arr[i0..i0 + newsize]);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn same_odd_length_is_unchanged() {
        let arr = ramp(9);
        assert_eq!(centered(&arr, 9).unwrap(), arr);
    }

    #[test]
    fn rejects_even_target() {
        assert!(matches!(
            centered(&ramp(5), 4),
            Err(MeasureError::EvenTargetSize(4))
        ));
    }

    #[test]
    fn pads_odd_input_symmetrically() {
        let out = centered(&[1.0, 2.0, 3.0], 7).unwrap();
        assert_eq!(out, vec![0.0, 0.0, 1.0, 2.0, 3.0, 0.0, 0.0]);
    }

    #[test]
    fn pads_even_input() {
        let out = centered(&[1.0, 2.0, 3.0, 4.0], 7).unwrap();
        assert_eq!(out, vec![0.0, 1.0, 2.0, 3.0, 4.0, 0.0, 0.0]);
    }

    #[test]
    fn crops_odd_input_to_center() {
        let out = centered(&ramp(11), 5).unwrap();
        assert_eq!(out, vec![3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn crops_even_input_toward_later_half() {
        // (10 - 5) / 2 = 2, shifted by one
        let out = centered(&ramp(10), 5).unwrap();
        assert_eq!(out, vec![3.0, 4.0, 5.0, 6.0, 7.0]);
    }
}
