//! Length-generic vector arithmetic on plain `f64` slices
//!
//! The integrator works on fixed `NVec3` values, but anything arriving from
//! outside (scenario files, exported rows) is an arbitrary-length list. These
//! helpers check shapes at that boundary and never mutate their inputs.

use crate::error::{Error, Result};
use crate::simulation::states::NVec3;

/// Euclidean length, sqrt of the sum of squares
pub fn norm(v: &[f64]) -> Result<f64> {
    if v.is_empty() {
        return Err(Error::EmptyVector);
    }
    Ok(v.iter().map(|x| x * x).sum::<f64>().sqrt())
}

/// Elementwise sum of all `vectors`, which must share one length
pub fn add(vectors: &[&[f64]]) -> Result<Vec<f64>> {
    let first = vectors.first().ok_or(Error::EmptyVector)?;
    let len = first.len();

    let mut out = vec![0.0; len];
    for v in vectors {
        if v.len() != len {
            return Err(Error::ShapeMismatch {
                expected: len,
                found: v.len(),
            });
        }
        for (o, x) in out.iter_mut().zip(v.iter()) {
            *o += x;
        }
    }
    Ok(out)
}

/// Elementwise multiplication by `s`
pub fn scale(v: &[f64], s: f64) -> Vec<f64> {
    v.iter().map(|x| x * s).collect()
}

/// Checked conversion of a list into a 3-vector
pub fn to_nvec3(v: &[f64]) -> Result<NVec3> {
    match v {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(Error::ShapeMismatch {
            expected: 3,
            found: v.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn norm_of_three_four_zero_is_five() {
        assert_relative_eq!(norm(&[3.0, 4.0, 0.0]).unwrap(), 5.0);
    }

    #[test]
    fn norm_rejects_empty() {
        assert!(matches!(norm(&[]), Err(Error::EmptyVector)));
    }

    #[test]
    fn add_is_commutative_and_associative() {
        let a: &[f64] = &[1.5, -2.0, 3.25, 7.0];
        let b: &[f64] = &[0.5, 4.0, -1.0, 2.0];
        let c: &[f64] = &[10.0, 0.125, 6.0, -3.0];

        assert_eq!(add(&[a, b]).unwrap(), add(&[b, a]).unwrap());

        let ab = add(&[a, b]).unwrap();
        let bc = add(&[b, c]).unwrap();
        let left = add(&[ab.as_slice(), c]).unwrap();
        let right = add(&[a, bc.as_slice()]).unwrap();
        for (l, r) in left.iter().zip(right.iter()) {
            assert_relative_eq!(*l, *r);
        }
        assert_eq!(add(&[a, b, c]).unwrap(), left);
    }

    #[test]
    fn add_rejects_mismatched_lengths() {
        let three: &[f64] = &[1.0, 2.0, 3.0];
        let two: &[f64] = &[1.0, 2.0];
        let err = add(&[three, two]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { expected: 3, found: 2 }));
    }

    #[test]
    fn add_rejects_no_operands() {
        assert!(matches!(add(&[]), Err(Error::EmptyVector)));
    }

    #[test]
    fn scale_by_one_and_zero() {
        let v = [2.0, -3.5, 1e10];
        assert_eq!(scale(&v, 1.0), v.to_vec());
        assert_eq!(scale(&v, 0.0), vec![0.0; 3]);
    }

    #[test]
    fn to_nvec3_checks_length() {
        assert_eq!(to_nvec3(&[1.0, 2.0, 3.0]).unwrap(), NVec3::new(1.0, 2.0, 3.0));
        assert!(matches!(
            to_nvec3(&[1.0, 2.0]),
            Err(Error::ShapeMismatch { expected: 3, found: 2 })
        ));
    }
}
