use std::{fmt, ops::Index, slice};

use thiserror::Error;

/// Errors that can occur during vector arithmetic.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    #[error("dimension mismatch: left has {left} components, right has {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("operation requires {expected} components, vector has {actual}")]
    UnsupportedDimension { expected: usize, actual: usize },

    #[error("division by zero")]
    DivisionByZero,
}

/// An N-dimensional vector of `f64` components.
///
/// The length is fixed at construction. All arithmetic returns a new vector
/// and leaves the operands untouched; callers that want in-place semantics
/// rebind the result.
///
/// Binary operations require both operands to have the same length and fail
/// with [`VectorError::DimensionMismatch`] otherwise.
///
/// # Examples
///
/// ```
/// use ballistic_core::VectorN;
///
/// let a = VectorN::from([1.0, 2.0, 3.0]);
/// let b = VectorN::from([4.0, 5.0, 6.0]);
///
/// assert_eq!(a.add(&b).unwrap(), VectorN::from([5.0, 7.0, 9.0]));
/// assert_eq!(a.dot(&b).unwrap(), 32.0);
/// assert!(a.add(&VectorN::zeros(2)).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct VectorN(Vec<f64>);

impl VectorN {
    /// Creates a vector from its components.
    #[must_use]
    pub fn new(components: Vec<f64>) -> Self {
        Self(components)
    }

    /// Creates a vector of `n` zero components.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self(vec![0.0; n])
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the vector has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Returns the first component, if present.
    #[must_use]
    pub fn x(&self) -> Option<f64> {
        self.0.first().copied()
    }

    /// Returns the second component, if present.
    #[must_use]
    pub fn y(&self) -> Option<f64> {
        self.0.get(1).copied()
    }

    /// Returns the third component, if present.
    #[must_use]
    pub fn z(&self) -> Option<f64> {
        self.0.get(2).copied()
    }

    /// Returns the elementwise sum `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the lengths differ.
    pub fn add(&self, other: &Self) -> Result<Self, VectorError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Returns the elementwise difference `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the lengths differ.
    pub fn subtract(&self, other: &Self) -> Result<Self, VectorError> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Returns the vector with every component multiplied by `scalar`.
    #[must_use]
    pub fn scale(&self, scalar: f64) -> Self {
        self.0.iter().map(|x| x * scalar).collect()
    }

    /// Returns the vector with every component divided by `scalar`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivisionByZero`] if `scalar` is exactly zero.
    pub fn divide(&self, scalar: f64) -> Result<Self, VectorError> {
        if scalar == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(self.0.iter().map(|x| x / scalar).collect())
    }

    /// Returns the sum of elementwise products.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<f64, VectorError> {
        self.check_len(other)?;
        Ok(self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum())
    }

    /// Returns the 3D cross product `self × other`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::UnsupportedDimension`] if either operand does not
    /// have exactly three components.
    pub fn cross(&self, other: &Self) -> Result<Self, VectorError> {
        let (&[ax, ay, az], &[bx, by, bz]) = (self.as_slice(), other.as_slice()) else {
            let actual = if self.len() == 3 {
                other.len()
            } else {
                self.len()
            };
            return Err(VectorError::UnsupportedDimension {
                expected: 3,
                actual,
            });
        };

        Ok(Self(vec![
            ay * bz - az * by,
            az * bx - ax * bz,
            ax * by - ay * bx,
        ]))
    }

    /// Returns the Euclidean norm.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.0.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    fn check_len(&self, other: &Self) -> Result<(), VectorError> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(VectorError::DimensionMismatch {
                left: self.len(),
                right: other.len(),
            })
        }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Result<Self, VectorError> {
        self.check_len(other)?;
        Ok(self.0.iter().zip(&other.0).map(|(&a, &b)| f(a, b)).collect())
    }
}

impl From<Vec<f64>> for VectorN {
    fn from(components: Vec<f64>) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<[f64; N]> for VectorN {
    fn from(components: [f64; N]) -> Self {
        Self(components.to_vec())
    }
}

impl FromIterator<f64> for VectorN {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<usize> for VectorN {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a VectorN {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for VectorN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}
