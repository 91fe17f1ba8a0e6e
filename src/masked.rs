//! Masked arrays and argument normalization.
//!
//! A [`Masked`] array pairs an `ndarray::ArrayD<f64>` with a parallel boolean
//! mask (`true` = missing). Masked slots always hold NaN in the data array.
//! [`map_n`] broadcasts its arguments to a common shape (NumPy rules), masks
//! every element where any argument is masked or NaN, and evaluates a scalar
//! kernel on the rest.

use ndarray::{ArrayD, IxDyn, Zip};

use crate::error::AppError;

#[derive(Clone, Debug, PartialEq)]
pub struct Masked {
    data: ArrayD<f64>,
    mask: ArrayD<bool>,
}

impl Masked {
    /// Builds a masked array from data and an explicit mask of the same shape.
    pub fn new(mut data: ArrayD<f64>, mask: ArrayD<bool>) -> Result<Self, AppError> {
        if data.shape() != mask.shape() {
            return Err(AppError::ShapeMismatch {
                shapes: vec![data.shape().to_vec(), mask.shape().to_vec()],
            });
        }
        Zip::from(&mut data).and(&mask).for_each(|v, &m| {
            if m {
                *v = f64::NAN;
            }
        });
        Ok(Self { data, mask })
    }

    /// Wraps plain data; NaN elements become masked.
    pub fn from_array(data: ArrayD<f64>) -> Self {
        let mask = data.mapv(f64::is_nan);
        Self { data, mask }
    }

    /// Wraps data that marks missing values with `sentinel` (e.g. `-9e99`).
    pub fn from_sentinel(data: ArrayD<f64>, sentinel: f64) -> Self {
        let mask = data.mapv(|v| v == sentinel || v.is_nan());
        let data = data.mapv(|v| if v == sentinel { f64::NAN } else { v });
        Self { data, mask }
    }

    /// One-dimensional array; `None` elements are masked.
    pub fn from_options(values: &[Option<f64>]) -> Self {
        let data: Vec<f64> = values.iter().map(|v| v.unwrap_or(f64::NAN)).collect();
        Self::from(data)
    }

    /// Zero-dimensional array holding one value.
    pub fn scalar(value: f64) -> Self {
        Self::from_array(ArrayD::from_elem(IxDyn(&[]), value))
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    pub fn mask(&self) -> &ArrayD<bool> {
        &self.mask
    }

    /// Number of masked elements.
    pub fn masked_count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }

    /// Value at `index`, `None` if masked or out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        match self.mask.get(index) {
            Some(false) => self.data.get(index).copied(),
            _ => None,
        }
    }

    /// Data with masked slots replaced by `fill`.
    pub fn filled(&self, fill: f64) -> ArrayD<f64> {
        let mut out = self.data.clone();
        Zip::from(&mut out).and(&self.mask).for_each(|v, &m| {
            if m {
                *v = fill;
            }
        });
        out
    }

    /// Elements in row-major order, `None` where masked.
    pub fn to_options(&self) -> Vec<Option<f64>> {
        self.data
            .iter()
            .zip(self.mask.iter())
            .map(|(&v, &m)| (!m).then_some(v))
            .collect()
    }
}

impl From<f64> for Masked {
    fn from(value: f64) -> Self {
        Self::scalar(value)
    }
}

impl From<Vec<f64>> for Masked {
    fn from(values: Vec<f64>) -> Self {
        Self::from_array(ndarray::Array1::from(values).into_dyn())
    }
}

impl From<Vec<Option<f64>>> for Masked {
    fn from(values: Vec<Option<f64>>) -> Self {
        Self::from_options(&values)
    }
}

impl From<&[Option<f64>]> for Masked {
    fn from(values: &[Option<f64>]) -> Self {
        Self::from_options(values)
    }
}

impl From<ArrayD<f64>> for Masked {
    fn from(data: ArrayD<f64>) -> Self {
        Self::from_array(data)
    }
}

/// Common shape of `shapes` under NumPy broadcasting rules.
pub fn broadcast_shape(shapes: &[&[usize]]) -> Result<Vec<usize>, AppError> {
    let ndim = shapes.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut out = vec![1usize; ndim];
    for shape in shapes {
        let offset = ndim - shape.len();
        for (axis, &len) in shape.iter().enumerate() {
            let target = &mut out[offset + axis];
            if len == 1 {
                continue;
            }
            if *target == 1 {
                *target = len;
            } else if *target != len {
                return Err(AppError::ShapeMismatch {
                    shapes: shapes.iter().map(|s| s.to_vec()).collect(),
                });
            }
        }
    }
    Ok(out)
}

/// Evaluates `kernel` element-wise over the broadcast arguments.
///
/// An output element is masked when any argument element is masked or NaN,
/// or when `kernel` returns `None`. Shapes that do not broadcast are an error.
pub fn map_n<const N: usize, F>(inputs: [&Masked; N], kernel: F) -> Result<Masked, AppError>
where
    F: Fn([f64; N]) -> Option<f64>,
{
    let shapes: Vec<&[usize]> = inputs.iter().map(|m| m.shape()).collect();
    let shape = broadcast_shape(&shapes)?;
    let dim = IxDyn(&shape);

    let mut columns = Vec::with_capacity(N);
    for input in inputs {
        let (Some(data), Some(mask)) = (input.data.broadcast(dim.clone()), input.mask.broadcast(dim.clone()))
        else {
            return Err(AppError::ShapeMismatch {
                shapes: shapes.iter().map(|s| s.to_vec()).collect(),
            });
        };
        let data: Vec<f64> = data.iter().copied().collect();
        let mask: Vec<bool> = mask.iter().copied().collect();
        columns.push((data, mask));
    }

    let len: usize = shape.iter().product();
    let mut data = Vec::with_capacity(len);
    let mut mask = Vec::with_capacity(len);
    for idx in 0..len {
        let args: [f64; N] = std::array::from_fn(|k| columns[k].0[idx]);
        let missing = columns.iter().any(|(_, m)| m[idx]) || args.iter().any(|v| v.is_nan());
        let value = if missing { None } else { kernel(args) };
        data.push(value.unwrap_or(f64::NAN));
        mask.push(value.is_none());
    }

    Ok(Masked {
        data: ArrayD::from_shape_vec(dim.clone(), data)?,
        mask: ArrayD::from_shape_vec(dim, mask)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    #[test]
    fn broadcast_follows_numpy_rules() {
        assert_eq!(broadcast_shape(&[&[3], &[], &[1]]).unwrap(), vec![3]);
        assert_eq!(broadcast_shape(&[&[2, 1], &[3]]).unwrap(), vec![2, 3]);
        assert_eq!(broadcast_shape(&[&[0], &[1]]).unwrap(), vec![0]);
        assert!(broadcast_shape(&[&[3], &[4]]).is_err());
    }

    #[test]
    fn scalar_broadcasts_against_vector() {
        let sa = Masked::from(vec![1.0, 2.0, 3.0]);
        let k = Masked::scalar(10.0);
        let out = map_n([&sa, &k], |[a, b]| Some(a * b)).unwrap();
        assert_eq!(out.shape(), &[3]);
        assert_eq!(out.to_options(), vec![Some(10.0), Some(20.0), Some(30.0)]);
    }

    #[test]
    fn column_and_row_make_a_grid() {
        let col = Masked::from_array(array![[1.0], [2.0]].into_dyn());
        let row = Masked::from(vec![10.0, 20.0, 30.0]);
        let out = map_n([&col, &row], |[a, b]| Some(a + b)).unwrap();
        assert_eq!(out.shape(), &[2, 3]);
        assert_eq!(out.get(&[1, 2]), Some(32.0));
    }

    #[test]
    fn masked_or_nan_inputs_mask_outputs() {
        let a = Masked::from_options(&[Some(1.0), None, Some(3.0), Some(f64::NAN)]);
        let b = Masked::from(vec![1.0, 1.0, 1.0, 1.0]);
        let out = map_n([&a, &b], |[x, y]| Some(x + y)).unwrap();
        assert_eq!(out.to_options(), vec![Some(2.0), None, Some(4.0), None]);
        assert_eq!(out.masked_count(), 2);
        assert!(out.data()[[1]].is_nan());
    }

    #[test]
    fn kernel_none_masks_element() {
        let a = Masked::from(vec![-1.0, 1.0]);
        let out = map_n([&a], |[x]| (x > 0.0).then_some(x)).unwrap();
        assert_eq!(out.to_options(), vec![None, Some(1.0)]);
    }

    #[test]
    fn mismatched_shapes_are_rejected() {
        let a = Masked::from(vec![1.0, 2.0, 3.0]);
        let b = Masked::from(vec![1.0, 2.0]);
        let err = map_n([&a, &b], |[x, y]| Some(x + y)).unwrap_err();
        assert!(matches!(err, AppError::ShapeMismatch { .. }));
    }

    #[test]
    fn sentinel_values_are_masked() {
        let m = Masked::from_sentinel(array![1.0, -9e99, 2.0].into_dyn(), -9e99);
        assert_eq!(m.to_options(), vec![Some(1.0), None, Some(2.0)]);
        assert_eq!(m.filled(0.0), array![1.0, 0.0, 2.0].into_dyn());
    }

    #[test]
    fn explicit_mask_must_match_data() {
        let data = Array2::<f64>::zeros((2, 2)).into_dyn();
        let mask = ndarray::Array1::from(vec![true, false]).into_dyn();
        assert!(Masked::new(data.clone(), mask).is_err());

        let mask = array![[true, false], [false, false]].into_dyn();
        let m = Masked::new(data, mask).unwrap();
        assert_eq!(m.get(&[0, 0]), None);
        assert_eq!(m.get(&[1, 1]), Some(0.0));
        assert_eq!(m.get(&[5, 5]), None);
    }

    #[test]
    fn empty_arrays_stay_empty() {
        let a = Masked::from(Vec::<f64>::new());
        let out = map_n([&a, &Masked::scalar(1.0)], |[x, y]| Some(x + y)).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.shape(), &[0]);
    }
}
