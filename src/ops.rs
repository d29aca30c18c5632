//! Operator sugar over the named arithmetic methods.
//!
//! Binary operations between two containers can fail, so their output is
//! a [`Result`]; scalar operations cannot. Scalar operators are provided
//! for the primitive numeric types; other element types use
//! [`Vector::add_scalar`] and friends directly.

use std::ops::{Add, Mul, Sub};

use crate::errors::Result;
use crate::matrix::Matrix;
use crate::vector::Vector;

macro_rules! impl_scalar_ops {
    ($($t:ty)*) => {$(
        impl Add<$t> for &Vector<$t> {
            type Output = Vector<$t>;

            fn add(self, rhs: $t) -> Vector<$t> {
                self.add_scalar(rhs)
            }
        }

        impl Add<$t> for Vector<$t> {
            type Output = Vector<$t>;

            fn add(self, rhs: $t) -> Vector<$t> {
                self.add_scalar(rhs)
            }
        }

        impl Sub<$t> for &Vector<$t> {
            type Output = Vector<$t>;

            fn sub(self, rhs: $t) -> Vector<$t> {
                self.sub_scalar(rhs)
            }
        }

        impl Sub<$t> for Vector<$t> {
            type Output = Vector<$t>;

            fn sub(self, rhs: $t) -> Vector<$t> {
                self.sub_scalar(rhs)
            }
        }

        impl Mul<$t> for &Vector<$t> {
            type Output = Vector<$t>;

            fn mul(self, rhs: $t) -> Vector<$t> {
                self.mul_scalar(rhs)
            }
        }

        impl Mul<$t> for Vector<$t> {
            type Output = Vector<$t>;

            fn mul(self, rhs: $t) -> Vector<$t> {
                self.mul_scalar(rhs)
            }
        }
    )*};
}

impl_scalar_ops! { i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64 }

impl<'a, 'b, T> Add<&'b Vector<T>> for &'a Vector<T>
where
    T: Clone + Add<Output = T>,
{
    type Output = Result<Vector<T>>;

    fn add(self, rhs: &'b Vector<T>) -> Result<Vector<T>> {
        self.try_add(rhs)
    }
}

impl<'a, 'b, T> Sub<&'b Vector<T>> for &'a Vector<T>
where
    T: Clone + Sub<Output = T>,
{
    type Output = Result<Vector<T>>;

    fn sub(self, rhs: &'b Vector<T>) -> Result<Vector<T>> {
        self.try_sub(rhs)
    }
}

/// Dot product.
impl<'a, 'b, T> Mul<&'b Vector<T>> for &'a Vector<T>
where
    T: Clone + Default + Add<Output = T> + Mul<Output = T>,
{
    type Output = Result<T>;

    fn mul(self, rhs: &'b Vector<T>) -> Result<T> {
        self.dot(rhs)
    }
}

impl<'a, 'b, T> Add<&'b Matrix<T>> for &'a Matrix<T>
where
    T: Clone + Add<Output = T>,
{
    type Output = Result<Matrix<T>>;

    fn add(self, rhs: &'b Matrix<T>) -> Result<Matrix<T>> {
        self.try_add(rhs)
    }
}

impl<'a, 'b, T> Sub<&'b Matrix<T>> for &'a Matrix<T>
where
    T: Clone + Sub<Output = T>,
{
    type Output = Result<Matrix<T>>;

    fn sub(self, rhs: &'b Matrix<T>) -> Result<Matrix<T>> {
        self.try_sub(rhs)
    }
}
