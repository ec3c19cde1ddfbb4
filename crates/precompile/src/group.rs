//! Short Weierstrass groups `y^2 = x^3 + b` shared by G1 and G2 of both curves.
//!
//! Projective arithmetic uses the complete formulas of Renes, Costello and Batina
//! ("Complete addition formulas for prime order elliptic curves", algorithms 7 and 9) for
//! `a = 0`. They have no exceptional cases on groups of odd order, which covers every group
//! handled here, so identity and doubling inputs need no branches.

use crate::scalar::Scalar;
use core::ops::Add;
use std::vec::Vec;

/// Projective group element as seen by the generic multiplication routines.
pub(crate) trait ProjectivePoint: Copy + Add<Output = Self> {
    /// Group identity.
    fn identity() -> Self;

    /// Returns `2 * self`.
    fn double(&self) -> Self;
}

/// Double-and-add over all [`Scalar::BITS`] bits.
///
/// Each iteration doubles and adds, the scalar bit only selects which value is kept, so the
/// sequence of group operations does not depend on the scalar.
pub(crate) fn mul<P: ProjectivePoint>(point: &P, scalar: &Scalar) -> P {
    let mut acc = P::identity();
    for i in (0..Scalar::BITS).rev() {
        acc = acc.double();
        let sum = acc + *point;
        if scalar.bit(i) {
            acc = sum;
        }
    }
    acc
}

/// Bucket window width for `n` terms.
fn msm_window_size(n: usize) -> usize {
    if n < 32 {
        3
    } else {
        // ~ln(n) + 2
        (usize::BITS - n.leading_zeros()) as usize * 69 / 100 + 2
    }
}

/// Multi-scalar multiplication `sum(scalars[i] * points[i])` using Pippenger's bucket method.
pub(crate) fn msm<P: ProjectivePoint>(points: &[P], scalars: &[Scalar]) -> P {
    debug_assert_eq!(points.len(), scalars.len());
    if points.is_empty() {
        return P::identity();
    }
    if points.len() == 1 {
        return mul(&points[0], &scalars[0]);
    }

    let c = msm_window_size(points.len());
    let windows = Scalar::BITS.div_ceil(c);
    let mut buckets: Vec<P> = vec![P::identity(); (1 << c) - 1];

    let mut acc = P::identity();
    for w in (0..windows).rev() {
        for _ in 0..c {
            acc = acc.double();
        }

        buckets.fill(P::identity());
        for (point, scalar) in points.iter().zip(scalars) {
            let index = scalar.window(w * c, c);
            if index != 0 {
                buckets[index - 1] = buckets[index - 1] + *point;
            }
        }

        // sum_i i * bucket_i as a running sum from the top bucket down.
        let mut running = P::identity();
        let mut window_sum = P::identity();
        for bucket in buckets.iter().rev() {
            running = running + *bucket;
            window_sum = window_sum + running;
        }
        acc = acc + window_sum;
    }
    acc
}

/// Generates an affine and a projective point type for `y^2 = x^3 + b` over `$field`.
///
/// `b3` must equal `3 * b`; `order` is the prime subgroup order used for membership checks.
macro_rules! weierstrass_curve {
    (
        $(#[$affine_attr:meta])*
        $affine:ident,
        $(#[$projective_attr:meta])*
        $projective:ident,
        field: $field:ident,
        b: $b:expr,
        b3: $b3:expr,
        order: $order:expr $(,)?
    ) => {
        $(#[$affine_attr])*
        #[derive(Clone, Copy, Debug)]
        pub struct $affine {
            x: $field,
            y: $field,
            infinity: bool,
        }

        impl $affine {
            /// Curve coefficient `b`.
            pub const B: $field = $b;
            /// Order of the prime subgroup.
            pub const ORDER: $crate::scalar::Scalar = $order;

            /// The point at infinity.
            pub const fn identity() -> Self {
                Self {
                    x: $field::ZERO,
                    y: $field::ZERO,
                    infinity: true,
                }
            }

            /// Creates a finite point without any membership check.
            pub const fn from_xy_unchecked(x: $field, y: $field) -> Self {
                Self {
                    x,
                    y,
                    infinity: false,
                }
            }

            /// Creates a finite point, returning `None` if it is not on the curve.
            pub fn from_xy(x: $field, y: $field) -> Option<Self> {
                let point = Self::from_xy_unchecked(x, y);
                point.is_on_curve().then_some(point)
            }

            /// Affine `x` coordinate. Zero for the point at infinity.
            #[inline]
            pub fn x(&self) -> $field {
                self.x
            }

            /// Affine `y` coordinate. Zero for the point at infinity.
            #[inline]
            pub fn y(&self) -> $field {
                self.y
            }

            /// Returns `true` for the point at infinity.
            #[inline]
            pub const fn is_identity(&self) -> bool {
                self.infinity
            }

            /// Checks the curve equation. The point at infinity is on the curve.
            pub fn is_on_curve(&self) -> bool {
                self.infinity || self.y.square() == self.x.square() * self.x + Self::B
            }

            /// Checks membership of the prime order subgroup as `[r]P = O`.
            pub fn is_torsion_free(&self) -> bool {
                self.to_projective().mul(&Self::ORDER).is_identity()
            }

            /// Converts to projective coordinates.
            pub fn to_projective(&self) -> $projective {
                if self.infinity {
                    $projective::identity()
                } else {
                    $projective {
                        x: self.x,
                        y: self.y,
                        z: $field::ONE,
                    }
                }
            }
        }

        impl PartialEq for $affine {
            fn eq(&self, other: &Self) -> bool {
                match (self.infinity, other.infinity) {
                    (true, true) => true,
                    (false, false) => self.x == other.x && self.y == other.y,
                    _ => false,
                }
            }
        }

        impl Eq for $affine {}

        impl core::ops::Neg for $affine {
            type Output = $affine;

            #[inline]
            fn neg(self) -> $affine {
                if self.infinity {
                    self
                } else {
                    $affine::from_xy_unchecked(self.x, -self.y)
                }
            }
        }

        $(#[$projective_attr])*
        #[derive(Clone, Copy, Debug)]
        pub struct $projective {
            x: $field,
            y: $field,
            z: $field,
        }

        impl $projective {
            const B3: $field = $b3;

            /// The group identity, `(0 : 1 : 0)`.
            pub const fn identity() -> Self {
                Self {
                    x: $field::ZERO,
                    y: $field::ONE,
                    z: $field::ZERO,
                }
            }

            /// Returns `true` for the group identity.
            #[inline]
            pub fn is_identity(&self) -> bool {
                self.z.is_zero()
            }

            /// Returns `2 * self`.
            pub fn double(&self) -> Self {
                let t0 = self.y.square();
                let z3 = t0.double().double().double();
                let t1 = self.y * self.z;
                let t2 = self.z.square() * Self::B3;
                let x3 = t2 * z3;
                let y3 = t0 + t2;
                let z3 = t1 * z3;
                let t0 = t0 - (t2.double() + t2);
                let y3 = t0 * y3 + x3;
                let x3 = (t0 * (self.x * self.y)).double();
                Self {
                    x: x3,
                    y: y3,
                    z: z3,
                }
            }

            /// Converts to affine coordinates.
            pub fn to_affine(&self) -> $affine {
                match self.z.invert() {
                    Some(z_inv) => $affine::from_xy_unchecked(self.x * z_inv, self.y * z_inv),
                    None => $affine::identity(),
                }
            }

            /// Scalar multiplication, see [`crate::group::mul`].
            pub fn mul(&self, scalar: &$crate::scalar::Scalar) -> Self {
                $crate::group::mul(self, scalar)
            }
        }

        impl core::ops::Add for $projective {
            type Output = $projective;

            fn add(self, rhs: $projective) -> $projective {
                let t0 = self.x * rhs.x;
                let t1 = self.y * rhs.y;
                let t2 = self.z * rhs.z;
                let t3 = (self.x + self.y) * (rhs.x + rhs.y) - (t0 + t1);
                let t4 = (self.y + self.z) * (rhs.y + rhs.z) - (t1 + t2);
                let y3 = (self.x + self.z) * (rhs.x + rhs.z) - (t0 + t2);
                let t0 = t0.double() + t0;
                let t2 = t2 * Self::B3;
                let z3 = t1 + t2;
                let t1 = t1 - t2;
                let y3 = y3 * Self::B3;
                let x3 = t3 * t1 - t4 * y3;
                let y3 = y3 * t0 + t1 * z3;
                let z3 = z3 * t4 + t0 * t3;
                $projective {
                    x: x3,
                    y: y3,
                    z: z3,
                }
            }
        }

        impl core::ops::Neg for $projective {
            type Output = $projective;

            #[inline]
            fn neg(self) -> $projective {
                $projective {
                    x: self.x,
                    y: -self.y,
                    z: self.z,
                }
            }
        }

        impl core::ops::Sub for $projective {
            type Output = $projective;

            #[inline]
            fn sub(self, rhs: $projective) -> $projective {
                self + (-rhs)
            }
        }

        impl PartialEq for $projective {
            fn eq(&self, other: &Self) -> bool {
                match (self.is_identity(), other.is_identity()) {
                    (true, true) => true,
                    (false, false) => {
                        self.x * other.z == other.x * self.z
                            && self.y * other.z == other.y * self.z
                    }
                    _ => false,
                }
            }
        }

        impl Eq for $projective {}

        impl From<$affine> for $projective {
            fn from(point: $affine) -> Self {
                point.to_projective()
            }
        }

        impl $crate::group::ProjectivePoint for $projective {
            #[inline]
            fn identity() -> Self {
                $projective::identity()
            }

            #[inline]
            fn double(&self) -> Self {
                $projective::double(self)
            }
        }
    };
}
