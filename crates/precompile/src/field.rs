//! Macros generating the prime fields and the `Fp2 -> Fp6 -> Fp12` extension towers.
//!
//! Every curve instantiates the same tower shape with its own constants:
//! `Fp2 = Fp[u]/(u^2 + 1)`, `Fp6 = Fp2[v]/(v^3 - xi)`, `Fp12 = Fp6[w]/(w^2 - v)`.
//! The generated types are small `Copy` values so tower arithmetic is monomorphic and inlined.

/// Implements the compound assignment operators on top of the binary ones.
macro_rules! impl_assign_ops {
    ($t:ident) => {
        impl core::ops::AddAssign for $t {
            #[inline]
            fn add_assign(&mut self, rhs: $t) {
                *self = *self + rhs;
            }
        }

        impl core::ops::SubAssign for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: $t) {
                *self = *self - rhs;
            }
        }

        impl core::ops::MulAssign for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                *self = *self * rhs;
            }
        }
    };
}

/// Generates a prime field element type in Montgomery form.
///
/// `modulus`, `r` (`2^(64*limbs) mod p`), `r2` (`r^2 mod p`) and `modulus_minus_two` are
/// little-endian limbs; `inv` is `-p^-1 mod 2^64`.
macro_rules! prime_field {
    (
        $(#[$attr:meta])*
        $name:ident {
            limbs: $n:expr,
            bytes: $bytes:expr,
            modulus: $modulus:expr,
            r: $r:expr,
            r2: $r2:expr,
            inv: $inv:expr,
            modulus_minus_two: $pm2:expr $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name([u64; $n]);

        impl $name {
            /// Field modulus as little-endian limbs.
            pub(crate) const MODULUS: [u64; $n] = $modulus;
            const R2: [u64; $n] = $r2;
            const INV: u64 = $inv;
            const MODULUS_MINUS_TWO: [u64; $n] = $pm2;

            /// Length of the big-endian encoding in bytes.
            pub const BYTES: usize = $bytes;
            /// Additive identity.
            pub const ZERO: Self = Self([0; $n]);
            /// Multiplicative identity.
            pub const ONE: Self = Self($r);

            /// Converts canonical little-endian limbs into a field element.
            ///
            /// The input must be smaller than the modulus.
            pub const fn from_raw(limbs: [u64; $n]) -> Self {
                Self($crate::arithmetic::montgomery_mul(
                    &limbs,
                    &Self::R2,
                    &Self::MODULUS,
                    Self::INV,
                ))
            }

            /// Converts a small integer into a field element.
            pub const fn from_u64(value: u64) -> Self {
                let mut limbs = [0u64; $n];
                limbs[0] = value;
                Self::from_raw(limbs)
            }

            /// Returns the canonical (non-Montgomery) limbs.
            const fn to_canonical(&self) -> [u64; $n] {
                let mut one = [0u64; $n];
                one[0] = 1;
                $crate::arithmetic::montgomery_mul(&self.0, &one, &Self::MODULUS, Self::INV)
            }

            /// Decodes a big-endian integer, returning `None` if it is not smaller than the
            /// modulus.
            pub fn from_be_bytes(bytes: &[u8; $bytes]) -> Option<Self> {
                let limbs = $crate::arithmetic::limbs_from_be_bytes::<$n>(bytes);
                if !$crate::arithmetic::lt(&limbs, &Self::MODULUS) {
                    return None;
                }
                Some(Self::from_raw(limbs))
            }

            /// Encodes the canonical value as a big-endian integer.
            pub fn to_be_bytes(&self) -> [u8; $bytes] {
                let mut out = [0u8; $bytes];
                $crate::arithmetic::limbs_to_be_bytes(&self.to_canonical(), &mut out);
                out
            }

            /// Returns `true` for the additive identity.
            #[inline]
            pub const fn is_zero(&self) -> bool {
                $crate::arithmetic::is_zero(&self.0)
            }

            /// Returns `2 * self`.
            #[inline]
            pub fn double(&self) -> Self {
                *self + *self
            }

            /// Returns `self^2`.
            #[inline]
            pub fn square(&self) -> Self {
                *self * *self
            }

            /// Exponentiation by a little-endian limb exponent. Not constant time.
            pub fn pow_vartime(&self, exp: &[u64]) -> Self {
                let mut res = Self::ONE;
                for limb in exp.iter().rev() {
                    for i in (0..64).rev() {
                        res = res.square();
                        if (limb >> i) & 1 == 1 {
                            res *= *self;
                        }
                    }
                }
                res
            }

            /// Multiplicative inverse via Fermat's little theorem, `None` for zero.
            pub fn invert(&self) -> Option<Self> {
                if self.is_zero() {
                    return None;
                }
                Some(self.pow_vartime(&Self::MODULUS_MINUS_TWO))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("0x")?;
                for byte in self.to_be_bytes() {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }

        impl core::ops::Add for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: $name) -> $name {
                $name($crate::arithmetic::add_mod(&self.0, &rhs.0, &Self::MODULUS))
            }
        }

        impl core::ops::Sub for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: $name) -> $name {
                $name($crate::arithmetic::sub_mod(&self.0, &rhs.0, &Self::MODULUS))
            }
        }

        impl core::ops::Mul for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> $name {
                $name($crate::arithmetic::montgomery_mul(
                    &self.0,
                    &rhs.0,
                    &Self::MODULUS,
                    Self::INV,
                ))
            }
        }

        impl core::ops::Neg for $name {
            type Output = $name;

            #[inline]
            fn neg(self) -> $name {
                $name($crate::arithmetic::neg_mod(&self.0, &Self::MODULUS))
            }
        }

        impl_assign_ops!($name);
    };
}

/// Generates `Fp2 = Fp[u]/(u^2 + 1)`.
///
/// `xi_c0` is the real part of the sextic non-residue `xi = xi_c0 + u`.
macro_rules! quadratic_extension {
    (
        $(#[$attr:meta])*
        $name:ident over $base:ident, xi_c0: $xi:expr
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name {
            /// Real part.
            pub c0: $base,
            /// Imaginary part, coefficient of `u`.
            pub c1: $base,
        }

        impl $name {
            const XI_C0: $base = $xi;

            /// Additive identity.
            pub const ZERO: Self = Self::new($base::ZERO, $base::ZERO);
            /// Multiplicative identity.
            pub const ONE: Self = Self::new($base::ONE, $base::ZERO);

            /// Creates an element from its coefficients.
            pub const fn new(c0: $base, c1: $base) -> Self {
                Self { c0, c1 }
            }

            /// Returns `true` for the additive identity.
            #[inline]
            pub const fn is_zero(&self) -> bool {
                self.c0.is_zero() && self.c1.is_zero()
            }

            /// Complex conjugate, which is also the `p`-power Frobenius map.
            #[inline]
            pub fn conjugate(&self) -> Self {
                Self::new(self.c0, -self.c1)
            }

            /// Returns `2 * self`.
            #[inline]
            pub fn double(&self) -> Self {
                Self::new(self.c0.double(), self.c1.double())
            }

            /// Returns `self^2`.
            #[inline]
            pub fn square(&self) -> Self {
                let a = self.c0 + self.c1;
                let b = self.c0 - self.c1;
                let c = self.c0.double();
                Self::new(a * b, c * self.c1)
            }

            /// Multiplies by `xi = xi_c0 + u`.
            #[inline]
            pub fn mul_by_nonresidue(&self) -> Self {
                Self::new(
                    self.c0 * Self::XI_C0 - self.c1,
                    self.c0 + self.c1 * Self::XI_C0,
                )
            }

            /// Multiplies both coefficients by a base field element.
            #[inline]
            pub fn mul_by_base(&self, rhs: $base) -> Self {
                Self::new(self.c0 * rhs, self.c1 * rhs)
            }

            /// Multiplicative inverse, `None` for zero.
            pub fn invert(&self) -> Option<Self> {
                let t = (self.c0.square() + self.c1.square()).invert()?;
                Some(Self::new(self.c0 * t, -(self.c1 * t)))
            }

            /// Exponentiation by a little-endian limb exponent. Not constant time.
            pub fn pow_vartime(&self, exp: &[u64]) -> Self {
                let mut res = Self::ONE;
                for limb in exp.iter().rev() {
                    for i in (0..64).rev() {
                        res = res.square();
                        if (limb >> i) & 1 == 1 {
                            res *= *self;
                        }
                    }
                }
                res
            }
        }

        impl core::ops::Add for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: $name) -> $name {
                $name::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
            }
        }

        impl core::ops::Sub for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: $name) -> $name {
                $name::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
            }
        }

        impl core::ops::Mul for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> $name {
                let aa = self.c0 * rhs.c0;
                let bb = self.c1 * rhs.c1;
                let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - aa - bb;
                $name::new(aa - bb, c1)
            }
        }

        impl core::ops::Neg for $name {
            type Output = $name;

            #[inline]
            fn neg(self) -> $name {
                $name::new(-self.c0, -self.c1)
            }
        }

        impl_assign_ops!($name);
    };
}

/// Generates `Fp6 = Fp2[v]/(v^3 - xi)`.
macro_rules! cubic_extension {
    (
        $(#[$attr:meta])*
        $name:ident over $fp2:ident
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name {
            /// Coefficient of `1`.
            pub c0: $fp2,
            /// Coefficient of `v`.
            pub c1: $fp2,
            /// Coefficient of `v^2`.
            pub c2: $fp2,
        }

        impl $name {
            /// Additive identity.
            pub const ZERO: Self = Self::new($fp2::ZERO, $fp2::ZERO, $fp2::ZERO);
            /// Multiplicative identity.
            pub const ONE: Self = Self::new($fp2::ONE, $fp2::ZERO, $fp2::ZERO);

            /// Creates an element from its coefficients.
            pub const fn new(c0: $fp2, c1: $fp2, c2: $fp2) -> Self {
                Self { c0, c1, c2 }
            }

            /// Returns `true` for the additive identity.
            #[inline]
            pub const fn is_zero(&self) -> bool {
                self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
            }

            /// Multiplies by `v`.
            #[inline]
            pub fn mul_by_nonresidue(&self) -> Self {
                Self::new(self.c2.mul_by_nonresidue(), self.c0, self.c1)
            }

            /// Returns `self^2`.
            #[inline]
            pub fn square(&self) -> Self {
                *self * *self
            }

            /// Multiplicative inverse, `None` for zero.
            pub fn invert(&self) -> Option<Self> {
                let c0 = self.c0.square() - (self.c1 * self.c2).mul_by_nonresidue();
                let c1 = self.c2.square().mul_by_nonresidue() - self.c0 * self.c1;
                let c2 = self.c1.square() - self.c0 * self.c2;
                let t = ((self.c1 * c2) + (self.c2 * c1)).mul_by_nonresidue() + self.c0 * c0;
                let t = t.invert()?;
                Some(Self::new(t * c0, t * c1, t * c2))
            }
        }

        impl core::ops::Add for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: $name) -> $name {
                $name::new(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
            }
        }

        impl core::ops::Sub for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: $name) -> $name {
                $name::new(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
            }
        }

        impl core::ops::Mul for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> $name {
                let aa = self.c0 * rhs.c0;
                let bb = self.c1 * rhs.c1;
                let cc = self.c2 * rhs.c2;

                let c0 = ((self.c1 + self.c2) * (rhs.c1 + rhs.c2) - bb - cc).mul_by_nonresidue() + aa;
                let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - aa - bb + cc.mul_by_nonresidue();
                let c2 = (self.c0 + self.c2) * (rhs.c0 + rhs.c2) - aa - cc + bb;
                $name::new(c0, c1, c2)
            }
        }

        impl core::ops::Neg for $name {
            type Output = $name;

            #[inline]
            fn neg(self) -> $name {
                $name::new(-self.c0, -self.c1, -self.c2)
            }
        }

        impl_assign_ops!($name);
    };
}

/// Generates `Fp12 = Fp6[w]/(w^2 - v)`.
///
/// `gamma` is `xi^((p - 1) / 6)`, from which the Frobenius coefficient table is derived
/// once on first use.
macro_rules! dodecic_extension {
    (
        $(#[$attr:meta])*
        $name:ident over $fp6:ident, $fp2:ident, gamma: $gamma:expr
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name {
            /// Coefficient of `1`.
            pub c0: $fp6,
            /// Coefficient of `w`.
            pub c1: $fp6,
        }

        impl $name {
            /// Multiplicative identity.
            pub const ONE: Self = Self::new($fp6::ONE, $fp6::ZERO);

            /// Creates an element from its coefficients.
            pub const fn new(c0: $fp6, c1: $fp6) -> Self {
                Self { c0, c1 }
            }

            /// Returns `true` for the multiplicative identity.
            #[inline]
            pub fn is_one(&self) -> bool {
                *self == Self::ONE
            }

            /// Conjugation over `Fp6`, which is the `p^6`-power Frobenius map.
            #[inline]
            pub fn conjugate(&self) -> Self {
                Self::new(self.c0, -self.c1)
            }

            /// Returns `self^2`.
            pub fn square(&self) -> Self {
                let ab = self.c0 * self.c1;
                let c0 = (self.c1.mul_by_nonresidue() + self.c0) * (self.c0 + self.c1)
                    - ab
                    - ab.mul_by_nonresidue();
                Self::new(c0, ab + ab)
            }

            /// Multiplicative inverse, `None` for zero.
            pub fn invert(&self) -> Option<Self> {
                let t = (self.c0.square() - self.c1.square().mul_by_nonresidue()).invert()?;
                Some(Self::new(self.c0 * t, -(self.c1 * t)))
            }

            /// Exponentiation by a little-endian limb exponent. Not constant time.
            pub fn pow_vartime(&self, exp: &[u64]) -> Self {
                let mut res = Self::ONE;
                let mut started = false;
                for limb in exp.iter().rev() {
                    for i in (0..64).rev() {
                        if started {
                            res = res.square();
                        }
                        if (limb >> i) & 1 == 1 {
                            res *= *self;
                            started = true;
                        }
                    }
                }
                res
            }

            /// Frobenius coefficients `gamma[n - 1][k] = xi^(k * (p^n - 1) / 6)` for
            /// `n = 1, 2, 3` and `k = 0..6`.
            pub(crate) fn frobenius_coefficients() -> &'static [[$fp2; 6]; 3] {
                static COEFFICIENTS: once_cell::race::OnceBox<[[$fp2; 6]; 3]> =
                    once_cell::race::OnceBox::new();
                COEFFICIENTS.get_or_init(|| {
                    let gamma: $fp2 = $gamma;
                    let mut table = [[$fp2::ONE; 6]; 3];
                    for k in 1..6 {
                        table[0][k] = table[0][k - 1] * gamma;
                    }
                    for k in 0..6 {
                        table[1][k] = table[0][k] * table[0][k].conjugate();
                        table[2][k] = table[1][k] * table[0][k];
                    }
                    std::boxed::Box::new(table)
                })
            }

            /// Raises to the `p^power`, for `power` in `1..=3`.
            pub fn frobenius_map(&self, power: usize) -> Self {
                debug_assert!((1..=3).contains(&power));
                let gamma = &Self::frobenius_coefficients()[power - 1];
                // Coefficients of w^0 .. w^5.
                let mut c = [
                    self.c0.c0, self.c1.c0, self.c0.c1, self.c1.c1, self.c0.c2, self.c1.c2,
                ];
                for (k, ck) in c.iter_mut().enumerate() {
                    if power % 2 == 1 {
                        *ck = ck.conjugate();
                    }
                    *ck *= gamma[k];
                }
                Self::new($fp6::new(c[0], c[2], c[4]), $fp6::new(c[1], c[3], c[5]))
            }
        }

        impl core::ops::Mul for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> $name {
                let aa = self.c0 * rhs.c0;
                let bb = self.c1 * rhs.c1;
                let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - aa - bb;
                $name::new(bb.mul_by_nonresidue() + aa, c1)
            }
        }

        impl core::ops::MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: $name) {
                *self = *self * rhs;
            }
        }
    };
}
