//! BN254 groups: G1 over `Fq` with `b = 3`, G2 over `Fq2` on the D-type sextic twist
//! with `b' = 3 / (9 + u)`.

use super::fields::{Fq, Fq2};
use crate::scalar::Scalar;

/// Order `r` of the G1 and G2 subgroups.
pub const FR_MODULUS: Scalar = Scalar::from_limbs([
    0x43e1f593f0000001,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
]);

weierstrass_curve! {
    /// BN254 G1 point in affine coordinates.
    G1Affine,
    /// BN254 G1 point in projective coordinates.
    G1Projective,
    field: Fq,
    b: Fq::from_u64(3),
    b3: Fq::from_u64(9),
    order: FR_MODULUS,
}

weierstrass_curve! {
    /// BN254 G2 point in affine coordinates.
    G2Affine,
    /// BN254 G2 point in projective coordinates.
    G2Projective,
    field: Fq2,
    b: Fq2::new(
        Fq::from_raw([
            0x3267e6dc24a138e5,
            0xb5b4c5e559dbefa3,
            0x81be18991be06ac3,
            0x2b149d40ceb8aaae,
        ]),
        Fq::from_raw([
            0xe4a2bd0685c315d2,
            0xa74fa084e52d1852,
            0xcd2cafadeed8fdf4,
            0x009713b03af0fed4,
        ]),
    ),
    b3: Fq2::new(
        Fq::from_raw([
            0x1ef69c66bce9b021,
            0xf21b7c8d3cb039cf,
            0x1499be5e509e8f8f,
            0x20753adca9c6bfb8,
        ]),
        Fq::from_raw([
            0xade8371391494176,
            0xf5eee18eaf8748f8,
            0x67860f09cc8af9dd,
            0x01c53b10b0d2fc7e,
        ]),
    ),
    order: FR_MODULUS,
}

impl G1Affine {
    /// The generator `(1, 2)`.
    pub const fn generator() -> Self {
        Self::from_xy_unchecked(Fq::ONE, Fq::from_u64(2))
    }
}

impl G2Affine {
    /// The generator fixed by EIP-197.
    pub const fn generator() -> Self {
        Self::from_xy_unchecked(
            Fq2::new(
                Fq::from_raw([
                    0x46debd5cd992f6ed,
                    0x674322d4f75edadd,
                    0x426a00665e5c4479,
                    0x1800deef121f1e76,
                ]),
                Fq::from_raw([
                    0x97e485b7aef312c2,
                    0xf1aa493335a9e712,
                    0x7260bfb731fb5d25,
                    0x198e9393920d483a,
                ]),
            ),
            Fq2::new(
                Fq::from_raw([
                    0x4ce6cc0166fa7daa,
                    0xe3d1e7690c43d37b,
                    0x4aab71808dcb408f,
                    0x12c85ea5db8c6deb,
                ]),
                Fq::from_raw([
                    0x55acdadcd122975b,
                    0xbc4b313370b38ef3,
                    0xec9e99ad690c3395,
                    0x090689d0585ff075,
                ]),
            ),
        )
    }
}
