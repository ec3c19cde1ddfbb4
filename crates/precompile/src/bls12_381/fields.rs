//! BLS12-381 base field `Fp` and its extension tower, `xi = 1 + u`.

prime_field! {
    /// Element of the BLS12-381 base field, a 381-bit prime.
    Fp {
        limbs: 6,
        bytes: 48,
        modulus: [
            0xb9feffffffffaaab,
            0x1eabfffeb153ffff,
            0x6730d2a0f6b0f624,
            0x64774b84f38512bf,
            0x4b1ba7b6434bacd7,
            0x1a0111ea397fe69a,
        ],
        r: [
            0x760900000002fffd,
            0xebf4000bc40c0002,
            0x5f48985753c758ba,
            0x77ce585370525745,
            0x5c071a97a256ec6d,
            0x15f65ec3fa80e493,
        ],
        r2: [
            0xf4df1f341c341746,
            0x0a76e6a609d104f1,
            0x8de5476c4c95b6d5,
            0x67eb88a9939d83c0,
            0x9a793e85b519952d,
            0x11988fe592cae3aa,
        ],
        inv: 0x89f3fffcfffcfffd,
        modulus_minus_two: [
            0xb9feffffffffaaa9,
            0x1eabfffeb153ffff,
            0x6730d2a0f6b0f624,
            0x64774b84f38512bf,
            0x4b1ba7b6434bacd7,
            0x1a0111ea397fe69a,
        ],
    }
}

quadratic_extension! {
    /// Element of `Fp2 = Fp[u]/(u^2 + 1)`.
    Fp2 over Fp, xi_c0: Fp::ONE
}

cubic_extension! {
    /// Element of `Fp6 = Fp2[v]/(v^3 - (1 + u))`.
    Fp6 over Fp2
}

dodecic_extension! {
    /// Element of `Fp12 = Fp6[w]/(w^2 - v)`, the pairing target field.
    Fp12 over Fp6, Fp2, gamma: Fp2::new(
        Fp::from_raw([
            0x8d0775ed92235fb8,
            0xf67ea53d63e7813d,
            0x7b2443d784bab9c4,
            0x0fd603fd3cbd5f4f,
            0xc231beb4202c0d1f,
            0x1904d3bf02bb0667,
        ]),
        Fp::from_raw([
            0x2cf78a126ddc4af3,
            0x282d5ac14d6c7ec2,
            0xec0c8ec971f63c5f,
            0x54a14787b6c7b36f,
            0x88e9e902231f9fb8,
            0x00fc3e2b36c4e032,
        ]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;

    fn fp12_sample() -> Fp12 {
        let fp2 = |a: u64, b: u64| Fp2::new(Fp::from_u64(a), Fp::from_u64(b));
        Fp12::new(
            Fp6::new(fp2(13, 2), fp2(3, 41), fp2(5, 6)),
            Fp6::new(fp2(7, 8), fp2(97, 10), fp2(11, 12)),
        )
    }

    #[test]
    fn canonical_encoding() {
        let bytes = hex!("17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb");
        let fp = Fp::from_be_bytes(&bytes).unwrap();
        assert_eq!(fp.to_be_bytes(), bytes);

        let modulus = hex!("1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab");
        assert!(Fp::from_be_bytes(&modulus).is_none());
        assert!(Fp::from_be_bytes(&[0xff; 48]).is_none());
        let mut below = modulus;
        below[47] -= 1;
        assert_eq!(Fp::from_be_bytes(&below), Some(-Fp::ONE));
    }

    #[test]
    fn tower_inverses() {
        let a = Fp::from_u64(0xd201000000010000);
        assert_eq!(a * a.invert().unwrap(), Fp::ONE);

        let b = Fp2::new(a, Fp::from_u64(3));
        assert_eq!(b * b.invert().unwrap(), Fp2::ONE);
        // u^2 = -1
        let u = Fp2::new(Fp::ZERO, Fp::ONE);
        assert_eq!(u.square(), -Fp2::ONE);
        assert_eq!(Fp2::ONE.mul_by_nonresidue(), Fp2::new(Fp::ONE, Fp::ONE));

        let f = fp12_sample();
        assert_eq!(f * f.invert().unwrap(), Fp12::ONE);
        assert_eq!(f.square(), f * f);
    }

    #[test]
    fn frobenius_gamma_is_xi_power() {
        // (p - 1) / 6
        let exp = [
            0x49aa7ffffffff1c7,
            0x051caaaa72e35555,
            0xe688231ad3c82906,
            0xe613e1eb7deb831f,
            0x0c849bf3b5e1f223,
            0x045582fc5eeaa66f,
        ];
        let xi = Fp2::new(Fp::ONE, Fp::ONE);
        assert_eq!(Fp12::frobenius_coefficients()[0][1], xi.pow_vartime(&exp));
    }

    #[test]
    fn frobenius_is_p_power() {
        let f = fp12_sample();
        assert_eq!(f.frobenius_map(1), f.pow_vartime(&Fp::MODULUS));
        assert_eq!(f.frobenius_map(1).frobenius_map(2), f.frobenius_map(3));
    }
}
