//! BN254 base field `Fq` and its extension tower, `xi = 9 + u`.

prime_field! {
    /// Element of the BN254 base field, `p = 0x30644e72...d87cfd47`.
    Fq {
        limbs: 4,
        bytes: 32,
        modulus: [
            0x3c208c16d87cfd47,
            0x97816a916871ca8d,
            0xb85045b68181585d,
            0x30644e72e131a029,
        ],
        r: [
            0xd35d438dc58f0d9d,
            0x0a78eb28f5c70b3d,
            0x666ea36f7879462c,
            0x0e0a77c19a07df2f,
        ],
        r2: [
            0xf32cfc5b538afa89,
            0xb5e71911d44501fb,
            0x47ab1eff0a417ff6,
            0x06d89f71cab8351f,
        ],
        inv: 0x87d20782e4866389,
        modulus_minus_two: [
            0x3c208c16d87cfd45,
            0x97816a916871ca8d,
            0xb85045b68181585d,
            0x30644e72e131a029,
        ],
    }
}

quadratic_extension! {
    /// Element of `Fq2 = Fq[u]/(u^2 + 1)`.
    Fq2 over Fq, xi_c0: Fq::from_u64(9)
}

cubic_extension! {
    /// Element of `Fq6 = Fq2[v]/(v^3 - (9 + u))`.
    Fq6 over Fq2
}

dodecic_extension! {
    /// Element of `Fq12 = Fq6[w]/(w^2 - v)`, the pairing target field.
    Fq12 over Fq6, Fq2, gamma: Fq2::new(
        Fq::from_raw([
            0xd60b35dadcc9e470,
            0x5c521e08292f2176,
            0xe8b99fdd76e68b60,
            0x1284b71c2865a7df,
        ]),
        Fq::from_raw([
            0xca5cf05f80f362ac,
            0x747992778eeec7e5,
            0xa6327cfe12150b8e,
            0x246996f3b4fae7e6,
        ]),
    )
}
