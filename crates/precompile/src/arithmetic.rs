//! Multi-limb integer arithmetic used by the prime field implementations.
//!
//! Limbs are little-endian `u64` words. All routines are `const fn` so that curve constants can
//! be converted into Montgomery form at compile time.

/// Computes `a + b + carry`, returning the result and the new carry.
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Computes `a - (b + borrow)`, returning the result and the new borrow (`0` or `1`).
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (ret as u64, (ret >> 127) as u64)
}

/// Computes `a + (b * c) + carry`, returning the result and the new carry.
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Returns `r - modulus` if `r >= modulus` or if `carry` signals an overflow past the top limb,
/// otherwise `r`.
#[inline(always)]
const fn subtract_modulus<const N: usize>(r: [u64; N], modulus: &[u64; N], carry: u64) -> [u64; N] {
    let mut d = [0u64; N];
    let mut borrow = 0;
    let mut i = 0;
    while i < N {
        let (v, b) = sbb(r[i], modulus[i], borrow);
        d[i] = v;
        borrow = b;
        i += 1;
    }
    if carry != 0 || borrow == 0 {
        d
    } else {
        r
    }
}

/// Modular addition of two reduced values.
#[inline]
pub(crate) const fn add_mod<const N: usize>(
    a: &[u64; N],
    b: &[u64; N],
    modulus: &[u64; N],
) -> [u64; N] {
    let mut r = [0u64; N];
    let mut carry = 0;
    let mut i = 0;
    while i < N {
        let (v, c) = adc(a[i], b[i], carry);
        r[i] = v;
        carry = c;
        i += 1;
    }
    subtract_modulus(r, modulus, carry)
}

/// Modular subtraction of two reduced values.
#[inline]
pub(crate) const fn sub_mod<const N: usize>(
    a: &[u64; N],
    b: &[u64; N],
    modulus: &[u64; N],
) -> [u64; N] {
    let mut r = [0u64; N];
    let mut borrow = 0;
    let mut i = 0;
    while i < N {
        let (v, b) = sbb(a[i], b[i], borrow);
        r[i] = v;
        borrow = b;
        i += 1;
    }
    if borrow != 0 {
        let mut carry = 0;
        i = 0;
        while i < N {
            let (v, c) = adc(r[i], modulus[i], carry);
            r[i] = v;
            carry = c;
            i += 1;
        }
    }
    r
}

/// Modular negation of a reduced value. Zero maps to zero.
#[inline]
pub(crate) const fn neg_mod<const N: usize>(a: &[u64; N], modulus: &[u64; N]) -> [u64; N] {
    if is_zero(a) {
        return *a;
    }
    sub_mod(modulus, a, modulus)
}

/// Montgomery multiplication `a * b * R^-1 mod modulus` (CIOS).
///
/// `inv` is `-modulus^-1 mod 2^64`. The modulus must leave at least one spare bit in the top
/// limb, which holds for both base fields.
#[inline]
pub(crate) const fn montgomery_mul<const N: usize>(
    a: &[u64; N],
    b: &[u64; N],
    modulus: &[u64; N],
    inv: u64,
) -> [u64; N] {
    let mut t = [0u64; N];
    let mut t_hi = 0u64;
    let mut i = 0;
    while i < N {
        let mut carry = 0;
        let mut j = 0;
        while j < N {
            let (v, c) = mac(t[j], a[j], b[i], carry);
            t[j] = v;
            carry = c;
            j += 1;
        }
        let (v, t_top) = adc(t_hi, carry, 0);
        t_hi = v;

        let m = t[0].wrapping_mul(inv);
        let (_, c) = mac(t[0], m, modulus[0], 0);
        carry = c;
        j = 1;
        while j < N {
            let (v, c) = mac(t[j], m, modulus[j], carry);
            t[j - 1] = v;
            carry = c;
            j += 1;
        }
        let (v, c) = adc(t_hi, carry, 0);
        t[N - 1] = v;
        t_hi = t_top + c;
        i += 1;
    }
    subtract_modulus(t, modulus, t_hi)
}

/// Returns `true` if all limbs are zero.
#[inline]
pub(crate) const fn is_zero<const N: usize>(a: &[u64; N]) -> bool {
    let mut i = 0;
    while i < N {
        if a[i] != 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns `true` if `a < b`.
#[inline]
pub(crate) const fn lt<const N: usize>(a: &[u64; N], b: &[u64; N]) -> bool {
    let mut borrow = 0;
    let mut i = 0;
    while i < N {
        let (_, b) = sbb(a[i], b[i], borrow);
        borrow = b;
        i += 1;
    }
    borrow == 1
}

/// Reads big-endian bytes into little-endian limbs. `bytes.len()` must be `8 * N`.
#[inline]
pub(crate) fn limbs_from_be_bytes<const N: usize>(bytes: &[u8]) -> [u64; N] {
    debug_assert_eq!(bytes.len(), N * 8);
    let mut limbs = [0u64; N];
    for (limb, chunk) in limbs.iter_mut().zip(bytes.rchunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *limb = u64::from_be_bytes(word);
    }
    limbs
}

/// Writes little-endian limbs as big-endian bytes. `out.len()` must be `8 * N`.
#[inline]
pub(crate) fn limbs_to_be_bytes<const N: usize>(limbs: &[u64; N], out: &mut [u8]) {
    debug_assert_eq!(out.len(), N * 8);
    for (limb, chunk) in limbs.iter().zip(out.rchunks_exact_mut(8)) {
        chunk.copy_from_slice(&limb.to_be_bytes());
    }
}
