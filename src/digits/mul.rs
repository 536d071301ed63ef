use super::{trim, BASE};

/// Schoolbook multiplication.
///
/// Accumulates digit products in a `u64`; `BASE` is chosen so a digit
/// product plus carries never overflows it.
pub fn mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = vec![0u32; a.len() + b.len()];
    for i in 0..a.len() {
        let mut carry = 0u64;
        for j in 0..b.len() {
            let sum = u64::from(out[i + j]) + u64::from(a[i]) * u64::from(b[j]) + carry;
            carry = sum / BASE;
            out[i + j] = (sum % BASE) as u32;
        }
        let mut k = i + b.len();
        while carry != 0 {
            let sum = u64::from(out[k]) + carry;
            carry = sum / BASE;
            out[k] = (sum % BASE) as u32;
            k += 1;
        }
    }
    trim(&mut out);
    out
}
