use super::BASE;

/// Ripple addition of two digit vectors.
///
/// Walks both vectors from the least significant digit, carrying in a
/// widened accumulator; the result gains at most one digit over the longer
/// operand.
pub fn add(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry = 0u64;
    let mut i = 0;
    while i < a.len() || i < b.len() || carry != 0 {
        let sum = u64::from(a.get(i).copied().unwrap_or(0))
            + u64::from(b.get(i).copied().unwrap_or(0))
            + carry;
        carry = sum / BASE;
        out.push((sum % BASE) as u32);
        i += 1;
    }
    out
}
