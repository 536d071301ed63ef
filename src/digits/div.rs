use core::cmp::Ordering;

use super::{add, cmp, mul, sub, trim, BASE};

/// Division by a single nonzero digit, most significant digit first,
/// carrying the remainder down.
pub fn div_small(a: &[u32], d: u32) -> Vec<u32> {
    debug_assert!(d > 0);
    let mut out = Vec::with_capacity(a.len());
    let mut rem = 0u64;
    for &digit in a.iter().rev() {
        let cur = rem * BASE + u64::from(digit);
        out.push((cur / u64::from(d)) as u32);
        rem = cur % u64::from(d);
    }
    out.reverse();
    trim(&mut out);
    out
}

/// Long division by a multi-digit divisor.
///
/// Each round estimates a quotient chunk by dividing the remainder's high
/// digits by the divisor's top digit alone (the quick divisor). The
/// estimate may overshoot, so the true remainder `|a - q * b|` is recomputed
/// every round and its sign tracked; overshooting rounds subtract the next
/// chunk instead of adding it. Once the remainder drops below the divisor,
/// a final compare fixes the possible off-by-one.
///
/// The divisor must have at least two digits and the dividend must be
/// strictly larger; callers dispatch those cases elsewhere.
pub fn div_big(a: &[u32], b: &[u32]) -> Vec<u32> {
    debug_assert!(b.len() > 1);
    debug_assert!(cmp(a, b) == Ordering::Greater);

    let quick = b[b.len() - 1];
    let throw_away = b.len() - 1;

    let mut quotient = vec![0];
    let mut remainder = a.to_vec();
    let mut negative = false;

    loop {
        // Dropping the low digits divides by BASE^throw_away. The loop
        // guard keeps the remainder at least as long as the divisor, so at
        // least one digit survives the cut.
        let step = div_small(&remainder[throw_away..], quick);

        quotient = if negative {
            sub(&quotient, &step)
        } else {
            add(&quotient, &step)
        };

        let product = mul(&quotient, b);
        match cmp(a, &product) {
            Ordering::Less => {
                negative = true;
                remainder = sub(&product, a);
            }
            _ => {
                negative = false;
                remainder = sub(a, &product);
            }
        }

        if cmp(&remainder, b) == Ordering::Less {
            break;
        }
    }

    // The loop settles within one of the true quotient; round down if the
    // last estimate landed above.
    if cmp(&mul(&quotient, b), a) == Ordering::Greater {
        quotient = sub(&quotient, &[1]);
    }
    quotient
}
