//! Position maps for the seven faro families.
//!
//! Each function takes the current position `p` of a card and the deck size
//! `n`, and returns the position of that card after one shuffle. They are
//! unchecked and crate-private: results are only meaningful for `p < n` and
//! for `n` in the family's domain (see [`Shuffle::admits`]), and the out
//! families underflow on `n == 0`. Everything outside the crate goes through
//! [`Shuffle::image`] or [`Deck::apply`].
//!
//! Comparisons against the midpoint use `2p < n` rather than `p < n / 2`,
//! so an odd `n` splits at the true half.
//!
//! [`Shuffle::admits`]: super::Shuffle::admits
//! [`Shuffle::image`]: super::Shuffle::image
//! [`Deck::apply`]: super::Deck::apply

/// Top and bottom cards stay put; everything else doubles mod `n - 1`.
pub const fn out_faro(p: usize, n: usize) -> usize {
    if p == n - 1 {
        n - 1
    } else {
        (2 * p) % (n - 1)
    }
}

/// Top card goes second; everything doubles mod `n + 1`.
pub const fn in_faro(p: usize, n: usize) -> usize {
    (2 * p + 1) % (n + 1)
}

/// Undoes an out faro: even positions deal into the top half,
/// odd positions into the bottom half.
pub const fn reverse_out_faro(p: usize, n: usize) -> usize {
    if p % 2 == 0 { p / 2 } else { n / 2 + p / 2 }
}

pub const fn double_out_faro(p: usize, n: usize) -> usize {
    if p == n - 1 {
        n - 1
    } else if 2 * p < n {
        if p % 2 == 0 { 2 * p } else { 2 * p - 1 }
    } else if p % 2 == 0 {
        (2 * p + 1) % (n - 1)
    } else {
        (2 * p) % (n - 1)
    }
}

pub const fn double_in_faro(p: usize, n: usize) -> usize {
    if 2 * p < n {
        if p % 2 == 0 { 2 * p + 2 } else { 2 * p + 1 }
    } else if p % 2 == 0 {
        (2 * p + 1) % (n + 1)
    } else {
        (2 * p) % (n + 1)
    }
}

pub const fn straddle_out_faro(p: usize, n: usize) -> usize {
    if 2 * p < n {
        if p % 2 == 0 { 2 * p } else { 2 * p + 1 }
    } else if p % 2 == 0 {
        (2 * p + 2) % (n + 1)
    } else {
        (2 * p + 1) % (n + 1)
    }
}

pub const fn straddle_in_faro(p: usize, n: usize) -> usize {
    if 2 * p < n {
        if p % 2 == 0 { 2 * p + 1 } else { 2 * p }
    } else if p % 2 == 0 {
        (2 * p + 1) % (n + 1)
    } else {
        (2 * p + 2) % (n + 1)
    }
}
