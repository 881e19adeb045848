//! # twiddling
//!
//! Bit helpers shared by the bitboards of the game crate.
//!
//! Boards are at most 16x16, so a single `U256` holds one bit per square.
//! These helpers wrap the `bnum` primitives the bitboards are built on and add
//! an iterator over the indices of the set bits.

use bnum::types::U256;

pub fn clear_bit(x: &mut U256, i: u32) {
    x.set_bit(i, false);
}

pub fn set_bit(x: &mut U256, i: u32) {
    x.set_bit(i, true);
}

pub fn get_bit(x: &U256, i: u32) -> bool {
    x.bit(i)
}

pub fn lsb(x: &U256) -> u32 {
    x.trailing_zeros()
}

pub fn count_bits(x: &U256) -> u32 {
    x.count_ones()
}

/// Sets the lowest `n` bits, used to mark every square of a board at once.
pub fn low_mask(n: u32) -> U256 {
    if n >= U256::BITS {
        return U256::MAX;
    }

    (U256::ONE << n) - U256::ONE
}

/// Returns the indices of the set bits in ascending order.
pub fn bit_indices(x: &U256) -> Vec<u32> {
    let mut bits = *x;
    let mut indices = Vec::with_capacity(count_bits(x) as usize);

    while bits != U256::ZERO {
        indices.push(lsb(&bits));
        bits &= bits - U256::ONE;                                               /* clear the lowest set bit           */
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_come_back_in_ascending_order() {
        let mut x = U256::ZERO;
        set_bit(&mut x, 200);
        set_bit(&mut x, 3);
        set_bit(&mut x, 64);

        assert_eq!(bit_indices(&x), vec![3, 64, 200]);
        assert_eq!(count_bits(&x), 3);

        clear_bit(&mut x, 64);
        assert!(!get_bit(&x, 64));
        assert_eq!(lsb(&x), 3);
    }

    #[test]
    fn low_mask_covers_exactly_n_bits() {
        assert_eq!(count_bits(&low_mask(64)), 64);
        assert!(get_bit(&low_mask(64), 63));
        assert!(!get_bit(&low_mask(64), 64));
        assert_eq!(low_mask(256), U256::MAX);
        assert_eq!(low_mask(0), U256::ZERO);
    }
}
