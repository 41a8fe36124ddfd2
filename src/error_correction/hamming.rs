//! Generalized Hamming single-error-correcting code (§4.2) over four block
//! sizes: (7,4), (15,11), (31,26), (63,57). Parity bits sit at the
//! power-of-two positions (1-indexed); the encoder greedily picks the
//! largest block whose data width fits the remaining payload, zero-padding
//! the final block when it doesn't divide evenly.
//!
//! The encoder's greedy choice is driven by how many *data* bits remain,
//! but a decoder only ever sees the *codeword*, and picking blocks by
//! remaining codeword length does not reproduce the same partition (a
//! smaller block can be followed by enough bits that a larger block would
//! still appear to fit, even though the encoder picked the smaller one).
//! Each block is therefore preceded by a 2-bit tag naming which of the
//! four sizes follows, so the decoder reads the encoder's actual choice
//! instead of re-deriving it from a different quantity.

use crate::bits::Bits;
use bitvec::prelude::*;

const BLOCKS: [(usize, usize); 4] = [(63, 57), (31, 26), (15, 11), (7, 4)];

fn tag_for(n: usize) -> Bits {
    let code: u8 = match n {
        63 => 0b00,
        31 => 0b01,
        15 => 0b10,
        7 => 0b11,
        _ => unreachable!("block size not in BLOCKS"),
    };
    let mut tag = Bits::with_capacity(2);
    tag.push(code & 0b10 != 0);
    tag.push(code & 0b01 != 0);
    tag
}

fn block_for_tag(tag: &BitSlice<u8, Msb0>) -> (usize, usize) {
    match (tag[0], tag[1]) {
        (false, false) => (63, 57),
        (false, true) => (31, 26),
        (true, false) => (15, 11),
        (true, true) => (7, 4),
    }
}

fn is_parity_position(pos: usize) -> bool {
    pos.is_power_of_two()
}

fn encode_block(data: &BitSlice<u8, Msb0>, n: usize, k: usize) -> Bits {
    let p = n - k;
    let mut block: Bits = bitvec![u8, Msb0; 0; n];
    let mut data_iter = data.iter();
    for pos in 1..=n {
        if !is_parity_position(pos) {
            block.set(pos - 1, *data_iter.next().expect("k data positions"));
        }
    }
    for i in 0..p {
        let parity_pos = 1usize << i;
        let mut x = false;
        for pos in 1..=n {
            if pos != parity_pos && pos & parity_pos != 0 {
                x ^= block[pos - 1];
            }
        }
        block.set(parity_pos - 1, x);
    }
    block
}

fn decode_block(received: &BitSlice<u8, Msb0>, n: usize, k: usize) -> Bits {
    let p = n - k;
    let mut block = received.to_bitvec();
    let mut syndrome = 0usize;
    for i in 0..p {
        let parity_pos = 1usize << i;
        let mut x = false;
        for pos in 1..=n {
            if pos & parity_pos != 0 {
                x ^= block[pos - 1];
            }
        }
        if x {
            syndrome |= parity_pos;
        }
    }
    if syndrome != 0 && syndrome <= n {
        let idx = syndrome - 1;
        let flipped = !block[idx];
        block.set(idx, flipped);
    }
    let mut data = Bits::with_capacity(k);
    for pos in 1..=n {
        if !is_parity_position(pos) {
            data.push(block[pos - 1]);
        }
    }
    data
}

pub fn encode(frame: &Bits) -> Bits {
    let mut out = Bits::new();
    let mut remaining: &BitSlice<u8, Msb0> = frame;
    while !remaining.is_empty() {
        let (n, k) = BLOCKS
            .iter()
            .copied()
            .find(|&(_, k)| k <= remaining.len())
            .unwrap_or((7, 4));
        let take = k.min(remaining.len());
        let mut data_block: Bits = remaining[..take].to_bitvec();
        if data_block.len() < k {
            data_block.resize(k, false);
        }
        out.extend_from_bitslice(&tag_for(n));
        out.extend_from_bitslice(&encode_block(&data_block, n, k));
        remaining = &remaining[take..];
    }
    out
}

pub fn decode(codeword: &Bits) -> Bits {
    let mut out = Bits::new();
    let mut remaining: &BitSlice<u8, Msb0> = codeword;
    while remaining.len() >= 2 {
        let (n, k) = block_for_tag(&remaining[0..2]);
        let body = &remaining[2..];
        if body.len() < n {
            break;
        }
        out.extend_from_bitslice(&decode_block(&body[..n], n, k));
        remaining = &body[n..];
    }
    out
}
