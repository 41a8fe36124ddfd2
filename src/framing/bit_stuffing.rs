//! FLAG + bit stuffing framing discipline (§4.1): a 0 is inserted after
//! every run of five consecutive 1s so the FLAG byte's own six 1s never
//! appear by coincidence inside the payload.

use crate::bits::Bits;
use crate::constants::FLAG;
use bitvec::prelude::*;

pub fn encode(payload: &Bits) -> Bits {
    let mut out = Bits::new();
    out.extend_from_bitslice(FLAG.view_bits::<Msb0>());

    let mut ones = 0u8;
    for bit in payload {
        out.push(*bit);
        if *bit {
            ones += 1;
            if ones == 5 {
                out.push(false);
                ones = 0;
            }
        } else {
            ones = 0;
        }
    }

    out.extend_from_bitslice(FLAG.view_bits::<Msb0>());
    out
}

pub fn decode(frame: &Bits) -> Bits {
    let body = &frame[8..frame.len() - 8];
    let mut out = Bits::new();
    let mut ones = 0u8;
    for bit in body {
        if ones == 5 && !*bit {
            ones = 0;
            continue;
        }
        out.push(*bit);
        if *bit {
            ones += 1;
        } else {
            ones = 0;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_payload_without_runs() {
        let payload: Bits = bitvec![u8, Msb0; 0, 1, 0, 0, 1, 1, 0, 1];
        let frame = encode(&payload);
        assert_eq!(decode(&frame), payload);
    }

    #[test]
    fn stuffs_a_run_of_five_ones() {
        let payload: Bits = bitvec![u8, Msb0; 1, 1, 1, 1, 1, 0, 1];
        let frame = encode(&payload);
        assert_eq!(decode(&frame), payload);
        // The stuffed 0 after the run of five 1s must be present.
        let body = &frame[8..frame.len() - 8];
        assert_eq!(body.len(), payload.len() + 1);
    }

    #[test]
    fn no_run_of_six_ones_appears_between_flags() {
        let payload: Bits = bitvec![u8, Msb0; 1; 20];
        let frame = encode(&payload);
        let body = &frame[8..frame.len() - 8];
        let mut run = 0u32;
        for bit in body {
            if *bit {
                run += 1;
                assert!(run < 6, "run of six consecutive 1s found in stuffed body");
            } else {
                run = 0;
            }
        }
        assert_eq!(decode(&frame), payload);
    }

    #[test]
    fn empty_payload_round_trips() {
        let payload = Bits::new();
        let frame = encode(&payload);
        assert_eq!(frame.len(), 16);
        assert_eq!(decode(&frame), payload);
    }
}
