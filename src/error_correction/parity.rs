//! Single even-parity bit appended to the frame (§4.2).

use crate::bits::Bits;
use crate::error_correction::ErrorReport;

pub fn encode(frame: &Bits) -> Bits {
    let parity = frame.iter().filter(|b| **b).count() % 2 != 0;
    let mut out = frame.clone();
    out.push(parity);
    out
}

pub fn decode(codeword: &Bits) -> (Bits, ErrorReport) {
    let parity = codeword.iter().filter(|b| **b).count() % 2 != 0;
    let data = codeword[..codeword.len() - 1].to_bitvec();
    let report = if parity { ErrorReport::ParityMismatch } else { ErrorReport::Ok };
    (data, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitvec::prelude::*;

    #[test]
    fn even_number_of_ones_yields_zero_parity_bit() {
        let frame: Bits = bitvec![u8, Msb0; 1, 1, 0, 0];
        let codeword = encode(&frame);
        assert_eq!(*codeword.last().unwrap(), false);
        let (data, report) = decode(&codeword);
        assert_eq!(data, frame);
        assert_eq!(report, ErrorReport::Ok);
    }

    #[test]
    fn odd_number_of_ones_yields_one_parity_bit() {
        let frame: Bits = bitvec![u8, Msb0; 1, 0, 0, 0];
        let codeword = encode(&frame);
        assert_eq!(*codeword.last().unwrap(), true);
        let (_, report) = decode(&codeword);
        assert_eq!(report, ErrorReport::Ok);
    }

    #[test]
    fn single_bit_flip_is_detected() {
        let frame: Bits = bitvec![u8, Msb0; 1, 1, 0, 0];
        let mut codeword = encode(&frame);
        let flipped = !codeword[0];
        codeword.set(0, flipped);
        let (_, report) = decode(&codeword);
        assert_eq!(report, ErrorReport::ParityMismatch);
    }
}
