use super::*;
use crate::error::PrimerError;

use proptest::prelude::*;

const CTG_SEQ: &str = "CTGCCGTCGCATTGTCCATCTTACTGACCTGATGTGCCA";

// ─── forward ────────────────────────────────────────────────

#[test]
fn forward_whole_sequence() {
    let got = find_forward("ATGCCGTCGCATTCTG", "GAATTC", 1, 16, 4, true).unwrap();
    assert_eq!(got, "AGCTGAATTCATGCCGTCGCATTCTG");
}

#[test]
fn forward_lower_case_input() {
    let got = find_forward("atgccgtcgcattctg", "GAATTC", 1, 16, 4, true).unwrap();
    assert_eq!(got, "AGCTGAATTCATGCCGTCGCATTCTG");
}

#[test]
fn forward_inserts_start_codon() {
    let primer = design_primer(
        Strand::Forward,
        CTG_SEQ,
        "GAATTC",
        &PrimerParams::new(8, 16, 3, true),
    )
    .unwrap();
    assert_eq!(primer.sequence, "GCTGAATTCATGCGCATTGTCCATCTTA");
    assert!(primer.codon_added);
    assert_eq!(primer.len(), 3 + 6 + 3 + 16);
}

#[test]
fn forward_validated_primer() {
    let seq = "ATGGACTCCAACACTGCTCCGCTGGGCCCCTCCTGCCCACAGCCCCCGCCAGCACCGCAGCCCCAGGCGCGTTCCCGACTCAATGCCAC";
    let got = find_forward(seq, "GGATCC", 1, 18, 4, false).unwrap();
    assert_eq!(got, "AGCTGGATCCATGGACTCCAACACTGCT");
}

#[test]
fn forward_missing_start_codon() {
    let err = find_forward(CTG_SEQ, "GAATTC", 10, 16, 8, false).unwrap_err();
    assert!(matches!(err, PrimerError::MissingStartCodon));
}

#[test]
fn forward_invalid_character() {
    let err = find_forward("QVDASTGASD", "GAATTC", 3, 3, 4, true).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid input Q at position 1, expected sequence of lower or upper case A,T,C,G"
    );

    let err = find_forward("ATGCCGVDASTGASD", "GAATTC", 3, 3, 4, true).unwrap_err();
    match err {
        PrimerError::InvalidSequence { ch, pos } => {
            assert_eq!(ch, 'V');
            assert_eq!(pos, 7);
        }
        other => panic!("expected invalid sequence error, got {other:?}"),
    }
}

#[test]
fn forward_sequence_too_short() {
    let err = find_forward("ATGCCGTCGCATTGTCCATCT", "GAATTC", 10, 16, 4, true).unwrap_err();
    match &err {
        PrimerError::SequenceTooShort {
            seq_len,
            length,
            start,
            end,
        } => {
            assert_eq!((*seq_len, *length, *start, *end), (21, 16, 10, 25));
        }
        other => panic!("expected sequence too short error, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "invalid input, the given sequence (21 nucleotides) is not long enough for a primer of \
         length = 16 starting at nucleotide 10 (25 > 21)"
    );
}

#[test]
fn forward_overhang_bounds() {
    for bad in [0, 1, 11, 22] {
        let err = find_forward("ATGCCGTCGCATTGTCCATCT", "GAATTC", 10, 16, bad, true).unwrap_err();
        match err {
            PrimerError::InvalidOverhangLength { len } => assert_eq!(len, bad as i64),
            other => panic!("expected overhang error, got {other:?}"),
        }
    }
    let err = find_forward("ATGCCGTCGCATTGTCCATCT", "GAATTC", 10, 16, 1, true).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid input random = 1, expected integer value between 2 and 10"
    );
    assert!(find_forward("ATGCCGTCGCATTCTG", "GAATTC", 1, 16, 2, true).is_ok());
    assert!(find_forward("ATGCCGTCGCATTCTG", "GAATTC", 1, 16, 10, true).is_ok());
}

#[test]
fn forward_primer_length_bounds() {
    let seq = "ATGGACTCCAACACTGCTCCGCTGGGCCCCTCCTGCCC";
    for bad in [8, 9, 31, 32] {
        let err = find_forward(seq, "GGATTC", 1, bad, 4, false).unwrap_err();
        match err {
            PrimerError::InvalidPrimerLength { len, .. } => assert_eq!(len, bad as i64),
            other => panic!("expected primer length error, got {other:?}"),
        }
    }
    // longer than the sequence itself
    let err = find_forward("ATGCCGTCGCAT", "GGATTC", 1, 14, 4, false).unwrap_err();
    assert!(matches!(err, PrimerError::InvalidPrimerLength { len: 14, seq_len: 12 }));
}

#[test]
fn forward_invalid_start() {
    let err = find_forward(CTG_SEQ, "GAATTC", 0, 16, 3, true).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid input: primer start point must be an integer > 0 (not 0)"
    );
}

#[test]
fn validation_order() {
    // start is checked before the sequence, the sequence before the overhang
    let err = find_forward("QQQ", "GAATTC", 0, 3, 1, true).unwrap_err();
    assert!(matches!(err, PrimerError::InvalidStart { .. }));
    let err = find_forward("QQQ", "GAATTC", 1, 3, 1, true).unwrap_err();
    assert!(matches!(err, PrimerError::InvalidSequence { .. }));
    let err = find_forward("ATG", "GAATTC", 1, 3, 1, true).unwrap_err();
    assert!(matches!(err, PrimerError::InvalidOverhangLength { .. }));
    let err = find_forward("ATG", "GAATTC", 1, 3, 4, true).unwrap_err();
    assert!(matches!(err, PrimerError::InvalidPrimerLength { .. }));
}

// ─── reverse ────────────────────────────────────────────────

#[test]
fn reverse_whole_sequence() {
    let got = find_reverse("ATGCCGTCGCATTCTG", "GAATTC", 1, 16, 4, true).unwrap();
    assert_eq!(got, "AGCTGAATTCTTACAGAATGCGACGGCAT");
}

#[test]
fn reverse_recognises_existing_stop_codon() {
    let primer = design_primer(
        Strand::Reverse,
        CTG_SEQ,
        "GAATTC",
        &PrimerParams::new(8, 16, 3, true),
    )
    .unwrap();
    assert_eq!(primer.sequence, "GCTGAATTCTCAGGTCAGTAAGATG");
    assert!(!primer.codon_added);

    let seq = "AAAAATTTTTTTCCATCAGGCGCTGATGGCGAAGTTAGCGTAG";
    let got = find_reverse(seq, "GAATTC", 1, 20, 3, false).unwrap();
    assert_eq!(got, "GCTGAATTCCTACGCTAACTTCGCCATCA");
}

#[test]
fn reverse_inserts_stop_codon() {
    let seq = "AAAAATTTTTTTCCATCAGGCGCTGATGGCGAAGTTAGCG";
    let got = find_reverse(seq, "GAATTC", 1, 20, 3, true).unwrap();
    assert_eq!(got, "GCTGAATTCTTACGCTAACTTCGCCATCAGCG");

    let seq = "CGTCATCCCCAGCAGCCTGTTCCTGCAGGACGACGAAGATGATGACGAGCTGGCGGGGAAGAGCCCTGAGGACCTGCCACTGCGT";
    let got = find_reverse(seq, "GAATTC", 1, 18, 4, true).unwrap();
    assert_eq!(got, "AGCTGAATTCTTAACGCAGTGGCAGGTCCTC");
}

#[test]
fn reverse_missing_stop_codon() {
    let seq = "AAAAATTTTTTTCCATCAGGCGCTGATGGCGAAGTTAGCG";
    let err = find_reverse(seq, "GAATTC", 1, 20, 3, false).unwrap_err();
    assert!(matches!(err, PrimerError::MissingStopCodon));
}

#[test]
fn reverse_shares_validation() {
    let err = find_reverse("ATGCCGVDASTGASD", "GAATTC", 3, 3, 4, true).unwrap_err();
    assert!(matches!(err, PrimerError::InvalidSequence { ch: 'V', pos: 7 }));

    let err = find_reverse("ATGCCGTCGCATTGTCCATCT", "GAATTC", 10, 16, 4, true).unwrap_err();
    assert!(matches!(
        err,
        PrimerError::SequenceTooShort {
            seq_len: 21,
            end: 25,
            ..
        }
    ));

    let err = find_reverse("ATGCCGTCGCATTGTCCATCT", "GAATTC", 10, 16, 22, true).unwrap_err();
    assert!(matches!(err, PrimerError::InvalidOverhangLength { len: 22 }));

    let err = find_reverse(CTG_SEQ, "GAATTC", 0, 16, 3, true).unwrap_err();
    assert!(matches!(err, PrimerError::InvalidStart { start: 0 }));

    let err = find_reverse("ATGGACTCCAACACTGCTCCGCTGGGCCCCTCCTGCCC", "GGATTC", 1, 32, 4, false)
        .unwrap_err();
    assert!(matches!(err, PrimerError::InvalidPrimerLength { len: 32, .. }));
}

// ─── large and signed parameters ────────────────────────────

#[test]
fn huge_start_is_too_short() {
    let err = find_forward("ATGCCGTCGCATTCTG", "GAATTC", usize::MAX, 16, 4, true).unwrap_err();
    match err {
        PrimerError::SequenceTooShort {
            seq_len,
            start,
            end,
            ..
        } => {
            assert_eq!(seq_len, 16);
            assert_eq!(start, usize::MAX);
            assert_eq!(end, usize::MAX);
        }
        other => panic!("expected sequence too short error, got {other:?}"),
    }

    let err = find_reverse("ATGCCGTCGCATTCTG", "GAATTC", usize::MAX - 5, 16, 4, true).unwrap_err();
    assert!(matches!(err, PrimerError::SequenceTooShort { end: usize::MAX, .. }));
}

#[test]
fn signed_params_pass_through() {
    let params = PrimerParams::from_signed("ATGCCGTCGCATTCTG", 1, 16, 4, true).unwrap();
    assert_eq!(params, PrimerParams::new(1, 16, 4, true));
    let primer = design_primer(Strand::Forward, "ATGCCGTCGCATTCTG", "GAATTC", &params).unwrap();
    assert_eq!(primer.as_str(), "AGCTGAATTCATGCCGTCGCATTCTG");
}

#[test]
fn negative_start() {
    let err = PrimerParams::from_signed("ATGCCGTCGCATTCTG", -1, 18, 4, true).unwrap_err();
    assert!(matches!(err, PrimerError::InvalidStart { start: -1 }));
    assert_eq!(
        err.to_string(),
        "invalid input: primer start point must be an integer > 0 (not -1)"
    );
}

#[test]
fn negative_overhang_and_length() {
    let err = PrimerParams::from_signed("ATGCCGTCGCATTCTG", 1, 16, -3, true).unwrap_err();
    assert!(matches!(err, PrimerError::InvalidOverhangLength { len: -3 }));

    let err = PrimerParams::from_signed("ATGCCGTCGCATTCTG", 1, -16, 4, true).unwrap_err();
    assert!(matches!(
        err,
        PrimerError::InvalidPrimerLength {
            len: -16,
            seq_len: 16
        }
    ));

    // overhang is checked before length
    let err = PrimerParams::from_signed("ATGCCGTCGCATTCTG", 1, -16, 11, true).unwrap_err();
    assert!(matches!(err, PrimerError::InvalidOverhangLength { len: 11 }));
}

#[test]
fn negative_values_still_validate_sequence_first() {
    let err = PrimerParams::from_signed("ATGXCG", 1, 16, -3, true).unwrap_err();
    assert!(matches!(err, PrimerError::InvalidSequence { ch: 'X', pos: 4 }));
}

// ─── properties ─────────────────────────────────────────────

fn nucleotides(len: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just('A'), Just('C'), Just('G'), Just('T')], len)
        .prop_map(|v| v.into_iter().collect())
}

proptest! {
    #[test]
    fn design_is_deterministic(
        seq in nucleotides(30..60),
        start in 1usize..10,
        length in 10usize..=20,
        overhang in 2usize..=10,
        auto in any::<bool>(),
    ) {
        for strand in [Strand::Forward, Strand::Reverse] {
            let params = PrimerParams::new(start, length, overhang, auto);
            let a = design_primer(strand, &seq, "GGATCC", &params);
            let b = design_primer(strand, &seq, "GGATCC", &params);
            match (a, b) {
                (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
                (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
                _ => prop_assert!(false, "non-deterministic result"),
            }
        }
    }

    #[test]
    fn forward_layout(
        seq in nucleotides(30..60),
        start in 1usize..10,
        length in 10usize..=20,
        overhang in 2usize..=10,
    ) {
        let primer = design_primer(
            Strand::Forward,
            &seq,
            "GAATTC",
            &PrimerParams::new(start, length, overhang, true),
        )
        .unwrap();
        let window = &seq[start - 1..start - 1 + length];
        let codon = if primer.codon_added { "ATG" } else { "" };
        let expected = format!("{}GAATTC{codon}{window}", crate::seq::overhang::overhang(overhang));
        prop_assert_eq!(primer.sequence, expected);
    }
}
