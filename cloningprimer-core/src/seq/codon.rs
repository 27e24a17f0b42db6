//! Start and stop codon checks.
//!
//! Stop codons are searched in their reverse-complement encoding because a
//! reverse primer reads the antisense strand: `TAA` shows up as `TTA`, `TAG`
//! as `CTA` and `TGA` as `TCA`.

use memchr::memmem;

pub const START_CODON: &str = "ATG";

/// Reverse complement of the ochre stop codon `TAA`.
pub const STOP_OCHRE_RC: &str = "TTA";
/// Reverse complement of the amber stop codon `TAG`.
pub const STOP_AMBER_RC: &str = "CTA";
/// Reverse complement of the opal stop codon `TGA`.
pub const STOP_OPAL_RC: &str = "TCA";

pub const STOP_CODONS_RC: [&str; 3] = [STOP_OCHRE_RC, STOP_AMBER_RC, STOP_OPAL_RC];

/// With `exact` only the first three bytes are compared, otherwise the codon
/// may occur anywhere. Inputs shorter than a codon never match.
pub fn has_codon(seq: impl AsRef<[u8]>, codon: &str, exact: bool) -> bool {
    let seq = seq.as_ref();
    let codon = codon.as_bytes();
    if seq.len() < codon.len() {
        return false;
    }
    if exact {
        seq.starts_with(codon)
    } else {
        memmem::find(seq, codon).is_some()
    }
}

pub fn has_start_codon(seq: impl AsRef<[u8]>, exact: bool) -> bool {
    has_codon(seq, START_CODON, exact)
}

pub fn has_stop_codon_ochre(seq: impl AsRef<[u8]>, exact: bool) -> bool {
    has_codon(seq, STOP_OCHRE_RC, exact)
}

pub fn has_stop_codon_amber(seq: impl AsRef<[u8]>, exact: bool) -> bool {
    has_codon(seq, STOP_AMBER_RC, exact)
}

pub fn has_stop_codon_opal(seq: impl AsRef<[u8]>, exact: bool) -> bool {
    has_codon(seq, STOP_OPAL_RC, exact)
}

pub fn has_stop_codon(seq: impl AsRef<[u8]>, exact: bool) -> bool {
    let seq = seq.as_ref();
    STOP_CODONS_RC
        .iter()
        .any(|codon| has_codon(seq, codon, exact))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_codon() {
        assert!(has_start_codon("ATG", true));
        assert!(has_start_codon("ATGCCGAGACAGT", true));
        assert!(has_start_codon("GAGAGCCCACGCGAGATG", false));
        assert!(!has_start_codon("GAGAGCCCACGCGAGATG", true));
        assert!(!has_start_codon("GAGAGCCACGAGCAGCG", true));
        assert!(!has_start_codon("GAGAGCCACGAGCAGCG", false));
    }

    #[test]
    fn short_input_never_matches() {
        for exact in [true, false] {
            assert!(!has_start_codon("AT", exact));
            assert!(!has_start_codon("", exact));
            assert!(!has_stop_codon_ochre("TT", exact));
            assert!(!has_stop_codon_amber("CT", exact));
            assert!(!has_stop_codon_opal("T", exact));
            assert!(!has_stop_codon("TC", exact));
        }
    }

    #[test]
    fn ochre() {
        assert!(has_stop_codon_ochre("TTA", true));
        assert!(has_stop_codon_ochre("TTACCGAGACAGT", true));
        assert!(has_stop_codon_ochre("GAGAGCCCACGCGAGTTA", false));
        assert!(!has_stop_codon_ochre("GAGAGCCACGAGCAGCG", true));
    }

    #[test]
    fn amber() {
        assert!(has_stop_codon_amber("CTA", true));
        assert!(has_stop_codon_amber("CTACCGAGACAGT", true));
        assert!(has_stop_codon_amber("GAGAGCCCACGCGAGCTA", false));
        assert!(!has_stop_codon_amber("GAGAGCCACGAGCAGCG", true));
    }

    #[test]
    fn opal() {
        assert!(has_stop_codon_opal("TCA", true));
        assert!(has_stop_codon_opal("TCACCGAGACAGT", true));
        assert!(has_stop_codon_opal("GAGAGCCCACGCGAGTCA", false));
        assert!(!has_stop_codon_opal("GAGAGCCACGAGCAGCG", true));
    }

    #[test]
    fn any_stop_codon() {
        assert!(has_stop_codon("CTAGG", true));
        assert!(has_stop_codon("GGTCA", false));
        assert!(!has_stop_codon("GGTCA", true));
        // forward-strand stop codons are not what a reverse primer sees
        assert!(!has_stop_codon("TAAGG", true));
    }
}
