/// Which end of a sequence receives the overhang.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
}

/// Deterministic filler of `n` nucleotides.
///
/// For `i` in `2..=n + 1` the base is `G` if `i` is divisible by 4, else `C`
/// if divisible by 3, else `T` if even, else `A`. Each base is prepended, so
/// the result reads in order of decreasing `i`.
pub fn overhang(n: usize) -> String {
    (2..n + 2)
        .rev()
        .map(|i| match i {
            _ if i % 4 == 0 => 'G',
            _ if i % 3 == 0 => 'C',
            _ if i % 2 == 0 => 'T',
            _ => 'A',
        })
        .collect()
}

pub fn add_overhang(seq: &str, n: usize, placement: Placement) -> String {
    let tail = overhang(n);
    let mut out = String::with_capacity(seq.len() + n);
    match placement {
        Placement::Front => {
            out.push_str(&tail);
            out.push_str(seq);
        }
        Placement::Back => {
            out.push_str(seq);
            out.push_str(&tail);
        }
    }
    out
}
