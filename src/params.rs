//! SFMT parameter sets.
//!
//! Each set fixes the Mersenne exponent, the recursion offset, the shift
//! distances, the lane masks and the parity vector used by period
//! certification. The constants come from the SFMT 1.5.1 reference
//! distribution and are not user-extensible: masks and parity vectors are
//! derived per exponent.

use std::fmt;

/// Constants of one SFMT period variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Params {
    pub(crate) mexp: u32,
    pub(crate) pos1: usize,
    pub(crate) sl1: u32,
    pub(crate) sl2: u32,
    pub(crate) sr1: u32,
    pub(crate) sr2: u32,
    pub(crate) msk: [u32; 4],
    pub(crate) parity: [u32; 4],
    pub(crate) id: &'static str,
}

const P607: Params = Params {
    mexp: 607,
    pos1: 2,
    sl1: 15,
    sl2: 3,
    sr1: 13,
    sr2: 3,
    msk: [0xfdff37ff, 0xef7f3f7d, 0xff777b7d, 0x7ff7fb2f],
    parity: [0x00000001, 0x00000000, 0x00000000, 0x5986f054],
    id: "SFMT-607:2-15-3-13-3:fdff37ff-ef7f3f7d-ff777b7d-7ff7fb2f",
};

const P19937: Params = Params {
    mexp: 19937,
    pos1: 122,
    sl1: 18,
    sl2: 1,
    sr1: 11,
    sr2: 1,
    msk: [0xdfffffef, 0xddfecb7f, 0xbffaffff, 0xbffffff6],
    parity: [0x00000001, 0x00000000, 0x00000000, 0x13c9e684],
    id: "SFMT-19937:122-18-1-11-1:dfffffef-ddfecb7f-bffaffff-bffffff6",
};

/// Supported SFMT period variants.
///
/// # Examples
///
/// ```
/// use sfmt::ParameterSet;
///
/// let p = ParameterSet::P19937;
/// assert_eq!(p.n32(), 624);
/// assert_eq!(ParameterSet::from_mexp(607), Some(ParameterSet::P607));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParameterSet {
    /// Period 2^607 - 1.
    P607,
    /// Period 2^19937 - 1.
    #[default]
    P19937,
}

impl ParameterSet {
    /// Every shipped parameter set, smallest period first.
    pub const ALL: [ParameterSet; 2] = [ParameterSet::P607, ParameterSet::P19937];

    /// Looks up a parameter set by its Mersenne exponent.
    pub fn from_mexp(mexp: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.mexp() == mexp)
    }

    pub(crate) const fn params(self) -> &'static Params {
        match self {
            ParameterSet::P607 => &P607,
            ParameterSet::P19937 => &P19937,
        }
    }

    /// Mersenne exponent. The period is a multiple of 2^MEXP - 1.
    pub const fn mexp(self) -> u32 {
        self.params().mexp
    }

    /// Number of 128-bit words in the state array.
    pub const fn n(self) -> usize {
        (self.params().mexp / 128 + 1) as usize
    }

    /// Number of 32-bit words in the state array.
    pub const fn n32(self) -> usize {
        self.n() * 4
    }

    /// Number of 64-bit words in the state array.
    pub const fn n64(self) -> usize {
        self.n() * 2
    }

    /// Offset of the second recursion operand, in 128-bit words.
    pub const fn pos1(self) -> usize {
        self.params().pos1
    }

    /// Per-lane left shift, in bits.
    pub const fn sl1(self) -> u32 {
        self.params().sl1
    }

    /// 128-bit left shift, in bytes.
    pub const fn sl2(self) -> u32 {
        self.params().sl2
    }

    /// Per-lane right shift, in bits.
    pub const fn sr1(self) -> u32 {
        self.params().sr1
    }

    /// 128-bit right shift, in bytes.
    pub const fn sr2(self) -> u32 {
        self.params().sr2
    }

    /// Lane masks `MSK1..MSK4`, applied to lanes 0..3 in order.
    pub const fn msk(self) -> [u32; 4] {
        self.params().msk
    }

    /// Parity vector `PARITY1..PARITY4` used by period certification.
    pub const fn parity(self) -> [u32; 4] {
        self.params().parity
    }

    /// Identification string listing the exponent and every constant.
    pub const fn id(self) -> &'static str {
        self.params().id
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
