//! Static BC7 tables: mode layout, interpolation weights, partitions and fix-ups.

/// Bit layout of one BC7 mode.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ModeInfo {
    /// Number of regions (1-3).
    pub subsets: u8,
    /// Width of the partition shape field.
    pub partition_bits: u8,
    /// Total p-bits stored: one per endpoint, one per endpoint pair, or none.
    pub pbits: u8,
    /// Width of the channel rotation field.
    pub rotation_bits: u8,
    /// Width of the index selector field.
    pub index_mode_bits: u8,
    /// Precision of the primary index plane.
    pub index_prec: u8,
    /// Precision of the secondary index plane (0 = absent).
    pub index_prec2: u8,
    /// Stored endpoint precision per channel (R, G, B, A).
    pub prec: [u8; 4],
    /// Endpoint precision per channel after appending p-bits.
    pub prec_with_p: [u8; 4],
}

impl ModeInfo {
    /// Number of stored endpoints.
    #[inline]
    pub fn endpoints(&self) -> usize {
        usize::from(self.subsets) * 2
    }
}

#[rustfmt::skip]
pub(crate) static MODES: [ModeInfo; 8] = [
    ModeInfo { subsets: 3, partition_bits: 4, pbits: 6, rotation_bits: 0, index_mode_bits: 0, index_prec: 3, index_prec2: 0, prec: [4, 4, 4, 0], prec_with_p: [5, 5, 5, 0] },
    ModeInfo { subsets: 2, partition_bits: 6, pbits: 2, rotation_bits: 0, index_mode_bits: 0, index_prec: 3, index_prec2: 0, prec: [6, 6, 6, 0], prec_with_p: [7, 7, 7, 0] },
    ModeInfo { subsets: 3, partition_bits: 6, pbits: 0, rotation_bits: 0, index_mode_bits: 0, index_prec: 2, index_prec2: 0, prec: [5, 5, 5, 0], prec_with_p: [5, 5, 5, 0] },
    ModeInfo { subsets: 2, partition_bits: 6, pbits: 4, rotation_bits: 0, index_mode_bits: 0, index_prec: 2, index_prec2: 0, prec: [7, 7, 7, 0], prec_with_p: [8, 8, 8, 0] },
    ModeInfo { subsets: 1, partition_bits: 0, pbits: 0, rotation_bits: 2, index_mode_bits: 1, index_prec: 2, index_prec2: 3, prec: [5, 5, 5, 6], prec_with_p: [5, 5, 5, 6] },
    ModeInfo { subsets: 1, partition_bits: 0, pbits: 0, rotation_bits: 2, index_mode_bits: 0, index_prec: 2, index_prec2: 2, prec: [7, 7, 7, 8], prec_with_p: [7, 7, 7, 8] },
    ModeInfo { subsets: 1, partition_bits: 0, pbits: 2, rotation_bits: 0, index_mode_bits: 0, index_prec: 4, index_prec2: 0, prec: [7, 7, 7, 7], prec_with_p: [8, 8, 8, 8] },
    ModeInfo { subsets: 2, partition_bits: 6, pbits: 4, rotation_bits: 0, index_mode_bits: 0, index_prec: 2, index_prec2: 0, prec: [5, 5, 5, 5], prec_with_p: [6, 6, 6, 6] },
];

static WEIGHTS2: [u32; 4] = [0, 21, 43, 64];
static WEIGHTS3: [u32; 8] = [0, 9, 18, 27, 37, 46, 55, 64];
static WEIGHTS4: [u32; 16] = [0, 4, 9, 13, 17, 21, 26, 30, 34, 38, 43, 47, 51, 55, 60, 64];

/// Interpolation weights (out of 64) for an index precision of 2, 3 or 4 bits.
#[inline]
pub(crate) fn weights(index_prec: u8) -> &'static [u32] {
    match index_prec {
        2 => &WEIGHTS2,
        3 => &WEIGHTS3,
        _ => &WEIGHTS4,
    }
}

/// Region of each pixel, indexed `[subsets - 1][shape][pixel]`.
#[rustfmt::skip]
pub(crate) static PARTITION_TABLE: [[[u8; 16]; 64]; 3] = [
    [
        [0; 16]; 64
    ],
    [
        [0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1],
        [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1],
        [0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1],
        [0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 1, 1, 1],
        [0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
        [0, 0, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1],
        [0, 0, 0, 1, 0, 0, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1],
        [0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 1, 1, 1],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1],
        [0, 0, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 1, 1, 1],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1],
        [0, 0, 0, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1],
        [0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1],
        [0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 1],
        [0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0],
        [0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0],
        [0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0],
        [0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 1],
        [0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0],
        [0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0],
        [0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0],
        [0, 0, 1, 1, 0, 1, 1, 0, 0, 1, 1, 0, 1, 1, 0, 0],
        [0, 0, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0],
        [0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
        [0, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 0],
        [0, 0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0],
        [0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
        [0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1],
        [0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 1, 0],
        [0, 0, 1, 1, 0, 0, 1, 1, 1, 1, 0, 0, 1, 1, 0, 0],
        [0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0],
        [0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 1, 0],
        [0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 1, 0, 0, 1],
        [0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 1],
        [0, 1, 1, 1, 0, 0, 1, 1, 1, 1, 0, 0, 1, 1, 1, 0],
        [0, 0, 0, 1, 0, 0, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0],
        [0, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 1, 0, 0],
        [0, 0, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 0, 0],
        [0, 1, 1, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 1, 0],
        [0, 0, 1, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1],
        [0, 1, 1, 0, 0, 1, 1, 0, 1, 0, 0, 1, 1, 0, 0, 1],
        [0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0],
        [0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0],
        [0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0],
        [0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0],
        [0, 1, 1, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 1],
        [0, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 0, 1, 0, 0, 1],
        [0, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0],
        [0, 0, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 0],
        [0, 1, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 1],
        [0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 1],
        [0, 1, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1],
        [0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 1, 1, 1],
        [0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1],
        [0, 0, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
        [0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0],
        [0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1],
    ],
    [
        [0, 0, 1, 1, 0, 0, 1, 1, 0, 2, 2, 1, 2, 2, 2, 2],
        [0, 0, 0, 1, 0, 0, 1, 1, 2, 2, 1, 1, 2, 2, 2, 1],
        [0, 0, 0, 0, 2, 0, 0, 1, 2, 2, 1, 1, 2, 2, 1, 1],
        [0, 2, 2, 2, 0, 0, 2, 2, 0, 0, 1, 1, 0, 1, 1, 1],
        [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 2, 2, 1, 1, 2, 2],
        [0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 2, 2, 0, 0, 2, 2],
        [0, 0, 2, 2, 0, 0, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1],
        [0, 0, 1, 1, 0, 0, 1, 1, 2, 2, 1, 1, 2, 2, 1, 1],
        [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2],
        [0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2],
        [0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2],
        [0, 0, 1, 2, 0, 0, 1, 2, 0, 0, 1, 2, 0, 0, 1, 2],
        [0, 1, 1, 2, 0, 1, 1, 2, 0, 1, 1, 2, 0, 1, 1, 2],
        [0, 1, 2, 2, 0, 1, 2, 2, 0, 1, 2, 2, 0, 1, 2, 2],
        [0, 0, 1, 1, 0, 1, 1, 2, 1, 1, 2, 2, 1, 2, 2, 2],
        [0, 0, 1, 1, 2, 0, 0, 1, 2, 2, 0, 0, 2, 2, 2, 0],
        [0, 0, 0, 1, 0, 0, 1, 1, 0, 1, 1, 2, 1, 1, 2, 2],
        [0, 1, 1, 1, 0, 0, 1, 1, 2, 0, 0, 1, 2, 2, 0, 0],
        [0, 0, 0, 0, 1, 1, 2, 2, 1, 1, 2, 2, 1, 1, 2, 2],
        [0, 0, 2, 2, 0, 0, 2, 2, 0, 0, 2, 2, 1, 1, 1, 1],
        [0, 1, 1, 1, 0, 1, 1, 1, 0, 2, 2, 2, 0, 2, 2, 2],
        [0, 0, 0, 1, 0, 0, 0, 1, 2, 2, 2, 1, 2, 2, 2, 1],
        [0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 2, 2, 0, 1, 2, 2],
        [0, 0, 0, 0, 1, 1, 0, 0, 2, 2, 1, 0, 2, 2, 1, 0],
        [0, 1, 2, 2, 0, 1, 2, 2, 0, 0, 1, 1, 0, 0, 0, 0],
        [0, 0, 1, 2, 0, 0, 1, 2, 1, 1, 2, 2, 2, 2, 2, 2],
        [0, 1, 1, 0, 1, 2, 2, 1, 1, 2, 2, 1, 0, 1, 1, 0],
        [0, 0, 0, 0, 0, 1, 1, 0, 1, 2, 2, 1, 1, 2, 2, 1],
        [0, 0, 2, 2, 1, 1, 0, 2, 1, 1, 0, 2, 0, 0, 2, 2],
        [0, 1, 1, 0, 0, 1, 1, 0, 2, 0, 0, 2, 2, 2, 2, 2],
        [0, 0, 1, 1, 0, 1, 2, 2, 0, 1, 2, 2, 0, 0, 1, 1],
        [0, 0, 0, 0, 2, 0, 0, 0, 2, 2, 1, 1, 2, 2, 2, 1],
        [0, 0, 0, 0, 0, 0, 0, 2, 1, 1, 2, 2, 1, 2, 2, 2],
        [0, 2, 2, 2, 0, 0, 2, 2, 0, 0, 1, 2, 0, 0, 1, 1],
        [0, 0, 1, 1, 0, 0, 1, 2, 0, 0, 2, 2, 0, 2, 2, 2],
        [0, 1, 2, 0, 0, 1, 2, 0, 0, 1, 2, 0, 0, 1, 2, 0],
        [0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 0, 0, 0, 0],
        [0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2, 0],
        [0, 1, 2, 0, 2, 0, 1, 2, 1, 2, 0, 1, 0, 1, 2, 0],
        [0, 0, 1, 1, 2, 2, 0, 0, 1, 1, 2, 2, 0, 0, 1, 1],
        [0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 0, 0, 0, 0, 1, 1],
        [0, 1, 0, 1, 0, 1, 0, 1, 2, 2, 2, 2, 2, 2, 2, 2],
        [0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 2, 1, 2, 1, 2, 1],
        [0, 0, 2, 2, 1, 1, 2, 2, 0, 0, 2, 2, 1, 1, 2, 2],
        [0, 0, 2, 2, 0, 0, 1, 1, 0, 0, 2, 2, 0, 0, 1, 1],
        [0, 2, 2, 0, 1, 2, 2, 1, 0, 2, 2, 0, 1, 2, 2, 1],
        [0, 1, 0, 1, 2, 2, 2, 2, 2, 2, 2, 2, 0, 1, 0, 1],
        [0, 0, 0, 0, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1],
        [0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 2, 2, 2, 2],
        [0, 2, 2, 2, 0, 1, 1, 1, 0, 2, 2, 2, 0, 1, 1, 1],
        [0, 0, 0, 2, 1, 1, 1, 2, 0, 0, 0, 2, 1, 1, 1, 2],
        [0, 0, 0, 0, 2, 1, 1, 2, 2, 1, 1, 2, 2, 1, 1, 2],
        [0, 2, 2, 2, 0, 1, 1, 1, 0, 1, 1, 1, 0, 2, 2, 2],
        [0, 0, 0, 2, 1, 1, 1, 2, 1, 1, 1, 2, 0, 0, 0, 2],
        [0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 2, 2, 2, 2],
        [0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 1, 2, 2, 1, 1, 2],
        [0, 1, 1, 0, 0, 1, 1, 0, 2, 2, 2, 2, 2, 2, 2, 2],
        [0, 0, 2, 2, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 2, 2],
        [0, 0, 2, 2, 1, 1, 2, 2, 1, 1, 2, 2, 0, 0, 2, 2],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 1, 2],
        [0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 1],
        [0, 2, 2, 2, 1, 2, 2, 2, 0, 2, 2, 2, 1, 2, 2, 2],
        [0, 1, 0, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2],
        [0, 1, 1, 1, 2, 0, 1, 1, 2, 2, 0, 1, 2, 2, 2, 0],
    ],
];

/// Fix-up (anchor) pixel of each region, indexed `[subsets - 1][shape][region]`.
#[rustfmt::skip]
pub(crate) static FIXUP_TABLE: [[[u8; 3]; 64]; 3] = [
    [
        [0, 0, 0]; 64
    ],
    [
        [0, 15, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 2, 0],
        [0, 8, 0],
        [0, 2, 0],
        [0, 2, 0],
        [0, 8, 0],
        [0, 8, 0],
        [0, 15, 0],
        [0, 2, 0],
        [0, 8, 0],
        [0, 2, 0],
        [0, 2, 0],
        [0, 8, 0],
        [0, 8, 0],
        [0, 2, 0],
        [0, 2, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 6, 0],
        [0, 8, 0],
        [0, 2, 0],
        [0, 8, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 2, 0],
        [0, 8, 0],
        [0, 2, 0],
        [0, 2, 0],
        [0, 2, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 6, 0],
        [0, 6, 0],
        [0, 2, 0],
        [0, 6, 0],
        [0, 8, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 2, 0],
        [0, 2, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 15, 0],
        [0, 2, 0],
        [0, 2, 0],
        [0, 15, 0],
    ],
    [
        [0, 3, 15],
        [0, 3, 8],
        [0, 15, 8],
        [0, 15, 3],
        [0, 8, 15],
        [0, 3, 15],
        [0, 15, 3],
        [0, 15, 8],
        [0, 8, 15],
        [0, 8, 15],
        [0, 6, 15],
        [0, 6, 15],
        [0, 6, 15],
        [0, 5, 15],
        [0, 3, 15],
        [0, 3, 8],
        [0, 3, 15],
        [0, 3, 8],
        [0, 8, 15],
        [0, 15, 3],
        [0, 3, 15],
        [0, 3, 8],
        [0, 6, 15],
        [0, 10, 8],
        [0, 5, 3],
        [0, 8, 15],
        [0, 8, 6],
        [0, 6, 10],
        [0, 8, 15],
        [0, 5, 15],
        [0, 15, 10],
        [0, 15, 8],
        [0, 8, 15],
        [0, 15, 3],
        [0, 3, 15],
        [0, 5, 10],
        [0, 6, 10],
        [0, 10, 8],
        [0, 8, 9],
        [0, 15, 10],
        [0, 15, 6],
        [0, 3, 15],
        [0, 15, 8],
        [0, 5, 15],
        [0, 15, 3],
        [0, 15, 6],
        [0, 15, 6],
        [0, 15, 8],
        [0, 3, 15],
        [0, 15, 3],
        [0, 5, 15],
        [0, 5, 15],
        [0, 5, 15],
        [0, 8, 15],
        [0, 5, 15],
        [0, 10, 15],
        [0, 5, 15],
        [0, 10, 15],
        [0, 8, 15],
        [0, 13, 15],
        [0, 15, 3],
        [0, 12, 15],
        [0, 3, 15],
        [0, 3, 8],
    ],
];
