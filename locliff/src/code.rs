use derive_more::{Display, TryFrom};

use crate::tables;

/// A single-qubit local Clifford operation modulo the Pauli group.
///
/// Variant names read in application order: `SqrtZHadamard` is "apply √Z,
/// then Hadamard", i.e. the operator `H·S`. `SqrtX` is the coset of √X,
/// which is also the coset of `S·H·S` and `H·S·H`.
///
/// The discriminant is the wire code used by downstream consumers.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, TryFrom)]
#[try_from(repr)]
pub enum Lco {
    /// The trivial coset: identity or any Pauli.
    Pauli = 0,
    /// S, the phase gate (√Z up to phase).
    SqrtZ = 1,
    Hadamard = 2,
    SqrtX = 3,
    /// √Z followed by Hadamard (the operator `H·S`).
    SqrtZHadamard = 4,
    /// Hadamard followed by √Z (the operator `S·H`).
    HadamardSqrtZ = 5,
}

/// A concrete gate in the canonical word of a coset representative.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum LocalGate {
    Hadamard,
    SqrtZ,
}

impl Lco {
    /// Number of cosets.
    pub const COUNT: usize = 6;

    /// All codes, in discriminant order.
    pub const ALL: [Lco; Lco::COUNT] = [
        Lco::Pauli,
        Lco::SqrtZ,
        Lco::Hadamard,
        Lco::SqrtX,
        Lco::SqrtZHadamard,
        Lco::HadamardSqrtZ,
    ];

    /// Wire code of this coset.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// True for the cosets whose representatives are diagonal and therefore
    /// commute with CZ: [`Lco::Pauli`] and [`Lco::SqrtZ`].
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(self, Lco::Pauli | Lco::SqrtZ)
    }

    /// Coset of `H · rep(self)`: a Hadamard applied after the dressing.
    #[must_use]
    pub const fn multiply_hadamard(self) -> Self {
        tables::MULTIPLY_HADAMARD[self as usize]
    }

    /// Coset of `S · rep(self)`: a phase gate applied after the dressing.
    ///
    /// S† differs from S by a Pauli (S† = Z·S), so it uses the same lookup.
    #[must_use]
    pub const fn multiply_sqrt_z(self) -> Self {
        tables::MULTIPLY_SQRT_Z[self as usize]
    }

    /// Coset of `rep(self) · S`: absorbs the √(iZ) a local complementation
    /// leaves on each neighbor of the complemented vertex.
    #[must_use]
    pub const fn multiply_by_sqrt_z(self) -> Self {
        tables::RIGHT_MULTIPLY_SQRT_Z[self as usize]
    }

    /// Coset of `rep(self) · √X`: absorbs the √(−iX) a local complementation
    /// leaves on the complemented vertex itself.
    #[must_use]
    pub const fn multiply_by_sqrt_x(self) -> Self {
        tables::RIGHT_MULTIPLY_SQRT_X[self as usize]
    }

    /// Canonical word of this coset, as gates in application order.
    ///
    /// Folding the word onto [`Lco::Pauli`] with [`Lco::multiply_hadamard`] /
    /// [`Lco::multiply_sqrt_z`] reproduces `self`. Consumers use this to
    /// realize the dressing as concrete gates, e.g. when rebuilding a
    /// stabilizer tableau from a graph state.
    #[must_use]
    pub const fn factors(self) -> &'static [LocalGate] {
        use LocalGate::{Hadamard, SqrtZ};
        match self {
            Lco::Pauli => &[],
            Lco::SqrtZ => &[SqrtZ],
            Lco::Hadamard => &[Hadamard],
            Lco::SqrtX => &[Hadamard, SqrtZ, Hadamard],
            Lco::SqrtZHadamard => &[SqrtZ, Hadamard],
            Lco::HadamardSqrtZ => &[Hadamard, SqrtZ],
        }
    }
}
