//! Local Clifford operations modulo the Pauli group.
//!
//! A graph-state simulator tracks, for every vertex, a single-qubit Clifford
//! "dressing" that relates the bare graph state to the simulated state. Since
//! the simulator ignores Pauli operators (they never change the underlying
//! graph), dressings only matter up to left and right Pauli factors. The
//! single-qubit Clifford group has 24 elements and the Pauli group is a
//! normal subgroup of order 4, leaving the six cosets enumerated by [`Lco`].
//!
//! The represented state of a pair (graph `G`, labels `lco`) is
//!
//! ```text
//! (⊗_v rep(lco[v])) · (∏_{(u,v) ∈ G} CZ_uv) · |+⟩^n
//! ```
//!
//! exact up to a global phase and local Paulis.
//!
//! Two families of operations act on the codes:
//!
//! - **Gate application** multiplies on the left: applying H or S to a qubit
//!   replaces its dressing `U` by `H·U` or `S·U`
//!   ([`Lco::multiply_hadamard`], [`Lco::multiply_sqrt_z`]).
//! - **Local complementation** leaves behind a √X on the complemented vertex
//!   and a √Z on each of its neighbors, absorbed on the right
//!   ([`Lco::multiply_by_sqrt_x`], [`Lco::multiply_by_sqrt_z`]).
//!
//! Committing a CZ between two vertices that are each diagonal or
//! almost-isolated is a lookup in [`CZ_ISOLATED`] / [`CZ_CONNECTED`]
//! (see [`cz_transition`]).
//!
//! All operations are total, pure, constant-time table lookups. The tables
//! are committed constants; nothing is derived at runtime.

mod code;
mod tables;

pub use code::{Lco, LocalGate};
pub use tables::{cz_transition, CzTable, CZ_CONNECTED, CZ_ISOLATED};
