//! Error surface for the kernel.
//!
//! `KernelError` is the public, typed error returned at the boundaries spec
//! §7 calls fatal (domain violations, memory ceilings, import I/O). It uses
//! `thiserror`, the crate the wider example pack reaches for at a public
//! error surface. Narrow, internal geometric failure modes instead follow
//! the teacher's own `geom4::volume::VolumeError` convention: a small
//! hand-written enum with a `Display` impl, not promoted to the crate's
//! public error type because callers are expected to treat them as "no
//! cell" rather than inspect the cause.

use thiserror::Error;

/// Axis identifier used in domain-error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// What kind of resource hit its ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapacityKind {
    /// A computational box's particle storage.
    BoxParticles,
    /// A cell mesh's vertex/edge arrays.
    MeshVertices,
}

impl std::fmt::Display for CapacityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapacityKind::BoxParticles => write!(f, "per-box particle storage"),
            CapacityKind::MeshVertices => write!(f, "cell mesh vertex storage"),
        }
    }
}

/// Fatal errors raised by the kernel at the points spec §7 names.
#[derive(Debug, Error)]
pub enum KernelError {
    /// A non-periodic coordinate fell outside the container on insertion.
    #[error("point {value} on axis {axis} is outside the non-periodic container bound [{lo}, {hi}]")]
    Domain {
        axis: Axis,
        value: f64,
        lo: f64,
        hi: f64,
    },

    /// A per-box or per-cell array grew past its configured ceiling.
    #[error("{kind} exceeded its configured ceiling of {limit} entries")]
    CapacityExceeded { kind: CapacityKind, limit: usize },

    /// A boundary (import) I/O or parse failure.
    #[error("import failed at line {line}: {reason}")]
    Import { line: usize, reason: String },

    /// The underlying I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value was invalid (e.g. `bx <= ax`, a zero grid axis).
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, KernelError>;
