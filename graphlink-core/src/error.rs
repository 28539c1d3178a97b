//! Error types for the graphlink core library.
//!
//! Every fallible operation returns [`GraphError`]. Each variant maps to a
//! stable [`GraphErrorCode`] so callers can log or match on a
//! machine-readable identifier without parsing display strings.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by the graphlink algorithms.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A [`crate::DisjointSet`] operation received a node outside `[0, size)`.
    #[error("index {index} is out of range for a disjoint set of size {size}")]
    IndexOutOfRange {
        /// The offending node index.
        index: usize,
        /// Number of elements in the disjoint set.
        size: usize,
    },
    /// An argument violated an operation precondition.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the violated precondition.
        reason: &'static str,
    },
    /// A node required by the operation is absent from the graph.
    #[error("node {node} is not present in the graph")]
    NotFound {
        /// Debug rendering of the missing node.
        node: String,
    },
}

impl GraphError {
    pub(crate) fn not_found<N: fmt::Debug>(node: &N) -> Self {
        Self::NotFound {
            node: format!("{node:?}"),
        }
    }
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A disjoint-set index was outside the universe.
        IndexOutOfRange => IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
        /// An argument violated an operation precondition.
        InvalidArgument => InvalidArgument { .. } => "INVALID_ARGUMENT",
        /// A required node was absent from the graph.
        NotFound => NotFound { .. } => "NOT_FOUND",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
