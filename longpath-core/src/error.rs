//! Error types for the longpath core library.
//!
//! Every condition here is recoverable at the call boundary; none is
//! process-fatal, and none is silently coerced to a numeric sentinel.

use std::fmt;

use thiserror::Error;

use crate::graph::VertexId;

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
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced while extracting a component or running an estimation.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EstimateError {
    /// A largest-component extraction was requested on a graph with no
    /// vertices.
    #[error("graph contains no vertices")]
    EmptyGraph,
    /// A single-pair search endpoint lies outside the supplied component.
    #[error("vertex {vertex} is not part of the component")]
    VertexNotInComponent {
        /// The offending endpoint.
        vertex: VertexId,
    },
    /// The destination was never reached even though the frontier drained.
    ///
    /// Under correct usage both endpoints belong to one connected component
    /// and this cannot occur; it is checked defensively all the same.
    #[error("destination {destination} is unreachable from source {source_vertex}")]
    DisconnectedPair {
        /// Source endpoint of the failed search.
        source_vertex: VertexId,
        /// Destination endpoint that kept an unreached distance.
        destination: VertexId,
    },
    /// A caller-supplied sample count override was not a positive integer.
    #[error("sample count must be at least 1 (got {got})")]
    SampleSizeInvalid {
        /// The invalid sample count supplied by the caller.
        got: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`EstimateError`] variants.
    enum EstimateErrorCode for EstimateError {
        /// A largest-component extraction was requested on an empty graph.
        EmptyGraph => EmptyGraph => "ESTIMATE_EMPTY_GRAPH",
        /// A single-pair search endpoint lies outside the component.
        VertexNotInComponent => VertexNotInComponent { .. } => "ESTIMATE_VERTEX_NOT_IN_COMPONENT",
        /// The destination was never reached by the relaxation search.
        DisconnectedPair => DisconnectedPair { .. } => "ESTIMATE_DISCONNECTED_PAIR",
        /// A sample count override was zero.
        SampleSizeInvalid => SampleSizeInvalid { .. } => "ESTIMATE_SAMPLE_SIZE_INVALID",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, EstimateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable_strings() {
        assert_eq!(EstimateError::EmptyGraph.code().as_str(), "ESTIMATE_EMPTY_GRAPH");
        assert_eq!(
            EstimateError::SampleSizeInvalid { got: 0 }.code(),
            EstimateErrorCode::SampleSizeInvalid
        );
        assert_eq!(
            EstimateErrorCode::DisconnectedPair.to_string(),
            "ESTIMATE_DISCONNECTED_PAIR"
        );
    }
}
