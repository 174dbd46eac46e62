//! Error type shared by all fallible graph operations.
//!
//! Only operations with a vertex precondition can fail. Structural queries such
//! as [has_cycle](crate::algorithms::GraphAlgorithms::has_cycle) report a negative
//! finding as `false` or `None`, never as an error.

use thiserror::Error;

/// Result alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The operation needs a vertex that is not contained in the graph.
    #[error("invalid vertex `{0}`")]
    InvalidVertex(String),
}

impl GraphError {
    pub(crate) fn invalid_vertex(u:&str) -> Self {
        GraphError::InvalidVertex(u.to_string())
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
