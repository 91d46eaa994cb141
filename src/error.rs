use thiserror::Error;

use crate::core::{AxisId, Orientation, TraceId};

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("invalid layout bounds: width={width}, height={height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("axis {0} is already registered")]
    AxisAlreadyRegistered(AxisId),

    #[error("axis {0} is not registered")]
    AxisNotRegistered(AxisId),

    #[error("axis {axis} must be {expected:?}")]
    OrientationMismatch {
        axis: AxisId,
        expected: Orientation,
    },

    #[error("trace {0} is already attached")]
    TraceAlreadyAttached(TraceId),

    #[error("trace {0} is not attached")]
    TraceNotFound(TraceId),
}
