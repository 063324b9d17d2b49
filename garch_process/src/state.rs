use crate::lag_buffer::LagBuffer;

/// Working history of one simulation run
///
/// Holds only the last max(p, q) returns and variances; lag 0 is the most
/// recent step. Both buffers always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub returns: LagBuffer,
    pub variances: LagBuffer,
}

impl SimulationState {
    pub fn new(max_lag: usize) -> Self {
        SimulationState {
            returns: LagBuffer::new(max_lag),
            variances: LagBuffer::new(max_lag),
        }
    }

    /// Number of (return, variance) points currently held
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    pub fn push(&mut self, ret: f64, variance: f64) {
        self.returns.push(ret);
        self.variances.push(variance);
    }
}
