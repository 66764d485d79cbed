//! Named-field results returned by the algorithms.

/// Final input position and final output position of a one-input algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InOut<I, O> {
    pub input: I,
    pub output: O,
}

/// Final positions of both inputs and of the output of a two-input
/// algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct In1In2Out<I1, I2, O> {
    pub input1: I1,
    pub input2: I2,
    pub output: O,
}
