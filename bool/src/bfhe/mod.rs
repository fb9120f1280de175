mod evaluate;
mod gate;

pub use evaluate::{EvaluationKey, Evaluator};
pub use gate::BinaryGate;
