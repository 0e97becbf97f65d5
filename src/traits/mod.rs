pub mod operation;

pub use operation::{OperationOutput, TextOperation};
