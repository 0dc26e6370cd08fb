// Dense f32 kernels + Elman RNN forward step
pub mod error;
pub mod rnn;
pub mod tensor;

pub use error::{Error, Result};
pub use rnn::{Activation, Rnn, RnnMeta};
pub use tensor::matrix::multiply;
pub use tensor::vector::dot;
pub use tensor::{Matrix, Vector};
