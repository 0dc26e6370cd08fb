pub mod activation;

pub use activation::Activation;

use crate::error::{Error, Result};
use crate::tensor::{Len, Matrix, Vector};
use log::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RnnMeta {
    pub input_len: usize,
    pub hidden_len: usize,
    pub output_len: usize,
}

/// Single-layer Elman RNN.
///
/// Each `step` computes `h = act(W_hh·h + W_ih·x + b_h)` and returns `W_ho·h + b_o`.
/// Weights and biases start at zero. Shapes are fixed at construction: weights are
/// filled in place through the `*_mut` slices or replaced with `set_weight_*`,
/// which rejects a matrix of the wrong shape.
#[derive(Debug, Clone)]
pub struct Rnn {
    meta: RnnMeta,
    activation: Activation,
    weight_ih: Matrix, // hidden x input
    weight_hh: Matrix, // hidden x hidden
    weight_ho: Matrix, // output x hidden
    bias_h: Vector,
    bias_o: Vector,
    hidden: Vector,
}

fn check_shape(op: &'static str, m: &Matrix, width: usize, height: usize) -> Result<()> {
    if m.width() != width {
        return Err(Error::mismatch(op, width, m.width()));
    }
    if m.height() != height {
        return Err(Error::mismatch(op, height, m.height()));
    }
    Ok(())
}

impl Rnn {
    pub fn new<L: Len>(input_len: L, hidden_len: L, output_len: L) -> Result<Self> {
        Self::with_activation(input_len, hidden_len, output_len, Activation::Tanh)
    }

    pub fn with_activation<L: Len>(input_len: L, hidden_len: L, output_len: L, activation: Activation) -> Result<Self> {
        let weight_ih = Matrix::zeros(input_len, hidden_len)?;
        let weight_hh = Matrix::zeros(hidden_len, hidden_len)?;
        let weight_ho = Matrix::zeros(hidden_len, output_len)?;
        let bias_h = Vector::zeros(hidden_len)?;
        let bias_o = Vector::zeros(output_len)?;
        let hidden = Vector::zeros(hidden_len)?;
        let meta = RnnMeta {
            input_len: weight_ih.width(),
            hidden_len: weight_hh.height(),
            output_len: weight_ho.height(),
        };
        let rnn = Self { meta, activation, weight_ih, weight_hh, weight_ho, bias_h, bias_o, hidden };
        debug!(
            "rnn created: input={} hidden={} output={} params={} act={:?}",
            meta.input_len, meta.hidden_len, meta.output_len, rnn.parameter_count(), activation
        );
        Ok(rnn)
    }

    /// One forward update. Mutates the hidden state and returns the output vector.
    /// On error the hidden state is left untouched.
    pub fn step(&mut self, input: &Vector) -> Result<Vector> {
        if input.len() != self.meta.input_len {
            return Err(Error::mismatch("step", self.meta.input_len, input.len()));
        }
        let mut a = self.weight_hh.mul_vec(&self.hidden)?;
        let b = self.weight_ih.mul_vec(input)?;
        a.add_assign(&b)?;
        a.add_assign(&self.bias_h)?;
        let act = self.activation;
        a.map_inplace(|x| act.apply(x));
        let mut out = self.weight_ho.mul_vec(&a)?;
        out.add_assign(&self.bias_o)?;
        // commit only once every product has succeeded
        self.hidden = a;
        trace!("rnn step: hidden={:?}", self.hidden.as_slice());
        Ok(out)
    }

    /// Steps through `inputs` in order, carrying the hidden state.
    /// Stops at the first failing input; earlier steps remain applied.
    pub fn run(&mut self, inputs: &[Vector]) -> Result<Vec<Vector>> {
        let mut outputs = Vec::with_capacity(inputs.len());
        for x in inputs {
            outputs.push(self.step(x)?);
        }
        Ok(outputs)
    }

    pub fn reset(&mut self) { self.hidden.fill_zero(); }

    pub fn meta(&self) -> RnnMeta { self.meta }

    pub fn hidden(&self) -> &Vector { &self.hidden }

    pub fn activation(&self) -> Activation { self.activation }

    pub fn parameter_count(&self) -> usize {
        self.weight_ih.as_slice().len()
            + self.weight_hh.as_slice().len()
            + self.weight_ho.as_slice().len()
            + self.bias_h.len()
            + self.bias_o.len()
    }

    pub fn weight_ih(&self) -> &Matrix { &self.weight_ih }
    pub fn weight_hh(&self) -> &Matrix { &self.weight_hh }
    pub fn weight_ho(&self) -> &Matrix { &self.weight_ho }
    pub fn bias_h(&self) -> &Vector { &self.bias_h }
    pub fn bias_o(&self) -> &Vector { &self.bias_o }

    /// Row-major `hidden x input` weights.
    pub fn weight_ih_mut(&mut self) -> &mut [f32] { self.weight_ih.as_mut_slice() }
    /// Row-major `hidden x hidden` weights.
    pub fn weight_hh_mut(&mut self) -> &mut [f32] { self.weight_hh.as_mut_slice() }
    /// Row-major `output x hidden` weights.
    pub fn weight_ho_mut(&mut self) -> &mut [f32] { self.weight_ho.as_mut_slice() }
    pub fn bias_h_mut(&mut self) -> &mut [f32] { self.bias_h.as_mut_slice() }
    pub fn bias_o_mut(&mut self) -> &mut [f32] { self.bias_o.as_mut_slice() }

    pub fn set_weight_ih(&mut self, m: Matrix) -> Result<()> {
        check_shape("set_weight_ih", &m, self.meta.input_len, self.meta.hidden_len)?;
        self.weight_ih = m;
        Ok(())
    }

    pub fn set_weight_hh(&mut self, m: Matrix) -> Result<()> {
        check_shape("set_weight_hh", &m, self.meta.hidden_len, self.meta.hidden_len)?;
        self.weight_hh = m;
        Ok(())
    }

    pub fn set_weight_ho(&mut self, m: Matrix) -> Result<()> {
        check_shape("set_weight_ho", &m, self.meta.hidden_len, self.meta.output_len)?;
        self.weight_ho = m;
        Ok(())
    }
}
