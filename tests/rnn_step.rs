use elman::{Error, Matrix, Rnn, Vector};
use pretty_assertions::assert_eq;

fn identity_rnn() -> Rnn {
    let mut rnn = Rnn::new(2, 2, 2).unwrap();
    rnn.set_weight_ih(Matrix::identity(2).unwrap()).unwrap();
    rnn.set_weight_hh(Matrix::identity(2).unwrap()).unwrap();
    rnn.set_weight_ho(Matrix::identity(2).unwrap()).unwrap();
    rnn
}

#[test]
fn identity_weights_single_step() {
    let mut rnn = identity_rnn();
    let y = rnn.step(&Vector::from_vec(vec![1.0, 1.0])).unwrap();
    let t = 1f32.tanh();
    assert_eq!(rnn.hidden().as_slice(), &[t, t]);
    assert_eq!(y.as_slice(), &[t, t]);
}

#[test]
fn hidden_state_carries_across_steps() {
    let mut rnn = identity_rnn();
    let x = Vector::from_vec(vec![1.0, 0.0]);
    rnn.step(&x).unwrap();
    rnn.step(&x).unwrap();
    let h1 = 1f32.tanh();
    let h2 = (h1 + 1.0).tanh();
    assert_eq!(rnn.hidden().as_slice(), &[h2, 0.0]);
}

#[test]
fn wrong_input_length_is_rejected_without_touching_state() {
    let mut rnn = identity_rnn();
    rnn.step(&Vector::from_vec(vec![0.5, -0.5])).unwrap();
    let before = rnn.hidden().clone();
    let err = rnn.step(&Vector::zeros(3).unwrap()).unwrap_err();
    assert_eq!(err, Error::DimensionMismatch { op: "step", expected: 2, actual: 3 });
    assert_eq!(rnn.hidden(), &before);
}

#[test]
fn step_is_deterministic() {
    let mut a = Rnn::new(3, 4, 2).unwrap();
    a.set_weight_ih(Matrix::from_fn(3, 4, |r, c| (r as f32 - c as f32) * 0.3).unwrap()).unwrap();
    a.set_weight_hh(Matrix::from_fn(4, 4, |r, c| if r == c { 0.5 } else { -0.1 }).unwrap()).unwrap();
    a.set_weight_ho(Matrix::from_fn(4, 2, |r, c| (r + c) as f32 * 0.2).unwrap()).unwrap();
    a.bias_h_mut().copy_from_slice(&[0.1, -0.1, 0.2, 0.0]);
    a.step(&Vector::from_vec(vec![0.1, 0.2, 0.3])).unwrap();
    let mut b = a.clone();

    let x = Vector::from_vec(vec![-1.0, 0.5, 2.0]);
    let ya = a.step(&x).unwrap();
    let yb = b.step(&x).unwrap();
    assert_eq!(ya, yb);
    assert_eq!(a.hidden(), b.hidden());
}

#[test]
fn run_matches_repeated_step() {
    let mut a = identity_rnn();
    let mut b = identity_rnn();
    let xs: Vec<Vector> = (0..5).map(|i| Vector::from_vec(vec![i as f32 * 0.1, -0.2])).collect();
    let ys = a.run(&xs).unwrap();
    let expected: Vec<Vector> = xs.iter().map(|x| b.step(x).unwrap()).collect();
    assert_eq!(ys, expected);
    assert_eq!(a.hidden(), b.hidden());
}

#[test]
fn run_stops_at_first_bad_input() {
    let mut rnn = identity_rnn();
    let xs = vec![Vector::from_vec(vec![1.0, 1.0]), Vector::zeros(1).unwrap(), Vector::from_vec(vec![1.0, 1.0])];
    assert!(rnn.run(&xs).unwrap_err().is_dimension_mismatch());
    let t = 1f32.tanh();
    assert_eq!(rnn.hidden().as_slice(), &[t, t]);
}

#[test]
fn reset_restores_zero_state() {
    let mut rnn = identity_rnn();
    rnn.step(&Vector::from_vec(vec![1.0, -1.0])).unwrap();
    rnn.reset();
    assert_eq!(rnn.hidden().as_slice(), &[0.0, 0.0]);
}

#[test]
fn nan_weights_propagate() {
    let mut rnn = identity_rnn();
    rnn.weight_ih_mut()[0] = f32::NAN;
    let y = rnn.step(&Vector::from_vec(vec![1.0, 1.0])).unwrap();
    assert!(y[0].is_nan());
    assert!(rnn.hidden()[0].is_nan());
    assert_eq!(rnn.hidden()[1], 1f32.tanh());
}

#[test]
fn reshaping_weights_is_rejected_and_state_keeps_its_length() {
    let mut rnn = Rnn::new(2, 2, 2).unwrap();
    assert!(rnn.set_weight_ih(Matrix::zeros(2, 3).unwrap()).unwrap_err().is_dimension_mismatch());
    assert!(rnn.set_weight_hh(Matrix::zeros(2, 3).unwrap()).unwrap_err().is_dimension_mismatch());
    rnn.step(&Vector::from_vec(vec![1.0, 1.0])).unwrap();
    assert_eq!(rnn.hidden().len(), rnn.meta().hidden_len);
    assert_eq!(rnn.hidden().as_slice(), &[0.0, 0.0]);
}

#[test]
fn bias_enters_recurrence() {
    let mut rnn = identity_rnn();
    rnn.bias_h_mut().copy_from_slice(&[0.5, 0.0]);
    rnn.bias_o_mut().copy_from_slice(&[0.0, 1.0]);
    let y = rnn.step(&Vector::from_vec(vec![0.5, 0.0])).unwrap();
    let h0 = 1f32.tanh();
    assert_eq!(rnn.hidden().as_slice(), &[h0, 0.0]);
    assert_eq!(y.as_slice(), &[h0, 1.0]);
}
