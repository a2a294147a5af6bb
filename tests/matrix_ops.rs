use simdmat::{Error, Matrix};

// ============================================================
// Elementwise arithmetic over the flat buffer
// ============================================================

#[test]
fn test_add_and_sub_matrices() {
    let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();

    let sum = a.add(&b).unwrap();
    assert_eq!(
        sum,
        Matrix::from_rows(&[vec![6.0, 8.0], vec![10.0, 12.0]]).unwrap()
    );

    let diff = sum.sub(&b).unwrap();
    assert_eq!(diff, a);
}

#[test]
fn test_scalar_ops() {
    let a = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();

    let scaled = a.mul_scalar(2.0);
    assert_eq!(
        scaled,
        Matrix::from_rows(&[vec![2.0, 4.0, 6.0], vec![8.0, 10.0, 12.0]]).unwrap()
    );

    let shifted = a.add_scalar(1.0).sub_scalar(1.0);
    assert_eq!(shifted, a);
}

#[test]
fn test_elementwise_covers_tail_sizes() {
    // Buffer lengths straddling lane multiples (f64 lanes = 4).
    for (h, w) in [(1, 1), (1, 3), (2, 2), (3, 3), (3, 5), (5, 7)] {
        let a_data: Vec<f64> = (0..h * w).map(|i| (i % 10) as f64).collect();
        let b_data: Vec<f64> = (0..h * w).map(|i| (i % 6) as f64 - 2.0).collect();
        let a = Matrix::from_vec(h, w, a_data.clone()).unwrap();
        let b = Matrix::from_vec(h, w, b_data.clone()).unwrap();

        let sum = a.add(&b).unwrap();
        for i in 0..h * w {
            assert_eq!(sum.as_slice()[i], a_data[i] + b_data[i], "{}x{}", h, w);
        }
    }
}

#[test]
fn test_shape_mismatch_is_an_error() {
    let a: Matrix<f64> = Matrix::zeros(2, 3);
    let b: Matrix<f64> = Matrix::zeros(3, 2);

    assert!(matches!(a.add(&b), Err(Error::ShapeMismatch { .. })));
    assert!(matches!(a.sub(&b), Err(Error::ShapeMismatch { .. })));
}

#[test]
fn test_failed_in_place_op_leaves_operand_untouched() {
    let mut a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b: Matrix<f64> = Matrix::zeros(3, 3);
    let before = a.clone();

    assert!(a.add_in_place(&b).is_err());
    assert_eq!(a, before);
}

// ============================================================
// Reductions and flatten
// ============================================================

#[test]
fn test_sum_equals_sum_of_flatten() {
    for (h, w) in [(1, 1), (2, 3), (4, 4), (5, 7), (13, 17)] {
        let data: Vec<f64> = (0..h * w).map(|i| (i % 11) as f64 * 0.5).collect();
        let m = Matrix::from_vec(h, w, data).unwrap();

        let direct = m.sum();
        let via_flatten = m.flatten().sum();
        assert!(
            (direct - via_flatten).abs() < 1e-8,
            "{}x{}: {} vs {}",
            h,
            w,
            direct,
            via_flatten
        );
    }
}

#[test]
fn test_flatten_is_row_major() {
    let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(m.flatten().as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

// ============================================================
// Operators
// ============================================================

#[test]
fn test_operators_match_named_methods() {
    let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();

    assert_eq!(&a + &b, a.add(&b).unwrap());
    assert_eq!(&a - &b, a.sub(&b).unwrap());
    assert_eq!(&a * &b, a.matmul(&b).unwrap());
    assert_eq!(&a * 2.0, a.mul_scalar(2.0));
    assert_eq!(&a + 1.0, a.add_scalar(1.0));
    assert_eq!(&a - 1.0, a.sub_scalar(1.0));

    let mut c = a.clone();
    c += &b;
    assert_eq!(c, a.add(&b).unwrap());

    let mut d = a.clone();
    d *= 3.0;
    assert_eq!(d, a.mul_scalar(3.0));
}

#[test]
fn test_allocating_ops_do_not_mutate_operands() {
    let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
    let a_before = a.clone();
    let b_before = b.clone();

    let _ = a.add(&b).unwrap();
    let _ = a.matmul(&b).unwrap();
    let _ = a.transpose();
    let _ = a.mul_scalar(2.0);

    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
#[should_panic(expected = "shape mismatch")]
fn test_operator_panics_on_shape_mismatch() {
    let a: Matrix<f64> = Matrix::zeros(2, 3);
    let b: Matrix<f64> = Matrix::zeros(3, 2);
    let _ = &a + &b;
}
