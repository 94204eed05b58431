use approx::assert_relative_eq;
use mm_kernel::{ComputeBackend, CpuBackend, DenseMatrixEngine, Matrix, ParallelBackend};
use proptest::prelude::*;

fn backends() -> Vec<Box<dyn ComputeBackend>> {
    vec![Box::new(CpuBackend::new()), Box::new(ParallelBackend::new())]
}

fn square_matrix() -> impl Strategy<Value = Matrix> {
    (1usize..12).prop_flat_map(|size| {
        prop::collection::vec(-100.0f32..100.0, size * size)
            .prop_map(move |data| Matrix::from_vec(size, data))
    })
}

fn matrix_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
    (1usize..12).prop_flat_map(|size| {
        let cells = prop::collection::vec(-100.0f32..100.0, size * size);
        (cells.clone(), cells).prop_map(move |(a, b)| {
            (Matrix::from_vec(size, a), Matrix::from_vec(size, b))
        })
    })
}

fn bits(m: &Matrix) -> Vec<u32> {
    m.as_slice().iter().map(|v| v.to_bits()).collect()
}

proptest! {
    #[test]
    fn zero_times_anything_is_zero(b in square_matrix()) {
        let size = b.size();
        let zero = Matrix::zeros(size);
        for backend in backends() {
            let mut c = Matrix::from_vec(size, vec![7.0; size * size]);
            backend.multiply(size, &zero, &b, &mut c);
            prop_assert!(c.as_slice().iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn multiply_by_identity_is_noop(a in square_matrix()) {
        let size = a.size();
        let id = Matrix::identity(size);
        for backend in backends() {
            let mut c = Matrix::zeros(size);
            backend.multiply(size, &a, &id, &mut c);
            prop_assert_eq!(c.as_slice(), a.as_slice());
        }
    }

    #[test]
    fn fill_sets_row_index(size in 1usize..64) {
        let engine = DenseMatrixEngine::cpu();
        let mut m = engine.allocate(size).unwrap();
        engine.fill(&mut m, size);
        for i in 0..size {
            for j in 0..size {
                prop_assert_eq!(m[(i, j)], i as f32);
            }
        }
    }

    #[test]
    fn copy_is_detached_from_source((src, other) in matrix_pair()) {
        let size = src.size();
        for backend in backends() {
            let mut src = src.clone();
            let snapshot = src.clone();
            let mut dest = Matrix::zeros(size);
            backend.copy(&mut dest, &src, size);
            src.as_mut_slice().copy_from_slice(other.as_slice());
            prop_assert_eq!(&dest, &snapshot);
        }
    }

    #[test]
    fn multiply_is_deterministic((a, b) in matrix_pair()) {
        let size = a.size();
        let mut reference = Matrix::zeros(size);
        CpuBackend::new().multiply(size, &a, &b, &mut reference);
        for backend in backends() {
            for _ in 0..3 {
                let mut c = Matrix::zeros(size);
                backend.multiply(size, &a, &b, &mut c);
                prop_assert_eq!(bits(&c), bits(&reference));
            }
        }
    }
}

#[test]
fn multiply_tracks_f64_reference() {
    let size = 24;
    let a = Matrix::from_vec(
        size,
        (0..size * size).map(|n| (n as f32 * 0.013).cos()).collect(),
    );
    let b = Matrix::from_vec(
        size,
        (0..size * size).map(|n| (n as f32 * 0.029).sin()).collect(),
    );
    let engine = DenseMatrixEngine::parallel();
    let mut c = engine.allocate(size).unwrap();
    engine.multiply(size, &a, &b, &mut c);

    for i in 0..size {
        for j in 0..size {
            let expected: f64 = (0..size)
                .map(|k| a[(i, k)] as f64 * b[(k, j)] as f64)
                .sum();
            assert_relative_eq!(c[(i, j)], expected as f32, epsilon = 1e-4, max_relative = 1e-4);
        }
    }
}

#[test]
fn filled_two_by_two_product() {
    let engine = DenseMatrixEngine::cpu();
    let mut a = engine.allocate(2).unwrap();
    let mut b = engine.allocate(2).unwrap();
    let mut c = engine.allocate(2).unwrap();
    engine.fill(&mut a, 2);
    engine.fill(&mut b, 2);
    let c = engine.multiply(2, &a, &b, &mut c);
    assert_eq!(c.row(0), &[0.0, 0.0]);
    assert_eq!(c.row(1), &[1.0, 1.0]);
}
