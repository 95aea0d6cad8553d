use camel::{
    assert_approx_eq,
    blas::{Backend, Level1},
    vec3, vec4, Mat4d, Matrix, Vec3d,
};

fn random(rng: &mut fastrand::Rng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.f64() * 10.0 - 5.0).collect()
}

#[test]
fn vector_storage() -> anyhow::Result<()> {
    camel::init_logger!();

    for backend in Backend::all() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(-4.0, 0.5, 2.0);
        assert_eq!(backend.dot(a.as_slice(), b.as_slice()), a.dot(b));
        assert_approx_eq!(backend.nrm2(a.as_slice()), a.length());
        assert_eq!(backend.asum(b.as_slice()), 6.5);
        assert_eq!(backend.iamax(b.as_slice()), Some(0));

        let mut y = b;
        backend.axpy(2.0, a.as_slice(), y.as_mut_slice());
        assert_eq!(y, a * 2.0 + b);

        let mut x: Vec3d = Vec3d::ZERO;
        backend.copy(a.as_slice(), x.as_mut_slice());
        assert_eq!(x, a);

        let (mut p, mut q) = (a, b);
        backend.swap(p.as_mut_slice(), q.as_mut_slice());
        assert_eq!((p, q), (b, a));

        let mut v = vec4(1.0f32, -1.0, 2.0, -2.0);
        backend.scal(-0.5, v.as_mut_slice());
        assert_eq!(v, [-0.5, 0.5, -1.0, 1.0]);
    }

    Ok(())
}

#[test]
fn matrix_storage() -> anyhow::Result<()> {
    camel::init_logger!();

    let m = Mat4d::translation(1.0, 2.0, 3.0) * Mat4d::scale(2.0, 2.0, 2.0);
    for backend in Backend::all() {
        // Frobenius norm and trace-like reductions over the flat row-major storage.
        let frobenius = backend.nrm2(m.as_flat_slice());
        assert_approx_eq!(frobenius, (3.0 * 4.0 + 1.0 + 1.0 + 4.0 + 9.0f64).sqrt());
        assert_eq!(backend.iamax(m.as_flat_slice()), Some(11));

        let mut scaled = m;
        backend.scal(0.5, scaled.as_flat_mut_slice());
        assert_eq!(scaled, m * 0.5);
    }

    Ok(())
}

#[test]
fn backends_match_reference() -> anyhow::Result<()> {
    camel::init_logger!();

    let mut rng = fastrand::Rng::with_seed(0x1e7e1);
    for len in [0, 1, 2, 3, 4, 7, 16, 33, 250] {
        let x = random(&mut rng, len);
        let y = random(&mut rng, len);
        let (x, y) = (&x[..], &y[..]);
        let alpha = rng.f64() * 4.0 - 2.0;

        let reference = Backend::Reference;
        for backend in Backend::all() {
            assert_approx_eq!(
                backend.dot(x, y),
                reference.dot(x, y),
                epsilon = 1e-9,
                "backend {backend}, len {len}",
            );
            assert_approx_eq!(backend.asum(x), reference.asum(x), epsilon = 1e-9);
            assert_approx_eq!(backend.nrm2(x), reference.nrm2(x), epsilon = 1e-9);
            assert_eq!(backend.iamax(x), reference.iamax(x), "backend {backend}, len {len}");

            let mut expected = y.to_vec();
            reference.axpy(alpha, x, &mut expected[..]);
            let mut got = y.to_vec();
            backend.axpy(alpha, x, &mut got[..]);
            assert_eq!(got, expected);

            let (mut ex, mut ey) = (x.to_vec(), y.to_vec());
            reference.rot(&mut ex[..], &mut ey[..], 0.8, -0.6);
            let (mut gx, mut gy) = (x.to_vec(), y.to_vec());
            backend.rot(&mut gx[..], &mut gy[..], 0.8, -0.6);
            assert_eq!((gx, gy), (ex, ey));
        }
    }

    Ok(())
}

#[test]
fn rot_preserves_norm() {
    let mut rng = fastrand::Rng::with_seed(77);
    let (s, c) = 0.3f64.sin_cos();
    for backend in Backend::all() {
        let mut x = random(&mut rng, 9);
        let mut y = random(&mut rng, 9);
        let before = backend.dot(&x[..], &x[..]) + backend.dot(&y[..], &y[..]);
        backend.rot(&mut x[..], &mut y[..], c, s);
        let after = backend.dot(&x[..], &x[..]) + backend.dot(&y[..], &y[..]);
        assert_approx_eq!(before, after, epsilon = 1e-9);
    }
}

#[test]
fn default_backend() {
    // Unless overridden in the environment, the reference implementation is used.
    if std::env::var_os("CAMEL_LEVEL1_BACKEND").is_none() {
        assert_eq!(Backend::from_env(), Backend::Reference);
    }
    let m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(Backend::from_env().asum(m.as_flat_slice()), 10.0);
}
