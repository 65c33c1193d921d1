use super::*;

// ── Data generation ──────────────────────────────────────────────────

#[test]
fn make_data_is_a_fresh_ramp_pair() {
    let (x, y) = make_data(5);
    assert_eq!(x, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(x, y);
    assert_ne!(x.as_ptr(), y.as_ptr());
    assert!(make_data(0).0.is_empty());
}

// ── Verification ─────────────────────────────────────────────────────

#[test]
fn verify_ramp_accepts_correct_result() {
    let x = ramp(4);
    let y = vec![0.0, 11.0, 22.0, 33.0];
    assert_eq!(verify_ramp(10.0, 4, &x, &y), Ok(()));
}

#[test]
fn verify_ramp_reports_length_first() {
    let err = verify_ramp(10.0, 4, &ramp(3), &ramp(4)).unwrap_err();
    assert_eq!(err, VerifyError::Length { vector: Vector::X, expected: 4, actual: 3 });

    let err = verify_ramp(10.0, 4, &ramp(4), &ramp(5)).unwrap_err();
    assert_eq!(err, VerifyError::Length { vector: Vector::Y, expected: 4, actual: 5 });
}

#[test]
fn verify_ramp_reports_changed_x() {
    let mut x = ramp(4);
    x[2] = 2.5;
    let y = vec![0.0, 11.0, 22.0, 33.0];
    let err = verify_ramp(10.0, 4, &x, &y).unwrap_err();
    assert_eq!(err, VerifyError::XChanged { index: 2, expected: 2.0, actual: 2.5 });
}

#[test]
fn verify_ramp_x_check_is_bitwise() {
    let mut x = ramp(2);
    x[0] = -0.0;
    let y = vec![0.0, 11.0];
    assert!(matches!(
        verify_ramp(10.0, 2, &x, &y),
        Err(VerifyError::XChanged { index: 0, .. })
    ));
}

#[test]
fn verify_ramp_reports_first_bad_y() {
    let x = ramp(4);
    let y = vec![0.0, 11.0, 21.0, 0.0];
    let err = verify_ramp(10.0, 4, &x, &y).unwrap_err();
    assert_eq!(err, VerifyError::YMismatch { index: 2, expected: 22.0, actual: 21.0 });
    assert_eq!(err.to_string(), "y is not a*x+y: y[2] = 21, expected 22");
}

#[test]
fn relative_tolerance_absorbs_last_bit_only() {
    let x0 = [0.1, 0.7];
    let y0 = [0.3, -0.2];
    let a = 1.0 / 3.0;
    let exact: Vec<f64> = (0..2).map(|i| y0[i] + a * x0[i]).collect();

    let nudged: Vec<f64> = exact.iter().map(|v| f64::from_bits(v.to_bits() + 1)).collect();
    assert!(check_axpy(a, &x0, &y0, &x0, &nudged, Tolerance::Exact).is_err());
    assert_eq!(check_axpy(a, &x0, &y0, &x0, &nudged, Tolerance::FOREIGN), Ok(()));

    let wrong: Vec<f64> = exact.iter().map(|v| v + 1e-6).collect();
    assert!(check_axpy(a, &x0, &y0, &x0, &wrong, Tolerance::FOREIGN).is_err());
}

// ── Configuration ────────────────────────────────────────────────────

#[test]
fn default_config() {
    let config = HarnessConfig::default();
    assert_eq!(config.len, 10_000);
    assert_eq!(config.coefficient, 10.0);
}

#[test]
fn config_lookup_overrides() {
    let config = HarnessConfig::from_lookup(|key| match key {
        "AXPY_LEN" => Some("128".to_string()),
        "AXPY_COEFFICIENT" => Some(" -2.5 ".to_string()),
        _ => None,
    });
    assert_eq!(config, HarnessConfig { len: 128, coefficient: -2.5 });
}

#[test]
fn config_lookup_ignores_bad_values() {
    let config = HarnessConfig::from_lookup(|key| match key {
        "AXPY_LEN" => Some("many".to_string()),
        "AXPY_COEFFICIENT" => Some("inf".to_string()),
        _ => None,
    });
    assert_eq!(config, HarnessConfig::default());
}

// ── run_checked ──────────────────────────────────────────────────────

#[test]
fn run_checked_every_kernel_default_config() {
    let config = HarnessConfig::default();
    for kernel in Kernel::all() {
        let y = run_checked(kernel, &config).unwrap_or_else(|e| panic!("{kernel}: {e}"));
        assert_eq!(y.len(), N);
        assert_eq!(y[9999], 109_989.0, "{kernel}");
    }
}

#[test]
fn run_checked_fractional_coefficient() {
    let config = HarnessConfig { len: 1000, coefficient: 0.1 };
    for kernel in Kernel::all() {
        assert!(run_checked(kernel, &config).is_ok(), "{kernel}");
    }
}

#[test]
fn run_checked_empty() {
    let config = HarnessConfig { len: 0, coefficient: A };
    for kernel in Kernel::all() {
        assert_eq!(run_checked(kernel, &config), Ok(vec![]), "{kernel}");
    }
}

#[test]
fn ramp_exactness_limit() {
    let exact = |len, coefficient| ramp_is_exact(&HarnessConfig { len, coefficient });
    assert!(exact(N, A));
    assert!(exact(0, 1.0e300));
    assert!(!exact(N, 0.5));
    // (a + 1) * len straddles 2^53.
    assert!(exact(1 << 20, (1u64 << 33) as f64 - 2.0));
    assert!(!exact(1 << 20, (1u64 << 33) as f64 - 1.0));
    assert!(!exact(16, 1.0e15));
}

#[test]
fn run_checked_large_integral_coefficient() {
    let config = HarnessConfig { len: 16, coefficient: 1.0e15 };
    assert!(!ramp_is_exact(&config));
    for kernel in Kernel::all() {
        assert!(run_checked(kernel, &config).is_ok(), "{kernel}");
    }
}

#[test]
fn run_checked_every_blas_backend() {
    let config = HarnessConfig { len: 1000, coefficient: -3.0 };
    for &backend in crate::Backend::available() {
        let y = run_checked(Kernel::Blas(backend), &config)
            .unwrap_or_else(|e| panic!("{}: {e}", backend.name()));
        assert_eq!(y[999], -1998.0, "{}", backend.name());
    }
}

// ── Sink ─────────────────────────────────────────────────────────────

#[test]
fn sink_accumulates_last_elements() {
    let mut sink = Sink::new();
    assert_eq!(sink.mean(), None);
    sink.consume(&[1.0, 2.0, 3.0]);
    sink.consume(&[5.0]);
    sink.consume(&[]);
    assert_eq!(sink.total(), 8.0);
    assert_eq!(sink.samples(), 3);
    assert_eq!(sink.mean(), Some(8.0 / 3.0));
}
