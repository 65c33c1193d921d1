use axpyspeed::harness::{self, check_axpy, HarnessConfig, Tolerance};
use axpyspeed::kernels::{axpy_in_place, axpy_indexed, axpy_task_per_element};
use axpyspeed::Kernel;
use proptest::prelude::*;

fn run(kernel: Kernel, a: f64, n: usize) -> (Vec<f64>, Vec<f64>) {
    let (x, mut y) = harness::make_data(n);
    kernel.apply(a, &x, &mut y);
    (x, y)
}

// ── Concrete scenarios ───────────────────────────────────────────────

#[test]
fn ten_thousand_ramp_coefficient_ten() {
    for kernel in Kernel::all() {
        let (x, y) = run(kernel, 10.0, 10_000);
        harness::verify_ramp(10.0, 10_000, &x, &y).unwrap_or_else(|e| panic!("{kernel}: {e}"));
        assert_eq!(y[9999], 109_989.0, "{kernel}");
        for (i, &v) in y.iter().enumerate() {
            assert_eq!(v, 11.0 * i as f64, "{kernel} idx={i}");
        }
    }
}

#[test]
fn single_element_zero_coefficient() {
    for kernel in Kernel::all() {
        let x = vec![5.0];
        let mut y = vec![3.0];
        kernel.apply(0.0, &x, &mut y);
        assert_eq!(y, vec![3.0], "{kernel}");
    }
}

#[test]
fn equal_operands_negative_one() {
    for kernel in Kernel::all() {
        let x = vec![1.0, 2.0];
        let mut y = vec![1.0, 2.0];
        kernel.apply(-1.0, &x, &mut y);
        assert_eq!(y, vec![0.0, 0.0], "{kernel}");
        assert_eq!(x, vec![1.0, 2.0], "{kernel}");
    }
}

#[test]
fn zero_length_leaves_everything_empty() {
    for kernel in Kernel::all() {
        let (x, y) = run(kernel, 3.0, 0);
        assert!(x.is_empty() && y.is_empty(), "{kernel}");
    }
}

#[test]
fn fresh_inputs_give_identical_outputs() {
    let config = HarnessConfig { len: 4096, coefficient: 0.3 };
    for kernel in Kernel::all() {
        let first = harness::run_checked(kernel, &config).unwrap();
        let second = harness::run_checked(kernel, &config).unwrap();
        let same = first.iter().zip(&second).all(|(a, b)| a.to_bits() == b.to_bits());
        assert!(same, "{kernel}: outputs differ between runs");
    }
}

#[test]
fn repeated_calls_on_one_pair_accumulate() {
    // 7 + 7 + 7: y carries the first update into the second.
    let (x, mut y) = harness::make_data(8);
    Kernel::Native.apply(1.0, &x, &mut y);
    Kernel::Native.apply(1.0, &x, &mut y);
    assert_eq!(y[7], 21.0);
}

// ── Properties ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_kernel_matches_formula_on_ramp(
        n in 0usize..600,
        a in -1.0e6f64..1.0e6,
    ) {
        for kernel in Kernel::all() {
            let (x, y) = run(kernel, a, n);
            let r = harness::ramp(n);
            let result = check_axpy(a, &r, &r, &x, &y, Tolerance::for_kernel(kernel));
            prop_assert!(result.is_ok(), "{}: {:?}", kernel, result);
        }
    }

    #[test]
    fn every_kernel_matches_formula_on_arbitrary_data(
        (x0, y0) in (0usize..300).prop_flat_map(|n| (
            proptest::collection::vec(-1.0e3f64..1.0e3, n),
            proptest::collection::vec(-1.0e3f64..1.0e3, n),
        )),
        a in -10.0f64..10.0,
    ) {
        for kernel in Kernel::all() {
            let x = x0.clone();
            let mut y = y0.clone();
            kernel.apply(a, &x, &mut y);
            let result = check_axpy(a, &x0, &y0, &x, &y, Tolerance::for_kernel(kernel));
            prop_assert!(result.is_ok(), "{}: {:?}", kernel, result);
        }
    }

    #[test]
    fn task_per_element_is_bit_identical_to_scalar(
        y0 in proptest::collection::vec(-1.0e9f64..1.0e9, 0..400),
        a in proptest::num::f64::NORMAL,
    ) {
        let x: Vec<f64> = y0.iter().rev().copied().collect();
        let mut expected = y0.clone();
        axpy_indexed(a, &x, &mut expected);
        let mut got = y0.clone();
        axpy_task_per_element(a, &x, &mut got);
        for i in 0..got.len() {
            prop_assert_eq!(got[i].to_bits(), expected[i].to_bits(), "idx={}", i);
        }
    }

    #[test]
    fn aliased_update_scales_by_a_plus_one(
        v0 in proptest::collection::vec(-1.0e6f64..1.0e6, 0..300),
        a in -100.0f64..100.0,
    ) {
        let mut v = v0.clone();
        axpy_in_place(a, &mut v);
        for i in 0..v.len() {
            prop_assert_eq!(v[i].to_bits(), (v0[i] + a * v0[i]).to_bits(), "idx={}", i);
        }
    }
}
