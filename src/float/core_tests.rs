use super::*;
use num_complex::Complex32;
use std::vec;

const EPSILON: f32 = 1e-4;

fn assert_cplx_eq(a: Complex32, b: Complex32) {
    assert!((a - b).l1_norm() < EPSILON, "Complex mismatch: {} vs {}", a, b);
}

#[test]
fn test_precompute_bitrev_8() {
    // 1 (001) <-> 4 (100), 3 (011) <-> 6 (110)
    assert_eq!(precompute_bitrev(8), vec![0, 4, 2, 6, 1, 5, 3, 7]);
}

#[test]
fn test_precompute_twiddles_8() {
    let twiddles = precompute_twiddles(8);
    assert_eq!(twiddles.len(), 4);

    let sqrt2_2 = core::f32::consts::FRAC_1_SQRT_2;
    assert_cplx_eq(twiddles[0], Complex32::new(1.0, 0.0));
    assert_cplx_eq(twiddles[1], Complex32::new(sqrt2_2, -sqrt2_2));
    assert_cplx_eq(twiddles[2], Complex32::new(0.0, -1.0));
    assert_cplx_eq(twiddles[3], Complex32::new(-sqrt2_2, -sqrt2_2));
}

#[test]
fn test_dc_forward_and_back() {
    let n = 4;
    let twiddles = precompute_twiddles(n);
    let bitrev = precompute_bitrev(n);
    let mut buffer = vec![Complex32::new(1.0, 0.0); n];

    radix_2_dit_fft_core::<false>(&mut buffer, &twiddles, &bitrev);
    assert_cplx_eq(buffer[0], Complex32::new(4.0, 0.0));
    for &bin in &buffer[1..] {
        assert_cplx_eq(bin, Complex32::new(0.0, 0.0));
    }

    radix_2_dit_fft_core::<true>(&mut buffer, &twiddles, &bitrev);
    for &sample in &buffer {
        assert_cplx_eq(sample, Complex32::new(1.0, 0.0));
    }
}

#[test]
fn test_single_point_is_identity() {
    let mut buffer = vec![Complex32::new(0.25, -0.5)];
    radix_2_dit_fft_core::<false>(&mut buffer, &precompute_twiddles(1), &precompute_bitrev(1));
    assert_cplx_eq(buffer[0], Complex32::new(0.25, -0.5));
}
