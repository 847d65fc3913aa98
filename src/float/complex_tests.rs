use super::CplxFft;
use crate::common::{Direction, FftError, FftProcess};
use num_complex::Complex32;
use std::vec;

fn assert_complex_close(val: Complex32, expected: Complex32) {
    let tolerance = 1e-4;
    let diff = (val - expected).l1_norm();
    assert!(diff < tolerance, "Error. Expected: {}, Got: {}", expected, val);
}

#[test]
fn test_fft_roundtrip() {
    let input = [
        Complex32::new(1.0, 2.0),
        Complex32::new(3.0, 4.0),
        Complex32::new(5.0, 6.0),
        Complex32::new(7.0, 8.0),
        Complex32::new(-8.0, -7.0),
        Complex32::new(-6.0, -5.0),
        Complex32::new(-4.0, -3.0),
        Complex32::new(-2.0, -1.0),
    ];

    let expected_fft = [
        Complex32::new(-4.0, 4.0),
        Complex32::new(30.72792, -12.72792),
        Complex32::new(-16.0, 0.0),
        Complex32::new(12.72792, 5.27208),
        Complex32::new(-8.0, -8.0),
        Complex32::new(5.27208, 12.72792),
        Complex32::new(0.0, -16.0),
        Complex32::new(-12.72792, 30.72792),
    ];

    let mut buffer = input.to_vec();
    let fft = CplxFft::new(input.len()).unwrap();

    fft.process(&mut buffer, Direction::Forward).unwrap();
    for (i, &val) in buffer.iter().enumerate() {
        assert_complex_close(val, expected_fft[i]);
    }

    fft.process(&mut buffer, Direction::Inverse).unwrap();
    for (i, &val) in buffer.iter().enumerate() {
        assert_complex_close(val, input[i]);
    }
}

#[test]
fn test_trait_dispatch() {
    let fft = CplxFft::new(4).unwrap();
    let mut buffer = vec![Complex32::new(0.0, 0.0); 4];
    buffer[0] = Complex32::new(1.0, 0.0);

    // Impulse in, flat spectrum out
    FftProcess::process(&fft, &mut buffer, false).unwrap();
    for &bin in &buffer {
        assert_complex_close(bin, Complex32::new(1.0, 0.0));
    }

    FftProcess::process(&fft, &mut buffer, true).unwrap();
    assert_complex_close(buffer[0], Complex32::new(1.0, 0.0));
    assert_complex_close(buffer[3], Complex32::new(0.0, 0.0));
}

#[test]
fn test_errors() {
    assert_eq!(CplxFft::new(12).err(), Some(FftError::UnsupportedLength));
    assert_eq!(CplxFft::new(0).err(), Some(FftError::UnsupportedLength));

    let fft = CplxFft::new(8).unwrap();
    let mut short = vec![Complex32::new(0.0, 0.0); 7];
    assert_eq!(fft.process(&mut short, Direction::Forward), Err(FftError::SizeMismatch));
}
