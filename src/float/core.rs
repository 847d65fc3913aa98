use alloc::vec::Vec;
use core::f32::consts::PI;
use num_complex::Complex32;

/// `N/2` twiddle factors `e^(-j*2*pi*k/N)`, enough for a radix-2 transform.
pub(crate) fn precompute_twiddles(n: usize) -> Vec<Complex32> {
    (0..n / 2)
        .map(|k| {
            let angle = -2.0 * PI * (k as f32) / (n as f32);
            let (sin, cos) = sin_cos(angle);
            Complex32::new(cos, sin)
        })
        .collect()
}

/// Bit-reversed index of every slot, built incrementally (no per-entry bit loop).
pub(crate) fn precompute_bitrev(n: usize) -> Vec<usize> {
    let mut bitrev = Vec::with_capacity(n);
    let mut j = 0;
    for i in 0..n {
        if i > 0 {
            let mut k = n >> 1;
            while j >= k {
                j -= k;
                k >>= 1;
            }
            j += k;
        }
        bitrev.push(j);
    }
    bitrev
}

fn sin_cos(angle: f32) -> (f32, f32) {
    (libm::sinf(angle), libm::cosf(angle))
}

/// Radix-2 decimation-in-time transform in place, natural order in and out.
///
/// The forward pass is unscaled. The inverse pass halves every stage, which
/// makes it the normalized inverse.
pub(crate) fn radix_2_dit_fft_core<const INVERSE: bool>(
    buffer: &mut [Complex32],
    twiddles: &[Complex32],
    bitrev: &[usize],
) {
    let n = buffer.len();
    if n < 2 {
        return;
    }

    for (i, &j) in bitrev.iter().enumerate().take(n - 1).skip(1) {
        if i < j {
            buffer.swap(i, j);
        }
    }

    let mut stride = 1;
    let mut tw_step = n >> 1;

    while stride < n {
        for group in (0..n).step_by(stride << 1) {
            for i in 0..stride {
                let w = twiddles[i * tw_step];
                let w = if INVERSE { w.conj() } else { w };

                let index = group + i;
                let a = buffer[index];
                let t = buffer[index + stride] * w;

                let (v1, v2) = if INVERSE {
                    ((a + t).scale(0.5), (a - t).scale(0.5))
                } else {
                    (a + t, a - t)
                };

                buffer[index] = v1;
                buffer[index + stride] = v2;
            }
        }
        stride <<= 1;
        tw_step >>= 1;
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
