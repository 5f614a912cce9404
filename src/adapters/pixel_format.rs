//! Pixel format conversion helpers for render backends and image writers.

use rayon::prelude::*;

/// Packs RGBA8 bytes into one `u32` per pixel (`u32::from_le_bytes([r, g, b, a])`).
///
/// # Panics
/// Panics if `src` is not a multiple of 4 bytes.
#[must_use]
pub fn pack_rgba(src: &[u8]) -> Vec<u32> {
    assert!(
        src.len() % 4 == 0,
        "src length {} is not a multiple of 4",
        src.len()
    );

    src.par_chunks_exact(4)
        .map(|pixel| u32::from_le_bytes([pixel[0], pixel[1], pixel[2], pixel[3]]))
        .collect()
}

/// Copies packed RGBA pixels to RGB bytes, dropping alpha.
///
/// # Panics
/// Panics if `dst.len()` is not `src.len() * 3`.
pub fn copy_packed_rgba_to_rgb(src: &[u32], dst: &mut [u8]) {
    let expected_dst_len = src.len() * 3;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    dst.par_chunks_exact_mut(3)
        .zip(src.par_iter())
        .for_each(|(dst_pixel, src_pixel)| {
            let [r, g, b, _] = src_pixel.to_le_bytes();
            dst_pixel.copy_from_slice(&[r, g, b]);
        });
}

/// Fills an RGBA8 frame with a single colour.
pub fn fill_rgba(frame: &mut [u8], colour: [u8; 4]) {
    frame
        .par_chunks_exact_mut(4)
        .for_each(|pixel| pixel.copy_from_slice(&colour));
}
