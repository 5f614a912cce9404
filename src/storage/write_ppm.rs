use std::io::{BufWriter, Write};
use std::path::Path;

use crate::adapters::pixel_format::copy_packed_rgba_to_rgb;
use crate::controllers::window::ports::ImageBuffer;

pub fn write_ppm(image: &ImageBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = BufWriter::new(std::fs::File::create(filepath)?);

    let mut rgb = vec![0; image.pixels.len() * 3];
    copy_packed_rgba_to_rgb(&image.pixels, &mut rgb);

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", image.width, image.height)?;
    writeln!(file, "255")?;
    file.write_all(&rgb)?;
    file.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_ppm_emits_header_and_rgb_payload() {
        let image = ImageBuffer {
            pixels: vec![
                u32::from_le_bytes([255, 0, 0, 255]),
                u32::from_le_bytes([0, 0, 255, 7]),
            ],
            width: 2,
            height: 1,
        };
        let path = std::env::temp_dir().join(format!("window_runtime_{}.ppm", std::process::id()));

        write_ppm(&image, &path).expect("temp dir is writable");
        let bytes = std::fs::read(&path).expect("file was just written");
        let _ = std::fs::remove_file(&path);

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 0, 0, 255]);
        assert_eq!(bytes, expected);
    }
}
