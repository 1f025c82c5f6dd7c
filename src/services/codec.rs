//! PNG decoding to and encoding from [`Image`].

use std::io::Cursor;
use std::path::Path;

use stitch_engine::{Image, Rgb};

use crate::error::StitchError;

/// Read a PNG file into an 8-bit RGB image.
pub fn read_png(path: &Path) -> Result<Image, StitchError> {
    let bytes = std::fs::read(path).map_err(|source| StitchError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let image = decode_png(&bytes)?;
    tracing::info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Loaded image"
    );
    Ok(image)
}

/// Write an image as an 8-bit RGB PNG.
pub fn write_png(image: &Image, path: &Path) -> Result<(), StitchError> {
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes)?;
    tracing::info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Saved image"
    );
    Ok(())
}

/// Decode PNG bytes.
///
/// Palette and low bit-depth images are expanded, 16-bit samples are
/// stripped to 8 bits, grey is replicated to RGB and alpha is dropped.
pub fn decode_png(bytes: &[u8]) -> Result<Image, StitchError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let data = &buf[..info.buffer_size()];

    if info.bit_depth != png::BitDepth::Eight {
        return Err(StitchError::UnsupportedPng(format!(
            "bit depth {:?} after expansion",
            info.bit_depth
        )));
    }

    let stride = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => {
            return Err(StitchError::UnsupportedPng(
                "indexed color was not expanded".to_string(),
            ))
        }
    };

    let width = info.width as usize;
    let height = info.height as usize;
    let row_bytes = info.line_size;

    let mut pixels = Vec::with_capacity(width * height);
    for row in data.chunks(row_bytes).take(height) {
        for px in row[..width * stride].chunks_exact(stride) {
            pixels.push(match stride {
                1 | 2 => Rgb::new(px[0], px[0], px[0]),
                _ => Rgb::new(px[0], px[1], px[2]),
            });
        }
    }

    Ok(Image::new(width, height, pixels)?)
}

/// Encode an image as 8-bit RGB PNG bytes.
pub fn encode_png(image: &Image) -> Result<Vec<u8>, StitchError> {
    let width = u32::try_from(image.width())
        .map_err(|_| StitchError::UnsupportedPng(format!("width {}", image.width())))?;
    let height = u32::try_from(image.height())
        .map_err(|_| StitchError::UnsupportedPng(format!("height {}", image.height())))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&image.to_rgb_bytes())?;
    }
    Ok(buf.into_inner())
}
