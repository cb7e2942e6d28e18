//! Animated GIF preview of a horizontal animation sheet

use crate::io::error::{PackError, Result, invalid_parameter};
use crate::synthesis::OutputRaster;
use image::{Delay, Frame, RgbaImage, imageops};
use std::path::Path;

/// Split a horizontal sheet into equally sized frames
///
/// # Errors
///
/// Returns an error if `frame_count` is zero or does not divide the sheet width
pub fn split_frames(sheet: &OutputRaster, frame_count: u32) -> Result<Vec<RgbaImage>> {
    if frame_count == 0 || sheet.width() % frame_count != 0 {
        return Err(invalid_parameter(
            "frame_count",
            &frame_count,
            &format!("must evenly divide the sheet width {}", sheet.width()),
        ));
    }

    let frame_width = sheet.width() / frame_count;
    Ok((0..frame_count)
        .map(|index| {
            imageops::crop_imm(
                sheet.pixels(),
                index * frame_width,
                0,
                frame_width,
                sheet.height(),
            )
            .to_image()
        })
        .collect())
}

/// Write the sheet's frames as a looping GIF
///
/// # Errors
///
/// Returns an error if:
/// - The sheet cannot be split into `frame_count` frames
/// - The parent directory or file cannot be created
/// - GIF encoding fails
pub fn export_sheet_preview(
    sheet: &OutputRaster,
    frame_count: u32,
    frame_delay_ms: u32,
    output_path: &Path,
) -> Result<()> {
    let frames = split_frames(sheet, frame_count)?
        .into_iter()
        .map(|buffer| {
            Frame::from_parts(
                buffer,
                0,
                0,
                Delay::from_numer_denom_ms(frame_delay_ms, 1),
            )
        })
        .collect::<Vec<_>>();

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PackError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = std::fs::File::create(output_path).map_err(|e| PackError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let mut encoder = image::codecs::gif::GifEncoder::new(file);
    encoder
        .set_repeat(image::codecs::gif::Repeat::Infinite)
        .map_err(|e| PackError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;
    encoder
        .encode_frames(frames)
        .map_err(|e| PackError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
