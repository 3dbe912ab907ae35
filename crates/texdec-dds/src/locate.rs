//! Face and mip level location.

use texdec_common::ReadExt;
use tracing::trace;

use crate::format::Pitch;
use crate::source::SliceSource;
use crate::{DdsFile, Error, Result};

/// Padding stored between consecutive cubemap faces.
pub const CUBEMAP_FACE_GAP: u64 = 27;

/// Raw bytes of one stored surface.
#[derive(Debug)]
pub(crate) struct Surface {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Walk faces then levels until the requested surface is reached and read it.
///
/// `dimensions` of `None` selects level 0 of the face. The source must be
/// positioned at the first byte of pixel data.
pub(crate) fn locate<S: SliceSource>(
    source: &mut S,
    file: &DdsFile,
    pitch: Pitch,
    depth_slice: u32,
    dimensions: Option<(u32, u32)>,
) -> Result<Surface> {
    let not_found = Error::SliceNotFound {
        depth_slice,
        dimensions,
    };
    if depth_slice >= file.face_count() {
        return Err(not_found);
    }

    for face in 0..=depth_slice {
        if face > 0 {
            source.skip(CUBEMAP_FACE_GAP)?;
        }
        for level in file.levels(pitch) {
            let wanted = face == depth_slice
                && match dimensions {
                    Some(dims) => dims == (level.width, level.height),
                    None => level.index == 0,
                };
            if wanted {
                trace!(face, level = level.index, size = level.size, "reading surface");
                let data = source.read_vec(level.size)?;
                return Ok(Surface {
                    width: level.width,
                    height: level.height,
                    data,
                });
            }
            trace!(face, level = level.index, size = level.size, "skipping surface");
            source.skip(level.size as u64)?;
        }
    }

    Err(not_found)
}
