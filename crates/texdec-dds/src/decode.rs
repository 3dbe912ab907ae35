//! Decoding entry points.

use std::fmt;
use std::io::{Read, Seek};

use texdec_bcn::{bc1, bc2, bc3, bc7, DecodedBlock};
use tracing::debug;

use crate::effect::PostEffect;
use crate::format::BlockFormat;
use crate::locate::{locate, Surface};
use crate::source::{Seekable, SliceSource, Streaming};
use crate::uncompressed;
use crate::{DdsFile, Error, ErrorKind, Raster, Result};

/// Which surface to decode and how to finish it.
#[derive(Clone, Copy, Default)]
pub struct DecodeRequest<'a> {
    depth_slice: u32,
    dimensions: Option<(u32, u32)>,
    ignore_alpha: bool,
    post_effect: Option<&'a dyn PostEffect>,
}

impl<'a> DecodeRequest<'a> {
    /// Level 0 of face 0, alpha kept, no effect.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the cubemap face (0 for plain textures).
    pub fn with_depth_slice(mut self, depth_slice: u32) -> Self {
        self.depth_slice = depth_slice;
        self
    }

    /// Select the mip level with exactly these dimensions. A zero in either
    /// dimension selects the base level.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = (width > 0 && height > 0).then_some((width, height));
        self
    }

    /// Force every output alpha to 255.
    pub fn with_ignore_alpha(mut self, ignore_alpha: bool) -> Self {
        self.ignore_alpha = ignore_alpha;
        self
    }

    /// Apply `effect` to the finished raster.
    pub fn with_post_effect(mut self, effect: &'a dyn PostEffect) -> Self {
        self.post_effect = Some(effect);
        self
    }

    pub fn depth_slice(&self) -> u32 {
        self.depth_slice
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }

    pub fn ignore_alpha(&self) -> bool {
        self.ignore_alpha
    }
}

impl fmt::Debug for DecodeRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeRequest")
            .field("depth_slice", &self.depth_slice)
            .field("dimensions", &self.dimensions)
            .field("ignore_alpha", &self.ignore_alpha)
            .field("post_effect", &self.post_effect.is_some())
            .finish()
    }
}

/// Result of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// Decoded RGBA8 pixels.
    Raster(Raster),
    /// Pixel data of an unrecognized format, returned untouched.
    Opaque(Vec<u8>),
}

impl Decoded {
    pub fn as_raster(&self) -> Option<&Raster> {
        match self {
            Decoded::Raster(raster) => Some(raster),
            Decoded::Opaque(_) => None,
        }
    }

    pub fn into_raster(self) -> Option<Raster> {
        match self {
            Decoded::Raster(raster) => Some(raster),
            Decoded::Opaque(_) => None,
        }
    }
}

/// Decode a DDS file from a seekable reader.
///
/// Structural problems, unsupported formats and missing surfaces are logged
/// and reported as `Ok(None)`. Only I/O failures, including a stream that
/// ends inside the pixel data, are returned as errors.
///
/// # Example
///
/// ```no_run
/// use std::fs::File;
/// use std::io::BufReader;
/// use texdec_dds::{decode, DecodeRequest};
///
/// let reader = BufReader::new(File::open("texture.dds")?);
/// let request = DecodeRequest::new().with_ignore_alpha(true);
/// if let Some(raster) = decode(reader, &request)?.and_then(|d| d.into_raster()) {
///     println!("{}x{}", raster.width(), raster.height());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn decode<R: Read + Seek>(reader: R, request: &DecodeRequest<'_>) -> Result<Option<Decoded>> {
    lenient(try_decode(Seekable(reader), request))
}

/// Like [`decode`], for readers that cannot seek. Skipped surfaces are read
/// and discarded.
pub fn decode_stream<R: Read>(reader: R, request: &DecodeRequest<'_>) -> Result<Option<Decoded>> {
    lenient(try_decode(Streaming(reader), request))
}

/// Decode a DDS file, reporting every failure.
pub fn try_decode<S: SliceSource>(mut source: S, request: &DecodeRequest<'_>) -> Result<Decoded> {
    let file = DdsFile::read_from(&mut source)?;

    let Some(format) = file.format().copied() else {
        debug!(
            width = file.width(),
            height = file.height(),
            "unrecognized pixel format, passing data through"
        );
        let mut data = Vec::new();
        source.read_to_end(&mut data)?;
        return Ok(Decoded::Opaque(data));
    };

    if let BlockFormat::Unsupported(name) = format.block {
        return Err(Error::UnsupportedFormat(name.to_string()));
    }

    let surface = locate(
        &mut source,
        &file,
        format.pitch,
        request.depth_slice,
        request.dimensions,
    )?;
    debug!(
        format = %format.block,
        width = surface.width,
        height = surface.height,
        "decoding surface"
    );

    let mut raster = assemble(format.block, surface)?;
    if request.ignore_alpha {
        raster.force_opaque();
    }
    if let Some(effect) = request.post_effect {
        effect.apply(&mut raster);
    }
    Ok(Decoded::Raster(raster))
}

fn lenient(result: Result<Decoded>) -> Result<Option<Decoded>> {
    match result {
        Ok(decoded) => Ok(Some(decoded)),
        Err(e) if e.kind() == ErrorKind::Io => Err(e),
        Err(e) => {
            debug!(error = %e, kind = ?e.kind(), "texture not decoded");
            Ok(None)
        }
    }
}

fn assemble(format: BlockFormat, surface: Surface) -> Result<Raster> {
    let mut raster = Raster::new(surface.width, surface.height);
    let data = &surface.data;

    match format {
        BlockFormat::Dxt1 => decode_blocks(data, &mut raster, |b| Ok(bc1::decode_block(b)))?,
        BlockFormat::Dxt3 => decode_blocks(data, &mut raster, |b| Ok(bc2::decode_block(b)))?,
        BlockFormat::Dxt5 => decode_blocks(data, &mut raster, |b| Ok(bc3::decode_block(b)))?,
        BlockFormat::Bc7(color_space) => {
            decode_blocks(data, &mut raster, |b| bc7::decode_block(b, color_space))?
        }
        BlockFormat::Uncompressed(layout) => uncompressed::decode(data, &layout, &mut raster)?,
        BlockFormat::Unsupported(name) => return Err(Error::UnsupportedFormat(name.to_string())),
    }
    Ok(raster)
}

/// Decode blocks in row-major order into `raster`.
fn decode_blocks<const N: usize>(
    data: &[u8],
    raster: &mut Raster,
    mut decode_block: impl FnMut(&[u8; N]) -> texdec_bcn::Result<DecodedBlock>,
) -> Result<()> {
    let blocks_x = raster.width().div_ceil(4).max(1) as usize;

    for (index, chunk) in data.chunks_exact(N).enumerate() {
        let mut block = [0u8; N];
        block.copy_from_slice(chunk);
        let tile = decode_block(&block).map_err(|source| Error::Block { index, source })?;
        raster.write_block((index % blocks_x) as u32, (index / blocks_x) as u32, &tile);
    }
    Ok(())
}
