//! Texdec CLI - Command-line tool for inspecting and decoding DDS textures.
//!
//! This is the main entry point for the texdec command-line application.

use std::fs::{self, File};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use memmap2::Mmap;
use rayon::prelude::*;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use texdec::prelude::*;

/// Texdec - block-compressed texture decoding tool
#[derive(Parser)]
#[command(name = "texdec")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show header, format and mip chain of DDS files
    Info {
        /// DDS files to inspect
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Decode DDS files to PNG (or raw RGBA8 with --raw)
    Decode {
        /// DDS files to decode
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output directory (defaults to each input's directory)
        #[arg(short, long, env = "TEXDEC_OUTPUT")]
        output: Option<PathBuf>,

        /// Cubemap face to decode
        #[arg(long, default_value_t = 0)]
        slice: u32,

        /// Mip level to decode, as WIDTHxHEIGHT (defaults to the base level)
        #[arg(long, value_parser = parse_size)]
        size: Option<(u32, u32)>,

        /// Force every output alpha to 255
        #[arg(long)]
        ignore_alpha: bool,

        /// Write the alpha plane as an opaque gray image
        #[arg(long)]
        alpha_to_gray: bool,

        /// Read input as a non-seekable stream
        #[arg(long)]
        stream: bool,

        /// Write headerless RGBA8 (.rgba) instead of PNG
        #[arg(long)]
        raw: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Info { files } => {
            for file in &files {
                cmd_info(file)?;
            }
        }
        Commands::Decode {
            files,
            output,
            slice,
            size,
            ignore_alpha,
            alpha_to_gray,
            stream,
            raw,
        } => {
            let effect = AlphaToGray;
            let mut request = DecodeRequest::new()
                .with_depth_slice(slice)
                .with_ignore_alpha(ignore_alpha);
            if let Some((width, height)) = size {
                request = request.with_dimensions(width, height);
            }
            if alpha_to_gray {
                request = request.with_post_effect(&effect);
            }
            let options = DecodeOptions {
                output: output.as_deref(),
                stream,
                raw,
            };
            cmd_decode(&files, &request, &options)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_size(value: &str) -> std::result::Result<(u32, u32), String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let width = w.trim().parse().map_err(|e| format!("invalid width '{w}': {e}"))?;
    let height = h.trim().parse().map_err(|e| format!("invalid height '{h}': {e}"))?;
    Ok((width, height))
}

fn map_file(path: &Path) -> Result<Mmap> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    // SAFETY: the mapping is read-only and dropped before the command returns.
    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("Failed to map {}", path.display()))?;
    Ok(mmap)
}

fn cmd_info(path: &Path) -> Result<()> {
    let data = map_file(path)?;
    let file = DdsFile::read_from(&mut &data[..])
        .with_context(|| format!("Failed to parse DDS header of {}", path.display()))?;

    println!("{}", path.display());
    println!("  Size:       {}x{}", file.width(), file.height());
    match file.dx10_header() {
        Some(dx10) => println!("  Header:     DX10 (DXGI format {})", dx10.dxgi_format()),
        None => println!("  Header:     legacy (FourCC {})", file.header().pixel_format.four_cc),
    }
    match file.format() {
        Some(format) if format.is_supported() => println!("  Format:     {}", format.block),
        Some(format) => println!("  Format:     {} (not decodable)", format.block),
        None => println!("  Format:     unknown (pass-through)"),
    }
    println!("  Faces:      {}", file.face_count());
    println!("  Mip levels: {}", file.mip_count());

    let chain = file.mip_chain();
    for level in &chain {
        println!(
            "    {:>2}: {:>5}x{:<5} {:>10} bytes",
            level.index, level.width, level.height, level.size
        );
    }

    let payload = data.len().saturating_sub(file.header_len());
    let expected: usize = chain.iter().map(|l| l.size).sum::<usize>() * file.face_count() as usize;
    if !chain.is_empty() && payload < expected {
        warn!(
            path = %path.display(),
            payload,
            expected,
            "pixel data is shorter than the mip chain"
        );
    }

    Ok(())
}

/// Output settings shared by every file of a decode run.
struct DecodeOptions<'a> {
    output: Option<&'a Path>,
    stream: bool,
    raw: bool,
}

fn cmd_decode(files: &[PathBuf], request: &DecodeRequest<'_>, options: &DecodeOptions<'_>) -> Result<()> {
    if let Some(dir) = options.output {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    println!("Decoding {} files...", files.len());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let start = Instant::now();
    let decoded = AtomicUsize::new(0);
    let skipped = AtomicUsize::new(0);
    let errors = AtomicUsize::new(0);

    files.par_iter().for_each(|path| {
        match decode_file(path, request, options) {
            Ok(true) => {
                decoded.fetch_add(1, Ordering::Relaxed);
            }
            Ok(false) => {
                skipped.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                pb.suspend(|| eprintln!("Error decoding {}: {:#}", path.display(), e));
                errors.fetch_add(1, Ordering::Relaxed);
            }
        }
        pb.inc(1);
    });

    pb.finish_with_message("Done");
    println!(
        "Decoded {} files in {:?} ({} skipped, {} errors)",
        decoded.load(Ordering::Relaxed),
        start.elapsed(),
        skipped.load(Ordering::Relaxed),
        errors.load(Ordering::Relaxed)
    );

    if errors.load(Ordering::Relaxed) > 0 {
        bail!("{} files failed to decode", errors.load(Ordering::Relaxed));
    }
    Ok(())
}

/// Decode one file. Returns `Ok(false)` when the file holds nothing decodable.
fn decode_file(path: &Path, request: &DecodeRequest<'_>, options: &DecodeOptions<'_>) -> Result<bool> {
    let data = map_file(path)?;
    let result = if options.stream {
        decode_stream(&data[..], request)
    } else {
        decode(Cursor::new(&data[..]), request)
    };

    let raster = match result.with_context(|| format!("Failed to read {}", path.display()))? {
        Some(Decoded::Raster(raster)) => raster,
        Some(Decoded::Opaque(bytes)) => {
            warn!(path = %path.display(), bytes = bytes.len(), "unknown pixel format, not written");
            return Ok(false);
        }
        None => {
            warn!(path = %path.display(), "no decodable surface");
            return Ok(false);
        }
    };

    let extension = if options.raw { "rgba" } else { "png" };
    let out_path = output_path(path, options.output, raster.width(), raster.height(), extension);
    debug!(
        input = %path.display(),
        output = %out_path.display(),
        width = raster.width(),
        height = raster.height(),
        "writing raster"
    );
    if options.raw {
        fs::write(&out_path, raster.as_bytes())
            .with_context(|| format!("Failed to write {}", out_path.display()))?;
    } else {
        image::save_buffer(
            &out_path,
            raster.as_bytes(),
            raster.width(),
            raster.height(),
            image::ColorType::Rgba8,
        )
        .with_context(|| format!("Failed to write {}", out_path.display()))?;
    }
    Ok(true)
}

/// `<dir>/<stem>.<width>x<height>.<extension>`, using the input's directory
/// when no output is given.
fn output_path(
    input: &Path,
    output: Option<&Path>,
    width: u32,
    height: u32,
    extension: &str,
) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "texture".to_string());
    let dir = output
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(format!("{stem}.{width}x{height}.{extension}"))
}
