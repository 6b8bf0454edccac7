use std::borrow::Cow;
use std::fs;
use std::path::Path;

use appiconset_core::{MANIFEST_FILE, Manifest, ManifestEntry, SIZE_CATALOG, SizeSpec};
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{ColorType, ImageEncoder, RgbaImage};
use rayon::prelude::*;

use crate::error::{IconsetError, Result};

/// Resampling filter used to scale the source to each variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ResizeFilter {
    #[default]
    Lanczos3,
    CatmullRom,
    Gaussian,
    Triangle,
    Nearest,
}

impl ResizeFilter {
    fn filter_type(self) -> FilterType {
        match self {
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::Nearest => FilterType::Nearest,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    pub filter: ResizeFilter,
    pub parallel: bool,
}

/// A PNG-encoded variant waiting to be written.
#[derive(Debug)]
pub struct RenderedAsset {
    pub spec: SizeSpec,
    pub pixel_width: u32,
    pub filename: String,
    pub bytes: Vec<u8>,
}

pub fn load_source(path: &Path) -> Result<RgbaImage> {
    let bytes =
        fs::read(path).map_err(|e| IconsetError::io("failed to read source image", path, e))?;
    let img = image::load_from_memory(&bytes).map_err(|source| IconsetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("source {} is {}x{}", path.display(), img.width(), img.height());
    Ok(img.to_rgba8())
}

/// Scales `source` to the variant's pixel width and encodes it as PNG.
/// A source that already has the target size is encoded as is.
pub fn render_asset(
    source: &RgbaImage,
    spec: SizeSpec,
    filter: ResizeFilter,
) -> Result<RenderedAsset> {
    let width = spec.pixel_width();
    let filename = spec.filename();
    let pixels = if source.dimensions() == (width, width) {
        Cow::Borrowed(source)
    } else {
        Cow::Owned(imageops::resize(source, width, width, filter.filter_type()))
    };

    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(pixels.as_raw(), width, width, ColorType::Rgba8)
        .map_err(|source| IconsetError::Transform {
            filename: filename.clone(),
            source,
        })?;

    Ok(RenderedAsset {
        spec,
        pixel_width: width,
        filename,
        bytes,
    })
}

fn write_asset(out_dir: &Path, asset: &RenderedAsset) -> Result<()> {
    let path = out_dir.join(&asset.filename);
    fs::write(&path, &asset.bytes).map_err(|e| IconsetError::io("failed to write", &path, e))?;
    log::info!("wrote {} ({}x{})", path.display(), asset.pixel_width, asset.pixel_width);
    Ok(())
}

fn produce_entry(
    source: &RgbaImage,
    out_dir: &Path,
    spec: SizeSpec,
    filter: ResizeFilter,
) -> Result<ManifestEntry> {
    log::debug!("rendering {}pt @{}x", spec.point_size, spec.scale);
    let asset = render_asset(source, spec, filter)?;
    write_asset(out_dir, &asset)?;
    Ok(ManifestEntry::for_spec(&spec))
}

/// Renders and writes every catalogue variant, returning the manifest
/// entries in catalogue order. Stops at the first failure.
pub fn generate_assets(
    source: &RgbaImage,
    out_dir: &Path,
    opts: GenerateOptions,
) -> Result<Vec<ManifestEntry>> {
    if opts.parallel {
        SIZE_CATALOG
            .as_slice()
            .par_iter()
            .map(|spec| produce_entry(source, out_dir, *spec, opts.filter))
            .collect()
    } else {
        SIZE_CATALOG
            .iter()
            .map(|spec| produce_entry(source, out_dir, *spec, opts.filter))
            .collect()
    }
}

/// Assembles and writes `Contents.json`. Call only after every asset is on disk.
pub fn write_manifest(out_dir: &Path, entries: Vec<ManifestEntry>) -> Result<Manifest> {
    let manifest = Manifest::new(entries);
    let json = manifest.to_json()?;
    let path = out_dir.join(MANIFEST_FILE);
    fs::write(&path, json).map_err(|e| IconsetError::io("failed to write manifest", &path, e))?;
    log::info!("wrote {} ({} images)", path.display(), manifest.images.len());
    Ok(manifest)
}

/// Full pipeline: create the output directory, decode the source, write the
/// ten variants, then the manifest.
pub fn generate_iconset(input: &Path, out_dir: &Path, opts: GenerateOptions) -> Result<Manifest> {
    fs::create_dir_all(out_dir)
        .map_err(|e| IconsetError::io("failed to create output directory", out_dir, e))?;
    let source = load_source(input)?;
    let entries = generate_assets(&source, out_dir, opts)?;
    write_manifest(out_dir, entries)
}
