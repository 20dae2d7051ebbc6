//! Library entry point
//!
//! `MetadataExtractor` is the one way into the crate: hand it a byte source
//! and the original filename, get back an `ImageMetadata` or a `DecodeError`.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use log::{debug, error, info};

use crate::coordinate::{region_label, CoordinateSystemVerdict};
use crate::io::byte_order::ByteOrder;
use crate::io::source::ByteSource;
use crate::metadata::ImageMetadata;
use crate::tiff::directory::TagDirectory;
use crate::tiff::errors::{DecodeError, DecodeResult};
use crate::tiff::geo_keys::{parse_geo_key_directory, GeoKeyEntry};
use crate::tiff::geotags::{get_tag_name, is_geotiff_tag};
use crate::tiff::reader::{TiffReader, DEFAULT_MAX_TAG_VALUES};
use crate::tiff::types::TIFF;

/// Default total timeout for fetching a remote source
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings shared by every extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorOptions {
    /// Total timeout for `ByteSource::Url` fetches
    pub remote_timeout: Duration,
    /// Tags with more values than this are left unresolved
    pub max_tag_values: u64,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        ExtractorOptions {
            remote_timeout: DEFAULT_REMOTE_TIMEOUT,
            max_tag_values: DEFAULT_MAX_TAG_VALUES,
        }
    }
}

/// One entry of a batch extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionJob {
    pub source: ByteSource,
    /// Original filename, used for satellite identification
    pub filename: String,
}

impl ExtractionJob {
    pub fn new(source: ByteSource, filename: impl Into<String>) -> Self {
        ExtractionJob {
            source,
            filename: filename.into(),
        }
    }

    /// Job for a source, named after the source itself
    pub fn from_source(source: ByteSource) -> Self {
        let filename = source.default_filename().unwrap_or_default();
        ExtractionJob { source, filename }
    }
}

/// Diagnostic view of a single file
///
/// Carries the published metadata together with what was withheld from it.
/// Meant for people; nothing here should be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub metadata: ImageMetadata,
    /// Model-space box as read, published or not
    pub raw_bounding_box: Option<[f64; 4]>,
    pub geo_keys: Vec<GeoKeyEntry>,
    /// Names of the GeoTIFF tags present in the main image
    pub geotiff_tags: Vec<&'static str>,
    pub ifd_count: usize,
    pub is_big_tiff: bool,
    pub byte_order: ByteOrder,
}

impl Inspection {
    /// Region label for the center, only for geographic images
    pub fn region_label(&self) -> Option<String> {
        self.metadata.center().map(region_label)
    }

    /// Web map link for the center, only for geographic images
    pub fn map_link(&self) -> Option<String> {
        self.metadata.center().map(|center| center.map_link())
    }
}

/// Extracts GeoTIFF metadata from byte sources
///
/// Holds only immutable options, so one extractor can serve any number of
/// threads.
#[derive(Debug, Clone, Default)]
pub struct MetadataExtractor {
    options: ExtractorOptions,
}

impl MetadataExtractor {
    pub fn new(options: ExtractorOptions) -> Self {
        MetadataExtractor { options }
    }

    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// Extracts the metadata of one image
    ///
    /// # Arguments
    /// * `source` - Where to read the TIFF from
    /// * `filename` - Original filename, used only to identify the satellite
    ///
    /// # Returns
    /// The complete metadata record, or the error that made the file unreadable
    pub fn extract(&self, source: &ByteSource, filename: &str) -> DecodeResult<ImageMetadata> {
        let tiff = self.decode(source)?;
        let directory = TagDirectory::new(&tiff)?;
        let metadata = ImageMetadata::from_directory(&directory, filename);

        log_summary(filename, &metadata);
        Ok(metadata)
    }

    /// Extracts the metadata of one image along with decoder details
    pub fn inspect(&self, source: &ByteSource, filename: &str) -> DecodeResult<Inspection> {
        let tiff = self.decode(source)?;
        let directory = TagDirectory::new(&tiff)?;
        let metadata = ImageMetadata::from_directory(&directory, filename);

        Ok(Inspection {
            raw_bounding_box: directory.bounding_box(),
            geo_keys: parse_geo_key_directory(directory.ifd()),
            geotiff_tags: directory
                .ifd()
                .entries
                .iter()
                .filter(|entry| is_geotiff_tag(entry.tag))
                .map(|entry| get_tag_name(entry.tag))
                .collect(),
            ifd_count: tiff.ifd_count(),
            is_big_tiff: tiff.is_big_tiff,
            byte_order: tiff.byte_order,
            metadata,
        })
    }

    /// Extracts many images in parallel
    ///
    /// Each job opens its own reader. Results are returned in job order;
    /// `on_done` is called from the worker threads as each job finishes.
    pub fn extract_batch<F>(&self, jobs: &[ExtractionJob], on_done: F) -> Vec<DecodeResult<ImageMetadata>>
    where
        F: Fn(&ExtractionJob, &DecodeResult<ImageMetadata>) + Sync,
    {
        if jobs.is_empty() {
            return Vec::new();
        }

        let workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(jobs.len());
        info!("Extracting {} files with {} workers", jobs.len(), workers);

        let next_job = AtomicUsize::new(0);
        let (next_job, on_done) = (&next_job, &on_done);
        let finished: Vec<(usize, DecodeResult<ImageMetadata>)> = thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    scope.spawn(move || {
                        let mut done = Vec::new();
                        loop {
                            let index = next_job.fetch_add(1, Ordering::Relaxed);
                            let Some(job) = jobs.get(index) else { break };

                            let result = self.extract(&job.source, &job.filename);
                            on_done(job, &result);
                            done.push((index, result));
                        }
                        done
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| match handle.join() {
                    Ok(done) => done,
                    Err(_) => {
                        error!("Batch worker panicked");
                        Vec::new()
                    }
                })
                .collect()
        });

        let mut results: Vec<Option<DecodeResult<ImageMetadata>>> = jobs.iter().map(|_| None).collect();
        for (index, result) in finished {
            results[index] = Some(result);
        }

        results
            .into_iter()
            .map(|result| {
                result.unwrap_or_else(|| Err(DecodeError::Io(io::Error::other("extraction did not complete"))))
            })
            .collect()
    }

    /// Decodes the tag directories; the reader is dropped before returning
    fn decode(&self, source: &ByteSource) -> DecodeResult<TIFF> {
        debug!("Decoding {}", source.describe());
        let mut reader = source.open(self.options.remote_timeout)?;

        TiffReader::new()
            .with_max_tag_values(self.options.max_tag_values)
            .read(reader.as_mut())
    }
}

fn log_summary(filename: &str, metadata: &ImageMetadata) {
    match (metadata.coordinate_verdict, metadata.center()) {
        (CoordinateSystemVerdict::Geographic, Some(center)) => {
            info!("{}: {}x{} geographic, center {} ({})",
                  filename, metadata.width, metadata.height, center, region_label(center));
        },
        (verdict, _) => {
            info!("{}: {}x{} {}, no footprint", filename, metadata.width, metadata.height, verdict);
        },
    }
}
