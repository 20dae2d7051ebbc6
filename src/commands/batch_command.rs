//! Parallel batch extraction command

use log::{info, warn};

use crate::api::{ExtractionJob, MetadataExtractor};
use crate::commands::command_traits::Command;
use crate::io::source::ByteSource;
use crate::metadata::ImageMetadata;
use crate::tiff::errors::{DecodeError, DecodeResult};
use crate::utils::progress::ProgressTracker;

/// Command extracting metadata from many files at once
pub struct BatchCommand {
    jobs: Vec<ExtractionJob>,
    extractor: MetadataExtractor,
}

impl BatchCommand {
    pub fn new(inputs: &[String], extractor: MetadataExtractor) -> Self {
        let jobs = inputs
            .iter()
            .map(|input| ExtractionJob::from_source(ByteSource::from_argument(input)))
            .collect();

        BatchCommand { jobs, extractor }
    }
}

impl Command for BatchCommand {
    fn execute(&self) -> DecodeResult<()> {
        let progress = ProgressTracker::new(self.jobs.len() as u64, "Extracting metadata");
        let results = self.extractor.extract_batch(&self.jobs, |job, result| {
            if let Err(e) = result {
                warn!("{}: {}", job.source.describe(), e);
            }
            progress.set_message(&job.filename);
            progress.increment(1);
        });
        progress.finish();

        let mut failed = 0;
        for (job, result) in self.jobs.iter().zip(&results) {
            if result.is_err() {
                failed += 1;
            }
            println!("{}", format_summary_line(&job.source.describe(), result));
        }

        info!("Batch finished: {} of {} files extracted", results.len() - failed, results.len());
        if failed > 0 {
            return Err(DecodeError::BatchFailed { failed, total: results.len() });
        }
        Ok(())
    }
}

/// One line per file: status, name, size, footprint and satellite
pub fn format_summary_line(source: &str, result: &DecodeResult<ImageMetadata>) -> String {
    let metadata = match result {
        Ok(metadata) => metadata,
        Err(e) => return format!("FAIL  {}  {}", source, e),
    };

    let footprint = match metadata.center() {
        Some(center) => format!("center {}", center),
        None => metadata.coordinate_verdict.to_string(),
    };
    let satellite = metadata.satellite_name.as_deref().unwrap_or("-");

    format!("OK    {}  {}x{}x{}  {}  {}", source, metadata.width, metadata.height, metadata.bands, footprint, satellite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::{BoundingBox, CoordinateSystemVerdict};

    fn metadata(geometry: Option<BoundingBox>) -> ImageMetadata {
        ImageMetadata {
            geometry: geometry.map(|bbox| (bbox, bbox.center())),
            coordinate_verdict: if geometry.is_some() {
                CoordinateSystemVerdict::Geographic
            } else {
                CoordinateSystemVerdict::Projected
            },
            width: 10,
            height: 20,
            bands: 4,
            bit_depth: None,
            resolution_meters_per_pixel: None,
            captured_at: None,
            satellite_name: Some("Landsat-8".to_string()),
            sensor_type: Some("OLI/TIRS".to_string()),
            projection_label: None,
        }
    }

    #[test]
    fn test_summary_lines() {
        let ok = format_summary_line("a.tif", &Ok(metadata(Some(BoundingBox::new(2.0, 0.0, 2.0, 0.0)))));
        assert_eq!(ok, "OK    a.tif  10x20x4  center (1.000000, 1.000000)  Landsat-8");

        let projected = format_summary_line("b.tif", &Ok(metadata(None)));
        assert_eq!(projected, "OK    b.tif  10x20x4  Projected  Landsat-8");

        let failed = format_summary_line("c.tif", &Err(DecodeError::MissingDimensions));
        assert_eq!(failed, "FAIL  c.tif  Image dimensions not found");
    }

    #[test]
    fn test_jobs_named_after_inputs() {
        let command = BatchCommand::new(
            &["/data/S2A_1.tif".to_string(), "https://host/LC08_2.tif?sig=x".to_string()],
            MetadataExtractor::default(),
        );
        let names: Vec<&str> = command.jobs.iter().map(|job| job.filename.as_str()).collect();
        assert_eq!(names, ["S2A_1.tif", "LC08_2.tif"]);
    }
}
