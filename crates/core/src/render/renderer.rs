//! Batch rendering of ticket QR images.

use image::{ImageFormat, RgbaImage};
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

use super::error::RenderError;
use super::qr::{encode, rasterize};
use super::transparency::clear_near_white;
use crate::config::RenderConfig;

/// The two columns the renderer needs; any others are ignored.
#[derive(Debug, Deserialize)]
struct RenderRow {
    #[serde(rename = "Human_Readable_ID")]
    human_readable_id: String,
    #[serde(rename = "QR_Link_URL")]
    qr_link_url: String,
}

/// One image to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    /// Ticket ID, also the output file stem.
    pub ticket_id: String,
    /// Text encoded into the symbol.
    pub payload: String,
}

/// Outcome of a batch render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub rendered: usize,
    pub output_dir: PathBuf,
}

/// Whether `ticket_id` names a plain file stem, so the image cannot land
/// outside the output directory.
fn is_plain_file_stem(ticket_id: &str) -> bool {
    if ticket_id.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(ticket_id).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(stem)), None) if stem == ticket_id
    )
}

/// Where the image for `ticket_id` is written.
pub fn image_path(output_dir: &Path, ticket_id: &str) -> PathBuf {
    output_dir.join(format!("{ticket_id}.png"))
}

/// Reads every row of the batch CSV into render jobs.
///
/// The whole file is parsed before returning, so a bad row fails the run
/// before anything is written.
pub fn load_jobs(input: &Path) -> Result<Vec<RenderJob>, RenderError> {
    if !input.is_file() {
        return Err(RenderError::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let read_failed = |source| RenderError::ReadFailed {
        path: input.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_path(input).map_err(read_failed)?;

    let mut jobs = Vec::new();
    for (i, row) in reader.deserialize::<RenderRow>().enumerate() {
        let row = row.map_err(read_failed)?;
        if row.human_readable_id.is_empty() {
            return Err(RenderError::malformed_row(i + 1, "empty Human_Readable_ID"));
        }
        if !is_plain_file_stem(&row.human_readable_id) {
            return Err(RenderError::malformed_row(
                i + 1,
                format!(
                    "Human_Readable_ID {:?} is not a plain file name",
                    row.human_readable_id
                ),
            ));
        }
        jobs.push(RenderJob {
            ticket_id: row.human_readable_id,
            payload: row.qr_link_url,
        });
    }

    Ok(jobs)
}

/// Renders ticket links as transparent-background QR images.
pub struct QrRenderer {
    config: RenderConfig,
}

impl QrRenderer {
    /// Creates a renderer with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Creates a renderer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(RenderConfig::default())
    }

    /// Encodes, draws and clears the background for a single job.
    pub fn render(&self, job: &RenderJob) -> Result<RgbaImage, RenderError> {
        let code = encode(&job.payload).map_err(|source| RenderError::Encode {
            ticket_id: job.ticket_id.clone(),
            source,
        })?;
        let mut img = rasterize(&code, self.config.box_size, self.config.border)?;
        let cleared = clear_near_white(&mut img, self.config.transparency_threshold);
        tracing::debug!(
            "Rendered {} ({}x{} modules, {} pixels cleared)",
            job.ticket_id,
            code.width(),
            code.width(),
            cleared
        );
        Ok(img)
    }

    /// Renders `job` and writes it to `output_dir`, replacing any existing
    /// image for the same ticket.
    pub fn render_to(&self, job: &RenderJob, output_dir: &Path) -> Result<PathBuf, RenderError> {
        let img = self.render(job)?;
        let path = image_path(output_dir, &job.ticket_id);
        img.save_with_format(&path, ImageFormat::Png)
            .map_err(|source| RenderError::SaveFailed {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }

    /// Renders every row of `input` into `output_dir`.
    ///
    /// The output directory is created if needed but never cleared, so
    /// images from earlier batches stay in place. Any failure aborts the
    /// run; images already written are kept.
    pub fn render_batch(&self, input: &Path, output_dir: &Path) -> Result<RenderSummary, RenderError> {
        let jobs = load_jobs(input)?;
        tracing::info!("Generating QR images for {} tickets from {:?}...", jobs.len(), input);

        fs::create_dir_all(output_dir).map_err(|source| RenderError::OutputDirectoryFailed {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let interval = self.config.progress_interval;
        let mut rendered = 0;
        for job in &jobs {
            self.render_to(job, output_dir)?;
            rendered += 1;
            // A zero interval disables progress lines.
            if interval > 0 && rendered % interval == 0 {
                tracing::info!("Generated {} images...", rendered);
            }
        }

        tracing::info!(
            "Done. Generated {} images in '{}' folder.",
            rendered,
            output_dir.display()
        );
        Ok(RenderSummary {
            rendered,
            output_dir: output_dir.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{is_near_white, DARK, TRANSPARENT};
    use crate::ticket::{write_batch, Ticket, TicketStatus};
    use tempfile::TempDir;

    const BASE: &str = "https://example.com/t/";

    fn write_sample_batch(dir: &Path, ids: &[&str]) -> PathBuf {
        let path = dir.join("tickets.csv");
        let tickets: Vec<Ticket> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| Ticket::new(i as u32 + 1, id.to_string(), BASE, TicketStatus::Normal))
            .collect();
        write_batch(&path, &tickets).unwrap();
        path
    }

    fn job(id: &str) -> RenderJob {
        RenderJob {
            ticket_id: id.to_string(),
            payload: format!("{BASE}{id}"),
        }
    }

    #[test]
    fn test_render_pixels_are_dark_or_transparent() {
        let img = QrRenderer::with_defaults().render(&job("146AB186")).unwrap();
        let mut dark = 0;
        for pixel in img.pixels() {
            if *pixel == DARK {
                dark += 1;
            } else {
                assert_eq!(*pixel, TRANSPARENT);
            }
        }
        assert!(dark > 0);
    }

    #[test]
    fn test_render_near_white_has_zero_alpha() {
        let img = QrRenderer::with_defaults().render(&job("00C0FFEE")).unwrap();
        for pixel in img.pixels() {
            if is_near_white(pixel, 240) {
                assert_eq!(pixel.0[3], 0);
            } else {
                assert_eq!(pixel.0[3], 255);
            }
        }
    }

    #[test]
    fn test_render_respects_box_and_border() {
        let renderer = QrRenderer::new(RenderConfig {
            box_size: 4,
            border: 1,
            ..Default::default()
        });
        let img = renderer.render(&job("146AB186")).unwrap();
        let modules = encode(&format!("{BASE}146AB186")).unwrap().width() as u32;
        assert_eq!(img.width(), (modules + 2) * 4);
    }

    #[test]
    fn test_load_jobs_missing_input() {
        let dir = TempDir::new().unwrap();
        let err = load_jobs(&dir.path().join("absent.csv")).unwrap_err();
        assert!(err.is_missing_input());
        assert!(err.to_string().contains("tantalize generate"));
    }

    #[test]
    fn test_load_jobs_ignores_extra_columns_and_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tickets.csv");
        fs::write(
            &path,
            "QR_Link_URL,Notes,Human_Readable_ID\nhttps://e.x/AAAA0000,hi,AAAA0000\n",
        )
        .unwrap();
        let jobs = load_jobs(&path).unwrap();
        assert_eq!(
            jobs,
            vec![RenderJob {
                ticket_id: "AAAA0000".to_string(),
                payload: "https://e.x/AAAA0000".to_string(),
            }]
        );
    }

    #[test]
    fn test_load_jobs_missing_column_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tickets.csv");
        fs::write(&path, "Serial_Number,Human_Readable_ID\n0001,AAAA0000\n").unwrap();
        assert!(matches!(
            load_jobs(&path).unwrap_err(),
            RenderError::ReadFailed { .. }
        ));
    }

    #[test]
    fn test_load_jobs_empty_id_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tickets.csv");
        fs::write(
            &path,
            "Human_Readable_ID,QR_Link_URL\nAAAA0000,u/AAAA0000\n,u/\n",
        )
        .unwrap();
        assert!(matches!(
            load_jobs(&path).unwrap_err(),
            RenderError::MalformedRow { row: 2, .. }
        ));
    }

    #[test]
    fn test_load_jobs_rejects_path_like_ids() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tickets.csv");
        for id in ["/abs", "../x", "a/b", "a\\b", "..", "."] {
            fs::write(
                &path,
                format!("Human_Readable_ID,QR_Link_URL\nAAAA0000,u/AAAA0000\n{id},u/{id}\n"),
            )
            .unwrap();
            assert!(
                matches!(load_jobs(&path), Err(RenderError::MalformedRow { row: 2, .. })),
                "accepted {id:?}"
            );
        }
    }

    #[test]
    fn test_render_batch_path_like_id_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("tickets.csv");
        let escaped = dir.path().join("escaped");
        fs::write(
            &input,
            format!(
                "Human_Readable_ID,QR_Link_URL\n{},u/x\n../escaped,u/y\n",
                escaped.display()
            ),
        )
        .unwrap();
        let output = dir.path().join("qr");

        assert!(QrRenderer::with_defaults().render_batch(&input, &output).is_err());
        assert!(!output.exists());
        assert!(!dir.path().join("escaped.png").exists());
    }

    #[test]
    fn test_render_batch_zero_progress_interval() {
        let dir = TempDir::new().unwrap();
        let input = write_sample_batch(dir.path(), &["AAAA0001"]);
        let output = dir.path().join("qr");
        let renderer = QrRenderer::new(RenderConfig {
            progress_interval: 0,
            ..Default::default()
        });

        let summary = renderer.render_batch(&input, &output).unwrap();
        assert_eq!(summary.rendered, 1);
        assert!(image_path(&output, "AAAA0001").exists());
    }

    #[test]
    fn test_render_oversized_image_is_an_error() {
        let renderer = QrRenderer::new(RenderConfig {
            border: u32::MAX / 2,
            ..Default::default()
        });
        assert!(matches!(
            renderer.render(&job("146AB186")),
            Err(RenderError::ImageTooLarge { .. })
        ));
    }

    #[test]
    fn test_render_batch_writes_one_image_per_row() {
        let dir = TempDir::new().unwrap();
        let input = write_sample_batch(dir.path(), &["AAAA0001", "AAAA0002", "AAAA0003"]);
        let output = dir.path().join("qr");

        let summary = QrRenderer::with_defaults().render_batch(&input, &output).unwrap();

        assert_eq!(summary.rendered, 3);
        assert_eq!(summary.output_dir, output);
        for id in ["AAAA0001", "AAAA0002", "AAAA0003"] {
            let img = image::open(image_path(&output, id)).unwrap().to_rgba8();
            assert_eq!(img.get_pixel(0, 0).0[3], 0);
        }
        assert_eq!(fs::read_dir(&output).unwrap().count(), 3);
    }

    #[test]
    fn test_render_batch_keeps_stale_images() {
        let dir = TempDir::new().unwrap();
        let input = write_sample_batch(dir.path(), &["AAAA0001"]);
        let output = dir.path().join("qr");
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("OLD00000.png"), b"stale").unwrap();

        QrRenderer::with_defaults().render_batch(&input, &output).unwrap();

        assert!(output.join("OLD00000.png").exists());
        assert!(output.join("AAAA0001.png").exists());
    }

    #[test]
    fn test_render_batch_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let input = write_sample_batch(dir.path(), &["AAAA0001", "BEEF0002"]);
        let output = dir.path().join("qr");
        let renderer = QrRenderer::with_defaults();

        renderer.render_batch(&input, &output).unwrap();
        let first = fs::read(image_path(&output, "BEEF0002")).unwrap();
        renderer.render_batch(&input, &output).unwrap();
        let second = fs::read(image_path(&output, "BEEF0002")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_render_batch_missing_input_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("qr");
        let err = QrRenderer::with_defaults()
            .render_batch(&dir.path().join("absent.csv"), &output)
            .unwrap_err();
        assert!(err.is_missing_input());
        assert!(!output.exists());
    }

    #[test]
    fn test_render_batch_bad_row_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("tickets.csv");
        fs::write(
            &input,
            "Human_Readable_ID,QR_Link_URL\nAAAA0001,u/AAAA0001\nBROKEN\n",
        )
        .unwrap();
        let output = dir.path().join("qr");

        assert!(QrRenderer::with_defaults().render_batch(&input, &output).is_err());
        assert!(!output.exists());
    }
}
