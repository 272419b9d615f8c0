//! Command-line interface for batch rendering of pattern documents

use crate::document::state::DocumentState;
use crate::io::configuration::{DEFAULT_NOISE_SEED, DOCUMENT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::export::{export_png, export_svg};
use crate::io::progress::ProgressManager;
use crate::render::command::CommandStream;
use crate::render::context::RenderContext;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "wavyshapes")]
#[command(
    author,
    version,
    about = "Render layered wave-modulated shape documents to SVG and PNG"
)]
/// Command-line arguments for the pattern renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input JSON document or directory of documents
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Seed of the erosion noise field
    #[arg(short, long, default_value_t = DEFAULT_NOISE_SEED)]
    pub seed: u32,

    /// Override the document's distribution parameter, clamped to [-3, 3]
    #[arg(short, long, allow_negative_numbers = true)]
    pub distribution: Option<f64>,

    /// Horizontal canvas scale factor, clamped to [0.5, 1.5]
    #[arg(short = 'x', long, default_value_t = 1.0)]
    pub scale_x: f64,

    /// Vertical canvas scale factor, clamped to [0.5, 1.5]
    #[arg(short = 'y', long, default_value_t = 1.0)]
    pub scale_y: f64,

    /// Skip the PNG preview
    #[arg(long)]
    pub no_png: bool,

    /// Skip the SVG export
    #[arg(long)]
    pub no_svg: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render documents even if outputs exist
    #[arg(short, long)]
    pub no_skip: bool,

    /// Write a default single-layer document to TARGET and exit
    #[arg(long)]
    pub init: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Render context configured from the seed and canvas scale
    pub fn render_context(&self) -> RenderContext {
        RenderContext::new(self.seed).with_canvas_scale(self.scale_x, self.scale_y)
    }
}

/// Orchestrates batch rendering of documents with progress tracking
pub struct FileProcessor {
    cli: Cli,
    context: RenderContext,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let context = cli.render_context();

        Self {
            cli,
            context,
            progress_manager,
        }
    }

    /// Process the target according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, document loading or artifact
    /// export fails
    pub fn process(&mut self) -> Result<()> {
        if self.cli.init {
            return self.write_initial_document();
        }

        if self.cli.no_png && self.cli.no_svg {
            log::warn!("Both outputs are disabled, nothing to render");
            return Ok(());
        }

        let files = self.collect_files()?;
        if files.is_empty() {
            log::info!("No documents to render in {}", self.cli.target.display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn write_initial_document(&self) -> Result<()> {
        let path = &self.cli.target;
        if path.exists() && self.cli.skip_existing() {
            return Err(invalid_parameter(
                "target",
                &path.display(),
                &"refusing to overwrite an existing file without --no-skip",
            ));
        }
        DocumentState::default().save(path)?;
        log::info!("Wrote default document to {}", path.display());
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_document(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a JSON document",
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                Vec::new()
            })
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target, "read directory")? {
                let path = entry.with_path(target, "read directory entry")?.path();
                if path.is_file() && is_document(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a JSON document or a directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let svg_done = self.cli.no_svg || Self::output_path(input_path, "svg").exists();
        let png_done = self.cli.no_png || Self::output_path(input_path, "png").exists();
        if svg_done && png_done {
            log::info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();

        let mut document = DocumentState::load(input_path)?;
        if let Some(distribution) = self.cli.distribution {
            document.distribution = distribution;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_document(index, input_path, document.len());
        }

        let mut stream = CommandStream::new();
        let progress = &mut self.progress_manager;
        self.context
            .render_into_with(&document, &mut stream, |layer_index, _| {
                if let Some(pm) = progress.as_mut() {
                    pm.update_layers(index, layer_index + 1);
                }
            });
        log::debug!(
            "Recorded {} drawing commands for {}",
            stream.len(),
            input_path.display()
        );

        if !self.cli.no_svg {
            let svg_path = Self::output_path(input_path, "svg");
            export_svg(&self.context.vectorize(&stream), &svg_path)?;
            log::info!("Wrote {}", svg_path.display());
        }

        if !self.cli.no_png {
            let png_path = Self::output_path(input_path, "png");
            export_png(&self.context.rasterize(&stream)?, &png_path)?;
            log::info!("Wrote {}", png_path.display());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_document(index, start_time.elapsed());
        }

        Ok(())
    }

    /// Output path next to `input_path` as `<stem>_result.<extension>`
    pub fn output_path(input_path: &Path, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_document(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(DOCUMENT_EXTENSION)
}
