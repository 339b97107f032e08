use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::lut_pipeline::{
    common::error::{ConversionError, Result},
    conversions::types::{ConversionOutcome, ConvertedFile, OutcomeKind, RenderedFile},
    cube::{ConversionConfig, CubeWriter, StandardCubeWriter},
    decode::{PayloadDecoder, StandardPayloadDecoder},
    genre::classify,
    normalize::normalize_with_coverage,
    sniff::{sniff_with_encoding, Sniffed},
};

pub const CUBE_EXTENSION: &str = "cube";

pub struct BinToCubePipeline<D: PayloadDecoder, W: CubeWriter> {
    decoder: D,
    writer: W,
    config: ConversionConfig,
}

impl BinToCubePipeline<StandardPayloadDecoder, StandardCubeWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            decoder: StandardPayloadDecoder,
            writer: StandardCubeWriter,
            config,
        }
    }
}

fn file_stem(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name)
}

/// Name of the cube written for `input_path`, or `None` when the path has no
/// UTF-8 file name.
pub fn cube_file_name(input_path: &Path) -> Option<String> {
    let file_name = input_path.file_name()?.to_str()?;
    // Stems may contain dots, so the extension is appended rather than replaced.
    Some(format!("{}.{}", file_stem(file_name), CUBE_EXTENSION))
}

impl<D: PayloadDecoder, W: CubeWriter> BinToCubePipeline<D, W> {
    pub fn with_custom(decoder: D, writer: W, config: ConversionConfig) -> Self {
        Self {
            decoder,
            writer,
            config,
        }
    }

    /// Converts one input blob and writes the resulting cube text to `output`.
    ///
    /// `file_name` feeds the byte-order filename hints, the cube title and the
    /// genre, which all use its stem.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(
        &self,
        input_data: &[u8],
        file_name: &str,
        output: &mut dyn Write,
    ) -> Result<ConversionOutcome> {
        info!("Starting .MS-LUT to cube conversion");

        let stem = file_stem(file_name);
        let genre = classify(stem);

        let sniffed = {
            let _span = tracing::info_span!("sniff_format").entered();
            sniff_with_encoding(input_data, Some(file_name), self.config.payload_encoding)?
        };

        let guess = match sniffed {
            Sniffed::AlreadyText if self.config.copy_text_luts => {
                output.write_all(input_data)?;
                info!(%genre, "Input is already a cube, copied verbatim");
                return Ok(ConversionOutcome { genre, kind: OutcomeKind::CopiedText });
            }
            Sniffed::AlreadyText => {
                return Err(ConversionError::UndeterminableFormat(
                    "input is already textual and text copying is disabled".to_string(),
                ));
            }
            Sniffed::Binary(guess) => guess,
        };

        let entries = {
            let _span = tracing::info_span!("decode_payload",
                grid_size = guess.grid_size,
                data_offset = guess.data_offset
            ).entered();
            self.decoder.decode(input_data, &guess, &self.config)
        };

        let table = {
            let _span = tracing::info_span!("normalize_table").entered();
            normalize_with_coverage(entries, guess.grid_size, self.config.min_coverage_percent)?
        };

        {
            let _span = tracing::info_span!("encode_cube").entered();
            self.writer.write_cube(&table, stem, output)?;
        }

        info!(
            grid_size = table.grid_size(),
            entries = table.len(),
            %genre,
            "Conversion complete"
        );
        Ok(ConversionOutcome {
            genre,
            kind: OutcomeKind::Converted { guess, table },
        })
    }

    /// Reads `input_path` and renders its cube into memory.
    #[instrument(skip(self, input_path))]
    pub fn render_file<P: AsRef<Path>>(&self, input_path: P) -> Result<RenderedFile> {
        let input_path = input_path.as_ref();

        let file_name = input_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                ConversionError::InputReadError(format!("{}: not a UTF-8 file name", input_path.display()))
            })?;

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut rendered = Vec::new();
        let outcome = self.convert(&input_data, file_name, &mut rendered)?;

        Ok(RenderedFile {
            source: input_path.to_path_buf(),
            output_name: format!("{}.{}", file_stem(file_name), CUBE_EXTENSION),
            contents: rendered,
            outcome,
        })
    }

    /// Converts `input_path` into `<output_dir>/<stem>.cube`.
    ///
    /// The cube is rendered in memory first, so a failed conversion never
    /// leaves a partial file behind.
    #[instrument(skip(self, input_path, output_dir))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_dir: Q,
    ) -> Result<ConvertedFile> {
        let input_path = input_path.as_ref();

        info!(
            input = %input_path.display(),
            output_dir = %output_dir.as_ref().display(),
            "Converting file"
        );

        self.render_file(input_path)?.write_to(output_dir)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
