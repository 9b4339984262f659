use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::{Report, eyre::eyre};

#[derive(Parser, Debug)]
#[command(
    name = "vtraster",
    about = "Legacy raster font tooling and DEC Sixel decoding",
    long_about = "Resizes bit-pattern fonts into historical Windows .FNT-layout \
                  resources, synthesizes block-glyph fonts, and decodes DEC Sixel \
                  graphics streams to PNG"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a DEC Sixel byte stream into a PNG image
    Sixel(SixelArgs),
    /// Resize a bit-pattern font, or synthesize block glyphs, into a font resource image
    Font(FontArgs),
}

#[derive(Args, Debug)]
pub struct SixelArgs {
    /// Input file containing a raw Sixel byte stream (use "-" for stdin)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "./sixel.png", value_name = "PATH")]
    pub output: PathBuf,

    /// Pixel aspect ratio parameter (Pad) from the raster-attributes table
    #[arg(long, default_value = "1", value_parser = parse_int)]
    pub pixel_aspect_ratio: i32,

    /// Background color option (Pbgmode): 0/2 = palette index 0 is background, 1 = literal
    #[arg(long, default_value = "2", value_parser = parse_int)]
    pub background_color_options: i32,

    /// Horizontal grid size in pixels (sixel pixel width)
    #[arg(long, default_value = "1", value_parser = parse_int)]
    pub horizontal_grid_size: i32,
}

#[derive(Args, Debug)]
pub struct FontArgs {
    /// Input bit-pattern font file: little-endian u16 scanlines, source_size.height
    /// of them per glyph. Omit to synthesize the block/shade/quadrant glyph set instead.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Source glyph cell size in pixels, WIDTHxHEIGHT (ignored when synthesizing)
    #[arg(long, default_value = "8x12", value_parser = parse_cell_size)]
    pub source_size: (i32, i32),

    /// Target glyph cell size in pixels, WIDTHxHEIGHT
    #[arg(short, long, default_value = "8x12", value_parser = parse_cell_size)]
    pub target_size: (i32, i32),

    /// Columns of centering correction applied during resize
    #[arg(long, default_value_t = 0)]
    pub centering_hint: i32,

    /// First character code the resource's glyph table starts at
    #[arg(long, default_value_t = 0x20)]
    pub first_char: u8,

    /// Number of glyphs in the source pattern, clamped to 256 (ignored when
    /// synthesizing: the block-glyph set always covers 32 glyphs)
    #[arg(long, default_value_t = 96)]
    pub char_count: usize,

    /// Output path for the binary font resource image
    #[arg(short, long, default_value = "./font.fnt", value_name = "PATH")]
    pub output: PathBuf,
}

impl FontArgs {
    /// Validates argument combinations `clap`'s declarative parsing can't express.
    ///
    /// # Errors
    ///
    /// Returns an error if `char_count` is zero while reading an input file.
    pub fn validate(&self) -> Result<(), Report> {
        if self.input.is_some() && self.char_count == 0 {
            return Err(eyre!("char_count must be at least 1"));
        }
        Ok(())
    }
}

fn parse_int(s: &str) -> Result<i32, String> {
    s.parse::<i32>().map_err(|e| format!("invalid integer '{s}': {e}"))
}

fn parse_cell_size(s: &str) -> Result<(i32, i32), String> {
    let (w, h) = s.split_once('x').ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width = w.parse::<i32>().map_err(|e| format!("invalid width '{w}': {e}"))?;
    let height = h.parse::<i32>().map_err(|e| format!("invalid height '{h}': {e}"))?;
    if width <= 0 || height <= 0 {
        return Err(format!("cell size must be positive, got {width}x{height}"));
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cell_size() {
        assert_eq!(parse_cell_size("8x12"), Ok((8, 12)));
    }

    #[test]
    fn rejects_malformed_cell_size() {
        assert!(parse_cell_size("8").is_err());
        assert!(parse_cell_size("0x12").is_err());
        assert!(parse_cell_size("8x-1").is_err());
    }

    #[test]
    fn font_args_requires_char_count_when_reading_a_file() {
        let args = FontArgs {
            input: Some(PathBuf::from("font.bin")),
            source_size: (8, 12),
            target_size: (8, 12),
            centering_hint: 0,
            first_char: 0x20,
            char_count: 0,
            output: PathBuf::from("out.fnt"),
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn font_args_allows_zero_char_count_when_synthesizing() {
        let args = FontArgs {
            input: None,
            source_size: (8, 12),
            target_size: (8, 12),
            centering_hint: 0,
            first_char: 0x20,
            char_count: 0,
            output: PathBuf::from("out.fnt"),
        };
        assert!(args.validate().is_ok());
    }
}
