mod cli;
mod logging;

use std::{
    fs,
    io::Read,
    path::Path,
};

use clap::Parser;
use color_eyre::{Report, eyre::eyre};
use vtraster_core::SixelParser;
use vtraster_data::{BitPattern, FontResourceImage, Size, generate_block_glyphs};

use crate::{
    cli::{Cli, Command, FontArgs, SixelArgs},
    logging::{LoggingConfig, init_logging},
};

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    init_logging(LoggingConfig::from_env());

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "vtraster starting up");

    let cli = Cli::parse();
    match cli.command {
        Command::Sixel(args) => run_sixel(&args),
        Command::Font(args) => run_font(&args),
    }
}

fn run_sixel(args: &SixelArgs) -> Result<(), Report> {
    let bytes = read_input(&args.input)?;

    let mut parser = SixelParser::new();
    parser.set_pixel_aspect_ratio(args.pixel_aspect_ratio)?;
    parser.set_background_color_options(args.background_color_options)?;
    parser.set_horizontal_grid_size(args.horizontal_grid_size);

    for &b in &bytes {
        parser.add_data(b);
    }

    if !parser.finalize() {
        return Err(eyre!("decoded sixel stream is empty"));
    }

    let size = parser.size();
    tracing::info!(width = size.width, height = size.height, "sixel image decoded");

    write_png(&args.output, size.width as u32, size.height as u32, parser.pixels())?;
    println!("Sixel image decoded: {}x{} -> {}", size.width, size.height, args.output.display());
    Ok(())
}

fn run_font(args: &FontArgs) -> Result<(), Report> {
    args.validate()?;

    let (bit_pattern, first_char, char_count) = match &args.input {
        Some(path) => {
            let (width, height) = args.source_size;
            let words = read_words(path, height as usize * args.char_count)?;
            let pattern = BitPattern::new(words, Size::new(width, height), args.char_count);
            (pattern, args.first_char, args.char_count)
        },
        None => {
            let pattern = generate_block_glyphs(Size::new(args.target_size.0, args.target_size.1));
            let char_count = pattern.char_count();
            (pattern, args.first_char, char_count)
        },
    };

    let target_size = Size::new(args.target_size.0, args.target_size.1);
    let image =
        FontResourceImage::build(&bit_pattern, target_size, args.centering_hint, first_char, char_count)?;

    fs::write(&args.output, image.as_bytes())?;

    println!("Font resource written: {}", args.output.display());
    println!("  Face name: {}", image.face_name());
    println!("  Glyphs: {char_count} ({target_size:?})");
    println!("  Total size: {} bytes", image.total_size());
    print_glyph_preview(&bit_pattern, first_char, char_count.min(8));

    Ok(())
}

fn print_glyph_preview(bit_pattern: &BitPattern, first_char: u8, preview_count: usize) {
    println!("\nGlyph preview (first {preview_count}):");
    for i in 0..preview_count.min(bit_pattern.char_count()) {
        println!("  char 0x{:02X}:", first_char.wrapping_add(i as u8));
        for &word in bit_pattern.glyph_scanlines(i) {
            let bits: String = (0..bit_pattern.source_size().width)
                .map(|b| if word & (1 << (15 - b)) != 0 { '#' } else { '.' })
                .collect();
            println!("    {bits}");
        }
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>, Report> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read(path)?)
    }
}

fn read_words(path: &Path, expected_count: usize) -> Result<Vec<u16>, Report> {
    let bytes = fs::read(path)?;
    if bytes.len() != expected_count * 2 {
        return Err(eyre!(
            "font file '{}' has {} bytes, expected {} ({expected_count} u16 scanlines)",
            path.display(),
            bytes.len(),
            expected_count * 2,
        ));
    }
    Ok(bytes.chunks_exact(2).map(|c| u16::from_le_bytes([c[0], c[1]])).collect())
}

fn write_png(path: &Path, width: u32, height: u32, pixels: &[u32]) -> Result<(), Report> {
    let file = fs::File::create(path)?;
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;

    let mut rgba = Vec::with_capacity(pixels.len() * 4);
    for &p in pixels {
        rgba.push(((p >> 16) & 0xFF) as u8);
        rgba.push(((p >> 8) & 0xFF) as u8);
        rgba.push((p & 0xFF) as u8);
        rgba.push(((p >> 24) & 0xFF) as u8);
    }
    writer.write_image_data(&rgba)?;
    Ok(())
}
