//! Usage: convert MUNSELL_TO_RGB.csv RGB_TO_MUNSELL.csv [R G B]...
//!
//! List the hues of the tables with their most saturated color, then
//! give the Munsell color and complement of each RGB triple.
//! Set `RUST_LOG=munsell=debug` to see the loading diagnostics.

use std::{env, error::Error};
use rgb::RGB8;
use munsell::{Converter, MunsellColor};
use tracing_subscriber::EnvFilter;

type Err = Box<dyn Error>;

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 || (args.len() - 2) % 3 != 0 {
        return Err("usage: convert FORWARD.csv REVERSE.csv [R G B]...".into())
    }
    let conv = Converter::open(&args[0], &args[1])?;
    println!("{} hues, {} + {} entries", conv.hue_count(),
             conv.forward_len(), conv.reverse_len());
    for hue in conv.hues() {
        if let Some(c) = conv.highest_chroma(&hue) {
            println!("{hue:>7}: {c} {}", css_string(c.to_rgb(&conv)?));
        }
    }
    for rgb in args[2..].chunks(3) {
        let rgb = RGB8 { r: rgb[0].parse()?, g: rgb[1].parse()?,
                         b: rgb[2].parse()? };
        let c = MunsellColor::from_rgb(rgb, &conv)?;
        let comp = c.complement();
        // The complement hue may have no entry in the tables.
        let comp_rgb = comp.to_rgb(&conv).map_or_else(
            |_| "(not tabulated)".to_string(), css_string);
        println!("{} → {c}, complement {comp} {comp_rgb}", css_string(rgb));
    }
    Ok(())
}
