use std::env;
use std::process;

use scale_generator::{generate, Appearance, Palette, Rgb};

fn main() {
    let mut positional: Vec<String> = Vec::new();
    let mut as_json = false;
    let mut as_css = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => as_json = true,
            "--css" => as_css = true,
            _ => positional.push(arg),
        }
    }

    if positional.is_empty() || positional.len() > 4 {
        usage();
        process::exit(1);
    }

    let appearance: Appearance = match positional[0].parse() {
        Ok(appearance) => appearance,
        Err(err) => {
            eprintln!("Error: {}", err);
            usage();
            process::exit(1);
        }
    };

    let accent = positional.get(1).map(String::as_str).unwrap_or("#3D63DD");
    let gray = positional.get(2).map(String::as_str).unwrap_or("#8B8D98");
    let background = positional.get(3).map(String::as_str).unwrap_or(match appearance {
        Appearance::Light => "#FFFFFF",
        Appearance::Dark => "#111111",
    });

    let palette = match generate(appearance, accent, gray, background) {
        Ok(palette) => palette,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    if as_json {
        let map = serde_json::Value::Object(palette.to_map());
        println!("{}", serde_json::to_string_pretty(&map).expect("palette serializes"));
        return;
    }

    if as_css {
        print!("{}", palette.to_css("accent", ":root"));
        return;
    }

    println!("🎨 Palette for accent {} on {} ({:?})", accent, background, appearance);
    println!();
    print_palette(&palette);
}

fn usage() {
    eprintln!("Usage: generate <light|dark> [accent] [gray] [background] [--json] [--css]");
    eprintln!("Examples:");
    eprintln!("  generate light \"#3D63DD\"");
    eprintln!("  generate dark \"#0090FF\" \"#8B8D98\" \"#111111\"");
    eprintln!("  generate light \"#E54D2E\" --json");
}

fn print_palette(palette: &Palette) {
    println!("  Accent Scale:");
    for (i, color) in palette.accent_scale.iter().enumerate() {
        println!("    Step {:<2}: {} {}", i + 1, swatch(*color), color.to_hex());
    }

    println!("  Accent Scale Alpha:");
    for (i, color) in palette.accent_scale_alpha.iter().enumerate() {
        println!("    Step {:<2}: {} {}", i + 1, swatch(color.rgb()), color.to_hex());
    }

    println!("  Gray Scale:");
    for (i, color) in palette.gray_scale.iter().enumerate() {
        println!("    Step {:<2}: {} {}", i + 1, swatch(*color), color.to_hex());
    }

    println!("  Gray Scale Alpha:");
    for (i, color) in palette.gray_scale_alpha.iter().enumerate() {
        println!("    Step {:<2}: {} {}", i + 1, swatch(color.rgb()), color.to_hex());
    }

    println!("  Special Colors:");
    println!(
        "    Contrast:   {} {}",
        swatch(palette.accent_contrast),
        palette.accent_contrast.to_hex()
    );
    println!(
        "    Surface:    {} {}",
        swatch(palette.accent_surface.rgb()),
        palette.accent_surface.to_hex()
    );
    println!(
        "    Background: {} {}",
        swatch(palette.background),
        palette.background.to_hex()
    );
}

fn swatch(color: Rgb) -> String {
    // 24-bit ANSI color escape with block characters.
    format!("\x1b[38;2;{};{};{}m██\x1b[0m", color.r, color.g, color.b)
}
