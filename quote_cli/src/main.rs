//! # CutQuote CLI
//!
//! Terminal front end for the gasket quoting engine: collects one material
//! and one part from stdin prompts, validates them (the engine itself does
//! not), and prints the quote.

use std::io::{self, BufRead, Write};

use quote_core::billing::BillingMethod;
use quote_core::calculations::nesting;
use quote_core::calculations::quote::calculate;
use quote_core::materials::{Material, MaterialKind};
use quote_core::parts::Part;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_yes_no(prompt: &str, default: bool) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

fn prompt_material() -> Material {
    let is_roll = prompt_yes_no("Roll material? [y/N]: ", false);

    let material = if is_roll {
        let width = prompt_f64("Web width (in) [24.0]: ", 24.0);
        let cost = prompt_f64("Cost per foot [3.00]: ", 3.0);
        Material::roll("CLI roll stock", width, cost)
    } else {
        let width = prompt_f64("Sheet width (in) [36.0]: ", 36.0);
        let length = prompt_f64("Sheet length (in) [36.0]: ", 36.0);
        let cost = prompt_f64("Cost per sheet [1000.00]: ", 1000.0);
        let stocked = prompt_yes_no("Stocked inventory? [Y/n]: ", true);
        Material::sheet("CLI sheet stock", width, length, cost, stocked)
    };

    let edge = prompt_f64("Edge spacing (in) [0.5]: ", 0.5);
    let part = prompt_f64("Part spacing (in) [0.25]: ", 0.25);
    material.with_spacing(edge, part)
}

fn prompt_part() -> Part {
    let is_circle = prompt_yes_no("Circle part? [y/N]: ", false);
    let quantity = prompt_u32("Quantity [4]: ", 4);

    if is_circle {
        let diameter = prompt_f64("Diameter (in) [6.0]: ", 6.0);
        let mut part = Part::circle(quantity, diameter);
        let inner = prompt_f64("Inner diameter (in, 0 for none) [0]: ", 0.0);
        if inner > 0.0 {
            part = part.with_inner_diameter(inner);
        }
        let holes = prompt_u32("Bolt holes [0]: ", 0);
        if holes > 0 {
            part = part.with_bolt_holes(holes);
        }
        part
    } else {
        let width = prompt_f64("Width (in) [10.0]: ", 10.0);
        let height = prompt_f64("Height (in) [20.0]: ", 20.0);
        Part::rectangle(quantity, width, height)
    }
}

fn main() {
    println!("CutQuote CLI - Gasket Quote Calculator");
    println!("======================================");
    println!();

    println!("-- Material --");
    let material = prompt_material();
    println!();
    println!("-- Part --");
    let part = prompt_part();
    println!();

    // Required-field validation is this layer's job, not the engine's.
    if let Err(error) = material.validate().and_then(|_| part.validate()) {
        eprintln!("Error: {}", error);
        if let Ok(json) = serde_json::to_string_pretty(&error) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }

    let parts = vec![part];
    let quote = calculate(&parts, &material);
    let method = BillingMethod::for_material(&material);

    println!("═══════════════════════════════════════");
    println!("  QUOTE");
    println!("═══════════════════════════════════════");
    println!();
    println!("Material: {}", material);
    println!("Billing:  {}", method);
    if material.kind == MaterialKind::Sheet {
        let detail = nesting::sheet_yield_detailed(&parts[0], &material);
        println!(
            "Nesting:  {} per sheet ({})",
            detail.parts_per_sheet,
            detail.layout.display_name()
        );
    } else if let Some(run_in) = nesting::roll_run_length(&parts[0], &material) {
        println!("Nesting:  {:.1} in of web consumed", run_in);
    } else {
        println!("Nesting:  part does not fit across the web");
    }
    println!();
    println!("Total cost: ${:.2}", quote.total_cost);
    println!("Total time: {:.2} hours", quote.total_time);
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for integration use):");
    if let Ok(json) = serde_json::to_string_pretty(&quote) {
        println!("{}", json);
    }
}
