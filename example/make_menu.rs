use clap::Parser;
use megatech_menu::{FieldSet, PatchError, apply, read_fields};
use std::fs;
use std::path::PathBuf;
use std::process;

/// Build a custom Mega-Tech menu ROM from a config file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file with the menu text
    #[arg(short, long, default_value = "config.ini")]
    config: PathBuf,

    /// Original menu ROM (epr-12368-22.ic3 from mt_tetri)
    #[arg(short, long, default_value = "epr-12368-22.ic3")]
    source: PathBuf,

    /// Output menu ROM
    #[arg(short, long, default_value = "menu.bin")]
    output: PathBuf,

    /// Print the menu text stored in the source ROM and exit
    #[arg(short, long)]
    inspect: bool,
}

fn print_fields(fields: &FieldSet) {
    println!("\nGAME NAME:\n{}", fields.game_name);
    println!("\nPAGE 1 HEADER:\n{}", fields.page1_header);
    println!("\nPAGE 1 TEXT:");
    for line in &fields.page1_lines {
        println!("{line}");
    }
    println!("\nPAGE 2 HEADER:\n{}", fields.page2_header);
    println!("\nPAGE 2 TEXT:");
    for line in &fields.page2_lines {
        println!("{line}");
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!("MEGA-TECH MENU ROM MAKER");

    let source = match fs::read(&args.source) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("Error reading ROM '{}': {}", args.source.display(), err);
            process::exit(1);
        }
    };

    if args.inspect {
        match read_fields(&source) {
            Ok(fields) => print_fields(&fields),
            Err(err) => {
                eprintln!("Error reading menu text: {}", err);
                process::exit(1);
            }
        }
        return;
    }

    println!("\nREADING CONFIG:\n{}", args.config.display());
    let fields = match FieldSet::from_ini_path(&args.config) {
        Ok(fields) => fields,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    let image = match apply(&source, &fields) {
        Ok(image) => image,
        Err(PatchError::Validation(errors)) => {
            for err in &errors {
                eprintln!("Error: {}", err);
            }
            eprintln!("No ROM written.");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    // Show what ended up in the ROM, normalized the way the menu draws it.
    match read_fields(&image) {
        Ok(written) => print_fields(&written),
        Err(err) => log::warn!("could not read back patched menu: {err}"),
    }

    if let Err(err) = fs::write(&args.output, &image) {
        eprintln!("Error writing '{}': {}", args.output.display(), err);
        process::exit(1);
    }
    println!("\nDONE. OUTPUT: {}", args.output.display());
}
