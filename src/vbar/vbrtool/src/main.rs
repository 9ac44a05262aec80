extern crate clap;
use clap::{App, Arg, ArgGroup, ArgMatches};
use env_logger;
use log::debug;
use std::path::PathBuf;

// Internal project modules
use vbar_core::bank::read_bank;
use vbar_core::groups::Selection;
use vbar_core::ops::{self, Operation};

const DESCRIPTION: &str = "A tool for viewing and manipulating Mikado VBar .vbr files";

const LONG_HELP: &str = "\
vbrtool works on .vbr register banks exported from VBar v5.3.x, Mini or full size.

MODES:
    --print    Print the selected registers for each input file (default)
    --diff     Print only the selected registers that differ between input files
    --copy     Copy the selected registers from <FILE> into every input file;
               all other registers stay unchanged

SELECTION:
    The default selection is the basic parameters of the settings page.
    Only one selection flag may be given.

EXAMPLES:
    Print expert settings from all input files:
        vbrtool --print --exp bank0.vbr bank1.vbr

    Compare receiver setup between the input files:
        vbrtool --diff --rx-setup bank0.vbr bank1.vbr

    Compare all registers between the input files:
        vbrtool --diff --raw bank0.vbr bank1.vbr

    Copy tail setup from bank0 to bank1 and bank2:
        vbrtool --copy bank0.vbr --tail-setup bank1.vbr bank2.vbr

WARNING:
    Not all registers in the vbr file format are fully understood. It is
    possible that some registers are misinterpreted.";

// Selection flag name and the register group it picks
const SELECTION_FLAGS: [(&str, Selection); 11] = [
    ("all", Selection::All),
    ("raw", Selection::Raw),
    ("main", Selection::Main),
    ("tail", Selection::Tail),
    ("gov", Selection::Governor),
    ("exp", Selection::Expert),
    ("main-setup", Selection::MainSetup),
    ("tail-setup", Selection::TailSetup),
    ("gov-setup", Selection::GovernorSetup),
    ("rx-setup", Selection::ReceiverSetup),
    ("setup", Selection::Setup),
];

/// Configures command-line interface using clap
fn get_cli_config<'a, 'b>() -> App<'a, 'b> {
    App::new("vbrtool")
        .version(env!("CARGO_PKG_VERSION"))
        .about(DESCRIPTION)
        .after_help(LONG_HELP)
        // Operation modes
        .arg(
            Arg::with_name("print")
                .short("P")
                .long("print")
                .help("Print parameters [default]"),
        )
        .arg(
            Arg::with_name("diff")
                .short("D")
                .long("diff")
                .help("Compare parameters"),
        )
        .arg(
            Arg::with_name("copy")
                .short("C")
                .long("copy")
                .value_name("FILE")
                .takes_value(true)
                .number_of_values(1)
                .help("Copy parameters from FILE"),
        )
        .group(ArgGroup::with_name("mode").args(&["print", "diff", "copy"]))
        // Register selection
        .arg(
            Arg::with_name("all")
                .short("a")
                .long("all")
                .help("All known parameters"),
        )
        .arg(
            Arg::with_name("raw")
                .short("r")
                .long("raw")
                .help("All registers from the input files"),
        )
        .arg(
            Arg::with_name("main")
                .short("m")
                .long("main")
                .help("Main rotor expert parameters"),
        )
        .arg(
            Arg::with_name("tail")
                .short("t")
                .long("tail")
                .help("Tail rotor expert parameters"),
        )
        .arg(
            Arg::with_name("gov")
                .short("g")
                .long("gov")
                .help("Governor expert parameters"),
        )
        .arg(
            Arg::with_name("exp")
                .short("x")
                .long("exp")
                .help("All expert parameters"),
        )
        .arg(Arg::with_name("main-setup").long("main-setup").help("Main rotor / swash setup"))
        .arg(Arg::with_name("tail-setup").long("tail-setup").help("Tail rotor setup"))
        .arg(Arg::with_name("gov-setup").long("gov-setup").help("Governor setup"))
        .arg(Arg::with_name("rx-setup").long("rx-setup").help("Receiver setup"))
        .arg(
            Arg::with_name("setup")
                .short("s")
                .long("setup")
                .help("All setup parameters"),
        )
        .group(ArgGroup::with_name("selection").args(&[
            "all",
            "raw",
            "main",
            "tail",
            "gov",
            "exp",
            "main-setup",
            "tail-setup",
            "gov-setup",
            "rx-setup",
            "setup",
        ]))
        .arg(
            Arg::with_name("files")
                .value_name("FILE")
                .multiple(true)
                .help("Input .vbr files"),
        )
}

/// Operation picked by the mode flags
fn operation(matches: &ArgMatches) -> Operation {
    if let Some(source) = matches.value_of("copy") {
        Operation::Copy(PathBuf::from(source))
    } else if matches.is_present("diff") {
        Operation::Diff
    } else {
        Operation::Print
    }
}

/// Register group picked by the selection flags
fn selection(matches: &ArgMatches) -> Selection {
    SELECTION_FLAGS
        .iter()
        .find(|(flag, _)| matches.is_present(flag))
        .map(|(_, selection)| *selection)
        .unwrap_or_default()
}

/// Flags without input files only show the usage text
fn wants_help(matches: &ArgMatches) -> bool {
    !matches.is_present("files")
}

fn try_main(matches: &ArgMatches) -> anyhow::Result<()> {
    let files: Vec<&str> = matches.values_of("files").map(|v| v.collect()).unwrap_or_default();

    // Every input is parsed before anything is printed or written
    let mut banks = Vec::with_capacity(files.len());
    let mut seen = Vec::with_capacity(files.len());
    for name in &files {
        let (bank, registers) = read_bank(name)?;
        banks.push(bank);
        seen.push(registers);
    }
    let raw = ops::raw_selection(&seen);

    let operation = operation(matches);
    let source = match &operation {
        Operation::Copy(path) => Some(read_bank(path)?.0),
        _ => None,
    };

    let selection = selection(matches);
    let regs = selection.registers(&raw);
    debug!("{:?} on {:?}: {} registers", operation, selection, regs.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match source {
        Some(source) => {
            ops::copy_registers(&source, &mut banks, &regs)?;
            ops::write_banks(&banks)?;
        }
        None if operation == Operation::Diff => ops::diff_registers(&mut out, &banks, &regs)?,
        None => ops::print_registers(&mut out, &banks, &regs)?,
    }
    Ok(())
}

/// Main entry point for vbrtool
fn main() {
    env_logger::init();

    // Parse command-line arguments; exits on usage errors, --help and --version
    let mut app = get_cli_config();
    let cli_matches = app.clone().get_matches();

    if wants_help(&cli_matches) {
        if let Err(e) = app.print_long_help() {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
        println!();
        return;
    }

    if let Err(e) = try_main(&cli_matches) {
        eprintln!("ERROR: {:#}", e);
        std::process::exit(1);
    }
}
