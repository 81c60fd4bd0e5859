use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};
use colored::Colorize;
use husk::DEFAULT_PRESET;

fn manifest_arg() -> Arg {
    Arg::new("manifest")
        .short('m')
        .long("manifest")
        .help("TOML file defining presets (defaults to the built-in presets)")
}

fn dry_run_arg() -> Arg {
    Arg::new("dry-run")
        .short('n')
        .long("dry-run")
        .help("Preview the files without writing anything")
        .action(ArgAction::SetTrue)
}

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("create")
                .about("Creates the placeholder files of a preset")
                .arg(
                    Arg::new("preset")
                        .help("name of the preset to create")
                        .default_value(DEFAULT_PRESET),
                )
                .arg(manifest_arg())
                .arg(dry_run_arg()),
        )
        .subcommand(
            Command::new("files")
                .about("Creates placeholder files given on the command line")
                .arg(
                    Arg::new("folder")
                        .help("The directory where the files will be created")
                        .required(true),
                )
                .arg(
                    Arg::new("files")
                        .help("filenames to create")
                        .required(true)
                        .num_args(1..),
                )
                .arg(dry_run_arg()),
        )
        .subcommand(
            Command::new("list")
                .about("list presets")
                .arg(manifest_arg()),
        )
        .get_matches();

    init_logger(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("create", args)) => handle_create(args),
        Some(("files", args)) => handle_files(args),
        Some(("list", args)) => handle_list(args),
        _ => unreachable!(),
    }
}

fn init_logger(is_verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if is_verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }

    builder.init();

    log::debug!("executing in verbose mode");
}

fn handle_create(args: &ArgMatches) -> miette::Result<()> {
    let preset = args
        .get_one::<String>("preset")
        .map(String::as_str)
        .unwrap_or(DEFAULT_PRESET);
    let manifest = args.get_one::<String>("manifest").map(String::as_str);

    let report = husk::api::create_preset(manifest, preset, args.get_flag("dry-run"))?;

    println!("{}", report);

    Ok(())
}

fn handle_files(args: &ArgMatches) -> miette::Result<()> {
    let folder = args
        .get_one::<String>("folder")
        .map(String::as_str)
        .unwrap_or_default();
    let files: Vec<String> = args
        .get_many::<String>("files")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let report = husk::api::create_files(folder, &files, args.get_flag("dry-run"))?;

    println!("{}", report);

    Ok(())
}

fn handle_list(args: &ArgMatches) -> miette::Result<()> {
    let manifest = args.get_one::<String>("manifest").map(String::as_str);

    let manifest = husk::api::list_presets(manifest)?;

    for (name, preset) in &manifest.0 {
        println!(
            "{} -> {} ({} files)",
            name.green(),
            preset.folder.blue(),
            preset.files.len()
        );
    }

    Ok(())
}
