use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use pojogen_core::config::{self, CONFIG_FILE_NAME, PojogenConfig};
use pojogen_core::ir::SpecDocument;
use pojogen_core::{CodeGenerator, parse, transform, try_generate};
use pojogen_java::{JavaModelGenerator, write_units};

#[derive(Parser)]
#[command(
    name = "pojogen",
    about = "Generate Java model classes from OpenAPI/Swagger schemas",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the schemas of a spec with their request/response roles
    List {
        /// Path to the spec file (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: ListFormat,
    },

    /// Generate Java classes for the selected schemas
    Generate {
        /// Path to the spec file (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Base schema names to generate (repeatable); defaults to the config, then all
        #[arg(short, long = "schema")]
        schemas: Vec<String>,

        /// Java package of the generated classes
        #[arg(long = "package")]
        package_name: Option<String>,
    },

    /// Initialize a new pojogen configuration
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum ListFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { input, format } => cmd_list(&input, format),

        Commands::Generate {
            input,
            output,
            schemas,
            package_name,
        } => cmd_generate(input, output, schemas, package_name),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "pojogen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<PojogenConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn read_spec(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_spec(path: &Path) -> Result<SpecDocument> {
    let content = read_spec(path)?;
    let value = parse::parse_document(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(transform::load(&value)?)
}

fn cmd_list(input: &Path, format: ListFormat) -> Result<()> {
    let doc = load_spec(input)?;

    match format {
        ListFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&doc.summaries)?;
            print!("{}", yaml);
        }
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&doc.summaries)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn cmd_generate(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    schemas: Vec<String>,
    package_name: Option<String>,
) -> Result<()> {
    let cfg = match try_load_config()? {
        Some(cfg) => {
            log::info!("loaded {CONFIG_FILE_NAME}");
            cfg
        }
        None => PojogenConfig::default(),
    };
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    let mut options = cfg.options;
    if let Some(package_name) = package_name {
        options.package_name = package_name;
    }

    let content = read_spec(&input)?;
    let selection = if !schemas.is_empty() {
        schemas
    } else if !cfg.schemas.is_empty() {
        cfg.schemas
    } else {
        let value = parse::parse_document(&content)
            .with_context(|| format!("failed to parse {}", input.display()))?;
        transform::load(&value)?
            .schema_names()
            .map(str::to_string)
            .collect()
    };

    if selection.is_empty() {
        eprintln!("No schemas found in {}.", input.display());
        return Ok(());
    }

    let generator = JavaModelGenerator::new(options)?;
    eprintln!(
        "Generating {} schema(s) from {} → {}",
        selection.len(),
        input.display(),
        output.display()
    );
    let units = try_generate(&content, &selection, &generator)?;

    let written = write_units(&output, &units)
        .with_context(|| format!("failed to write to {}", output.display()))?;
    for path in &written {
        eprintln!("  wrote {}", path.display());
    }
    eprintln!(
        "Generated {} .{} files in {}",
        written.len(),
        generator.extension(),
        output.display()
    );
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
