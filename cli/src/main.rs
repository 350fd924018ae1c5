//! unframe CLI - CV frame export tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unframe::render::{self, ExtractionStats};
use unframe::scene::{SceneDocument, SceneNode};
use unframe::{
    ClassifiedBlock, ExportOptions, Exporter, JsonFormat, NodeKind, Notice, PreRenderedPng,
    SectionType, TextOptions,
};

#[derive(Parser)]
#[command(name = "unframe")]
#[command(version)]
#[command(about = "Export CV frames with an ATS-readable text layer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the selected frame as a payload (PNG + classified text blocks)
    Export {
        /// Scene JSON file
        #[arg(value_name = "SCENE")]
        scene: PathBuf,

        /// Pre-rendered PNG of the frame
        #[arg(long, value_name = "FILE", env = "UNFRAME_PNG")]
        png: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Node id to export instead of the scene's selection
        #[arg(long, value_name = "ID")]
        node: Option<String>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Fail on the first unreadable text run
        #[arg(long)]
        strict: bool,
    },

    /// Print ordered, classified text blocks as JSON
    Blocks {
        /// Scene JSON file
        #[arg(value_name = "SCENE")]
        scene: PathBuf,

        /// Node id to read instead of the scene's selection
        #[arg(long, value_name = "ID")]
        node: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the text layer as plain text
    Text {
        /// Scene JSON file
        #[arg(value_name = "SCENE")]
        scene: PathBuf,

        /// Node id to read instead of the scene's selection
        #[arg(long, value_name = "ID")]
        node: Option<String>,

        /// Prefix titles with their section label
        #[arg(long)]
        labels: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show scene information
    Info {
        /// Scene JSON file
        #[arg(value_name = "SCENE")]
        scene: PathBuf,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Export {
            scene,
            png,
            output,
            node,
            compact,
            strict,
        }) => {
            cmd_export(
                &scene,
                &png,
                output.as_deref(),
                node.as_deref(),
                compact,
                strict,
            )
            .await
        }
        Some(Commands::Blocks {
            scene,
            node,
            output,
            compact,
        }) => cmd_blocks(&scene, node.as_deref(), output.as_deref(), compact).await,
        Some(Commands::Text {
            scene,
            node,
            labels,
            output,
        }) => cmd_text(&scene, node.as_deref(), labels, output.as_deref()).await,
        Some(Commands::Info { scene }) => cmd_info(&scene).await,
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: unframe <COMMAND> <SCENE>".yellow());
            println!("       unframe --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn cmd_export(
    scene: &Path,
    png: &Path,
    output: Option<&Path>,
    node: Option<&str>,
    compact: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = SceneDocument::load_file(scene)?;
    let selection = target_nodes(&doc, node)?;
    log::debug!("Exporting {} of {} selected nodes", selection.len().min(1), selection.len());
    let raster = PreRenderedPng::from_file(png)?;
    let mut fonts = doc.font_loader();

    let mut options = ExportOptions::new();
    if strict {
        options = options.strict();
    }
    let exporter = Exporter::with_options(options);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(80));

    let mut notifier = |notice: &Notice| {
        if notice.is_error() {
            pb.println(format!("{}", notice.to_string().red()));
        } else if matches!(notice, Notice::Exporting) {
            pb.set_message(notice.to_string());
        } else {
            pb.println(format!("{}", notice.to_string().green()));
        }
    };

    let result = exporter
        .run(selection.as_slice(), &raster, &mut fonts, &mut notifier)
        .await;
    pb.finish_and_clear();
    let payload = result?;

    let json = render::to_json(&payload, json_format(compact))?;
    write_output(output, &json)
}

async fn cmd_blocks(
    scene: &Path,
    node: Option<&str>,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = SceneDocument::load_file(scene)?;
    let blocks = scene_blocks(&doc, node).await?;

    let json = render::blocks_to_json(&blocks, json_format(compact))?;
    write_output(output, &json)
}

async fn cmd_text(
    scene: &Path,
    node: Option<&str>,
    labels: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = SceneDocument::load_file(scene)?;
    let blocks = scene_blocks(&doc, node).await?;

    let options = TextOptions::new().with_section_labels(labels);
    let text = render::to_text(&blocks, &options)?;
    write_output(output, &text)
}

async fn cmd_info(scene: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = SceneDocument::load_file(scene)?;

    println!("{}", "Scene Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), scene.display());
    for (label, value) in scene_overview(&doc) {
        println!("{}: {}", label.bold(), value);
    }

    let blocks = scene_blocks(&doc, None).await?;
    let stats = ExtractionStats::from_blocks(&blocks);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Blocks".bold(), stats.block_count);
    println!("{}: {}", "Titles".bold(), stats.title_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    println!();
    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for section in SectionType::ALL {
        let count = stats.section_count(section);
        if count > 0 {
            println!("  {:<14} {}", section.label(), count);
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unframe".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("CV frame export tool");
    println!();
    println!("License: MIT");
}

/// Label/value rows describing the scene tree.
fn scene_overview(doc: &SceneDocument) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    if !doc.name.is_empty() {
        rows.push(("Name", doc.name.clone()));
    }
    rows.push(("Containers", doc.count(NodeKind::Container).to_string()));
    rows.push(("Text nodes", doc.count(NodeKind::Text).to_string()));
    rows.push((
        "Fonts",
        match &doc.fonts {
            Some(fonts) => fonts.len().to_string(),
            None => "all available".to_string(),
        },
    ));
    rows.push((
        "Selection",
        if doc.selection.is_empty() {
            "none".dimmed().to_string()
        } else {
            doc.selection.join(", ")
        },
    ));
    rows
}

/// Nodes to read: `--node`, else the scene's selection.
fn target_nodes<'d>(
    doc: &'d SceneDocument,
    node: Option<&str>,
) -> unframe::Result<Vec<&'d SceneNode>> {
    match node {
        Some(id) => doc.resolve(&[id.to_string()]),
        None => doc.selected_nodes(),
    }
}

/// Ordered blocks of the target nodes, or of the whole scene when nothing
/// is selected.
async fn scene_blocks(
    doc: &SceneDocument,
    node: Option<&str>,
) -> unframe::Result<Vec<ClassifiedBlock>> {
    let exporter = Exporter::new();
    let mut fonts = doc.font_loader();
    let targets = target_nodes(doc, node)?;

    if targets.is_empty() {
        return exporter.text_blocks(&doc.nodes, &mut fonts).await;
    }

    let mut blocks = Vec::new();
    for target in targets {
        let roots = std::slice::from_ref(target);
        blocks.extend(exporter.text_blocks(roots, &mut fonts).await?);
    }
    Ok(blocks)
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}
