use clap::{Parser, Subcommand};
use sitecast::loader::{FileSource, LoadOutcome, Loader};
use sitecast::page::PageShell;
use sitecast::{content, output, validate};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "sitecast")]
#[command(about = "Render pages from a site content document")]
#[command(long_about = "\
Render pages from a site content document

One JSON file drives the whole site: metadata, navigation, home page
sections, footer. Each page starts as a static shell; sitecast validates
the document section by section and projects whatever is valid onto the
shell, leaving the rest at its authored fallback.

Run 'sitecast gen-content' for a documented sample content.json.")]
#[command(version = version_string())]
struct Cli {
    /// Content document file
    #[arg(long, default_value = "content.json", global = true)]
    content: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a page from the content document
    Render {
        /// Output HTML file
        #[arg(long, default_value = "index.html")]
        out: PathBuf,

        /// Render the home page shell (enables the home sections)
        #[arg(long)]
        home: bool,

        /// Authored page title used until site metadata overrides it
        #[arg(long, default_value = "Home")]
        title: String,
    },
    /// Validate the content document without rendering
    Check,
    /// Print a documented sample content document
    GenContent,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Render { out, home, title } => {
            let mut page = if home {
                PageShell::home()
            } else {
                PageShell::basic(&title)
            };
            let mut loader = Loader::new();
            let source = FileSource::new(&cli.content);
            match loader.load(&source, &mut page, home) {
                LoadOutcome::Loaded { skipped } => {
                    output::print_render(&page);
                    for failure in &skipped {
                        eprintln!("skipped: {failure}");
                    }
                }
                LoadOutcome::Failed(err) => {
                    eprintln!("load failed, writing static shell: {err}");
                }
                LoadOutcome::Ignored => unreachable!("fresh loader"),
            }
            std::fs::write(&out, page.to_html())?;
            println!("Wrote {}", out.display());
        }
        Command::Check => {
            let body = std::fs::read_to_string(&cli.content)?;
            let raw: serde_json::Value = serde_json::from_str(&body)?;
            let doc = validate::validate(&raw);
            output::print_check(&doc);
            if !doc.failures.is_empty() {
                std::process::exit(1);
            }
            println!("Content is valid");
        }
        Command::GenContent => {
            let doc = content::ContentDocument::stock();
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }

    Ok(())
}
