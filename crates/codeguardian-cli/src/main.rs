//! `CodeGuardian AI` CLI: landing site tooling.
//!
//! Renders the landing page without a server: print it, export it as a
//! directory ready for static website hosting, or check which install link
//! it will carry.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod export;

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use codeguardian_core::{InstallUrl, LandingPage};

// ── ANSI color helpers ───────────────────────────────────────────────

/// Escape sequences, blanked out under `--no-color`.
#[derive(Clone, Copy)]
struct Palette {
    reset: &'static str,
    bold: &'static str,
    dim: &'static str,
    red: &'static str,
    green: &'static str,
    yellow: &'static str,
    cyan: &'static str,
    white: &'static str,
}

impl Palette {
    const COLOR: Self = Self {
        reset: "\x1b[0m",
        bold: "\x1b[1m",
        dim: "\x1b[2m",
        red: "\x1b[31m",
        green: "\x1b[32m",
        yellow: "\x1b[33m",
        cyan: "\x1b[36m",
        white: "\x1b[37m",
    };

    const PLAIN: Self = Self {
        reset: "",
        bold: "",
        dim: "",
        red: "",
        green: "",
        yellow: "",
        cyan: "",
        white: "",
    };

    fn new(no_color: bool) -> Self {
        if no_color { Self::PLAIN } else { Self::COLOR }
    }
}

const BANNER_SMALL: &str = "⛨ CodeGuardian AI";

// ── CLI structure ────────────────────────────────────────────────────

/// CodeGuardian AI: automated security reviews for GitHub pull requests.
#[derive(Parser)]
#[command(
    name = "codeguardian",
    version,
    about = "CodeGuardian AI CLI: render, export, and check the landing page",
    long_about = None,
    after_help = "Environment variables:\n  \
         GITHUB_APP_INSTALL_URL   Install link target (takes precedence)\n  \
         GITHUB_APP_SLUG          GitHub App slug, used when no URL is set\n\n\
         Examples:\n  \
         codeguardian check --strict\n  \
         codeguardian --app-slug codeguardian-ai export --out-dir dist\n  \
         codeguardian render > index.html",
)]
struct Cli {
    /// GitHub App install URL the call-to-action links to.
    #[arg(long, env = "GITHUB_APP_INSTALL_URL", global = true)]
    install_url: Option<String>,

    /// GitHub App slug; builds https://github.com/apps/SLUG/installations/new.
    #[arg(long, env = "GITHUB_APP_SLUG", global = true)]
    app_slug: Option<String>,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the landing page HTML.
    Render {
        /// Write to this file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Export the site (index.html, 404.html, favicon.ico) for static hosting.
    Export {
        /// Directory to write into (created if missing).
        #[arg(long, default_value = "dist")]
        out_dir: PathBuf,
    },
    /// Show the install link the page will carry.
    Check {
        /// Fail if the install link is still the placeholder.
        #[arg(long)]
        strict: bool,
    },
}

// ── Command dispatch ─────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();
    let palette = Palette::new(cli.no_color);

    match run(&cli, palette) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let Palette { red, bold, reset, .. } = palette;
            eprintln!();
            eprintln!("  {red}{bold}✗ Error:{reset} {e:#}");
            eprintln!();
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, palette: Palette) -> Result<()> {
    let install_url = InstallUrl::resolve(cli.install_url.as_deref(), cli.app_slug.as_deref())
        .context("invalid GitHub App install URL configuration")?;

    match &cli.command {
        Commands::Render { output } => cmd_render(&install_url, output.as_deref(), palette),
        Commands::Export { out_dir } => cmd_export(&install_url, out_dir, palette),
        Commands::Check { strict } => cmd_check(cli, &install_url, *strict, palette),
    }
}

// ── Commands ─────────────────────────────────────────────────────────

fn cmd_render(install_url: &InstallUrl, output: Option<&Path>, palette: Palette) -> Result<()> {
    let html = LandingPage::new(install_url.clone()).to_html();

    match output {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            success(palette, &format!("wrote {}", path.display()));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .context("failed to write to stdout")?;
        }
    }
    Ok(())
}

fn cmd_export(install_url: &InstallUrl, out_dir: &Path, palette: Palette) -> Result<()> {
    let page = LandingPage::new(install_url.clone());
    let written = export::export_site(&page, out_dir)?;

    header(palette, BANNER_SMALL, "Static export");
    for path in &written {
        kv_line(palette, "wrote", &path.display().to_string());
    }
    println!();
    if install_url.is_placeholder() {
        warning(palette, "install link is still the placeholder");
    }
    success(palette, &format!("exported {} files", written.len()));
    Ok(())
}

fn cmd_check(cli: &Cli, install_url: &InstallUrl, strict: bool, palette: Palette) -> Result<()> {
    let source = if cli.install_url.as_deref().is_some_and(|u| !u.trim().is_empty()) {
        "install URL"
    } else if cli.app_slug.as_deref().is_some_and(|s| !s.trim().is_empty()) {
        "app slug"
    } else {
        "placeholder"
    };

    header(palette, BANNER_SMALL, "Install link");
    kv_line(palette, "url", install_url.as_str());
    kv_line(palette, "source", source);
    println!();

    if install_url.is_placeholder() {
        if strict {
            bail!(
                "install link is still the placeholder; set GITHUB_APP_INSTALL_URL or GITHUB_APP_SLUG"
            );
        }
        warning(palette, "install link is still the placeholder");
    } else {
        success(palette, "install link configured");
    }
    Ok(())
}

// ── Pretty output helpers ────────────────────────────────────────────

fn header(p: Palette, icon: &str, title: &str) {
    println!("{}{}{icon} {title}{}", p.bold, p.cyan, p.reset);
    println!("{}─────────────────────────────────────────{}", p.dim, p.reset);
}

fn kv_line(p: Palette, key: &str, value: &str) {
    println!("  {}{key:<20}{} {}{value}{}", p.dim, p.reset, p.white, p.reset);
}

fn success(p: Palette, msg: &str) {
    println!("{}{}✓{} {msg}", p.green, p.bold, p.reset);
}

fn warning(p: Palette, msg: &str) {
    println!("{}{}⚠{} {}{msg}{}", p.yellow, p.bold, p.reset, p.yellow, p.reset);
}
