use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use minigit::artifacts::log::rev_list::LogEntry;
use minigit::commands::porcelain::diff::{DiffReport, FileChange};
use minigit::{CommitDisplayFormat, Config, Repository};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `MINIGIT_LOG=debug`
const LOG_ENV: &str = "MINIGIT_LOG";

#[derive(Parser)]
#[command(
    name = "minigit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal content-addressed version-control engine",
    long_about = "A minimal version-control engine: content-addressed blobs, a single-parent \
    commit graph, branch pointers, checkout, three-way merge and positional line diff.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        global = true,
        value_name = "PATH",
        help = "Run as if minigit was started in <PATH>"
    )]
    directory: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Add file contents to the index",
        long_about = "This command stores the content of the given files and stages them for the next commit. \
        Directories are added recursively."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The files or directories to add")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Record the staged files as a new commit",
        long_about = "This command creates a new commit from HEAD's snapshot and the staged files, then moves HEAD to it."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show commit history",
        long_about = "This command lists the commits reachable from HEAD, or from the given revision, most recent first."
    )]
    Log {
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
        #[arg(index = 1, help = "The revision to start from (defaults to HEAD)")]
        revision: Option<String>,
    },
    #[command(
        name = "branch",
        about = "Create or list branches",
        long_about = "With a name, this command points a new branch at HEAD. Without one, it lists every branch."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Restore the files of a branch",
        long_about = "This command writes the files of the branch's commit to the working directory and moves HEAD to it."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch to check out")]
        branch: String,
    },
    #[command(
        name = "merge",
        about = "Merge a branch into HEAD",
        long_about = "This command performs a three-way merge of the branch into HEAD against their lowest common ancestor \
        and records the result as a new commit. Conflicting files are reported and left untouched."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        branch: String,
    },
    #[command(
        name = "diff",
        about = "Show line differences between two commits",
        long_about = "This command compares the snapshots of two revisions line by line."
    )]
    Diff {
        #[arg(index = 1, help = "The old revision")]
        old: String,
        #[arg(index = 2, help = "The new revision")]
        new: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object database",
        long_about = "This command hashes a file and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the raw content of an object. \
        It accepts a full or abbreviated object id, or a revision."
    )]
    CatFile {
        #[arg(index = 1, help = "The object id or revision to print")]
        key: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Some(directory) = &cli.directory {
        std::env::set_current_dir(directory)
            .with_context(|| format!("cannot change to {}", directory.display()))?;
    }

    let pwd = std::env::current_dir()?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Init { path } => {
            let path = path.map(|path| pwd.join(path)).unwrap_or_else(|| pwd.clone());
            let repository = Repository::init(&path, Config::from_env())?;

            writeln!(
                stdout,
                "Initialized empty minigit repository in {}",
                repository.metadata_path().display()
            )?;
        }
        Commands::Add { paths } => {
            let mut repository = Repository::open(&pwd)?;
            let paths = paths.into_iter().map(|path| pwd.join(path)).collect::<Vec<_>>();

            repository.add(&paths)?;
            repository.save()?;
        }
        Commands::Commit { message } => {
            let mut repository = Repository::open(&pwd)?;
            let is_root = repository.state().head().is_none();

            let commit_id = repository.commit(&message)?;
            repository.save()?;

            writeln!(
                stdout,
                "[{}{}] {}",
                if is_root { "(root-commit) " } else { "" },
                commit_id.to_short_oid(),
                message.trim()
            )?;
        }
        Commands::Log { oneline, revision } => {
            let repository = Repository::open(&pwd)?;
            let format = if oneline {
                CommitDisplayFormat::OneLine
            } else {
                CommitDisplayFormat::Medium
            };

            let entries = match revision {
                Some(revision) => repository.log_from(&revision)?,
                None => repository.log(),
            };

            for (i, entry) in entries.enumerate() {
                if i > 0 && format == CommitDisplayFormat::Medium {
                    writeln!(stdout)?;
                }
                show_log_entry(&mut stdout, &entry, format)?;
            }
        }
        Commands::Branch { name: Some(name) } => {
            let mut repository = Repository::open(&pwd)?;

            repository.create_branch(&name)?;
            repository.save()?;
        }
        Commands::Branch { name: None } => {
            let repository = Repository::open(&pwd)?;
            let head = repository.state().head();

            for (name, oid) in repository.branches() {
                if Some(&oid) == head {
                    writeln!(stdout, "* {} {}", name.to_string().green(), oid.to_short_oid())?;
                } else {
                    writeln!(stdout, "  {} {}", name, oid.to_short_oid())?;
                }
            }
        }
        Commands::Checkout { branch } => {
            let mut repository = Repository::open(&pwd)?;

            let outcome = repository.checkout(&branch)?;
            repository.save()?;

            for path in &outcome.kept {
                writeln!(
                    stdout,
                    "{}",
                    format!("Kept {}: local changes were not committed", path.display()).yellow()
                )?;
            }
            eprintln!("Switched to branch '{branch}'");
            writeln!(stdout, "HEAD is now at {}", outcome.head.to_short_oid())?;
        }
        Commands::Merge { branch } => {
            let mut repository = Repository::open(&pwd)?;

            let outcome = repository.merge(&branch)?;
            repository.save()?;

            writeln!(stdout, "Merge base {}", outcome.base.to_short_oid())?;
            for path in &outcome.fast_forwarded {
                writeln!(stdout, "Updated {}", path.display())?;
            }
            for path in &outcome.conflicts {
                writeln!(
                    stdout,
                    "{}",
                    format!("CONFLICT (content): Merge conflict in {}", path.display()).yellow()
                )?;
            }
            writeln!(
                stdout,
                "[{}] Merged branch {}",
                outcome.commit.to_short_oid(),
                branch
            )?;
        }
        Commands::Diff { old, new } => {
            let repository = Repository::open(&pwd)?;

            let report = repository.diff(&old, &new)?;
            show_diff(&mut stdout, &report)?;
        }
        Commands::HashObject { write, file } => {
            let repository = Repository::open(&pwd)?;

            let oid = repository.hash_object(&pwd.join(file), write)?;
            writeln!(stdout, "{oid}")?;
        }
        Commands::CatFile { key } => {
            let repository = Repository::open(&pwd)?;

            let content = repository.cat_object(&key)?;
            stdout.write_all(&content)?;
        }
    }

    Ok(())
}

fn show_log_entry(
    out: &mut impl Write,
    entry: &LogEntry,
    format: CommitDisplayFormat,
) -> std::io::Result<()> {
    match format {
        CommitDisplayFormat::OneLine => {
            writeln!(out, "{} {}", entry.id.to_short_oid().yellow(), entry.message)
        }
        CommitDisplayFormat::Medium => {
            writeln!(out, "{}", format!("commit {}", entry.id).yellow())?;
            writeln!(out, "Date:   {}", entry.readable_timestamp())?;
            writeln!(out)?;
            writeln!(out, "    {}", entry.message)
        }
    }
}

fn show_diff(out: &mut impl Write, report: &DiffReport) -> std::io::Result<()> {
    for file in &report.files {
        let path = file.path.display();
        writeln!(out, "{}", format!("diff --minigit a/{path} b/{path}").bold())?;

        match &file.change {
            FileChange::Added => {
                writeln!(out, "{}", format!("+ file added in {}", report.new.to_short_oid()).green())?
            }
            FileChange::Deleted => writeln!(
                out,
                "{}",
                format!("- file deleted in {}", report.new.to_short_oid()).red()
            )?,
            FileChange::Modified(changes) => {
                for change in changes {
                    writeln!(out, "{}", format!("@@ line {} @@", change.line).cyan())?;
                    if let Some(removed) = &change.removed {
                        writeln!(out, "{}", format!("- {removed}").red())?;
                    }
                    if let Some(added) = &change.added {
                        writeln!(out, "{}", format!("+ {added}").green())?;
                    }
                }
            }
        }
    }

    Ok(())
}
