use std::path::PathBuf;

use clap::{Parser, Subcommand};

use bootanim::{AnimationPlan, Job, JobEvent};

#[derive(Parser, Debug)]
#[command(name = "bootanim", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Package a plan manifest into a boot-animation archive.
    Pack(PackArgs),
}

#[derive(Parser, Debug)]
struct PackArgs {
    /// Input plan manifest JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override the manifest's output path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Suppress the progress line.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Pack(args) => cmd_pack(args),
    }
}

fn cmd_pack(args: PackArgs) -> anyhow::Result<()> {
    let mut plan = AnimationPlan::from_path(&args.in_path)?;
    if let Some(out) = args.out {
        plan = plan.with_output(out);
    }

    let handle = Job::spawn(plan);
    let mut failure = None;
    for event in handle.events() {
        match event {
            JobEvent::Progress(pct) => {
                if !args.quiet {
                    eprint!("\rpacking... {pct:3}%");
                }
            }
            JobEvent::Finished(msg) => {
                if !args.quiet {
                    eprintln!();
                }
                eprintln!("{msg}");
            }
            JobEvent::Failed(msg) => {
                if !args.quiet {
                    eprintln!();
                }
                failure = Some(msg);
            }
        }
    }
    handle.join()?;

    if let Some(msg) = failure {
        anyhow::bail!(msg);
    }
    Ok(())
}
