use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strokegeom::geom2::dash::{dash_polyline, DashPattern};
use strokegeom::geom2::rand::{draw_polyline_walk, ReplayToken, VertexCount, WalkCfg};
use strokegeom::geom2::{
    append_polyline, arc_lengths, polyline_substring_cfg, total_length, LineCfg,
};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;

use io::{read_polyline, to_pairs, write_output};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Polyline substring, stitching and dashing runner")]
struct Cmd {
    /// Length tolerance for vertex coincidence
    #[arg(long, global = true, default_value_t = LineCfg::default().eps_len)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sub-polyline between two signed arc-length distances
    Substring {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        start: f64,
        #[arg(long, allow_negative_numbers = true)]
        end: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Append one polyline onto another without repeating the join point
    Append {
        #[arg(long)]
        target: PathBuf,
        #[arg(long)]
        with: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Split a polyline into dash pieces, e.g. --pattern "4,2"
    Dash {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        pattern: String,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        offset: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print vertex count, total and cumulative arc lengths
    Length {
        #[arg(long)]
        input: PathBuf,
    },
    /// Draw a reproducible random polyline
    Sample {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = LineCfg { eps_len: cmd.eps };
    match cmd.action {
        Action::Substring {
            input,
            start,
            end,
            out,
        } => substring(input, start, end, out, cfg),
        Action::Append { target, with, out } => append(target, with, out),
        Action::Dash {
            input,
            pattern,
            offset,
            out,
        } => dash(input, pattern, offset, out, cfg),
        Action::Length { input } => length(input),
        Action::Sample {
            seed,
            index,
            vertices,
            out,
        } => sample(seed, index, vertices, out),
    }
}

fn substring(
    input: PathBuf,
    start: f64,
    end: f64,
    out: Option<PathBuf>,
    cfg: LineCfg,
) -> Result<()> {
    let line = read_polyline(&input)?;
    tracing::info!(input = %input.display(), vertices = line.len(), start, end, "substring");
    let sub = polyline_substring_cfg(&line, start, end, cfg)
        .with_context(|| format!("substring of {}", input.display()))?;
    tracing::info!(vertices = sub.len(), length = total_length(&sub), "substring_done");
    write_output(&to_pairs(&sub), out.as_deref())
}

fn append(target: PathBuf, with: PathBuf, out: Option<PathBuf>) -> Result<()> {
    let mut line = read_polyline(&target)?;
    let tail = read_polyline(&with)?;
    let before = line.len() + tail.len();
    append_polyline(&mut line, &tail);
    tracing::info!(
        target_path = %target.display(),
        with_path = %with.display(),
        vertices = line.len(),
        dropped = before - line.len(),
        "append"
    );
    write_output(&to_pairs(&line), out.as_deref())
}

fn dash(
    input: PathBuf,
    pattern: String,
    offset: f64,
    out: Option<PathBuf>,
    cfg: LineCfg,
) -> Result<()> {
    let line = read_polyline(&input)?;
    let pattern = DashPattern::new(parse_pattern(&pattern)?, offset)?;
    let pieces = dash_polyline(&line, &pattern, cfg)?;
    tracing::info!(
        input = %input.display(),
        interval = pattern.interval(),
        offset = pattern.offset(),
        pieces = pieces.len(),
        "dash"
    );
    let pairs: Vec<Vec<[f64; 2]>> = pieces.iter().map(|p| to_pairs(p)).collect();
    write_output(&pairs, out.as_deref())
}

fn length(input: PathBuf) -> Result<()> {
    let line = read_polyline(&input)?;
    let total = total_length(&line);
    tracing::info!(input = %input.display(), vertices = line.len(), total, "length");
    let obj = serde_json::json!({
        "vertices": line.len(),
        "total_length": total,
        "arc_lengths": arc_lengths(&line),
    });
    write_output(&obj, None)
}

fn sample(seed: u64, index: u64, vertices: usize, out: Option<PathBuf>) -> Result<()> {
    let cfg = WalkCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..WalkCfg::default()
    };
    let line = draw_polyline_walk(cfg, ReplayToken { seed, index });
    tracing::info!(seed, index, vertices = line.len(), "sample");
    write_output(&to_pairs(&line), out.as_deref())
}

/// Dash lengths separated by `,` or `;`.
fn parse_pattern(text: &str) -> Result<Vec<f64>> {
    text.split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .with_context(|| format!("dash length {s:?} is not a number"))
        })
        .collect()
}
