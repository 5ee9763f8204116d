use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossbeam_channel::unbounded;

use piecefill::application::{count_solutions, SolveEvent, SolveService};
use piecefill::constants::PRESET_LABEL;
use piecefill::domain::catalog::Puzzle;
use piecefill::domain::geometry::Point;
use piecefill::domain::layout::render;
use piecefill::domain::search::{RunConfig, SolveMode, WorkerCount};
use piecefill::infrastructure::{FileSolutionWriter, SolutionWriter};
use piecefill::logging;

#[derive(Parser)]
#[command(name = "piecefill", version, about = "Polyomino packing solver")]
struct Cli {
    /// 露出させるセルのラベル（カレンダーなら "Feb" "25" "Mon" など）
    picks: Vec<String>,
    #[arg(long, default_value = "calendar")]
    puzzle: String,
    /// 全解を列挙する
    #[arg(long)]
    all: bool,
    /// 解の数だけを数える
    #[arg(long)]
    count: bool,
    #[arg(long)]
    workers: Option<usize>,
    #[arg(long)]
    no_prune: bool,
    /// 解を JSON Lines で追記する
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long)]
    verbose: bool,
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init_log_file(path)?;
    }
    if cli.verbose {
        logging::enable_verbose_logging();
    }

    let puzzle = Puzzle::by_name(&cli.puzzle)?;
    let picks: Vec<Point> = puzzle.pick(&cli.picks)?.into_iter().map(|lp| lp.point).collect();
    print_puzzle(&puzzle, &picks);

    let workers = match cli.workers {
        Some(n) => WorkerCount::new(n)?,
        None => WorkerCount::available(),
    };
    let config = RunConfig {
        workers,
        mode: if cli.all || cli.count {
            SolveMode::All
        } else {
            SolveMode::First
        },
        prune: !cli.no_prune,
    };

    if cli.count {
        let total = count_solutions(puzzle.board(), puzzle.shapes(), &picks, config.prune)?;
        println!("解の数: {}", total);
        return Ok(());
    }

    let mut writer = match &cli.out {
        Some(path) => Some(FileSolutionWriter::append(path)?),
        None => None,
    };

    let service = SolveService::new(config)?;
    let started = Instant::now();
    let (tx, rx) = unbounded::<SolveEvent>();
    let search = thread::spawn(move || service.run(&puzzle, &picks, &tx));

    for event in rx {
        match event {
            SolveEvent::Log(message) => println!("{}", message),
            SolveEvent::Split { units } => println!("探索単位: {}", units),
            SolveEvent::Solution(solution) => {
                println!(
                    "--- 解（探索単位 {}, {:.3} 秒）",
                    solution.unit,
                    started.elapsed().as_secs_f64()
                );
                for row in solution.render() {
                    println!("{}", row);
                }
                if let Some(writer) = writer.as_mut() {
                    writer.write_solution(&solution)?;
                }
            }
            SolveEvent::Progress(stats) => {
                piecefill::vlog!(
                    "進捗: 単位 {}/{}, 試行 {}, 解 {}, {:.0} 試行/秒",
                    stats.units_done,
                    stats.units_total,
                    stats.trials,
                    stats.solutions,
                    stats.trials_per_second
                );
            }
            SolveEvent::Finished(summary) => {
                println!(
                    "完了: 解 {}, 試行 {}, {:.3} 秒{}",
                    summary.solutions,
                    summary.trials,
                    summary.elapsed_seconds,
                    if summary.cancelled { "（打ち切り）" } else { "" }
                );
                if summary.failed_units > 0 {
                    eprintln!("再開できなかった探索単位: {}", summary.failed_units);
                }
            }
        }
    }

    if let Some(writer) = writer.as_mut() {
        writer.flush().context("出力ファイルの書き込みに失敗しました")?;
    }
    search
        .join()
        .map_err(|_| anyhow!("探索スレッドがパニックしました"))??;
    Ok(())
}

/// 盤面と露出セルを表示
fn print_puzzle(puzzle: &Puzzle, picks: &[Point]) {
    println!(
        "パズル: {}（{} セル, ピース {} 個）",
        puzzle.name(),
        puzzle.board().len(),
        puzzle.shapes().len()
    );
    let exposed = PRESET_LABEL.chars().next().unwrap_or('X');
    for row in render(puzzle.board(), |p| if picks.contains(&p) { exposed } else { 'o' }) {
        println!("{}", row);
    }
}
