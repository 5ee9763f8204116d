// 探索サービス（分割・並列実行・集約）

use anyhow::{Context, Result};
use crossbeam_channel::{RecvTimeoutError, Sender};
use num_bigint::BigUint;
use num_traits::One;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::event::SolveEvent;
use crate::application::parallel::{continue_solve_with_options, partial_solve};
use crate::application::progress::ProgressManager;
use crate::application::solver::{Event, Solver, SolverOptions, SolverStats};
use crate::constants::{PRESET_LABEL, PROGRESS_INTERVAL_MS};
use crate::domain::board::BoardView;
use crate::domain::catalog::Puzzle;
use crate::domain::geometry::{Point, Shape};
use crate::domain::search::{RunConfig, SearchSummary, Solution, SolveMode, SolverConfig};
use crate::infrastructure::WorkerPool;
use crate::vlog;

/// この試行数ごとに進捗カウンタへ反映する
const TRIAL_BATCH: u64 = 4096;

/// 分割探索を管理するサービス（1回の探索に1つ）
pub struct SolveService {
    config: RunConfig,
    progress: Arc<ProgressManager>,
}

impl SolveService {
    pub fn new(config: RunConfig) -> Result<Self> {
        config.validate().context("実行設定が不正です")?;
        Ok(Self {
            config,
            progress: Arc::new(ProgressManager::new()),
        })
    }

    /// 別スレッドから中断・進捗参照するためのハンドル
    pub fn progress(&self) -> Arc<ProgressManager> {
        Arc::clone(&self.progress)
    }

    /// 検索を中断
    pub fn abort(&self) {
        self.progress.abort();
    }

    /// 探索を実行（メインユースケース）
    ///
    /// 先頭ピースの配置ごとに探索単位を作り、ワーカープールで並列に解く。
    /// `events` には解・進捗・完了を順に流す。
    pub fn run(
        &self,
        puzzle: &Puzzle,
        picks: &[Point],
        events: &Sender<SolveEvent>,
    ) -> Result<SearchSummary> {
        let bound = search_space_bound(puzzle.board().len(), puzzle.shapes());
        let _ = events.send(SolveEvent::Log(format!(
            "{}: 盤面 {} セル, ピース {} 個, 探索空間の上限 {} 通り",
            puzzle.name(),
            puzzle.board().len(),
            puzzle.shapes().len(),
            bound
        )));

        if puzzle.shapes().is_empty() {
            return self.run_without_pieces(puzzle, picks, events);
        }

        // 1. 分割
        let mut partial = partial_solve(puzzle.board().to_vec(), puzzle.shapes(), picks, |view| {
            vlog!("分割開始: 空きセル {}", view.free_count());
        })
        .context("探索の分割に失敗しました")?;
        let mut units = Vec::new();
        while partial.step(|config| units.push(config)) {
            if self.progress.is_aborted() {
                break;
            }
        }
        self.progress.add_trials(partial.trials());
        self.progress.add_units(units.len() as u64);
        let _ = events.send(SolveEvent::Split { units: units.len() });
        vlog!("探索単位 {} 個に分割しました", units.len());

        let unit_count = units.len() as u64;
        if units.is_empty() {
            return Ok(self.finish(0, 0, events));
        }

        // 2. ワーカーへ配る
        let workers = self.config.workers.get().min(units.len());
        let prune = self.config.prune;
        let progress = Arc::clone(&self.progress);
        let mut pool = WorkerPool::new(
            workers,
            move |(unit, config): (usize, SolverConfig), tx: &Sender<Solution>| {
                run_unit(unit, &config, prune, &progress, tx);
            },
        )?;
        for task in units.into_iter().enumerate() {
            pool.send_task(task)?;
        }
        pool.close();

        // 3. 集約
        let interval = Duration::from_millis(PROGRESS_INTERVAL_MS);
        let mut found = 0u64;
        let mut last_send = Instant::now();
        loop {
            match pool.results().recv_timeout(interval) {
                Ok(solution) => {
                    let take = match self.config.mode {
                        SolveMode::All => true,
                        SolveMode::First => found == 0,
                    };
                    if take {
                        found += 1;
                        let _ = events.send(SolveEvent::Solution(solution));
                    }
                    if self.config.mode == SolveMode::First {
                        // 残りの探索単位は取り消す
                        self.progress.abort();
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            if last_send.elapsed() >= interval {
                let _ = events.send(SolveEvent::Progress(self.progress.stats()));
                last_send = Instant::now();
            }
        }
        pool.join()?;

        Ok(self.finish(unit_count, found, events))
    }

    /// ピースが無い場合は盤面そのものが唯一の解
    fn run_without_pieces(
        &self,
        puzzle: &Puzzle,
        picks: &[Point],
        events: &Sender<SolveEvent>,
    ) -> Result<SearchSummary> {
        let mut found = 0;
        solve_serial(puzzle.board(), &[], picks, self.config.prune, |view| {
            found += 1;
            let _ = events.send(SolveEvent::Solution(Solution {
                unit: 0,
                cells: view.labeled_cells(),
            }));
        })?;
        Ok(self.finish(0, found, events))
    }

    /// サマリーを作成して完了を通知
    fn finish(&self, units: u64, solutions: u64, events: &Sender<SolveEvent>) -> SearchSummary {
        let stats = self.progress.stats();
        if stats.units_failed > 0 {
            let _ = events.send(SolveEvent::Log(format!(
                "探索単位 {} 個を再開できず、探索は不完全です",
                stats.units_failed
            )));
        }
        let summary = SearchSummary {
            units,
            failed_units: stats.units_failed,
            solutions,
            trials: stats.trials,
            cancelled: self.progress.is_aborted(),
            elapsed_seconds: stats.elapsed_seconds,
            trials_per_second: stats.trials_per_second,
        };
        let _ = events.send(SolveEvent::Finished(summary.clone()));
        summary
    }
}

/// 探索単位1つを最後まで（または取り消されるまで）解く
fn run_unit(
    unit: usize,
    config: &SolverConfig,
    prune: bool,
    progress: &ProgressManager,
    tx: &Sender<Solution>,
) {
    let options = SolverOptions {
        prune,
        cancel: Some(progress.cancel_token()),
        ..SolverOptions::default()
    };
    let mut solver = match continue_solve_with_options(config, options, |_| {}) {
        Ok(solver) => solver,
        Err(e) => {
            crate::logging::write_log(&format!("探索単位 {} を再開できません: {:#}", unit, e));
            progress.unit_failed();
            return;
        }
    };

    let mut reported = 0;
    let mut closed = false;
    while !closed
        && solver.step(|event, view| {
            if let Event::Solved = event {
                progress.add_solutions(1);
                let solution = Solution {
                    unit,
                    cells: view.labeled_cells(),
                };
                closed = tx.send(solution).is_err();
            }
        })
    {
        let trials = solver.stats().trials;
        if trials - reported >= TRIAL_BATCH {
            progress.add_trials(trials - reported);
            reported = trials;
        }
    }

    let stats = solver.stats();
    progress.add_trials(stats.trials - reported);
    progress.unit_done();
    vlog!(
        "探索単位 {} 完了: 試行 {}, 解 {}, 枝刈り {}",
        unit,
        stats.trials,
        stats.solutions,
        stats.pruned
    );
}

/// 全解の数を数える（探索単位を rayon で並列に解く）
pub fn count_solutions(
    board: &[Point],
    shapes: &[Shape],
    preset: &[Point],
    prune: bool,
) -> Result<u64> {
    if shapes.is_empty() {
        let mut found = 0;
        solve_serial(board, shapes, preset, prune, |_| found += 1)?;
        return Ok(found);
    }

    let units = partial_solve(board.to_vec(), shapes, preset, |_| {})?.collect();
    let counts = units
        .par_iter()
        .map(|config| -> Result<u64> {
            let options = SolverOptions {
                prune,
                ..SolverOptions::default()
            };
            let mut solver = continue_solve_with_options(config, options, |_| {})?;
            Ok(solver.solve_all(|_| {}))
        })
        .collect::<Result<Vec<u64>>>()?;
    Ok(counts.into_iter().sum())
}

/// 分割しない単一ソルバーでの探索（基準となる経路）
pub fn solve_serial<F>(
    board: &[Point],
    shapes: &[Shape],
    preset: &[Point],
    prune: bool,
    mut on_solution: F,
) -> Result<SolverStats>
where
    F: FnMut(BoardView<'_>),
{
    let options = SolverOptions {
        prune,
        ..SolverOptions::default()
    };
    let mut solver: Solver = Solver::with_options(board.to_vec(), shapes, options, |setup| {
        for &p in preset {
            setup.fill(&[p], PRESET_LABEL);
        }
        Ok(())
    })?;
    solver.solve_all(|view| on_solution(view));
    Ok(solver.stats())
}

/// 生の探索空間の上限（Π セル数 × 向きの数）
pub fn search_space_bound(board_cells: usize, shapes: &[Shape]) -> BigUint {
    shapes.iter().fold(BigUint::one(), |acc, shape| {
        acc * BigUint::from(board_cells) * BigUint::from(shape.variants().len())
    })
}
