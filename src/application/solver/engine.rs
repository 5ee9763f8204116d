// 再開可能なバックトラック探索（明示的スタック）

use anyhow::{Context, Result};

use super::cancel::CancelToken;
use super::event::{Event, SolverStats};
use super::frame::Frame;
use super::pruning::{is_dead_end, remainders, Remainder};
use crate::domain::board::{Board, BoardView, CellState, Label};
use crate::domain::geometry::{Point, Shape, Variant};

/// ソルバーの構築オプション
#[derive(Clone, Debug)]
pub struct SolverOptions {
    /// 連結領域による枝刈り
    pub prune: bool,
    /// 先頭ピースのカタログ上の番号（ラベル・イベント番号の起点）
    pub first_shape: usize,
    pub cancel: Option<CancelToken>,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            prune: true,
            first_shape: 0,
            cancel: None,
        }
    }
}

/// 探索前に盤面を準備するハンドル
pub struct Setup<'a> {
    board: &'a mut Board,
}

impl Setup<'_> {
    /// 恒久的に埋める。置けなければ false（盤面は変わらない）。
    pub fn fill(&mut self, points: &[Point], label: &str) -> bool {
        match self.board.fill(points, &Label::from(label)) {
            Some(guard) => {
                guard.commit();
                true
            }
            None => false,
        }
    }

    pub fn at(&self, p: Point) -> CellState<'_> {
        self.board.at(p)
    }

    pub fn view(&self) -> BoardView<'_> {
        self.board.view()
    }
}

/// 1ステップずつ進めるソルバー
///
/// フレームのスタックで再帰を置き換えているので、任意のステップ境界で
/// 中断・再開できる。盤面は1つのソルバーだけが所有する。
pub struct Solver {
    board: Board,
    variants: Vec<Vec<Variant>>,
    labels: Vec<Label>,
    rest: Vec<Remainder>,
    frames: Vec<Frame>,
    options: SolverOptions,
    stats: SolverStats,
    scratch: Vec<Point>,
    /// ピースが1つもない場合の「即解」を未報告
    trivial: bool,
}

impl Solver {
    pub fn new<F>(board_cells: Vec<Point>, shapes: &[Shape], setup: F) -> Result<Self>
    where
        F: FnOnce(&mut Setup<'_>) -> Result<()>,
    {
        Self::with_options(board_cells, shapes, SolverOptions::default(), setup)
    }

    pub fn with_options<F>(
        board_cells: Vec<Point>,
        shapes: &[Shape],
        options: SolverOptions,
        setup: F,
    ) -> Result<Self>
    where
        F: FnOnce(&mut Setup<'_>) -> Result<()>,
    {
        let mut board = Board::new(board_cells)?;
        setup(&mut Setup { board: &mut board }).context("盤面の準備に失敗しました")?;

        let mut solver = Self {
            board,
            variants: shapes.iter().map(Shape::variants).collect(),
            labels: (0..shapes.len())
                .map(|i| Label::from((options.first_shape + i).to_string()))
                .collect(),
            rest: remainders(shapes),
            frames: Vec::with_capacity(shapes.len()),
            options,
            stats: SolverStats::default(),
            scratch: Vec::new(),
            trivial: shapes.is_empty(),
        };

        if !solver.trivial {
            let root = solver.open_frame(0);
            solver.push(root);
        }
        Ok(solver)
    }

    /// 新しいフレーム。アンカーはこの時点の空きセル。
    fn open_frame(&self, shape: usize) -> Frame {
        if self.options.prune && is_dead_end(&self.board, self.rest[shape]) {
            return Frame::pruned(shape);
        }
        Frame::new(shape, self.board.remaining())
    }

    fn push(&mut self, frame: Frame) {
        if frame.pruned {
            self.stats.pruned += 1;
        }
        self.frames.push(frame);
    }

    fn is_cancelled(&self) -> bool {
        self.options
            .cancel
            .as_ref()
            .is_some_and(CancelToken::is_cancelled)
    }

    /// 1単位だけ進める。スタックが空になるか取り消されたら false。
    pub fn step<F>(&mut self, mut on_event: F) -> bool
    where
        F: FnMut(Event, BoardView<'_>),
    {
        if self.is_cancelled() {
            return false;
        }

        if self.trivial {
            self.trivial = false;
            self.stats.solutions += 1;
            on_event(Event::Solved, self.board.view());
            return false;
        }

        let Some(frame) = self.frames.last_mut() else {
            return false;
        };

        // 前回の試し置きを取り消す
        if let Some(guard) = frame.pending.take() {
            self.board.undo(guard);
        }

        let shape = frame.shape;
        let variants = &self.variants[shape];
        let Some((anchor, vi)) = frame.advance(variants.len()) else {
            // 全組合せを試し終えた（枝刈りされたフレームも1つも置けなかった扱い）
            let placements = frame.placements;
            self.frames.pop();
            if placements == 0 {
                self.stats.failures += 1;
                on_event(
                    Event::Failed {
                        shape: self.options.first_shape + shape,
                    },
                    self.board.view(),
                );
            }
            return !self.frames.is_empty();
        };

        self.stats.trials += 1;
        variants[vi].anchor_into(anchor, &mut self.scratch);
        let Some(guard) = self.board.fill(&self.scratch, &self.labels[shape]) else {
            return true;
        };

        frame.pending = Some(guard);
        frame.placements += 1;
        self.stats.placements += 1;

        if shape + 1 == self.variants.len() {
            self.stats.solutions += 1;
            on_event(Event::Solved, self.board.view());
        } else {
            on_event(
                Event::Placed {
                    shape: self.options.first_shape + shape,
                },
                self.board.view(),
            );
            let child = self.open_frame(shape + 1);
            self.push(child);
        }
        true
    }

    /// 尽きるまで進め、解ごとにコールバックする。見つけた解の数を返す。
    pub fn solve_all<F>(&mut self, mut on_solution: F) -> u64
    where
        F: FnMut(BoardView<'_>),
    {
        let mut found = 0;
        while self.step(|event, view| {
            if event.is_solved() {
                found += 1;
                on_solution(view);
            }
        }) {}
        found
    }

    /// 最初の解まで進める。解のセル表示を返す。
    pub fn solve_first(&mut self) -> Option<Vec<String>> {
        let mut rows = None;
        while rows.is_none() {
            let more = self.step(|event, view| {
                if event.is_solved() {
                    rows = Some(view.render());
                }
            });
            if !more {
                break;
            }
        }
        rows
    }

    pub fn view(&self) -> BoardView<'_> {
        self.board.view()
    }

    pub fn stats(&self) -> SolverStats {
        self.stats
    }

    /// 現在のスタックの深さ
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty() && !self.trivial
    }

    pub fn shape_count(&self) -> usize {
        self.variants.len()
    }
}
