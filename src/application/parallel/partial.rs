// 深さ1での分割（スナップショットの生成）

use anyhow::{anyhow, Context, Result};

use crate::application::solver::{Event, Solver};
use crate::constants::PRESET_LABEL;
use crate::domain::board::BoardView;
use crate::domain::geometry::{Point, Shape};
use crate::domain::search::{Placement, SolverConfig};

/// 先頭ピースだけを探索し、配置1つごとにスナップショットを出すステッパー
pub struct PartialSolver {
    solver: Solver,
    board_cells: Vec<Point>,
    preset: Vec<Point>,
    rest: Vec<Shape>,
    produced: usize,
}

/// `preset` のセルを露出用ラベルで埋めた盤面から、先頭ピースの配置ごとに分割する。
/// `on_setup` は準備完了後の盤面を1度だけ受け取る。
pub fn partial_solve<P>(
    board_cells: Vec<Point>,
    shapes: &[Shape],
    preset: &[Point],
    on_setup: P,
) -> Result<PartialSolver>
where
    P: FnOnce(BoardView<'_>),
{
    let (first, rest) = shapes
        .split_first()
        .ok_or_else(|| anyhow!("分割するピースがありません"))?;

    let mut applied = Vec::with_capacity(preset.len());
    let solver = Solver::new(board_cells.clone(), std::slice::from_ref(first), |setup| {
        for &p in preset {
            if setup.fill(&[p], PRESET_LABEL) {
                applied.push(p);
            } else {
                crate::vlog!("露出セル {} は盤面外か重複のため無視します", p);
            }
        }
        on_setup(setup.view());
        Ok(())
    })
    .context("分割用ソルバーの構築に失敗しました")?;

    Ok(PartialSolver {
        solver,
        board_cells,
        preset: applied,
        rest: rest.to_vec(),
        produced: 0,
    })
}

impl PartialSolver {
    /// 1単位進める。先頭ピースの配置に成功したら `sink` にスナップショットを渡す。
    /// 先頭ピースの候補が尽きたら false。
    pub fn step<S>(&mut self, mut sink: S) -> bool
    where
        S: FnMut(SolverConfig),
    {
        let Self {
            solver,
            board_cells,
            preset,
            rest,
            produced,
        } = self;

        solver.step(|event, view| {
            if let Event::Solved = event {
                let mut placed = Vec::with_capacity(2);
                if !preset.is_empty() {
                    placed.push(Placement::new(PRESET_LABEL, preset.clone()));
                }
                placed.push(Placement::new("0", view.cells_labeled("0")));

                *produced += 1;
                sink(SolverConfig {
                    board_cells: board_cells.clone(),
                    placed,
                    shapes: rest.clone(),
                    first_shape: 1,
                });
            }
        })
    }

    /// 尽きるまで進めて全スナップショットを集める
    pub fn collect(mut self) -> Vec<SolverConfig> {
        let mut out = Vec::new();
        while self.step(|config| out.push(config)) {}
        out
    }

    /// これまでに出したスナップショット数
    pub fn produced(&self) -> usize {
        self.produced
    }

    /// 実際に適用された露出セル
    pub fn preset(&self) -> &[Point] {
        &self.preset
    }

    /// 先頭ピースの試行数
    pub fn trials(&self) -> u64 {
        self.solver.stats().trials
    }
}
