// スナップショットからの再開

use anyhow::{bail, Context, Result};

use crate::application::solver::{CancelToken, Solver, SolverOptions};
use crate::domain::board::BoardView;
use crate::domain::search::SolverConfig;

/// スナップショットから盤面を復元し、残りピースのソルバーを作る。
/// `on_setup` は復元直後の盤面を1度だけ受け取る。
pub fn continue_solve<P>(config: &SolverConfig, cancel: CancelToken, on_setup: P) -> Result<Solver>
where
    P: FnOnce(BoardView<'_>),
{
    continue_solve_with_options(
        config,
        SolverOptions {
            cancel: Some(cancel),
            ..SolverOptions::default()
        },
        on_setup,
    )
}

/// オプション指定版。`first_shape` はスナップショットの値で上書きする。
pub fn continue_solve_with_options<P>(
    config: &SolverConfig,
    options: SolverOptions,
    on_setup: P,
) -> Result<Solver>
where
    P: FnOnce(BoardView<'_>),
{
    let options = SolverOptions {
        first_shape: config.first_shape,
        ..options
    };

    Solver::with_options(config.board_cells.clone(), &config.shapes, options, |setup| {
        for placement in &config.placed {
            if !setup.fill(&placement.cells, &placement.label) {
                bail!("配置 '{}' を盤面に復元できません", placement.label);
            }
        }
        on_setup(setup.view());
        Ok(())
    })
    .context("スナップショットからの再開に失敗しました")
}
