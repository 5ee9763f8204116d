// ポリオミノ敷き詰めソルバー - ライブラリモジュール

pub mod constants;
pub mod domain;         // ドメイン層
pub mod application;    // アプリケーション層
pub mod infrastructure; // インフラ層
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};
pub use num_bigint::BigUint;

// 主要な型を再エクスポート
pub use application::parallel::{continue_solve, partial_solve};
pub use application::solver::{CancelToken, Event, Solver, SolverOptions};
pub use application::{SolveEvent, SolveService};
pub use domain::board::{Board, BoardView, CellState};
pub use domain::catalog::Puzzle;
pub use domain::geometry::{Point, Rotations, Shape};
pub use domain::search::{RunConfig, SearchSummary, Solution, SolverConfig};
