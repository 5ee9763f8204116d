// Board型 - 任意形状の盤面と占有状態

use anyhow::{anyhow, Result};

use super::cell::{CellState, FillGuard, Label};
use super::view::BoardView;
use crate::constants::U64Map;
use crate::domain::geometry::Point;

/// 盤面
///
/// セル集合は構築時に固定。各セルは空きかラベル付きのどちらか一方。
/// 空きセルの列挙順は常に構築順（探索順の再現性のため）。
#[derive(Clone, Debug)]
pub struct Board {
    cells: Vec<Point>,
    index: U64Map<usize>,
    labels: Vec<Option<Label>>,
    free: usize,
}

impl Board {
    /// 全セル空きの盤面を作成（重複セルはエラー）
    pub fn new(cells: Vec<Point>) -> Result<Self> {
        let mut index = U64Map::default();
        index.reserve(cells.len());
        for (i, p) in cells.iter().enumerate() {
            if index.insert(p.key(), i).is_some() {
                return Err(anyhow!("盤面のセルが重複しています: {}", p));
            }
        }

        Ok(Self {
            labels: vec![None; cells.len()],
            free: cells.len(),
            cells,
            index,
        })
    }

    /// 構築時のセル列
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 空きセル数
    pub fn free_count(&self) -> usize {
        self.free
    }

    pub fn contains(&self, p: Point) -> bool {
        self.index.contains_key(&p.key())
    }

    #[inline]
    fn free_index(&self, p: Point) -> Option<usize> {
        let &i = self.index.get(&p.key())?;
        self.labels[i].is_none().then_some(i)
    }

    /// 全点が空きのときだけまとめて埋める。1点でも埋められなければ盤面は変更しない。
    pub fn fill(&mut self, points: &[Point], label: &Label) -> Option<FillGuard> {
        let mut cells = Vec::with_capacity(points.len());
        for &p in points {
            let i = self.free_index(p)?;
            // 同じ点が2回含まれていても二重に数えない
            if cells.contains(&i) {
                return None;
            }
            cells.push(i);
        }

        for &i in &cells {
            self.labels[i] = Some(Label::clone(label));
        }
        self.free -= cells.len();
        Some(FillGuard { cells })
    }

    /// `fill` を取り消す
    pub fn undo(&mut self, guard: FillGuard) {
        for &i in &guard.cells {
            debug_assert!(self.labels[i].is_some(), "取り消し対象が空きセル");
            self.labels[i] = None;
        }
        self.free += guard.cells.len();
    }

    /// セル状態を取得
    pub fn at(&self, p: Point) -> CellState<'_> {
        match self.index.get(&p.key()) {
            None => CellState::OffBoard,
            Some(&i) => match &self.labels[i] {
                Some(label) => CellState::Filled(label),
                None => CellState::Unfilled,
            },
        }
    }

    /// 空きセル（構築順）
    pub fn remaining(&self) -> Vec<Point> {
        self.cells
            .iter()
            .zip(&self.labels)
            .filter(|(_, l)| l.is_none())
            .map(|(&p, _)| p)
            .collect()
    }

    /// `start` から4近傍でつながる空きセル数。`limit` に達した時点で打ち切る。
    pub fn reachable(&self, start: Point, limit: usize) -> usize {
        let Some(s) = self.free_index(start) else {
            return 0;
        };
        if limit == 0 {
            return 0;
        }

        let mut seen = vec![false; self.cells.len()];
        let mut stack = vec![s];
        seen[s] = true;
        let mut count = 1;

        while let Some(i) = stack.pop() {
            if count >= limit {
                break;
            }
            for n in self.cells[i].neighbors() {
                if let Some(j) = self.free_index(n) {
                    if !seen[j] {
                        seen[j] = true;
                        count += 1;
                        if count >= limit {
                            return limit;
                        }
                        stack.push(j);
                    }
                }
            }
        }

        count.min(limit)
    }

    /// 読み取り専用ビュー
    pub fn view(&self) -> BoardView<'_> {
        BoardView::new(self)
    }
}
