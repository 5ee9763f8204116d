// 連結領域による枝刈り

use crate::domain::board::Board;
use crate::domain::geometry::Shape;

/// 残りピースの要約（最小サイズと総セル数）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Remainder {
    pub min_size: usize,
    pub area: usize,
    /// 残りピースがすべて4連結
    pub connected: bool,
}

/// i 番目以降のピースの要約を並べる（末尾は番兵）
pub(crate) fn remainders(shapes: &[Shape]) -> Vec<Remainder> {
    let mut out = vec![
        Remainder {
            min_size: usize::MAX,
            area: 0,
            connected: true,
        };
        shapes.len() + 1
    ];
    for i in (0..shapes.len()).rev() {
        let size = shapes[i].size();
        out[i] = Remainder {
            min_size: out[i + 1].min_size.min(size),
            area: out[i + 1].area + size,
            connected: out[i + 1].connected && shapes[i].is_connected(),
        };
    }
    out
}

/// 最小ピースより小さい連結領域に属する空きセルは二度と覆えない。
/// そのセル数が余裕（空きセル数 − 残り面積）を超えたら、この局面に解はない。
/// 非連結ピースが残っている間は判定しない。
pub(crate) fn is_dead_end(board: &Board, rest: Remainder) -> bool {
    if rest.area == 0 {
        return false;
    }
    let free = board.free_count();
    if free < rest.area {
        return true;
    }
    if !rest.connected {
        return false;
    }

    let slack = free - rest.area;
    let mut wasted = 0;
    for p in board.remaining() {
        if board.reachable(p, rest.min_size) < rest.min_size {
            wasted += 1;
            if wasted > slack {
                return true;
            }
        }
    }
    false
}
