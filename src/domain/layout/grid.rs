// 文字グリッドと座標列の相互変換

use crate::domain::geometry::Point;

/// 空白以外の文字をセルとして座標列にする（x: 列, y: 行, 行優先）
pub fn points_from_grid<S: AsRef<str>>(rows: &[S], blank: char) -> Vec<Point> {
    let mut points = Vec::new();
    for (y, line) in rows.iter().enumerate() {
        for (x, ch) in line.as_ref().chars().enumerate() {
            if ch != blank {
                points.push(Point::new(x as i32, y as i32));
            }
        }
    }
    points
}

/// 外接矩形（左上, 右下）
pub fn bounds(points: &[Point]) -> Option<(Point, Point)> {
    let first = *points.first()?;
    let (mut min, mut max) = (first, first);
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

/// 座標列を最小の文字グリッドへ描画する。セル以外は空白。
pub fn render<F>(points: &[Point], to_char: F) -> Vec<String>
where
    F: Fn(Point) -> char,
{
    let Some((min, max)) = bounds(points) else {
        return Vec::new();
    };

    let width = (max.x - min.x + 1) as usize;
    let height = (max.y - min.y + 1) as usize;
    let mut grid = vec![vec![' '; width]; height];
    for &p in points {
        grid[(p.y - min.y) as usize][(p.x - min.x) as usize] = to_char(p);
    }

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect()
}
