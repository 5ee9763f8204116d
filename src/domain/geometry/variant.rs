// 回転・鏡映による向きの列挙

use super::point::Point;
use super::shape::Shape;

/// 90度
#[inline]
pub fn rotate_quarter(p: Point) -> Point {
    Point::new(-p.y, p.x)
}

/// 180度
#[inline]
pub fn rotate_half(p: Point) -> Point {
    Point::new(-p.x, -p.y)
}

/// 270度
#[inline]
pub fn rotate_three_quarters(p: Point) -> Point {
    Point::new(p.y, -p.x)
}

/// 左右反転
#[inline]
pub fn mirror(p: Point) -> Point {
    Point::new(-p.x, p.y)
}

const ROTATIONS: [fn(Point) -> Point; 3] = [rotate_quarter, rotate_half, rotate_three_quarters];

/// ピースの1つの向き（局所座標、アンカー未適用）
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variant {
    points: Vec<Point>,
}

impl Variant {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// アンカー位置へ平行移動した座標列
    pub fn anchored(&self, anchor: Point) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().map(move |&p| p + anchor)
    }

    /// 再利用バッファへ平行移動した座標を書き込む
    #[inline]
    pub fn anchor_into(&self, anchor: Point, buf: &mut Vec<Point>) {
        buf.clear();
        buf.extend(self.anchored(anchor));
    }

    fn map(&self, f: fn(Point) -> Point) -> Variant {
        Variant {
            points: self.points.iter().map(|&p| f(p)).collect(),
        }
    }
}

/// 恒等 → 回転（rotations 個）→ chiral なら全向きの鏡像、の順で列挙する。
/// 対称なピースでも重複は除かない。
pub fn variants(shape: &Shape) -> Vec<Variant> {
    let base = Variant {
        points: shape.points().to_vec(),
    };

    let mut vs = Vec::with_capacity(8);
    vs.push(base.clone());
    for rf in ROTATIONS.iter().take(shape.rotations().count()) {
        vs.push(base.map(*rf));
    }

    if shape.chiral() {
        let mirrored: Vec<Variant> = vs.iter().map(|v| v.map(mirror)).collect();
        vs.extend(mirrored);
    }

    vs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::shape::Rotations;

    fn domino(chiral: bool, rotations: Rotations) -> Shape {
        Shape::new(vec![Point::new(0, 0), Point::new(0, 1)], chiral, rotations).unwrap()
    }

    #[test]
    fn no_rotation_no_mirror_yields_single_variant() {
        let vs = domino(false, Rotations::None).variants();
        assert_eq!(vs.len(), 1);
        assert_eq!(vs[0].points(), &[Point::new(0, 0), Point::new(0, 1)]);
    }

    #[test]
    fn full_rotation_with_mirror_yields_eight_variants() {
        // 重複する向きも除かない
        let vs = domino(true, Rotations::Quarter).variants();
        assert_eq!(vs.len(), 8);
    }

    #[test]
    fn half_rotation_yields_two_variants() {
        let vs = domino(false, Rotations::Half).variants();
        assert_eq!(vs.len(), 2);
        assert_eq!(vs[1].points(), &[Point::new(0, 0), Point::new(-1, 0)]);
    }

    #[test]
    fn rotation_order_is_quarter_half_three_quarters() {
        let vs = domino(false, Rotations::Quarter).variants();
        assert_eq!(vs[1].points()[1], Point::new(-1, 0));
        assert_eq!(vs[2].points()[1], Point::new(0, -1));
        assert_eq!(vs[3].points()[1], Point::new(1, 0));
    }

    #[test]
    fn mirrors_follow_rotations_in_order() {
        let vs = domino(true, Rotations::Quarter).variants();
        for i in 0..4 {
            let expected: Vec<Point> = vs[i].points().iter().map(|&p| mirror(p)).collect();
            assert_eq!(vs[i + 4].points(), expected.as_slice());
        }
    }

    #[test]
    fn every_variant_contains_origin() {
        let shape = Shape::new(
            vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1), Point::new(1, 2)],
            true,
            Rotations::Quarter,
        )
        .unwrap();
        for v in shape.variants() {
            assert!(v.points().contains(&Point::ORIGIN));
        }
    }

    #[test]
    fn anchor_into_translates_points() {
        let vs = domino(false, Rotations::None).variants();
        let mut buf = Vec::new();
        vs[0].anchor_into(Point::new(3, 4), &mut buf);
        assert_eq!(buf, vec![Point::new(3, 4), Point::new(3, 5)]);
    }

    #[test]
    fn four_quarter_turns_return_to_start() {
        let p = Point::new(2, -5);
        let q = rotate_quarter(rotate_quarter(rotate_quarter(rotate_quarter(p))));
        assert_eq!(p, q);
        assert_eq!(rotate_half(p), rotate_quarter(rotate_quarter(p)));
        assert_eq!(rotate_three_quarters(p), rotate_quarter(rotate_half(p)));
    }
}
