#[cfg(test)]
mod repair_tests {
    use glam::Vec2;
    use wad::{WadLineDef, WadMap, WadSideDef, WadVertex};

    use super::super::crossed_square;
    use crate::level::Level;
    use crate::options::GameOptions;
    use crate::pic::PicData;

    const TWO_SIDED: u16 = 4;

    fn load(map: &WadMap) -> Level {
        Level::load(map, GameOptions::default(), PicData::default()).unwrap()
    }

    fn assert_outline(got: &[Vec2], want: &[(f32, f32)]) {
        assert_eq!(got.len(), want.len(), "{got:?}");
        for (p, &(x, y)) in got.iter().zip(want) {
            assert!(p.distance(Vec2::new(x, y)) < 0.01, "{got:?}");
        }
    }

    fn area(points: &[Vec2]) -> f32 {
        let mut area = 0.0;
        for i in 0..points.len() {
            area += points[i].perp_dot(points[(i + 1) % points.len()]);
        }
        area / 2.0
    }

    #[test]
    fn crossing_partitions_close_every_leaf() {
        let level = load(&crossed_square());
        let leaves = &level.map_data.subsectors;
        assert_eq!(leaves.len(), 3);

        assert_outline(&leaves[0].polygon, &[(128.0, 256.0), (0.0, 256.0), (0.0, 0.0), (128.0, 0.0)]);
        // the corner where the two partitions meet is in both right leaves
        assert_outline(
            &leaves[1].polygon,
            &[(256.0, 128.0), (128.0, 128.0), (128.0, 0.0), (256.0, 0.0)],
        );
        assert_outline(
            &leaves[2].polygon,
            &[(256.0, 256.0), (128.0, 256.0), (128.0, 128.0), (256.0, 128.0)],
        );

        let areas: Vec<f32> = leaves.iter().map(|ss| area(&ss.polygon)).collect();
        assert!(areas.iter().all(|&a| a > 0.0), "{areas:?}");
        assert!((areas.iter().sum::<f32>() - 256.0 * 256.0).abs() < 1.0);

        let b = leaves[1].bbox;
        assert_eq!((b.left, b.right, b.bottom, b.top), (128.0, 256.0, 0.0, 128.0));
    }

    #[test]
    fn points_land_in_the_leaf_around_them() {
        let level = load(&crossed_square());
        let cases = [
            (Vec2::new(64.0, 128.0), 0),
            (Vec2::new(10.0, 250.0), 0),
            (Vec2::new(200.0, 64.0), 1),
            (Vec2::new(129.0, 1.0), 1),
            (Vec2::new(200.0, 200.0), 2),
            (Vec2::new(250.0, 129.0), 2),
        ];
        for (point, ss) in cases {
            assert_eq!(level.point_in_subsector(point), ss, "{point}");
        }
        assert_eq!(level.find_sector(Vec2::new(200.0, 200.0)), 0);
    }

    #[test]
    fn line_without_segs_is_given_some() {
        let mut map = crossed_square();
        map.vertexes.push(WadVertex::new(64, 64));
        map.vertexes.push(WadVertex::new(192, 64));
        map.sidedefs.push(WadSideDef::new(0, 0, "-", "-", "-", 0));
        map.sidedefs.push(WadSideDef::new(0, 0, "-", "-", "-", 0));
        map.linedefs.push(WadLineDef::new(7, 8, TWO_SIDED, 0, 0, 4, Some(5)));
        let level = load(&map);
        let map = &level.map_data;

        let added = |ss: usize| -> Vec<usize> {
            map.subsectors[ss]
                .segs
                .iter()
                .copied()
                .filter(|&s| map.segments[s].linedef == 4)
                .collect()
        };
        // clipped to the box of each leaf the line runs through
        let left = added(0);
        assert_eq!(left.len(), 1);
        let seg = &map.segments[left[0]];
        assert_eq!((seg.v1, seg.v2), (Vec2::new(64.0, 64.0), Vec2::new(128.0, 64.0)));
        assert_eq!(seg.offset, 0.0);

        let right = added(1);
        assert_eq!(right.len(), 1);
        let seg = &map.segments[right[0]];
        assert_eq!((seg.v1, seg.v2), (Vec2::new(128.0, 64.0), Vec2::new(192.0, 64.0)));
        assert_eq!(seg.offset, 64.0);
        assert_eq!(seg.backsector, Some(0));

        assert!(added(2).is_empty());
        // outlines are untouched
        assert_eq!(map.subsectors[1].polygon.len(), 4);
    }
}
