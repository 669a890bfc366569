use proptest::prelude::*;
use stackmeans::cluster::{find_closest, total_movement, Kmeans, StratifiedSampler};
use stackmeans::Vector;

const SPREAD: i32 = 50_000;

fn points_strategy() -> impl Strategy<Value = Vec<Vector>> {
    prop::collection::vec((0i32..3, -50i32..500), 6..60)
        .prop_map(|raw| raw.into_iter().map(|(l, s)| Vector::new(l * SPREAD, s)).collect())
}

proptest! {
    #[test]
    fn prop_kmeans_all_assigned(points in points_strategy(), k in 1usize..5) {
        let initial: Vec<Vector> = points.iter().copied().take(k).collect();
        let fit = Kmeans::new().fit(&points, &initial).unwrap();

        prop_assert_eq!(fit.centers.len(), initial.len());
        let labels = fit.predict(&points);
        prop_assert_eq!(labels.len(), points.len());
        for &l in &labels {
            prop_assert!(l < initial.len());
        }
    }

    #[test]
    fn prop_fixed_point_is_stable(points in points_strategy()) {
        let initial: Vec<Vector> = points.iter().copied().take(3).collect();
        let km = Kmeans::new().with_eta(0.5).with_max_iter(500);
        let fit = km.fit(&points, &initial).unwrap();

        if fit.converged {
            let again = km.step(&points, &fit.centers);
            prop_assert_eq!(total_movement(&fit.centers, &again), 0.0);
        }
    }

    #[test]
    fn prop_stratified_centers_stay_on_language_bands(
        a in prop::collection::vec(-10i32..100, 2..30),
        b in prop::collection::vec(-10i32..100, 2..30),
    ) {
        let mut points: Vec<Vector> = a.iter().map(|&s| Vector::new(0, s)).collect();
        points.extend(b.iter().map(|&s| Vector::new(SPREAD, s)));

        let centers = StratifiedSampler::new(4, SPREAD, 2).sample(&points).unwrap();
        prop_assert_eq!(centers.len(), 4);
        for c in &centers {
            prop_assert_eq!(c.x % SPREAD, 0);
        }
        prop_assert_eq!(centers.iter().filter(|c| c.x == 0).count(), 2);
        prop_assert_eq!(centers.iter().filter(|c| c.x == SPREAD).count(), 2);
    }

    #[test]
    fn prop_closest_is_minimal(
        point in (-1000i32..1000, -1000i32..1000),
        centers in prop::collection::vec((-1000i32..1000, -1000i32..1000), 1..10),
    ) {
        let p = Vector::new(point.0, point.1);
        let cs: Vec<Vector> = centers.into_iter().map(|(x, y)| Vector::new(x, y)).collect();
        let d = |c: &Vector| {
            let dx = i64::from(p.x - c.x);
            let dy = i64::from(p.y - c.y);
            dx * dx + dy * dy
        };

        let best = find_closest(p, &cs);
        let best_d = d(&cs[best]);
        for (i, c) in cs.iter().enumerate() {
            prop_assert!(d(c) >= best_d);
            if i < best {
                prop_assert!(d(c) > best_d);
            }
        }
    }
}
