use approx::assert_relative_eq;
use oorandom::Rand64;
use sat2d::math::{Point, Real, Vector};
use sat2d::object::Object;
use sat2d::query::sat::project_polygon;
use sat2d::query::{detect_collision, CollisionMode, CorrectionStatus};
use sat2d::shape::{compute_normals, Polygon};

const NUM_SAMPLES: usize = 500;

fn rand_in(rng: &mut Rand64, min: Real, max: Real) -> Real {
    min + rng.rand_float() * (max - min)
}

/// A random convex polygon, together with its circumradius.
fn random_convex_polygon(rng: &mut Rand64) -> (Polygon, Real) {
    let num_sides = rng.rand_range(3..10) as usize;
    let radius = rand_in(rng, 5.0, 100.0);
    let mut polygon = Polygon::regular(num_sides, radius).unwrap();
    polygon.rotate(rand_in(rng, 0.0, core::f64::consts::TAU));
    (polygon, radius)
}

fn random_vector(rng: &mut Rand64, extent: Real) -> Vector<Real> {
    Vector::new(rand_in(rng, -extent, extent), rand_in(rng, -extent, extent))
}

#[test]
fn normals_are_unit_length() {
    let mut rng = Rand64::new(42);

    for _ in 0..NUM_SAMPLES {
        let (polygon, _) = random_convex_polygon(&mut rng);
        let velocity = random_vector(&mut rng, 50.0);
        let normals = compute_normals(&polygon, Some(&velocity)).unwrap();

        assert_eq!(normals.len(), polygon.num_vertices() + 1);
        for n in normals.axes() {
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1.0e-9);
        }
    }
}

#[test]
fn normals_are_orthogonal_to_their_edge_and_outward() {
    let mut rng = Rand64::new(7);

    for _ in 0..NUM_SAMPLES {
        let (polygon, _) = random_convex_polygon(&mut rng);
        let normals = compute_normals(&polygon, None).unwrap();
        let centroid = polygon.centroid();

        for (i, (dir, n)) in polygon
            .edge_directions()
            .zip(normals.edges().iter())
            .enumerate()
        {
            assert_relative_eq!(dir.dot(&**n), 0.0, epsilon = 1.0e-9);
            let [a, _] = polygon.edge(i);
            assert!((a - centroid).dot(&**n) > 0.0);
        }
    }
}

#[test]
fn normals_are_idempotent() {
    let mut rng = Rand64::new(3);

    for _ in 0..NUM_SAMPLES {
        let (polygon, _) = random_convex_polygon(&mut rng);
        let velocity = random_vector(&mut rng, 50.0);
        assert_eq!(
            compute_normals(&polygon, Some(&velocity)).unwrap(),
            compute_normals(&polygon, Some(&velocity)).unwrap()
        );
    }
}

#[test]
fn projection_start_never_exceeds_end() {
    let mut rng = Rand64::new(11);

    for _ in 0..NUM_SAMPLES {
        let (polygon, _) = random_convex_polygon(&mut rng);
        let axis = random_vector(&mut rng, 1.0);
        let offset = random_vector(&mut rng, 500.0);
        let displacement = random_vector(&mut rng, 100.0);

        let proj = project_polygon(&polygon, &axis, &offset, None);
        assert!(proj.start <= proj.end);

        let swept = project_polygon(&polygon, &axis, &offset, Some(&displacement));
        assert!(swept.start <= swept.end);
        assert!(swept.start <= proj.start && swept.end >= proj.end);
    }
}

#[test]
fn discrete_queries_are_symmetric() {
    let mut rng = Rand64::new(1234);

    for _ in 0..NUM_SAMPLES {
        let (shape1, _) = random_convex_polygon(&mut rng);
        let (shape2, _) = random_convex_polygon(&mut rng);
        let a = Object::new(shape1, Point::from(random_vector(&mut rng, 150.0))).unwrap();
        let b = Object::new(shape2, Point::from(random_vector(&mut rng, 150.0))).unwrap();

        let ab = detect_collision(&a, &b, CollisionMode::Discrete);
        let ba = detect_collision(&b, &a, CollisionMode::Discrete);
        assert_relative_eq!(ab.magnitude, ba.magnitude, epsilon = 1.0e-9);
        assert_eq!(ab.is_colliding(), ba.is_colliding());
    }
}

#[test]
fn distant_polygons_are_separated() {
    let mut rng = Rand64::new(99);

    for _ in 0..NUM_SAMPLES {
        let (shape1, r1) = random_convex_polygon(&mut rng);
        let (shape2, r2) = random_convex_polygon(&mut rng);
        let angle = rand_in(&mut rng, 0.0, core::f64::consts::TAU);
        let dist = r1 + r2 + rand_in(&mut rng, 1.0, 100.0);
        let center2 = Point::new(dist * angle.cos(), dist * angle.sin());

        let a = Object::new(shape1, Point::origin()).unwrap();
        let b = Object::new(shape2, center2).unwrap();

        let c = detect_collision(&a, &b, CollisionMode::Discrete);
        assert_eq!(c.status, CorrectionStatus::Separated);
        assert_eq!(c.magnitude, 0.0);
    }
}

#[test]
fn minimum_translation_vector_separates_the_polygons() {
    let mut rng = Rand64::new(2024);

    for _ in 0..NUM_SAMPLES {
        // Translated copies of the same polygon: no projection interval can be strictly
        // contained in the other one, so pushing along the axis of least overlap separates
        // them.
        let (shape, _) = random_convex_polygon(&mut rng);
        let mut a = Object::new(shape.clone(), Point::from(random_vector(&mut rng, 1.0))).unwrap();
        let b = Object::new(shape, Point::from(random_vector(&mut rng, 1.0))).unwrap();

        let c = detect_collision(&a, &b, CollisionMode::Discrete);
        assert_eq!(c.status, CorrectionStatus::Penetrating);
        assert!(c.magnitude > 0.0);
        assert_relative_eq!(c.vector.norm(), c.magnitude, epsilon = 1.0e-9);
        // The correction pushes `a` away from `b`.
        assert!(c.vector.dot(&c.axis) < 0.0);

        a.translate(&c.vector);
        let after = detect_collision(&a, &b, CollisionMode::Discrete);
        assert!(after.magnitude < 1.0e-6);
    }
}

#[test]
fn squares_overlapping_by_forty() {
    let square = Polygon::new(vec![
        Point::new(-50.0, -50.0),
        Point::new(50.0, -50.0),
        Point::new(50.0, 50.0),
        Point::new(-50.0, 50.0),
    ])
    .unwrap();

    let a = Object::new(square.clone(), Point::origin()).unwrap();
    let b = Object::new(square.clone(), Point::new(60.0, 0.0)).unwrap();

    let c = detect_collision(&a, &b, CollisionMode::Discrete);
    assert_eq!(c.magnitude, 40.0);
    assert_eq!(c.axis, Vector::x());
    assert_eq!(c.vector, Vector::new(-40.0, 0.0));

    let c = detect_collision(&b, &a, CollisionMode::Discrete);
    assert_eq!(c.magnitude, 40.0);
    assert_eq!(c.vector, Vector::new(40.0, 0.0));

    let b = Object::new(square, Point::new(200.0, 0.0)).unwrap();
    let c = detect_collision(&a, &b, CollisionMode::Discrete);
    assert_eq!(c.magnitude, 0.0);
    assert_eq!(c.axis, Vector::x());
}

#[test]
fn unit_squares_overlapping_by_half() {
    let square = Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ])
    .unwrap();

    let a = Object::new(square.clone(), Point::origin()).unwrap();
    let b = Object::new(square, Point::new(0.5, 0.0)).unwrap();

    let c = detect_collision(&a, &b, CollisionMode::Discrete);
    assert_eq!(c.status, CorrectionStatus::Penetrating);
    assert_eq!(c.magnitude, 0.5);
    assert_eq!(c.axis, Vector::x());
}
