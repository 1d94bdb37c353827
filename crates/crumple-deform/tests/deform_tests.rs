//! Integration tests for crumple-deform.

use crumple_deform::fold::{apply_fold, recenter};
use crumple_deform::puff::pocket_shape;
use crumple_deform::{FoldLine, FoldOutcome, FoldRejection, PuffParams, TargetShape};
use crumple_math::Vec2;
use crumple_mesh::generators::flat_lattice;
use crumple_mesh::VertexBuffer;

const STACK: f32 = 0.2;

fn y_axis_line() -> FoldLine {
    // Through the origin along -Y, so the normal (-d.y, d.x) points along +X.
    FoldLine::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, -1.0)).unwrap()
}

fn vertical_line_at(x: f32) -> FoldLine {
    // Normal points along -X: everything left of `x` folds over.
    FoldLine::new(Vec2::new(x, -1.0), Vec2::new(x, 1.0)).unwrap()
}

// ─── FoldLine Tests ───────────────────────────────────────────

#[test]
fn line_normal_is_perpendicular() {
    let line = FoldLine::new(Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0)).unwrap();
    assert_eq!(line.normal(), Vec2::new(-4.0, 3.0));
    assert_eq!(line.normal().dot(line.end() - line.start()), 0.0);
}

#[test]
fn reflect_across_y_axis() {
    let line = y_axis_line();
    assert!(line.side(Vec2::new(2.0, 0.0)) > 0.0);
    let r = line.reflect(Vec2::new(2.0, 0.0));
    assert!((r - Vec2::new(-2.0, 0.0)).length() < 1e-6);
}

#[test]
fn reflect_across_diagonal() {
    let line = FoldLine::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0)).unwrap();
    let r = line.reflect(Vec2::new(1.0, 0.0));
    assert!((r - Vec2::new(0.0, 1.0)).length() < 1e-6);
}

#[test]
fn zero_length_line_is_degenerate() {
    let p = Vec2::new(0.3, 0.3);
    assert_eq!(FoldLine::new(p, p), Err(FoldRejection::Degenerate));
}

#[test]
fn missing_or_nan_points_are_unresolved() {
    let p = Vec2::new(0.0, 0.0);
    assert_eq!(FoldLine::resolve(None, Some(p)), Err(FoldRejection::Unresolved));
    assert_eq!(FoldLine::resolve(Some(p), None), Err(FoldRejection::Unresolved));
    assert_eq!(
        FoldLine::new(Vec2::new(f32::NAN, 0.0), p),
        Err(FoldRejection::Unresolved)
    );
}

// ─── Fold Transform Tests ─────────────────────────────────────

#[test]
fn fold_reflects_and_stacks_before_recentering() {
    let mut shape = VertexBuffer::default();
    shape.push(2.0, 0.0, 0.0);
    shape.push(-3.0, 0.0, 0.0);

    let outcome = apply_fold(&mut shape, &y_axis_line(), STACK);

    // (2,0,0) → (-2,0,0.2); bounds x ∈ [-3, -2] → center -2.5 is removed.
    match outcome {
        FoldOutcome::Applied { moved, recenter_shift } => {
            assert_eq!(moved, 1);
            assert!((recenter_shift.x + 2.5).abs() < 1e-6);
            assert!(recenter_shift.y.abs() < 1e-6);
        }
        other => panic!("expected applied fold, got {:?}", other),
    }
    assert!((shape.pos_x[0] - (-2.0 + 2.5)).abs() < 1e-6);
    assert!((shape.pos_z[0] - STACK).abs() < 1e-6);
    assert!((shape.pos_x[1] - (-3.0 + 2.5)).abs() < 1e-6);
    assert_eq!(shape.pos_z[1], 0.0);
}

#[test]
fn fold_counts_moved_vertices_and_stacks() {
    let mut shape = flat_lattice(4, 2.0);
    let outcome = apply_fold(&mut shape, &vertical_line_at(0.5), STACK);

    // Columns x = -1, -0.5, 0 fold over: 3 columns × 5 rows.
    assert_eq!(outcome.moved(), 15);
    let lifted = shape.pos_z.iter().filter(|&&z| (z - STACK).abs() < 1e-6).count();
    assert_eq!(lifted, 15);
}

#[test]
fn fold_recenters_bounding_box() {
    let mut shape = flat_lattice(4, 2.0);
    apply_fold(&mut shape, &vertical_line_at(0.5), STACK);

    let b = shape.bounds_xy().unwrap();
    assert!(b.center().length() < 1e-5, "center = {:?}", b.center());
    // x ∈ [0.5, 2] before recentering → width 1.5
    assert!((b.size().x - 1.5).abs() < 1e-5);
    assert!((b.size().y - 2.0).abs() < 1e-5);
}

#[test]
fn fold_with_nothing_on_folding_side_is_noop() {
    let mut shape = flat_lattice(4, 2.0);
    let before = shape.clone();
    // Along the right edge pointing down: normal is +X, every vertex has x ≤ 1.
    let line = FoldLine::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, -1.0)).unwrap();

    let outcome = apply_fold(&mut shape, &line, STACK);
    assert_eq!(outcome, FoldOutcome::Rejected(FoldRejection::NoEffect));
    assert_eq!(shape, before);
}

#[test]
fn fold_is_deterministic() {
    let line = FoldLine::new(Vec2::new(-1.0, 0.3), Vec2::new(0.7, 1.0)).unwrap();
    let mut a = flat_lattice(6, 2.0);
    let mut b = a.clone();
    let oa = apply_fold(&mut a, &line, STACK);
    let ob = apply_fold(&mut b, &line, STACK);
    assert_eq!(oa, ob);
    assert_eq!(a, b);
}

#[test]
fn recenter_leaves_z_alone() {
    let mut shape = VertexBuffer::default();
    shape.push(1.0, 1.0, 0.4);
    shape.push(3.0, 5.0, -0.1);
    let shift = recenter(&mut shape);
    assert_eq!(shift, Vec2::new(2.0, 3.0));
    assert_eq!(shape.pos_x, vec![-1.0, 1.0]);
    assert_eq!(shape.pos_y, vec![-2.0, 2.0]);
    assert_eq!(shape.pos_z, vec![0.4, -0.1]);
}

// ─── Puff Transform Tests ─────────────────────────────────────

#[test]
fn pocket_shape_vanishes_on_x_axis_nodes() {
    assert_eq!(pocket_shape(0.0, 0.7, 0.5), 0.0);
    let w = pocket_shape(1.0, 0.0, 0.5);
    assert!((w - 0.5f32.sin()).abs() < 1e-6);
}

#[test]
fn puff_on_flat_sheet_bulges_up() {
    let mut target = TargetShape::from_rest(&flat_lattice(8, 4.0));
    let params = PuffParams::default();

    let outcome = target.puff(true, &params);
    assert!(outcome.puffed);
    assert_eq!(outcome.median_z, 0.0);
    assert!(outcome.displaced > 0);
    // Flat sheet: every vertex sits on the waterline, so all move up (or stay).
    assert!(target.positions.pos_z.iter().all(|&z| z >= 0.0));
    assert!(target.positions.pos_z.iter().any(|&z| z > 0.1));
}

#[test]
fn puff_expansion_matches_formula() {
    let mut target = TargetShape::from_rest(&flat_lattice(4, 4.0));
    let params = PuffParams::default();
    target.puff(true, &params);

    for i in 0..target.len() {
        let x = target.positions.pos_x[i];
        let y = target.positions.pos_y[i];
        let expected = pocket_shape(x, y, params.frequency) * params.strength * params.base;
        assert!((target.positions.pos_z[i] - expected).abs() < 1e-5);
    }
}

#[test]
fn puff_on_then_off_restores_flat_sheet() {
    let rest = flat_lattice(10, 4.0);
    let mut target = TargetShape::from_rest(&rest);
    let params = PuffParams::default();

    target.puff(true, &params);
    let outcome = target.puff(false, &params);

    assert!(!outcome.puffed);
    assert_eq!(outcome.displaced, 0);
    assert!(target.puff_layer.is_zero());
    for i in 0..rest.len() {
        assert!((target.positions.pos_z[i] - rest.pos_z[i]).abs() < 1e-5);
        assert!((target.positions.pos_x[i] - rest.pos_x[i]).abs() < 1e-5);
    }
}

#[test]
fn puff_pushes_layers_apart() {
    let mut target = TargetShape::from_rest(&flat_lattice(8, 4.0));
    target.fold(&vertical_line_at(0.0), STACK);
    let before = target.positions.clone();

    let outcome = target.puff(true, &PuffParams::default());
    assert!((outcome.median_z - STACK / 2.0).abs() < 1e-6);

    for i in 0..target.len() {
        let dz = target.positions.pos_z[i] - before.pos_z[i];
        if before.pos_z[i] > outcome.median_z {
            assert!(dz >= 0.0, "upper layer vertex {} moved down", i);
        } else {
            assert!(dz <= 0.0, "lower layer vertex {} moved up", i);
        }
    }
}

#[test]
fn fold_bakes_puff_into_layering() {
    let mut target = TargetShape::from_rest(&flat_lattice(8, 4.0));
    let params = PuffParams::default();

    target.puff(true, &params);
    let outcome = target.fold(&vertical_line_at(0.0), STACK);
    assert!(outcome.is_applied());
    assert!(target.puff_layer.is_zero());

    // Deflating after the fold is relative to the folded target: nothing to remove.
    let folded = target.positions.clone();
    target.puff(false, &params);
    assert_eq!(target.positions, folded);
    assert!(target.breathing_dz.iter().all(|&d| d == 0.0));
}

#[test]
fn fold_keeps_breathing_height() {
    let mut target = TargetShape::from_rest(&flat_lattice(8, 4.0));
    target.puff(true, &PuffParams::default());
    let lifted = target.breathing_dz.clone();
    assert!(lifted.iter().any(|&d| d != 0.0));

    target.fold(&vertical_line_at(0.0), STACK);
    assert!(target.puff_layer.is_zero());
    assert_eq!(target.breathing_dz, lifted);
}

#[test]
fn rejected_fold_keeps_puff_layer() {
    let mut target = TargetShape::from_rest(&flat_lattice(4, 2.0));
    target.puff(true, &PuffParams::default());
    let line = FoldLine::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, -1.0)).unwrap();

    // The puff only lifts Z, so every vertex still has x ≤ 1.
    let outcome = target.fold(&line, STACK);
    assert_eq!(outcome, FoldOutcome::Rejected(FoldRejection::NoEffect));
    assert!(!target.puff_layer.is_zero());
}

#[test]
fn spread_swells_and_restores_xy() {
    let rest = flat_lattice(8, 4.0);
    let mut target = TargetShape::from_rest(&rest);
    let params = PuffParams::pillow();

    target.puff(true, &params);
    // Vertex (x=1 of 8 → -1.5, y=4 → 0.0): interior, swells outward in X.
    let i = 4 * 9 + 1;
    assert!(target.positions.pos_x[i] < rest.pos_x[i]);

    target.puff(false, &params);
    assert!((target.positions.pos_x[i] - rest.pos_x[i]).abs() < 1e-5);
}

#[test]
fn reset_drops_everything() {
    let rest = flat_lattice(4, 2.0);
    let mut target = TargetShape::from_rest(&rest);
    target.fold(&vertical_line_at(0.5), STACK);
    target.puff(true, &PuffParams::default());

    target.reset_to(&rest);
    assert_eq!(target.positions, rest);
    assert!(target.puff_layer.is_zero());
    assert_eq!(target.breathing_dz.len(), rest.len());
    assert!(target.breathing_dz.iter().all(|&d| d == 0.0));
}

// ─── PuffParams Tests ─────────────────────────────────────────

#[test]
fn params_validate() {
    assert!(PuffParams::default().validate().is_ok());
    assert!(PuffParams::pillow().validate().is_ok());
    let bad = PuffParams {
        frequency: f32::NAN,
        ..Default::default()
    };
    assert!(bad.validate().is_err());
    let negative = PuffParams {
        strength: -1.0,
        ..Default::default()
    };
    assert!(negative.validate().is_err());
}

#[test]
fn params_toml_partial() {
    let params: PuffParams = toml::from_str("strength = 2.0").unwrap();
    assert_eq!(params.strength, 2.0);
    assert_eq!(params.frequency, PuffParams::default().frequency);
}
