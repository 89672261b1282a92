//! # Builder Tests
//!
//! Raw builder output, before any recentering.

use super::*;
use crate::options::SectorOffsetPolicy;
use approx::assert_abs_diff_eq;
use config::constants::{approx_zero, EPSILON};
use glam::DVec3;

/// Angle in degrees measured from +Z toward +X.
fn angle_of(v: DVec3) -> f64 {
    v.x.atan2(v.z).to_degrees()
}

fn assert_flat(mesh: &RadialMesh) {
    assert!(mesh.positions().iter().all(|v| approx_zero(v.y)));
}

fn assert_faces_up(mesh: &RadialMesh) {
    for normal in mesh.face_normals() {
        assert!(normal.abs_diff_eq(DVec3::Y, EPSILON), "normal {:?}", normal);
    }
}

// =============================================================================
// ANNULUS
// =============================================================================

#[test]
fn test_annulus_counts() {
    let mesh = build_annulus(&ShapeParameters::new(90, 1.0, 90, 2.0, 4));
    assert_eq!(mesh.vertex_count(), 10);
    assert_eq!(mesh.index_count(), 24);
    assert_eq!(mesh.triangle_count(), 8);
    assert!(mesh.validate());
    assert_flat(&mesh);
}

#[test]
fn test_annulus_index_layout() {
    let mesh = build_annulus(&ShapeParameters::new(90, 1.0, 90, 2.0, 2));
    assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3, 3, 2, 4, 3, 4, 5]);
}

#[test]
fn test_annulus_boundaries() {
    let mesh = build_annulus(&ShapeParameters::new(90, 1.0, 90, 2.0, 4));

    for index in [0, 3, 5, 7, 9] {
        assert_abs_diff_eq!(mesh.vertex(index).length(), 1.0, epsilon = EPSILON);
    }
    for index in [1, 2, 4, 6, 8] {
        assert_abs_diff_eq!(mesh.vertex(index).length(), 2.0, epsilon = EPSILON);
    }

    assert_abs_diff_eq!(angle_of(mesh.vertex(0)), -45.0, epsilon = EPSILON);
    assert_abs_diff_eq!(angle_of(mesh.vertex(1)), -45.0, epsilon = EPSILON);
    assert_abs_diff_eq!(angle_of(mesh.vertex(8)), 45.0, epsilon = EPSILON);
    assert_abs_diff_eq!(angle_of(mesh.vertex(9)), 45.0, epsilon = EPSILON);
}

#[test]
fn test_annulus_faces_up() {
    assert_faces_up(&build_annulus(&ShapeParameters::new(270, 0.5, 270, 3.0, 12)));
}

// =============================================================================
// NARROWING
// =============================================================================

#[test]
fn test_narrowing_centers_each_boundary() {
    let mesh = build_narrowing(&ShapeParameters::new(120, 1.0, 60, 3.0, 4));
    assert_eq!(mesh.vertex_count(), 10);
    assert_eq!(mesh.index_count(), 24);

    assert_abs_diff_eq!(angle_of(mesh.vertex(0)), -60.0, epsilon = EPSILON);
    assert_abs_diff_eq!(angle_of(mesh.vertex(1)), -30.0, epsilon = EPSILON);
    assert_abs_diff_eq!(angle_of(mesh.vertex(8)), 30.0, epsilon = EPSILON);
    assert_abs_diff_eq!(angle_of(mesh.vertex(9)), 60.0, epsilon = EPSILON);
    assert_abs_diff_eq!(mesh.vertex(9).length(), 1.0, epsilon = EPSILON);
    assert_abs_diff_eq!(mesh.vertex(8).length(), 3.0, epsilon = EPSILON);
    assert_faces_up(&mesh);
}

// =============================================================================
// FAN
// =============================================================================

#[test]
fn test_fan_with_inner_arc_is_strip() {
    let mesh = build_fan(&ShapeParameters::new(60, 1.0, 120, 2.0, 3));
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.index_count(), 18);

    assert_abs_diff_eq!(angle_of(mesh.vertex(0)), -30.0, epsilon = EPSILON);
    assert_abs_diff_eq!(angle_of(mesh.vertex(1)), -60.0, epsilon = EPSILON);
    assert_abs_diff_eq!(angle_of(mesh.vertex(6)), 60.0, epsilon = EPSILON);
    assert_abs_diff_eq!(angle_of(mesh.vertex(7)), 30.0, epsilon = EPSILON);
    assert_faces_up(&mesh);
}

#[test]
fn test_fan_without_inner_arc_pivots_on_origin() {
    let mesh = build_fan(&ShapeParameters::new(0, 1.0, 90, 2.0, 4));
    assert_eq!(mesh.vertex_count(), 6);
    assert_eq!(mesh.index_count(), 12);
    assert_eq!(mesh.vertex(0), DVec3::ZERO);
    assert!(mesh.triangles().all(|tri| tri[0] == 0));

    assert_abs_diff_eq!(angle_of(mesh.vertex(1)), -45.0, epsilon = EPSILON);
    assert_abs_diff_eq!(angle_of(mesh.vertex(5)), 45.0, epsilon = EPSILON);
    assert_abs_diff_eq!(mesh.vertex(5).length(), 2.0, epsilon = EPSILON);
    assert_faces_up(&mesh);
}

// =============================================================================
// WEDGE
// =============================================================================

#[test]
fn test_wedge_shares_apex() {
    let mesh = build_wedge(&ShapeParameters::new(90, 1.0, 0, 2.0, 3));
    assert_eq!(mesh.vertex_count(), 5);
    assert_eq!(mesh.index_count(), 9);
    assert_eq!(mesh.vertex(1), DVec3::new(0.0, 0.0, 2.0));
    assert_eq!(mesh.indices(), &[0, 1, 2, 2, 1, 3, 3, 1, 4]);
    assert_faces_up(&mesh);
}

#[test]
fn test_wedge_inner_sweep() {
    let mesh = build_wedge(&ShapeParameters::new(90, 1.0, 0, 2.0, 3));
    assert_abs_diff_eq!(angle_of(mesh.vertex(0)), -45.0, epsilon = EPSILON);
    assert_abs_diff_eq!(angle_of(mesh.vertex(2)), -15.0, epsilon = EPSILON);
    assert_abs_diff_eq!(angle_of(mesh.vertex(4)), 45.0, epsilon = EPSILON);
    for index in [0, 2, 3, 4] {
        assert_abs_diff_eq!(mesh.vertex(index).length(), 1.0, epsilon = EPSILON);
    }
}

// =============================================================================
// SECTOR
// =============================================================================

#[test]
fn test_sector_full_disc() {
    let mesh = build_sector(
        &ShapeParameters::new(0, 0.0, 360, 1.0, 8),
        SectorOffsetPolicy::InnerArc,
    );
    assert_eq!(mesh.vertex_count(), 10);
    assert_eq!(mesh.index_count(), 24);
    assert_eq!(mesh.vertex(0), DVec3::ZERO);

    let rim = &mesh.positions()[1..];
    for v in rim {
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = EPSILON);
    }
    for pair in rim.windows(2) {
        assert_abs_diff_eq!(
            pair[0].dot(pair[1]),
            45f64.to_radians().cos(),
            epsilon = EPSILON
        );
    }
    // The sweep closes on its own start
    assert!(rim[8].abs_diff_eq(rim[0], EPSILON));

    for (k, tri) in mesh.triangles().enumerate() {
        let k = k as u32;
        assert_eq!(tri, [0, k + 1, k + 2]);
    }
    assert_faces_up(&mesh);
}

#[test]
fn test_sector_symmetric_without_inner_arc() {
    let mesh = build_sector(
        &ShapeParameters::new(0, 0.0, 90, 1.0, 3),
        SectorOffsetPolicy::InnerArc,
    );
    let start = mesh.vertex(1);
    let end = mesh.vertex(4);
    assert_abs_diff_eq!(angle_of(start), -45.0, epsilon = EPSILON);
    assert_abs_diff_eq!(start.x, -end.x, epsilon = EPSILON);
    assert_abs_diff_eq!(start.z, end.z, epsilon = EPSILON);
}

#[test]
fn test_sector_inner_arc_offset_policy() {
    let params = ShapeParameters::new(90, 0.0, 90, 1.0, 2);

    let legacy = build_sector(&params, SectorOffsetPolicy::InnerArc);
    assert!(legacy.vertex(1).abs_diff_eq(DVec3::X, EPSILON));
    assert!(legacy.vertex(3).abs_diff_eq(DVec3::NEG_Z, EPSILON));

    let centered = build_sector(&params, SectorOffsetPolicy::CenteredOnOuterArc);
    assert_abs_diff_eq!(angle_of(centered.vertex(1)), -45.0, epsilon = EPSILON);
    assert_abs_diff_eq!(angle_of(centered.vertex(3)), 45.0, epsilon = EPSILON);
}

// =============================================================================
// DEGENERATE SEGMENTS
// =============================================================================

#[test]
fn test_zero_segments_emit_seed_only() {
    let strip = build_annulus(&ShapeParameters::new(90, 1.0, 90, 2.0, 0));
    assert_eq!(strip.vertex_count(), 4);
    assert_eq!(strip.index_count(), 6);

    let fan = build_sector(
        &ShapeParameters::new(0, 0.0, 360, 1.0, 0),
        SectorOffsetPolicy::InnerArc,
    );
    assert_eq!(fan.vertex_count(), 3);
    assert_eq!(fan.index_count(), 3);
    // 360 / 0 is not a rotation
    assert!(!fan.vertex(2).is_finite());
}

#[test]
fn test_negative_segments_emit_seed_only() {
    let mesh = build_wedge(&ShapeParameters::new(90, 1.0, 0, 2.0, -3));
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.index_count(), 3);
    assert!(mesh.positions().iter().all(|v| v.is_finite()));
}
