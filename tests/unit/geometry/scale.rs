use super::*;

#[test]
fn skin_scale_is_width_over_64() {
    assert_eq!(skin_scale(64), Scale(1.0));
    assert_eq!(skin_scale(128), Scale(2.0));
    assert_eq!(skin_scale(32), Scale(0.5));
}

#[test]
fn cape_scale_known_grids_are_unit_at_base_size() {
    assert_eq!(cape_scale(64, 32), (CapeGrid::Grid64x32, Scale(1.0)));
    assert_eq!(cape_scale(22, 17), (CapeGrid::Grid22x17, Scale(1.0)));
    assert_eq!(cape_scale(46, 22), (CapeGrid::Grid46x22, Scale(1.0)));
}

#[test]
fn cape_scale_multiples_keep_their_grid() {
    assert_eq!(cape_scale(128, 64), (CapeGrid::Grid64x32, Scale(2.0)));
    assert_eq!(cape_scale(44, 34), (CapeGrid::Grid22x17, Scale(2.0)));
    assert_eq!(cape_scale(92, 44), (CapeGrid::Grid46x22, Scale(2.0)));
}

#[test]
fn cape_scale_falls_back_for_unknown_ratio() {
    let (grid, scale) = cape_scale(40, 40);
    assert_eq!(grid, CapeGrid::Fallback);
    assert!((scale.as_f64() - 40.0 / 21.25).abs() < 1e-12);
    assert!((scale.as_f64() - 1.882).abs() < 1e-3);
}

#[test]
fn cape_ratio_tests_do_not_overflow_on_large_sizes() {
    let (grid, _) = cape_scale(u32::MAX, u32::MAX / 2);
    assert_eq!(grid, CapeGrid::Fallback);
    let (grid, _) = cape_scale(u32::MAX - 1, u32::MAX / 2);
    assert_eq!(grid, CapeGrid::Grid64x32);
}
