//! Seed fill regression test
//!
//! Fills outlined silhouettes from the grid centre and checks the usable,
//! leaked and unseeded outcomes together with the pixel index built from
//! the result.

use peoplefinder_core::{Label, Point};
use peoplefinder_region::{
    ConnectivityType, FillOutcome, PixelIndex, fill_silhouette, outline_from_mask,
};
use peoplefinder_test::{RegParams, SilhouetteBuilder, open_outline, seed_on_outline};

#[test]
fn seedfill_reg() {
    let mut rp = RegParams::new("seedfill");

    // --- Closed silhouette ---
    let builder = SilhouetteBuilder::reference()
        .rect(30, 100, 20, 43)
        .rect(101, 120, 25, 30);
    let mask = builder.build_mask().expect("mask");
    let mut grid = builder.build().expect("outline");
    let seed = grid.center();
    let outcome = fill_silhouette(&mut grid, seed, ConnectivityType::FourWay).expect("fill");
    eprintln!("  closed: {:?}", outcome);
    rp.compare_values(1.0, if outcome.is_usable() { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(mask.count() as f64, grid.count(Label::Interior) as f64, 0.0);
    rp.compare_values(0.0, if grid.get(0, 0) == Some(Label::Interior) { 1.0 } else { 0.0 }, 0.0);

    // --- Pixel index ---
    let index = PixelIndex::build(&grid);
    rp.compare_values(mask.count() as f64, index.interior.len() as f64, 0.0);
    rp.compare_values(
        grid.count(Label::Outline) as f64,
        index.outline.len() as f64,
        0.0,
    );
    rp.compare_points(Some(Point::new(30, 20)), index.interior.first().copied());
    rp.compare_points(Some(Point::new(120, 30)), index.interior.last().copied());
    rp.compare_points(Some(Point::new(29, 19)), index.outline.first().copied());
    let ordered = index
        .interior
        .windows(2)
        .all(|w| (w[0].row, w[0].col) < (w[1].row, w[1].col));
    rp.compare_values(1.0, if ordered { 1.0 } else { 0.0 }, 0.0);

    // --- 8-way fill stays inside an 8-connected outline ---
    let diagonal = SilhouetteBuilder::reference().rect(60, 70, 28, 36);
    let mut grid8 = diagonal.build().expect("outline");
    let outcome = fill_silhouette(&mut grid8, seed, ConnectivityType::EightWay).expect("fill");
    eprintln!("  8-way: {:?}", outcome);
    rp.compare_values(1.0, if outcome.is_usable() { 1.0 } else { 0.0 }, 0.0);

    // --- Open outline leaks ---
    let mut open = open_outline().expect("outline");
    let outcome = fill_silhouette(&mut open, seed, ConnectivityType::FourWay).expect("fill");
    eprintln!("  open: {:?}", outcome);
    rp.compare_values(
        1.0,
        if matches!(outcome, FillOutcome::Leaked { .. }) { 1.0 } else { 0.0 },
        0.0,
    );

    // --- Seed on the outline ---
    let mut unseeded = seed_on_outline().expect("grid");
    let outcome = fill_silhouette(&mut unseeded, seed, ConnectivityType::FourWay).expect("fill");
    rp.compare_values(
        1.0,
        if outcome == FillOutcome::SeedOnOutline { 1.0 } else { 0.0 },
        0.0,
    );
    rp.compare_values(0.0, unseeded.count(Label::Interior) as f64, 0.0);

    // --- Outline of a mask with a hole ---
    let ring = SilhouetteBuilder::new(9, 9)
        .rect(1, 7, 1, 7)
        .build_mask()
        .expect("mask");
    let mut holed = ring;
    holed.set(4, 4, false).expect("set");
    let grid = outline_from_mask(&holed).expect("outline");
    rp.compare_values(
        1.0,
        if grid.get(4, 4) == Some(Label::Outline) { 1.0 } else { 0.0 },
        0.0,
    );
    rp.compare_values(33.0, grid.count(Label::Outline) as f64, 0.0);

    assert!(rp.cleanup());
}
