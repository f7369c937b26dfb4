//! Fold coverage tests for parity plots.

use assay_parity::{BandScale, ParityOptions, ParityPlot};
use proptest::prelude::*;

#[test]
fn log_coverage_counts_points_within_fold() {
    // log10 data: offsets of 0.1, 0.4 and 0.6 decades.
    let predicted = [Some(1.0), Some(2.0), Some(3.0)];
    let measured = [Some(1.1), Some(2.4), Some(2.4)];
    let options = ParityOptions::default().with_folds(vec![2.0, 3.0, 10.0]);

    let plot = ParityPlot::build(&predicted, &measured, &options).unwrap();

    // log10(2) ~ 0.301, log10(3) ~ 0.477, log10(10) = 1.
    assert_eq!(plot.band(2.0).unwrap().within, 1);
    assert_eq!(plot.band(3.0).unwrap().within, 2);
    assert_eq!(plot.band(10.0).unwrap().within, 3);
    assert_eq!(plot.band(10.0).unwrap().coverage, 1.0);
}

#[test]
fn linear_coverage_uses_multiplicative_band() {
    let predicted = [Some(10.0), Some(10.0), Some(10.0), Some(10.0)];
    let measured = [Some(5.0), Some(19.0), Some(21.0), Some(4.0)];
    let options = ParityOptions::default()
        .with_folds(vec![2.0])
        .with_scale(BandScale::Linear);

    let plot = ParityPlot::build(&predicted, &measured, &options).unwrap();

    let band = &plot.bands[0];
    assert_eq!(band.within, 2);
    assert_eq!(band.coverage, 0.5);
}

#[test]
fn axis_labels_carry_through() {
    let options = ParityOptions::default().with_axis_labels("log Kp (pred)", "log Kp (obs)");
    let plot = ParityPlot::build(&[Some(0.0)], &[Some(0.0)], &options).unwrap();
    assert_eq!(plot.axis_labels.0, "log Kp (pred)");
    assert_eq!(plot.axis_labels.1, "log Kp (obs)");
}

proptest! {
    #[test]
    fn coverage_is_a_fraction_and_grows_with_fold(
        pairs in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..50),
        linear in any::<bool>(),
    ) {
        let (predicted, measured): (Vec<Option<f64>>, Vec<Option<f64>>) =
            pairs.iter().map(|&(x, y)| (Some(x), Some(y))).unzip();
        let options = ParityOptions::default()
            .with_folds(vec![2.0, 3.0])
            .with_scale(BandScale::from_log_flag(!linear));

        let plot = ParityPlot::build(&predicted, &measured, &options).unwrap();

        for band in &plot.bands {
            prop_assert!((0.0..=1.0).contains(&band.coverage));
        }
        prop_assert!(plot.bands[0].within <= plot.bands[1].within);
    }

    #[test]
    fn limits_contain_every_point(
        pairs in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 1..50),
    ) {
        let (predicted, measured): (Vec<Option<f64>>, Vec<Option<f64>>) =
            pairs.iter().map(|&(x, y)| (Some(x), Some(y))).unzip();
        let plot = ParityPlot::build(&predicted, &measured, &ParityOptions::default()).unwrap();
        for &(x, y) in &plot.points {
            prop_assert!(plot.limits.lower < x.min(y));
            prop_assert!(plot.limits.upper > x.max(y));
        }
    }
}
