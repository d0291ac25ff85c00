use forecast_view::align::{alignment_offset, need_layer, prediction_layer};
use forecast_view::{align, AlignedPoint, ChartSpec, NeedSeries, PredictionSet, ViewConfig, ViewError};
use pretty_assertions::assert_eq;
use rand::Rng;
use rstest::rstest;

#[test]
fn test_shorter_prediction_ends_at_history_end() {
    let needs = NeedSeries::new(vec![10.0, 20.0, 30.0, 40.0]).unwrap();
    let predictions = PredictionSet::from_pairs(vec![(2, vec![25.0, 35.0])]).unwrap();

    let layer = prediction_layer(&needs, &predictions, 2, &ViewConfig::default()).unwrap();

    assert_eq!(layer.name, "Predictions for n = 2");
    assert_eq!(
        layer.points,
        vec![AlignedPoint::new(3, 25.0), AlignedPoint::new(4, 35.0)]
    );
}

#[rstest]
#[case(4, 2, 3)]
#[case(4, 4, 1)]
#[case(4, 6, 3)]
#[case(0, 3, 4)]
#[case(10, 1, 10)]
fn test_first_period(#[case] need_len: usize, #[case] len: usize, #[case] first: usize) {
    let values = vec![1.0; len];
    let points: Vec<AlignedPoint> = align(need_len, &values).collect();
    assert_eq!(points.len(), len);
    assert_eq!(points[0].period, first);
}

#[test]
fn test_periods_are_contiguous_for_random_lengths() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let need_len = rng.gen_range(0..40);
        let len = rng.gen_range(0..40);
        let values: Vec<f64> = (0..len).map(|_| rng.gen_range(-100.0..100.0)).collect();

        let points: Vec<AlignedPoint> = align(need_len, &values).collect();
        let offset = alignment_offset(need_len, len);

        assert_eq!(points.len(), len);
        for (i, point) in points.iter().enumerate() {
            assert_eq!(point.period, offset + i + 1);
            assert_eq!(point.value, values[i]);
        }
    }
}

#[test]
fn test_need_layer() {
    let needs = NeedSeries::new(vec![5.0, 6.0]).unwrap();
    let layer = need_layer(&needs, &ViewConfig::default());

    assert_eq!(layer.name, "Actual Need");
    assert_eq!(
        layer.points,
        vec![AlignedPoint::new(1, 5.0), AlignedPoint::new(2, 6.0)]
    );
}

#[test]
fn test_prediction_layer_unknown_key() {
    let needs = NeedSeries::new(vec![5.0]).unwrap();
    let result = prediction_layer(&needs, &PredictionSet::new(), 3, &ViewConfig::default());
    assert!(matches!(result, Err(ViewError::UnknownKey(3))));
}

#[test]
fn test_chart_spec_extends_axis_for_long_predictions() {
    let needs = NeedSeries::new(vec![1.0, 2.0, 3.0]).unwrap();
    let predictions =
        PredictionSet::from_pairs(vec![(1, vec![1.0]), (2, vec![1.0, 2.0, 3.0, 4.0, 5.0])])
            .unwrap();
    let config = ViewConfig::default();

    let hidden = ChartSpec::new(&config, &needs, &predictions, Vec::new()).unwrap();
    assert_eq!(hidden.x_upper_bound, 3);
    assert_eq!(hidden.x_axis_label, "Period");
    assert_eq!(hidden.y_axis_label, "Pieces");

    // 5 predictions against 3 periods: offset 2, last period 7
    let shown = ChartSpec::new(&config, &needs, &predictions, vec![1, 2]).unwrap();
    assert_eq!(shown.x_upper_bound, 7);

    assert!(ChartSpec::new(&config, &needs, &predictions, vec![9]).is_err());
}
