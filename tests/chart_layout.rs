use stock_sentiment_wasm::domain::chart::{Dataset, LineStyle};
use stock_sentiment_wasm::infrastructure::rendering::{
    PlotArea, value_bounds, x_positions, y_position,
};

const AREA: PlotArea = PlotArea { width: 640.0, height: 320.0, padding: 40.0 };

fn dataset(data: Vec<Option<f64>>) -> Dataset {
    Dataset::new("test".to_string(), data, LineStyle::close_price())
}

#[test]
fn bounds_span_all_datasets_and_skip_gaps() {
    let datasets =
        vec![dataset(vec![Some(1.0), None, Some(5.0)]), dataset(vec![Some(-2.0), Some(3.0)])];
    assert_eq!(value_bounds(&datasets), Some((-2.0, 5.0)));
}

#[test]
fn bounds_of_all_gaps_are_none() {
    assert_eq!(value_bounds(&[dataset(vec![None, None])]), None);
    assert_eq!(value_bounds(&[]), None);
}

#[test]
fn flat_series_gets_a_nonzero_range() {
    let (min, max) = value_bounds(&[dataset(vec![Some(7.0), Some(7.0)])]).unwrap();
    assert!(max > min);
    assert!(min < 7.0 && 7.0 < max);
}

#[test]
fn x_positions_are_evenly_spaced_across_the_inner_width() {
    let xs = x_positions(4, &AREA);
    assert_eq!(xs.len(), 4);
    assert_eq!(xs[0], AREA.padding);
    assert_eq!(*xs.last().unwrap(), AREA.width - AREA.padding);
    let step = xs[1] - xs[0];
    assert!((xs[2] - xs[1] - step).abs() < 1e-9);
}

#[test]
fn y_position_maps_larger_values_higher() {
    let top = y_position(10.0, 0.0, 10.0, &AREA);
    let bottom = y_position(0.0, 0.0, 10.0, &AREA);
    assert_eq!(top, AREA.padding);
    assert_eq!(bottom, AREA.height - AREA.padding);
    assert!(top < bottom);
}
