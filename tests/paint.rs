use egui::Color32;
use roundplot::{BarSpec, DrawingSurface, Observation, RoundPlot, RoundPlotParams};

fn obs(points: &[(f64, f64)]) -> Vec<Observation> {
    points.iter().map(|&(d, v)| Observation::new(d, v)).collect()
}

fn bar_dates(p: &RoundPlot) -> Vec<f64> {
    p.scene().bars().iter().map(|b| b.date).collect()
}

#[test]
fn window_keeps_observations_within_one_turn_of_the_last() {
    let p = RoundPlot::new(
        RoundPlotParams::default()
            .with_time_in_clock(1_000.0)
            .with_data(obs(&[(0.0, 1.0), (600.0, 2.0), (1_500.0, 3.0)])),
    );
    assert_eq!(bar_dates(&p), vec![600.0, 1_500.0]);
    assert!(p.scene().bar(Observation::new(0.0, 1.0).key()).is_none());
}

#[test]
fn observation_exactly_one_turn_old_is_dropped() {
    let p = RoundPlot::new(
        RoundPlotParams::default()
            .with_time_in_clock(1_000.0)
            .with_data(obs(&[(500.0, 1.0), (1_499.0, 2.0), (1_500.0, 3.0)])),
    );
    assert_eq!(bar_dates(&p), vec![1_499.0, 1_500.0]);
}

#[test]
fn three_reference_circles_with_gradient() {
    let p = RoundPlot::new(RoundPlotParams::default().with_data(obs(&[(0.0, 1.0), (1.0, 2.0)])));
    let circles = p.scene().circles();
    assert_eq!(circles.len(), 3);
    let radii: Vec<f64> = circles.iter().map(|c| c.radius).collect();
    assert_eq!(radii, vec![100.0, 175.0, 250.0]);
    assert_eq!(circles[0].stroke, Color32::from_rgb(0, 80, 80));
    assert_eq!(circles[1].stroke, Color32::from_rgb(128, 80, 80));
    assert_eq!(circles[2].stroke, Color32::from_rgb(255, 80, 80));
}

#[test]
fn repainting_reconciles_instead_of_accumulating() {
    let mut p = RoundPlot::new(
        RoundPlotParams::default().with_data(obs(&[(0.0, 1.0), (1_000.0, 4.0), (2_000.0, 2.0)])),
    );
    p.paint();
    let stats = p.paint_value_bars();
    assert_eq!(stats.entered, 0);
    assert_eq!(stats.updated, 3);
    assert_eq!(stats.exited, 0);
    assert_eq!(p.scene().bars().len(), 3);
    assert_eq!(p.scene().circles().len(), 3);
}

#[test]
fn replacing_data_removes_stale_bars() {
    let mut p = RoundPlot::new(
        RoundPlotParams::default().with_data(obs(&[(0.0, 1.0), (1_000.0, 4.0)])),
    );
    p.set_data(obs(&[(1_000.0, 3.0), (2_000.0, 5.0), (3_000.0, 1.0)]));
    assert_eq!(bar_dates(&p), vec![1_000.0, 2_000.0, 3_000.0]);

    p.set_data_with_cursor(Vec::new(), false);
    assert!(p.scene().bars().is_empty());
    assert_eq!(p.scene().circles().len(), 3);
}

#[test]
fn shared_timestamp_keeps_one_bar_with_the_later_value() {
    let mut p = RoundPlot::new(RoundPlotParams::default().with_data(obs(&[
        (0.0, 0.0),
        (1_000.0, 2.0),
        (1_000.0, 5.0),
        (2_000.0, 10.0),
    ])));
    assert_eq!(bar_dates(&p), vec![0.0, 1_000.0, 2_000.0]);
    let bar = p.scene().bar(Observation::new(1_000.0, 5.0).key()).unwrap();
    assert_eq!(bar.outer_radius.target(), 175.0);
    assert_eq!(bar.color.target(), Color32::from_rgb(128, 128, 0));

    let stats = p.paint_value_bars();
    assert_eq!(stats.entered, 0);
    assert_eq!(stats.updated, 3);
    assert_eq!(p.scene().bars().len(), 3);
}

#[test]
fn join_counts_bars_dropped_from_the_window() {
    let mut p = RoundPlot::new(
        RoundPlotParams::default().with_data(obs(&[(0.0, 1.0), (1_000.0, 4.0), (2_000.0, 2.0)])),
    );
    let kept = BarSpec {
        key: Observation::new(2_000.0, 2.0).key(),
        date: 2_000.0,
        angle: 0.0,
        inner_radius: 100.0,
        outer_radius: 150.0,
        color: Color32::RED,
    };
    let stats = p.surface_mut().join_bars(&[kept]);
    assert_eq!(stats.entered, 0);
    assert_eq!(stats.updated, 1);
    assert_eq!(stats.exited, 2);
    assert_eq!(bar_dates(&p), vec![2_000.0]);
}

#[test]
fn entering_bars_grow_out_of_the_dial() {
    let mut p = RoundPlot::new(RoundPlotParams::default());
    p.surface_mut().set_clock(10.0);
    p.set_data(obs(&[(0.0, 0.0), (60_000.0, 10.0)]));

    let bar = p.scene().bar(Observation::new(60_000.0, 10.0).key()).unwrap();
    assert_eq!(bar.inner_radius, 100.0);
    assert_eq!(bar.outer_radius.sample(10.0), 100.0);
    assert_eq!(bar.outer_radius.target(), 250.0);
    assert_eq!(bar.color.target(), Color32::from_rgb(255, 0, 0));
    assert!(p.scene().is_animating(10.1));
    assert!(!p.scene().is_animating(11.0));

    let first = p.scene().bar(Observation::new(0.0, 0.0).key()).unwrap();
    assert_eq!(first.color.target(), Color32::from_rgb(0, 255, 0));
    assert_eq!(first.angle, 0.0);
}

#[test]
fn updated_bars_animate_from_the_displayed_length() {
    let mut p = RoundPlot::new(
        RoundPlotParams::default().with_data(obs(&[(0.0, 0.0), (1_000.0, 10.0)])),
    );
    // Let the entering transition finish, then halve the maximum.
    p.surface_mut().set_clock(5.0);
    p.set_data(obs(&[(0.0, 0.0), (1_000.0, 5.0), (2_000.0, 10.0)]));
    let bar = p.scene().bar(Observation::new(1_000.0, 5.0).key()).unwrap();
    assert_eq!(bar.outer_radius.sample(5.0), 250.0);
    assert_eq!(bar.outer_radius.target(), 175.0);
}

#[test]
fn empty_plot_has_no_bars() {
    let p = RoundPlot::default();
    assert!(p.scene().bars().is_empty());
    assert_eq!(p.scene().circles().len(), 3);
    assert!(p.visible_observations().next().is_none());
}
