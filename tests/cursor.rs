use egui::Pos2;
use roundplot::data::formatters::default_date_format;
use roundplot::{circular_distance, FormatterOverrides, Observation, RoundPlot, RoundPlotParams};

fn obs(points: &[(f64, f64)]) -> Vec<Observation> {
    points.iter().map(|&(d, v)| Observation::new(d, v)).collect()
}

fn close(a: Pos2, b: Pos2) -> bool {
    (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
}

#[test]
fn tie_goes_to_the_first_observation() {
    // One degree per second; observations at 85°, 95° and 270°.
    let p = RoundPlot::new(
        RoundPlotParams::default()
            .with_alpha0(85.0)
            .with_time_in_clock(360_000.0)
            .with_data(obs(&[(0.0, 1.0), (10_000.0, 2.0), (185_000.0, 3.0)])),
    );
    assert_eq!(p.date_to_angle(10_000.0), 95.0);
    assert_eq!(p.date_to_angle(185_000.0), 270.0);
    let nearest = p.nearest_to_angle(90.0).unwrap();
    assert_eq!(nearest.date, 0.0);
}

#[test]
fn nearest_search_measures_unsigned_angle_difference() {
    // Observations at 0° and 300°. The distance is |a - angle| modulo 360, so
    // a pointer at -50° is 50° from 0° but 350° from 300°.
    let p = RoundPlot::new(
        RoundPlotParams::default()
            .with_time_in_clock(360_000.0)
            .with_data(obs(&[(0.0, 1.0), (300_000.0, 2.0)])),
    );
    assert_eq!(p.nearest_to_angle(-10.0).unwrap().date, 0.0);
    assert_eq!(p.nearest_to_angle(-50.0).unwrap().date, 0.0);
    assert_eq!(p.nearest_to_angle(290.0).unwrap().date, 300_000.0);
    assert_eq!(circular_distance(0.0, -50.0), 50.0);
    assert_eq!(circular_distance(300.0, -50.0), 350.0);
    assert_eq!(circular_distance(350.0, 5.0), 345.0);
    assert_eq!(circular_distance(-90.0, 270.0), 0.0);
}

#[test]
fn new_data_moves_cursor_to_last_observation() {
    let t0 = 1_700_000_000_000.0;
    let mut p = RoundPlot::new(
        RoundPlotParams::default()
            .with_time_in_clock(3_600_000.0)
            .with_data(obs(&[(t0, 0.0), (t0 + 1_800_000.0, 10.0)])),
    );
    assert_eq!(p.selected().map(|o| o.date), Some(t0 + 1_800_000.0));
    let (from, to) = p.scene().cursor();
    assert!(close(from, Pos2::new(250.0, 340.0)), "from = {from:?}");
    assert!(close(to, Pos2::new(250.0, 500.0)), "to = {to:?}");
    assert_eq!(p.scene().value_legend().text, "10");
    assert_eq!(
        p.scene().date_legend().text,
        default_date_format(t0 + 1_800_000.0)
    );

    p.set_data(obs(&[(t0, 2.0), (t0 + 900_000.0, 4.0), (t0 + 1_000.0, 3.0)]));
    assert_eq!(p.selected().map(|o| o.value), Some(3.0));
}

#[test]
fn empty_data_without_cursor_move_keeps_cursor() {
    let mut p = RoundPlot::new(
        RoundPlotParams::default().with_data(obs(&[(0.0, 1.0), (1_000.0, 2.0)])),
    );
    let before = p.scene().cursor();
    p.set_data_with_cursor(Vec::new(), false);
    assert_eq!(p.scene().cursor(), before);
    assert_eq!(p.selected().map(|o| o.date), Some(1_000.0));
    assert_eq!(p.d0(), 0.0);
}

#[test]
fn cursor_move_on_empty_data_is_ignored() {
    let mut p = RoundPlot::default();
    let before = p.scene().cursor();
    p.set_data_with_cursor(Vec::new(), true);
    assert_eq!(p.scene().cursor(), before);
    assert!(p.selected().is_none());
}

#[test]
fn pointer_angle_uses_twelve_o_clock_as_zero() {
    let p = RoundPlot::default();
    assert!(p.pointer_angle(Pos2::new(250.0, 0.0)).abs() < 1e-9);
    assert!((p.pointer_angle(Pos2::new(500.0, 250.0)) - 90.0).abs() < 1e-9);
    assert!((p.pointer_angle(Pos2::new(250.0, 500.0)) - 180.0).abs() < 1e-9);
    assert!((p.pointer_angle(Pos2::new(0.0, 250.0)) + 90.0).abs() < 1e-9);
}

#[test]
fn pointer_move_selects_nearest_and_updates_legends() {
    // Quarter turn per 3 hours on the default 12 h dial.
    let h = 3_600_000.0;
    let mut p = RoundPlot::new(RoundPlotParams::default().with_data(obs(&[
        (0.0, 1.0),
        (3.0 * h, 7.0),
        (6.0 * h, 4.0),
    ])));
    let picked = p.handle_pointer_move(Pos2::new(480.0, 240.0)).unwrap();
    assert_eq!(picked.date, 3.0 * h);
    assert_eq!(p.scene().value_legend().text, "7");
    let (_, to) = p.scene().cursor();
    assert!(close(to, Pos2::new(500.0, 250.0)), "to = {to:?}");
}

#[test]
fn pointer_move_on_empty_plot_does_nothing() {
    let mut p = RoundPlot::default();
    assert!(p.handle_pointer_move(Pos2::new(10.0, 10.0)).is_none());
    assert!(p.handle_click());
}

#[test]
fn custom_formatters_drive_the_legends() {
    let fmt = FormatterOverrides::default()
        .with_date_format(|d| format!("t={d}"))
        .with_value_format(|v| format!("{v:.1} °C"))
        .with_value_to_color(|_, _| egui::Color32::BLUE);
    let p = RoundPlot::new(
        RoundPlotParams::default()
            .with_formatters(fmt)
            .with_data(obs(&[(0.0, 20.0), (60_000.0, 21.34)])),
    );
    assert_eq!(p.scene().date_legend().text, "t=60000");
    assert_eq!(p.scene().value_legend().text, "21.3 °C");
    assert_eq!(p.scene().value_legend().fill.target(), egui::Color32::BLUE);
    assert!(p
        .scene()
        .bars()
        .iter()
        .all(|b| b.color.target() == egui::Color32::BLUE));
}
