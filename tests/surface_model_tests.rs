use xy_graph::api::{ChartSurface, DEFAULT_X_AXIS_ID, DEFAULT_Y_AXIS_ID, SurfaceConfig};
use xy_graph::core::{
    Axis, AxisId, DEFAULT_TRACE_COLORS, Orientation, Rgb, Trace, TraceId,
};
use xy_graph::host::NullHost;
use xy_graph::GraphError;

fn surface() -> ChartSurface<NullHost> {
    ChartSurface::with_default_axes(NullHost::default(), SurfaceConfig::new("  Padded  "))
        .expect("surface init")
}

fn trace(raw: u32, label: &str) -> Trace {
    Trace::new(TraceId::new(raw), label, DEFAULT_X_AXIS_ID, DEFAULT_Y_AXIS_ID)
}

#[test]
fn default_axes_register_vertical_before_horizontal() {
    let surface = surface();
    let ids: Vec<AxisId> = surface.axes().iter().map(Axis::id).collect();
    assert_eq!(ids, vec![DEFAULT_Y_AXIS_ID, DEFAULT_X_AXIS_ID]);

    let ordered: Vec<AxisId> = surface.axes_in_order().into_iter().map(Axis::id).collect();
    assert_eq!(ordered, vec![DEFAULT_X_AXIS_ID, DEFAULT_Y_AXIS_ID]);

    assert_eq!(surface.primary_x_axis().map(Axis::title), Some("X-Axis"));
    assert_eq!(surface.primary_y_axis().map(Axis::title), Some("Y-Axis"));
    assert_eq!(surface.title(), "Padded");
    assert!(surface.plot_area().has_grid(DEFAULT_X_AXIS_ID));
    assert!(surface.plot_area().has_grid(DEFAULT_Y_AXIS_ID));
}

#[test]
fn registering_an_axis_twice_is_rejected() {
    let mut surface = surface();
    let err = surface
        .add_axis(Axis::horizontal(DEFAULT_X_AXIS_ID, "Again"))
        .expect_err("duplicate");
    assert_eq!(err, GraphError::AxisAlreadyRegistered(DEFAULT_X_AXIS_ID));
    assert_eq!(surface.axes().len(), 2);
}

#[test]
fn removing_an_unknown_axis_is_an_error() {
    let mut surface = surface();
    let err = surface.remove_axis(AxisId::new(9)).expect_err("unknown");
    assert_eq!(err, GraphError::AxisNotRegistered(AxisId::new(9)));
}

#[test]
fn removing_an_axis_drops_its_legend_and_grid() {
    let mut surface = surface();
    surface.add_trace(trace(0, "a")).expect("add trace");
    assert!(surface.legends().get(DEFAULT_Y_AXIS_ID).is_some());

    let removed = surface.remove_axis(DEFAULT_Y_AXIS_ID).expect("remove");
    assert_eq!(removed.orientation(), Orientation::Vertical);
    assert!(surface.legends().is_empty());
    assert!(!surface.plot_area().has_grid(DEFAULT_Y_AXIS_ID));
    assert!(surface.trace(TraceId::new(0)).is_some());

    let (_, report) = surface.remove_trace(TraceId::new(0)).expect("remove trace");
    assert_eq!(report.applied.as_slice(), &[DEFAULT_X_AXIS_ID]);
    assert_eq!(
        report.skipped.as_slice(),
        &[(DEFAULT_Y_AXIS_ID, GraphError::AxisNotRegistered(DEFAULT_Y_AXIS_ID))]
    );
    assert!(!report.is_complete());
}

#[test]
fn trace_binding_is_best_effort() {
    let mut surface = surface();
    let report = surface
        .add_trace_to_axes(trace(0, "a"), None, Some(AxisId::new(5)))
        .expect("add trace");

    assert_eq!(report.applied.as_slice(), &[DEFAULT_X_AXIS_ID]);
    assert_eq!(report.skipped.len(), 1);
    assert!(!report.legend_changed);
    assert!(surface.legends().is_empty());
    assert_eq!(surface.traces_on_axis(DEFAULT_X_AXIS_ID), &[TraceId::new(0)]);
    assert_eq!(surface.trace(TraceId::new(0)).expect("trace").y_axis(), AxisId::new(5));
}

#[test]
fn wrong_orientation_is_reported_per_axis() {
    let mut surface = surface();
    let report = surface
        .add_trace_to_axes(trace(0, "a"), Some(DEFAULT_Y_AXIS_ID), None)
        .expect("add trace");

    assert_eq!(
        report.skipped.as_slice(),
        &[(
            DEFAULT_Y_AXIS_ID,
            GraphError::OrientationMismatch {
                axis: DEFAULT_Y_AXIS_ID,
                expected: Orientation::Horizontal,
            }
        )]
    );
    assert_eq!(surface.traces_on_axis(DEFAULT_Y_AXIS_ID), &[TraceId::new(0)]);
}

#[test]
fn duplicate_trace_ids_are_rejected() {
    let mut surface = surface();
    surface.add_trace(trace(0, "a")).expect("first");
    let err = surface.add_trace(trace(0, "b")).expect_err("duplicate");
    assert_eq!(err, GraphError::TraceAlreadyAttached(TraceId::new(0)));

    let err = surface.remove_trace(TraceId::new(3)).expect_err("unknown");
    assert_eq!(err, GraphError::TraceNotFound(TraceId::new(3)));
    assert_eq!(
        surface.notify_trace_data_changed(TraceId::new(3)),
        Err(GraphError::TraceNotFound(TraceId::new(3)))
    );
}

#[test]
fn legend_block_lives_while_its_axis_has_traces() {
    let mut surface = surface();
    let first = surface.add_trace(trace(0, "a")).expect("first");
    assert!(first.legend_changed);
    let second = surface.add_trace(trace(1, "b")).expect("second");
    assert!(!second.legend_changed);

    let block = surface.legends().get(DEFAULT_Y_AXIS_ID).expect("block");
    let labels: Vec<&str> = block.entries().iter().map(|entry| entry.label.as_str()).collect();
    assert_eq!(labels, vec!["a", "b"]);

    let (_, report) = surface.remove_trace(TraceId::new(0)).expect("remove a");
    assert!(!report.legend_changed);
    let (_, report) = surface.remove_trace(TraceId::new(1)).expect("remove b");
    assert!(report.legend_changed);
    assert!(surface.legends().is_empty());
    assert_eq!(surface.plot_area().trace_count(), 0);
}

#[test]
fn show_legend_applies_to_new_blocks() {
    let mut surface = surface();
    surface.set_show_legend(false);
    surface.add_trace(trace(0, "a")).expect("add trace");
    assert!(!surface.legends().get(DEFAULT_Y_AXIS_ID).expect("block").is_visible());

    surface.set_show_legend(true);
    assert!(surface.legends().get(DEFAULT_Y_AXIS_ID).expect("block").is_visible());
}

#[test]
fn traces_without_color_cycle_the_default_palette() {
    let mut surface = surface();
    surface.add_trace(trace(0, "a")).expect("a");
    surface
        .add_trace(trace(1, "b").with_color(Rgb::new(1, 2, 3)))
        .expect("b");
    surface.add_trace(trace(2, "c")).expect("c");

    let colors: Vec<Option<Rgb>> = surface.traces().map(Trace::color).collect();
    assert_eq!(
        colors,
        vec![
            Some(DEFAULT_TRACE_COLORS[0]),
            Some(Rgb::new(1, 2, 3)),
            Some(DEFAULT_TRACE_COLORS[2]),
        ]
    );
}

#[test]
fn axis_edits_mark_layout_dirty() {
    let mut surface = surface();
    surface
        .layout(xy_graph::core::Rect::new(0.0, 0.0, 100.0, 100.0))
        .expect("layout");
    assert!(!surface.needs_layout());

    let err = surface
        .update_axis(DEFAULT_X_AXIS_ID, |axis| axis.set_margin(-1.0))
        .expect("axis")
        .expect_err("negative margin");
    assert!(matches!(err, GraphError::InvalidData(_)));
    assert!(surface.needs_layout());

    assert_eq!(
        surface.update_axis(AxisId::new(9), |axis| axis.id()),
        Err(GraphError::AxisNotRegistered(AxisId::new(9)))
    );
}
