use xy_graph::api::{ChartSurface, SurfaceConfig};
use xy_graph::host::NullHost;
use xy_graph::layout::LayoutTuning;
use xy_graph::range::{STAGGER_GAP_RATIO, StaggerTuning};
use xy_graph::GraphError;

#[test]
fn config_json_fills_missing_fields_with_defaults() {
    let config: SurfaceConfig =
        serde_json::from_str(r#"{"title":"Sensors","layout":{"gap_px":4.0}}"#).expect("parse");

    assert_eq!(config.title, "Sensors");
    assert!(config.show_title);
    assert!(config.show_legend);
    assert!(config.plot_area_visible);
    assert_eq!(config.layout.gap_px, 4.0);
    assert_eq!(config.layout.edge_inset_px, 1.0);
    assert_eq!(config.stagger.gap_ratio, STAGGER_GAP_RATIO);
    assert_eq!(config.history_limit, None);
}

#[test]
fn config_survives_json_round_trip() {
    let config = SurfaceConfig::new("Round trip")
        .with_show_legend(false)
        .with_history_limit(16)
        .with_stagger_tuning(StaggerTuning { gap_ratio: 0.25 });
    let json = serde_json::to_string(&config).expect("serialize");
    let parsed: SurfaceConfig = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn invalid_tuning_is_rejected_at_construction() {
    let bad_gap = SurfaceConfig::default().with_layout_tuning(LayoutTuning {
        gap_px: -2.0,
        ..LayoutTuning::default()
    });
    assert!(matches!(
        ChartSurface::new(NullHost::default(), bad_gap),
        Err(GraphError::InvalidData(_))
    ));

    let bad_ratio = SurfaceConfig::default()
        .with_stagger_tuning(StaggerTuning { gap_ratio: f64::NAN });
    assert!(ChartSurface::new(NullHost::default(), bad_ratio).is_err());

    let zero_history = SurfaceConfig::default().with_history_limit(0);
    assert!(ChartSurface::new(NullHost::default(), zero_history).is_err());
}

#[test]
fn custom_gap_spaces_the_title() {
    let config = SurfaceConfig::new("Gap").with_layout_tuning(LayoutTuning {
        gap_px: 10.0,
        ..LayoutTuning::default()
    });
    let mut surface = ChartSurface::new(NullHost::default(), config).expect("surface init");
    let layout = surface
        .layout(xy_graph::core::Rect::new(0.0, 0.0, 200.0, 100.0))
        .expect("layout");
    assert_eq!(layout.residual.y, 28.0);
}
