//! Unit tests for window placement across display configurations.

#[path = "../common/mod.rs"]
mod common;

use rstest::rstest;

use common::{display, FakeHost};
use tab_session_lite::services::geometry_resolver::{place_on_displays, GeometryResolver};
use tab_session_lite::types::host::{DisplayInfo, WindowPlacement};
use tab_session_lite::types::settings::GeometrySettings;

fn dual_monitor() -> Vec<DisplayInfo> {
    vec![
        display("laptop", true, 0, 0, 1440, 860),
        display("external", false, 1440, -200, 2560, 1400),
    ]
}

#[test]
fn test_position_on_secondary_display_is_kept() {
    let placement = place_on_displays(
        &dual_monitor(),
        &GeometrySettings::default(),
        Some(1600),
        Some(-100),
        Some(1800),
        Some(1000),
    );
    assert_eq!(
        placement,
        WindowPlacement {
            use_position: true,
            left: Some(1600),
            top: Some(-100),
            width: Some(1800),
            height: Some(1000),
        }
    );
}

#[test]
fn test_oversized_window_is_clamped_to_its_display() {
    let placement = place_on_displays(
        &dual_monitor(),
        &GeometrySettings::default(),
        Some(100),
        Some(100),
        Some(3000),
        Some(2000),
    );
    assert_eq!(placement.left, Some(100));
    assert_eq!(placement.width, Some(1440));
    assert_eq!(placement.height, Some(860));
}

#[test]
fn test_on_screen_position_without_saved_size_gets_default_size() {
    let placement = place_on_displays(
        &dual_monitor(),
        &GeometrySettings::default(),
        Some(200),
        Some(40),
        None,
        None,
    );
    assert_eq!(
        placement,
        WindowPlacement {
            use_position: true,
            left: Some(200),
            top: Some(40),
            width: Some(1280),
            height: Some(800),
        }
    );

    // Defaults are clamped to the display the window lands on.
    let small = vec![display("tablet", true, 0, 0, 1024, 700)];
    let placement = place_on_displays(&small, &GeometrySettings::default(), Some(0), Some(0), None, None);
    assert_eq!(placement.width, Some(1024));
    assert_eq!(placement.height, Some(700));
}

#[rstest]
#[case(Some(-5000), Some(0))]
#[case(Some(0), Some(5000))]
#[case(Some(4010), Some(0))]
#[case(None, None)]
#[case(Some(10), None)]
fn test_unplaceable_position_falls_back_to_primary(#[case] left: Option<i32>, #[case] top: Option<i32>) {
    let placement = place_on_displays(
        &dual_monitor(),
        &GeometrySettings::default(),
        left,
        top,
        None,
        None,
    );
    assert_eq!(
        placement,
        WindowPlacement {
            use_position: true,
            left: Some(50),
            top: Some(50),
            width: Some(1280),
            height: Some(800),
        }
    );
}

#[test]
fn test_fallback_without_primary_uses_first_display() {
    let displays = vec![
        display("a", false, -1920, 0, 1920, 1080),
        display("b", false, 0, 0, 1024, 768),
    ];
    let placement = place_on_displays(
        &displays,
        &GeometrySettings::default(),
        Some(9000),
        Some(9000),
        Some(1600),
        Some(900),
    );
    assert_eq!(placement.left, Some(-1920 + 50));
    assert_eq!(placement.top, Some(50));
    assert_eq!(placement.width, Some(1600));
    assert_eq!(placement.height, Some(900));
}

#[test]
fn test_slack_boundary() {
    let displays = vec![display("main", true, 0, 0, 1920, 1080)];
    let settings = GeometrySettings::default();

    let inside = place_on_displays(&displays, &settings, Some(-10), Some(-10), None, None);
    assert_eq!(inside.left, Some(-10));

    let outside = place_on_displays(&displays, &settings, Some(-11), Some(0), None, None);
    assert_eq!(outside.left, Some(50));
}

#[test]
fn test_custom_fallback_settings() {
    let settings = GeometrySettings {
        slack: 0,
        fallback_offset: 0,
        default_width: 1024,
        default_height: 768,
    };
    let placement = place_on_displays(&dual_monitor(), &settings, None, None, None, None);
    assert_eq!(placement.left, Some(0));
    assert_eq!(placement.width, Some(1024));
    assert_eq!(placement.height, Some(768));
}

#[tokio::test]
async fn test_resolver_queries_host_displays() {
    let host = FakeHost::new();
    host.state().displays = dual_monitor();

    let placement = GeometryResolver::new(&host, GeometrySettings::default())
        .resolve(Some(2000), Some(0), Some(800), Some(600))
        .await;
    assert_eq!(placement.left, Some(2000));
    assert!(placement.use_position);
}

#[tokio::test]
async fn test_resolver_tolerates_display_failure() {
    let host = FakeHost::new();
    host.state().displays_unavailable = true;

    let placement = GeometryResolver::new(&host, GeometrySettings::default())
        .resolve(Some(0), Some(0), Some(800), Some(600))
        .await;
    assert_eq!(placement, WindowPlacement::host_default());
    assert!(!placement.use_position);
}
