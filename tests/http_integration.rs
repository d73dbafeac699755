// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP transport and controllers using wiremock.

use std::time::Duration;

use hue_bridge_lib::device::{list, resolve};
use hue_bridge_lib::prelude::*;
use hue_bridge_lib::{DeviceKind, Error, TransportError};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn endpoint(server: &MockServer) -> BridgeEndpoint {
    BridgeEndpoint::new(server.uri().replace("http://", ""), "testuser").with_scheme(Scheme::Http)
}

fn transport() -> HttpTransport {
    HttpConfig::new()
        .with_timeout(Duration::from_secs(2))
        .into_transport()
        .unwrap()
}

fn success(address: &str, value: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!([{"success": {address: value}}]))
}

// ============================================================================
// Light Tests
// ============================================================================

mod light {
    use super::*;

    #[tokio::test]
    async fn reads_brightness_from_state() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/testuser/lights/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Desk",
                "state": {"on": true, "bri": 254, "reachable": true}
            })))
            .expect(3)
            .mount(&mock_server)
            .await;

        let light = Light::new(1, endpoint(&mock_server), transport());

        assert!(light.is_on().await.unwrap());
        assert_eq!(light.brightness().await.unwrap(), Brightness::MAX);
        assert_eq!(light.name().await.unwrap(), "Desk");
    }

    #[tokio::test]
    async fn set_brightness_puts_native_value() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/testuser/lights/1/state"))
            .and(body_json(json!({"bri": 127})))
            .respond_with(success("/lights/1/state/bri", json!(127)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let light = Light::new(1, endpoint(&mock_server), transport());
        light.set_brightness(0.5).await.unwrap();
    }

    #[tokio::test]
    async fn set_color_sends_combined_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/testuser/lights/2/state"))
            .and(body_json(json!({"hue": 8456, "sat": 154, "bri": 254})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"success": {"/lights/2/state/hue": 8456}},
                {"success": {"/lights/2/state/sat": 154}},
                {"success": {"/lights/2/state/bri": 254}}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let light = Light::new(2, endpoint(&mock_server), transport());
        light
            .set_color(RgbColor::new(255, 220, 100))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn from_name_resolves_then_controls() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/testuser/lights"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "1": {"name": "Desk"},
                "3": {"name": "Hallway"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/api/testuser/lights/3/state"))
            .and(body_json(json!({"alert": "lselect"})))
            .respond_with(success("/lights/3/state/alert", json!("lselect")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let light = Light::from_name("Hallway", endpoint(&mock_server), transport())
            .await
            .unwrap();
        light.alert_long().await.unwrap();
    }
}

// ============================================================================
// Group Tests
// ============================================================================

mod group {
    use super::*;

    #[tokio::test]
    async fn writes_go_to_action() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/testuser/groups/4/action"))
            .and(body_json(json!({"ct": 500})))
            .respond_with(success("/groups/4/action/ct", json!(500)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let group = Group::new(4, endpoint(&mock_server), transport());
        group.set_color_temperature(600).await.unwrap();
    }

    #[tokio::test]
    async fn reads_summary_flags() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/testuser/groups/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Living room",
                "state": {"any_on": true, "all_on": false},
                "action": {"on": true, "bri": 100}
            })))
            .mount(&mock_server)
            .await;

        let group = Group::new(4, endpoint(&mock_server), transport());
        assert!(group.is_any_on().await.unwrap());
        assert!(!group.is_all_on().await.unwrap());
        assert_eq!(group.brightness().await.unwrap(), Brightness::from_native(100));
    }
}

// ============================================================================
// Sensor Tests
// ============================================================================

mod sensor {
    use super::*;

    #[tokio::test]
    async fn set_sensitivity_reads_max_then_writes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/testuser/sensors/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "config": {"on": true, "sensitivity": 0, "sensitivitymax": 2}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/api/testuser/sensors/7/config"))
            .and(body_json(json!({"sensitivity": 2})))
            .respond_with(success("/sensors/7/config/sensitivity", json!(2)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let sensor = Sensor::new(7, endpoint(&mock_server), transport());
        assert_eq!(sensor.set_sensitivity(5).await.unwrap(), 2);

        let requests = mock_server.received_requests().await.unwrap();
        let calls: Vec<_> = requests
            .iter()
            .map(|r| (r.method.to_string(), r.url.path().to_string()))
            .collect();
        assert_eq!(
            calls,
            vec![
                ("GET".to_string(), "/api/testuser/sensors/7".to_string()),
                ("PUT".to_string(), "/api/testuser/sensors/7/config".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn presence_and_battery() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/testuser/sensors/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "state": {"presence": false},
                "config": {"battery": 64}
            })))
            .mount(&mock_server)
            .await;

        let sensor = Sensor::new(7, endpoint(&mock_server), transport());
        assert!(!sensor.presence().await.unwrap());
        assert_eq!(sensor.battery().await.unwrap(), 64);
    }
}

// ============================================================================
// Resolver Tests
// ============================================================================

mod resolver {
    use super::*;

    #[tokio::test]
    async fn first_match_and_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/testuser/sensors"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "1": {"name": "Daylight"},
                "5": {"name": "Motion"},
                "6": {"name": "Motion"}
            })))
            .mount(&mock_server)
            .await;

        let endpoint = endpoint(&mock_server);
        let transport = transport();

        let handle = resolve(&transport, &endpoint, DeviceKind::Sensor, "Motion")
            .await
            .unwrap();
        assert_eq!(handle.index(), 5);

        let err = resolve(&transport, &endpoint, DeviceKind::Sensor, "Missing")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DeviceNotFound { .. }));

        let all = list(&transport, &endpoint, DeviceKind::Sensor).await.unwrap();
        let names: Vec<_> = all.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Daylight", "Motion", "Motion"]);
    }
}

// ============================================================================
// Error Tests
// ============================================================================

mod errors {
    use super::*;

    #[tokio::test]
    async fn bridge_error_is_reported() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/testuser/lights/9/state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "error": {
                    "type": 3,
                    "address": "/lights/9/state",
                    "description": "resource, /lights/9/state, not available"
                }
            }])))
            .mount(&mock_server)
            .await;

        let light = Light::new(9, endpoint(&mock_server), transport());
        let err = light.turn_on().await.unwrap_err();

        let Error::Bridge(bridge) = err else {
            panic!("expected bridge error, got {err:?}");
        };
        assert_eq!(bridge.error_type(), Some(3));
        assert_eq!(bridge.address(), Some("/lights/9/state"));
    }

    #[tokio::test]
    async fn non_json_error_status_is_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&mock_server)
            .await;

        let light = Light::new(1, endpoint(&mock_server), transport());
        let err = light.is_on().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Transport(TransportError::Status { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn malformed_body_is_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&mock_server)
            .await;

        let light = Light::new(1, endpoint(&mock_server), transport());
        let err = light.is_on().await.unwrap_err();
        assert!(matches!(err, Error::Transport(TransportError::Json(_))));
    }

    #[tokio::test]
    async fn missing_field_is_not_a_bridge_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"state": {"on": true}})))
            .mount(&mock_server)
            .await;

        let light = Light::new(1, endpoint(&mock_server), transport());
        let err = light.hue().await.unwrap_err();
        assert!(matches!(err, Error::FieldMissing(_)));
    }

    #[tokio::test]
    async fn timeout_is_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"state": {"on": true}}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let transport = HttpConfig::new()
            .with_timeout(Duration::from_millis(50))
            .into_transport()
            .unwrap();
        let light = Light::new(1, endpoint(&mock_server), transport);

        let err = light.is_on().await.unwrap_err();
        assert!(matches!(err, Error::Transport(TransportError::Http(_))));
    }
}
