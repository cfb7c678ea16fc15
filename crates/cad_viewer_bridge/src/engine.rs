//! `CadEngine` implementation backed by the viewer's JSON-RPC surface.
//!
//! One RPC method per capability. Domain-level refusals arrive as JSON-RPC
//! error envelopes and map to `EngineError::Rejected`; anything that stops
//! the request from completing maps to `EngineError::Unavailable`.

use crate::{BridgeError, ViewerClient};
use async_trait::async_trait;
use cad_command_core::{
    Axis, CadEngine, EngineError, EngineResult, MaterialParams, ToggleAction, TransformMode,
};
use serde_json::json;

impl ViewerClient {
    async fn call(&self, method: &str, params: Option<serde_json::Value>) -> EngineResult {
        match self.send_rpc(method, params).await {
            Ok(_) => Ok(()),
            Err(BridgeError::Rpc { message, .. }) => Err(EngineError::rejected(message)),
            Err(err) => Err(EngineError::Unavailable(err.to_string())),
        }
    }
}

#[async_trait]
impl CadEngine for ViewerClient {
    async fn rotate_axis(&self, axis: Axis, degrees: f64) -> EngineResult {
        self.call(
            "viewer.rotate_axis",
            Some(json!({ "axis": axis.as_str(), "degrees": degrees })),
        )
        .await
    }

    async fn scale(&self, factor: f64) -> EngineResult {
        self.call("viewer.scale", Some(json!({ "factor": factor }))).await
    }

    async fn translate(&self, x: f64, y: f64, z: f64) -> EngineResult {
        self.call("viewer.translate", Some(json!({ "x": x, "y": y, "z": z })))
            .await
    }

    async fn set_color(&self, hex: &str) -> EngineResult {
        self.call("viewer.set_color", Some(json!({ "hex": hex }))).await
    }

    async fn select_part(&self, name: &str) -> EngineResult {
        self.call("viewer.select_part", Some(json!({ "name": name })))
            .await
    }

    async fn set_transform_mode(&self, mode: TransformMode) -> EngineResult {
        self.call(
            "viewer.set_transform_mode",
            Some(json!({ "mode": mode.as_str() })),
        )
        .await
    }

    async fn set_material(&self, params: MaterialParams) -> EngineResult {
        self.call(
            "viewer.set_material",
            Some(serde_json::to_value(params).map_err(|e| EngineError::Unavailable(e.to_string()))?),
        )
        .await
    }

    async fn toggle(&self, action: ToggleAction) -> EngineResult {
        self.call("viewer.toggle", Some(json!({ "action": action.as_str() })))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ViewerConfig;

    #[tokio::test]
    async fn test_unreachable_viewer_maps_to_unavailable() {
        // Nothing listens on this port; the capability must report
        // Unavailable rather than surfacing a raw transport fault.
        let config = ViewerConfig::new("http://127.0.0.1:1", std::time::Duration::from_millis(200));
        let client = ViewerClient::connect(config).unwrap();
        let result = client.scale(2.0).await;
        assert!(matches!(result, Err(EngineError::Unavailable(_))));
    }

    #[test]
    fn test_material_params_serialize_for_rpc() {
        let params = MaterialParams {
            roughness: Some(0.25),
            metalness: None,
            opacity: Some(1.0),
        };
        let wire = serde_json::to_value(params).unwrap();
        assert_eq!(wire, json!({ "roughness": 0.25, "opacity": 1.0 }));
    }
}
