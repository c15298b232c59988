//! Shared HTTP helpers for the items behaviour tests.

use actix_web::http::{Method, header};
use awc::Client;
use items_api::domain::TRACE_ID_HEADER;
use serde_json::Value;

use crate::harness::{SharedWorld, with_world_async};

pub(crate) struct JsonRequest<'a> {
    pub(crate) method: Method,
    pub(crate) path: &'a str,
    pub(crate) payload: Option<Value>,
}

struct CapturedResponse {
    status: u16,
    trace_id: Option<String>,
    body: Value,
}

fn record_response(world: &SharedWorld, captured: CapturedResponse) {
    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(captured.status);
    ctx.last_trace_id = captured.trace_id;
    ctx.last_body = Some(captured.body);
}

pub(crate) fn perform_json_request(world: &SharedWorld, request: JsonRequest<'_>) {
    let captured = with_world_async(world, |base_url| async move {
        let builder =
            Client::default().request(request.method, format!("{base_url}{}", request.path));
        let mut response = match request.payload {
            Some(payload) => builder.send_json(&payload).await.expect("json request"),
            None => builder.send().await.expect("request"),
        };
        let status = response.status().as_u16();
        let trace_id = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_owned());
        let body = response.body().await.expect("body");
        let json: Value = serde_json::from_slice(&body).expect("json body");
        CapturedResponse {
            status,
            trace_id,
            body: json,
        }
    });

    record_response(world, captured);
}

/// Send a syntactically invalid JSON body with a JSON content type.
pub(crate) fn perform_malformed_request(world: &SharedWorld, method: Method, path: &str) {
    let captured = with_world_async(world, |base_url| async move {
        let mut response = Client::default()
            .request(method, format!("{base_url}{path}"))
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .send_body("{not valid json")
            .await
            .expect("raw request");
        let status = response.status().as_u16();
        let trace_id = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_owned());
        let body = response.body().await.expect("body");
        let json: Value = serde_json::from_slice(&body).expect("json body");
        CapturedResponse {
            status,
            trace_id,
            body: json,
        }
    });

    record_response(world, captured);
}
