//! AWS Lambda handler for running wealth projections
//!
//! Accepts the form inputs as JSON and returns the full projection report
//! (assumptions, summary, yearly records and chart series).
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::Deserialize;
use wealth_projection::projection::{AnnuityTiming, ProjectionConfig};
use wealth_projection::report::ProjectionReport;
use wealth_projection::{AssumptionInputs, ProjectionError, ScenarioRunner};

/// Input for one projection; every field falls back to the form default
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub inputs: AssumptionInputs,

    /// "end" (default) or "begin" of each month
    pub contribution_timing: AnnuityTiming,
}

fn error_body(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Turn a request body into a status code and JSON body
fn handle_body(body: &str) -> (u16, String) {
    let request: ProjectionRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => return (400, error_body(&format!("Invalid JSON: {}", e))),
    };

    let runner = ScenarioRunner::with_config(ProjectionConfig {
        contribution_timing: request.contribution_timing,
    });
    let report = request
        .inputs
        .to_assumptions()
        .and_then(|assumptions| runner.run(assumptions))
        .and_then(|result| ProjectionReport::new(&result).to_json());

    match report {
        Ok(json) => (200, json),
        Err(e) => (status_for(&e), error_body(&e.to_string())),
    }
}

/// Bad assumptions are the caller's fault; anything else is ours
fn status_for(error: &ProjectionError) -> u16 {
    if error.is_input_error() {
        400
    } else {
        500
    }
}

fn json_response(status: u16, body: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(body))?)
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let (status, body) = handle_body(&body_str);
    log::info!("projection request answered {} in {:?}", status, start.elapsed());
    json_response(status, body)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
