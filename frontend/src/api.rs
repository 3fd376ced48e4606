//! Calls to the flightmates server.
//!
//! Errors are returned as display strings: the server already reduces its
//! failures to a short `{"error": ...}` message meant for the user.

use common::requests::ErrorBody;
use common::FlightRecord;
use gloo_net::http::{Request, Response};

const FLIGHTS_API: &str = "/api/flights";

pub async fn fetch_flights() -> Result<Vec<FlightRecord>, String> {
    let response = Request::get(FLIGHTS_API)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(error_message(&response).await);
    }
    response
        .json::<Vec<FlightRecord>>()
        .await
        .map_err(|e| e.to_string())
}

pub async fn submit_flight(record: &FlightRecord) -> Result<(), String> {
    let response = Request::post(FLIGHTS_API)
        .json(record)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.ok() {
        Ok(())
    } else {
        Err(error_message(&response).await)
    }
}

async fn error_message(response: &Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("Request failed with status {status}"),
    }
}
