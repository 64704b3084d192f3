//! Dedup backend endpoints
//!
//! - GET  /dedup/col/<col>/locrecids: filtered list of local record ids
//! - GET  /dedup/col/<col>/locrec/<id>: local record with possible matches
//! - POST /dedup/col/<col>/locrec/<id>: persist or clear the matched record
//! - POST /dedup/training/add: log a labeled training pair
//!
//! Failed calls return an error and leave client state untouched; the
//! caller decides how to surface it.

use dedup_common::{
    DedupError, EvaluationModel, LocalRecord, RecIdList, RecordFilter, Result, TrainingAck,
    TrainingExample, UpdateAck,
};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::PageContext;

/// Fetch the record id list of the collection.
///
/// `recid` centers the list on a given id, `next` is the pagination cursor
/// (rec id of the last currently loaded entry).
pub async fn fetch_rec_ids(
    ctx: &PageContext,
    filter: RecordFilter,
    recid: Option<&str>,
    next: Option<&str>,
) -> Result<RecIdList> {
    let url = rec_list_url(&ctx.col_name, filter, recid, next);
    let request = get_request(&url)?;
    fetch_json(request).await
}

/// Fetch a local record with its ranked possible matches.
pub async fn fetch_local_rec(
    ctx: &PageContext,
    rec_id: &str,
    model: EvaluationModel,
) -> Result<LocalRecord> {
    let url = local_rec_url(&ctx.col_name, rec_id, Some(model));
    let request = get_request(&url)?;
    let mut rec: LocalRecord = fetch_json(request).await?;
    // the payload does not carry its own id
    rec.rec_id = rec_id.to_string();
    Ok(rec)
}

/// Persist the matched record of a local record; `None` clears it.
pub async fn update_matched_record(
    ctx: &PageContext,
    rec_id: &str,
    matched_record: Option<&str>,
) -> Result<UpdateAck> {
    let url = local_rec_url(&ctx.col_name, rec_id, None);
    let body = serde_json::json!({ "matched_record": matched_record }).to_string();
    let request = post_request(&url, &body, &ctx.csrf_token)?;
    fetch_json(request).await
}

/// Log the current record pair as a labeled training example.
pub async fn add_training_example(
    ctx: &PageContext,
    example: &TrainingExample,
) -> Result<TrainingAck> {
    let body = serde_json::to_string(example)
        .map_err(|e| DedupError::Decode(e.to_string()))?;
    let request = post_request("/dedup/training/add", &body, &ctx.csrf_token)?;
    fetch_json(request).await
}

fn rec_list_url(
    col_name: &str,
    filter: RecordFilter,
    recid: Option<&str>,
    next: Option<&str>,
) -> String {
    let mut url = format!("/dedup/col/{}/locrecids", col_name);
    append_param(&mut url, "filter", filter.as_str());
    if let Some(recid) = recid {
        append_param(&mut url, "recid", recid);
    } else if let Some(next) = next {
        append_param(&mut url, "next", next);
    }
    url
}

fn local_rec_url(col_name: &str, rec_id: &str, model: Option<EvaluationModel>) -> String {
    let mut url = format!("/dedup/col/{}/locrec/{}", col_name, rec_id);
    if let Some(model) = model {
        append_param(&mut url, "selectedModel", model.as_str());
    }
    url
}

fn append_param(url: &mut String, key: &str, value: &str) {
    url.push(if url.contains('?') { '&' } else { '?' });
    url.push_str(key);
    url.push('=');
    url.push_str(value);
}

fn get_request(url: &str) -> Result<Request> {
    let mut opts = RequestInit::new();
    opts.method("GET");
    opts.mode(RequestMode::SameOrigin);

    Request::new_with_str_and_init(url, &opts).map_err(js_error)
}

fn post_request(url: &str, body: &str, csrf_token: &str) -> Result<Request> {
    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::SameOrigin);
    opts.body(Some(&JsValue::from_str(body)));

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;
    // required by the session layer for every mutating request
    request
        .headers()
        .set("X-CSRFToken", csrf_token)
        .map_err(js_error)?;
    Ok(request)
}

async fn fetch_json<T: DeserializeOwned>(request: Request) -> Result<T> {
    let window =
        web_sys::window().ok_or_else(|| DedupError::Network("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(DedupError::Status(resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| DedupError::Decode(e.to_string()))
}

fn js_error(value: JsValue) -> DedupError {
    DedupError::Network(format!("{:?}", value))
}
