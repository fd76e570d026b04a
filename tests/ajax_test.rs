//! Request helper tests (XHR callbacks + async ApiClient)
//!
//! The JSON fixtures are `data:` URLs; missing paths are answered with 404 by
//! the wasm-bindgen test server.
//!
//! **Run with**: `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use jfast::{ajax, AjaxOptions, ApiClient, JfastError, ResponseBody};
use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::XmlHttpRequest;

wasm_bindgen_test_configure!(run_in_browser);

const JSON_URL: &str = "data:application/json,%7B%22id%22%3A7%2C%22name%22%3A%22jfast%22%7D";
const TEXT_URL: &str = "data:text/plain,hello%20world";
const MISSING_URL: &str = "/jfast-missing-fixture.json";

#[derive(Debug, Default)]
struct Outcome {
    success: Vec<(ResponseBody, u16)>,
    error: Vec<(u16, String)>,
    ready_state_before_send: Option<u16>,
}

fn tracked(url: &str, outcome: &Rc<RefCell<Outcome>>) -> AjaxOptions {
    let on_before = outcome.clone();
    let on_success = outcome.clone();
    let on_error = outcome.clone();
    AjaxOptions::new(url)
        .before_send(move |xhr| on_before.borrow_mut().ready_state_before_send = Some(xhr.ready_state()))
        .success(move |body, status, _xhr| on_success.borrow_mut().success.push((body, status)))
        .error(move |_xhr, status, text| on_error.borrow_mut().error.push((status, text)))
}

async fn wait_for_completion(outcome: &Rc<RefCell<Outcome>>) {
    for _ in 0..100 {
        {
            let outcome = outcome.borrow();
            if !outcome.success.is_empty() || !outcome.error.is_empty() {
                return;
            }
        }
        TimeoutFuture::new(20).await;
    }
}

#[wasm_bindgen_test]
async fn test_ajax_success_parses_json_once() {
    let outcome = Rc::new(RefCell::new(Outcome::default()));
    ajax(tracked(JSON_URL, &outcome)).unwrap();

    // asíncrono: nada antes de volver al event loop
    assert!(outcome.borrow().success.is_empty());

    wait_for_completion(&outcome).await;
    TimeoutFuture::new(50).await;

    let outcome = outcome.borrow();
    assert_eq!(outcome.ready_state_before_send, Some(1));
    assert_eq!(outcome.success.len(), 1);
    assert!(outcome.error.is_empty());

    let (body, status) = &outcome.success[0];
    assert_eq!(*status, 200);
    assert_eq!(body.as_json(), Some(&serde_json::json!({"id": 7, "name": "jfast"})));
}

#[wasm_bindgen_test]
async fn test_ajax_non_json_falls_back_to_text() {
    let outcome = Rc::new(RefCell::new(Outcome::default()));
    ajax(tracked(TEXT_URL, &outcome)).unwrap();
    wait_for_completion(&outcome).await;

    let outcome = outcome.borrow();
    assert_eq!(outcome.success.len(), 1);
    assert_eq!(outcome.success[0].0.as_text(), Some("hello world"));
}

#[wasm_bindgen_test]
async fn test_ajax_404_calls_error_only() {
    let outcome = Rc::new(RefCell::new(Outcome::default()));
    ajax(tracked(MISSING_URL, &outcome)).unwrap();
    wait_for_completion(&outcome).await;
    TimeoutFuture::new(50).await;

    let outcome = outcome.borrow();
    assert!(outcome.success.is_empty());
    assert_eq!(outcome.error.len(), 1);
    assert_eq!(outcome.error[0].0, 404);
}

#[wasm_bindgen_test]
fn test_ajax_sync_completes_before_returning() {
    let outcome = Rc::new(RefCell::new(Outcome::default()));
    ajax(tracked(JSON_URL, &outcome).set_async(false)).unwrap();

    let outcome = outcome.borrow();
    assert_eq!(outcome.success.len(), 1);
    assert_eq!(outcome.success[0].1, 200);
}

#[wasm_bindgen_test]
fn test_ajax_without_callbacks_is_noop() {
    ajax(AjaxOptions::new(JSON_URL).set_async(false)).unwrap();
    ajax(AjaxOptions::new(MISSING_URL).set_async(false)).unwrap();
}

/// Envolver setRequestHeader/send del prototipo para guardar lo que recibe cada XHR
const XHR_RECORDER: &str = r#"
(function () {
    const proto = XMLHttpRequest.prototype;
    if (proto.__jfastRecording) { return; }
    proto.__jfastRecording = true;
    const setRequestHeader = proto.setRequestHeader;
    const send = proto.send;
    proto.setRequestHeader = function (name, value) {
        (this.__jfastHeaders = this.__jfastHeaders || []).push([name, value]);
        return setRequestHeader.call(this, name, value);
    };
    proto.send = function (body) {
        this.__jfastBody = body === undefined ? null : body;
        return send.apply(this, arguments);
    };
})()
"#;

/// (headers como JSON, body enviado)
fn recorded_request(xhr: &XmlHttpRequest) -> (String, Option<String>) {
    let headers = js_sys::Reflect::get(xhr, &JsValue::from_str("__jfastHeaders")).unwrap();
    let headers = js_sys::JSON::stringify(&headers).unwrap();
    let body = js_sys::Reflect::get(xhr, &JsValue::from_str("__jfastBody")).unwrap();
    (String::from(headers), body.as_string())
}

#[wasm_bindgen_test]
async fn test_ajax_sends_headers_and_body() {
    js_sys::eval(XHR_RECORDER).unwrap();

    let sent = Rc::new(RefCell::new(None));
    let on_success = sent.clone();
    let on_error = sent.clone();
    let options = AjaxOptions::new(MISSING_URL)
        .method("POST")
        .header("X-Jfast", "1")
        .header("X-Trace", "abc")
        .data("a=1&b=2")
        .success(move |_, _, xhr| *on_success.borrow_mut() = Some(recorded_request(xhr)))
        .error(move |xhr, _, _| *on_error.borrow_mut() = Some(recorded_request(xhr)));
    ajax(options).unwrap();

    for _ in 0..100 {
        if sent.borrow().is_some() {
            break;
        }
        TimeoutFuture::new(20).await;
    }

    let (headers, body) = sent.borrow_mut().take().unwrap();
    assert_eq!(headers, r#"[["X-Jfast","1"],["X-Trace","abc"]]"#);
    assert_eq!(body.as_deref(), Some("a=1&b=2"));
}

#[wasm_bindgen_test]
fn test_ajax_invalid_method_is_rejected() {
    let result = ajax(AjaxOptions::new(JSON_URL).method("BAD METHOD"));
    assert!(matches!(result, Err(JfastError::Dom(_))));
}

#[wasm_bindgen_test]
async fn test_api_client_get_json() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u32,
        name: String,
    }

    let item: Item = ApiClient::new("").get_json(JSON_URL).await.unwrap();
    assert_eq!(
        item,
        Item {
            id: 7,
            name: "jfast".to_string()
        }
    );
}

#[wasm_bindgen_test]
async fn test_api_client_404_is_http_error() {
    let result = ApiClient::new("").get(MISSING_URL).await;
    assert!(matches!(result, Err(JfastError::Http { status: 404, .. })));
}
