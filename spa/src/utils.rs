use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use chrono::NaiveDateTime;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use shared::EventState;
use wasm_bindgen::{JsCast, JsValue};
use yew::Callback;

/// Render a backend timestamp (naive ISO 8601) for display; anything
/// unparseable is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(timestamp) => timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusFlags {
    pub in_alarm: bool,
    pub fault: bool,
    pub overridden: bool,
    pub out_of_service: bool,
}

/// Parse the 4-digit BACnet status-flags string; malformed input reads as
/// all-clear.
pub fn parse_status_flags(flags: &str) -> StatusFlags {
    let bits: Vec<char> = flags.chars().collect();
    if bits.len() != 4 || bits.iter().any(|bit| *bit != '0' && *bit != '1') {
        return StatusFlags::default();
    }
    StatusFlags {
        in_alarm: bits[0] == '1',
        fault: bits[1] == '1',
        overridden: bits[2] == '1',
        out_of_service: bits[3] == '1',
    }
}

#[allow(dead_code)]
pub fn format_status_flags(flags: StatusFlags) -> String {
    [flags.in_alarm, flags.fault, flags.overridden, flags.out_of_service]
        .iter()
        .map(|flag| if *flag { '1' } else { '0' })
        .collect()
}

pub fn event_state_name(state: EventState) -> &'static str {
    match state {
        EventState::Normal => "Normal",
        EventState::Fault => "Fault",
        EventState::Offnormal => "Off Normal",
        EventState::HighLimit => "High Limit",
        EventState::LowLimit => "Low Limit",
    }
}

/// Bootstrap contextual color for an event state badge.
pub fn event_state_color(state: EventState) -> &'static str {
    match state {
        EventState::Normal => "success",
        EventState::Fault => "danger",
        EventState::Offnormal | EventState::HighLimit | EventState::LowLimit => "warning",
    }
}

#[allow(dead_code)]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
    let exponent = ((bytes as f64).log(1024.0).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", UNITS[exponent])
}

pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

#[allow(dead_code)]
pub fn validate_ip(ip: &str) -> bool {
    let segments: Vec<&str> = ip.split('.').collect();
    segments.len() == 4
        && segments.iter().all(|segment| {
            !segment.is_empty()
                && segment.len() <= 3
                && segment.bytes().all(|byte| byte.is_ascii_digit())
                && segment.parse::<u8>().is_ok()
        })
}

/// Rows to CSV text: header row from the first record's keys, then one
/// line per record. Fields containing commas or quotes are quoted with
/// doubled inner quotes.
pub fn to_csv(rows: &[Value]) -> String {
    let Some(first) = rows.first().and_then(Value::as_object) else {
        return String::new();
    };
    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    let mut out = String::new();
    out.push_str(&headers.join(","));
    out.push('\n');
    for row in rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|header| match row.get(header) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(text)) => csv_field(text),
                Some(Value::Number(number)) => number.to_string(),
                Some(Value::Bool(flag)) => flag.to_string(),
                Some(composite) => csv_field(&composite.to_string()),
            })
            .collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

fn csv_field(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

pub fn export_as_csv(rows: &[Value], filename: &str) {
    if rows.is_empty() {
        return;
    }
    download_file(&to_csv(rows), filename, "text/csv");
}

pub fn export_as_json(value: &Value, filename: &str) {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_default();
    download_file(&pretty, filename, "application/json");
}

/// Hand the given text to the browser as a file download.
pub fn download_file(data: &str, filename: &str, mime: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let parts = js_sys::Array::of1(&JsValue::from_str(data));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };
    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|element| element.dyn_into::<web_sys::HtmlAnchorElement>().ok());
    if let Some(anchor) = anchor {
        anchor.set_href(&url);
        anchor.set_download(filename);
        if let Some(body) = document.body() {
            let _ = body.append_child(&anchor);
            anchor.click();
            let _ = body.remove_child(&anchor);
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

pub async fn sleep(millis: u32) {
    TimeoutFuture::new(millis).await;
}

pub fn backoff_delay(base_ms: u32, attempt: u32) -> u32 {
    base_ms.saturating_mul(2u32.saturating_pow(attempt))
}

/// Re-run a fallible async operation with exponential backoff, giving up
/// after `max_retries` additional attempts.
pub async fn retry<T, E, F, Fut>(mut operation: F, max_retries: u32, base_delay_ms: u32) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt >= max_retries {
                    return Err(error);
                }
                sleep(backoff_delay(base_delay_ms, attempt)).await;
                attempt += 1;
            }
        }
    }
}

/// Coalesce bursts of events: only the last value within `wait_ms` is
/// delivered.
pub fn debounce<T: 'static>(callback: Callback<T>, wait_ms: u32) -> Callback<T> {
    let slot: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    Callback::from(move |value: T| {
        let callback = callback.clone();
        let timeout = Timeout::new(wait_ms, move || callback.emit(value));
        if let Some(previous) = slot.borrow_mut().replace(timeout) {
            previous.cancel();
        }
    })
}

/// Deliver the first value immediately, then ignore further values for
/// `interval_ms`.
pub fn throttle<T: 'static>(callback: Callback<T>, interval_ms: u32) -> Callback<T> {
    let gate = Rc::new(Cell::new(false));
    Callback::from(move |value: T| {
        if gate.get() {
            return;
        }
        gate.set(true);
        callback.emit(value);
        let gate = gate.clone();
        Timeout::new(interval_ms, move || gate.set(false)).forget();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_quotes_fields_containing_commas() {
        let rows = vec![serde_json::json!({"a": 1, "b": "x,y"})];
        assert_eq!(to_csv(&rows), "a,b\n1,\"x,y\"\n");
    }

    #[test]
    fn csv_doubles_embedded_quotes() {
        let rows = vec![serde_json::json!({"name": "say \"hi\""})];
        assert_eq!(to_csv(&rows), "name\n\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn csv_of_no_rows_is_empty() {
        assert_eq!(to_csv(&[]), "");
    }

    #[test]
    fn csv_renders_null_and_missing_as_empty() {
        let rows = vec![
            serde_json::json!({"a": Value::Null, "b": true}),
            serde_json::json!({"b": false}),
        ];
        assert_eq!(to_csv(&rows), "a,b\n,true\n,false\n");
    }

    #[test]
    fn status_flags_round_trip() {
        let flags = parse_status_flags("1010");
        assert!(flags.in_alarm);
        assert!(!flags.fault);
        assert!(flags.overridden);
        assert!(!flags.out_of_service);
        assert_eq!(format_status_flags(flags), "1010");
    }

    #[test]
    fn malformed_status_flags_read_as_all_clear() {
        assert_eq!(parse_status_flags(""), StatusFlags::default());
        assert_eq!(parse_status_flags("10"), StatusFlags::default());
        assert_eq!(parse_status_flags("12ab"), StatusFlags::default());
    }

    #[test]
    fn backoff_doubles_per_attempt() {
        assert_eq!(backoff_delay(1000, 0), 1000);
        assert_eq!(backoff_delay(1000, 1), 2000);
        assert_eq!(backoff_delay(1000, 2), 4000);
        // saturates instead of overflowing
        assert_eq!(backoff_delay(u32::MAX, 3), u32::MAX);
    }

    #[test]
    fn email_validation_matches_common_cases() {
        assert!(validate_email("ops@example.com"));
        assert!(validate_email("first.last@sub.example.org"));
        assert!(!validate_email("no-at-sign"));
        assert!(!validate_email("spaces in@example.com"));
        assert!(!validate_email("a@no-dot"));
        assert!(!validate_email("a@.com"));
    }

    #[test]
    fn ip_validation_requires_four_octets() {
        assert!(validate_ip("192.168.0.1"));
        assert!(validate_ip("0.0.0.0"));
        assert!(validate_ip("255.255.255.255"));
        assert!(!validate_ip("256.1.1.1"));
        assert!(!validate_ip("1.2.3"));
        assert!(!validate_ip("1.2.3.4.5"));
        assert!(!validate_ip("a.b.c.d"));
    }

    #[test]
    fn file_sizes_use_binary_units() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1048576), "1 MB");
    }

    #[test]
    fn backend_timestamps_render_without_the_t() {
        assert_eq!(
            format_timestamp("2024-01-01T12:00:00.123456"),
            "2024-01-01 12:00:00"
        );
        assert_eq!(format_timestamp("2024-01-01T12:00:00"), "2024-01-01 12:00:00");
        assert_eq!(format_timestamp("unparseable"), "unparseable");
    }

    #[test]
    fn event_states_map_to_badge_colors() {
        assert_eq!(event_state_color(EventState::Normal), "success");
        assert_eq!(event_state_color(EventState::Fault), "danger");
        assert_eq!(event_state_color(EventState::HighLimit), "warning");
        assert_eq!(event_state_name(EventState::Offnormal), "Off Normal");
    }
}
