//! WASM bindings for thai-baht-text
//!
//! This crate provides a JavaScript-friendly API with both calling
//! conventions:
//! - an options object: `thaiBahtText(amount, { unit, decimalPlaces, appendBahtOnly })`
//! - positional arguments: `thaiBahtTextWith(amount, unit, decimalPlaces, appendBahtOnly)`
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { thaiBahtText, thaiBahtTextWith, Unit } from 'thai-baht-text-wasm';
//!
//! await init();
//!
//! thaiBahtText(121.5);                      // "หนึ่งร้อยยี่สิบเอ็ดบาทห้าสิบสตางค์"
//! thaiBahtText(null);                       // "ศูนย์บาทถ้วน"
//! thaiBahtText(8500000, { unit: Unit.Million, appendBahtOnly: false });
//! thaiBahtTextWith(12345600, Unit.Million, 4, false);
//! ```
//!
//! Amounts outside the supported range throw a `RangeError`. A malformed
//! options object or an unknown unit throws a `TypeError`.

use serde::Deserialize;
use thai_baht_text::{BahtTextError, FormatOptions, ThaiBahtText, DEFAULT_DECIMAL_PLACES};
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Unit the amount is spoken in
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Baht = 0,
    Million = 1,
    Billion = 2,
    Trillion = 3,
}

impl From<Unit> for thai_baht_text::Unit {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Baht => thai_baht_text::Unit::Baht,
            Unit::Million => thai_baht_text::Unit::Million,
            Unit::Billion => thai_baht_text::Unit::Billion,
            Unit::Trillion => thai_baht_text::Unit::Trillion,
        }
    }
}

/// Options object as passed from JavaScript; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsOptions {
    unit: Option<u32>,
    decimal_places: Option<f64>,
    #[serde(alias = "appendExactlySuffix")]
    append_baht_only: Option<bool>,
}

fn unit_from_index(index: u32) -> Option<thai_baht_text::Unit> {
    match index {
        0 => Some(thai_baht_text::Unit::Baht),
        1 => Some(thai_baht_text::Unit::Million),
        2 => Some(thai_baht_text::Unit::Billion),
        3 => Some(thai_baht_text::Unit::Trillion),
        _ => None,
    }
}

/// JS numbers may be fractional or negative; those fall back to the default
fn decimal_places_from_js(places: f64) -> u32 {
    if places.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&places) {
        places as u32
    } else {
        DEFAULT_DECIMAL_PLACES
    }
}

fn resolve(
    unit: Option<thai_baht_text::Unit>,
    decimal_places: Option<f64>,
    append_baht_only: Option<bool>,
) -> FormatOptions {
    let defaults = FormatOptions::default();
    FormatOptions {
        unit: unit.unwrap_or(defaults.unit),
        decimal_places: decimal_places
            .map(decimal_places_from_js)
            .unwrap_or(defaults.decimal_places),
        append_exactly_suffix: append_baht_only.unwrap_or(defaults.append_exactly_suffix),
    }
}

fn to_js_error(err: BahtTextError) -> JsValue {
    match err {
        BahtTextError::OutOfRange(_) => js_sys::RangeError::new(&err.to_string()).into(),
        BahtTextError::InvalidOptions(_) => js_sys::TypeError::new(&err.to_string()).into(),
    }
}

fn invalid_options(message: String) -> JsValue {
    to_js_error(BahtTextError::InvalidOptions(message))
}

fn format(amount: Option<f64>, options: &FormatOptions) -> Result<String, JsValue> {
    ThaiBahtText::format(amount, options).map_err(to_js_error)
}

/// Format an amount as Thai Baht text
///
/// @param amount - Amount in Baht (null/undefined reads as zero)
/// @param options - Optional `{ unit, decimalPlaces, appendBahtOnly }`
/// @returns Thai text (e.g., "หนึ่งร้อยบาทถ้วน")
#[wasm_bindgen(js_name = thaiBahtText)]
pub fn thai_baht_text(amount: Option<f64>, options: JsValue) -> Result<String, JsValue> {
    let options: JsOptions = if options.is_undefined() || options.is_null() {
        JsOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| invalid_options(e.to_string()))?
    };

    let unit = options
        .unit
        .map(|index| {
            unit_from_index(index).ok_or_else(|| invalid_options(format!("unknown unit: {index}")))
        })
        .transpose()?;

    let options = resolve(unit, options.decimal_places, options.append_baht_only);
    format(amount, &options)
}

/// Format an amount as Thai Baht text with positional options
///
/// @param amount - Amount in Baht (null/undefined reads as zero)
/// @param unit - Unit (default Unit.Baht)
/// @param decimalPlaces - Decimal places for scaled units, 0-6 (default 2)
/// @param appendBahtOnly - Append "ถ้วน" when whole (default true)
/// @returns Thai text
#[wasm_bindgen(js_name = thaiBahtTextWith)]
pub fn thai_baht_text_with(
    amount: Option<f64>,
    unit: Option<Unit>,
    decimal_places: Option<f64>,
    append_baht_only: Option<bool>,
) -> Result<String, JsValue> {
    let options = resolve(unit.map(Into::into), decimal_places, append_baht_only);
    format(amount, &options)
}

/// Largest supported amount
#[wasm_bindgen(js_name = maxValue)]
pub fn max_value() -> f64 {
    ThaiBahtText::MAX_VALUE
}

/// Smallest supported amount
#[wasm_bindgen(js_name = minValue)]
pub fn min_value() -> f64 {
    ThaiBahtText::MIN_VALUE
}
