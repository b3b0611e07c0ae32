#![cfg(target_arch = "wasm32")]

use medash_web::{export_to_csv, format_currency, format_date, format_number, format_percentage};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn formatters_match_the_page_conventions() {
    assert_eq!(format_number(1234567.891), "1,234,567.891");
    assert_eq!(format_currency(-1234.5, None), "-$1,234.50");
    assert_eq!(format_currency(1500.0, Some("EUR".into())), "€1,500.00");
    assert_eq!(format_percentage(42.34), "42.3%");
}

#[wasm_bindgen_test]
fn dates_from_strings_and_date_objects() {
    assert_eq!(
        format_date(JsValue::from_str("2024-01-05")).unwrap(),
        "Jan 5, 2024"
    );
    // Month is zero-based in the Date constructor.
    let local = js_sys::Date::new_with_year_month_day(2023, 11, 31);
    assert_eq!(format_date(local.into()).unwrap(), "Dec 31, 2023");

    assert!(format_date(JsValue::from_str("not a date")).is_err());
    assert!(format_date(js_sys::Date::new(&JsValue::from_str("nope")).into()).is_err());
}

#[wasm_bindgen_test]
fn dates_from_epoch_milliseconds() {
    let ms = js_sys::Date::new_with_year_month_day(2023, 11, 31).get_time();
    assert_eq!(format_date(JsValue::from_f64(ms)).unwrap(), "Dec 31, 2023");
    let noon = js_sys::Date::new_with_year_month_day_hr(2024, 0, 5, 12).get_time();
    assert_eq!(format_date(JsValue::from_f64(noon)).unwrap(), "Jan 5, 2024");

    assert!(format_date(JsValue::from_f64(f64::NAN)).is_err());
    assert!(format_date(JsValue::TRUE).is_err());
    assert!(format_date(js_sys::Object::new().into()).is_err());
}

#[wasm_bindgen_test]
fn export_rejects_non_array_input() {
    assert!(export_to_csv(JsValue::from_str("rows"), "report".into(), None).is_err());
}
