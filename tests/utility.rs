#[allow(dead_code)]
/// Rounds `number` to a specified number of `decimal_places`.
pub fn round(number: f64, decimal_places: u32) -> f64 {
    let x = 10i32.pow(decimal_places) as f64;
    (number * x).round() / x
}
