//! `key=value` command-line arguments inferred into a JSON value map.

use serde_json::{Map, Value};

use crate::domain::{Rgba, SLATE};
use crate::error::{LessonError, Result};

/// Typed view over parsed arguments
pub type Params = Map<String, Value>;

/// Leading signed integer of `s` after optional whitespace, plus the bytes consumed.
/// Trailing text is left for the caller to judge.
fn leading_int(s: &str) -> Option<(i64, usize)> {
    let body = s.trim_start();
    let skipped = s.len() - body.len();
    let sign_len = usize::from(body.starts_with(['+', '-']));
    let digits = body[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    let end = sign_len + digits;
    body[..end].parse::<i64>().ok().map(|i| (i, skipped + end))
}

fn list_item(item: &str, whole: &str) -> Result<Value> {
    leading_int(item).map(|(i, _)| Value::from(i)).ok_or_else(|| {
        LessonError::InvalidArgument(format!(
            "Invalid numeric value in comma-separated list: {}",
            whole
        ))
    })
}

/// Infer the JSON type of a single argument value
pub fn infer_value(value: &str) -> Result<Value> {
    match value {
        "true" | "True" | "TRUE" => return Ok(Value::Bool(true)),
        "false" | "False" | "FALSE" => return Ok(Value::Bool(false)),
        _ => {}
    }

    if value.contains(',') {
        // One trailing separator is tolerated: `255,0,0,`
        let list = value.strip_suffix(',').unwrap_or(value);
        return list
            .split(',')
            .map(|item| list_item(item, value))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array);
    }

    if let Some((i, consumed)) = leading_int(value) {
        if consumed == value.len() {
            return Ok(Value::from(i));
        }
    }

    let number = value
        .trim_start()
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64);
    if let Some(n) = number {
        return Ok(Value::Number(n));
    }

    Ok(Value::String(value.to_owned()))
}

/// Parse `key=value` arguments (program name already skipped)
pub fn parse_args<I, S>(args: I) -> Result<Params>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter().try_fold(Params::new(), |mut params, arg| {
        let arg = arg.as_ref();
        match arg.split_once('=') {
            Some((key, value)) if !key.is_empty() && !value.is_empty() => {
                params.insert(key.to_owned(), infer_value(value)?);
                Ok(params)
            }
            _ => Err(LessonError::InvalidArgument(format!(
                "Arguments must be formatted as key=value, got `{}`",
                arg
            ))),
        }
    })
}

/// Parse the current process arguments
pub fn parse_env_args() -> Result<Params> {
    parse_args(std::env::args().skip(1))
}

fn channel(value: &Value) -> Option<u8> {
    value.as_i64().map(|v| v.clamp(0, 255) as u8)
}

/// Read an `r,g,b` or `r,g,b,a` colour, or `default` when absent or malformed.
/// Longer lists use their first three channels.
pub fn color_or(params: &Params, key: &str, default: Rgba) -> Rgba {
    let Some(value) = params.get(key) else {
        return default;
    };

    let channels: Option<Vec<u8>> = value
        .as_array()
        .filter(|items| items.len() >= 3)
        .and_then(|items| items.iter().map(channel).collect());

    match channels.as_deref() {
        Some(&[r, g, b, a]) => Rgba::rgba(r, g, b, a),
        Some(&[r, g, b, ..]) => Rgba::rgb(r, g, b),
        _ => {
            log::warn!("Invalid {} format `{}`. Use r,g,b or r,g,b,a", key, value);
            default
        }
    }
}

/// Colour for `key`, defaulting to the dark slate background
pub fn color_from_params(params: &Params, key: &str) -> Rgba {
    color_or(params, key, SLATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_booleans_in_any_listed_case() {
        for s in ["true", "True", "TRUE"] {
            assert_eq!(infer_value(s).unwrap(), json!(true));
        }
        for s in ["false", "False", "FALSE"] {
            assert_eq!(infer_value(s).unwrap(), json!(false));
        }
        assert_eq!(infer_value("tRuE").unwrap(), json!("tRuE"));
    }

    #[test]
    fn test_comma_list_becomes_int_array() {
        assert_eq!(infer_value("10,20,30").unwrap(), json!([10, 20, 30]));
        assert!(matches!(
            infer_value("10,x,30"),
            Err(LessonError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_comma_list_drops_one_trailing_separator() {
        assert_eq!(infer_value("255,0,0,").unwrap(), json!([255, 0, 0]));
        assert!(infer_value("255,0,0,,").is_err());
        assert!(infer_value(",1,2").is_err());
    }

    #[test]
    fn test_comma_list_items_use_integer_prefix() {
        assert_eq!(infer_value("1.5,2,3").unwrap(), json!([1, 2, 3]));
        assert_eq!(infer_value(" 10,+20,-3px").unwrap(), json!([10, 20, -3]));
        assert!(infer_value("1,-,3").is_err());
    }

    #[test]
    fn test_numbers_and_strings() {
        assert_eq!(infer_value("42").unwrap(), json!(42));
        assert_eq!(infer_value("-7").unwrap(), json!(-7));
        assert_eq!(infer_value("2.5").unwrap(), json!(2.5));
        assert_eq!(infer_value("12px").unwrap(), json!("12px"));
        assert_eq!(infer_value("conway").unwrap(), json!("conway"));
    }

    #[test]
    fn test_leading_whitespace_before_numbers() {
        assert_eq!(infer_value(" 5").unwrap(), json!(5));
        assert_eq!(infer_value("  -2.5").unwrap(), json!(-2.5));
        assert_eq!(infer_value("5 ").unwrap(), json!("5 "));
    }

    #[test]
    fn test_parse_args_builds_map() {
        let params = parse_args(["bg=1,2,3", "paused=false", "cell=20"]).unwrap();
        assert_eq!(params["bg"], json!([1, 2, 3]));
        assert_eq!(params["paused"], json!(false));
        assert_eq!(params["cell"], json!(20));
    }

    #[test]
    fn test_later_duplicate_wins() {
        let params = parse_args(["cell=20", "cell=10"]).unwrap();
        assert_eq!(params["cell"], json!(10));
    }

    #[test]
    fn test_malformed_arguments_are_rejected() {
        for bad in ["novalue", "=5", "key="] {
            assert!(
                matches!(parse_args([bad]), Err(LessonError::InvalidArgument(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_value_may_contain_equals() {
        let params = parse_args(["title=a=b"]).unwrap();
        assert_eq!(params["title"], json!("a=b"));
    }

    #[test]
    fn test_color_from_params() {
        let params = parse_args(["bg=10,20,30", "fg=1,2,3,4", "bad=7", "short=1,2", "long=10,20,30,40,50"]).unwrap();
        assert_eq!(color_from_params(&params, "bg"), Rgba::rgb(10, 20, 30));
        assert_eq!(color_from_params(&params, "fg"), Rgba::rgba(1, 2, 3, 4));
        assert_eq!(color_from_params(&params, "bad"), SLATE);
        assert_eq!(color_from_params(&params, "short"), SLATE);
        assert_eq!(color_from_params(&params, "long"), Rgba::rgb(10, 20, 30));
        assert_eq!(color_from_params(&params, "missing"), SLATE);
    }

    #[test]
    fn test_color_channels_are_clamped() {
        let params = parse_args(["bg=300,-5,128"]).unwrap();
        assert_eq!(color_from_params(&params, "bg"), Rgba::rgb(255, 0, 128));
    }
}
