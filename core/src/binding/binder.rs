use crate::errors::{PayloadError, PayloadResult};
use crate::schema::{find_field, Accessor, FieldDescriptor};

/// **BIND FLAT PARAMETERS ONTO A RECORD**
///
/// **CONTRACT**:
/// - keys match field names exactly (case-sensitive); unknown keys are ignored
/// - enum fields match member names case-insensitively
/// - integer and boolean fields use standard textual parsing
/// - later duplicates override earlier ones
///
/// **RETURNS**: `PayloadError::Binding` naming key, value and expected type on
/// the first value that cannot be converted. Every value is converted before
/// any setter runs, so a failed call leaves the record untouched.
pub fn bind_fields<R, I, K, V>(
    record: &mut R,
    fields: &[FieldDescriptor<R>],
    params: I,
) -> PayloadResult<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut staged = Vec::new();
    for (key, value) in params {
        let key = key.as_ref();
        let Some(field) = find_field(fields, key) else {
            log::debug!("ignoring unknown parameter '{}'", key);
            continue;
        };
        staged.push((field, convert(field, value.as_ref())?));
    }

    for (field, value) in staged {
        apply(record, field, value);
    }
    Ok(())
}

/// A raw parameter already converted to its field's type.
enum Converted {
    Text(String),
    Integer(i64),
    Boolean(bool),
    Choice(usize),
}

fn convert<R>(field: &FieldDescriptor<R>, raw: &str) -> PayloadResult<Converted> {
    let mismatch = || {
        log::debug!("cannot bind field '{}' as {}", field.name, field.expected_type());
        PayloadError::Binding {
            key: field.name.to_string(),
            value: raw.to_string(),
            expected: field.expected_type().to_string(),
        }
    };

    let converted = match &field.accessor {
        Accessor::Text { .. } => Converted::Text(raw.to_string()),
        Accessor::Integer { .. } => {
            Converted::Integer(raw.trim().parse::<i64>().map_err(|_| mismatch())?)
        }
        Accessor::Boolean { .. } => Converted::Boolean(parse_bool(raw).ok_or_else(mismatch)?),
        Accessor::Choice { members, .. } => Converted::Choice(
            members
                .iter()
                .position(|member| member.eq_ignore_ascii_case(raw.trim()))
                .ok_or_else(mismatch)?,
        ),
    };
    Ok(converted)
}

fn apply<R>(record: &mut R, field: &FieldDescriptor<R>, value: Converted) {
    match (&field.accessor, value) {
        (Accessor::Text { set, .. }, Converted::Text(text)) => set(record, text),
        (Accessor::Integer { set, .. }, Converted::Integer(n)) => set(record, n),
        (Accessor::Boolean { set, .. }, Converted::Boolean(b)) => set(record, b),
        (Accessor::Choice { set, .. }, Converted::Choice(index)) => set(record, index),
        // convert() always produces the variant matching the accessor
        _ => {}
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
