use crate::encoding::decode_component;
use crate::errors::PayloadResult;

/// Split `a=b&c=d` into ordered, percent-decoded pairs.
///
/// Only the first `=` separates key from value, so Base32 padding survives.
/// Segments without `=` are dropped; a key or value that does not decode to
/// UTF-8 fails the whole call with `INVALID_ENCODING`.
pub fn parse_query_string(query: &str) -> PayloadResult<Vec<(String, String)>> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(key, value)| -> PayloadResult<(String, String)> {
            Ok((decode_component(key)?, decode_component(value)?))
        })
        .collect()
}
