//! Browser local storage access.
//!
//! Records are JSON strings. Reads are fallible and typed: a missing key or a
//! malformed value is reported as an [`Error`] instead of silently producing
//! an empty record.

use crate::{constants::VIEW_SINGLE_TOKEN_KEY, types::Token, Error};
use codee::{string::JsonSerdeCodec, Decoder, Encoder};
use leptos::prelude::window;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, trace};
use web_sys::Storage;

fn local_storage() -> Result<Storage, Error> {
    window()
        .local_storage()?
        .ok_or_else(|| Error::storage("local storage is not available"))
}

pub fn read_raw(key: &str) -> Result<Option<String>, Error> {
    let value = local_storage()?.get_item(key)?;
    trace!("read {key}: {value:?}");
    Ok(value)
}

pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, Error> {
    <JsonSerdeCodec as Decoder<T>>::decode(raw).map_err(Error::serde)
}

pub fn encode<T: Serialize>(value: &T) -> Result<String, Error> {
    <JsonSerdeCodec as Encoder<T>>::encode(value).map_err(Error::serde)
}

/// Reads and decodes the record under `key`. A missing key, or a stored JSON
/// `null`, is `Ok(None)`.
pub fn read_cached<T: DeserializeOwned>(key: &str) -> Result<Option<T>, Error> {
    match read_raw(key)? {
        Some(raw) => decode::<Option<T>>(&raw),
        None => Ok(None),
    }
}

pub fn write_cached<T: Serialize>(key: &str, value: &T) -> Result<(), Error> {
    let encoded = encode(value)?;
    local_storage()?.set_item(key, &encoded)?;
    debug!("wrote {key}");
    Ok(())
}

pub fn parse_cached_token(raw: Option<&str>) -> Result<Token, Error> {
    let raw = raw.ok_or(Error::NoCachedToken)?;
    decode::<Option<Token>>(raw)?.ok_or(Error::NoCachedToken)
}

/// Hydrates the token the listing page selected before navigating here.
pub fn read_cached_token() -> Result<Token, Error> {
    let raw = read_raw(VIEW_SINGLE_TOKEN_KEY)?;
    parse_cached_token(raw.as_deref())
}

pub fn write_cached_token(token: &Token) -> Result<(), Error> {
    write_cached(VIEW_SINGLE_TOKEN_KEY, token)
}
