use std::collections::BTreeMap;
use log::debug;
use num_bigint::BigInt;
use crate::bencode::enums::bencode_error::BencodeError;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::structs::finite_float::FiniteFloat;

/// Nesting deeper than this is rejected as invalid input.
pub const MAX_DEPTH: usize = 512;

const FLOAT_CHARS: &[u8] = b"0123456789.-+E";

/// Decodes exactly one value spanning the whole input.
pub fn decode(data: &[u8]) -> Result<BencodeValue, BencodeError>
{
    let (value, offset) = decode_prefix(data)?;
    if offset != data.len() {
        debug!("[BENCODE] {} trailing bytes after offset {}", data.len() - offset, offset);
        return Err(BencodeError::TrailingData);
    }
    Ok(value)
}

/// Decodes one value from the start of `data` and returns it together with
/// the offset of the first byte that was not consumed.
pub fn decode_prefix(data: &[u8]) -> Result<(BencodeValue, usize), BencodeError>
{
    decode_value(data, 0, 0)
}

pub fn encode(value: &BencodeValue) -> Vec<u8>
{
    value.encode()
}

fn decode_value(data: &[u8], offset: usize, depth: usize) -> Result<(BencodeValue, usize), BencodeError>
{
    if depth > MAX_DEPTH {
        return Err(BencodeError::Invalid);
    }
    match data.get(offset) {
        Some(b'i') => decode_integer(data, offset),
        Some(b'f') => decode_float(data, offset),
        Some(b'0'..=b'9') => {
            let (bytes, next) = decode_bytes(data, offset)?;
            Ok((BencodeValue::Bytes(bytes.to_vec()), next))
        }
        Some(b'l') => decode_list(data, offset, depth),
        Some(b'd') => decode_dictionary(data, offset, depth),
        _ => Err(BencodeError::Invalid)
    }
}

fn find(data: &[u8], from: usize, needle: u8) -> Result<usize, BencodeError>
{
    data.get(from..)
        .and_then(|rest| rest.iter().position(|&byte| byte == needle))
        .map(|position| from + position)
        .ok_or(BencodeError::Invalid)
}

fn decode_integer(data: &[u8], offset: usize) -> Result<(BencodeValue, usize), BencodeError>
{
    let start = offset + 1;
    let end = find(data, start, b'e')?;
    let value = parse_integer(&data[start..end])?;
    Ok((BencodeValue::Integer(value), end + 1))
}

fn parse_integer(digits: &[u8]) -> Result<BigInt, BencodeError>
{
    let (negative, magnitude) = match digits.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, digits)
    };
    if magnitude.is_empty() || !magnitude.iter().all(u8::is_ascii_digit) {
        return Err(BencodeError::Invalid);
    }
    if magnitude[0] == b'0' && (negative || magnitude.len() > 1) {
        return Err(BencodeError::Invalid);
    }
    BigInt::parse_bytes(digits, 10).ok_or(BencodeError::Invalid)
}

fn decode_float(data: &[u8], offset: usize) -> Result<(BencodeValue, usize), BencodeError>
{
    let start = offset + 1;
    let end = find(data, start, b'e')?;
    let text = &data[start..end];
    if text.is_empty() || !text.iter().all(|byte| FLOAT_CHARS.contains(byte)) {
        return Err(BencodeError::Invalid);
    }
    let value = std::str::from_utf8(text).ok()
        .and_then(|text| text.parse::<f64>().ok())
        .ok_or(BencodeError::Invalid)?;
    let value = FiniteFloat::new(value).map_err(|_| BencodeError::Invalid)?;
    Ok((BencodeValue::Float(value), end + 1))
}

fn decode_bytes(data: &[u8], offset: usize) -> Result<(&[u8], usize), BencodeError>
{
    let colon = find(data, offset, b':')?;
    let length_digits = &data[offset..colon];
    if length_digits.is_empty() || !length_digits.iter().all(u8::is_ascii_digit) {
        return Err(BencodeError::Invalid);
    }
    if length_digits[0] == b'0' && length_digits.len() > 1 {
        return Err(BencodeError::Invalid);
    }
    let length = std::str::from_utf8(length_digits).ok()
        .and_then(|text| text.parse::<usize>().ok())
        .ok_or(BencodeError::Invalid)?;
    let start = colon + 1;
    let end = start.checked_add(length).ok_or(BencodeError::Invalid)?;
    let bytes = data.get(start..end).ok_or(BencodeError::Invalid)?;
    Ok((bytes, end))
}

fn decode_list(data: &[u8], offset: usize, depth: usize) -> Result<(BencodeValue, usize), BencodeError>
{
    let mut items = Vec::new();
    let mut position = offset + 1;
    loop {
        match data.get(position) {
            Some(b'e') => return Ok((BencodeValue::List(items), position + 1)),
            Some(_) => {
                let (item, next) = decode_value(data, position, depth + 1)?;
                items.push(item);
                position = next;
            }
            None => return Err(BencodeError::Invalid)
        }
    }
}

fn decode_dictionary(data: &[u8], offset: usize, depth: usize) -> Result<(BencodeValue, usize), BencodeError>
{
    let mut entries = BTreeMap::new();
    let mut position = offset + 1;
    loop {
        match data.get(position) {
            Some(b'e') => return Ok((BencodeValue::Dictionary(entries), position + 1)),
            Some(b'0'..=b'9') => {
                let (key, next) = decode_bytes(data, position)?;
                let (value, next) = decode_value(data, next, depth + 1)?;
                // Later duplicates win.
                entries.insert(key.to_vec(), value);
                position = next;
            }
            _ => return Err(BencodeError::Invalid)
        }
    }
}
