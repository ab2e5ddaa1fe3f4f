use crate::codes::PRE_SUCCESS;
use crate::error::Error;

const PREFIX_CHARS: usize = 2;

/// Parse chain output (`0x` + hex ABI word) into a status code.
///
/// The payload may be any width; only its low 64 bits are kept and read as
/// two's complement, so a 256-bit word encoding `-50000` yields `-50000`.
/// A decoded `1` is reported as success.
pub fn parse_output_code(output: &str) -> Result<i64, Error> {
    let payload = match output.char_indices().nth(PREFIX_CHARS) {
        Some((idx, _)) => &output[idx..],
        None if output.chars().count() == PREFIX_CHARS => "",
        None => {
            return Err(Error::Parse {
                reason: "output too short to contain prefix".into(),
            });
        }
    };

    let (low, truncated) = parse_hex_low_u64(payload).ok_or_else(|| Error::Parse {
        reason: "convert output to integer failed".into(),
    })?;
    if truncated {
        tracing::debug!(output, "output wider than 64 bits, keeping low word");
    }

    let code = low as i64;
    if code == 1 {
        tracing::trace!("remapping output value 1 to success");
        return Ok(PRE_SUCCESS);
    }
    Ok(code)
}

/// Decode chain output and render it with [`super::translate`].
pub fn decode_and_translate(output: &str) -> Result<String, Error> {
    let code = parse_output_code(output)?;
    super::translate(code)
}

/// Returns the low 64 bits of `hex` and whether any higher bit was set.
fn parse_hex_low_u64(hex: &str) -> Option<(u64, bool)> {
    if hex.is_empty() {
        return None;
    }
    let mut value = 0_u64;
    let mut truncated = false;
    for c in hex.chars() {
        let digit = c.to_digit(16)?;
        truncated |= value >> 60 != 0;
        value = (value << 4) | u64::from(digit);
    }
    Some((value, truncated))
}
