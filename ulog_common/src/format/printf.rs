//! printf style formatting over a slice of `FormatArg`.
//!
//! Supported directives are `%d %i %u %x %X %o %c %s %f %F %e %E %g %G %p` and `%%`,
//! with the flags `- + space 0 #`, a decimal width and a decimal `.precision`.
//! C length modifiers (`h l ll z j t L q`) are accepted and ignored, since the arguments carry their own width.
use crate::format::format_arg::FormatArg;
use crate::format::format_error::FormatError;
use std::iter::Peekable;
use std::str::CharIndices;

/// Widths and precisions are clamped to this many characters.
const MAX_FIELD_WIDTH: usize = 4096;

const LENGTH_MODIFIERS: &[char] = &['h', 'l', 'z', 'j', 't', 'L', 'q'];

const CONVERSIONS: &[char] = &[
    'd', 'i', 'u', 'x', 'X', 'o', 'c', 's', 'f', 'F', 'e', 'E', 'g', 'G', 'p',
];

/// Replaces every directive of `fmt` with the next argument from `args`.
/// Every argument must be consumed by exactly one directive.
pub fn format(fmt: &str, args: &[FormatArg]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(fmt.len());
    let mut chars = fmt.char_indices().peekable();
    let mut next_arg = 0;

    while let Some((offset, c)) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let spec = Spec::parse(offset, &mut chars)?;

        let conversion = match chars.next() {
            Some((_, conversion)) => conversion,
            None => return Err(FormatError::TrailingPercent),
        };

        if conversion == '%' {
            out.push('%');
            continue;
        }

        if !CONVERSIONS.contains(&conversion) {
            return Err(FormatError::InvalidDirective {
                offset,
                directive: conversion,
            });
        }

        let arg = args.get(next_arg).ok_or(FormatError::MissingArgument {
            index: next_arg,
            directive: conversion,
        })?;

        out.push_str(&spec.render(conversion, next_arg, arg)?);
        next_arg += 1;
    }

    if next_arg != args.len() {
        return Err(FormatError::UnusedArguments {
            expected: next_arg,
            found: args.len(),
        });
    }

    Ok(out)
}

#[derive(Debug, Default)]
/// Flags, width and precision of one directive.
struct Spec {
    left_align: bool,
    plus: bool,
    space: bool,
    zero_pad: bool,
    alternate: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

impl Spec {
    /// Parses everything between the `%` and the conversion character.
    fn parse(offset: usize, chars: &mut Peekable<CharIndices<'_>>) -> Result<Self, FormatError> {
        let mut spec = Spec::default();

        while let Some(&(_, c)) = chars.peek() {
            match c {
                '-' => spec.left_align = true,
                '+' => spec.plus = true,
                ' ' => spec.space = true,
                '0' => spec.zero_pad = true,
                '#' => spec.alternate = true,
                _ => break,
            }
            chars.next();
        }

        spec.width = read_number(chars);
        reject_star(offset, chars)?;

        if let Some(&(_, '.')) = chars.peek() {
            chars.next();
            reject_star(offset, chars)?;
            spec.precision = Some(read_number(chars).unwrap_or(0));
        }

        while let Some(&(_, c)) = chars.peek() {
            if !LENGTH_MODIFIERS.contains(&c) {
                break;
            }
            chars.next();
        }

        Ok(spec)
    }

    fn render(&self, conversion: char, index: usize, arg: &FormatArg) -> Result<String, FormatError> {
        let mismatch = || FormatError::TypeMismatch {
            index,
            directive: conversion,
            found: arg.type_name(),
        };

        match conversion {
            'd' | 'i' => {
                let value = as_signed(arg).ok_or_else(mismatch)?;
                Ok(self.render_signed(value))
            }
            'u' | 'x' | 'X' | 'o' => {
                let value = as_unsigned(arg).ok_or_else(mismatch)?;
                Ok(self.render_unsigned(conversion, value))
            }
            'f' | 'F' | 'e' | 'E' | 'g' | 'G' => {
                let value = as_float(arg).ok_or_else(mismatch)?;
                Ok(self.render_float(conversion, value))
            }
            'c' => {
                let value = as_char(arg).ok_or_else(mismatch)?;
                Ok(self.pad("", &value.to_string(), false))
            }
            'p' => {
                let value = as_unsigned(arg).ok_or_else(mismatch)?;
                Ok(self.pad("", &format!("0x{:x}", value), false))
            }
            _ => {
                let text = arg.to_string();
                let text = match self.precision {
                    Some(precision) => text.chars().take(precision).collect(),
                    None => text,
                };
                Ok(self.pad("", &text, false))
            }
        }
    }

    fn sign(&self, negative: bool) -> &'static str {
        if negative {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        }
    }

    /// Applies the precision of an integer directive, which is a minimum digit count.
    fn integer_digits(&self, digits: String) -> String {
        match self.precision {
            Some(0) if digits == "0" => String::new(),
            Some(precision) if digits.len() < precision => {
                format!("{}{}", "0".repeat(precision - digits.len()), digits)
            }
            _ => digits,
        }
    }

    fn render_signed(&self, value: i128) -> String {
        let digits = self.integer_digits(value.unsigned_abs().to_string());
        self.pad(self.sign(value < 0), &digits, self.precision.is_none())
    }

    fn render_unsigned(&self, conversion: char, value: u128) -> String {
        let (digits, prefix) = match conversion {
            'x' => (format!("{:x}", value), "0x"),
            'X' => (format!("{:X}", value), "0X"),
            'o' => (format!("{:o}", value), ""),
            _ => (value.to_string(), ""),
        };
        let mut digits = self.integer_digits(digits);

        if self.alternate && conversion == 'o' && !digits.starts_with('0') {
            digits.insert(0, '0');
        }

        let prefix = if self.alternate && value != 0 { prefix } else { "" };
        self.pad(prefix, &digits, self.precision.is_none())
    }

    fn render_float(&self, conversion: char, value: f64) -> String {
        let magnitude = value.abs();
        let sign = self.sign(value.is_sign_negative() && !value.is_nan());

        let body = if magnitude.is_nan() {
            "nan".to_string()
        } else if magnitude.is_infinite() {
            "inf".to_string()
        } else {
            let precision = self.precision.unwrap_or(6);
            match conversion.to_ascii_lowercase() {
                'f' => fixed(magnitude, precision, self.alternate),
                'e' => exponent(magnitude, precision, self.alternate),
                _ => general(magnitude, precision, self.alternate),
            }
        };

        let body = if conversion.is_ascii_uppercase() {
            body.to_uppercase()
        } else {
            body
        };

        self.pad(sign, &body, magnitude.is_finite())
    }

    /// Pads `prefix` + `body` to the field width.
    /// Zero padding goes between the prefix and the body, and only when `zero_allowed`.
    fn pad(&self, prefix: &str, body: &str, zero_allowed: bool) -> String {
        let len = prefix.chars().count() + body.chars().count();
        let width = self.width.unwrap_or(0);

        if len >= width {
            return format!("{}{}", prefix, body);
        }

        let fill = width - len;
        if self.left_align {
            format!("{}{}{}", prefix, body, " ".repeat(fill))
        } else if self.zero_pad && zero_allowed {
            format!("{}{}{}", prefix, "0".repeat(fill), body)
        } else {
            format!("{}{}{}", " ".repeat(fill), prefix, body)
        }
    }
}

fn read_number(chars: &mut Peekable<CharIndices<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(&(_, c)) = chars.peek() {
        match c.to_digit(10) {
            Some(digit) => {
                let next = value.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize);
                value = Some(next.min(MAX_FIELD_WIDTH));
                chars.next();
            }
            None => break,
        }
    }
    value
}

fn reject_star(offset: usize, chars: &mut Peekable<CharIndices<'_>>) -> Result<(), FormatError> {
    match chars.peek() {
        Some(&(_, '*')) => Err(FormatError::InvalidDirective {
            offset,
            directive: '*',
        }),
        _ => Ok(()),
    }
}

fn as_signed(arg: &FormatArg) -> Option<i128> {
    match arg {
        FormatArg::Int(value) => Some(i128::from(*value)),
        FormatArg::UInt(value) => Some(i128::from(*value)),
        FormatArg::Char(value) => Some(i128::from(u32::from(*value))),
        FormatArg::Bool(value) => Some(i128::from(*value)),
        FormatArg::Float(_) | FormatArg::Str(_) => None,
    }
}

fn as_unsigned(arg: &FormatArg) -> Option<u128> {
    match arg {
        // negative values wrap like a C cast to unsigned long long
        FormatArg::Int(value) => Some(u128::from(*value as u64)),
        FormatArg::UInt(value) => Some(u128::from(*value)),
        FormatArg::Char(value) => Some(u128::from(u32::from(*value))),
        FormatArg::Bool(value) => Some(u128::from(*value)),
        FormatArg::Float(_) | FormatArg::Str(_) => None,
    }
}

fn as_float(arg: &FormatArg) -> Option<f64> {
    match arg {
        FormatArg::Float(value) => Some(*value),
        FormatArg::Int(value) => Some(*value as f64),
        FormatArg::UInt(value) => Some(*value as f64),
        FormatArg::Str(_) | FormatArg::Char(_) | FormatArg::Bool(_) => None,
    }
}

fn as_char(arg: &FormatArg) -> Option<char> {
    match arg {
        FormatArg::Char(value) => Some(*value),
        FormatArg::Int(value) => u32::try_from(*value).ok().and_then(char::from_u32),
        FormatArg::UInt(value) => u32::try_from(*value).ok().and_then(char::from_u32),
        FormatArg::Float(_) | FormatArg::Str(_) | FormatArg::Bool(_) => None,
    }
}

fn fixed(value: f64, precision: usize, alternate: bool) -> String {
    let mut out = format!("{:.*}", precision, value);
    if alternate && precision == 0 {
        out.push('.');
    }
    out
}

/// Splits Rust's `1.5e2` exponent rendering into mantissa and exponent.
fn scientific_parts(value: f64, precision: usize) -> (String, i32) {
    let rendered = format!("{:.*e}", precision, value);
    match rendered.split_once('e') {
        Some((mantissa, exp)) => (mantissa.to_string(), exp.parse().unwrap_or(0)),
        None => (rendered, 0),
    }
}

/// C style exponent notation, `1.500000e+02`.
fn exponent(value: f64, precision: usize, alternate: bool) -> String {
    let (mut mantissa, exp) = scientific_parts(value, precision);
    if alternate && precision == 0 {
        mantissa.push('.');
    }
    format!(
        "{}e{}{:02}",
        mantissa,
        if exp < 0 { '-' } else { '+' },
        exp.unsigned_abs()
    )
}

/// `%g`: fixed or exponent notation depending on the decimal exponent, trailing zeros removed unless `#`.
fn general(value: f64, precision: usize, alternate: bool) -> String {
    let precision = precision.max(1);
    let exp = if value == 0.0 {
        0
    } else {
        scientific_parts(value, precision - 1).1
    };

    let body = if exp >= -4 && i64::from(exp) < precision as i64 {
        let decimals = (precision as i64 - 1 - i64::from(exp)).max(0) as usize;
        fixed(value, decimals, alternate)
    } else {
        exponent(value, precision - 1, alternate)
    };

    if alternate {
        body
    } else {
        strip_trailing_zeros(&body)
    }
}

fn strip_trailing_zeros(body: &str) -> String {
    let (mantissa, suffix) = match body.find('e') {
        Some(index) => body.split_at(index),
        None => (body, ""),
    };

    if !mantissa.contains('.') {
        return body.to_string();
    }

    let trimmed = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{}{}", trimmed, suffix)
}

#[cfg(test)]
mod tests {
    use crate::format::format_arg::FormatArg;
    use crate::format::format_error::FormatError;
    use crate::format::printf::format;

    fn fmt(fmt: &str, args: &[FormatArg]) -> String {
        format(fmt, args).unwrap()
    }

    #[test]
    fn test_integers() {
        assert_eq!(fmt("value=%d", &[42.into()]), "value=42");
        assert_eq!(fmt("%i|%5d|%-5d|", &[1.into(), 2.into(), 3.into()]), "1|    2|3    |");
        assert_eq!(fmt("%05d", &[(-42).into()]), "-0042");
        assert_eq!(fmt("%+d % d", &[7.into(), 7.into()]), "+7  7");
        assert_eq!(fmt("%.3d", &[5.into()]), "005");
        assert_eq!(fmt("%.0d", &[0.into()]), "");
        assert_eq!(fmt("%ld %llu %zu", &[1i64.into(), 2u64.into(), 3usize.into()]), "1 2 3");
    }

    #[test]
    fn test_unsigned_bases() {
        assert_eq!(fmt("%x %X %o", &[255.into(), 255.into(), 8.into()]), "ff FF 10");
        assert_eq!(fmt("%#x %#o %#x", &[255.into(), 8.into(), 0.into()]), "0xff 010 0");
        assert_eq!(fmt("%08x", &[0xbeefu32.into()]), "0000beef");
        assert_eq!(fmt("%u", &[(-1i64).into()]), u64::MAX.to_string());
        assert_eq!(fmt("%p", &[4096usize.into()]), "0x1000");
    }

    #[test]
    fn test_floats() {
        assert_eq!(fmt("%f", &[1.5.into()]), "1.500000");
        assert_eq!(fmt("%.2f", &[1.23456.into()]), "1.23");
        assert_eq!(fmt("%8.3f|", &[(-2.5).into()]), "  -2.500|");
        assert_eq!(fmt("%e", &[150.0.into()]), "1.500000e+02");
        assert_eq!(fmt("%.2E", &[0.000123.into()]), "1.23E-04");
        assert_eq!(fmt("%g", &[100000.0.into()]), "100000");
        assert_eq!(fmt("%g", &[1000000.0.into()]), "1e+06");
        assert_eq!(fmt("%g", &[0.0001.into()]), "0.0001");
        assert_eq!(fmt("%g", &[2.5.into()]), "2.5");
        assert_eq!(fmt("%f", &[f64::INFINITY.into()]), "inf");
        assert_eq!(fmt("%F", &[f64::NAN.into()]), "NAN");
        assert_eq!(fmt("%.1f", &[3.into()]), "3.0");
    }

    #[test]
    fn test_strings_and_chars() {
        assert_eq!(fmt("%s and %s", &["a".into(), String::from("b").into()]), "a and b");
        assert_eq!(fmt("[%5s][%-5s]", &["ab".into(), "cd".into()]), "[   ab][cd   ]");
        assert_eq!(fmt("%.3s", &["abcdef".into()]), "abc");
        assert_eq!(fmt("%s %s", &[true.into(), 12.into()]), "true 12");
        assert_eq!(fmt("%c%c", &['o'.into(), 107.into()]), "ok");
        assert_eq!(fmt("100%%", &[]), "100%");
        assert_eq!(fmt("héllo %s", &["wörld".into()]), "héllo wörld");
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            format("value=%d", &[]),
            Err(FormatError::MissingArgument {
                index: 0,
                directive: 'd'
            })
        );
        assert_eq!(
            format("%d", &["nope".into()]),
            Err(FormatError::TypeMismatch {
                index: 0,
                directive: 'd',
                found: "string"
            })
        );
        assert_eq!(
            format("%f", &['c'.into()]),
            Err(FormatError::TypeMismatch {
                index: 0,
                directive: 'f',
                found: "char"
            })
        );
        assert_eq!(
            format("%d", &[1.into(), 2.into()]),
            Err(FormatError::UnusedArguments {
                expected: 1,
                found: 2
            })
        );
        assert_eq!(
            format("ab %y", &[1.into()]),
            Err(FormatError::InvalidDirective {
                offset: 3,
                directive: 'y'
            })
        );
        assert_eq!(
            format("%*d", &[1.into(), 2.into()]),
            Err(FormatError::InvalidDirective {
                offset: 0,
                directive: '*'
            })
        );
        assert_eq!(format("oops %", &[]), Err(FormatError::TrailingPercent));
        assert_eq!(format("oops %5", &[]), Err(FormatError::TrailingPercent));
    }
}
