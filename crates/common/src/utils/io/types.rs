use alloy_dyn_abi::DynSolValue;
use colored::Colorize;

use crate::utils::strings::encode_hex;

/// Pretty format a list of labelled values, one or more lines per value. Nested arrays and
/// tuples are indented beneath their label.
///
/// ```
/// use viewcall_common::utils::io::types::display;
/// use alloy_dyn_abi::DynSolValue;
/// use alloy::primitives::U256;
///
/// colored::control::set_override(false);
/// let lines = display(&[("a".to_string(), DynSolValue::Uint(U256::from(1234), 256))], "");
/// assert_eq!(lines, vec!["a: uint 1234".to_string()]);
/// ```
pub fn display(inputs: &[(String, DynSolValue)], prefix: &str) -> Vec<String> {
    let mut output = Vec::new();

    for (label, value) in inputs {
        let lines = display_value(value, &format!("{prefix}   "));
        let mut lines = lines.into_iter();

        // the first line of the value goes next to the label
        if let Some(first) = lines.next() {
            output.push(format!("{prefix}{}: {}", label.bold(), first.trim_start()));
        }
        output.extend(lines);
    }

    output
}

/// Pretty format a single value. The first line is not prefixed, subsequent lines are.
fn display_value(value: &DynSolValue, prefix: &str) -> Vec<String> {
    let mut output = Vec::new();

    match value {
        DynSolValue::Address(val) => output.push(format!("{} {}", "address".blue(), val)),
        DynSolValue::Int(val, _) => output.push(format!("{} {}", "int".blue(), val)),
        DynSolValue::Uint(val, _) => output.push(format!("{} {}", "uint".blue(), val)),
        DynSolValue::String(val) => output.push(format!("{} {:?}", "string".blue(), val)),
        DynSolValue::Bool(val) => output.push(format!("{} {}", "bool".blue(), val)),
        DynSolValue::FixedBytes(val, size) => {
            output.push(format!("{} 0x{}", format!("bytes{size}").blue(), encode_hex(&val[..*size])))
        }
        DynSolValue::Function(val) => {
            output.push(format!("{} 0x{}", "function".blue(), encode_hex(val.as_slice())))
        }
        DynSolValue::Bytes(val) => {
            // chunk val into 32-byte chunks
            let chunks = val.chunks(32).map(encode_hex).collect::<Vec<String>>();

            if chunks.is_empty() {
                output.push(format!("{} 0x", "bytes".blue()));
            }
            for (i, chunk) in chunks.iter().enumerate() {
                if i == 0 {
                    output.push(format!("{} 0x{}", "bytes".blue(), chunk));
                } else {
                    output.push(format!("{prefix}        {chunk}"));
                }
            }
        }
        DynSolValue::FixedArray(val) | DynSolValue::Array(val) => {
            output.extend(display_sequence(val, prefix, ('[', ']')));
        }
        DynSolValue::Tuple(val) => {
            output.extend(display_sequence(val, prefix, ('(', ')')));
        }
        other => output.push(format!("{other:?}")),
    };

    output
}

fn display_sequence(values: &[DynSolValue], prefix: &str, encap: (char, char)) -> Vec<String> {
    if values.is_empty() {
        return vec![format!("{}{}", encap.0, encap.1)];
    }

    let mut output = vec![encap.0.to_string()];
    let inner_prefix = format!("{prefix}   ");
    for value in values {
        let mut lines = display_value(value, &inner_prefix).into_iter();
        if let Some(first) = lines.next() {
            output.push(format!("{inner_prefix}{first}"));
        }
        output.extend(lines);
    }
    output.push(format!("{prefix}{}", encap.1));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, Function, U256};

    #[test]
    fn test_display_nested() {
        colored::control::set_override(false);
        let values = vec![(
            "orders".to_string(),
            DynSolValue::Array(vec![DynSolValue::Tuple(vec![
                DynSolValue::Uint(U256::from(7), 256),
                DynSolValue::Address(Address::ZERO),
            ])]),
        )];

        let lines = display(&values, "");
        assert_eq!(
            lines,
            vec![
                "orders: [".to_string(),
                "      (".to_string(),
                "         uint 7".to_string(),
                "         address 0x0000000000000000000000000000000000000000".to_string(),
                "      )".to_string(),
                "   ]".to_string(),
            ]
        );
    }

    #[test]
    fn test_display_empty_bytes() {
        colored::control::set_override(false);
        let lines = display(&[("0".to_string(), DynSolValue::Bytes(vec![]))], "");
        assert_eq!(lines, vec!["0: bytes 0x".to_string()]);
    }

    #[test]
    fn test_display_string_is_quoted() {
        colored::control::set_override(false);
        let lines = display(&[("b".to_string(), DynSolValue::String("0xdeadbeef".into()))], "");
        assert_eq!(lines, vec!["b: string \"0xdeadbeef\"".to_string()]);
    }

    #[test]
    fn test_display_function() {
        colored::control::set_override(false);
        let lines =
            display(&[("cb".to_string(), DynSolValue::Function(Function::new([0x22; 24])))], "");
        assert_eq!(lines, vec![format!("cb: function 0x{}", "22".repeat(24))]);
    }
}
