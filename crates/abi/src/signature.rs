use std::{collections::HashSet, fmt, str::FromStr};

use alloy::primitives::{keccak256, Selector};
use alloy_dyn_abi::DynSolType;
use alloy_json_abi::{Function, StateMutability};
use tracing::debug;
use viewcall_common::{
    ether::types::to_abi_string,
    utils::strings::{find_balanced_encapsulator, strip_quotes},
};

use crate::error::ParseError;

/// Keywords that may sit between the input and output clauses.
const MODIFIER_KEYWORDS: [&str; 5] = ["returns", "view", "pure", "external", "public"];

/// Solidity data locations, accepted between a type and its label and otherwise ignored.
const DATA_LOCATIONS: [&str; 3] = ["memory", "calldata", "storage"];

/// A single parameter of a [`MethodSignature`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// The resolved ABI type.
    pub ty: DynSolType,
    /// The label, if one was written.
    pub name: Option<String>,
    /// Labelled components when the base type is a tuple. Empty otherwise.
    pub components: Vec<Param>,
}

impl Param {
    /// Creates a parameter from a type and an optional label. Tuple components are created
    /// unlabeled from the type itself.
    pub fn new(ty: DynSolType, name: Option<String>) -> Self {
        let components = match base_type(&ty) {
            DynSolType::Tuple(members) => {
                members.iter().map(|member| Param::new(member.clone(), None)).collect()
            }
            _ => Vec::new(),
        };
        Self { ty, name, components }
    }

    /// The key used to address this parameter: its label, or its position when unlabeled.
    pub fn key(&self, index: usize) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => index.to_string(),
        }
    }

    /// The canonical type string, e.g. `(uint256,address)[]`.
    pub fn canonical_type(&self) -> String {
        canonical_type_name(&self.ty)
    }

    /// Converts this parameter into its JSON ABI representation.
    pub fn to_json_param(&self) -> alloy_json_abi::Param {
        alloy_json_abi::Param {
            ty: to_abi_string(&self.ty),
            name: self.name.clone().unwrap_or_default(),
            components: self.components.iter().map(Param::to_json_param).collect(),
            internal_type: None,
        }
    }

    /// The type as written by a human, with tuple components labelled where possible.
    fn labelled_type(&self) -> String {
        match base_type(&self.ty) {
            DynSolType::Tuple(_) => {
                let (_, suffix) = split_array_suffix(&self.ty);
                format!("({}){}", join_labelled(&self.components), suffix)
            }
            _ => self.canonical_type(),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} {}", self.labelled_type(), name),
            None => write!(f, "{}", self.labelled_type()),
        }
    }
}

/// A parsed, human-readable function signature such as
/// `balanceOf(address owner)(uint256 balance)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    /// The function name.
    pub name: String,
    /// The declared inputs, in order.
    pub inputs: Vec<Param>,
    /// The declared outputs, in order. Empty when no output clause was given.
    pub outputs: Vec<Param>,
}

impl MethodSignature {
    /// Parses a signature string.
    ///
    /// ```
    /// use viewcall_abi::MethodSignature;
    ///
    /// let sig = MethodSignature::parse("transfer(address to, uint256 amount)(bool)").unwrap();
    /// assert_eq!(sig.canonical(), "transfer(address,uint256)");
    /// assert_eq!(sig.outputs.len(), 1);
    /// ```
    pub fn parse(signature: &str) -> Result<Self, ParseError> {
        let s = strip_quotes(signature.trim()).trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        check_balanced(s)?;

        // an optional leading `function` keyword
        let s = s
            .strip_prefix("function")
            .filter(|rest| rest.starts_with(char::is_whitespace))
            .map(str::trim_start)
            .unwrap_or(s);

        let open = s.find('(').ok_or_else(|| ParseError::MissingParameters(s.to_string()))?;
        let name = s[..open].trim();
        if !is_identifier(name) {
            return Err(ParseError::InvalidName(name.to_string()));
        }

        let inputs_range = find_balanced_encapsulator(&s[open..], ('(', ')'))
            .map_err(|_| ParseError::Unbalanced(s.to_string()))?;
        let inputs = parse_params(&s[open + inputs_range.start..open + inputs_range.end])?;

        let mut rest = s[open + inputs_range.end + 1..].trim_start();
        loop {
            let word_len = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
                .unwrap_or(rest.len());
            if word_len == 0 {
                break;
            }
            if !MODIFIER_KEYWORDS.contains(&&rest[..word_len]) {
                return Err(ParseError::TrailingInput(rest.to_string()));
            }
            rest = rest[word_len..].trim_start();
        }

        let outputs = if rest.is_empty() {
            Vec::new()
        } else if rest.starts_with('(') {
            let outputs_range = find_balanced_encapsulator(rest, ('(', ')'))
                .map_err(|_| ParseError::Unbalanced(s.to_string()))?;
            let trailing = rest[outputs_range.end + 1..].trim();
            if !trailing.is_empty() {
                return Err(ParseError::TrailingInput(trailing.to_string()));
            }
            parse_params(&rest[outputs_range])?
        } else {
            return Err(ParseError::TrailingInput(rest.to_string()));
        };

        let parsed = Self { name: name.to_string(), inputs, outputs };
        debug!("parsed signature '{}' as {}", signature, parsed.canonical());

        Ok(parsed)
    }

    /// The canonical form hashed for the selector: `name(type1,type2)`, labels dropped.
    pub fn canonical(&self) -> String {
        format!(
            "{}({})",
            self.name,
            self.inputs.iter().map(Param::canonical_type).collect::<Vec<_>>().join(",")
        )
    }

    /// The first four bytes of `keccak256(canonical())`.
    pub fn selector(&self) -> Selector {
        Selector::from_slice(&keccak256(self.canonical().as_bytes())[..4])
    }

    /// The declared input types, in order.
    pub fn input_types(&self) -> Vec<DynSolType> {
        self.inputs.iter().map(|param| param.ty.clone()).collect()
    }

    /// The declared output types, in order.
    pub fn output_types(&self) -> Vec<DynSolType> {
        self.outputs.iter().map(|param| param.ty.clone()).collect()
    }

    /// Converts the signature into a JSON ABI function entry with `view` mutability.
    pub fn to_function(&self) -> Function {
        Function {
            name: self.name.clone(),
            inputs: self.inputs.iter().map(Param::to_json_param).collect(),
            outputs: self.outputs.iter().map(Param::to_json_param).collect(),
            state_mutability: StateMutability::View,
        }
    }
}

impl FromStr for MethodSignature {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, join_labelled(&self.inputs))?;
        if !self.outputs.is_empty() {
            write!(f, "({})", join_labelled(&self.outputs))?;
        }
        Ok(())
    }
}

/// Formats `ty` the way it is hashed for a selector. Tuples are written as `(T1,T2)` whatever
/// their arity, so a one-member tuple is `(T)` rather than `(T,)`.
fn canonical_type_name(ty: &DynSolType) -> String {
    match ty {
        DynSolType::Tuple(members) => {
            format!("({})", members.iter().map(canonical_type_name).collect::<Vec<_>>().join(","))
        }
        DynSolType::Array(inner) => format!("{}[]", canonical_type_name(inner)),
        DynSolType::FixedArray(inner, size) => format!("{}[{size}]", canonical_type_name(inner)),
        _ => ty.to_string(),
    }
}

fn join_labelled(params: &[Param]) -> String {
    params.iter().map(Param::to_string).collect::<Vec<_>>().join(", ")
}

/// `[A-Za-z_$][A-Za-z0-9_$]*`
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$') &&
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Rejects any signature whose parentheses or brackets do not pair up.
fn check_balanced(s: &str) -> Result<(), ParseError> {
    let mut stack = Vec::new();
    for c in s.chars() {
        match c {
            '(' | '[' => stack.push(c),
            ')' | ']' => {
                let expected = if c == ')' { '(' } else { '[' };
                if stack.pop() != Some(expected) {
                    return Err(ParseError::Unbalanced(s.to_string()));
                }
            }
            _ => {}
        }
    }
    if !stack.is_empty() {
        return Err(ParseError::Unbalanced(s.to_string()));
    }
    Ok(())
}

/// Splits a parameter list on the commas at nesting depth zero.
fn split_top_level(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&list[start..]);
    parts
}

fn parse_params(list: &str) -> Result<Vec<Param>, ParseError> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }

    let params = split_top_level(list)
        .into_iter()
        .enumerate()
        .map(|(i, part)| match part.trim() {
            "" => Err(ParseError::EmptyParam(i)),
            part => parse_param(part),
        })
        .collect::<Result<Vec<_>, _>>()?;

    // labels key the decoded values, so they must be unique within one list
    let mut seen = HashSet::new();
    for name in params.iter().filter_map(|param| param.name.as_deref()) {
        if !seen.insert(name) {
            return Err(ParseError::DuplicateLabel(name.to_string()));
        }
    }

    Ok(params)
}

fn parse_param(part: &str) -> Result<Param, ParseError> {
    let (type_token, rest) = if part.starts_with('(') || part.starts_with("tuple(") {
        let range = find_balanced_encapsulator(part, ('(', ')'))
            .map_err(|_| ParseError::Unbalanced(part.to_string()))?;
        let after = range.end + 1;
        let suffix_len = part[after..]
            .find(|c: char| !(c == '[' || c == ']' || c.is_ascii_digit()))
            .unwrap_or(part.len() - after);
        part.split_at(after + suffix_len)
    } else {
        part.split_at(part.find(char::is_whitespace).unwrap_or(part.len()))
    };

    let mut words = rest.split_whitespace().filter(|word| !DATA_LOCATIONS.contains(word));
    let label = words.next();

    let (ty, components) = match parse_type(type_token) {
        Ok(parsed) => parsed,
        // `amount uint256` rather than an unknown type
        Err(ParseError::UnknownType(_)) if label.is_some_and(|l| parse_type(l).is_ok()) => {
            return Err(ParseError::Misordered(part.to_string()))
        }
        Err(e) => return Err(e),
    };

    if let Some(extra) = words.next() {
        return Err(ParseError::MalformedParam {
            param: part.to_string(),
            reason: format!("unexpected token '{extra}' after the label"),
        });
    }
    if let Some(label) = label {
        if !is_identifier(label) {
            return Err(ParseError::MalformedParam {
                param: part.to_string(),
                reason: format!("'{label}' is not a valid identifier"),
            });
        }
    }

    Ok(Param { ty, name: label.map(str::to_string), components })
}

/// Resolves a single type token, which may be an inline tuple with labelled components.
fn parse_type(token: &str) -> Result<(DynSolType, Vec<Param>), ParseError> {
    if token.starts_with('(') {
        let range = find_balanced_encapsulator(token, ('(', ')'))
            .map_err(|_| ParseError::Unbalanced(token.to_string()))?;
        let components = parse_params(&token[range.clone()])?;
        let tuple = DynSolType::Tuple(components.iter().map(|c| c.ty.clone()).collect());
        let ty = apply_array_suffix(tuple, &token[range.end + 1..], token)?;
        return Ok((ty, components));
    }

    // `tuple(...)` is accepted as a spelling of an inline tuple
    if let Some(inner) = token.strip_prefix("tuple") {
        if inner.starts_with('(') {
            return parse_type(inner);
        }
    }

    let (base, suffix) = token.split_at(token.find('[').unwrap_or(token.len()));
    if !is_elementary(base) {
        return Err(ParseError::UnknownType(token.to_string()));
    }
    let base = DynSolType::parse(base).map_err(|_| ParseError::UnknownType(token.to_string()))?;
    let ty = apply_array_suffix(base, suffix, token)?;

    Ok((ty, Vec::new()))
}

/// Wraps `ty` in the array dimensions written in `suffix`, e.g. `[2][]`.
fn apply_array_suffix(
    mut ty: DynSolType,
    mut suffix: &str,
    token: &str,
) -> Result<DynSolType, ParseError> {
    while !suffix.is_empty() {
        let close = match suffix.strip_prefix('[').and_then(|s| s.find(']')) {
            Some(close) => close + 1,
            None => return Err(ParseError::UnknownType(token.to_string())),
        };
        let size = &suffix[1..close];
        ty = if size.is_empty() {
            DynSolType::Array(Box::new(ty))
        } else {
            match size.parse::<usize>() {
                Ok(n) if n > 0 && size.bytes().all(|b| b.is_ascii_digit()) => {
                    DynSolType::FixedArray(Box::new(ty), n)
                }
                _ => return Err(ParseError::UnknownType(token.to_string())),
            }
        };
        suffix = &suffix[close + 1..];
    }
    Ok(ty)
}

/// Whether `name` is an elementary ABI type (no array dimensions).
fn is_elementary(name: &str) -> bool {
    match name {
        "address" | "bool" | "string" | "bytes" | "function" => true,
        _ => {
            if let Some(bits) = name.strip_prefix("uint").or_else(|| name.strip_prefix("int")) {
                bits.is_empty() || within(bits, |n| n % 8 == 0 && (8..=256).contains(&n))
            } else if let Some(size) = name.strip_prefix("bytes") {
                within(size, |n| (1..=32).contains(&n))
            } else {
                false
            }
        }
    }
}

/// Whether `digits` is a plain decimal number (no sign, no leading zero) accepted by `valid`.
fn within(digits: &str, valid: fn(usize) -> bool) -> bool {
    !digits.is_empty() &&
        !digits.starts_with('0') &&
        digits.bytes().all(|b| b.is_ascii_digit()) &&
        digits.parse::<usize>().is_ok_and(valid)
}

/// Peels array dimensions off `ty`, returning the innermost type and the suffix as written.
fn split_array_suffix(ty: &DynSolType) -> (&DynSolType, String) {
    match ty {
        DynSolType::Array(inner) => {
            let (base, suffix) = split_array_suffix(inner);
            (base, format!("{suffix}[]"))
        }
        DynSolType::FixedArray(inner, size) => {
            let (base, suffix) = split_array_suffix(inner);
            (base, format!("{suffix}[{size}]"))
        }
        _ => (ty, String::new()),
    }
}

fn base_type(ty: &DynSolType) -> &DynSolType {
    split_array_suffix(ty).0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector_hex(signature: &str) -> String {
        let sig = MethodSignature::parse(signature).expect("valid signature");
        viewcall_common::utils::strings::encode_hex(sig.selector().as_slice())
    }

    #[test]
    fn test_parse_simple_signature() {
        let sig = MethodSignature::parse("transfer(address to, uint256 amount)").expect("parses");
        assert_eq!(sig.name, "transfer");
        assert_eq!(sig.inputs.len(), 2);
        assert_eq!(sig.inputs[0].ty, DynSolType::Address);
        assert_eq!(sig.inputs[0].name.as_deref(), Some("to"));
        assert_eq!(sig.inputs[1].ty, DynSolType::Uint(256));
        assert!(sig.outputs.is_empty());
    }

    #[test]
    fn test_parse_with_outputs() {
        let sig = MethodSignature::parse("balanceOf(address owner)(uint256 balance)").expect("parses");
        assert_eq!(sig.outputs.len(), 1);
        assert_eq!(sig.outputs[0].ty, DynSolType::Uint(256));
        assert_eq!(sig.outputs[0].name.as_deref(), Some("balance"));
    }

    #[test]
    fn test_parse_no_inputs() {
        let sig = MethodSignature::parse("totalSupply()").expect("parses");
        assert!(sig.inputs.is_empty());
        assert_eq!(sig.canonical(), "totalSupply()");
    }

    #[test]
    fn test_parse_leniencies() {
        let expected = MethodSignature::parse("balanceOf(address owner)(uint256)").expect("parses");

        for signature in [
            "'balanceOf(address owner)(uint256)'",
            "\"balanceOf(address owner)(uint256)\"",
            "  balanceOf(address owner)(uint256)  ",
            "function balanceOf(address owner)(uint256)",
            "balanceOf(address owner) returns (uint256)",
            "function balanceOf(address owner) external view returns (uint256)",
            "balanceOf(address memory owner)(uint256)",
        ] {
            assert_eq!(MethodSignature::parse(signature).as_ref(), Ok(&expected), "{signature}");
        }
    }

    #[test]
    fn test_parse_function_prefixed_name() {
        let sig = MethodSignature::parse("functionCount()").expect("parses");
        assert_eq!(sig.name, "functionCount");
    }

    #[test]
    fn test_parse_short_int_aliases() {
        let sig = MethodSignature::parse("f(uint a, int b)").expect("parses");
        assert_eq!(sig.canonical(), "f(uint256,int256)");
    }

    #[test]
    fn test_parse_arrays() {
        let sig = MethodSignature::parse("f(uint256[] a, bytes32[2] b, uint8[2][] c)").expect("parses");
        assert_eq!(sig.inputs[0].ty, DynSolType::Array(Box::new(DynSolType::Uint(256))));
        assert_eq!(sig.inputs[1].ty, DynSolType::FixedArray(Box::new(DynSolType::FixedBytes(32)), 2));
        assert_eq!(sig.canonical(), "f(uint256[],bytes32[2],uint8[2][])");
    }

    #[test]
    fn test_parse_inline_tuple() {
        let sig = MethodSignature::parse("foo(uint256 id, (address to, bool ok)[] orders)")
            .expect("parses");
        let orders = &sig.inputs[1];
        assert_eq!(orders.name.as_deref(), Some("orders"));
        assert_eq!(orders.components.len(), 2);
        assert_eq!(orders.components[0].name.as_deref(), Some("to"));
        assert_eq!(sig.canonical(), "foo(uint256,(address,bool)[])");
    }

    #[test]
    fn test_parse_tuple_keyword() {
        let sig = MethodSignature::parse("f(tuple(uint256,bool) t)").expect("parses");
        assert_eq!(sig.canonical(), "f((uint256,bool))");
    }

    #[test]
    fn test_selectors() {
        assert_eq!(selector_hex("transfer(address,uint256)"), "a9059cbb");
        assert_eq!(selector_hex("balanceOf(address)"), "70a08231");
        assert_eq!(selector_hex("totalSupply()"), "18160ddd");
        assert_eq!(selector_hex("f(uint256)"), "b3de648b");
        assert_eq!(selector_hex("call_this_view_function(uint256 arg1)"), "1e4f420d");
        assert_eq!(selector_hex("gsr_query(uint256 arg1)"), "7651cb49");
        assert_eq!(selector_hex("foo(uint256,(address,bool)[])"), "3605523e");
        assert_eq!(selector_hex("h((uint256 a, string b) pair, bytes32[2] roots)"), "d1a784eb");
        assert_eq!(selector_hex("f((bool) x)"), "19cabbc5");
        assert_eq!(selector_hex("g((uint256)[] xs)"), "37a1f93d");
    }

    #[test]
    fn test_canonical_single_member_tuple() {
        let sig = MethodSignature::parse("f((bool) x)").expect("parses");
        assert_eq!(sig.canonical(), "f((bool))");
        assert_eq!(sig.inputs[0].canonical_type(), "(bool)");

        let sig = MethodSignature::parse("g((uint256)[] xs, ((address))[2] nested)").expect("parses");
        assert_eq!(sig.canonical(), "g((uint256)[],((address))[2])");
        assert_eq!(sig.to_function().signature(), sig.canonical());
    }

    #[test]
    fn test_selector_matches_json_abi() {
        for signature in [
            "transfer(address to, uint256 amount)(bool)",
            "foo(uint256 id, (address to, bool ok)[] orders)",
            "h((uint256 a, string b) pair, bytes32[2] roots)",
            "totalSupply()(uint256)",
            "f((bool) x)",
            "g((uint256)[] xs)",
        ] {
            let sig = MethodSignature::parse(signature).expect("parses");
            assert_eq!(sig.to_function().selector(), sig.selector(), "{signature}");
        }
    }

    #[test]
    fn test_to_function() {
        let function =
            MethodSignature::parse("foo(uint256 id, (address to, bool ok)[] orders)(bool)")
                .expect("parses")
                .to_function();
        assert_eq!(function.name, "foo");
        assert_eq!(function.state_mutability, StateMutability::View);
        assert_eq!(function.inputs[1].ty, "tuple[]");
        assert_eq!(function.inputs[1].components[1].name, "ok");
        assert_eq!(function.outputs[0].name, "");
    }

    #[test]
    fn test_display_round_trip() {
        for signature in [
            "transfer(address to, uint256 amount)(bool)",
            "totalSupply()(uint256)",
            "f(uint256, string label)",
            "foo(uint256 id, (address to, bool)[2][] orders)((uint256 a, bytes b))",
            "function g(bytes32[2] memory roots) view returns (uint8[] out)",
        ] {
            let parsed = MethodSignature::parse(signature).expect("parses");
            let displayed = parsed.to_string();
            let reparsed = MethodSignature::parse(&displayed).expect("display form parses");
            assert_eq!(parsed, reparsed, "{displayed}");
            assert_eq!(reparsed.to_string(), displayed);
            assert_eq!(reparsed.canonical(), parsed.canonical());
        }
    }

    #[test]
    fn test_display_format() {
        let sig = MethodSignature::parse("function f( uint256  a ,string)returns(bool ok)")
            .expect("parses");
        assert_eq!(sig.to_string(), "f(uint256 a, string)(bool ok)");
    }

    #[test]
    fn test_from_str() {
        let sig: MethodSignature = "f(uint256)".parse().expect("parses");
        assert_eq!(sig.name, "f");
    }

    #[test]
    fn test_param_new_builds_components() {
        let ty = DynSolType::Array(Box::new(DynSolType::Tuple(vec![
            DynSolType::Address,
            DynSolType::Bool,
        ])));
        let param = Param::new(ty, Some("orders".to_string()));
        assert_eq!(param.components.len(), 2);
        assert_eq!(param.to_string(), "(address, bool)[] orders");
        assert_eq!(param.key(3), "orders");
        assert_eq!(Param::new(DynSolType::Bool, None).key(3), "3");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(MethodSignature::parse(""), Err(ParseError::Empty));
        assert_eq!(MethodSignature::parse("''"), Err(ParseError::Empty));
        assert!(matches!(
            MethodSignature::parse("transfer"),
            Err(ParseError::MissingParameters(_))
        ));
        assert!(matches!(MethodSignature::parse("1f(uint256)"), Err(ParseError::InvalidName(_))));
        assert!(matches!(MethodSignature::parse("(uint256)"), Err(ParseError::InvalidName(_))));
        assert!(matches!(
            MethodSignature::parse("my func(uint256)"),
            Err(ParseError::InvalidName(_))
        ));
        assert!(matches!(MethodSignature::parse("f(uint256"), Err(ParseError::Unbalanced(_))));
        assert!(matches!(MethodSignature::parse("f(uint256))"), Err(ParseError::Unbalanced(_))));
        assert!(matches!(MethodSignature::parse("f(uint256[)"), Err(ParseError::Unbalanced(_))));
        assert!(matches!(MethodSignature::parse("f(uint7)"), Err(ParseError::UnknownType(_))));
        assert!(matches!(MethodSignature::parse("f(uint264)"), Err(ParseError::UnknownType(_))));
        assert!(matches!(MethodSignature::parse("f(bytes33)"), Err(ParseError::UnknownType(_))));
        assert!(matches!(MethodSignature::parse("f(bytes0)"), Err(ParseError::UnknownType(_))));
        assert!(matches!(MethodSignature::parse("f(foo)"), Err(ParseError::UnknownType(_))));
        assert!(matches!(MethodSignature::parse("f(uint256[x])"), Err(ParseError::UnknownType(_))));
        assert!(matches!(MethodSignature::parse("f(uint256[0])"), Err(ParseError::UnknownType(_))));
        assert!(matches!(
            MethodSignature::parse("f(amount uint256)"),
            Err(ParseError::Misordered(_))
        ));
        assert!(matches!(
            MethodSignature::parse("f(uint256 a b)"),
            Err(ParseError::MalformedParam { .. })
        ));
        assert!(matches!(
            MethodSignature::parse("f(uint256 1a)"),
            Err(ParseError::MalformedParam { .. })
        ));
        assert_eq!(MethodSignature::parse("f(uint256,,bool)"), Err(ParseError::EmptyParam(1)));
        assert_eq!(MethodSignature::parse("f(uint256,)"), Err(ParseError::EmptyParam(1)));
        assert!(matches!(
            MethodSignature::parse("f(uint256)(bool) extra"),
            Err(ParseError::TrailingInput(_))
        ));
        assert!(matches!(MethodSignature::parse("f(uint256) nonpayable"), Err(ParseError::TrailingInput(_))));
        assert!(matches!(MethodSignature::parse("f(uint256) ;"), Err(ParseError::TrailingInput(_))));
    }

    #[test]
    fn test_parse_duplicate_labels() {
        assert_eq!(
            MethodSignature::parse("f(uint256 a, uint256 a)"),
            Err(ParseError::DuplicateLabel("a".to_string()))
        );
        assert_eq!(
            MethodSignature::parse("f(uint256)(bool ok, (uint8 x, bytes x) ok2)"),
            Err(ParseError::DuplicateLabel("x".to_string()))
        );

        // inputs, outputs and tuple members are separate namespaces, unlabeled slots never clash
        let sig = MethodSignature::parse("f(uint256 a, (uint8 a, bool) t, bool, bool)(uint256 a)")
            .expect("parses");
        assert_eq!(sig.inputs.len(), 4);
    }

    #[test]
    fn test_canonical_is_idempotent() {
        let sig = MethodSignature::parse("h((uint256 a, string b) pair, bytes32[2] roots)")
            .expect("parses");
        let canonical = sig.canonical();
        assert_eq!(canonical, "h((uint256,string),bytes32[2])");
        let reparsed = MethodSignature::parse(&canonical).expect("canonical form parses");
        assert_eq!(reparsed.canonical(), canonical);
    }
}
