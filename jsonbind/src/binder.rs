//! Binds parsed JSON onto typed values through their descriptors.
//!
//! The facade default-constructs the target, then [`bind`] fills it in place:
//! each container entry is materialized through the descriptor's accessors
//! (struct members, pushed list items, map entries, array elements) and bound
//! recursively against the member or element descriptor.

use jsonbind_core::{
    ArrayDef, DescribeFn, EnumDef, Erased, Kind, ListDef, MapDef, ScalarType, StructDef,
    TypeDescriptor,
};
use jsonbind_value::Value;

use crate::coerce::{self, CoerceError};
use crate::error::{JsonError, JsonErrorKind, Result};
use crate::lexer::{Token, TokenKind};
use crate::parser::Parser;
use crate::source::Source;

/// Binds the value starting at `token` into `slot`, described by `descriptor`.
pub(crate) fn bind<S: Source>(
    parser: &mut Parser<S>,
    slot: &mut Erased,
    descriptor: &'static TypeDescriptor,
    token: Token,
) -> Result<()> {
    if !token.kind.starts_value() {
        return Err(token.unexpected());
    }
    if token.kind == TokenKind::Null {
        return bind_null(slot, descriptor, token.offset);
    }

    match &descriptor.kind {
        Kind::Scalar(scalar) => bind_scalar(parser, slot, descriptor, *scalar, token),
        Kind::String => {
            if token.kind != TokenKind::String {
                return Err(JsonError::new(JsonErrorKind::BadString, token.offset));
            }
            let text = parser.take_text();
            store(slot, text, descriptor, token.offset)
        }
        Kind::Enum(def) => bind_enum(parser, slot, descriptor, def, token),
        Kind::Array(def) => bind_array(parser, slot, descriptor, def, token),
        Kind::List(def) => bind_list(parser, slot, descriptor, def, token),
        Kind::Map(def) => bind_map(parser, slot, descriptor, def, token),
        Kind::Struct(def) => bind_struct(parser, slot, descriptor, def, token),
        Kind::Option(def) => {
            let inner = resolve(def.inner, token.offset)?;
            let slot = (def.insert_some)(slot).ok_or_else(|| mismatch(descriptor, token.offset))?;
            bind(parser, slot, inner, token)
        }
        Kind::Pointer(def) => {
            let pointee = resolve(def.pointee, token.offset)?;
            let slot = (def.get)(slot).ok_or_else(|| mismatch(descriptor, token.offset))?;
            bind(parser, slot, pointee, token)
        }
        Kind::Untyped => {
            let value = parser.parse_value(token)?;
            store(slot, value, descriptor, token.offset)
        }
    }
}

fn bind_null(slot: &mut Erased, descriptor: &'static TypeDescriptor, offset: usize) -> Result<()> {
    let kind = match &descriptor.kind {
        Kind::Option(def) => {
            return if (def.set_none)(slot) {
                Ok(())
            } else {
                Err(mismatch(descriptor, offset))
            };
        }
        Kind::Untyped => return store(slot, Value::Null, descriptor, offset),
        Kind::Pointer(def) => {
            let pointee = resolve(def.pointee, offset)?;
            let slot = (def.get)(slot).ok_or_else(|| mismatch(descriptor, offset))?;
            return bind_null(slot, pointee, offset);
        }
        // Reference-like targets keep their current value.
        _ if descriptor.accepts_null() => return Ok(()),
        Kind::Scalar(ScalarType::Bool) => JsonErrorKind::BadBoolean,
        Kind::Scalar(scalar) if scalar.is_numeric() => JsonErrorKind::BadNumber {
            target: descriptor.type_name,
        },
        Kind::Scalar(_) => JsonErrorKind::BadString,
        _ => JsonErrorKind::BadEnumValue,
    };
    Err(JsonError::new(kind, offset))
}

fn bind_scalar<S: Source>(
    parser: &mut Parser<S>,
    slot: &mut Erased,
    descriptor: &'static TypeDescriptor,
    scalar: ScalarType,
    token: Token,
) -> Result<()> {
    let offset = token.offset;
    match (scalar, token.kind) {
        (ScalarType::Bool, TokenKind::True | TokenKind::False) => {
            store(slot, token.kind == TokenKind::True, descriptor, offset)
        }
        (ScalarType::Bool, _) => Err(JsonError::new(JsonErrorKind::BadBoolean, offset)),
        (ScalarType::Char, TokenKind::String) => {
            let mut chars = parser.text().chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => store(slot, c, descriptor, offset),
                _ => Err(JsonError::new(JsonErrorKind::BadString, offset)),
            }
        }
        (ScalarType::Char, _) => Err(JsonError::new(JsonErrorKind::BadString, offset)),
        (_, TokenKind::Number) if scalar.is_numeric() => {
            match coerce::store_number(slot, scalar, parser.text()) {
                Ok(()) => Ok(()),
                Err(CoerceError::Invalid) => Err(bad_number(descriptor, offset)),
                Err(CoerceError::SlotMismatch) => Err(mismatch(descriptor, offset)),
            }
        }
        _ => Err(bad_number(descriptor, offset)),
    }
}

fn bind_enum<S: Source>(
    parser: &mut Parser<S>,
    slot: &mut Erased,
    descriptor: &'static TypeDescriptor,
    def: &EnumDef,
    token: Token,
) -> Result<()> {
    let index = match token.kind {
        TokenKind::String => def.variant_by_name(parser.text()),
        TokenKind::Number => parser
            .text()
            .parse::<i64>()
            .ok()
            .and_then(|discriminant| def.variant_by_discriminant(discriminant)),
        _ => None,
    };
    let index = index.ok_or(JsonError::new(JsonErrorKind::BadEnumValue, token.offset))?;
    if def.assign(slot, index) {
        Ok(())
    } else {
        Err(mismatch(descriptor, token.offset))
    }
}

fn bind_struct<S: Source>(
    parser: &mut Parser<S>,
    slot: &mut Erased,
    descriptor: &'static TypeDescriptor,
    def: &StructDef,
    token: Token,
) -> Result<()> {
    if token.kind != TokenKind::BeginObject {
        return Err(JsonError::new(
            JsonErrorKind::BadObject {
                target: descriptor.type_name,
            },
            token.offset,
        ));
    }
    parser.enter(token.offset)?;
    let matching = parser.options().member_matching;
    let mut first = true;
    while parser.next_member(first)?.is_some() {
        first = false;
        // The key text is overwritten by the value token, so resolve it first.
        let field = def.field(parser.text(), matching);
        if field.is_none() {
            trace!(
                key = parser.text(),
                type_name = descriptor.type_name,
                "skipping unknown member"
            );
        }
        let value = parser.value_token()?;
        match field {
            Some(field) => {
                let member_descriptor = resolve(field.descriptor, value.offset)?;
                let member = field
                    .get(slot)
                    .ok_or_else(|| mismatch(descriptor, token.offset))?;
                bind(parser, member, member_descriptor, value)?;
            }
            None => parser.skip_value(value)?,
        }
    }
    parser.leave();
    Ok(())
}

fn bind_list<S: Source>(
    parser: &mut Parser<S>,
    slot: &mut Erased,
    descriptor: &'static TypeDescriptor,
    def: &ListDef,
    token: Token,
) -> Result<()> {
    if token.kind != TokenKind::BeginArray {
        return Err(bad_array(descriptor, token.offset));
    }
    let element = resolve(def.element, token.offset)?;
    if !(def.clear)(slot) {
        return Err(mismatch(descriptor, token.offset));
    }
    parser.enter(token.offset)?;
    let mut first = true;
    while let Some(item) = parser.next_element(first)? {
        first = false;
        let child = (def.push)(slot).ok_or_else(|| mismatch(descriptor, token.offset))?;
        bind(parser, child, element, item)?;
    }
    parser.leave();
    Ok(())
}

fn bind_array<S: Source>(
    parser: &mut Parser<S>,
    slot: &mut Erased,
    descriptor: &'static TypeDescriptor,
    def: &ArrayDef,
    token: Token,
) -> Result<()> {
    if token.kind != TokenKind::BeginArray {
        return Err(bad_array(descriptor, token.offset));
    }
    let element = resolve(def.element, token.offset)?;
    let bad_length = || {
        JsonError::new(
            JsonErrorKind::BadArrayLength { expected: def.len },
            token.offset,
        )
    };
    parser.enter(token.offset)?;
    let mut index = 0;
    while let Some(item) = parser.next_element(index == 0)? {
        if index == def.len {
            return Err(bad_length());
        }
        let child = (def.get)(slot, index).ok_or_else(|| mismatch(descriptor, token.offset))?;
        bind(parser, child, element, item)?;
        index += 1;
    }
    parser.leave();
    if index != def.len {
        return Err(bad_length());
    }
    Ok(())
}

fn bind_map<S: Source>(
    parser: &mut Parser<S>,
    slot: &mut Erased,
    descriptor: &'static TypeDescriptor,
    def: &MapDef,
    token: Token,
) -> Result<()> {
    if token.kind != TokenKind::BeginObject {
        return Err(JsonError::new(
            JsonErrorKind::BadObject {
                target: descriptor.type_name,
            },
            token.offset,
        ));
    }
    let value_descriptor = resolve(def.value, token.offset)?;
    if !(def.clear)(slot) {
        return Err(mismatch(descriptor, token.offset));
    }
    parser.enter(token.offset)?;
    let mut first = true;
    while parser.next_member(first)?.is_some() {
        first = false;
        let key = parser.take_text();
        let value = parser.value_token()?;
        let child = (def.insert)(slot, key).ok_or_else(|| mismatch(descriptor, token.offset))?;
        bind(parser, child, value_descriptor, value)?;
    }
    parser.leave();
    Ok(())
}

fn resolve(describe: DescribeFn, offset: usize) -> Result<&'static TypeDescriptor> {
    describe().map_err(|err| JsonError::new(JsonErrorKind::Descriptor(err), offset))
}

fn store<T: 'static>(
    slot: &mut Erased,
    value: T,
    descriptor: &'static TypeDescriptor,
    offset: usize,
) -> Result<()> {
    match slot.downcast_mut::<T>() {
        Some(slot) => {
            *slot = value;
            Ok(())
        }
        None => Err(mismatch(descriptor, offset)),
    }
}

fn bad_number(descriptor: &'static TypeDescriptor, offset: usize) -> JsonError {
    JsonError::new(
        JsonErrorKind::BadNumber {
            target: descriptor.type_name,
        },
        offset,
    )
}

fn bad_array(descriptor: &'static TypeDescriptor, offset: usize) -> JsonError {
    JsonError::new(
        JsonErrorKind::BadArray {
            target: descriptor.type_name,
        },
        offset,
    )
}

fn mismatch(descriptor: &'static TypeDescriptor, offset: usize) -> JsonError {
    JsonError::new(
        JsonErrorKind::SlotMismatch {
            target: descriptor.type_name,
        },
        offset,
    )
}
