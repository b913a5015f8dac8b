// This file is part of charconv-utils.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`Notation`] and [`Error`].
//!
//! Both are represented as their lowercase names (`"general"`,
//! `"out_of_range"`, ...), so a notation can be picked from a config file and
//! a failed conversion can be reported in structured output.

// Crate imports
use crate::{error::Error, notation::Notation};

// Core imports
use core::fmt;

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

const ERROR_NAMES: &[&str] = &["invalid_format", "out_of_range"];
const NOTATION_NAMES: &[&str] = &["fixed", "scientific", "hex", "general"];

impl Serialize for Notation {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

struct NotationVisitor;

impl de::Visitor<'_> for NotationVisitor {
    type Value = Notation;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a notation name (fixed, scientific, hex or general)")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Notation::from_name(v).ok_or_else(|| de::Error::unknown_variant(v, NOTATION_NAMES))
    }
}

impl<'de> Deserialize<'de> for Notation {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_str(NotationVisitor)
    }
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

struct ErrorVisitor;

impl de::Visitor<'_> for ErrorVisitor {
    type Value = Error;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a conversion error name")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v {
            "invalid_format" => Ok(Error::InvalidFormat),
            "out_of_range" => Ok(Error::OutOfRange),
            _ => Err(de::Error::unknown_variant(v, ERROR_NAMES)),
        }
    }
}

impl<'de> Deserialize<'de> for Error {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_str(ErrorVisitor)
    }
}
