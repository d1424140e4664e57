//! JSON encoding for figure records and display config.
//!
//! The rendered script embeds JSON on a single line with `", "` between
//! elements and `": "` after keys, so literal assertions like
//! `"x": [1, 2, 3]` hold against the output. serde_json's compact and
//! pretty formatters both produce different spacing, hence the custom
//! [`Formatter`] here.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::error::{PlotError, PlotResult};

/// Single-line formatter with spaced separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if !first {
            writer.write_all(b", ")?;
        }
        Ok(())
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if !first {
            writer.write_all(b", ")?;
        }
        Ok(())
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serializes `value` to a single-line JSON string with spaced separators.
///
/// Key order follows the record's insertion order, so repeated calls over
/// the same value produce identical text.
pub fn to_json_string<T>(value: &T) -> PlotResult<String>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf)
        .map_err(|err| PlotError::InvalidData(format!("serialized json was not utf-8: {err}")))
}
