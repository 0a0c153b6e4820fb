//! Catalog writer matching the authoring tool's JSON layout.
//!
//! Output is 2-space indented pretty JSON with a space on both sides of every
//! key/value colon (`"key" : value`). Only separators between an object key
//! and its value are affected; string contents are written exactly as
//! `serde_json` escapes them. Object keys come out in the order they were
//! read (see [`KeyOrder`](super::KeyOrder)).

use std::io;

use serde::ser::SerializeMap;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use super::{Catalog, CatalogError, Entry, Localization};

/// `PrettyFormatter` with `" : "` as the object key/value separator.
pub struct CatalogFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl CatalogFormatter<'_> {
    pub fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Default for CatalogFormatter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CatalogFormatter<'_> {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b" : ")
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }
}

/// Render any serializable value in the catalog layout.
pub fn to_catalog_string<T>(value: &T) -> Result<String, CatalogError>
where
    T: ?Sized + Serialize,
{
    let mut buffer = Vec::with_capacity(4096);
    let mut serializer = Serializer::with_formatter(&mut buffer, CatalogFormatter::new());
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|err| CatalogError::InvalidShape(err.to_string()))
}

/// Render a catalog to the text written back to disk.
///
/// No trailing newline is added; callers that read a file ending in one
/// append it themselves.
pub fn serialize(catalog: &Catalog) -> Result<String, CatalogError> {
    to_catalog_string(catalog)
}

impl Serialize for Catalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut present = vec!["sourceLanguage", "strings"];
        if self.version.is_some() {
            present.push("version");
        }
        present.extend(self.extra.keys().map(String::as_str));

        let keys = self.key_order.arrange(present);
        let mut map = serializer.serialize_map(Some(keys.len()))?;
        for key in keys {
            match key {
                "sourceLanguage" => map.serialize_entry(key, &self.source_language)?,
                "strings" => map.serialize_entry(key, &self.strings)?,
                "version" => map.serialize_entry(key, &self.version)?,
                _ => map.serialize_entry(key, &self.extra.get(key))?,
            }
        }
        map.end()
    }
}

impl Serialize for Entry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut present = Vec::new();
        for (key, is_set) in [
            ("comment", self.comment.is_some()),
            ("extractionState", self.extraction_state.is_some()),
            ("localizations", self.localizations.is_some()),
            ("shouldTranslate", self.should_translate.is_some()),
        ] {
            if is_set {
                present.push(key);
            }
        }
        present.extend(self.extra.keys().map(String::as_str));

        let keys = self.key_order.arrange(present);
        let mut map = serializer.serialize_map(Some(keys.len()))?;
        for key in keys {
            match key {
                "comment" => map.serialize_entry(key, &self.comment)?,
                "extractionState" => map.serialize_entry(key, &self.extraction_state)?,
                "localizations" => map.serialize_entry(key, &self.localizations)?,
                "shouldTranslate" => map.serialize_entry(key, &self.should_translate)?,
                _ => map.serialize_entry(key, &self.extra.get(key))?,
            }
        }
        map.end()
    }
}

impl Serialize for Localization {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut present = Vec::new();
        if self.string_unit.is_some() {
            present.push("stringUnit");
        }
        present.extend(self.extra.keys().map(String::as_str));

        let keys = self.key_order.arrange(present);
        let mut map = serializer.serialize_map(Some(keys.len()))?;
        for key in keys {
            match key {
                "stringUnit" => map.serialize_entry(key, &self.string_unit)?,
                _ => map.serialize_entry(key, &self.extra.get(key))?,
            }
        }
        map.end()
    }
}
