//! Full-registry export in canonical pretty-printed JSON.
//!
//! The output is an object keyed by the decimal event id in ascending
//! numeric order, indented by two spaces:
//!
//! ```text
//! {
//!   "1": {
//!     "id": 1,
//!     "name": "...",
//!     "subCategory": { "id": .., "ref": .., "category": { "id": .., "ref": .. } },
//!     "marketRefTypes": [ { "marketRefId": .., "marketRefName": .. } ],
//!     "completed": false
//!   }
//! }
//! ```
//!
//! Strings escape the HTML-sensitive characters `<`, `>`, `&`, `=` and `'`
//! (plus U+2028 and U+2029) as `\uXXXX`, matching existing dumps produced
//! by Gson with its default HTML-safe writer.
use std::collections::BTreeMap;
use std::io;
use std::sync::Arc;

use fixture_core::{Event, EventId};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

use crate::api::{RegistryError, Result};
use crate::repository::EventRepository;

/// Read-only exporter over a shared repository.
#[derive(Clone)]
pub struct DumpExporter {
    repository: Arc<dyn EventRepository>,
}

impl DumpExporter {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    /// Render the current repository contents.
    pub fn dump(&self) -> Result<String> {
        let snapshot = self.repository.snapshot()?;
        let json = render(&snapshot)?;
        tracing::debug!(events = snapshot.len(), bytes = json.len(), "rendered registry dump");
        Ok(json)
    }
}

/// Render a set of events in dump format. Later duplicates of an id win.
pub fn render(events: &[Arc<Event>]) -> Result<String> {
    let by_id: BTreeMap<EventId, &Event> = events
        .iter()
        .map(|event| (event.id(), event.as_ref()))
        .collect();

    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, HtmlSafeFormatter::default());
    by_id.serialize(&mut serializer).map_err(RegistryError::Dump)?;

    // Only ASCII escapes are added to serde_json's UTF-8 output.
    String::from_utf8(buffer)
        .map_err(|err| RegistryError::Dump(<serde_json::Error as serde::ser::Error>::custom(err)))
}

/// Two-space pretty printer that also escapes HTML-sensitive characters.
#[derive(Default)]
struct HtmlSafeFormatter {
    pretty: PrettyFormatter<'static>,
}

fn html_escape(ch: char) -> Option<&'static str> {
    match ch {
        '<' => Some("\\u003c"),
        '>' => Some("\\u003e"),
        '&' => Some("\\u0026"),
        '=' => Some("\\u003d"),
        '\'' => Some("\\u0027"),
        '\u{2028}' => Some("\\u2028"),
        '\u{2029}' => Some("\\u2029"),
        _ => None,
    }
}

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if let Some(escape) = html_escape(ch) {
                writer.write_all(fragment[start..index].as_bytes())?;
                writer.write_all(escape.as_bytes())?;
                start = index + ch.len_utf8();
            }
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object_value(writer)
    }
}
