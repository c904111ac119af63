//! JSON snapshots of an event space.
//!
//! A snapshot captures the three counters losslessly: every member in its
//! insertion order together with its occurrence count. Restoring a snapshot
//! reproduces identical query results and identical enumeration order. The
//! encoding is plain JSON over the crate's serde model; there is no
//! versioning or compression.

use std::fs::File;
use std::hash::Hash;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::SnapshotError;
use crate::event_space::EventSpace;

impl<C, F> EventSpace<C, F>
where
    C: Eq + Hash + Serialize,
    F: Eq + Hash + Serialize,
{
    /// Encodes the event space as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if a category or feature value fails
    /// to serialize.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Writes the event space as JSON to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] on serialization failure, which also
    /// covers I/O failures of the underlying writer.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), SnapshotError> {
        Ok(serde_json::to_writer(writer, self)?)
    }

    /// Saves a snapshot to a file at `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Io`] if the file cannot be created and
    /// [`SnapshotError::Json`] on serialization failure.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), SnapshotError> {
        let file = File::create(path)?;
        self.to_writer(BufWriter::new(file))
    }
}

impl<C, F> EventSpace<C, F>
where
    C: Eq + Hash + Clone + DeserializeOwned,
    F: Eq + Hash + Clone + DeserializeOwned,
{
    /// Decodes an event space from a JSON string produced by
    /// [`EventSpace::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] on malformed input, including
    /// counters with duplicate members or zero counts.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads an event space from JSON in `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] on malformed input or read failure.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Loads a snapshot from a file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Io`] if the file cannot be opened and
    /// [`SnapshotError::Json`] on malformed contents.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use crate::EventSpace;

    #[test]
    fn test_json_round_trip_preserves_queries() {
        let mut space = EventSpace::new();
        space.observe("spam".to_string(), vec!["buy".to_string(), "now".to_string()]);
        space.observe("ham".to_string(), vec!["meeting".to_string()]);

        let json = space.to_json().unwrap();
        let restored: EventSpace<String, String> = EventSpace::from_json(&json).unwrap();

        assert_eq!(restored, space);
        assert_eq!(
            restored.p_given(&"now".to_string(), &"spam".to_string()),
            space.p_given(&"now".to_string(), &"spam".to_string())
        );
    }

    #[test]
    fn test_snapshot_has_three_keyed_counters() {
        let mut space = EventSpace::new();
        space.observe("x", ["a"]);

        let value: serde_json::Value = serde_json::from_str(&space.to_json().unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("categories"));
        assert!(object.contains_key("features"));
        assert!(object.contains_key("joint"));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result = EventSpace::<String, String>::from_json("{not json");
        assert!(result.is_err());
    }
}
