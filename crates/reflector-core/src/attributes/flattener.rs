//! Expansion of nested request objects into dotted, case-folded key paths.

use std::collections::{BTreeMap, HashMap};

use serde_json::value::RawValue;

use super::errors::{DecodeError, FlattenLimits};
use super::fold_case;

/// A JSON object whose member values are still unparsed text.
type RawObject = HashMap<String, Box<RawValue>>;

pub(crate) struct Flattener {
    limits: FlattenLimits,
    entries: BTreeMap<String, String>,
}

impl Flattener {
    pub(crate) fn new(limits: FlattenLimits) -> Self {
        Self {
            limits: FlattenLimits::with_max_depth(limits.max_depth),
            entries: BTreeMap::new(),
        }
    }

    /// Decodes the top-level object and expands every nested object below it.
    pub(crate) fn run(mut self, raw: &[u8]) -> Result<BTreeMap<String, String>, DecodeError> {
        let event: RawObject = serde_json::from_slice(raw)?;
        self.expand(None, event, 1)?;
        Ok(self.entries)
    }

    fn expand(
        &mut self,
        parent: Option<&str>,
        object: RawObject,
        depth: usize,
    ) -> Result<(), DecodeError> {
        if depth > self.limits.max_depth {
            return Err(DecodeError::NestingTooDeep {
                depth,
                max: self.limits.max_depth,
            });
        }

        for (key, value) in object {
            let path = match parent {
                Some(parent) => format!("{parent}.{}", fold_case(&key)),
                None => fold_case(&key),
            };

            match probe_object(&value) {
                Some(inner) => self.expand(Some(&path), inner, depth + 1)?,
                None => {
                    tracing::trace!(path = %path, "leaf");
                    self.entries.insert(path, value.get().to_owned());
                }
            }
        }
        Ok(())
    }
}

/// `Some` when the fragment decodes as an object (including `{}`), `None` for every
/// other shape. A fragment that fails to decode is a leaf, not an error.
fn probe_object(value: &RawValue) -> Option<RawObject> {
    serde_json::from_str(value.get()).ok()
}
