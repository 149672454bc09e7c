// Generic read/write access over serde_json::Value trees.
// Highlights:
// - `read_path`: resolve a parsed path against a source value; any missing
//   intermediate short-circuits to `None`, type misuse is an `Error`.
// - `write_path`: assign a value under a chain of keys in a result map,
//   installing a fresh intermediate object at every non-last key (the last
//   write to any node wins, including replacing an earlier sub-map).
use serde_json::{Map, Value};

use crate::error::Error;
use crate::path::{IndexSpec, Segment};

/// Resolve `segments` against `source`, left to right.
///
/// Returns `Ok(None)` as soon as any step finds nothing: a missing key, an
/// out-of-range index, an unmatched predicate, or descending through an
/// explicit `null`. Reading a key out of a scalar or indexing a non-array
/// is an error, not absence.
pub fn read_path<'a>(source: &'a Value, segments: &[Segment]) -> Result<Option<&'a Value>, Error> {
    let mut current = source;
    for segment in segments {
        let next = match segment {
            Segment::Key(key) => lookup(current, key)?,
            Segment::Index { base, index } => match lookup(current, base)? {
                Some(array) if !array.is_null() => index_into(array, base, index)?,
                _ => None,
            },
        };
        match next {
            Some(value) => current = value,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}

/// Write `value` under `keys` in `root`, creating intermediate objects.
///
/// An empty key chain shallow-merges an object value into `root` itself.
/// Every non-last key installs a fresh empty object before descending, so
/// repeated writes under a shared prefix reset the shared container —
/// within one mapping pass the last write wins at every level.
pub fn write_path(root: &mut Map<String, Value>, keys: &[String], value: Value) -> Result<(), Error> {
    if keys.is_empty() {
        let Value::Object(entries) = value else {
            return Err(Error::RootMergeExpectsObject);
        };
        root.extend(entries);
        return Ok(());
    }
    write_into(root, keys, value);
    Ok(())
}

fn write_into(map: &mut Map<String, Value>, keys: &[String], value: Value) {
    match keys {
        [] => {}
        [last] => {
            map.insert(last.clone(), value);
        }
        [head, rest @ ..] => {
            let slot = map.entry(head.clone()).or_insert(Value::Null);
            *slot = Value::Object(Map::new());
            if let Value::Object(inner) = slot {
                write_into(inner, rest, value);
            }
        }
    }
}

fn lookup<'a>(current: &'a Value, key: &str) -> Result<Option<&'a Value>, Error> {
    match current {
        Value::Object(map) => Ok(map.get(key)),
        Value::Null => Ok(None),
        _ => Err(Error::KeyOnNonObject {
            key: key.to_string(),
        }),
    }
}

fn index_into<'a>(
    array: &'a Value,
    base: &str,
    index: &IndexSpec,
) -> Result<Option<&'a Value>, Error> {
    let items = array.as_array().ok_or_else(|| Error::IndexOnNonArray {
        base: base.to_string(),
    })?;
    match index {
        IndexSpec::Position(n) => Ok(element_at(items, *n)),
        IndexSpec::Match { key, value } => {
            for item in items {
                if let Some(field) = lookup(item, key)?
                    && field.as_str() == Some(value.as_str())
                {
                    return Ok(Some(item));
                }
            }
            Ok(None)
        }
    }
}

fn element_at(items: &[Value], position: i64) -> Option<&Value> {
    let index = if position < 0 {
        items.len().checked_sub(position.unsigned_abs() as usize)?
    } else {
        position as usize
    };
    items.get(index)
}
