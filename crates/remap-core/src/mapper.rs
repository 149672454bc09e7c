// Remapper: one source, one result accumulator, one set of options.
// Entry points:
// - `map` / `map_with_options`: one-shot source + mapping → result.
// - `map_with`: callback form, yields the Remapper for multi-step use.
// - `Remap`: extension trait so any `serde_json::Value` can be remapped
//   in place of the free functions.
use serde_json::{Map, Value};

use crate::access::{read_path, write_path};
use crate::error::Error;
use crate::mapping::{Mapping, Options};
use crate::path::{parse_path, split_keys};

/// Remaps one borrowed source structure into an owned result map.
///
/// Values are read at each mapping entry's from-path, run through the
/// default substitution and the optional transform, and written at the
/// to-path. The accumulator grows across calls until [`into_value`]
/// hands it to the caller.
///
/// [`into_value`]: Remapper::into_value
pub struct Remapper<'a> {
    source: &'a Value,
    result: Map<String, Value>,
    options: Options,
}

impl<'a> Remapper<'a> {
    pub fn new(source: &'a Value) -> Self {
        Self::with_options(source, Options::default())
    }

    pub fn with_options(source: &'a Value, options: Options) -> Self {
        Self {
            source,
            result: Map::new(),
            options,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Apply every entry of `mapping` in order.
    pub fn apply(&mut self, mapping: &Mapping) -> Result<(), Error> {
        self.apply_with(mapping, Ok)
    }

    /// Apply every entry of `mapping`, passing each resolved value through
    /// `transform` before it is written. Default substitution happens
    /// first: an absent or `null` value is replaced by the mapping's
    /// default (when one is set) and the transform sees the substitute.
    pub fn apply_with<F>(&mut self, mapping: &Mapping, mut transform: F) -> Result<(), Error>
    where
        F: FnMut(Value) -> Result<Value, Error>,
    {
        for (from, to) in mapping.entries() {
            let mut value = self.get(from)?.unwrap_or(Value::Null);
            if value.is_null()
                && let Some(default) = mapping.default_value()
            {
                value = default.clone();
            }
            let value = transform(value)?;
            self.set(to, value)?;
        }
        Ok(())
    }

    /// Point read: resolve a single path against the source.
    pub fn get(&self, path: &str) -> Result<Option<Value>, Error> {
        let segments = parse_path(path, &self.options.delimiter);
        Ok(read_path(self.source, &segments)?.cloned())
    }

    /// Point write: assign a value at a single path of the result.
    pub fn set(&mut self, path: &str, value: Value) -> Result<(), Error> {
        let keys = split_keys(path, &self.options.delimiter);
        write_path(&mut self.result, &keys, value)
    }

    /// Remap every element of the array each entry resolves to through a
    /// fresh inner Remapper, preserving element order. `build` populates
    /// the inner instance; the collected results replace the array.
    pub fn map_each<F>(&mut self, mapping: &Mapping, mut build: F) -> Result<(), Error>
    where
        F: FnMut(&mut Remapper<'_>) -> Result<(), Error>,
    {
        let options = self.options.clone();
        self.apply_with(mapping, |value| {
            let Value::Array(items) = value else {
                return Err(Error::ExpectedArray);
            };
            let mut mapped = Vec::with_capacity(items.len());
            for item in &items {
                let mut inner = Remapper::with_options(item, options.clone());
                build(&mut inner)?;
                mapped.push(inner.into_value());
            }
            Ok(Value::Array(mapped))
        })
    }

    /// Remap the sub-structure each entry resolves to through a fresh
    /// inner Remapper populated by `build`.
    pub fn map_nested<F>(&mut self, mapping: &Mapping, mut build: F) -> Result<(), Error>
    where
        F: FnMut(&mut Remapper<'_>) -> Result<(), Error>,
    {
        let options = self.options.clone();
        self.apply_with(mapping, |value| {
            let mut inner = Remapper::with_options(&value, options.clone());
            build(&mut inner)?;
            Ok(inner.into_value())
        })
    }

    pub fn result(&self) -> &Map<String, Value> {
        &self.result
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.result)
    }
}

/// One-shot form: remap `source` through `mapping` with default options.
pub fn map(source: &Value, mapping: &Mapping) -> Result<Value, Error> {
    map_with_options(source, Options::default(), mapping)
}

pub fn map_with_options(source: &Value, options: Options, mapping: &Mapping) -> Result<Value, Error> {
    let mut mapper = Remapper::with_options(source, options);
    mapper.apply(mapping)?;
    Ok(mapper.into_value())
}

/// Callback form: yields the Remapper for any number of `apply`, `get`
/// and `set` calls before the accumulated result is returned.
pub fn map_with<F>(source: &Value, options: Options, build: F) -> Result<Value, Error>
where
    F: FnOnce(&mut Remapper<'_>) -> Result<(), Error>,
{
    let mut mapper = Remapper::with_options(source, options);
    build(&mut mapper)?;
    Ok(mapper.into_value())
}

/// Remapping as a method on the value being remapped.
pub trait Remap {
    fn remap(&self, mapping: &Mapping) -> Result<Value, Error>;

    fn remap_with<F>(&self, options: Options, build: F) -> Result<Value, Error>
    where
        F: FnOnce(&mut Remapper<'_>) -> Result<(), Error>;
}

impl Remap for Value {
    fn remap(&self, mapping: &Mapping) -> Result<Value, Error> {
        map(self, mapping)
    }

    fn remap_with<F>(&self, options: Options, build: F) -> Result<Value, Error>
    where
        F: FnOnce(&mut Remapper<'_>) -> Result<(), Error>,
    {
        map_with(self, options, build)
    }
}
