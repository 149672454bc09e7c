// Path parsing over a configurable delimiter.
// Read paths support one array-access form per segment: `base[2]`,
// `base[-1]`, `base[key:value]`. Anything bracket-shaped that does not
// match that grammar stays a literal key. Write paths are plain key
// chains; brackets are never interpreted on the write side.

/// Index specifier of an array-access segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSpec {
    /// Positional index; negative values count from the end (`-1` is last).
    Position(i64),
    /// First element whose `key` field equals `value` (string equality).
    Match { key: String, value: String },
}

/// One delimiter-separated unit of a read path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index { base: String, index: IndexSpec },
}

/// Split a read path into segments, dropping empty ones so leading,
/// trailing and doubled delimiters are tolerated.
pub fn parse_path(path: &str, delimiter: &str) -> Vec<Segment> {
    path.split(delimiter)
        .filter(|s| !s.is_empty())
        .map(parse_segment)
        .collect()
}

/// Split a write path into plain keys. Array-access syntax is not
/// supported when writing, so bracket text survives as a literal key.
pub fn split_keys(path: &str, delimiter: &str) -> Vec<String> {
    path.split(delimiter)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_segment(raw: &str) -> Segment {
    match try_index_segment(raw) {
        Some(segment) => segment,
        None => Segment::Key(raw.to_string()),
    }
}

fn try_index_segment(raw: &str) -> Option<Segment> {
    let rest = raw.strip_suffix(']')?;
    let (base, index) = rest.split_once('[')?;
    if base.is_empty() || index.is_empty() || base.contains(['[', ']']) || index.contains(['[', ']']) {
        return None;
    }
    let index = if let Ok(n) = index.parse::<i64>() {
        IndexSpec::Position(n)
    } else {
        let (key, value) = index.split_once(':')?;
        if key.is_empty() || value.is_empty() {
            return None;
        }
        IndexSpec::Match {
            key: key.to_string(),
            value: value.to_string(),
        }
    };
    Some(Segment::Index {
        base: base.to_string(),
        index,
    })
}
